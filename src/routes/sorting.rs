use actix_web::{http::header, web, HttpResponse};
use validator::Validate;
use crate::config::SortingSettings;
use crate::core::ClassSorter;
use crate::models::{
    CsvSortRequest, HealthResponse, PrecedenceMode, SortRequest, SortResponse, SortingResult,
    StudentListRequest, StudentListResponse, StudentPreference, TeacherRestriction,
};
use crate::routes::error::ApiError;
use crate::services::{
    all_students, filter_students, parse_preferences, parse_restrictions, render, ExportKind,
    SampleKind,
};

/// Application state shared across all handlers
#[derive(Debug, Clone)]
pub struct AppState {
    pub sorter: ClassSorter,
    pub sorting: SortingSettings,
}

impl AppState {
    pub fn new(sorting: SortingSettings) -> Self {
        Self {
            sorter: ClassSorter::new(sorting.options()),
            sorting,
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(SortingSettings::default())
    }
}

/// Configure all sorting routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/health", web::get().to(health_check))
        .route("/sort", web::post().to(sort))
        .route("/sort/csv", web::post().to(sort_csv))
        .route("/students", web::post().to(list_students))
        .route("/export/{kind}", web::post().to(export))
        .route("/samples/{kind}", web::get().to(sample));
}

/// Health check endpoint
async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// Inputs for one sort, after decoding
struct SortJob {
    preferences: Vec<StudentPreference>,
    restrictions: Vec<TeacherRestriction>,
    precedence: Option<PrecedenceMode>,
    prioritized: Vec<String>,
    number_of_classes: Option<usize>,
}

/// Check caller preconditions and run the sort off the async workers
async fn run_sort(state: &AppState, job: SortJob) -> Result<SortingResult, ApiError> {
    if job.preferences.is_empty() {
        return Err(ApiError::EmptyPreferences);
    }

    if let Some(requested) = job.number_of_classes {
        if requested > state.sorting.max_classes {
            return Err(ApiError::TooManyClasses {
                requested,
                max: state.sorting.max_classes,
            });
        }
    }

    let precedence = job.precedence.unwrap_or(state.sorting.default_precedence);
    let sorter = state.sorter;

    let result = web::block(move || {
        sorter.sort(
            &job.preferences,
            &job.restrictions,
            precedence,
            &job.prioritized,
            job.number_of_classes,
        )
    })
    .await?;

    Ok(result)
}

fn sorted_response(result: SortingResult) -> HttpResponse {
    HttpResponse::Ok().json(SortResponse {
        sort_id: uuid::Uuid::new_v4().to_string(),
        result,
    })
}

/// Sort endpoint
///
/// POST /api/v1/sort
///
/// Request body:
/// ```json
/// {
///   "preferences": [{"student": "A", "preferredPartner": "B"}],
///   "restrictions": [{"student": "A", "restrictedPartner": "C"}],
///   "precedence": "student|teacher",
///   "prioritizedStudents": ["A"],
///   "numberOfClasses": 2
/// }
/// ```
async fn sort(
    state: web::Data<AppState>,
    req: web::Json<SortRequest>,
) -> Result<HttpResponse, ApiError> {
    req.validate()?;
    let req = req.into_inner();

    tracing::info!(
        "Sort request: {} preferences, {} restrictions, {} prioritized",
        req.preferences.len(),
        req.restrictions.len(),
        req.prioritized_students.len()
    );

    let result = run_sort(
        &state,
        SortJob {
            preferences: req.preferences,
            restrictions: req.restrictions,
            precedence: req.precedence,
            prioritized: req.prioritized_students,
            number_of_classes: req.number_of_classes,
        },
    )
    .await?;

    Ok(sorted_response(result))
}

/// Sort raw CSV uploads
///
/// POST /api/v1/sort/csv
async fn sort_csv(
    state: web::Data<AppState>,
    req: web::Json<CsvSortRequest>,
) -> Result<HttpResponse, ApiError> {
    req.validate()?;
    let req = req.into_inner();

    let preferences = parse_preferences(&req.preferences_csv);
    let restrictions = req
        .restrictions_csv
        .as_deref()
        .map(parse_restrictions)
        .unwrap_or_default();

    tracing::info!(
        "CSV sort request: {} preferences, {} restrictions decoded",
        preferences.len(),
        restrictions.len()
    );

    let result = run_sort(
        &state,
        SortJob {
            preferences,
            restrictions,
            precedence: req.precedence,
            prioritized: req.prioritized_students,
            number_of_classes: req.number_of_classes,
        },
    )
    .await?;

    Ok(sorted_response(result))
}

/// List students named in a preferences upload, for priority selection
///
/// POST /api/v1/students
async fn list_students(req: web::Json<StudentListRequest>) -> HttpResponse {
    let mut students = all_students(&parse_preferences(&req.preferences_csv));

    if let Some(query) = req.search.as_deref().filter(|q| !q.trim().is_empty()) {
        students = filter_students(&students, query.trim());
    }

    HttpResponse::Ok().json(StudentListResponse {
        total: students.len(),
        students,
    })
}

/// Download one view of a sorting result
///
/// POST /api/v1/export/{kind}
///
/// The body is the `result` object returned by a sort.
async fn export(
    kind: web::Path<String>,
    result: web::Json<SortingResult>,
) -> Result<HttpResponse, ApiError> {
    let kind: ExportKind = kind.parse()?;
    let body = render(kind, &result);

    tracing::debug!("Exporting {} ({} bytes)", kind.slug(), body.len());

    Ok(csv_attachment(kind.filename(), body))
}

/// Download an upload template
///
/// GET /api/v1/samples/{preferences|restrictions}
async fn sample(kind: web::Path<String>) -> Result<HttpResponse, ApiError> {
    let kind: SampleKind = kind.parse()?;
    Ok(csv_attachment(kind.filename(), kind.content().to_string()))
}

fn csv_attachment(filename: &str, body: String) -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/csv; charset=utf-8")
        .insert_header((
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"{}\"", filename),
        ))
        .body(body)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_state_uses_settings() {
        let state = AppState::new(SortingSettings {
            students_per_class: 10,
            min_classes: 1,
            ..SortingSettings::default()
        });

        assert_eq!(state.sorter.resolve_class_count(None, 21), 3);
    }

    #[actix_web::test]
    async fn test_run_sort_rejects_empty_preferences() {
        let state = AppState::default();
        let job = SortJob {
            preferences: vec![],
            restrictions: vec![],
            precedence: None,
            prioritized: vec![],
            number_of_classes: None,
        };

        let err = run_sort(&state, job).await.unwrap_err();
        assert!(matches!(err, ApiError::EmptyPreferences));
    }

    #[actix_web::test]
    async fn test_run_sort_uses_default_precedence() {
        let state = AppState::new(SortingSettings {
            default_precedence: PrecedenceMode::Teacher,
            ..SortingSettings::default()
        });
        let job = SortJob {
            preferences: vec![StudentPreference::new("A", "B")],
            restrictions: vec![TeacherRestriction::new("A", "B")],
            precedence: None,
            prioritized: vec![],
            number_of_classes: Some(2),
        };

        let result = run_sort(&state, job).await.unwrap();
        assert!(result.violated_restrictions.is_empty());
    }
}
