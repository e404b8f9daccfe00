use serde::{Deserialize, Serialize};
use validator::Validate;
use crate::models::domain::{PrecedenceMode, StudentPreference, TeacherRestriction};

/// Request to sort already-decoded preferences and restrictions
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SortRequest {
    #[serde(default)]
    pub preferences: Vec<StudentPreference>,
    #[serde(default)]
    pub restrictions: Vec<TeacherRestriction>,
    #[serde(default)]
    pub precedence: Option<PrecedenceMode>,
    #[serde(default, alias = "prioritized_students", rename = "prioritizedStudents")]
    pub prioritized_students: Vec<String>,
    #[validate(range(min = 1))]
    #[serde(default, alias = "number_of_classes", rename = "numberOfClasses")]
    pub number_of_classes: Option<usize>,
}

/// Request to sort raw CSV uploads
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CsvSortRequest {
    #[validate(length(min = 1))]
    #[serde(alias = "preferences_csv", rename = "preferencesCsv")]
    pub preferences_csv: String,
    #[serde(default, alias = "restrictions_csv", rename = "restrictionsCsv")]
    pub restrictions_csv: Option<String>,
    #[serde(default)]
    pub precedence: Option<PrecedenceMode>,
    #[serde(default, alias = "prioritized_students", rename = "prioritizedStudents")]
    pub prioritized_students: Vec<String>,
    #[validate(range(min = 1))]
    #[serde(default, alias = "number_of_classes", rename = "numberOfClasses")]
    pub number_of_classes: Option<usize>,
}

/// Request to list the students named in a preferences upload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StudentListRequest {
    #[serde(alias = "preferences_csv", rename = "preferencesCsv")]
    pub preferences_csv: String,
    #[serde(default)]
    pub search: Option<String>,
}
