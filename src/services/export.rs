use std::fmt::Write as _;
use std::str::FromStr;
use thiserror::Error;
use crate::models::SortingResult;

/// Errors that can occur when exporting results
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Unknown export kind: {0}")]
    UnknownKind(String),
}

/// The downloadable views of a sorting result
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExportKind {
    ClassAssignments,
    ClassRosters,
    SuccessfulPairings,
    UnsuccessfulPairings,
    ViolatedRestrictions,
    FullReport,
}

impl ExportKind {
    pub const ALL: [ExportKind; 6] = [
        ExportKind::ClassAssignments,
        ExportKind::ClassRosters,
        ExportKind::SuccessfulPairings,
        ExportKind::UnsuccessfulPairings,
        ExportKind::ViolatedRestrictions,
        ExportKind::FullReport,
    ];

    /// Path segment used by the export route
    pub fn slug(&self) -> &'static str {
        match self {
            ExportKind::ClassAssignments => "class-assignments",
            ExportKind::ClassRosters => "class-rosters",
            ExportKind::SuccessfulPairings => "successful-pairings",
            ExportKind::UnsuccessfulPairings => "unsuccessful-pairings",
            ExportKind::ViolatedRestrictions => "violated-restrictions",
            ExportKind::FullReport => "full-report",
        }
    }

    pub fn filename(&self) -> &'static str {
        match self {
            ExportKind::ClassAssignments => "class_assignments.csv",
            ExportKind::ClassRosters => "class_rosters.csv",
            ExportKind::SuccessfulPairings => "successful_pairings.csv",
            ExportKind::UnsuccessfulPairings => "unsuccessful_pairings.csv",
            ExportKind::ViolatedRestrictions => "violated_restrictions.csv",
            ExportKind::FullReport => "full_sorting_report.csv",
        }
    }
}

impl FromStr for ExportKind {
    type Err = ExportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ExportKind::ALL
            .iter()
            .copied()
            .find(|k| k.slug() == s)
            .ok_or_else(|| ExportError::UnknownKind(s.to_string()))
    }
}

/// Render one view of `result` as delimited text
pub fn render(kind: ExportKind, result: &SortingResult) -> String {
    let mut out = String::new();
    match kind {
        ExportKind::ClassAssignments => write_assignments(&mut out, result),
        ExportKind::ClassRosters => write_rosters(&mut out, result),
        ExportKind::SuccessfulPairings => write_successful(&mut out, result),
        ExportKind::UnsuccessfulPairings => write_unsuccessful(&mut out, result),
        ExportKind::ViolatedRestrictions => write_violations(&mut out, result),
        ExportKind::FullReport => write_full_report(&mut out, result),
    }
    out
}

// Writing into a String cannot fail, so the fmt::Results below are ignored.

fn write_assignments(out: &mut String, result: &SortingResult) {
    out.push_str("Student,Class\n");
    for class in &result.classes {
        for student in &class.students {
            let _ = writeln!(out, "\"{}\",{}", student, class.id);
        }
    }
}

fn write_rosters(out: &mut String, result: &SortingResult) {
    out.push_str("Class,Students\n");
    for class in &result.classes {
        let _ = writeln!(out, "{},\"{}\"", class.id, class.students.join("; "));
    }
}

fn write_successful(out: &mut String, result: &SortingResult) {
    out.push_str("Student,Paired With\n");
    for pair in &result.successful_pairings {
        let _ = writeln!(out, "\"{}\",\"{}\"", pair.student, pair.partner);
    }
}

fn write_unsuccessful(out: &mut String, result: &SortingResult) {
    out.push_str("Student,Requested Partner\n");
    for pair in &result.unsuccessful_pairings {
        let _ = writeln!(out, "\"{}\",\"{}\"", pair.student, pair.requested_partner);
    }
}

fn write_violations(out: &mut String, result: &SortingResult) {
    out.push_str("Student,Placed With\n");
    for v in &result.violated_restrictions {
        let _ = writeln!(out, "\"{}\",\"{}\"", v.student, v.paired_with);
    }
}

fn write_full_report(out: &mut String, result: &SortingResult) {
    let stats = &result.stats;

    out.push_str("=== CLASS SORTING REPORT ===\n\n");

    out.push_str("STATISTICS\n");
    let _ = writeln!(out, "Total Students,{}", stats.total_students);
    let _ = writeln!(out, "Number of Classes,{}", stats.number_of_classes);
    let _ = writeln!(
        out,
        "Successful Pairings,{} ({}%)",
        stats.successful_pairings_count, stats.successful_pairings_percentage
    );
    let _ = writeln!(
        out,
        "Unsuccessful Pairings,{} ({}%)",
        stats.unsuccessful_pairings_count, stats.unsuccessful_pairings_percentage
    );
    let _ = writeln!(out, "Violated Restrictions,{}", stats.violated_restrictions_count);
    let _ = writeln!(out, "Restrictions Satisfied,{}%", stats.satisfied_restrictions_percentage);
    let _ = writeln!(out, "Overall Score,{}%\n", stats.overall_score);

    out.push_str("CLASS ASSIGNMENTS\n");
    write_assignments(out, result);
    out.push('\n');

    out.push_str("SUCCESSFUL PAIRINGS\n");
    write_successful(out, result);
    out.push('\n');

    out.push_str("UNSUCCESSFUL PAIRINGS\n");
    write_unsuccessful(out, result);
    out.push('\n');

    if !result.violated_restrictions.is_empty() {
        out.push_str("VIOLATED RESTRICTIONS\n");
        write_violations(out, result);
    }
}
