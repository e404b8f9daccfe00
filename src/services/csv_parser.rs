use std::collections::BTreeSet;
use crate::models::{StudentPreference, TeacherRestriction};

/// Header keywords; a first line containing either is skipped
const HEADER_KEYWORDS: [&str; 2] = ["student", "name"];

/// Decode a preferences upload (`Chooser,Chosen`)
pub fn parse_preferences(content: &str) -> Vec<StudentPreference> {
    parse_pairs(content)
        .into_iter()
        .map(|(student, preferred_partner)| StudentPreference {
            student,
            preferred_partner,
        })
        .collect()
}

/// Decode a restrictions upload (`Student,Forbidden Partner`)
pub fn parse_restrictions(content: &str) -> Vec<TeacherRestriction> {
    parse_pairs(content)
        .into_iter()
        .map(|(student, restricted_partner)| TeacherRestriction {
            student,
            restricted_partner,
        })
        .collect()
}

/// Two-column delimited text to name pairs
///
/// A row uses `;` when it contains one, `,` otherwise. Fields are trimmed
/// and stripped of every double quote. Rows with fewer than two fields or
/// an empty name are skipped; this never fails.
fn parse_pairs(content: &str) -> Vec<(String, String)> {
    let mut lines = content.trim().split('\n').peekable();

    if let Some(first) = lines.peek() {
        let lower = first.to_lowercase();
        if HEADER_KEYWORDS.iter().any(|k| lower.contains(k)) {
            lines.next();
        }
    }

    lines
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .filter_map(|line| {
            let delimiter = if line.contains(';') { ';' } else { ',' };
            let mut parts = line.split(delimiter);
            let first = clean_field(parts.next()?);
            let second = clean_field(parts.next()?);

            if first.is_empty() || second.is_empty() {
                None
            } else {
                Some((first, second))
            }
        })
        .collect()
}

#[inline]
fn clean_field(field: &str) -> String {
    field.trim().replace('"', "")
}

/// Every name in the preferences, deduplicated and sorted
pub fn all_students(preferences: &[StudentPreference]) -> Vec<String> {
    preferences
        .iter()
        .flat_map(|p| [p.student.clone(), p.preferred_partner.clone()])
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Case-insensitive substring filter over student names
pub fn filter_students(students: &[String], query: &str) -> Vec<String> {
    let needle = query.to_lowercase();
    students
        .iter()
        .filter(|s| s.to_lowercase().contains(&needle))
        .cloned()
        .collect()
}
