use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A student's stated wish to share a class with another student
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentPreference {
    pub student: String,
    #[serde(rename = "preferredPartner")]
    pub preferred_partner: String,
}

impl StudentPreference {
    pub fn new(student: impl Into<String>, preferred_partner: impl Into<String>) -> Self {
        Self {
            student: student.into(),
            preferred_partner: preferred_partner.into(),
        }
    }
}

/// A teacher's record that two students must not share a class
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeacherRestriction {
    pub student: String,
    #[serde(rename = "restrictedPartner")]
    pub restricted_partner: String,
}

impl TeacherRestriction {
    pub fn new(student: impl Into<String>, restricted_partner: impl Into<String>) -> Self {
        Self {
            student: student.into(),
            restricted_partner: restricted_partner.into(),
        }
    }
}

/// Which side wins when a preference collides with a restriction
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PrecedenceMode {
    /// Student preferences are honored even through a restriction
    #[default]
    Student,
    /// Restrictions are never broken to satisfy a preference
    Teacher,
}

impl PrecedenceMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            PrecedenceMode::Student => "student",
            PrecedenceMode::Teacher => "teacher",
        }
    }
}

impl fmt::Display for PrecedenceMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PrecedenceMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "student" => Ok(PrecedenceMode::Student),
            "teacher" => Ok(PrecedenceMode::Teacher),
            other => Err(format!("unknown precedence mode '{}', expected student or teacher", other)),
        }
    }
}

/// One output class
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassGroup {
    pub id: usize,
    pub students: Vec<String>,
}

impl ClassGroup {
    pub fn new(id: usize) -> Self {
        Self {
            id,
            students: Vec::new(),
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.students.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.students.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.students.iter().any(|s| s == name)
    }
}

/// A preference whose two students ended up in the same class
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuccessfulPairing {
    pub student: String,
    pub partner: String,
}

/// A preference whose two students ended up apart
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnsuccessfulPairing {
    pub student: String,
    #[serde(rename = "requestedPartner")]
    pub requested_partner: String,
}

/// A restriction whose two students ended up in the same class
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViolatedRestriction {
    pub student: String,
    #[serde(rename = "pairedWith")]
    pub paired_with: String,
}

/// Summary numbers for a sort; percentages are whole numbers in 0..=100
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SortingStats {
    pub total_students: usize,
    pub number_of_classes: usize,
    pub successful_pairings_count: usize,
    pub successful_pairings_percentage: u32,
    pub unsuccessful_pairings_count: usize,
    pub unsuccessful_pairings_percentage: u32,
    pub violated_restrictions_count: usize,
    pub satisfied_restrictions_percentage: u32,
    pub overall_score: u32,
}

/// Complete outcome of one sort
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SortingResult {
    pub classes: Vec<ClassGroup>,
    pub successful_pairings: Vec<SuccessfulPairing>,
    pub unsuccessful_pairings: Vec<UnsuccessfulPairing>,
    pub violated_restrictions: Vec<ViolatedRestriction>,
    pub stats: SortingStats,
}

impl SortingResult {
    /// Id of the class holding `name`, if any
    pub fn class_of(&self, name: &str) -> Option<usize> {
        self.classes.iter().find(|c| c.contains(name)).map(|c| c.id)
    }
}

/// Tuning for the class-count default
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortingOptions {
    pub students_per_class: usize,
    pub min_classes: usize,
}

impl Default for SortingOptions {
    fn default() -> Self {
        Self {
            students_per_class: 25,
            min_classes: 2,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_precedence_parse() {
        assert_eq!("Teacher".parse::<PrecedenceMode>(), Ok(PrecedenceMode::Teacher));
        assert_eq!(" student ".parse::<PrecedenceMode>(), Ok(PrecedenceMode::Student));
        assert!("admin".parse::<PrecedenceMode>().is_err());
    }

    #[test]
    fn test_precedence_serde_lowercase() {
        let json = serde_json::to_string(&PrecedenceMode::Teacher).unwrap();
        assert_eq!(json, "\"teacher\"");
        let mode: PrecedenceMode = serde_json::from_str("\"student\"").unwrap();
        assert_eq!(mode, PrecedenceMode::Student);
    }

    #[test]
    fn test_stats_camel_case() {
        let value = serde_json::to_value(SortingStats::default()).unwrap();
        assert!(value.get("successfulPairingsPercentage").is_some());
        assert!(value.get("overallScore").is_some());
    }
}
