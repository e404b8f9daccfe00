//! Class Sorter - student pairing and class distribution
//!
//! This library pairs students by their stated preferences, honors or
//! overrides teacher restrictions depending on the precedence mode, and
//! distributes everyone into balanced classes. The heuristic is greedy
//! and deterministic: identical inputs always give identical classes.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use crate::core::{sort_students, ClassSorter, RelationshipGraph};
pub use models::{
    ClassGroup, PrecedenceMode, SortingOptions, SortingResult, SortingStats, StudentPreference,
    TeacherRestriction,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_exports() {
        let prefs = vec![StudentPreference::new("A", "B")];
        let result = sort_students(&prefs, &[], PrecedenceMode::Student, &[], None);
        assert_eq!(result.stats.total_students, 2);
    }
}
