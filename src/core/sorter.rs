use crate::core::{
    distributor::distribute,
    evaluator::evaluate,
    graph::{collect_students, RelationshipGraph},
    pairing::find_pairs,
};
use crate::models::{PrecedenceMode, SortingOptions, SortingResult, StudentPreference, TeacherRestriction};

/// Main sorting orchestrator
///
/// # Pipeline Stages
/// 1. Relationship graph
/// 2. Pair matching (prioritized, mutual, greedy)
/// 3. Class distribution
/// 4. Evaluation and statistics
///
/// Holds no state between calls; every sort builds its own graph.
#[derive(Debug, Clone, Copy, Default)]
pub struct ClassSorter {
    options: SortingOptions,
}

impl ClassSorter {
    pub fn new(options: SortingOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> SortingOptions {
        self.options
    }

    /// Number of classes to use for `unique_students`
    ///
    /// An explicit non-zero request wins; otherwise one class per
    /// `students_per_class`, but never fewer than `min_classes`.
    pub fn resolve_class_count(&self, requested: Option<usize>, unique_students: usize) -> usize {
        match requested {
            Some(n) if n > 0 => n,
            _ => {
                let per_class = self.options.students_per_class.max(1);
                let needed = (unique_students + per_class - 1) / per_class;
                needed.max(self.options.min_classes).max(1)
            }
        }
    }

    /// Sort students into classes
    ///
    /// # Arguments
    /// * `preferences` - Chooser/chosen pairs, in upload order
    /// * `restrictions` - Student/forbidden-partner pairs
    /// * `precedence` - Which side wins a conflict
    /// * `prioritized` - Students whose preference is resolved first
    /// * `num_classes` - Explicit class count, or `None` for the default
    ///
    /// # Returns
    /// SortingResult with classes, pairing outcomes and statistics
    pub fn sort(
        &self,
        preferences: &[StudentPreference],
        restrictions: &[TeacherRestriction],
        precedence: PrecedenceMode,
        prioritized: &[String],
        num_classes: Option<usize>,
    ) -> SortingResult {
        let students = collect_students(preferences, restrictions);
        let class_count = self.resolve_class_count(num_classes, students.len());

        let graph = RelationshipGraph::build(&students, preferences, restrictions);
        let pairing = find_pairs(&graph, precedence, prioritized);
        let classes = distribute(&graph, &pairing, class_count);

        let result = evaluate(preferences, restrictions, classes, precedence, students.len());

        tracing::info!(
            "Sorted {} students into {} classes ({} mode): {}% pairings, {}% restrictions kept, score {}",
            result.stats.total_students,
            result.stats.number_of_classes,
            precedence,
            result.stats.successful_pairings_percentage,
            result.stats.satisfied_restrictions_percentage,
            result.stats.overall_score
        );

        result
    }
}

/// Sort with default options
pub fn sort_students(
    preferences: &[StudentPreference],
    restrictions: &[TeacherRestriction],
    precedence: PrecedenceMode,
    prioritized: &[String],
    num_classes: Option<usize>,
) -> SortingResult {
    ClassSorter::default().sort(preferences, restrictions, precedence, prioritized, num_classes)
}
