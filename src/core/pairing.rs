use std::collections::{HashMap, HashSet};
use crate::core::graph::RelationshipGraph;
use crate::models::PrecedenceMode;

/// Symmetric one-to-one partner assignment
///
/// Pairs are kept in the order they were formed, initiator first, so the
/// distributor can place them in a repeatable order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Pairing {
    partners: HashMap<String, String>,
    pairs: Vec<(String, String)>,
}

impl Pairing {
    fn insert(&mut self, initiator: &str, partner: &str) {
        self.partners.insert(initiator.to_string(), partner.to_string());
        self.partners.insert(partner.to_string(), initiator.to_string());
        self.pairs.push((initiator.to_string(), partner.to_string()));
    }

    pub fn partner_of(&self, name: &str) -> Option<&str> {
        self.partners.get(name).map(String::as_str)
    }

    #[inline]
    pub fn is_assigned(&self, name: &str) -> bool {
        self.partners.contains_key(name)
    }

    /// Pairs in formation order
    pub fn pairs(&self) -> &[(String, String)] {
        &self.pairs
    }

    /// Number of pairs
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

/// Whether a restriction stops `a` and `b` from being paired
///
/// Only teacher precedence ever blocks a pair.
#[inline]
pub fn restriction_blocks(
    graph: &RelationshipGraph,
    a: &str,
    b: &str,
    precedence: PrecedenceMode,
) -> bool {
    precedence == PrecedenceMode::Teacher && graph.is_restricted(a, b)
}

/// Resolve partners in three passes: prioritized, mutual, then greedy
///
/// Each pass skips students that an earlier pass already paired and walks
/// students in graph order (prioritized students in the order given).
/// Students left without a partner stay single; that is not an error.
pub fn find_pairs(
    graph: &RelationshipGraph,
    precedence: PrecedenceMode,
    prioritized: &[String],
) -> Pairing {
    let mut pairing = Pairing::default();

    // Stage 1: prioritized students get the first turn
    let mut seen = HashSet::new();
    for student in prioritized.iter().filter(|s| seen.insert(s.as_str())) {
        try_pair(&mut pairing, graph, student, precedence, false);
    }
    let after_priority = pairing.len();

    // Stage 2: mutual choices
    for student in graph.students() {
        try_pair(&mut pairing, graph, student, precedence, true);
    }
    let after_mutual = pairing.len();

    // Stage 3: whoever still has an available partner
    for student in graph.students() {
        try_pair(&mut pairing, graph, student, precedence, false);
    }

    tracing::debug!(
        "Pairing ({}): {} prioritized, {} mutual, {} one-sided",
        precedence,
        after_priority,
        after_mutual - after_priority,
        pairing.len() - after_mutual
    );

    pairing
}

fn try_pair(
    pairing: &mut Pairing,
    graph: &RelationshipGraph,
    student: &str,
    precedence: PrecedenceMode,
    mutual_only: bool,
) {
    if pairing.is_assigned(student) {
        return;
    }

    let wanted = match graph.wants(student) {
        Some(w) if w != student && !pairing.is_assigned(w) => w,
        _ => return,
    };

    if mutual_only && graph.wants(wanted) != Some(student) {
        return;
    }

    if restriction_blocks(graph, student, wanted, precedence) {
        return;
    }

    pairing.insert(student, wanted);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::graph::collect_students;
    use crate::models::{StudentPreference, TeacherRestriction};

    fn graph(prefs: &[(&str, &str)], rests: &[(&str, &str)]) -> RelationshipGraph {
        let prefs: Vec<_> = prefs.iter().map(|(a, b)| StudentPreference::new(*a, *b)).collect();
        let rests: Vec<_> = rests.iter().map(|(a, b)| TeacherRestriction::new(*a, *b)).collect();
        let students = collect_students(&prefs, &rests);
        RelationshipGraph::build(&students, &prefs, &rests)
    }

    fn names(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_mutual_pair_formed() {
        let g = graph(&[("A", "B"), ("B", "A")], &[]);
        let pairing = find_pairs(&g, PrecedenceMode::Student, &[]);

        assert_eq!(pairing.partner_of("A"), Some("B"));
        assert_eq!(pairing.partner_of("B"), Some("A"));
        assert_eq!(pairing.pairs(), &[("A".to_string(), "B".to_string())]);
    }

    #[test]
    fn test_mutual_beats_earlier_one_sided() {
        // C wants B first in input order, but B and D chose each other
        let g = graph(&[("C", "B"), ("B", "D"), ("D", "B")], &[]);
        let pairing = find_pairs(&g, PrecedenceMode::Student, &[]);

        assert_eq!(pairing.partner_of("B"), Some("D"));
        assert!(!pairing.is_assigned("C"));
    }

    #[test]
    fn test_greedy_first_come_first_served() {
        let g = graph(&[("A", "C"), ("B", "C")], &[]);
        let pairing = find_pairs(&g, PrecedenceMode::Student, &[]);

        assert_eq!(pairing.partner_of("C"), Some("A"));
        assert!(!pairing.is_assigned("B"));
    }

    #[test]
    fn test_teacher_mode_blocks_restricted_pairs() {
        let g = graph(&[("A", "B"), ("B", "A")], &[("A", "B")]);
        let pairing = find_pairs(&g, PrecedenceMode::Teacher, &names(&["A"]));

        assert!(pairing.is_empty());
    }

    #[test]
    fn test_teacher_mode_checks_reverse_direction() {
        let g = graph(&[("A", "B")], &[("B", "A")]);
        let pairing = find_pairs(&g, PrecedenceMode::Teacher, &[]);

        assert!(pairing.is_empty());
    }

    #[test]
    fn test_student_mode_pairs_through_restriction() {
        let g = graph(&[("A", "B")], &[("A", "B")]);
        let pairing = find_pairs(&g, PrecedenceMode::Student, &[]);

        assert_eq!(pairing.partner_of("A"), Some("B"));
    }

    #[test]
    fn test_priority_goes_first() {
        // Without priority, A would claim C in the greedy pass
        let g = graph(&[("A", "C"), ("B", "C")], &[]);
        let pairing = find_pairs(&g, PrecedenceMode::Student, &names(&["B"]));

        assert_eq!(pairing.partner_of("C"), Some("B"));
        assert!(!pairing.is_assigned("A"));
    }

    #[test]
    fn test_priority_partner_unavailable() {
        // B is claimed by the earlier prioritized C, so prioritized A stays single
        let g = graph(&[("A", "B"), ("C", "B")], &[]);
        let pairing = find_pairs(&g, PrecedenceMode::Student, &names(&["C", "A"]));

        assert_eq!(pairing.partner_of("B"), Some("C"));
        assert!(!pairing.is_assigned("A"));
    }

    #[test]
    fn test_unknown_prioritized_ignored() {
        let g = graph(&[("A", "B")], &[]);
        let pairing = find_pairs(&g, PrecedenceMode::Student, &names(&["Nobody"]));

        assert_eq!(pairing.len(), 1);
    }

    #[test]
    fn test_self_preference_never_paired() {
        let g = graph(&[("A", "A"), ("B", "C")], &[]);
        let pairing = find_pairs(&g, PrecedenceMode::Student, &names(&["A"]));

        assert!(!pairing.is_assigned("A"));
        assert_eq!(pairing.len(), 1);
    }
}
