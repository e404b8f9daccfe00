use std::collections::HashSet;
use crate::core::graph::RelationshipGraph;
use crate::core::pairing::Pairing;
use crate::models::ClassGroup;

/// Target class size: `ceil(total / classes)`
#[inline]
pub fn target_size(total_students: usize, num_classes: usize) -> usize {
    let classes = num_classes.max(1);
    (total_students + classes - 1) / classes
}

/// Pack every student in the graph into `num_classes` classes
///
/// # Pipeline Stages
/// 1. Pairs go, both together, into the first class with room for two
///    under a cap of `target + 1`. A pair that fits nowhere is left for
///    stage 2 and its members are placed as singles.
/// 2. Singles, in graph order, go into the open class with the fewest
///    restriction conflicts; ties go to the lowest id.
pub fn distribute(
    graph: &RelationshipGraph,
    pairing: &Pairing,
    num_classes: usize,
) -> Vec<ClassGroup> {
    let num_classes = num_classes.max(1);
    let mut classes: Vec<ClassGroup> = (1..=num_classes).map(ClassGroup::new).collect();

    let target = target_size(graph.len(), num_classes);
    let capacity = target + 1;
    let mut assigned: HashSet<&str> = HashSet::with_capacity(graph.len());

    // Stage 1: keep pairs together
    let mut overflowed = 0usize;
    for (student, partner) in pairing.pairs() {
        match classes.iter_mut().find(|c| c.len() + 2 <= capacity) {
            Some(class) => {
                class.students.push(student.clone());
                class.students.push(partner.clone());
                assigned.insert(student);
                assigned.insert(partner);
            }
            None => overflowed += 1,
        }
    }

    if overflowed > 0 {
        tracing::debug!(
            "{} pair(s) found no class with room for two (target {}), placing as singles",
            overflowed,
            target
        );
    }

    // Stage 2: everyone else, least conflicted class first
    for student in graph.students() {
        if assigned.contains(student.as_str()) {
            continue;
        }

        let mut best = 0usize;
        let mut min_conflicts = usize::MAX;

        for (idx, class) in classes.iter().enumerate() {
            if class.len() >= capacity {
                continue;
            }

            let conflicts = count_conflicts(graph, student, class);
            if conflicts < min_conflicts {
                min_conflicts = conflicts;
                best = idx;
            }
        }

        classes[best].students.push(student.clone());
        assigned.insert(student);
    }

    classes
}

/// Number of occupants of `class` that share a restriction with `student`
#[inline]
pub fn count_conflicts(graph: &RelationshipGraph, student: &str, class: &ClassGroup) -> usize {
    class
        .students
        .iter()
        .filter(|mate| graph.is_restricted(student, mate))
        .count()
}
