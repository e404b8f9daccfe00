use std::collections::{HashMap, HashSet};
use crate::models::{StudentPreference, TeacherRestriction};

/// Per-student view of who they want, who wants them, and who they must avoid
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Relations {
    pub wants: Option<String>,
    pub wanted_by: Vec<String>,
    pub restricted: Vec<String>,
    pub restricted_by: Vec<String>,
}

/// Adjacency structure built once per sort
///
/// Keeps the student ordering it was built with; every pass of the
/// sorter iterates in that order, which is what makes a sort repeatable.
#[derive(Debug, Clone, Default)]
pub struct RelationshipGraph {
    students: Vec<String>,
    nodes: HashMap<String, Relations>,
}

impl RelationshipGraph {
    /// Build the graph for `students`
    ///
    /// Preferences and restrictions naming a student outside the set are
    /// dropped for that side only. A later preference from the same
    /// chooser overwrites an earlier one.
    pub fn build(
        students: &[String],
        preferences: &[StudentPreference],
        restrictions: &[TeacherRestriction],
    ) -> Self {
        let mut nodes: HashMap<String, Relations> = students
            .iter()
            .map(|s| (s.clone(), Relations::default()))
            .collect();

        for pref in preferences {
            if let Some(node) = nodes.get_mut(&pref.student) {
                node.wants = Some(pref.preferred_partner.clone());
            }
            if let Some(node) = nodes.get_mut(&pref.preferred_partner) {
                node.wanted_by.push(pref.student.clone());
            }
        }

        for rest in restrictions {
            if let Some(node) = nodes.get_mut(&rest.student) {
                node.restricted.push(rest.restricted_partner.clone());
            }
            if let Some(node) = nodes.get_mut(&rest.restricted_partner) {
                node.restricted_by.push(rest.student.clone());
            }
        }

        Self {
            students: students.to_vec(),
            nodes,
        }
    }

    /// Students in build order
    pub fn students(&self) -> &[String] {
        &self.students
    }

    pub fn len(&self) -> usize {
        self.students.len()
    }

    pub fn is_empty(&self) -> bool {
        self.students.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.nodes.contains_key(name)
    }

    pub fn get(&self, name: &str) -> Option<&Relations> {
        self.nodes.get(name)
    }

    /// The partner `name` asked for, if any
    pub fn wants(&self, name: &str) -> Option<&str> {
        self.nodes.get(name).and_then(|n| n.wants.as_deref())
    }

    /// True when either student recorded a restriction against the other
    ///
    /// Restrictions are stored in the direction they were given; symmetry
    /// is applied here, at lookup time.
    #[inline]
    pub fn is_restricted(&self, a: &str, b: &str) -> bool {
        let forward = self
            .nodes
            .get(a)
            .map_or(false, |n| n.restricted.iter().any(|r| r == b));
        let backward = self
            .nodes
            .get(b)
            .map_or(false, |n| n.restricted.iter().any(|r| r == a));

        forward || backward
    }
}

/// Ordered, deduplicated student names
///
/// Preference names come first in input order (chooser, then chosen),
/// followed by restriction names that no preference mentioned.
pub fn collect_students(
    preferences: &[StudentPreference],
    restrictions: &[TeacherRestriction],
) -> Vec<String> {
    let mut seen: HashSet<&str> = HashSet::new();
    let mut students = Vec::new();

    let names = preferences
        .iter()
        .flat_map(|p| [p.student.as_str(), p.preferred_partner.as_str()])
        .chain(
            restrictions
                .iter()
                .flat_map(|r| [r.student.as_str(), r.restricted_partner.as_str()]),
        );

    for name in names {
        if seen.insert(name) {
            students.push(name.to_string());
        }
    }

    students
}
