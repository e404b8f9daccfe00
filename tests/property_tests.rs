// Property tests for Class Sorter

use class_sorter::core::evaluate;
use class_sorter::models::{PrecedenceMode, StudentPreference, TeacherRestriction};
use class_sorter::sort_students;
use proptest::prelude::*;
use std::collections::HashMap;

fn name() -> impl Strategy<Value = String> {
    (0u8..30).prop_map(|i| format!("S{}", i))
}

fn precedence() -> impl Strategy<Value = PrecedenceMode> {
    prop_oneof![Just(PrecedenceMode::Student), Just(PrecedenceMode::Teacher)]
}

fn preferences() -> impl Strategy<Value = Vec<StudentPreference>> {
    prop::collection::vec((name(), name()), 0..40)
        .prop_map(|v| v.into_iter().map(|(a, b)| StudentPreference::new(a, b)).collect())
}

fn restrictions() -> impl Strategy<Value = Vec<TeacherRestriction>> {
    prop::collection::vec((name(), name()), 0..15)
        .prop_map(|v| v.into_iter().map(|(a, b)| TeacherRestriction::new(a, b)).collect())
}

proptest! {
    #[test]
    fn prop_every_student_placed_exactly_once(
        prefs in preferences(),
        rests in restrictions(),
        mode in precedence(),
        prioritized in prop::collection::vec(name(), 0..5),
        classes in prop::option::of(1usize..6),
    ) {
        let result = sort_students(&prefs, &rests, mode, &prioritized, classes);

        let mut seen: HashMap<&str, usize> = HashMap::new();
        for class in &result.classes {
            for student in &class.students {
                *seen.entry(student.as_str()).or_default() += 1;
            }
        }

        for p in &prefs {
            prop_assert_eq!(seen.get(p.student.as_str()), Some(&1));
            prop_assert_eq!(seen.get(p.preferred_partner.as_str()), Some(&1));
        }
        for r in &rests {
            prop_assert_eq!(seen.get(r.student.as_str()), Some(&1));
            prop_assert_eq!(seen.get(r.restricted_partner.as_str()), Some(&1));
        }
        prop_assert_eq!(seen.len(), result.stats.total_students);
    }

    #[test]
    fn prop_class_ids_and_sizes(
        prefs in preferences(),
        rests in restrictions(),
        mode in precedence(),
        classes in 1usize..6,
    ) {
        let result = sort_students(&prefs, &rests, mode, &[], Some(classes));
        let target = (result.stats.total_students + classes - 1) / classes;

        prop_assert_eq!(result.classes.len(), classes);
        for (idx, class) in result.classes.iter().enumerate() {
            prop_assert_eq!(class.id, idx + 1);
            prop_assert!(class.students.len() <= target + 1);
        }
    }

    #[test]
    fn prop_percentages_bounded(
        prefs in preferences(),
        rests in restrictions(),
        mode in precedence(),
    ) {
        let result = sort_students(&prefs, &rests, mode, &[], None);
        let stats = result.stats;

        prop_assert!(stats.successful_pairings_percentage <= 100);
        prop_assert!(stats.unsuccessful_pairings_percentage <= 100);
        prop_assert!(stats.satisfied_restrictions_percentage <= 100);
        prop_assert!(stats.overall_score <= 100);
        prop_assert_eq!(
            stats.successful_pairings_count + stats.unsuccessful_pairings_count,
            prefs.len()
        );
    }

    #[test]
    fn prop_evaluation_idempotent(
        prefs in preferences(),
        rests in restrictions(),
        mode in precedence(),
    ) {
        let first = sort_students(&prefs, &rests, mode, &[], None);
        let again = evaluate(&prefs, &rests, first.classes.clone(), mode, first.stats.total_students);

        prop_assert_eq!(first, again);
    }

    #[test]
    fn prop_mutual_unrestricted_pairs_share_class(
        a in 0u8..30,
        b in 0u8..30,
        prefs in preferences(),
        classes in 1usize..4,
    ) {
        prop_assume!(a != b);
        let (a, b) = (format!("S{}", a), format!("S{}", b));

        // Put the mutual pair first, and keep everyone else away from them
        let mut all = vec![
            StudentPreference::new(a.clone(), b.clone()),
            StudentPreference::new(b.clone(), a.clone()),
        ];
        all.extend(prefs.into_iter().filter(|p| {
            ![&a, &b].contains(&&p.student) && ![&a, &b].contains(&&p.preferred_partner)
        }));

        let result = sort_students(&all, &[], PrecedenceMode::Teacher, &[], Some(classes));

        prop_assert_eq!(result.class_of(&a), result.class_of(&b));
    }

    #[test]
    fn prop_deterministic(
        prefs in preferences(),
        rests in restrictions(),
        mode in precedence(),
        prioritized in prop::collection::vec(name(), 0..5),
    ) {
        let first = sort_students(&prefs, &rests, mode, &prioritized, None);
        let second = sort_students(&prefs, &rests, mode, &prioritized, None);

        prop_assert_eq!(first, second);
    }
}
