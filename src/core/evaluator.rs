use std::collections::HashMap;
use crate::models::{
    ClassGroup, PrecedenceMode, SortingResult, SortingStats, StudentPreference, SuccessfulPairing,
    TeacherRestriction, UnsuccessfulPairing, ViolatedRestriction,
};

/// Weight of the favored side in the overall score
const FAVORED_WEIGHT: f64 = 0.7;
/// Weight of the other side in the overall score
const OTHER_WEIGHT: f64 = 0.3;

/// Judge final class placement against the submitted preferences and restrictions
///
/// Membership is re-derived from `classes`, not from the pairing the
/// sorter used, so violations introduced while packing singles are
/// reported too. A name with no class is never co-located with anyone.
pub fn evaluate(
    preferences: &[StudentPreference],
    restrictions: &[TeacherRestriction],
    classes: Vec<ClassGroup>,
    precedence: PrecedenceMode,
    total_students: usize,
) -> SortingResult {
    let (successful_pairings, unsuccessful_pairings, violated_restrictions) = {
        let class_of = class_index(&classes);
        let same_class = |a: &str, b: &str| match (class_of.get(a), class_of.get(b)) {
            (Some(x), Some(y)) => x == y,
            _ => false,
        };

        let mut successful = Vec::new();
        let mut unsuccessful = Vec::new();
        for pref in preferences {
            if same_class(&pref.student, &pref.preferred_partner) {
                successful.push(SuccessfulPairing {
                    student: pref.student.clone(),
                    partner: pref.preferred_partner.clone(),
                });
            } else {
                unsuccessful.push(UnsuccessfulPairing {
                    student: pref.student.clone(),
                    requested_partner: pref.preferred_partner.clone(),
                });
            }
        }

        let violated: Vec<ViolatedRestriction> = restrictions
            .iter()
            .filter(|r| same_class(&r.student, &r.restricted_partner))
            .map(|r| ViolatedRestriction {
                student: r.student.clone(),
                paired_with: r.restricted_partner.clone(),
            })
            .collect();

        (successful, unsuccessful, violated)
    };

    let successful_pct = successful_percentage(successful_pairings.len(), preferences.len());
    let satisfied_pct =
        satisfied_restrictions_percentage(violated_restrictions.len(), restrictions.len());

    let stats = SortingStats {
        total_students,
        number_of_classes: classes.len(),
        successful_pairings_count: successful_pairings.len(),
        successful_pairings_percentage: successful_pct,
        unsuccessful_pairings_count: unsuccessful_pairings.len(),
        unsuccessful_pairings_percentage: 100 - successful_pct,
        violated_restrictions_count: violated_restrictions.len(),
        satisfied_restrictions_percentage: satisfied_pct,
        overall_score: overall_score(successful_pct, satisfied_pct, precedence),
    };

    SortingResult {
        classes,
        successful_pairings,
        unsuccessful_pairings,
        violated_restrictions,
        stats,
    }
}

/// Name to class id; the first class listing a name wins
fn class_index(classes: &[ClassGroup]) -> HashMap<&str, usize> {
    let mut index = HashMap::new();
    for class in classes {
        for student in &class.students {
            index.entry(student.as_str()).or_insert(class.id);
        }
    }
    index
}

/// Share of satisfied preferences, 0 when there are none
pub fn successful_percentage(successful: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    round_percent(successful as f64 / total as f64 * 100.0)
}

/// Share of restrictions kept, 100 when there are none
pub fn satisfied_restrictions_percentage(violations: usize, total: usize) -> u32 {
    if total == 0 {
        return 100;
    }
    let kept = total.saturating_sub(violations);
    round_percent(kept as f64 / total as f64 * 100.0)
}

/// 70/30 blend favoring whichever side has precedence
pub fn overall_score(preference_pct: u32, restriction_pct: u32, precedence: PrecedenceMode) -> u32 {
    let (pref, rest) = (preference_pct as f64, restriction_pct as f64);
    let blended = match precedence {
        PrecedenceMode::Teacher => rest * FAVORED_WEIGHT + pref * OTHER_WEIGHT,
        PrecedenceMode::Student => pref * FAVORED_WEIGHT + rest * OTHER_WEIGHT,
    };
    round_percent(blended)
}

#[inline]
fn round_percent(value: f64) -> u32 {
    value.round().clamp(0.0, 100.0) as u32
}
