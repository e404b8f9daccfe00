// Core algorithm exports
pub mod distributor;
pub mod evaluator;
pub mod graph;
pub mod pairing;
pub mod sorter;

pub use distributor::{count_conflicts, distribute, target_size};
pub use evaluator::{evaluate, overall_score, satisfied_restrictions_percentage, successful_percentage};
pub use graph::{collect_students, Relations, RelationshipGraph};
pub use pairing::{find_pairs, restriction_blocks, Pairing};
pub use sorter::{sort_students, ClassSorter};
