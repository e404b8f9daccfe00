// Service exports
pub mod csv_parser;
pub mod export;
pub mod samples;

pub use csv_parser::{all_students, filter_students, parse_preferences, parse_restrictions};
pub use export::{render, ExportError, ExportKind};
pub use samples::SampleKind;
