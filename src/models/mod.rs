// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{
    ClassGroup, PrecedenceMode, SortingOptions, SortingResult, SortingStats, StudentPreference,
    SuccessfulPairing, TeacherRestriction, UnsuccessfulPairing, ViolatedRestriction,
};
pub use requests::{CsvSortRequest, SortRequest, StudentListRequest};
pub use responses::{ErrorResponse, HealthResponse, SortResponse, StudentListResponse};
