use serde::{Deserialize, Serialize};
use crate::models::domain::SortingResult;

/// Response for the sort endpoints
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SortResponse {
    #[serde(rename = "sortId")]
    pub sort_id: String,
    pub result: SortingResult,
}

/// Response for the student listing endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StudentListResponse {
    pub students: Vec<String>,
    pub total: usize,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}
