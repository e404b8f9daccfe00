// Route exports
pub mod error;
pub mod sorting;

use actix_web::web;

pub use error::{json_config, path_config, ApiError};
pub use sorting::AppState;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1")
            .configure(sorting::configure),
    );
}
