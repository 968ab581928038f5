pub mod api;
pub mod app_state;
pub mod error;
pub mod health;
pub mod logger;
pub mod request_context;
pub mod routes;

#[cfg(test)]
mod tests;

pub use api::error::{ApiError, Result as ApiResult};
pub use api::query::{QueryBody, registry_all_candidates};
pub use api::submit::SubmitRequest;
pub use app_state::AppState;
pub use error::{Result as ServerResult, ServerError};
pub use request_context::RequestContext;
pub use routes::build_router;
