mod docs;
mod dto;
mod error;
mod router;
mod routes;
mod state;

pub use dto::{ErrorResponse, HealthResponse, RootResponse};
pub use error::{ApiError, ServerError};
pub use router::build_router;
pub use state::{ServerState, ServiceInfo};
