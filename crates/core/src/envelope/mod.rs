//! Response envelope and pagination shapes shared by the API endpoints.

mod envelope_model;
mod pagination;

pub use envelope_model::{ApiErrors, ApiResponse, EnvelopeFailure};
pub use pagination::{Pagination, PaymentGoalsMeta};
