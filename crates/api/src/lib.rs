//! Finmate API - data-access services for the Finmate client.
//!
//! Each service method takes a bearer token, issues exactly one request and
//! returns a typed response. Transaction endpoints raise on a non-2xx status;
//! payment goal and attachment endpoints return the envelope as is.
//!
//! # Usage
//!
//! ```rust,ignore
//! use finmate_api::{ApiClient, PageParams, TransactionService, TransactionServiceTrait};
//! use finmate_core::AppConfig;
//!
//! let config = AppConfig::from_env()?;
//! let transactions = TransactionService::new(ApiClient::new(&config)?);
//! let page = transactions
//!     .get_transactions("access_token", PageParams::page(1).with_limit(10))
//!     .await?;
//! ```

mod attachments;
pub mod cancel;
mod client;
mod error;
mod payment_goals;
mod query;
mod transactions;

pub use attachments::{AttachmentService, AttachmentServiceTrait, AttachmentUpload};
pub use cancel::{cancel_pair, with_cancel, CancelHandle, CancelToken};
pub use client::ApiClient;
pub use error::{ApiError, Result};
pub use payment_goals::{PaymentGoalsService, PaymentGoalsServiceTrait};
pub use query::PageParams;
pub use transactions::{TransactionService, TransactionServiceTrait};
