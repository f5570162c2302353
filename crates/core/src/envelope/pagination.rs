//! Pagination metadata.
//!
//! Endpoints do not share a pagination contract, so the two shapes are kept
//! as separate types.

use serde::{Deserialize, Serialize};

/// Pagination block of the `/payments` listing.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Pagination {
    pub current_page: u32,
    pub last_page: u32,
    pub total: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub per_page: Option<u32>,
}

impl Pagination {
    pub fn has_next_page(&self) -> bool {
        self.current_page < self.last_page
    }
}

/// `meta` block of the `/payment-goals` listing.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PaymentGoalsMeta {
    pub total_records: u64,
    pub total_pages: u32,
    pub has_more_pages: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_page: Option<u32>,
}
