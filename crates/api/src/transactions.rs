//! Transaction endpoints.
//!
//! These endpoints signal failure through the HTTP status, so a non-2xx
//! response is an error. A 2xx body with `success: false` is still returned.

use async_trait::async_trait;
use log::warn;

use finmate_core::transactions::{Transaction, TransactionPage};
use finmate_core::ApiResponse;

use crate::client::ApiClient;
use crate::error::Result;
use crate::query::{with_query, PageParams};

/// Trait for transaction data access
#[async_trait]
pub trait TransactionServiceTrait: Send + Sync {
    /// GET /payments?page={n}&limit={m}
    async fn get_transactions(&self, token: &str, params: PageParams) -> Result<TransactionPage>;

    /// GET /payments/{id}
    async fn get_transaction(&self, token: &str, id: i64) -> Result<ApiResponse<Transaction>>;

    /// First page of transactions for "recent" widgets.
    ///
    /// Never fails: any error is logged and an empty list is returned.
    async fn get_recent_transactions(&self, token: &str, limit: u32) -> Vec<Transaction> {
        match self
            .get_transactions(token, PageParams::page(1).with_limit(limit))
            .await
        {
            Ok(page) => page.data,
            Err(e) => {
                warn!("Failed to load recent transactions: {}", e);
                Vec::new()
            }
        }
    }
}

#[derive(Debug, Clone)]
pub struct TransactionService {
    api: ApiClient,
}

impl TransactionService {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }
}

#[async_trait]
impl TransactionServiceTrait for TransactionService {
    async fn get_transactions(&self, token: &str, params: PageParams) -> Result<TransactionPage> {
        let path = with_query("/payments", &params)?;
        self.api.get_strict(token, &path).await
    }

    async fn get_transaction(&self, token: &str, id: i64) -> Result<ApiResponse<Transaction>> {
        self.api.get_strict(token, &format!("/payments/{}", id)).await
    }
}
