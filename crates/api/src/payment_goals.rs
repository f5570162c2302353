//! Payment goal endpoints.
//!
//! The server reports failures inside the envelope, so the parsed envelope is
//! returned whatever the HTTP status. Only transport and decode failures are
//! errors; callers branch on `success`.

use async_trait::async_trait;

use finmate_core::goals::{PaymentGoal, PaymentGoalsList, PaymentGoalsOverview};
use finmate_core::ApiResponse;

use crate::client::ApiClient;
use crate::error::Result;
use crate::query::{with_query, PageParams};

/// Trait for payment goal data access
#[async_trait]
pub trait PaymentGoalsServiceTrait: Send + Sync {
    /// GET /payment-goals/overview
    async fn get_overview(&self, token: &str) -> Result<ApiResponse<PaymentGoalsOverview>>;

    /// GET /payment-goals?page={n}
    async fn get_payment_goals(
        &self,
        token: &str,
        page: Option<u32>,
    ) -> Result<ApiResponse<PaymentGoalsList>>;

    /// GET /payment-goals/{id}
    async fn get_payment_goal(&self, token: &str, id: i64) -> Result<ApiResponse<PaymentGoal>>;
}

#[derive(Debug, Clone)]
pub struct PaymentGoalsService {
    api: ApiClient,
}

impl PaymentGoalsService {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }
}

#[async_trait]
impl PaymentGoalsServiceTrait for PaymentGoalsService {
    async fn get_overview(&self, token: &str) -> Result<ApiResponse<PaymentGoalsOverview>> {
        self.api.get_envelope(token, "/payment-goals/overview").await
    }

    async fn get_payment_goals(
        &self,
        token: &str,
        page: Option<u32>,
    ) -> Result<ApiResponse<PaymentGoalsList>> {
        let params = PageParams { page, limit: None };
        let path = with_query("/payment-goals", &params)?;
        self.api.get_envelope(token, &path).await
    }

    async fn get_payment_goal(&self, token: &str, id: i64) -> Result<ApiResponse<PaymentGoal>> {
        self.api
            .get_envelope(token, &format!("/payment-goals/{}", id))
            .await
    }
}
