//! Payment goal models.

use serde::{Deserialize, Serialize};

use crate::envelope::PaymentGoalsMeta;

/// Status badge of a goal.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GoalStatus {
    pub id: i64,
    pub name: String,
    pub color: String,
}

/// Server-formatted copies of the numeric goal fields.
///
/// These are never computed on the client.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FormattedGoalAmounts {
    pub amount: String,
    pub target_amount: String,
    pub progress_percent: String,
}

/// A payment goal. Progress is owned by the server.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PaymentGoal {
    pub id: i64,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub amount: f64,
    pub target_amount: f64,
    pub progress_percent: f64,
    pub status: GoalStatus,
    pub formatted: FormattedGoalAmounts,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_date: Option<String>,
}

impl PaymentGoal {
    /// Progress clamped to `0..=100` for drawing a bar.
    pub fn progress_ratio(&self) -> f64 {
        if !self.progress_percent.is_finite() {
            return 0.0;
        }
        self.progress_percent.clamp(0.0, 100.0) / 100.0
    }
}

/// Summary counters of `GET /payment-goals/overview`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PaymentGoalsOverview {
    pub total_goals: u32,
    pub completed: u32,
    /// Display string, e.g. `"66,7%"`
    pub success_rate: String,
}

/// `data` of `GET /payment-goals`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PaymentGoalsList {
    pub data: Vec<PaymentGoal>,
    pub meta: PaymentGoalsMeta,
}
