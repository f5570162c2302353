//! Transaction domain models.

use chrono::{DateTime, NaiveDate};
use serde::{Deserialize, Serialize};

use super::transactions_kind::{classify_id, TypeStyle};
use crate::envelope::Pagination;

/// Raw income/expense classifier sent by the server.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    Income,
    Expense,
    #[serde(other)]
    Unknown,
}

/// A transaction as returned by the API. Never edited locally.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Transaction {
    pub id: i64,
    pub code: String,
    pub name: String,
    /// Raw date as sent by the server
    pub date: String,
    pub formatted_date: String,
    pub amount: f64,
    pub formatted_amount: String,
    #[serde(rename = "type")]
    pub transaction_type: TransactionType,
    pub type_id: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub has_items: Option<bool>,
}

impl Transaction {
    /// Color and icon for this transaction's `type_id`.
    pub fn style(&self) -> TypeStyle {
        classify_id(self.type_id)
    }

    /// The raw date as a calendar date, if it is `YYYY-MM-DD` or RFC 3339.
    pub fn parsed_date(&self) -> Option<NaiveDate> {
        let raw = self.date.trim();
        NaiveDate::parse_from_str(raw, "%Y-%m-%d")
            .ok()
            .or_else(|| DateTime::parse_from_rfc3339(raw).ok().map(|dt| dt.date_naive()))
            .or_else(|| {
                raw.get(..10)
                    .and_then(|prefix| NaiveDate::parse_from_str(prefix, "%Y-%m-%d").ok())
            })
    }

    pub fn has_items(&self) -> bool {
        self.has_items.unwrap_or(false)
    }
}

/// Body of `GET /payments`. Not an envelope: `data` is always a list.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TransactionPage {
    pub success: bool,
    #[serde(default)]
    pub data: Vec<Transaction>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pagination: Option<Pagination>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}
