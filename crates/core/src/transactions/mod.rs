//! Transactions module - models and display classification.

mod transactions_kind;
mod transactions_model;

pub use transactions_kind::{
    classify, classify_id, derive_transaction_kind, TransactionKind, TypeStyle, EXPENSE_STYLE,
    FALLBACK_STYLE, INCOME_STYLE, TRANSFER_STYLE, WITHDRAWAL_STYLE,
};
pub use transactions_model::{Transaction, TransactionPage, TransactionType};
