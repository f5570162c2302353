//! Display classification of transactions.

use serde::Serialize;

use super::transactions_model::{Transaction, TransactionType};

/// Color and icon used to draw a transaction row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TypeStyle {
    pub color: &'static str,
    pub icon: &'static str,
}

pub const INCOME_STYLE: TypeStyle = TypeStyle { color: "#22C55E", icon: "arrow-down-circle" };
pub const EXPENSE_STYLE: TypeStyle = TypeStyle { color: "#EF4444", icon: "arrow-up-circle" };
pub const TRANSFER_STYLE: TypeStyle = TypeStyle { color: "#3B82F6", icon: "swap-horizontal" };
pub const WITHDRAWAL_STYLE: TypeStyle = TypeStyle { color: "#F59E0B", icon: "cash-outline" };
pub const FALLBACK_STYLE: TypeStyle = TypeStyle { color: "#6B7280", icon: "help-circle-outline" };

/// Maps a `type_id` code to its style. Anything but an exact `"1"`..`"4"` gets
/// [`FALLBACK_STYLE`].
pub fn classify(type_id: &str) -> TypeStyle {
    match type_id {
        "1" => INCOME_STYLE,
        "2" => EXPENSE_STYLE,
        "3" => TRANSFER_STYLE,
        "4" => WITHDRAWAL_STYLE,
        _ => FALLBACK_STYLE,
    }
}

pub fn classify_id(type_id: i64) -> TypeStyle {
    classify(&type_id.to_string())
}

/// Refined kind of a transaction, used for labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Income,
    Expense,
    Withdrawal,
    Transfer,
    Unknown,
}

impl TransactionKind {
    pub fn label(&self) -> &'static str {
        match self {
            TransactionKind::Income => "Pemasukan",
            TransactionKind::Expense => "Pengeluaran",
            TransactionKind::Withdrawal => "Penarikan",
            TransactionKind::Transfer => "Transfer",
            TransactionKind::Unknown => "Lainnya",
        }
    }
}

impl From<TransactionType> for TransactionKind {
    fn from(value: TransactionType) -> Self {
        match value {
            TransactionType::Income => TransactionKind::Income,
            TransactionType::Expense => TransactionKind::Expense,
            TransactionType::Unknown => TransactionKind::Unknown,
        }
    }
}

const WITHDRAWAL_KEYWORDS: [&str; 1] = ["withdraw"];
const TRANSFER_KEYWORDS: [&str; 2] = ["transfer", "tf"];

/// Refines the raw `type` from keywords in the name or code.
///
/// Withdrawal keywords are checked before transfer keywords.
pub fn derive_transaction_kind(transaction: &Transaction) -> TransactionKind {
    let name = transaction.name.to_lowercase();
    let code = transaction.code.to_lowercase();
    let mentions = |keywords: &[&str]| {
        keywords
            .iter()
            .any(|k| name.contains(k) || code.contains(k))
    };

    if mentions(&WITHDRAWAL_KEYWORDS) {
        TransactionKind::Withdrawal
    } else if mentions(&TRANSFER_KEYWORDS) {
        TransactionKind::Transfer
    } else {
        transaction.transaction_type.into()
    }
}
