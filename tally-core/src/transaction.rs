//! Transaction record types and the deterministic super-category rules.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Debit categories that count as essential spending.
pub const NEEDS_CATEGORIES: [&str; 5] = [
    "Bills",
    "Home & Garden",
    "Transport",
    "Health & Beauty",
    "Groceries",
];

/// Debit categories that count as discretionary spending.
pub const WANTS_CATEGORIES: [&str; 6] = [
    "Eating Out",
    "Shopping",
    "Entertainment",
    "Other",
    "Transfers",
    "Uncategorised",
];

/// Direction of a transaction as reported by the bank export.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum TxnType {
    Credit,
    Debit,
    /// Any type label the export uses that we don't recognize.
    Unknown,
}

impl TxnType {
    /// Map a raw `TRANSACTION_TYPE` label. Case-sensitive: bank exports use
    /// exactly "Credit" / "Debit", anything else is Unknown.
    pub fn from_label(label: &str) -> Self {
        match label {
            "Credit" => TxnType::Credit,
            "Debit" => TxnType::Debit,
            _ => TxnType::Unknown,
        }
    }
}

/// Budgeting bucket derived from (type, category).
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum SuperCategory {
    Needs,
    Wants,
    Income,
    Other,
}

impl SuperCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            SuperCategory::Needs => "Needs",
            SuperCategory::Wants => "Wants",
            SuperCategory::Income => "Income",
            SuperCategory::Other => "Other",
        }
    }
}

impl std::str::FromStr for SuperCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Needs" => Ok(SuperCategory::Needs),
            "Wants" => Ok(SuperCategory::Wants),
            "Income" => Ok(SuperCategory::Income),
            "Other" => Ok(SuperCategory::Other),
            other => Err(format!(
                "unknown super-category '{other}' (expected Needs, Wants, Income or Other)"
            )),
        }
    }
}

/// Deterministically classify a transaction into its budgeting bucket.
///
/// Total over every (type, category) pair: unrecognized Debit categories and
/// unknown type labels resolve to Other rather than erroring.
pub fn classify(txn_type: TxnType, category: &str) -> SuperCategory {
    match txn_type {
        TxnType::Debit => {
            if NEEDS_CATEGORIES.contains(&category) {
                SuperCategory::Needs
            } else if WANTS_CATEGORIES.contains(&category) {
                SuperCategory::Wants
            } else {
                SuperCategory::Other
            }
        }
        TxnType::Credit => SuperCategory::Income,
        TxnType::Unknown => SuperCategory::Other,
    }
}

/// A bank transaction annotated with its budgeting bucket.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Transaction {
    /// Transaction date (YYYY-MM-DD, no time-of-day)
    pub date: NaiveDate,
    #[serde(rename = "type")]
    pub txn_type: TxnType,
    /// Bank-assigned category label
    pub category: String,
    /// Non-negative; direction comes from `txn_type`, not the sign
    pub amount: f64,
    /// Assigned once at construction, never recomputed
    pub super_category: SuperCategory,
}

impl Transaction {
    /// Build a transaction, assigning its super-category from (type, category).
    pub fn new(date: NaiveDate, txn_type: TxnType, category: impl Into<String>, amount: f64) -> Self {
        let category = category.into();
        let super_category = classify(txn_type, &category);
        Self {
            date,
            txn_type,
            category,
            amount,
            super_category,
        }
    }

    pub fn is_credit(&self) -> bool {
        self.txn_type == TxnType::Credit
    }

    pub fn is_debit(&self) -> bool {
        self.txn_type == TxnType::Debit
    }
}
