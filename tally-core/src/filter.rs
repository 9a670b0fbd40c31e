//! Conjunctive transaction filtering by date window, category and
//! super-category.

use chrono::NaiveDate;

use crate::transaction::{SuperCategory, Transaction};

/// Optional filter criteria; absent fields don't constrain anything.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterCriteria {
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub category: Option<String>,
    pub super_category: Option<SuperCategory>,
}

impl FilterCriteria {
    /// A date range only constrains when both bounds are present.
    fn date_window(&self) -> Option<(NaiveDate, NaiveDate)> {
        match (self.start_date, self.end_date) {
            (Some(start), Some(end)) => Some((start, end)),
            _ => None,
        }
    }

    fn matches(&self, txn: &Transaction) -> bool {
        if let Some((start, end)) = self.date_window() {
            if txn.date < start || txn.date > end {
                return false;
            }
        }
        if let Some(category) = &self.category {
            if &txn.category != category {
                return false;
            }
        }
        if let Some(super_category) = self.super_category {
            if txn.super_category != super_category {
                return false;
            }
        }
        true
    }
}

/// Apply the present criteria conjunctively, preserving input order.
/// No criteria returns the full set unchanged.
pub fn filter_transactions(txns: &[Transaction], criteria: &FilterCriteria) -> Vec<Transaction> {
    txns.iter()
        .filter(|t| criteria.matches(t))
        .cloned()
        .collect()
}
