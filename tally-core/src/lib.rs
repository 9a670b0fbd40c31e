//! tally-core: transaction model, category rules, filtering and savings
//! analytics for the Tally budget tool.

pub mod analytics;
pub mod filter;
pub mod rules;
pub mod transaction;

pub use analytics::{DimensionSummary, SavingsReport, compute_savings};
pub use filter::{FilterCriteria, filter_transactions};
pub use rules::RuleSet;
pub use transaction::{
    NEEDS_CATEGORIES, SuperCategory, Transaction, TxnType, WANTS_CATEGORIES, classify,
};
