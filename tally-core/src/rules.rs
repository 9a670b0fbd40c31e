//! Threshold rule set the analytics compare against.

use serde::{Deserialize, Serialize};

/// Desired spending/saving ratios relative to total income (credit).
///
/// A single triple is active per process; loaded once at startup and only
/// read afterwards.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct RuleSet {
    /// Minimum savings rate, as a fraction in [0, 1]
    pub savings: f64,
    /// Maximum needs share of income, as a fraction in [0, 1]
    pub needs: f64,
    /// Maximum wants share of income, as a fraction in [0, 1]
    pub wants: f64,
}
