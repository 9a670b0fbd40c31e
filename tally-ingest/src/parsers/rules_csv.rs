//! Parse the threshold rule CSV: header `savings,needs,wants`, one data row.

use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result, bail};
use serde::Deserialize;

use tally_core::RuleSet;

#[derive(Debug, Deserialize)]
struct RuleCsvRow {
    savings: f64,
    needs: f64,
    wants: f64,
}

/// Parse the rule file. Missing file or missing row is an error: the
/// analytics can't report status without thresholds.
pub fn parse_rules_csv(path: impl AsRef<Path>) -> Result<RuleSet> {
    let file = std::fs::File::open(path.as_ref())
        .with_context(|| format!("opening {}", path.as_ref().display()))?;
    parse_rules_reader(file).with_context(|| format!("parsing {}", path.as_ref().display()))
}

/// Reader-based variant of [`parse_rules_csv`].
pub fn parse_rules_reader<R: Read>(reader: R) -> Result<RuleSet> {
    let mut rdr = csv::Reader::from_reader(reader);
    let row: RuleCsvRow = match rdr.deserialize().next() {
        Some(result) => result.context("rule row")?,
        None => bail!("rule file has no data row"),
    };

    for (name, value) in [
        ("savings", row.savings),
        ("needs", row.needs),
        ("wants", row.wants),
    ] {
        if !(0.0..=1.0).contains(&value) {
            bail!("{name} threshold {value} is outside [0, 1]");
        }
    }

    Ok(RuleSet {
        savings: row.savings,
        needs: row.needs,
        wants: row.wants,
    })
}
