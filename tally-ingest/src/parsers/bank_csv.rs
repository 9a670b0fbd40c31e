//! Parse bank transaction CSV exports into annotated transactions.
//!
//! Expected header (extra columns are ignored):
//! TRANSACTION_DATE,TRANSACTION_TYPE,CATEGORY,AMOUNT

use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result, anyhow, bail};
use chrono::NaiveDate;
use serde::Deserialize;

use tally_core::{Transaction, TxnType};

#[derive(Debug, Deserialize)]
struct BankCsvRow {
    #[serde(rename = "TRANSACTION_DATE")]
    date: String,
    #[serde(rename = "TRANSACTION_TYPE")]
    txn_type: String,
    #[serde(rename = "CATEGORY")]
    category: String,
    #[serde(rename = "AMOUNT")]
    amount: f64,
}

/// Parse a transaction CSV file. Every row must carry a valid
/// `YYYY-MM-DD` date and a non-negative amount; the super-category is
/// assigned here, once, as each row is read.
pub fn parse_transactions_csv(path: impl AsRef<Path>) -> Result<Vec<Transaction>> {
    let file = std::fs::File::open(path.as_ref())
        .with_context(|| format!("opening {}", path.as_ref().display()))?;
    parse_transactions_reader(file)
        .with_context(|| format!("parsing {}", path.as_ref().display()))
}

/// Reader-based variant of [`parse_transactions_csv`].
pub fn parse_transactions_reader<R: Read>(reader: R) -> Result<Vec<Transaction>> {
    let mut rdr = csv::Reader::from_reader(reader);
    let mut txns = Vec::new();

    for (i, result) in rdr.deserialize().enumerate() {
        // Header is line 1, so data row i sits on line i + 2.
        let line = i + 2;
        let row: BankCsvRow = result.with_context(|| format!("line {line}"))?;

        let date = NaiveDate::parse_from_str(row.date.trim(), "%Y-%m-%d").map_err(|_| {
            anyhow!(
                "line {line}: invalid TRANSACTION_DATE '{}' (expected YYYY-MM-DD)",
                row.date
            )
        })?;
        if row.amount < 0.0 {
            bail!("line {line}: negative AMOUNT {}", row.amount);
        }

        txns.push(Transaction::new(
            date,
            TxnType::from_label(row.txn_type.trim()),
            row.category.trim(),
            row.amount,
        ));
    }

    Ok(txns)
}
