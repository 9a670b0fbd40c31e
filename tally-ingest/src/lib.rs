//! tally-ingest: CSV parsers turning bank transaction exports and the
//! threshold rule file into core types.

pub mod parsers;

pub use parsers::bank_csv::{parse_transactions_csv, parse_transactions_reader};
pub use parsers::rules_csv::{parse_rules_csv, parse_rules_reader};
