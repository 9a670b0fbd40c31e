pub mod bank_csv;
pub mod rules_csv;
