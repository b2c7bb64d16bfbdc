use chrono::NaiveDate;
use rust_decimal::Decimal;

/// Client errors: every variant is caused by the ledger input or the plugin
/// options, never by an internal fault. Broken internal invariants panic
/// instead.
#[derive(Debug, thiserror::Error)]
pub enum BalanceChangeError {
    // Parsing-related.
    /// Client error: the `balance_change` option is not valid RON.
    #[error("Invalid {ron_type} (invalid RON format): {details}.")]
    InvalidRon { ron_type: String, details: String },

    // Configuration-related.
    /// Client error: the configured tolerance is negative.
    #[error("Invalid balance change tolerance: {tolerance} (must not be negative).")]
    InvalidTolerance { tolerance: Decimal },

    // Custom directive compatibility.
    #[error("No account found in balance_change expression '{expression}'.")]
    InvalidBalanceChangeExpression { expression: String },
    #[error("balance_change directive on {date} is missing a valid 'since' date.")]
    MissingSinceDate { date: NaiveDate },
    #[error("balance_change directive on {date} is missing a valid expected amount.")]
    InvalidExpectedAmount { date: NaiveDate },
}
