use super::{amount::Amount, directive::Directive, meta::Meta};

#[derive(Debug, Clone, PartialEq)]
pub enum BalanceErrorKind {
    /// Asserted account has no Open (or Close) directive. Halts the checks
    /// for that assertion.
    UnknownAccount,
    /// Asserted currency is outside the account's permitted set.
    InvalidCurrency,
    /// Actual change differs from the expected one by more than the
    /// tolerance.
    ChangeMismatch { diff: Amount, starting: Amount },
    /// A balance or change left the representable number range, so the
    /// assertion could not be compared.
    ArithmeticOverflow,
    /// A `custom "balance_change"` directive that could not be interpreted.
    InvalidDirective,
}

/// Non-fatal check failure, reported alongside the unmodified directives.
#[derive(Debug, Clone, PartialEq)]
pub struct BalanceError {
    pub source: Meta,
    pub message: String,
    pub entry: Directive,
    pub kind: BalanceErrorKind,
}
