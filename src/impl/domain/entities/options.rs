use std::collections::HashMap;

use rust_decimal::Decimal;

/// Parsed ledger options, as handed to every plugin.
pub type OptionsMap = HashMap<String, String>;

/// Options key under which the plugin configuration (RON) is stored.
pub const CONFIG_OPTION_KEY: &str = "balance_change";

#[derive(Debug, Clone, PartialEq)]
pub struct BalanceChangeConfig {
    /// Absolute tolerance, in the assertion's own number units.
    pub tolerance: Decimal,
}

impl BalanceChangeConfig {
    pub const DEFAULT_TOLERANCE: Decimal = Decimal::from_parts(5, 0, 0, false, 3);
}

impl Default for BalanceChangeConfig {
    fn default() -> Self {
        Self {
            tolerance: Self::DEFAULT_TOLERANCE,
        }
    }
}
