use std::str::FromStr;

use ron::from_str;
use rust_decimal::Decimal;

use crate::{entities::BalanceChangeConfig, errors::BalanceChangeError};

/// RON plugin configuration, e.g. `(tolerance: 0.01)`. Every field is
/// optional.
#[derive(Debug, serde_derive::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub(crate) struct BalanceChangeConfigModel {
    tolerance: Decimal,
}

impl Default for BalanceChangeConfigModel {
    fn default() -> Self {
        Self {
            tolerance: BalanceChangeConfig::DEFAULT_TOLERANCE,
        }
    }
}

impl FromStr for BalanceChangeConfigModel {
    type Err = BalanceChangeError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        from_str(s).map_err(|e| BalanceChangeError::InvalidRon {
            ron_type: "BalanceChangeConfig".to_string(),
            details: e.to_string(),
        })
    }
}

impl TryFrom<BalanceChangeConfigModel> for BalanceChangeConfig {
    type Error = BalanceChangeError;
    fn try_from(model: BalanceChangeConfigModel) -> Result<Self, Self::Error> {
        if model.tolerance < Decimal::ZERO {
            return Err(BalanceChangeError::InvalidTolerance {
                tolerance: model.tolerance,
            });
        }
        Ok(BalanceChangeConfig {
            tolerance: model.tolerance,
        })
    }
}
