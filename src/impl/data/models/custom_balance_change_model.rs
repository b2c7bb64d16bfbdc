use std::sync::LazyLock;

use regex::Regex;

use crate::{
    entities::{account, BalanceChange, Custom, CustomValue},
    errors::BalanceChangeError,
};

/// Type tag of the `custom` directive carrying a balance change assertion.
pub(crate) const BALANCE_CHANGE_TYPE: &str = "balance_change";

static ACCOUNT_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"((Assets|Liabilities|Expenses|Equity|Income)(:\w+)+)")
        .expect("hardcoded regex should be valid")
});

/// Compatibility form of a balance change assertion:
///
/// ```text
/// 2020-01-07 custom "balance_change" Assets:BankA -50 GBP
///     since: 2020-01-04
/// ```
///
/// The account is the first `Assets|Liabilities|Expenses|Equity|Income`
/// rooted path found anywhere in the first value.
#[derive(Debug)]
pub(crate) struct CustomBalanceChangeModel(BalanceChange);

pub(crate) fn is_balance_change_entry(custom: &Custom) -> bool {
    custom.type_name == BALANCE_CHANGE_TYPE
}

impl TryFrom<&Custom> for CustomBalanceChangeModel {
    type Error = BalanceChangeError;

    fn try_from(custom: &Custom) -> Result<Self, Self::Error> {
        let expression = match custom.values.first() {
            Some(CustomValue::String(s)) => s.as_str(),
            Some(CustomValue::Account(a)) => a.as_str(),
            _ => "",
        };
        let account = ACCOUNT_PATTERN
            .find(expression)
            .map(|m| account(m.as_str()))
            .ok_or_else(|| BalanceChangeError::InvalidBalanceChangeExpression {
                expression: expression.to_string(),
            })?;
        let expected = match custom.values.get(1) {
            Some(CustomValue::Amount(a)) => a.clone(),
            _ => return Err(BalanceChangeError::InvalidExpectedAmount { date: custom.date }),
        };
        let since = custom
            .meta
            .get_date("since")
            .ok_or(BalanceChangeError::MissingSinceDate { date: custom.date })?;

        Ok(CustomBalanceChangeModel(BalanceChange {
            date: custom.date,
            account,
            expected,
            since,
            meta: custom.meta.clone(),
        }))
    }
}

impl From<CustomBalanceChangeModel> for BalanceChange {
    fn from(model: CustomBalanceChangeModel) -> Self {
        model.0
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;

    use super::*;
    use crate::entities::{amount, Meta, MetaValue};

    fn date(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2020, 1, d).unwrap()
    }

    fn custom(values: Vec<CustomValue>, meta: Meta) -> Custom {
        Custom {
            date: date(7),
            type_name: BALANCE_CHANGE_TYPE.to_string(),
            values,
            meta,
        }
    }

    fn since_meta() -> Meta {
        Meta::new("ledger.beancount", 12).with("since", MetaValue::Date(date(4)))
    }

    #[test]
    fn test_parses_account_value() {
        let c = custom(
            vec![
                CustomValue::Account(account("Assets:BankA")),
                CustomValue::Amount(amount(dec!(-50), "GBP")),
            ],
            since_meta(),
        );
        let b: BalanceChange = CustomBalanceChangeModel::try_from(&c).unwrap().into();
        assert_eq!(b.account, account("Assets:BankA"));
        assert_eq!(b.expected, amount(dec!(-50), "GBP"));
        assert_eq!(b.since, date(4));
        assert_eq!(b.date, date(7));
        assert_eq!(b.meta.lineno, 12);
    }

    #[test]
    fn test_finds_first_account_anywhere_in_expression() {
        let c = custom(
            vec![
                CustomValue::String("total of Liabilities:Card:Visa and Assets:BankA".into()),
                CustomValue::Amount(amount(dec!(10), "USD")),
            ],
            since_meta(),
        );
        let b: BalanceChange = CustomBalanceChangeModel::try_from(&c).unwrap().into();
        assert_eq!(b.account, account("Liabilities:Card:Visa"));
    }

    #[test]
    fn test_pattern_stops_at_non_word_characters() {
        let c = custom(
            vec![
                CustomValue::String("Equity:Opening-Balances".into()),
                CustomValue::Amount(amount(dec!(10), "USD")),
            ],
            since_meta(),
        );
        let b: BalanceChange = CustomBalanceChangeModel::try_from(&c).unwrap().into();
        assert_eq!(b.account, account("Equity:Opening"));
    }

    #[test]
    fn test_rejects_expression_without_account() {
        let c = custom(
            vec![
                CustomValue::String("Assets".into()),
                CustomValue::Amount(amount(dec!(10), "USD")),
            ],
            since_meta(),
        );
        assert!(matches!(
            CustomBalanceChangeModel::try_from(&c),
            Err(BalanceChangeError::InvalidBalanceChangeExpression { .. })
        ));
    }

    #[test]
    fn test_rejects_missing_amount_and_since() {
        let no_amount = custom(
            vec![CustomValue::Account(account("Assets:BankA"))],
            since_meta(),
        );
        assert!(matches!(
            CustomBalanceChangeModel::try_from(&no_amount),
            Err(BalanceChangeError::InvalidExpectedAmount { .. })
        ));

        let no_since = custom(
            vec![
                CustomValue::Account(account("Assets:BankA")),
                CustomValue::Amount(amount(dec!(1), "GBP")),
            ],
            Meta::default().with("since", MetaValue::String("2020-01-04".into())),
        );
        assert!(matches!(
            CustomBalanceChangeModel::try_from(&no_since),
            Err(BalanceChangeError::MissingSinceDate { .. })
        ));
    }
}
