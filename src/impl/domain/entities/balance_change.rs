use chrono::NaiveDate;

use super::{account::Account, amount::Amount, meta::Meta};

/// Asserts that the subtree balance of `account` in `expected.currency`
/// changed by `expected.number` between `since` and `date`.
#[derive(Debug, Clone, PartialEq)]
pub struct BalanceChange {
    pub date: NaiveDate,
    pub account: Account,
    pub expected: Amount,
    pub since: NaiveDate,
    pub meta: Meta,
}

impl BalanceChange {
    pub fn new(date: NaiveDate, account: Account, expected: Amount, since: NaiveDate) -> Self {
        Self {
            date,
            account,
            expected,
            since,
            meta: Meta::default(),
        }
    }
}
