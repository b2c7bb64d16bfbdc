use chrono::NaiveDate;

use super::{account::Account, amount::Amount, meta::Meta};

#[derive(Debug, Clone, PartialEq)]
pub struct Posting {
    pub account: Account,
    /// Signed quantity in a single currency.
    pub units: Amount,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Transaction {
    pub date: NaiveDate,
    pub narration: String,
    pub postings: Vec<Posting>,
    pub meta: Meta,
}

// --

impl Posting {
    pub fn new(account: Account, units: Amount) -> Self {
        Self { account, units }
    }
}

impl Transaction {
    pub fn new(date: NaiveDate, narration: impl Into<String>, postings: Vec<Posting>) -> Self {
        Self {
            date,
            narration: narration.into(),
            postings,
            meta: Meta::default(),
        }
    }
}
