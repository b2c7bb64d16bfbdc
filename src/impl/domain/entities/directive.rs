use chrono::NaiveDate;
use rust_decimal::Decimal;

use super::{
    account::Account,
    amount::{Amount, Commodity},
    balance_change::BalanceChange,
    meta::Meta,
    transaction::Transaction,
};

#[derive(Debug, Clone, PartialEq)]
pub struct Open {
    pub date: NaiveDate,
    pub account: Account,
    /// Permitted currencies. Empty means unrestricted.
    pub currencies: Vec<Commodity>,
    pub meta: Meta,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Close {
    pub date: NaiveDate,
    pub account: Account,
    pub meta: Meta,
}

#[derive(Debug, Clone, PartialEq)]
pub enum CustomValue {
    String(String),
    Account(Account),
    Amount(Amount),
    Date(NaiveDate),
    Number(Decimal),
    Bool(bool),
}

/// Loosely-typed `custom "<type_name>" ...` directive.
#[derive(Debug, Clone, PartialEq)]
pub struct Custom {
    pub date: NaiveDate,
    pub type_name: String,
    pub values: Vec<CustomValue>,
    pub meta: Meta,
}

/// Any directive kind this crate does not interpret (balance, pad, note,
/// price, ...). Passed through untouched.
#[derive(Debug, Clone, PartialEq)]
pub struct OtherDirective {
    pub date: NaiveDate,
    pub kind: String,
    pub meta: Meta,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Directive {
    Open(Open),
    Close(Close),
    Transaction(Transaction),
    BalanceChange(BalanceChange),
    Custom(Custom),
    Other(OtherDirective),
}

// --

impl Open {
    pub fn new(date: NaiveDate, account: Account, currencies: Vec<Commodity>) -> Self {
        Self {
            date,
            account,
            currencies,
            meta: Meta::default(),
        }
    }
}

impl Directive {
    pub fn date(&self) -> NaiveDate {
        match self {
            Directive::Open(d) => d.date,
            Directive::Close(d) => d.date,
            Directive::Transaction(d) => d.date,
            Directive::BalanceChange(d) => d.date,
            Directive::Custom(d) => d.date,
            Directive::Other(d) => d.date,
        }
    }

    pub fn meta(&self) -> &Meta {
        match self {
            Directive::Open(d) => &d.meta,
            Directive::Close(d) => &d.meta,
            Directive::Transaction(d) => &d.meta,
            Directive::BalanceChange(d) => &d.meta,
            Directive::Custom(d) => &d.meta,
            Directive::Other(d) => &d.meta,
        }
    }

    pub(crate) fn meta_mut(&mut self) -> &mut Meta {
        match self {
            Directive::Open(d) => &mut d.meta,
            Directive::Close(d) => &mut d.meta,
            Directive::Transaction(d) => &mut d.meta,
            Directive::BalanceChange(d) => &mut d.meta,
            Directive::Custom(d) => &mut d.meta,
            Directive::Other(d) => &mut d.meta,
        }
    }
}

macro_rules! impl_into_directive {
    ($typ:ty, $variant:ident) => {
        impl From<$typ> for Directive {
            fn from(d: $typ) -> Self {
                Directive::$variant(d)
            }
        }
    };
}

impl_into_directive!(Open, Open);
impl_into_directive!(Close, Close);
impl_into_directive!(Transaction, Transaction);
impl_into_directive!(BalanceChange, BalanceChange);
impl_into_directive!(Custom, Custom);
impl_into_directive!(OtherDirective, Other);
