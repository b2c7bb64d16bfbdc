use std::collections::BTreeMap;

use chrono::NaiveDate;
use rust_decimal::Decimal;

use super::amount::Amount;

#[derive(Debug, Clone, PartialEq)]
pub enum MetaValue {
    String(String),
    Date(NaiveDate),
    Number(Decimal),
    Amount(Amount),
    Bool(bool),
}

/// Source location of a directive, plus its free-form key/value metadata.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Meta {
    pub filename: String,
    pub lineno: u32,
    pub values: BTreeMap<String, MetaValue>,
}

impl Meta {
    pub fn new(filename: impl Into<String>, lineno: u32) -> Self {
        Self {
            filename: filename.into(),
            lineno,
            values: BTreeMap::new(),
        }
    }

    pub fn with(mut self, key: impl Into<String>, value: MetaValue) -> Self {
        self.values.insert(key.into(), value);
        self
    }

    pub fn get(&self, key: &str) -> Option<&MetaValue> {
        self.values.get(key)
    }

    pub fn get_date(&self, key: &str) -> Option<NaiveDate> {
        match self.values.get(key) {
            Some(MetaValue::Date(d)) => Some(*d),
            _ => None,
        }
    }

    pub fn get_amount(&self, key: &str) -> Option<&Amount> {
        match self.values.get(key) {
            Some(MetaValue::Amount(a)) => Some(a),
            _ => None,
        }
    }

    pub(crate) fn insert(&mut self, key: impl Into<String>, value: MetaValue) {
        self.values.insert(key.into(), value);
    }
}
