use rust_decimal::Decimal;

/// Currency or other commodity symbol (`GBP`, `BTC`, ...).
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Clone)]
pub struct Commodity(pub(crate) String);

#[derive(Debug, PartialEq, Eq, Hash, Clone)]
pub struct Amount {
    pub number: Decimal,
    pub currency: Commodity,
}

impl Commodity {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Amount {
    pub fn new(number: Decimal, currency: Commodity) -> Self {
        Self { number, currency }
    }
}

// Shorthand constructors.

pub fn commodity(symbol: impl Into<String>) -> Commodity {
    Commodity(symbol.into())
}

pub fn amount(number: Decimal, currency: impl Into<String>) -> Amount {
    Amount::new(number, commodity(currency))
}
