/// Segment separator of the account namespace.
pub const ACCOUNT_SEPARATOR: char = ':';

/// Colon-separated account path, e.g. `Assets:BankA:Checking`.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Clone)]
pub struct Account(pub(crate) String);

impl Account {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

// Shorthand constructors.

pub fn account(name: impl Into<String>) -> Account {
    Account(name.into())
}
