use rust_decimal::Decimal;

use crate::entities::{Account, Amount, Commodity};

impl std::fmt::Display for Account {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::fmt::Display for Commodity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Number as stored (no rounding, no separators) followed by the currency,
/// e.g. `-50 GBP`.
impl std::fmt::Display for Amount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.number, self.currency)
    }
}

// Messages are matched on by downstream tooling; keep the wording stable.

pub(crate) fn unknown_account_message(account: &Account) -> String {
    format!("Invalid reference to unknown account '{}'", account)
}

pub(crate) fn invalid_currency_message(currency: &Commodity) -> String {
    format!("Invalid currency '{}' for Balance directive: ", currency)
}

pub(crate) fn change_mismatch_message(
    account: &Account,
    expected: &Amount,
    actual_change: &Amount,
    diff: Decimal,
) -> String {
    format!(
        "Balance change check failed for '{}': expected a change of {} != actual change {} ({} {})",
        account,
        expected,
        actual_change,
        diff.abs(),
        if diff > Decimal::ZERO {
            "too much"
        } else {
            "too little"
        }
    )
}

pub(crate) fn overflow_message(account: &Account, currency: &Commodity) -> String {
    format!(
        "Balance change check failed for '{}': {} amounts exceed the representable range",
        account, currency
    )
}

pub(crate) fn invalid_directive_message(details: &str) -> String {
    format!("Invalid balance_change directive: {}", details)
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;

    use super::*;
    use crate::entities::{account, amount, commodity};

    #[test]
    fn test_amount_display() {
        assert_eq!(amount(dec!(-50), "GBP").to_string(), "-50 GBP");
        assert_eq!(amount(dec!(12.50), "USD").to_string(), "12.50 USD");
    }

    #[test]
    fn test_unknown_account_message() {
        assert_eq!(
            unknown_account_message(&account("Assets:BankA")),
            "Invalid reference to unknown account 'Assets:BankA'"
        );
    }

    #[test]
    fn test_invalid_currency_message() {
        assert_eq!(
            invalid_currency_message(&commodity("BTC")),
            "Invalid currency 'BTC' for Balance directive: "
        );
    }

    #[test]
    fn test_overflow_message() {
        assert_eq!(
            overflow_message(&account("Assets:BankA"), &commodity("GBP")),
            "Balance change check failed for 'Assets:BankA': GBP amounts exceed the representable range"
        );
    }

    #[test]
    fn test_change_mismatch_message_direction() {
        let too_little = change_mismatch_message(
            &account("Assets:BankA"),
            &amount(dec!(-25), "GBP"),
            &amount(dec!(-50), "GBP"),
            dec!(-25),
        );
        assert_eq!(
            too_little,
            "Balance change check failed for 'Assets:BankA': expected a change of -25 GBP != actual change -50 GBP (25 too little)"
        );

        let too_much = change_mismatch_message(
            &account("Assets:BankA"),
            &amount(dec!(10), "GBP"),
            &amount(dec!(12.5), "GBP"),
            dec!(2.5),
        );
        assert!(too_much.ends_with("(2.5 too much)"));
    }
}
