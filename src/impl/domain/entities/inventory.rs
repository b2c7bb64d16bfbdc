use std::collections::{BTreeMap, BTreeSet};

use rust_decimal::Decimal;

use super::amount::{Amount, Commodity};

/// Running per-currency quantities held by one account (or aggregated over a
/// subtree of accounts).
///
/// A currency whose running quantity leaves the `Decimal` range is marked as
/// overflowed and stops accumulating; `units` reports it as `None`.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Inventory {
    units: BTreeMap<Commodity, Decimal>,
    overflowed: BTreeSet<Commodity>,
}

impl Inventory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Negative resulting quantities are accepted as-is.
    pub fn add_amount(&mut self, amount: &Amount) {
        self.add_units(&amount.currency, amount.number);
    }

    pub fn add_inventory(&mut self, other: &Inventory) {
        self.overflowed.extend(other.overflowed.iter().cloned());
        for (currency, number) in &other.units {
            self.add_units(currency, *number);
        }
    }

    /// Net quantity held in the given currency (zero if never touched), or
    /// `None` if it overflowed.
    pub fn units(&self, currency: &Commodity) -> Option<Decimal> {
        if self.overflowed.contains(currency) {
            return None;
        }
        Some(self.units.get(currency).copied().unwrap_or(Decimal::ZERO))
    }

    fn add_units(&mut self, currency: &Commodity, number: Decimal) {
        if self.overflowed.contains(currency) {
            return;
        }
        let current = self.units.get(currency).copied().unwrap_or(Decimal::ZERO);
        match current.checked_add(number) {
            Some(sum) => {
                self.units.insert(currency.clone(), sum);
            }
            None => {
                self.units.remove(currency);
                self.overflowed.insert(currency.clone());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;

    use super::*;
    use crate::entities::{amount, commodity};

    #[test]
    fn test_overflow_is_sticky_per_currency() {
        let mut inventory = Inventory::new();
        inventory.add_amount(&amount(Decimal::MAX, "GBP"));
        inventory.add_amount(&amount(dec!(1), "GBP"));
        inventory.add_amount(&amount(dec!(5), "USD"));
        assert_eq!(inventory.units(&commodity("GBP")), None);

        // Bringing the sum back into range does not clear the mark.
        inventory.add_amount(&amount(dec!(-10), "GBP"));
        assert_eq!(inventory.units(&commodity("GBP")), None);
        assert_eq!(inventory.units(&commodity("USD")), Some(dec!(5)));
        assert_eq!(inventory.units(&commodity("JPY")), Some(dec!(0)));

        let mut total = Inventory::new();
        total.add_inventory(&inventory);
        assert_eq!(total.units(&commodity("GBP")), None);
        assert_eq!(total.units(&commodity("USD")), Some(dec!(5)));
    }
}
