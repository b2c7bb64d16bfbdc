use std::collections::HashMap;

use rust_decimal::Decimal;

use crate::{
    entities::{Account, Amount, BalanceChange, BalanceErrorKind},
    presentation::balance_error_fmt::{
        change_mismatch_message, invalid_currency_message, overflow_message,
        unknown_account_message,
    },
};

use super::{
    account_impl::OpenClose,
    balance_tree::BalanceTree,
    snapshot_store::{Snapshot, SnapshotKey, SnapshotStore},
};

pub(crate) struct Finding {
    pub(crate) kind: BalanceErrorKind,
    pub(crate) message: String,
}

/// Outcome of checking one assertion. Findings are in reporting order.
pub(crate) struct Evaluation {
    pub(crate) findings: Vec<Finding>,
    /// `None` when the account is unknown or the starting balance overflowed.
    pub(crate) starting_amount: Option<Amount>,
    pub(crate) diff_amount: Option<Amount>,
}

pub(crate) struct AssertionEvaluator<'a> {
    open_close_map: &'a HashMap<Account, OpenClose>,
    tolerance: Decimal,
}

impl<'a> AssertionEvaluator<'a> {
    pub(crate) fn new(open_close_map: &'a HashMap<Account, OpenClose>, tolerance: Decimal) -> Self {
        Self {
            open_close_map,
            tolerance,
        }
    }

    /// Checks `assertion` against the balances replayed so far, i.e. every
    /// transaction dated on or before the assertion (and earlier in input
    /// order).
    pub(crate) fn evaluate(
        &self,
        assertion: &BalanceChange,
        tree: &BalanceTree,
        snapshots: &mut SnapshotStore,
    ) -> Evaluation {
        let BalanceChange {
            date,
            account,
            expected,
            since,
            ..
        } = assertion;

        let Some(open_close) = self.open_close_map.get(account) else {
            return Evaluation {
                findings: vec![Finding {
                    kind: BalanceErrorKind::UnknownAccount,
                    message: unknown_account_message(account),
                }],
                starting_amount: None,
                diff_amount: None,
            };
        };

        let mut findings = Vec::new();
        if let Some(open) = &open_close.open {
            if !open.currencies.is_empty() && !open.currencies.contains(&expected.currency) {
                findings.push(Finding {
                    kind: BalanceErrorKind::InvalidCurrency,
                    message: invalid_currency_message(&expected.currency),
                });
            }
        }

        let balance = tree.subtree_units(account, &expected.currency);
        let key = SnapshotKey {
            account: account.clone(),
            since: *since,
            currency: expected.currency.clone(),
        };
        let starting = match snapshots.get(&key) {
            Snapshot::Captured(units) => units,
            // Nothing dated on or after `since` has been replayed, so the
            // window holds no postings yet.
            Snapshot::Pending if since <= date => snapshots.capture(&key, tree),
            Snapshot::Pending => balance,
        };
        let starting_amount = starting.map(|s| Amount::new(s, expected.currency.clone()));

        // Any amount out of the `Decimal` range is reported instead of
        // compared.
        let computed = balance.zip(starting).and_then(|(balance, starting)| {
            let change = balance.checked_sub(starting)?;
            Some((starting, change, change.checked_sub(expected.number)?))
        });
        let Some((starting, change, diff)) = computed else {
            findings.push(Finding {
                kind: BalanceErrorKind::ArithmeticOverflow,
                message: overflow_message(account, &expected.currency),
            });
            return Evaluation {
                findings,
                starting_amount,
                diff_amount: None,
            };
        };

        let actual_change = Amount::new(change, expected.currency.clone());
        let mut diff_amount = None;
        if diff.abs() > self.tolerance {
            let diff_as_amount = Amount::new(diff, expected.currency.clone());
            findings.push(Finding {
                kind: BalanceErrorKind::ChangeMismatch {
                    diff: diff_as_amount.clone(),
                    starting: Amount::new(starting, expected.currency.clone()),
                },
                message: change_mismatch_message(account, expected, &actual_change, diff),
            });
            diff_amount = Some(diff_as_amount);
        }

        Evaluation {
            findings,
            starting_amount,
            diff_amount,
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;

    use super::*;
    use crate::{
        domain::logic::account_impl::get_account_open_close,
        entities::{account, amount, commodity, Directive, Open},
    };

    fn date(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2020, 1, d).unwrap()
    }

    fn change(number: rust_decimal::Decimal, currency: &str) -> BalanceChange {
        BalanceChange::new(date(10), account("Assets:BankA"), amount(number, currency), date(5))
    }

    fn opens(currencies: &[&str]) -> HashMap<Account, OpenClose> {
        let entries: Vec<Directive> = vec![Open::new(
            date(1),
            account("Assets:BankA"),
            currencies.iter().map(|c| commodity(*c)).collect(),
        )
        .into()];
        get_account_open_close(&entries)
    }

    #[test]
    fn test_pending_window_counts_as_no_change() {
        let map = opens(&["GBP"]);
        let evaluator = AssertionEvaluator::new(&map, dec!(0.005));
        let mut tree = BalanceTree::new();
        let bank = tree.get_or_create(&account("Assets:BankA"));
        tree.add_amount(bank, &amount(dec!(100), "GBP"));

        let zero = change(dec!(0), "GBP");
        let mut snapshots = SnapshotStore::new([&zero]);
        let eval = evaluator.evaluate(&zero, &tree, &mut snapshots);
        assert!(eval.findings.is_empty());
        assert_eq!(eval.starting_amount, Some(amount(dec!(100), "GBP")));
        assert_eq!(eval.diff_amount, None);

        let non_zero = change(dec!(5), "GBP");
        let eval = evaluator.evaluate(&non_zero, &tree, &mut snapshots);
        assert_eq!(eval.findings.len(), 1);
        assert_eq!(eval.diff_amount, Some(amount(dec!(-5), "GBP")));
    }

    #[test]
    fn test_tolerance_is_exclusive() {
        let map = opens(&[]);
        let evaluator = AssertionEvaluator::new(&map, dec!(0.005));
        let mut tree = BalanceTree::new();
        let bank = tree.get_or_create(&account("Assets:BankA"));
        let within = change(dec!(10), "GBP");
        let mut snapshots = SnapshotStore::new([&within]);
        snapshots.resolve(date(5), &tree);
        tree.add_amount(bank, &amount(dec!(10.005), "GBP"));

        assert!(evaluator.evaluate(&within, &tree, &mut snapshots).findings.is_empty());

        tree.add_amount(bank, &amount(dec!(0.001), "GBP"));
        let eval = evaluator.evaluate(&within, &tree, &mut snapshots);
        assert_eq!(eval.findings.len(), 1);
        assert!(eval.findings[0].message.ends_with("(0.006 too much)"));
    }

    #[test]
    fn test_unrestricted_open_accepts_any_currency() {
        let map = opens(&[]);
        let evaluator = AssertionEvaluator::new(&map, dec!(0.005));
        let mut tree = BalanceTree::new();
        tree.get_or_create(&account("Assets:BankA"));
        let btc = change(dec!(0), "BTC");
        let mut snapshots = SnapshotStore::new([&btc]);
        assert!(evaluator.evaluate(&btc, &tree, &mut snapshots).findings.is_empty());
    }
}
