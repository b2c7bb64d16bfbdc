use std::collections::{BTreeMap, BTreeSet, HashMap};

use chrono::NaiveDate;
use rust_decimal::Decimal;
use tracing::debug;

use crate::entities::{Account, BalanceChange, Commodity};

use super::balance_tree::BalanceTree;

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub(crate) struct SnapshotKey {
    pub(crate) account: Account,
    pub(crate) since: NaiveDate,
    pub(crate) currency: Commodity,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum Snapshot {
    /// No transaction has reached the since-date yet.
    Pending,
    /// `None` if the subtree balance had overflowed when captured.
    Captured(Option<Decimal>),
}

/// Starting balance of every (account, since, currency) window.
///
/// Pending slots are bucketed by since-date so that resolution only touches
/// the windows that have just opened. Each slot is captured at most once.
#[derive(Debug)]
pub(crate) struct SnapshotStore {
    pending: BTreeMap<NaiveDate, BTreeSet<(Account, Commodity)>>,
    captured: HashMap<SnapshotKey, Option<Decimal>>,
}

impl SnapshotStore {
    pub(crate) fn new<'a>(assertions: impl IntoIterator<Item = &'a BalanceChange>) -> Self {
        let pending = assertions.into_iter().fold(
            BTreeMap::new(),
            |mut pending: BTreeMap<NaiveDate, BTreeSet<(Account, Commodity)>>, a| {
                pending
                    .entry(a.since)
                    .or_default()
                    .insert((a.account.clone(), a.expected.currency.clone()));
                pending
            },
        );
        Self {
            pending,
            captured: HashMap::new(),
        }
    }

    /// Captures the current subtree balance of every pending slot whose
    /// since-date is on or before `date`. Must run before the postings dated
    /// `date` are applied.
    pub(crate) fn resolve(&mut self, date: NaiveDate, tree: &BalanceTree) {
        let still_pending = match date.succ_opt() {
            Some(next) => self.pending.split_off(&next),
            None => BTreeMap::new(),
        };
        let due = std::mem::replace(&mut self.pending, still_pending);
        for (since, slots) in due {
            for (account, currency) in slots {
                let units = tree.subtree_units(&account, &currency);
                debug!(
                    account = account.as_str(),
                    %since,
                    currency = currency.as_str(),
                    ?units,
                    "captured window starting balance"
                );
                self.captured.insert(
                    SnapshotKey {
                        account,
                        since,
                        currency,
                    },
                    units,
                );
            }
        }
    }

    pub(crate) fn get(&self, key: &SnapshotKey) -> Snapshot {
        match self.captured.get(key) {
            Some(units) => Snapshot::Captured(*units),
            None => Snapshot::Pending,
        }
    }

    /// Captures a single slot ahead of any transaction, used when an
    /// assertion is evaluated while its window has seen no activity.
    pub(crate) fn capture(&mut self, key: &SnapshotKey, tree: &BalanceTree) -> Option<Decimal> {
        if let Some(units) = self.captured.get(key) {
            return *units;
        }
        if let Some(slots) = self.pending.get_mut(&key.since) {
            slots.remove(&(key.account.clone(), key.currency.clone()));
            if slots.is_empty() {
                self.pending.remove(&key.since);
            }
        }
        let units = tree.subtree_units(&key.account, &key.currency);
        self.captured.insert(key.clone(), units);
        units
    }

    pub(crate) fn pending_len(&self) -> usize {
        self.pending.values().map(|s| s.len()).sum()
    }
}
