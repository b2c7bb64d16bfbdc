use std::collections::{BTreeSet, HashMap};

use crate::entities::{Account, Close, Directive, Open, ACCOUNT_SEPARATOR};

impl Account {
    /// Parent account, or `None` for a root-level account.
    pub fn parent(&self) -> Option<Account> {
        self.0
            .rsplit_once(ACCOUNT_SEPARATOR)
            .map(|(parent, _)| Account(parent.to_string()))
    }

    /// True if `self` is `parent` or lies below it. Matches on whole
    /// segments only: `Assets:BankA` does not cover `Assets:BankAlpha`.
    pub fn is_self_or_descendant_of(&self, parent: &Account) -> bool {
        match self.0.strip_prefix(parent.0.as_str()) {
            Some("") => true,
            Some(rest) => rest.starts_with(ACCOUNT_SEPARATOR),
            None => false,
        }
    }
}

/// Returns a predicate matching `parent` and all of its descendants.
pub(crate) fn parent_matcher(parent: &Account) -> impl Fn(&Account) -> bool + '_ {
    move |account| account.is_self_or_descendant_of(parent)
}

/// Every account path referenced anywhere in the directives.
pub(crate) fn get_accounts(entries: &[Directive]) -> BTreeSet<Account> {
    entries
        .iter()
        .flat_map(|entry| -> Vec<&Account> {
            match entry {
                Directive::Open(o) => vec![&o.account],
                Directive::Close(c) => vec![&c.account],
                Directive::Transaction(t) => t.postings.iter().map(|p| &p.account).collect(),
                Directive::BalanceChange(b) => vec![&b.account],
                Directive::Custom(_) | Directive::Other(_) => vec![],
            }
        })
        .cloned()
        .collect()
}

#[derive(Debug, Clone, Default)]
pub(crate) struct OpenClose {
    pub(crate) open: Option<Open>,
    pub(crate) close: Option<Close>,
}

/// Open and Close directives per account. The first Open/Close seen for an
/// account wins.
pub(crate) fn get_account_open_close(entries: &[Directive]) -> HashMap<Account, OpenClose> {
    entries
        .iter()
        .fold(HashMap::new(), |mut map: HashMap<Account, OpenClose>, entry| {
            match entry {
                Directive::Open(o) => {
                    let slot = map.entry(o.account.clone()).or_default();
                    if slot.open.is_none() {
                        slot.open = Some(o.clone());
                    }
                }
                Directive::Close(c) => {
                    let slot = map.entry(c.account.clone()).or_default();
                    if slot.close.is_none() {
                        slot.close = Some(c.clone());
                    }
                }
                _ => {}
            }
            map
        })
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::entities::account;

    fn date(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2020, 1, d).unwrap()
    }

    #[test]
    fn test_parent() {
        assert_eq!(
            account("Assets:BankA:Checking").parent(),
            Some(account("Assets:BankA"))
        );
        assert_eq!(account("Assets").parent(), None);
    }

    #[test]
    fn test_matcher_respects_segment_boundaries() {
        let parent = account("Assets:BankA");
        let matcher = parent_matcher(&parent);
        assert!(matcher(&account("Assets:BankA")));
        assert!(matcher(&account("Assets:BankA:Checking")));
        assert!(!matcher(&account("Assets:BankAlpha")));
        assert!(!matcher(&account("Assets")));
        assert!(!matcher(&account("Liabilities:BankA")));
    }

    #[test]
    fn test_open_close_map_keeps_first_open() {
        let entries: Vec<Directive> = vec![
            Open::new(date(1), account("Assets:BankA"), vec![]).into(),
            Open::new(
                date(2),
                account("Assets:BankA"),
                vec![crate::entities::commodity("GBP")],
            )
            .into(),
            Close {
                date: date(3),
                account: account("Assets:Old"),
                meta: Default::default(),
            }
            .into(),
        ];
        let map = get_account_open_close(&entries);
        let bank = &map[&account("Assets:BankA")];
        assert_eq!(bank.open.as_ref().map(|o| o.date), Some(date(1)));
        let old = &map[&account("Assets:Old")];
        assert!(old.open.is_none());
        assert!(old.close.is_some());
        assert_eq!(get_accounts(&entries).len(), 2);
    }
}
