use std::collections::BTreeSet;

use tracing::{debug, trace, warn};

use crate::{
    data::models::custom_balance_change_model::{
        is_balance_change_entry, CustomBalanceChangeModel,
    },
    entities::{
        Account, BalanceChange, BalanceChangeConfig, BalanceError, BalanceErrorKind, Directive,
        MetaValue,
    },
    errors::BalanceChangeError,
    presentation::balance_error_fmt::invalid_directive_message,
};

use super::{
    account_impl::{get_account_open_close, get_accounts, parent_matcher},
    assertion_evaluator::{AssertionEvaluator, Evaluation},
    balance_tree::BalanceTree,
    snapshot_store::SnapshotStore,
};

pub(crate) const STARTING_AMOUNT_META: &str = "starting_amount";
pub(crate) const DIFF_AMOUNT_META: &str = "diff_amount";

/// Single chronological pass over the directives: applies transaction
/// postings to the tracked balances, captures window starting balances, and
/// checks every balance change assertion as it is reached.
///
/// Input is expected in date order (ties in input order); it is not
/// re-sorted.
pub(crate) struct ReplayEngine {
    config: BalanceChangeConfig,
}

struct ReplayState {
    tree: BalanceTree,
    snapshots: SnapshotStore,
    errors: Vec<BalanceError>,
    output: Vec<Directive>,
}

impl ReplayState {
    /// Process one directive and append it to the output.
    fn step(
        mut self,
        mut entry: Directive,
        assertion: Option<Result<BalanceChange, BalanceChangeError>>,
        evaluator: &AssertionEvaluator,
    ) -> Self {
        match assertion {
            Some(Ok(assertion)) => {
                let evaluation = evaluator.evaluate(&assertion, &self.tree, &mut self.snapshots);
                self.record(&mut entry, &assertion, evaluation);
            }
            Some(Err(e)) => {
                warn!(date = %entry.date(), error = %e, "skipping invalid balance_change directive");
                self.errors.push(BalanceError {
                    source: entry.meta().clone(),
                    message: invalid_directive_message(&e.to_string()),
                    entry: entry.clone(),
                    kind: BalanceErrorKind::InvalidDirective,
                });
            }
            None => {
                if let Directive::Transaction(tx) = &entry {
                    self.snapshots.resolve(tx.date, &self.tree);
                    for posting in &tx.postings {
                        // Only tracked accounts have a node.
                        if let Some(node) = self.tree.get(&posting.account) {
                            trace!(
                                account = posting.account.as_str(),
                                units = %posting.units,
                                "applying posting"
                            );
                            self.tree.add_amount(node, &posting.units);
                        }
                    }
                }
            }
        }
        self.output.push(entry);
        self
    }

    fn record(&mut self, entry: &mut Directive, assertion: &BalanceChange, evaluation: Evaluation) {
        let Evaluation {
            findings,
            starting_amount,
            diff_amount,
        } = evaluation;

        let meta = entry.meta_mut();
        if let Some(starting_amount) = starting_amount {
            meta.insert(STARTING_AMOUNT_META, MetaValue::Amount(starting_amount));
        }
        if let Some(diff_amount) = diff_amount {
            meta.insert(DIFF_AMOUNT_META, MetaValue::Amount(diff_amount));
        }

        for finding in findings {
            warn!(
                account = assertion.account.as_str(),
                date = %assertion.date,
                "{}",
                finding.message
            );
            self.errors.push(BalanceError {
                source: entry.meta().clone(),
                message: finding.message,
                entry: entry.clone(),
                kind: finding.kind,
            });
        }
    }
}

/// Structured view of a balance change assertion, if `entry` is one.
fn as_balance_change(entry: &Directive) -> Option<Result<BalanceChange, BalanceChangeError>> {
    match entry {
        Directive::BalanceChange(b) => Some(Ok(b.clone())),
        Directive::Custom(c) if is_balance_change_entry(c) => {
            Some(CustomBalanceChangeModel::try_from(c).map(Into::into))
        }
        _ => None,
    }
}

impl ReplayEngine {
    pub(crate) fn new(config: BalanceChangeConfig) -> Self {
        Self { config }
    }

    pub(crate) fn process(&self, entries: Vec<Directive>) -> (Vec<Directive>, Vec<BalanceError>) {
        let assertions: Vec<Option<Result<BalanceChange, BalanceChangeError>>> =
            entries.iter().map(as_balance_change).collect();
        let valid_assertions = || assertions.iter().flatten().flatten();

        // Only accumulate balances for asserted accounts and their
        // sub-accounts; parents are summed from their children.
        let asserted_accounts: BTreeSet<Account> =
            valid_assertions().map(|a| a.account.clone()).collect();
        let matchers: Vec<_> = asserted_accounts.iter().map(parent_matcher).collect();
        let mut tree = BalanceTree::new();
        for account in &asserted_accounts {
            tree.get_or_create(account);
        }
        for account in get_accounts(&entries) {
            if matchers.iter().any(|matcher| matcher(&account)) {
                tree.get_or_create(&account);
            }
        }

        let snapshots = SnapshotStore::new(valid_assertions());
        debug!(
            asserted_accounts = asserted_accounts.len(),
            tracked_accounts = tree.len(),
            windows = snapshots.pending_len(),
            "starting balance change replay"
        );

        let open_close_map = get_account_open_close(&entries);
        let evaluator = AssertionEvaluator::new(&open_close_map, self.config.tolerance);

        let initial = ReplayState {
            tree,
            snapshots,
            errors: Vec::new(),
            output: Vec::with_capacity(entries.len()),
        };
        let ReplayState { errors, output, .. } = entries
            .into_iter()
            .zip(assertions)
            .fold(initial, |state, (entry, assertion)| {
                state.step(entry, assertion, &evaluator)
            });

        debug!(
            directives = output.len(),
            errors = errors.len(),
            "finished balance change replay"
        );
        (output, errors)
    }
}
