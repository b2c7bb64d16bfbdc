use std::collections::HashMap;

use rust_decimal::Decimal;

use crate::entities::{Account, Amount, Commodity, Inventory};

pub(crate) type NodeId = usize;

#[derive(Debug)]
struct BalanceNode {
    balance: Inventory,
    children: Vec<NodeId>,
}

/// Running balances for the subset of accounts taking part in balance change
/// assertions, arranged as the account hierarchy so that a parent's total
/// can be summed from its children.
///
/// Nodes live in an arena; node 0 is the unnamed root.
#[derive(Debug)]
pub(crate) struct BalanceTree {
    nodes: Vec<BalanceNode>,
    index: HashMap<Account, NodeId>,
}

impl BalanceTree {
    pub(crate) fn new() -> Self {
        Self {
            nodes: vec![BalanceNode {
                balance: Inventory::new(),
                children: Vec::new(),
            }],
            index: HashMap::new(),
        }
    }

    /// Returns the node for `account`, creating it and any missing ancestors.
    pub(crate) fn get_or_create(&mut self, account: &Account) -> NodeId {
        if let Some(id) = self.index.get(account) {
            return *id;
        }
        let parent_id = match account.parent() {
            Some(parent) => self.get_or_create(&parent),
            None => 0,
        };
        let id = self.nodes.len();
        self.nodes.push(BalanceNode {
            balance: Inventory::new(),
            children: Vec::new(),
        });
        self.nodes[parent_id].children.push(id);
        self.index.insert(account.clone(), id);
        id
    }

    pub(crate) fn get(&self, account: &Account) -> Option<NodeId> {
        self.index.get(account).copied()
    }

    /// Adds a posting's units to the node's own inventory.
    pub(crate) fn add_amount(&mut self, node: NodeId, amount: &Amount) {
        self.nodes[node].balance.add_amount(amount);
    }

    /// Sum of the node's own inventory and all of its descendants'.
    pub(crate) fn compute_subtree_balance(&self, node: NodeId) -> Inventory {
        let mut total = Inventory::new();
        let mut stack = vec![node];
        while let Some(id) = stack.pop() {
            let n = &self.nodes[id];
            total.add_inventory(&n.balance);
            stack.extend(n.children.iter().copied());
        }
        total
    }

    /// Subtree balance of a tracked account in one currency, `None` if it
    /// overflowed.
    ///
    /// Panics if the account is not tracked.
    pub(crate) fn subtree_units(
        &self,
        account: &Account,
        currency: &Commodity,
    ) -> Option<Decimal> {
        let node = self
            .get(account)
            .unwrap_or_else(|| panic!("missing balance node for '{}'", account.as_str()));
        self.compute_subtree_balance(node).units(currency)
    }

    /// Number of tracked accounts (excluding the root).
    pub(crate) fn len(&self) -> usize {
        self.index.len()
    }
}
