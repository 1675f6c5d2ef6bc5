//! The action builder: invariant skeleton up front, variant fields as
//! immutable assignments, one finalized record out.

use std::collections::HashSet;

use tonact_common::models::{
    action::{Action, ActionData},
    blockchain::Block,
    ActionType, Lt, TraceId, TxHash, UnixTime,
};

use super::{identity::derive_action_id, DiagnosticSink};

/// Accumulates the fields of an action and yields a single finalized
/// [`Action`] from [`ActionBuilder::build`]. A partially filled record
/// can never leak to callers.
#[derive(Debug, Clone)]
pub struct ActionBuilder {
    trace_id: TraceId,
    action_id: String,
    action_type: String,
    tx_hashes: Vec<TxHash>,
    start_lt: Lt,
    end_lt: Lt,
    start_utime: UnixTime,
    end_utime: UnixTime,
    success: bool,
    accounts: Vec<String>,
    source: Option<String>,
    source_secondary: Option<String>,
    destination: Option<String>,
    destination_secondary: Option<String>,
    asset: Option<String>,
    asset2: Option<String>,
    asset_secondary: Option<String>,
    amount: Option<u128>,
    value: Option<u128>,
    opcode: Option<u32>,
    data: Option<ActionData>,
}

impl ActionBuilder {
    /// Builds the invariant skeleton common to every operation type:
    /// identity, deduplicated transaction hashes, the initial account
    /// set, timing bounds and the success flag.
    pub fn new(block: &Block, trace_id: &str) -> Self {
        let mut tx_hashes: Vec<TxHash> = Vec::with_capacity(block.event_nodes.len());
        for node in &block.event_nodes {
            if !tx_hashes.iter().any(|h| h == node.tx_hash()) {
                tx_hashes.push(node.tx_hash().to_owned());
            }
        }

        // A tick-tock node is owned directly by one account; an inbound
        // node contributes the account of the transaction holding its
        // message. Both are the node's owning account.
        let accounts = block
            .event_nodes
            .iter()
            .map(|node| node.account().as_str().to_owned())
            .collect();

        Self {
            trace_id: trace_id.to_owned(),
            action_id: derive_action_id(block),
            action_type: block.btype().to_owned(),
            tx_hashes,
            start_lt: block.min_lt,
            end_lt: block.max_lt,
            start_utime: block.min_utime,
            end_utime: block.max_utime,
            success: !block.failed,
            accounts,
            source: None,
            source_secondary: None,
            destination: None,
            destination_secondary: None,
            asset: None,
            asset2: None,
            asset_secondary: None,
            amount: None,
            value: None,
            opcode: None,
            data: None,
        }
    }

    pub fn action_id(&self) -> &str {
        &self.action_id
    }

    /// Overrides the action type. Used by the staking family and other
    /// variants whose canonical type differs from the block tag.
    pub fn action_type(mut self, action_type: ActionType) -> Self {
        self.action_type = action_type.to_string();
        self
    }

    /// Overrides the success flag, e.g. from a multisig approval result.
    pub fn success(mut self, success: bool) -> Self {
        self.success = success;
        self
    }

    pub fn source(mut self, source: Option<String>) -> Self {
        self.source = source;
        self
    }

    pub fn source_secondary(mut self, source_secondary: Option<String>) -> Self {
        self.source_secondary = source_secondary;
        self
    }

    pub fn destination(mut self, destination: Option<String>) -> Self {
        self.destination = destination;
        self
    }

    pub fn destination_secondary(mut self, destination_secondary: Option<String>) -> Self {
        self.destination_secondary = destination_secondary;
        self
    }

    pub fn asset(mut self, asset: Option<String>) -> Self {
        self.asset = asset;
        self
    }

    pub fn asset2(mut self, asset2: Option<String>) -> Self {
        self.asset2 = asset2;
        self
    }

    pub fn asset_secondary(mut self, asset_secondary: Option<String>) -> Self {
        self.asset_secondary = asset_secondary;
        self
    }

    pub fn amount(mut self, amount: Option<u128>) -> Self {
        self.amount = amount;
        self
    }

    pub fn value(mut self, value: Option<u128>) -> Self {
        self.value = value;
        self
    }

    pub fn opcode(mut self, opcode: Option<u32>) -> Self {
        self.opcode = opcode;
        self
    }

    pub fn data(mut self, data: ActionData) -> Self {
        self.data = Some(data);
        self
    }

    /// Finalizes the record: folds the generic address fields into the
    /// account set, extends the transaction hash set with the initiating
    /// node and enforces the account hygiene invariants.
    ///
    /// Cannot fail; however incomplete the input, the output is a
    /// well-formed action.
    pub fn build(self, block: &Block, sink: &dyn DiagnosticSink) -> Action {
        let mut candidates: Vec<Option<String>> =
            self.accounts.into_iter().map(Some).collect();
        candidates.push(self.source.clone());
        candidates.push(self.source_secondary.clone());
        candidates.push(self.destination.clone());
        candidates.push(self.destination_secondary.clone());

        let mut extended_tx_hashes = self.tx_hashes.clone();
        if let Some(initiator) = &block.initiating_event_node {
            if !extended_tx_hashes
                .iter()
                .any(|h| h == initiator.tx_hash())
            {
                extended_tx_hashes.push(initiator.tx_hash().to_owned());
            }
            if !initiator.is_tick_tock() {
                let account = initiator.account().as_str();
                let already_known = candidates
                    .iter()
                    .any(|a| a.as_deref() == Some(account));
                if !already_known {
                    // Signals a potential upstream classification gap.
                    sink.initiator_not_in_accounts(
                        initiator.tx_hash(),
                        &self.trace_id,
                        &self.action_id,
                    );
                }
                candidates.push(Some(account.to_owned()));
            }
        }

        let mut seen = HashSet::new();
        let accounts = candidates
            .into_iter()
            .flatten()
            .filter(|account| seen.insert(account.clone()))
            .collect();

        Action {
            trace_id: self.trace_id,
            action_id: self.action_id,
            action_type: self.action_type,
            tx_hashes: self.tx_hashes,
            extended_tx_hashes,
            start_lt: self.start_lt,
            end_lt: self.end_lt,
            start_utime: self.start_utime,
            end_utime: self.end_utime,
            success: self.success,
            accounts,
            source: self.source,
            source_secondary: self.source_secondary,
            destination: self.destination,
            destination_secondary: self.destination_secondary,
            asset: self.asset,
            asset2: self.asset2,
            asset_secondary: self.asset_secondary,
            amount: self.amount,
            value: self.value,
            opcode: self.opcode,
            data: self.data,
        }
    }
}
