//! Shared test fixtures for building classified blocks by hand.

use tonact_common::models::{
    blockchain::{Block, BlockPayload, EventNode, InboundMessage, Transaction},
    AccountId, Lt,
};

const FIXED_UTIME: u32 = 1_700_000_000;

pub fn inbound_node(msg_hash: &str, tx_hash: &str, account: &str, lt: Lt) -> EventNode {
    EventNode::Inbound {
        message: InboundMessage::new(
            msg_hash.to_string(),
            Transaction::new(tx_hash.to_string(), AccountId::from(account), lt, FIXED_UTIME),
        ),
    }
}

pub fn tick_tock_node(tx_hash: &str, account: &str, lt: Lt) -> EventNode {
    EventNode::TickTock {
        tx: Transaction::new(tx_hash.to_string(), AccountId::from(account), lt, FIXED_UTIME),
    }
}

/// A block over the given nodes with timing bounds derived from them.
pub fn block_with_nodes(payload: BlockPayload, event_nodes: Vec<EventNode>) -> Block {
    let min_lt = event_nodes.iter().map(EventNode::lt).min().unwrap_or(0);
    let max_lt = event_nodes.iter().map(EventNode::lt).max().unwrap_or(0);
    Block {
        payload,
        event_nodes,
        min_lt,
        max_lt,
        min_utime: FIXED_UTIME,
        max_utime: FIXED_UTIME,
        failed: false,
        initiating_event_node: None,
    }
}

/// The minimal block: one inbound node, no initiator.
pub fn block_with(payload: BlockPayload) -> Block {
    block_with_nodes(payload, vec![inbound_node("msg-hash-aaa", "tx-hash-only", "0:node", 100)])
}

/// One payload per recognized operation type, all with default contents.
pub fn all_known_payloads() -> Vec<BlockPayload> {
    vec![
        BlockPayload::CallContract(Default::default()),
        BlockPayload::ContractDeploy(Default::default()),
        BlockPayload::TonTransfer(Default::default()),
        BlockPayload::JettonTransfer(Default::default()),
        BlockPayload::JettonBurn(Default::default()),
        BlockPayload::JettonMint(Default::default()),
        BlockPayload::JettonSwap(Default::default()),
        BlockPayload::NftTransfer(Default::default()),
        BlockPayload::NftDiscovery(Default::default()),
        BlockPayload::NftMint(Default::default()),
        BlockPayload::ChangeDnsRecord(Default::default()),
        BlockPayload::DeleteDnsRecord(Default::default()),
        BlockPayload::DnsRenew(Default::default()),
        BlockPayload::TonstakersDeposit(Default::default()),
        BlockPayload::TonstakersWithdrawRequest(Default::default()),
        BlockPayload::TonstakersWithdraw(Default::default()),
        BlockPayload::NominatorPoolDeposit(Default::default()),
        BlockPayload::NominatorPoolWithdrawRequest(Default::default()),
        BlockPayload::JvaultStake(Default::default()),
        BlockPayload::JvaultUnstake(Default::default()),
        BlockPayload::JvaultClaim(Default::default()),
        BlockPayload::DexDepositLiquidity(Default::default()),
        BlockPayload::DexWithdrawLiquidity(Default::default()),
        BlockPayload::DedustDepositLiquidity(Default::default()),
        BlockPayload::DedustDepositLiquidityPartial(Default::default()),
        BlockPayload::MultisigCreateOrder(Default::default()),
        BlockPayload::MultisigApprove(Default::default()),
        BlockPayload::VestingSendMessage(Default::default()),
        BlockPayload::VestingAddWhitelist(Default::default()),
        BlockPayload::Subscribe(Default::default()),
        BlockPayload::Unsubscribe(Default::default()),
        BlockPayload::ElectionDeposit(Default::default()),
        BlockPayload::ElectionRecover(Default::default()),
        BlockPayload::AuctionBid(Default::default()),
    ]
}
