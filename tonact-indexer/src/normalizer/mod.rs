//! Turns one classified trace block into one flat action record.
//!
//! [`normalize_block`] is total and pure apart from diagnostics: every
//! block yields exactly one action, unrecognized operation types
//! included, and the same block always yields the same bytes.

#[cfg(test)]
use mockall::automock;
use tonact_common::models::{
    action::Action,
    blockchain::{Block, BlockPayload},
};
use tracing::{info, warn};

pub mod builder;
pub mod identity;
mod variants;

use builder::ActionBuilder;

/// Receives the non-fatal findings of a normalization pass.
///
/// Normalization never fails; whatever is off about a block is reported
/// here and the pass continues. Callers that do not care pass a
/// [`TracingSink`].
#[cfg_attr(test, automock)]
pub trait DiagnosticSink {
    /// The block carries an operation type this version does not know.
    fn unrecognized_type(&self, btype: &str, trace_id: &str);

    /// A field the operation type is expected to carry was absent.
    fn missing_field(&self, action_type: &str, field: &str, trace_id: &str);

    /// The initiating node's account was not already part of the action's
    /// account set.
    fn initiator_not_in_accounts(&self, tx_hash: &str, trace_id: &str, action_id: &str);
}

/// The production sink: findings become structured log events.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn unrecognized_type(&self, btype: &str, trace_id: &str) {
        warn!(btype, trace_id, "unrecognized operation type");
    }

    fn missing_field(&self, action_type: &str, field: &str, trace_id: &str) {
        warn!(action_type, field, trace_id, "expected field is absent");
    }

    fn initiator_not_in_accounts(&self, tx_hash: &str, trace_id: &str, action_id: &str) {
        info!(tx_hash, trace_id, action_id, "initiator account missing from action accounts");
    }
}

/// Normalizes one classified block into its flat action record.
pub fn normalize_block(block: &Block, trace_id: &str, sink: &dyn DiagnosticSink) -> Action {
    let builder = ActionBuilder::new(block, trace_id);
    let builder = match &block.payload {
        // A deploy is a contract call whose destination did not exist yet.
        BlockPayload::CallContract(data) | BlockPayload::ContractDeploy(data) => {
            variants::fill_contract_call(data, builder)
        }
        BlockPayload::TonTransfer(data) => {
            variants::fill_ton_transfer(data, builder, trace_id, sink)
        }
        BlockPayload::JettonTransfer(data) => variants::fill_jetton_transfer(data, builder),
        BlockPayload::JettonBurn(data) => variants::fill_jetton_burn(data, builder),
        BlockPayload::JettonMint(data) => variants::fill_jetton_mint(data, builder),
        BlockPayload::JettonSwap(data) => variants::fill_jetton_swap(data, builder),
        BlockPayload::NftTransfer(data) => variants::fill_nft_transfer(data, builder),
        BlockPayload::NftDiscovery(data) => variants::fill_nft_discovery(data, builder),
        BlockPayload::NftMint(data) => variants::fill_nft_mint(data, builder),
        BlockPayload::ChangeDnsRecord(data) => variants::fill_change_dns_record(data, builder),
        BlockPayload::DeleteDnsRecord(data) => variants::fill_delete_dns_record(data, builder),
        BlockPayload::DnsRenew(data) => variants::fill_dns_renew(data, builder),
        BlockPayload::TonstakersDeposit(data) => variants::fill_tonstakers_deposit(data, builder),
        BlockPayload::TonstakersWithdrawRequest(data) => {
            variants::fill_tonstakers_withdraw_request(data, builder)
        }
        BlockPayload::TonstakersWithdraw(data) => {
            variants::fill_tonstakers_withdraw(data, builder)
        }
        BlockPayload::NominatorPoolDeposit(data) => {
            variants::fill_nominator_pool_deposit(data, builder)
        }
        BlockPayload::NominatorPoolWithdrawRequest(data) => {
            variants::fill_nominator_pool_withdraw_request(data, builder)
        }
        BlockPayload::JvaultStake(data) => variants::fill_jvault_stake(data, builder),
        BlockPayload::JvaultUnstake(data) => variants::fill_jvault_unstake(data, builder),
        BlockPayload::JvaultClaim(data) => variants::fill_jvault_claim(data, builder),
        BlockPayload::DexDepositLiquidity(data) => {
            variants::fill_dex_deposit_liquidity(data, builder)
        }
        BlockPayload::DexWithdrawLiquidity(data) => {
            variants::fill_dex_withdraw_liquidity(data, builder)
        }
        BlockPayload::DedustDepositLiquidity(data) => {
            variants::fill_dedust_deposit_liquidity(data, builder)
        }
        BlockPayload::DedustDepositLiquidityPartial(data) => {
            variants::fill_dedust_deposit_liquidity_partial(data, builder)
        }
        BlockPayload::MultisigCreateOrder(data) => {
            variants::fill_multisig_create_order(data, builder)
        }
        BlockPayload::MultisigApprove(data) => variants::fill_multisig_approve(data, builder),
        BlockPayload::VestingSendMessage(data) => {
            variants::fill_vesting_send_message(data, builder)
        }
        BlockPayload::VestingAddWhitelist(data) => {
            variants::fill_vesting_add_whitelist(data, builder)
        }
        BlockPayload::Subscribe(data) => variants::fill_subscribe(data, builder),
        BlockPayload::Unsubscribe(data) => variants::fill_unsubscribe(data, builder),
        BlockPayload::ElectionDeposit(data) | BlockPayload::ElectionRecover(data) => {
            variants::fill_election_stake(data, builder)
        }
        BlockPayload::AuctionBid(data) => variants::fill_auction_bid(data, builder),
        // Unknown types still produce a well-formed base record so the
        // trace stays complete downstream.
        BlockPayload::Unknown { btype } => {
            sink.unrecognized_type(btype, trace_id);
            builder
        }
    };
    builder.build(block, sink)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::testing::{all_known_payloads, block_with};

    #[test]
    fn test_unknown_type_yields_base_record_and_diagnostic() {
        let block = block_with(BlockPayload::Unknown { btype: "mystery_op".to_string() });

        let mut sink = MockDiagnosticSink::new();
        sink.expect_unrecognized_type()
            .withf(|btype, trace| btype == "mystery_op" && trace == "trace-1")
            .times(1)
            .return_const(());
        sink.expect_initiator_not_in_accounts().never();

        let action = normalize_block(&block, "trace-1", &sink);
        assert_eq!(action.action_type, "mystery_op");
        assert_eq!(action.source, None);
        assert_eq!(action.data, None);
        assert!(!action.tx_hashes.is_empty());
    }

    #[test]
    fn test_every_known_type_is_recognized() {
        for payload in all_known_payloads() {
            let block = block_with(payload);

            let mut sink = MockDiagnosticSink::new();
            sink.expect_unrecognized_type().never();
            // Default payloads may legitimately miss optional fields.
            sink.expect_missing_field().return_const(());
            sink.expect_initiator_not_in_accounts().return_const(());

            let action = normalize_block(&block, "trace-1", &sink);
            assert_eq!(action.action_id.len(), 44, "{}", block.btype());
        }
    }

    #[test]
    fn test_known_payload_fixture_is_exhaustive() {
        assert_eq!(all_known_payloads().len(), 34);
    }

    #[test]
    fn test_normalization_is_deterministic() {
        for payload in all_known_payloads() {
            let block = block_with(payload);
            let sink = TracingSink;
            let first = normalize_block(&block, "trace-1", &sink);
            let second = normalize_block(&block, "trace-1", &sink);
            assert_eq!(first, second);
        }
    }
}
