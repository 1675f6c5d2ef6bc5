//! Per-operation-type normalizers.
//!
//! One pure function per operation shape, each mapping a typed block
//! payload onto the in-progress action builder. The module split mirrors
//! the upstream classifier's block taxonomy.

mod auction;
mod basic;
mod dns;
mod elections;
mod jettons;
mod liquidity;
mod multisig;
mod nft;
mod staking;
mod subscriptions;
mod swaps;
mod vesting;

pub(super) use auction::fill_auction_bid;
pub(super) use basic::{fill_contract_call, fill_ton_transfer};
pub(super) use dns::{fill_change_dns_record, fill_delete_dns_record, fill_dns_renew};
pub(super) use elections::fill_election_stake;
pub(super) use jettons::{fill_jetton_burn, fill_jetton_mint, fill_jetton_transfer};
pub(super) use liquidity::{
    fill_dedust_deposit_liquidity, fill_dedust_deposit_liquidity_partial,
    fill_dex_deposit_liquidity, fill_dex_withdraw_liquidity,
};
pub(super) use multisig::{fill_multisig_approve, fill_multisig_create_order};
pub(super) use nft::{fill_nft_discovery, fill_nft_mint, fill_nft_transfer};
pub(super) use staking::{
    fill_jvault_claim, fill_jvault_stake, fill_jvault_unstake, fill_nominator_pool_deposit,
    fill_nominator_pool_withdraw_request, fill_tonstakers_deposit, fill_tonstakers_withdraw,
    fill_tonstakers_withdraw_request,
};
pub(super) use subscriptions::{fill_subscribe, fill_unsubscribe};
pub(super) use swaps::fill_jetton_swap;
pub(super) use vesting::{fill_vesting_add_whitelist, fill_vesting_send_message};
