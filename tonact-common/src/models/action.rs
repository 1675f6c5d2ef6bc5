//! Output-side models: the canonical, storage-ready action record.
//!
//! An [`Action`] is constructed fresh per block, fully populated in one
//! pass by the normalizer and then handed to persistence. It is never
//! mutated afterwards. Exactly one nested payload (or none, for
//! unrecognized operation types) is populated per action, which the
//! [`ActionData`] enum enforces structurally.

use serde::{Deserialize, Serialize};

use super::{Dex, Lt, StakingProvider, TraceId, TxHash, UnixTime};

/// The canonical normalized representation of one detected operation
/// within a trace.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Action {
    pub trace_id: TraceId,
    /// Content-derived identifier, stable across re-runs. Downstream
    /// dedup is keyed on it.
    pub action_id: String,
    #[serde(rename = "type")]
    pub action_type: String,
    pub tx_hashes: Vec<TxHash>,
    /// `tx_hashes` extended with the initiating node's hash, always a
    /// superset of `tx_hashes`.
    pub extended_tx_hashes: Vec<TxHash>,
    pub start_lt: Lt,
    pub end_lt: Lt,
    pub start_utime: UnixTime,
    pub end_utime: UnixTime,
    pub success: bool,
    /// Participant accounts, deduplicated, no nulls.
    pub accounts: Vec<String>,
    pub source: Option<String>,
    pub source_secondary: Option<String>,
    pub destination: Option<String>,
    pub destination_secondary: Option<String>,
    pub asset: Option<String>,
    pub asset2: Option<String>,
    pub asset_secondary: Option<String>,
    pub amount: Option<u128>,
    pub value: Option<u128>,
    pub opcode: Option<u32>,
    pub data: Option<ActionData>,
}

/// The type-specific nested payload of an action, selected by `type`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionData {
    TonTransfer(TonTransferData),
    JettonTransfer(JettonTransferData),
    JettonSwap(JettonSwapData),
    NftTransfer(NftTransferData),
    NftDiscovery(NftDiscoveryData),
    NftMint(NftMintData),
    DexDepositLiquidity(DexDepositLiquidityData),
    DexWithdrawLiquidity(DexWithdrawLiquidityData),
    Staking(StakingData),
    JvaultStake(JvaultStakeData),
    JvaultClaim(JvaultClaimData),
    ChangeDnsRecord(ChangeDnsRecordData),
    MultisigCreateOrder(MultisigCreateOrderData),
    MultisigApprove(MultisigApproveData),
    VestingSendMessage(VestingSendMessageData),
    VestingAddWhitelist(VestingAddWhitelistData),
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TonTransferData {
    pub content: Option<String>,
    pub encrypted: bool,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct JettonTransferData {
    pub query_id: u64,
    pub response_destination: Option<String>,
    pub forward_amount: u128,
    pub custom_payload: Option<String>,
    pub forward_payload: Option<String>,
    pub comment: Option<String>,
    pub is_encrypted_comment: bool,
}

/// One resolved leg of a DEX swap.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DexTransferData {
    pub amount: u128,
    pub source: Option<String>,
    pub source_jetton_wallet: Option<String>,
    pub destination: Option<String>,
    pub destination_jetton_wallet: Option<String>,
    pub asset: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct JettonSwapData {
    pub dex: Dex,
    pub sender: Option<String>,
    pub dex_incoming_transfer: DexTransferData,
    pub dex_outgoing_transfer: DexTransferData,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct NftTransferData {
    pub query_id: Option<u64>,
    pub is_purchase: bool,
    pub price: Option<u128>,
    pub nft_item_index: Option<u128>,
    pub forward_amount: Option<u128>,
    pub custom_payload: Option<String>,
    pub forward_payload: Option<String>,
    pub response_destination: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct NftDiscoveryData {
    pub query_id: u64,
    pub collection_address: String,
    pub nft_item_index: u128,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct NftMintData {
    pub nft_item_index: u128,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DexDepositLiquidityData {
    pub dex: Dex,
    pub amount1: Option<u128>,
    pub amount2: Option<u128>,
    pub asset1: Option<String>,
    pub asset2: Option<String>,
    pub user_jetton_wallet_1: Option<String>,
    pub user_jetton_wallet_2: Option<String>,
    pub lp_tokens_minted: Option<u128>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DexWithdrawLiquidityData {
    pub dex: Dex,
    pub amount1: Option<u128>,
    pub amount2: Option<u128>,
    pub asset_out_1: Option<String>,
    pub asset_out_2: Option<String>,
    pub user_jetton_wallet_1: Option<String>,
    pub user_jetton_wallet_2: Option<String>,
    pub dex_jetton_wallet_1: Option<String>,
    pub dex_jetton_wallet_2: Option<String>,
    pub dex_wallet_1: Option<String>,
    pub dex_wallet_2: Option<String>,
    pub is_refund: bool,
    pub lp_tokens_burnt: Option<u128>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StakingData {
    pub provider: StakingProvider,
    /// Provider-specific NFT receipt reference, when one exists.
    pub ts_nft: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct JvaultStakeData {
    pub period: u64,
    pub minted_stake_jettons: Option<u128>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct JvaultClaimData {
    pub claimed_jettons: Vec<Option<String>>,
    pub claimed_amounts: Vec<u128>,
}

/// Payload of DNS record changes. A delete carries the key with all
/// value fields null.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ChangeDnsRecordData {
    pub value_schema: Option<DnsValueSchema>,
    pub flags: Option<u8>,
    /// Resolver/contract address, or the hex ADNL address for ADNL
    /// records.
    pub address: Option<String>,
    /// The record key, hex encoded.
    pub key: String,
    pub dns_text: Option<String>,
}

/// The value schema of a DNS record, named as on-chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DnsValueSchema {
    #[serde(rename = "DNSNextResolver")]
    NextResolver,
    #[serde(rename = "DNSSmcAddress")]
    SmcAddress,
    #[serde(rename = "DNSAdnlAddress")]
    AdnlAddress,
    #[serde(rename = "DNSText")]
    Text,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct MultisigCreateOrderData {
    pub query_id: u64,
    pub order_seqno: u64,
    pub is_created_by_signer: bool,
    pub is_signed_by_creator: bool,
    pub creator_index: Option<u32>,
    pub expiration_date: Option<UnixTime>,
    pub order_boc: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct MultisigApproveData {
    pub signer_index: Option<u32>,
    pub exit_code: Option<i32>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct VestingSendMessageData {
    pub query_id: u64,
    pub message_boc: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct VestingAddWhitelistData {
    pub query_id: u64,
    pub accounts_added: Vec<String>,
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_action_data_json_tag() {
        let data = ActionData::TonTransfer(TonTransferData {
            content: Some("hi".to_string()),
            encrypted: false,
        });
        let encoded = serde_json::to_value(&data).unwrap();
        assert_eq!(encoded["ton_transfer"]["content"], "hi");
    }

    #[test]
    fn test_dns_value_schema_names() {
        let encoded = serde_json::to_string(&DnsValueSchema::NextResolver).unwrap();
        assert_eq!(encoded, "\"DNSNextResolver\"");
    }

    #[test]
    fn test_action_type_field_renamed() {
        let action =
            Action { action_type: "ton_transfer".to_string(), ..Default::default() };
        let encoded = serde_json::to_value(&action).unwrap();
        assert_eq!(encoded["type"], "ton_transfer");
    }
}
