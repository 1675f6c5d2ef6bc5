//! Input-side models: the classified trace block graph produced by the
//! upstream pattern-detection engine.
//!
//! A [`Block`] groups the event nodes of one detected operation together
//! with a strongly typed per-operation payload. Blocks are immutable
//! inputs here; the normalizer never mutates them.

use serde::{Deserialize, Serialize};

use super::{AccountId, Asset, Dex, Lt, MsgHash, TxHash, UnixTime};

/// A ledger transaction participating in a trace.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Transaction {
    pub hash: TxHash,
    pub account: AccountId,
    pub lt: Lt,
    pub utime: UnixTime,
}

impl Transaction {
    pub fn new(hash: TxHash, account: AccountId, lt: Lt, utime: UnixTime) -> Self {
        Self { hash, account, lt, utime }
    }
}

/// An inbound message together with the transaction that received it.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct InboundMessage {
    pub hash: MsgHash,
    pub transaction: Transaction,
}

impl InboundMessage {
    pub fn new(hash: MsgHash, transaction: Transaction) -> Self {
        Self { hash, transaction }
    }
}

/// A participant transaction within a trace.
///
/// Either triggered by an inbound message, or a tick-tock transaction
/// which is self-triggered and owned directly by one account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventNode {
    Inbound { message: InboundMessage },
    TickTock { tx: Transaction },
}

impl EventNode {
    pub fn lt(&self) -> Lt {
        match self {
            EventNode::Inbound { message } => message.transaction.lt,
            EventNode::TickTock { tx } => tx.lt,
        }
    }

    pub fn tx_hash(&self) -> &str {
        match self {
            EventNode::Inbound { message } => &message.transaction.hash,
            EventNode::TickTock { tx } => &tx.hash,
        }
    }

    /// The account the node's transaction belongs to.
    pub fn account(&self) -> &AccountId {
        match self {
            EventNode::Inbound { message } => &message.transaction.account,
            EventNode::TickTock { tx } => &tx.account,
        }
    }

    pub fn msg_hash(&self) -> Option<&str> {
        match self {
            EventNode::Inbound { message } => Some(&message.hash),
            EventNode::TickTock { .. } => None,
        }
    }

    pub fn is_tick_tock(&self) -> bool {
        matches!(self, EventNode::TickTock { .. })
    }
}

/// The classified operation unit handed to the normalizer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Block {
    pub payload: BlockPayload,
    pub event_nodes: Vec<EventNode>,
    pub min_lt: Lt,
    pub max_lt: Lt,
    pub min_utime: UnixTime,
    pub max_utime: UnixTime,
    pub failed: bool,
    /// The node that triggered the chain of effects. May lie outside
    /// `event_nodes`.
    pub initiating_event_node: Option<EventNode>,
}

impl Block {
    /// The operation type tag of this block.
    pub fn btype(&self) -> &str {
        self.payload.tag()
    }
}

/// The closed set of operation shapes the upstream classifier emits, one
/// strongly typed payload per tag.
///
/// Dispatching on this enum is exhaustive by construction: a new
/// operation type is added here and nowhere else. `Unknown` carries the
/// tag of operation types this version does not recognize.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data", rename_all = "snake_case")]
pub enum BlockPayload {
    CallContract(ContractCall),
    ContractDeploy(ContractCall),
    TonTransfer(TonTransfer),
    JettonTransfer(JettonTransfer),
    JettonBurn(JettonBurn),
    JettonMint(JettonMint),
    JettonSwap(JettonSwap),
    NftTransfer(NftTransfer),
    NftDiscovery(NftDiscovery),
    NftMint(NftMint),
    ChangeDnsRecord(DnsChangeRecord),
    DeleteDnsRecord(DnsDeleteRecord),
    DnsRenew(DnsRenew),
    TonstakersDeposit(TonstakersDeposit),
    TonstakersWithdrawRequest(TonstakersWithdrawRequest),
    TonstakersWithdraw(TonstakersWithdraw),
    NominatorPoolDeposit(NominatorPoolDeposit),
    NominatorPoolWithdrawRequest(NominatorPoolWithdrawRequest),
    JvaultStake(JvaultStake),
    JvaultUnstake(JvaultUnstake),
    JvaultClaim(JvaultClaim),
    DexDepositLiquidity(DexDepositLiquidity),
    DexWithdrawLiquidity(DexWithdrawLiquidity),
    DedustDepositLiquidity(DedustDepositLiquidity),
    DedustDepositLiquidityPartial(DedustDepositLiquidityPartial),
    MultisigCreateOrder(MultisigCreateOrder),
    MultisigApprove(MultisigApprove),
    VestingSendMessage(VestingSendMessage),
    VestingAddWhitelist(VestingAddWhitelist),
    Subscribe(Subscribe),
    Unsubscribe(Unsubscribe),
    ElectionDeposit(ElectionStake),
    ElectionRecover(ElectionStake),
    AuctionBid(AuctionBid),
    Unknown { btype: String },
}

impl BlockPayload {
    pub fn tag(&self) -> &str {
        match self {
            BlockPayload::CallContract(_) => "call_contract",
            BlockPayload::ContractDeploy(_) => "contract_deploy",
            BlockPayload::TonTransfer(_) => "ton_transfer",
            BlockPayload::JettonTransfer(_) => "jetton_transfer",
            BlockPayload::JettonBurn(_) => "jetton_burn",
            BlockPayload::JettonMint(_) => "jetton_mint",
            BlockPayload::JettonSwap(_) => "jetton_swap",
            BlockPayload::NftTransfer(_) => "nft_transfer",
            BlockPayload::NftDiscovery(_) => "nft_discovery",
            BlockPayload::NftMint(_) => "nft_mint",
            BlockPayload::ChangeDnsRecord(_) => "change_dns_record",
            BlockPayload::DeleteDnsRecord(_) => "delete_dns_record",
            BlockPayload::DnsRenew(_) => "dns_renew",
            BlockPayload::TonstakersDeposit(_) => "tonstakers_deposit",
            BlockPayload::TonstakersWithdrawRequest(_) => "tonstakers_withdraw_request",
            BlockPayload::TonstakersWithdraw(_) => "tonstakers_withdraw",
            BlockPayload::NominatorPoolDeposit(_) => "nominator_pool_deposit",
            BlockPayload::NominatorPoolWithdrawRequest(_) => "nominator_pool_withdraw_request",
            BlockPayload::JvaultStake(_) => "jvault_stake",
            BlockPayload::JvaultUnstake(_) => "jvault_unstake",
            BlockPayload::JvaultClaim(_) => "jvault_claim",
            BlockPayload::DexDepositLiquidity(_) => "dex_deposit_liquidity",
            BlockPayload::DexWithdrawLiquidity(_) => "dex_withdraw_liquidity",
            BlockPayload::DedustDepositLiquidity(_) => "dedust_deposit_liquidity",
            BlockPayload::DedustDepositLiquidityPartial(_) => "dedust_deposit_liquidity_partial",
            BlockPayload::MultisigCreateOrder(_) => "multisig_create_order",
            BlockPayload::MultisigApprove(_) => "multisig_approve",
            BlockPayload::VestingSendMessage(_) => "vesting_send_message",
            BlockPayload::VestingAddWhitelist(_) => "vesting_add_whitelist",
            BlockPayload::Subscribe(_) => "subscribe",
            BlockPayload::Unsubscribe(_) => "unsubscribe",
            BlockPayload::ElectionDeposit(_) => "election_deposit",
            BlockPayload::ElectionRecover(_) => "election_recover",
            BlockPayload::AuctionBid(_) => "auction_bid",
            BlockPayload::Unknown { btype } => btype,
        }
    }
}

/// Payload of a plain contract call or deploy.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ContractCall {
    pub opcode: u32,
    pub value: u128,
    pub source: Option<AccountId>,
    pub destination: Option<AccountId>,
}

/// Payload of a native currency transfer.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TonTransfer {
    pub value: u128,
    pub source: AccountId,
    pub destination: Option<AccountId>,
    /// Decoded plaintext comment; raw bytes when `encrypted` is set.
    pub comment: Option<String>,
    pub encrypted: bool,
}

/// Payload of a jetton transfer, routed through the sender's and
/// receiver's jetton wallet contracts.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct JettonTransfer {
    pub sender: AccountId,
    pub sender_wallet: AccountId,
    pub receiver: AccountId,
    pub receiver_wallet: Option<AccountId>,
    pub amount: u128,
    pub asset: Option<Asset>,
    pub query_id: u64,
    pub response_destination: Option<AccountId>,
    pub forward_amount: u128,
    pub custom_payload: Option<String>,
    pub forward_payload: Option<String>,
    /// Raw comment bytes; plaintext UTF-8 unless `encrypted_comment` is
    /// set.
    pub comment: Option<Vec<u8>>,
    pub encrypted_comment: bool,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct JettonBurn {
    pub owner: AccountId,
    pub jetton_wallet: AccountId,
    pub asset: Asset,
    pub amount: u128,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct JettonMint {
    pub to: AccountId,
    pub to_jetton_wallet: AccountId,
    pub asset: Asset,
    /// Minted jetton amount. Absent when the mint opcode does not carry
    /// it, which is distinct from a zero amount.
    pub amount: Option<u128>,
    pub ton_amount: Option<u128>,
}

/// One leg of a DEX swap.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DexTransfer {
    pub amount: u128,
    pub source: Option<AccountId>,
    pub source_jetton_wallet: Option<AccountId>,
    pub destination: Option<AccountId>,
    pub destination_jetton_wallet: Option<AccountId>,
    pub asset: Option<Asset>,
}

/// Payload of a swap executed against a DEX.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct JettonSwap {
    pub dex: Dex,
    pub sender: Option<AccountId>,
    pub dex_incoming_transfer: DexTransfer,
    pub dex_outgoing_transfer: DexTransfer,
    /// Explicit source asset, reported by protocol variants that carry it
    /// (e.g. stonfi v2). Wins over the leg-derived default.
    pub source_asset: Option<Asset>,
    pub destination_asset: Option<Asset>,
    pub destination_wallet: Option<AccountId>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct NftItem {
    pub address: AccountId,
    pub index: Option<u128>,
    pub collection: Option<AccountId>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct NftTransfer {
    pub prev_owner: Option<AccountId>,
    pub new_owner: AccountId,
    pub nft: NftItem,
    pub query_id: Option<u64>,
    pub is_purchase: bool,
    pub price: Option<u128>,
    pub forward_amount: Option<u128>,
    pub custom_payload: Option<String>,
    pub forward_payload: Option<String>,
    pub response_destination: Option<AccountId>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct NftDiscovery {
    pub sender: AccountId,
    pub nft: AccountId,
    pub query_id: u64,
    pub result_collection: AccountId,
    pub result_index: u128,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct NftMint {
    pub source: Option<AccountId>,
    pub address: AccountId,
    pub opcode: Option<u32>,
    pub collection: Option<AccountId>,
    pub index: u128,
}

/// A DNS record value, branching on the record's value schema.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DnsRecordValue {
    NextResolver { address: AccountId },
    SmcAddress { address: AccountId, flags: Option<u8> },
    AdnlAddress { address: Vec<u8>, flags: Option<u8> },
    Text { text: String },
}

impl Default for DnsRecordValue {
    fn default() -> Self {
        DnsRecordValue::Text { text: String::new() }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DnsChangeRecord {
    pub source: Option<AccountId>,
    pub destination: AccountId,
    /// The record key, a 256-bit category hash.
    pub key: Vec<u8>,
    pub value: DnsRecordValue,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DnsDeleteRecord {
    pub source: Option<AccountId>,
    pub destination: AccountId,
    pub key: Vec<u8>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DnsRenew {
    pub source: Option<AccountId>,
    pub destination: Option<AccountId>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TonstakersDeposit {
    pub source: AccountId,
    pub pool: AccountId,
    pub value: u128,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TonstakersWithdrawRequest {
    pub source: AccountId,
    pub tston_wallet: Option<AccountId>,
    pub pool: AccountId,
    pub tokens_burnt: u128,
    /// NFT receipt minted for the pending withdrawal.
    pub minted_nft: Option<AccountId>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TonstakersWithdraw {
    pub stake_holder: AccountId,
    pub pool: AccountId,
    pub amount: u128,
    pub burnt_nft: Option<AccountId>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct NominatorPoolDeposit {
    pub source: AccountId,
    pub pool: AccountId,
    pub value: u128,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct NominatorPoolWithdrawRequest {
    pub source: AccountId,
    pub pool: AccountId,
    /// Realized payout. Absent while the withdrawal is still a request.
    pub payout_amount: Option<u128>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct JvaultStake {
    pub sender: AccountId,
    pub stake_wallet: Option<AccountId>,
    pub staking_pool: AccountId,
    pub staked_amount: u128,
    pub period: u64,
    pub minted_stake_jettons: Option<u128>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct JvaultUnstake {
    pub sender: AccountId,
    pub stake_wallet: Option<AccountId>,
    pub staking_pool: AccountId,
    pub unstaked_amount: u128,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct JvaultClaim {
    pub sender: AccountId,
    pub stake_wallet: Option<AccountId>,
    pub staking_pool: AccountId,
    pub claimed_jettons: Vec<Asset>,
    pub claimed_amounts: Vec<u128>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DexDepositLiquidity {
    pub dex: Dex,
    pub sender: Option<AccountId>,
    pub pool: Option<AccountId>,
    pub amount_1: Option<u128>,
    pub amount_2: Option<u128>,
    pub asset_1: Option<Asset>,
    pub asset_2: Option<Asset>,
    pub sender_wallet_1: Option<AccountId>,
    pub sender_wallet_2: Option<AccountId>,
    pub lp_tokens_minted: Option<u128>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DexWithdrawLiquidity {
    pub dex: Dex,
    pub sender: Option<AccountId>,
    pub sender_wallet: Option<AccountId>,
    pub pool: Option<AccountId>,
    pub asset: Option<Asset>,
    pub amount1_out: Option<u128>,
    pub amount2_out: Option<u128>,
    pub asset1_out: Option<Asset>,
    pub asset2_out: Option<Asset>,
    pub wallet1: Option<AccountId>,
    pub wallet2: Option<AccountId>,
    pub dex_jetton_wallet_1: Option<AccountId>,
    pub dex_jetton_wallet_2: Option<AccountId>,
    pub dex_wallet_1: Option<AccountId>,
    pub dex_wallet_2: Option<AccountId>,
    pub is_refund: bool,
    pub lp_tokens_burnt: Option<u128>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DedustDepositLiquidity {
    pub dex: Dex,
    pub sender: Option<AccountId>,
    pub pool_address: Option<AccountId>,
    pub deposit_contract: Option<AccountId>,
    pub asset_1: Asset,
    pub amount_1: u128,
    pub asset_2: Asset,
    pub amount_2: u128,
    pub user_jetton_wallet_1: Option<AccountId>,
    pub user_jetton_wallet_2: Option<AccountId>,
    pub lp_tokens_minted: u128,
}

/// A dedust deposit observed before the pool minted LP tokens. The mint
/// amount is not yet known at this stage.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DedustDepositLiquidityPartial {
    pub dex: Dex,
    pub sender: Option<AccountId>,
    pub deposit_contract: Option<AccountId>,
    pub asset_1: Asset,
    pub amount_1: u128,
    pub asset_2: Asset,
    pub amount_2: u128,
    pub user_jetton_wallet_1: Option<AccountId>,
    pub user_jetton_wallet_2: Option<AccountId>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct MultisigCreateOrder {
    pub created_by: Option<AccountId>,
    pub multisig: Option<AccountId>,
    pub order_contract_address: Option<AccountId>,
    pub query_id: u64,
    pub order_seqno: u64,
    pub is_created_by_signer: bool,
    pub creator_approved: bool,
    pub creator_index: Option<u32>,
    pub expiration_date: Option<UnixTime>,
    /// Serialized order body, base64 boc.
    pub order_boc: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct MultisigApprove {
    pub signer: AccountId,
    pub order: AccountId,
    pub success: bool,
    pub signer_index: Option<u32>,
    pub exit_code: Option<i32>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct VestingSendMessage {
    pub sender: AccountId,
    pub vesting: AccountId,
    pub message_destination: Option<AccountId>,
    pub message_value: u128,
    pub query_id: u64,
    /// Serialized forwarded message, base64 boc.
    pub message_boc: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct VestingAddWhitelist {
    pub adder: AccountId,
    pub vesting: AccountId,
    pub query_id: u64,
    pub accounts_added: Vec<AccountId>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Subscribe {
    pub subscriber: AccountId,
    pub beneficiary: Option<AccountId>,
    pub subscription: AccountId,
    pub amount: u128,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Unsubscribe {
    pub subscriber: AccountId,
    pub beneficiary: Option<AccountId>,
    pub subscription: AccountId,
}

/// Payload shared by the election deposit and recover operations.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ElectionStake {
    pub stake_holder: AccountId,
    pub amount: Option<u128>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AuctionBid {
    pub bidder: AccountId,
    pub auction: AccountId,
    pub nft_address: AccountId,
    pub nft_collection: Option<AccountId>,
    pub nft_item_index: Option<u128>,
    pub amount: u128,
}
