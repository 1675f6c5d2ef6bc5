pub mod action;
pub mod blockchain;

use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};

/// Transaction hash literal type, base64 encoded as delivered by the node.
pub type TxHash = String;

/// Message hash literal type, base64 encoded.
pub type MsgHash = String;

/// Logical time assigned to ledger transactions, totally orders events
/// within a trace.
pub type Lt = u64;

/// Wall clock time of a transaction, seconds since the unix epoch.
pub type UnixTime = u32;

/// Identifier of the trace an action belongs to, supplied by the upstream
/// classifier.
pub type TraceId = String;

/// A canonical account address in raw `workchain:hex` form.
#[derive(
    Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct AccountId(String);

impl AccountId {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for AccountId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for AccountId {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}

/// An asset moved by an operation. The native currency has no contract
/// address; a jetton is identified by its master contract.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Asset {
    #[default]
    Ton,
    Jetton(AccountId),
}

impl Asset {
    pub fn is_ton(&self) -> bool {
        matches!(self, Asset::Ton)
    }

    pub fn jetton_address(&self) -> Option<&AccountId> {
        match self {
            Asset::Ton => None,
            Asset::Jetton(master) => Some(master),
        }
    }
}

/// Resolves a polymorphic account or asset reference to a canonical
/// address string.
///
/// Every input maps to a defined output, there is no error path: the
/// native currency resolves to `None` because it has no contract address.
pub trait ResolveAddress {
    fn resolve(&self) -> Option<String>;
}

impl ResolveAddress for AccountId {
    fn resolve(&self) -> Option<String> {
        Some(self.0.clone())
    }
}

impl ResolveAddress for Asset {
    fn resolve(&self) -> Option<String> {
        self.jetton_address()
            .map(|master| master.as_str().to_owned())
    }
}

impl<T: ResolveAddress> ResolveAddress for Option<T> {
    fn resolve(&self) -> Option<String> {
        self.as_ref().and_then(ResolveAddress::resolve)
    }
}

/// The closed set of canonical action types emitted by the normalizer.
///
/// The string form is the storage-level `type` tag. Note that the staking
/// variants are derived: several upstream operation tags collapse onto
/// `stake_deposit`/`stake_withdrawal_request`/`stake_withdrawal`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumString, EnumIter, Display,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum ActionType {
    CallContract,
    ContractDeploy,
    TonTransfer,
    JettonTransfer,
    JettonBurn,
    JettonMint,
    JettonSwap,
    NftTransfer,
    NftDiscovery,
    NftMint,
    ChangeDnsRecord,
    DeleteDnsRecord,
    DnsRenew,
    StakeDeposit,
    StakeWithdrawalRequest,
    StakeWithdrawal,
    JvaultStake,
    JvaultUnstake,
    JvaultClaim,
    DexDepositLiquidity,
    DexWithdrawLiquidity,
    MultisigCreateOrder,
    MultisigApprove,
    VestingSendMessage,
    VestingAddWhitelist,
    Subscribe,
    Unsubscribe,
    ElectionDeposit,
    ElectionRecover,
    AuctionBid,
}

/// DEX implementations recognized by the swap and liquidity classifiers.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, EnumString, Display,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Dex {
    #[default]
    Stonfi,
    StonfiV2,
    Dedust,
}

/// Staking pool providers recognized by the staking classifiers.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, EnumString, Display,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum StakingProvider {
    Tonstakers,
    Nominator,
}
