use tonact_common::models::{
    action::{ActionData, JvaultClaimData, JvaultStakeData, StakingData},
    blockchain::{
        JvaultClaim, JvaultStake, JvaultUnstake, NominatorPoolDeposit,
        NominatorPoolWithdrawRequest, TonstakersDeposit, TonstakersWithdraw,
        TonstakersWithdrawRequest,
    },
    ActionType, ResolveAddress, StakingProvider,
};

use crate::normalizer::builder::ActionBuilder;

pub(crate) fn fill_tonstakers_deposit(
    data: &TonstakersDeposit,
    builder: ActionBuilder,
) -> ActionBuilder {
    builder
        .action_type(ActionType::StakeDeposit)
        .source(data.source.resolve())
        .destination(data.pool.resolve())
        .amount(Some(data.value))
        .data(ActionData::Staking(StakingData {
            provider: StakingProvider::Tonstakers,
            ts_nft: None,
        }))
}

pub(crate) fn fill_tonstakers_withdraw_request(
    data: &TonstakersWithdrawRequest,
    builder: ActionBuilder,
) -> ActionBuilder {
    builder
        .action_type(ActionType::StakeWithdrawalRequest)
        .source(data.source.resolve())
        .source_secondary(data.tston_wallet.resolve())
        .destination(data.pool.resolve())
        .amount(Some(data.tokens_burnt))
        .data(ActionData::Staking(StakingData {
            provider: StakingProvider::Tonstakers,
            ts_nft: data.minted_nft.resolve(),
        }))
}

pub(crate) fn fill_tonstakers_withdraw(
    data: &TonstakersWithdraw,
    builder: ActionBuilder,
) -> ActionBuilder {
    builder
        .action_type(ActionType::StakeWithdrawal)
        .source(data.stake_holder.resolve())
        .destination(data.pool.resolve())
        .amount(Some(data.amount))
        .data(ActionData::Staking(StakingData {
            provider: StakingProvider::Tonstakers,
            ts_nft: data.burnt_nft.resolve(),
        }))
}

pub(crate) fn fill_nominator_pool_deposit(
    data: &NominatorPoolDeposit,
    builder: ActionBuilder,
) -> ActionBuilder {
    builder
        .action_type(ActionType::StakeDeposit)
        .source(data.source.resolve())
        .destination(data.pool.resolve())
        .amount(Some(data.value))
        .data(ActionData::Staking(StakingData {
            provider: StakingProvider::Nominator,
            ts_nft: None,
        }))
}

/// A nominator pool withdrawal is only a request until the pool reports
/// the realized payout.
pub(crate) fn fill_nominator_pool_withdraw_request(
    data: &NominatorPoolWithdrawRequest,
    builder: ActionBuilder,
) -> ActionBuilder {
    let builder = match data.payout_amount {
        None => builder.action_type(ActionType::StakeWithdrawalRequest),
        Some(payout) => builder
            .action_type(ActionType::StakeWithdrawal)
            .amount(Some(payout)),
    };
    builder
        .source(data.source.resolve())
        .destination(data.pool.resolve())
        .data(ActionData::Staking(StakingData {
            provider: StakingProvider::Nominator,
            ts_nft: None,
        }))
}

pub(crate) fn fill_jvault_stake(data: &JvaultStake, builder: ActionBuilder) -> ActionBuilder {
    builder
        .source(data.sender.resolve())
        .source_secondary(data.stake_wallet.resolve())
        .destination(data.staking_pool.resolve())
        .amount(Some(data.staked_amount))
        .data(ActionData::JvaultStake(JvaultStakeData {
            period: data.period,
            minted_stake_jettons: data.minted_stake_jettons,
        }))
}

pub(crate) fn fill_jvault_unstake(data: &JvaultUnstake, builder: ActionBuilder) -> ActionBuilder {
    builder
        .source(data.sender.resolve())
        .source_secondary(data.stake_wallet.resolve())
        .destination(data.staking_pool.resolve())
        .amount(Some(data.unstaked_amount))
}

pub(crate) fn fill_jvault_claim(data: &JvaultClaim, builder: ActionBuilder) -> ActionBuilder {
    builder
        .source(data.sender.resolve())
        .source_secondary(data.stake_wallet.resolve())
        .destination(data.staking_pool.resolve())
        .data(ActionData::JvaultClaim(JvaultClaimData {
            claimed_jettons: data
                .claimed_jettons
                .iter()
                .map(ResolveAddress::resolve)
                .collect(),
            claimed_amounts: data.claimed_amounts.clone(),
        }))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use tonact_common::models::{blockchain::BlockPayload, AccountId, Asset};

    use super::*;
    use crate::{
        normalizer::{normalize_block, MockDiagnosticSink},
        testing::block_with,
    };

    fn nominator_request(payout_amount: Option<u128>) -> NominatorPoolWithdrawRequest {
        NominatorPoolWithdrawRequest {
            source: AccountId::from("0:staker"),
            pool: AccountId::from("0:pool"),
            payout_amount,
        }
    }

    #[test]
    fn test_withdraw_without_payout_is_a_request() {
        let action = normalize_block(
            &block_with(BlockPayload::NominatorPoolWithdrawRequest(nominator_request(None))),
            "trace-1",
            &MockDiagnosticSink::new(),
        );
        assert_eq!(action.action_type, "stake_withdrawal_request");
        assert_eq!(action.amount, None);
        assert_eq!(
            action.data,
            Some(ActionData::Staking(StakingData {
                provider: StakingProvider::Nominator,
                ts_nft: None,
            }))
        );
    }

    #[test]
    fn test_withdraw_with_payout_is_realized() {
        let action = normalize_block(
            &block_with(BlockPayload::NominatorPoolWithdrawRequest(nominator_request(Some(
                3_000_000_000,
            )))),
            "trace-1",
            &MockDiagnosticSink::new(),
        );
        assert_eq!(action.action_type, "stake_withdrawal");
        assert_eq!(action.amount, Some(3_000_000_000));
    }

    #[test]
    fn test_tonstakers_request_carries_the_receipt_nft() {
        let payload = TonstakersWithdrawRequest {
            source: AccountId::from("0:staker"),
            tston_wallet: Some(AccountId::from("0:tston")),
            pool: AccountId::from("0:pool"),
            tokens_burnt: 500,
            minted_nft: Some(AccountId::from("0:receipt")),
        };
        let action = normalize_block(
            &block_with(BlockPayload::TonstakersWithdrawRequest(payload)),
            "trace-1",
            &MockDiagnosticSink::new(),
        );
        assert_eq!(action.action_type, "stake_withdrawal_request");
        assert_eq!(action.amount, Some(500));
        assert_eq!(
            action.data,
            Some(ActionData::Staking(StakingData {
                provider: StakingProvider::Tonstakers,
                ts_nft: Some("0:receipt".to_string()),
            }))
        );
    }

    #[test]
    fn test_tonstakers_deposit_becomes_stake_deposit() {
        let payload = TonstakersDeposit {
            source: AccountId::from("0:staker"),
            pool: AccountId::from("0:pool"),
            value: 9,
        };
        let action = normalize_block(
            &block_with(BlockPayload::TonstakersDeposit(payload)),
            "trace-1",
            &MockDiagnosticSink::new(),
        );
        assert_eq!(action.action_type, "stake_deposit");
        assert_eq!(action.amount, Some(9));
    }

    #[test]
    fn test_jvault_claim_resolves_claimed_jettons() {
        let payload = JvaultClaim {
            sender: AccountId::from("0:staker"),
            stake_wallet: Some(AccountId::from("0:sw")),
            staking_pool: AccountId::from("0:pool"),
            claimed_jettons: vec![Asset::Jetton(AccountId::from("0:j1")), Asset::Ton],
            claimed_amounts: vec![10, 20],
        };
        let action = normalize_block(
            &block_with(BlockPayload::JvaultClaim(payload)),
            "trace-1",
            &MockDiagnosticSink::new(),
        );
        assert_eq!(
            action.data,
            Some(ActionData::JvaultClaim(JvaultClaimData {
                claimed_jettons: vec![Some("0:j1".to_string()), None],
                claimed_amounts: vec![10, 20],
            }))
        );
    }
}
