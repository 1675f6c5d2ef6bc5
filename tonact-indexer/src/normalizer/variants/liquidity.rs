use tonact_common::models::{
    action::{ActionData, DexDepositLiquidityData, DexWithdrawLiquidityData},
    blockchain::{
        DedustDepositLiquidity, DedustDepositLiquidityPartial, DexDepositLiquidity,
        DexWithdrawLiquidity,
    },
    ActionType, ResolveAddress,
};

use crate::normalizer::builder::ActionBuilder;

pub(crate) fn fill_dex_deposit_liquidity(
    data: &DexDepositLiquidity,
    builder: ActionBuilder,
) -> ActionBuilder {
    builder
        .source(data.sender.resolve())
        .destination(data.pool.resolve())
        .data(ActionData::DexDepositLiquidity(DexDepositLiquidityData {
            dex: data.dex,
            amount1: data.amount_1,
            amount2: data.amount_2,
            asset1: data.asset_1.resolve(),
            asset2: data.asset_2.resolve(),
            user_jetton_wallet_1: data.sender_wallet_1.resolve(),
            user_jetton_wallet_2: data.sender_wallet_2.resolve(),
            lp_tokens_minted: data.lp_tokens_minted,
        }))
}

pub(crate) fn fill_dex_withdraw_liquidity(
    data: &DexWithdrawLiquidity,
    builder: ActionBuilder,
) -> ActionBuilder {
    builder
        .source(data.sender.resolve())
        .source_secondary(data.sender_wallet.resolve())
        .destination(data.pool.resolve())
        .asset(data.asset.resolve())
        .data(ActionData::DexWithdrawLiquidity(DexWithdrawLiquidityData {
            dex: data.dex,
            amount1: data.amount1_out,
            amount2: data.amount2_out,
            asset_out_1: data.asset1_out.resolve(),
            asset_out_2: data.asset2_out.resolve(),
            user_jetton_wallet_1: data.wallet1.resolve(),
            user_jetton_wallet_2: data.wallet2.resolve(),
            dex_jetton_wallet_1: data.dex_jetton_wallet_1.resolve(),
            dex_jetton_wallet_2: data.dex_jetton_wallet_2.resolve(),
            dex_wallet_1: data.dex_wallet_1.resolve(),
            dex_wallet_2: data.dex_wallet_2.resolve(),
            is_refund: data.is_refund,
            lp_tokens_burnt: data.lp_tokens_burnt,
        }))
}

/// Dedust deposits are classified under their own tag but stored as the
/// canonical `dex_deposit_liquidity` action type.
pub(crate) fn fill_dedust_deposit_liquidity(
    data: &DedustDepositLiquidity,
    builder: ActionBuilder,
) -> ActionBuilder {
    builder
        .action_type(ActionType::DexDepositLiquidity)
        .source(data.sender.resolve())
        .destination(data.pool_address.resolve())
        .destination_secondary(data.deposit_contract.resolve())
        .data(ActionData::DexDepositLiquidity(DexDepositLiquidityData {
            dex: data.dex,
            amount1: Some(data.amount_1),
            amount2: Some(data.amount_2),
            asset1: data.asset_1.resolve(),
            asset2: data.asset_2.resolve(),
            user_jetton_wallet_1: data.user_jetton_wallet_1.resolve(),
            user_jetton_wallet_2: data.user_jetton_wallet_2.resolve(),
            lp_tokens_minted: Some(data.lp_tokens_minted),
        }))
}

pub(crate) fn fill_dedust_deposit_liquidity_partial(
    data: &DedustDepositLiquidityPartial,
    builder: ActionBuilder,
) -> ActionBuilder {
    builder
        .action_type(ActionType::DexDepositLiquidity)
        .source(data.sender.resolve())
        .destination_secondary(data.deposit_contract.resolve())
        .data(ActionData::DexDepositLiquidity(DexDepositLiquidityData {
            dex: data.dex,
            amount1: Some(data.amount_1),
            amount2: Some(data.amount_2),
            asset1: data.asset_1.resolve(),
            asset2: data.asset_2.resolve(),
            user_jetton_wallet_1: data.user_jetton_wallet_1.resolve(),
            user_jetton_wallet_2: data.user_jetton_wallet_2.resolve(),
            // The mint is not yet known at the partial stage.
            lp_tokens_minted: None,
        }))
}
