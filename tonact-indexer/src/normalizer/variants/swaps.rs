use tonact_common::models::{
    action::{ActionData, DexTransferData, JettonSwapData},
    blockchain::{DexTransfer, JettonSwap},
    Dex, ResolveAddress,
};

use crate::normalizer::builder::ActionBuilder;

fn resolve_leg(leg: &DexTransfer) -> DexTransferData {
    DexTransferData {
        amount: leg.amount,
        source: leg.source.resolve(),
        source_jetton_wallet: leg.source_jetton_wallet.resolve(),
        destination: leg.destination.resolve(),
        destination_jetton_wallet: leg.destination_jetton_wallet.resolve(),
        asset: leg.asset.resolve(),
    }
}

pub(crate) fn fill_jetton_swap(data: &JettonSwap, builder: ActionBuilder) -> ActionBuilder {
    let incoming = resolve_leg(&data.dex_incoming_transfer);
    let outgoing = resolve_leg(&data.dex_outgoing_transfer);

    // Leg-derived defaults; more specific protocol fields win below.
    let mut asset = incoming.asset.clone();
    let mut asset2 = outgoing.asset.clone();
    if data.dex == Dex::StonfiV2 {
        asset = data.source_asset.resolve();
        asset2 = data.destination_asset.resolve();
    }
    let mut destination_secondary = outgoing.destination_jetton_wallet.clone();
    if data.destination_wallet.is_some() {
        destination_secondary = data.destination_wallet.resolve();
    }
    if data.destination_asset.is_some() {
        asset2 = data.destination_asset.resolve();
    }

    builder
        .asset(asset)
        .asset2(asset2)
        .source(incoming.source.clone())
        .source_secondary(incoming.source_jetton_wallet.clone())
        .destination(outgoing.destination.clone())
        .destination_secondary(destination_secondary)
        .data(ActionData::JettonSwap(JettonSwapData {
            dex: data.dex,
            sender: data.sender.resolve(),
            dex_incoming_transfer: incoming,
            dex_outgoing_transfer: outgoing,
        }))
}
