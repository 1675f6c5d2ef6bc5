use base64::{engine::general_purpose::STANDARD as BASE64, Engine};
use tonact_common::models::{
    action::{ActionData, JettonTransferData},
    blockchain::{JettonBurn, JettonMint, JettonTransfer},
    ResolveAddress,
};

use crate::normalizer::builder::ActionBuilder;

/// An encrypted comment stays raw bytes, base64 encoded; a plaintext one
/// is decoded lossily and has embedded NUL bytes stripped.
fn decode_comment(raw: &[u8], encrypted: bool) -> String {
    if encrypted {
        BASE64.encode(raw)
    } else {
        String::from_utf8_lossy(raw).replace('\u{0}', "")
    }
}

pub(crate) fn fill_jetton_transfer(data: &JettonTransfer, builder: ActionBuilder) -> ActionBuilder {
    let comment = data
        .comment
        .as_deref()
        .map(|raw| decode_comment(raw, data.encrypted_comment));
    builder
        .source(data.sender.resolve())
        .source_secondary(data.sender_wallet.resolve())
        .destination(data.receiver.resolve())
        .destination_secondary(data.receiver_wallet.resolve())
        .amount(Some(data.amount))
        .asset(data.asset.resolve())
        .data(ActionData::JettonTransfer(JettonTransferData {
            query_id: data.query_id,
            response_destination: data.response_destination.resolve(),
            forward_amount: data.forward_amount,
            custom_payload: data.custom_payload.clone(),
            forward_payload: data.forward_payload.clone(),
            comment,
            is_encrypted_comment: data.encrypted_comment,
        }))
}

pub(crate) fn fill_jetton_burn(data: &JettonBurn, builder: ActionBuilder) -> ActionBuilder {
    builder
        .source(data.owner.resolve())
        .source_secondary(data.jetton_wallet.resolve())
        .asset(data.asset.resolve())
        .amount(Some(data.amount))
}

pub(crate) fn fill_jetton_mint(data: &JettonMint, builder: ActionBuilder) -> ActionBuilder {
    // Absent amounts stay absent, "not carried by the opcode" is not the
    // same as zero.
    builder
        .destination(data.to.resolve())
        .destination_secondary(data.to_jetton_wallet.resolve())
        .asset(data.asset.resolve())
        .amount(data.amount)
        .value(data.ton_amount)
}
