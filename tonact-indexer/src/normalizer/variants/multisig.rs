use tonact_common::models::{
    action::{ActionData, MultisigApproveData, MultisigCreateOrderData},
    blockchain::{MultisigApprove, MultisigCreateOrder},
    ResolveAddress,
};

use crate::normalizer::builder::ActionBuilder;

pub(crate) fn fill_multisig_create_order(
    data: &MultisigCreateOrder,
    builder: ActionBuilder,
) -> ActionBuilder {
    builder
        .source(data.created_by.resolve())
        .destination(data.multisig.resolve())
        .destination_secondary(data.order_contract_address.resolve())
        .data(ActionData::MultisigCreateOrder(MultisigCreateOrderData {
            query_id: data.query_id,
            order_seqno: data.order_seqno,
            is_created_by_signer: data.is_created_by_signer,
            is_signed_by_creator: data.creator_approved,
            creator_index: data.creator_index,
            expiration_date: data.expiration_date,
            order_boc: data.order_boc.clone(),
        }))
}

pub(crate) fn fill_multisig_approve(
    data: &MultisigApprove,
    builder: ActionBuilder,
) -> ActionBuilder {
    builder
        .source(data.signer.resolve())
        .destination(data.order.resolve())
        // The approval outcome overrides the block-level failure flag.
        .success(data.success)
        .data(ActionData::MultisigApprove(MultisigApproveData {
            signer_index: data.signer_index,
            exit_code: data.exit_code,
        }))
}
