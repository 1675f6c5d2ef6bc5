use tonact_common::models::{
    blockchain::{Subscribe, Unsubscribe},
    ResolveAddress,
};

use crate::normalizer::builder::ActionBuilder;

pub(crate) fn fill_subscribe(data: &Subscribe, builder: ActionBuilder) -> ActionBuilder {
    builder
        .source(data.subscriber.resolve())
        .destination(data.beneficiary.resolve())
        .destination_secondary(data.subscription.resolve())
        .amount(Some(data.amount))
}

pub(crate) fn fill_unsubscribe(data: &Unsubscribe, builder: ActionBuilder) -> ActionBuilder {
    builder
        .source(data.subscriber.resolve())
        .destination(data.beneficiary.resolve())
        .destination_secondary(data.subscription.resolve())
}
