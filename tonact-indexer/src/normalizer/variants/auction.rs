use tonact_common::models::{
    action::{ActionData, NftTransferData},
    blockchain::AuctionBid,
    ResolveAddress,
};

use crate::normalizer::builder::ActionBuilder;

pub(crate) fn fill_auction_bid(data: &AuctionBid, builder: ActionBuilder) -> ActionBuilder {
    builder
        .source(data.bidder.resolve())
        .destination(data.auction.resolve())
        .asset(data.nft_collection.resolve())
        .asset_secondary(data.nft_address.resolve())
        .value(Some(data.amount))
        .data(ActionData::NftTransfer(NftTransferData {
            nft_item_index: data.nft_item_index,
            ..Default::default()
        }))
}
