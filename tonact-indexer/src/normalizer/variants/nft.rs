use tonact_common::models::{
    action::{ActionData, NftDiscoveryData, NftMintData, NftTransferData},
    blockchain::{NftDiscovery, NftMint, NftTransfer},
    ResolveAddress,
};

use crate::normalizer::builder::ActionBuilder;

pub(crate) fn fill_nft_transfer(data: &NftTransfer, builder: ActionBuilder) -> ActionBuilder {
    builder
        .source(data.prev_owner.resolve())
        .destination(data.new_owner.resolve())
        .asset_secondary(data.nft.address.resolve())
        .asset(data.nft.collection.resolve())
        .data(ActionData::NftTransfer(NftTransferData {
            query_id: data.query_id,
            is_purchase: data.is_purchase,
            // A price is only meaningful for purchases.
            price: if data.is_purchase { data.price } else { None },
            nft_item_index: data.nft.index,
            forward_amount: data.forward_amount,
            custom_payload: data.custom_payload.clone(),
            forward_payload: data.forward_payload.clone(),
            response_destination: data.response_destination.resolve(),
        }))
}

pub(crate) fn fill_nft_discovery(data: &NftDiscovery, builder: ActionBuilder) -> ActionBuilder {
    builder
        .source(data.sender.resolve())
        .destination(data.nft.resolve())
        .data(ActionData::NftDiscovery(NftDiscoveryData {
            query_id: data.query_id,
            collection_address: data.result_collection.as_str().to_owned(),
            nft_item_index: data.result_index,
        }))
}

pub(crate) fn fill_nft_mint(data: &NftMint, builder: ActionBuilder) -> ActionBuilder {
    let destination = data.address.resolve();
    builder
        .source(data.source.resolve())
        .destination(destination.clone())
        // The minted item itself is the secondary asset.
        .asset_secondary(destination)
        .opcode(data.opcode)
        .asset(data.collection.resolve())
        .data(ActionData::NftMint(NftMintData { nft_item_index: data.index }))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use tonact_common::models::{
        blockchain::{BlockPayload, NftItem},
        AccountId,
    };

    use super::*;
    use crate::{
        normalizer::{normalize_block, MockDiagnosticSink},
        testing::block_with,
    };

    #[test]
    fn test_nft_transfer_purchase_price() {
        let payload = NftTransfer {
            prev_owner: Some(AccountId::from("0:aa")),
            new_owner: AccountId::from("0:bb"),
            nft: NftItem {
                address: AccountId::from("0:item"),
                index: Some(7),
                collection: Some(AccountId::from("0:coll")),
            },
            is_purchase: true,
            price: Some(2_000_000_000),
            ..Default::default()
        };
        let action = normalize_block(
            &block_with(BlockPayload::NftTransfer(payload)),
            "trace-1",
            &MockDiagnosticSink::new(),
        );
        assert_eq!(action.asset, Some("0:coll".to_string()));
        assert_eq!(action.asset_secondary, Some("0:item".to_string()));
        let Some(ActionData::NftTransfer(data)) = action.data else {
            panic!("expected nft transfer data");
        };
        assert_eq!(data.price, Some(2_000_000_000));
        assert_eq!(data.nft_item_index, Some(7));
    }

    #[test]
    fn test_nft_transfer_price_dropped_when_not_a_purchase() {
        let payload = NftTransfer {
            new_owner: AccountId::from("0:bb"),
            nft: NftItem { address: AccountId::from("0:item"), ..Default::default() },
            is_purchase: false,
            price: Some(2_000_000_000),
            ..Default::default()
        };
        let action = normalize_block(
            &block_with(BlockPayload::NftTransfer(payload)),
            "trace-1",
            &MockDiagnosticSink::new(),
        );
        let Some(ActionData::NftTransfer(data)) = action.data else {
            panic!("expected nft transfer data");
        };
        assert_eq!(data.price, None);
    }

    #[test]
    fn test_nft_mint_secondary_asset_is_the_item() {
        let payload = NftMint {
            source: None,
            address: AccountId::from("0:item"),
            opcode: Some(1),
            collection: Some(AccountId::from("0:coll")),
            index: 12,
        };
        let action = normalize_block(
            &block_with(BlockPayload::NftMint(payload)),
            "trace-1",
            &MockDiagnosticSink::new(),
        );
        assert_eq!(action.destination, Some("0:item".to_string()));
        assert_eq!(action.asset_secondary, Some("0:item".to_string()));
        assert_eq!(action.asset, Some("0:coll".to_string()));
        assert_eq!(action.data, Some(ActionData::NftMint(NftMintData { nft_item_index: 12 })));
    }

    #[test]
    fn test_nft_discovery_result_fields() {
        let payload = NftDiscovery {
            sender: AccountId::from("0:aa"),
            nft: AccountId::from("0:item"),
            query_id: 3,
            result_collection: AccountId::from("0:coll"),
            result_index: 44,
        };
        let action = normalize_block(
            &block_with(BlockPayload::NftDiscovery(payload)),
            "trace-1",
            &MockDiagnosticSink::new(),
        );
        assert_eq!(
            action.data,
            Some(ActionData::NftDiscovery(NftDiscoveryData {
                query_id: 3,
                collection_address: "0:coll".to_string(),
                nft_item_index: 44,
            }))
        );
    }
}
