use tonact_common::models::{
    action::{ActionData, VestingAddWhitelistData, VestingSendMessageData},
    blockchain::{VestingAddWhitelist, VestingSendMessage},
    ResolveAddress,
};

use crate::normalizer::builder::ActionBuilder;

pub(crate) fn fill_vesting_send_message(
    data: &VestingSendMessage,
    builder: ActionBuilder,
) -> ActionBuilder {
    builder
        .source(data.sender.resolve())
        .destination(data.vesting.resolve())
        .destination_secondary(data.message_destination.resolve())
        .amount(Some(data.message_value))
        .data(ActionData::VestingSendMessage(VestingSendMessageData {
            query_id: data.query_id,
            message_boc: data.message_boc.clone(),
        }))
}

pub(crate) fn fill_vesting_add_whitelist(
    data: &VestingAddWhitelist,
    builder: ActionBuilder,
) -> ActionBuilder {
    builder
        .source(data.adder.resolve())
        .destination(data.vesting.resolve())
        .data(ActionData::VestingAddWhitelist(VestingAddWhitelistData {
            query_id: data.query_id,
            accounts_added: data
                .accounts_added
                .iter()
                .map(|account| account.as_str().to_string())
                .collect(),
        }))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use tonact_common::models::{blockchain::BlockPayload, AccountId};

    use super::*;
    use crate::{
        normalizer::{normalize_block, MockDiagnosticSink},
        testing::block_with,
    };

    #[test]
    fn test_send_message_carries_the_forwarded_value() {
        let payload = VestingSendMessage {
            sender: AccountId::from("0:owner"),
            vesting: AccountId::from("0:vesting"),
            message_destination: Some(AccountId::from("0:target")),
            message_value: 1_500_000_000,
            query_id: 42,
            message_boc: Some("te6cc".to_string()),
        };
        let action = normalize_block(
            &block_with(BlockPayload::VestingSendMessage(payload)),
            "trace-1",
            &MockDiagnosticSink::new(),
        );
        assert_eq!(action.amount, Some(1_500_000_000));
        assert_eq!(action.destination_secondary, Some("0:target".to_string()));
        assert_eq!(
            action.data,
            Some(ActionData::VestingSendMessage(VestingSendMessageData {
                query_id: 42,
                message_boc: Some("te6cc".to_string()),
            }))
        );
    }

    #[test]
    fn test_add_whitelist_lists_every_account() {
        let payload = VestingAddWhitelist {
            adder: AccountId::from("0:owner"),
            vesting: AccountId::from("0:vesting"),
            query_id: 7,
            accounts_added: vec![AccountId::from("0:a"), AccountId::from("0:b")],
        };
        let action = normalize_block(
            &block_with(BlockPayload::VestingAddWhitelist(payload)),
            "trace-1",
            &MockDiagnosticSink::new(),
        );
        assert_eq!(
            action.data,
            Some(ActionData::VestingAddWhitelist(VestingAddWhitelistData {
                query_id: 7,
                accounts_added: vec!["0:a".to_string(), "0:b".to_string()],
            }))
        );
    }
}
