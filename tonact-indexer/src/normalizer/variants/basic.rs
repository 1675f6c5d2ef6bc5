use tonact_common::models::{
    action::{ActionData, TonTransferData},
    blockchain::{ContractCall, TonTransfer},
    ResolveAddress,
};

use crate::normalizer::{builder::ActionBuilder, DiagnosticSink};

/// Shared by plain contract calls and contract deploys.
pub(crate) fn fill_contract_call(data: &ContractCall, builder: ActionBuilder) -> ActionBuilder {
    builder
        .opcode(Some(data.opcode))
        .value(Some(data.value))
        .source(data.source.resolve())
        .destination(data.destination.resolve())
}

pub(crate) fn fill_ton_transfer(
    data: &TonTransfer,
    builder: ActionBuilder,
    trace_id: &str,
    sink: &dyn DiagnosticSink,
) -> ActionBuilder {
    if data.destination.is_none() {
        sink.missing_field("ton_transfer", "destination", trace_id);
    }
    let content = data.comment.as_ref().map(|comment| {
        if data.encrypted {
            // Encrypted comments arrive pre-encoded, pass them through.
            comment.clone()
        } else {
            comment.replace('\u{0}', "")
        }
    });
    builder
        .value(Some(data.value))
        .source(data.source.resolve())
        .destination(data.destination.resolve())
        .data(ActionData::TonTransfer(TonTransferData { content, encrypted: data.encrypted }))
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
    fn test_ton_transfer_comment_nul_bytes_stripped() {
        let block = block_with(BlockPayload::TonTransfer(TonTransfer {
            value: 5,
            source: AccountId::from("0:aa"),
            destination: Some(AccountId::from("0:bb")),
            comment: Some("do\u{0}nate\u{0}".to_string()),
            encrypted: false,
        }));
        let mut sink = MockDiagnosticSink::new();
        sink.expect_missing_field().never();

        let action = normalize_block(&block, "trace-1", &sink);
        assert_eq!(
            action.data,
            Some(ActionData::TonTransfer(TonTransferData {
                content: Some("donate".to_string()),
                encrypted: false,
            }))
        );
        assert_eq!(action.value, Some(5));
        assert_eq!(action.source, Some("0:aa".to_string()));
        assert_eq!(action.destination, Some("0:bb".to_string()));
    }

    #[test]
    fn test_ton_transfer_missing_destination_is_diagnosed() {
        let block = block_with(BlockPayload::TonTransfer(TonTransfer {
            value: 5,
            source: AccountId::from("0:aa"),
            destination: None,
            comment: None,
            encrypted: false,
        }));
        let mut sink = MockDiagnosticSink::new();
        sink.expect_missing_field()
            .withf(|ty, field, trace| {
                ty == "ton_transfer" && field == "destination" && trace == "trace-1"
            })
            .times(1)
            .return_const(());

        let action = normalize_block(&block, "trace-1", &sink);
        assert_eq!(action.destination, None);
    }

    #[test]
    fn test_contract_deploy_shares_the_call_mapping() {
        let payload = ContractCall {
            opcode: 0x5fcc3d14,
            value: 100,
            source: Some(AccountId::from("0:aa")),
            destination: Some(AccountId::from("0:bb")),
        };
        let call = normalize_block(
            &block_with(BlockPayload::CallContract(payload.clone())),
            "trace-1",
            &MockDiagnosticSink::new(),
        );
        let deploy = normalize_block(
            &block_with(BlockPayload::ContractDeploy(payload)),
            "trace-1",
            &MockDiagnosticSink::new(),
        );
        assert_eq!(call.opcode, Some(0x5fcc3d14));
        assert_eq!(call.opcode, deploy.opcode);
        assert_eq!(call.value, deploy.value);
        assert_eq!(deploy.action_type, "contract_deploy");
    }
}
