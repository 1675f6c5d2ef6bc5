use tonact_common::models::{
    action::{ActionData, ChangeDnsRecordData, DnsValueSchema},
    blockchain::{DnsChangeRecord, DnsDeleteRecord, DnsRecordValue, DnsRenew},
    ResolveAddress,
};

use crate::normalizer::builder::ActionBuilder;

pub(crate) fn fill_change_dns_record(
    data: &DnsChangeRecord,
    builder: ActionBuilder,
) -> ActionBuilder {
    let mut record = ChangeDnsRecordData { key: hex::encode(&data.key), ..Default::default() };
    match &data.value {
        DnsRecordValue::NextResolver { address } => {
            record.value_schema = Some(DnsValueSchema::NextResolver);
            record.address = address.resolve();
        }
        DnsRecordValue::SmcAddress { address, flags } => {
            record.value_schema = Some(DnsValueSchema::SmcAddress);
            record.address = address.resolve();
            record.flags = *flags;
        }
        DnsRecordValue::AdnlAddress { address, flags } => {
            record.value_schema = Some(DnsValueSchema::AdnlAddress);
            record.address = Some(hex::encode(address));
            record.flags = *flags;
        }
        DnsRecordValue::Text { text } => {
            record.value_schema = Some(DnsValueSchema::Text);
            record.dns_text = Some(text.clone());
        }
    }
    builder
        .source(data.source.resolve())
        .destination(data.destination.resolve())
        .data(ActionData::ChangeDnsRecord(record))
}

/// A delete carries the key with all value fields null.
pub(crate) fn fill_delete_dns_record(
    data: &DnsDeleteRecord,
    builder: ActionBuilder,
) -> ActionBuilder {
    builder
        .source(data.source.resolve())
        .destination(data.destination.resolve())
        .data(ActionData::ChangeDnsRecord(ChangeDnsRecordData {
            key: hex::encode(&data.key),
            ..Default::default()
        }))
}

pub(crate) fn fill_dns_renew(data: &DnsRenew, builder: ActionBuilder) -> ActionBuilder {
    builder
        .source(data.source.resolve())
        .destination(data.destination.resolve())
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
    fn test_change_record_smc_address() {
        let payload = DnsChangeRecord {
            source: Some(AccountId::from("0:owner")),
            destination: AccountId::from("0:domain"),
            key: vec![0xab, 0xcd],
            value: DnsRecordValue::SmcAddress {
                address: AccountId::from("0:wallet"),
                flags: Some(1),
            },
        };
        let action = normalize_block(
            &block_with(BlockPayload::ChangeDnsRecord(payload)),
            "trace-1",
            &MockDiagnosticSink::new(),
        );
        assert_eq!(
            action.data,
            Some(ActionData::ChangeDnsRecord(ChangeDnsRecordData {
                value_schema: Some(DnsValueSchema::SmcAddress),
                flags: Some(1),
                address: Some("0:wallet".to_string()),
                key: "abcd".to_string(),
                dns_text: None,
            }))
        );
    }

    #[test]
    fn test_change_record_adnl_address_is_hex() {
        let payload = DnsChangeRecord {
            source: None,
            destination: AccountId::from("0:domain"),
            key: vec![0x01],
            value: DnsRecordValue::AdnlAddress { address: vec![0xde, 0xad], flags: Some(0) },
        };
        let action = normalize_block(
            &block_with(BlockPayload::ChangeDnsRecord(payload)),
            "trace-1",
            &MockDiagnosticSink::new(),
        );
        let Some(ActionData::ChangeDnsRecord(record)) = action.data else {
            panic!("expected dns record data");
        };
        assert_eq!(record.address, Some("dead".to_string()));
        assert_eq!(record.value_schema, Some(DnsValueSchema::AdnlAddress));
    }

    #[test]
    fn test_delete_record_keeps_only_the_key() {
        let payload = DnsDeleteRecord {
            source: Some(AccountId::from("0:owner")),
            destination: AccountId::from("0:domain"),
            key: vec![0xff],
        };
        let action = normalize_block(
            &block_with(BlockPayload::DeleteDnsRecord(payload)),
            "trace-1",
            &MockDiagnosticSink::new(),
        );
        assert_eq!(
            action.data,
            Some(ActionData::ChangeDnsRecord(ChangeDnsRecordData {
                value_schema: None,
                flags: None,
                address: None,
                key: "ff".to_string(),
                dns_text: None,
            }))
        );
    }

    #[test]
    fn test_renew_has_no_payload() {
        let payload = DnsRenew {
            source: Some(AccountId::from("0:owner")),
            destination: Some(AccountId::from("0:domain")),
        };
        let action = normalize_block(
            &block_with(BlockPayload::DnsRenew(payload)),
            "trace-1",
            &MockDiagnosticSink::new(),
        );
        assert_eq!(action.data, None);
        assert_eq!(action.source, Some("0:owner".to_string()));
    }
}
