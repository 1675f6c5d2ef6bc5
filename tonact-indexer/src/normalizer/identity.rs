//! Content-derived action identity.

use base64::{engine::general_purpose::STANDARD as BASE64, Engine};
use sha2::{Digest, Sha256};
use tonact_common::models::blockchain::Block;

/// Computes the stable `action_id` of a block.
///
/// The root event node is the minimum of the node set ordered by
/// `(lt, tx_hash)`; the secondary hash sort makes the choice total and
/// stable when several nodes share the minimum logical time. The key is
/// the root's message hash (its transaction hash for tick-tock nodes)
/// concatenated with the operation type tag, digested with SHA-256 and
/// base64 encoded.
///
/// Identical inputs always yield the identical identifier. This is a
/// practical fingerprint for downstream dedup, not a uniqueness proof.
pub fn derive_action_id(block: &Block) -> String {
    let root = block
        .event_nodes
        .iter()
        .min_by_key(|node| (node.lt(), node.tx_hash()));

    let mut key = String::new();
    if let Some(root) = root {
        match root.msg_hash() {
            Some(msg_hash) => key.push_str(msg_hash),
            None => key.push_str(root.tx_hash()),
        }
    }
    key.push_str(block.btype());

    BASE64.encode(Sha256::digest(key.as_bytes()))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use tonact_common::models::blockchain::BlockPayload;

    use super::*;
    use crate::testing::{block_with_nodes, inbound_node, tick_tock_node};

    #[test]
    fn test_action_id_matches_known_digest() {
        // sha256("msg-hash-aaa" + "ton_transfer"), base64.
        let block = block_with_nodes(
            BlockPayload::TonTransfer(Default::default()),
            vec![inbound_node("msg-hash-aaa", "tx-1", "0:aa", 10)],
        );
        assert_eq!(derive_action_id(&block), "qa11kBXHYGWhAxRckemAixix0lHF1nRgwoFVxV1vzCo=");
    }

    #[test]
    fn test_tick_tock_root_uses_tx_hash() {
        // sha256("tx-hash-only" + "call_contract"), base64.
        let block = block_with_nodes(
            BlockPayload::CallContract(Default::default()),
            vec![tick_tock_node("tx-hash-only", "-1:ee", 5)],
        );
        assert_eq!(derive_action_id(&block), "ZuwEmzG087RVkpmpNOWeULxBDDwwDeyrJozA8fKrw0s=");
    }

    #[test]
    fn test_action_id_is_deterministic() {
        let block = block_with_nodes(
            BlockPayload::JettonTransfer(Default::default()),
            vec![
                inbound_node("msg-b", "tx-2", "0:bb", 20),
                inbound_node("msg-a", "tx-1", "0:aa", 10),
            ],
        );
        assert_eq!(derive_action_id(&block), derive_action_id(&block));
    }

    #[test]
    fn test_root_is_minimum_lt() {
        let reference = block_with_nodes(
            BlockPayload::TonTransfer(Default::default()),
            vec![inbound_node("msg-a", "tx-1", "0:aa", 10)],
        );
        let with_later_node = block_with_nodes(
            BlockPayload::TonTransfer(Default::default()),
            vec![
                inbound_node("msg-b", "tx-2", "0:bb", 20),
                inbound_node("msg-a", "tx-1", "0:aa", 10),
            ],
        );
        // Appending later nodes does not change the root, hence the id.
        assert_eq!(derive_action_id(&reference), derive_action_id(&with_later_node));
    }

    #[test]
    fn test_lt_tie_broken_by_tx_hash() {
        let ordered = block_with_nodes(
            BlockPayload::TonTransfer(Default::default()),
            vec![
                inbound_node("msg-a", "tx-1", "0:aa", 10),
                inbound_node("msg-b", "tx-2", "0:bb", 10),
            ],
        );
        let shuffled = block_with_nodes(
            BlockPayload::TonTransfer(Default::default()),
            vec![
                inbound_node("msg-b", "tx-2", "0:bb", 10),
                inbound_node("msg-a", "tx-1", "0:aa", 10),
            ],
        );
        assert_eq!(derive_action_id(&ordered), derive_action_id(&shuffled));
    }

    #[test]
    fn test_type_tag_is_part_of_the_key() {
        let nodes = vec![inbound_node("msg-a", "tx-1", "0:aa", 10)];
        let transfer =
            block_with_nodes(BlockPayload::TonTransfer(Default::default()), nodes.clone());
        let call = block_with_nodes(BlockPayload::CallContract(Default::default()), nodes);
        assert_ne!(derive_action_id(&transfer), derive_action_id(&call));
    }
}
