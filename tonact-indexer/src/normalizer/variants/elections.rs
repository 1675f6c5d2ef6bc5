use tonact_common::models::{blockchain::ElectionStake, ResolveAddress};

use crate::normalizer::builder::ActionBuilder;

/// Deposits and recoveries share one payload; the action type already
/// distinguishes them, so a single filler covers both.
pub(crate) fn fill_election_stake(data: &ElectionStake, builder: ActionBuilder) -> ActionBuilder {
    builder.source(data.stake_holder.resolve()).amount(data.amount)
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
    fn test_deposit_and_recover_differ_only_in_type() {
        let stake = ElectionStake {
            stake_holder: AccountId::from("0:validator"),
            amount: Some(10_000),
        };
        let deposit = normalize_block(
            &block_with(BlockPayload::ElectionDeposit(stake.clone())),
            "trace-1",
            &MockDiagnosticSink::new(),
        );
        let recover = normalize_block(
            &block_with(BlockPayload::ElectionRecover(stake)),
            "trace-1",
            &MockDiagnosticSink::new(),
        );
        assert_eq!(deposit.action_type, "election_deposit");
        assert_eq!(recover.action_type, "election_recover");
        assert_eq!(deposit.source, recover.source);
        assert_eq!(deposit.amount, Some(10_000));
    }

    #[test]
    fn test_absent_amount_stays_null() {
        let stake = ElectionStake { stake_holder: AccountId::from("0:validator"), amount: None };
        let action = normalize_block(
            &block_with(BlockPayload::ElectionDeposit(stake)),
            "trace-1",
            &MockDiagnosticSink::new(),
        );
        assert_eq!(action.amount, None);
    }
}
