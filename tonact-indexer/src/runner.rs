//! The ingestion loop: pull classified blocks, normalize, publish.

use std::time::Duration;

#[cfg(test)]
use mockall::automock;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tokio::time;
use tonact_common::models::{action::Action, blockchain::Block, TraceId};
use tracing::{debug, error, info};

use crate::normalizer::{normalize_block, DiagnosticSink};

/// How often the watch loop polls for new blocks.
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(60);

#[derive(Error, Debug)]
pub enum RunnerError {
    #[error("block source failure: {0}")]
    Source(String),
    #[error("action sink failure: {0}")]
    Sink(String),
}

/// A classified block together with the trace it was detected in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassifiedBlock {
    pub trace_id: TraceId,
    pub block: Block,
}

/// Yields batches of classified blocks awaiting normalization.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait BlockSource {
    /// The next batch of pending blocks. An empty batch means the source
    /// is drained for now.
    async fn next_batch(&mut self) -> Result<Vec<ClassifiedBlock>, RunnerError>;
}

/// Receives finalized action records.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait ActionSink {
    async fn publish(&mut self, actions: Vec<Action>) -> Result<(), RunnerError>;
}

/// Drives a [`BlockSource`] through the normalizer into an
/// [`ActionSink`], either once or on a fixed schedule.
pub struct NormalizerRunner<S, K, D> {
    source: S,
    sink: K,
    diagnostics: D,
}

impl<S, K, D> NormalizerRunner<S, K, D>
where
    S: BlockSource,
    K: ActionSink,
    D: DiagnosticSink,
{
    pub fn new(source: S, sink: K, diagnostics: D) -> Self {
        Self { source, sink, diagnostics }
    }

    /// Processes one batch. Returns the number of actions published.
    pub async fn run_once(&mut self) -> Result<usize, RunnerError> {
        let batch = self.source.next_batch().await?;
        if batch.is_empty() {
            debug!("no pending blocks");
            return Ok(0);
        }

        let actions: Vec<Action> = batch
            .iter()
            .map(|classified| {
                normalize_block(&classified.block, &classified.trace_id, &self.diagnostics)
            })
            .collect();

        let published = actions.len();
        self.sink.publish(actions).await?;
        info!(published, "published normalized actions");
        Ok(published)
    }

    /// Polls the source on a fixed interval until cancelled. Batch-level
    /// failures are logged and the schedule keeps running.
    pub async fn run_every(&mut self, interval: Duration) -> ! {
        let mut ticker = time::interval(interval);
        loop {
            ticker.tick().await;
            if let Err(err) = self.run_once().await {
                error!(%err, "normalization pass failed");
            }
        }
    }
}
