//! File-backed source and sink: newline-delimited JSON on disk.

use std::{
    io::ErrorKind,
    path::{Path, PathBuf},
};

use async_trait::async_trait;
use tokio::{fs, io::AsyncWriteExt};
use tonact_common::models::action::Action;
use tracing::warn;

use crate::runner::{ActionSink, BlockSource, ClassifiedBlock, RunnerError};

/// Reads classified blocks from a JSONL file, one block per line.
///
/// The source tracks how many lines it has consumed, so repeated polls
/// of a growing file only yield the newly appended blocks. Malformed
/// lines are logged and skipped, they never stall the feed.
pub struct JsonlBlockSource {
    path: PathBuf,
    lines_consumed: usize,
}

impl JsonlBlockSource {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self { path: path.as_ref().to_path_buf(), lines_consumed: 0 }
    }
}

#[async_trait]
impl BlockSource for JsonlBlockSource {
    async fn next_batch(&mut self) -> Result<Vec<ClassifiedBlock>, RunnerError> {
        let contents = match fs::read_to_string(&self.path).await {
            Ok(contents) => contents,
            // A watch loop may start before the producer's first write.
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(err) => return Err(RunnerError::Source(err.to_string())),
        };

        let mut batch = Vec::new();
        let mut total_lines = 0;
        for (index, line) in contents.lines().enumerate() {
            total_lines = index + 1;
            if index < self.lines_consumed || line.trim().is_empty() {
                continue;
            }
            match serde_json::from_str::<ClassifiedBlock>(line) {
                Ok(block) => batch.push(block),
                Err(err) => {
                    warn!(line = index + 1, %err, "skipping malformed block line");
                }
            }
        }
        self.lines_consumed = total_lines.max(self.lines_consumed);
        Ok(batch)
    }
}

/// Appends action records to a JSONL file, one action per line.
pub struct JsonlActionSink {
    path: PathBuf,
}

impl JsonlActionSink {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self { path: path.as_ref().to_path_buf() }
    }
}

#[async_trait]
impl ActionSink for JsonlActionSink {
    async fn publish(&mut self, actions: Vec<Action>) -> Result<(), RunnerError> {
        let mut buffer = String::new();
        for action in &actions {
            let line = serde_json::to_string(action)
                .map_err(|err| RunnerError::Sink(err.to_string()))?;
            buffer.push_str(&line);
            buffer.push('\n');
        }

        let mut file = fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .await
            .map_err(|err| RunnerError::Sink(err.to_string()))?;
        file.write_all(buffer.as_bytes())
            .await
            .map_err(|err| RunnerError::Sink(err.to_string()))?;
        file.flush()
            .await
            .map_err(|err| RunnerError::Sink(err.to_string()))?;
        Ok(())
    }
}
