//! Block-to-action normalization for the tonact indexer.
//!
//! The heart of this crate is [`normalizer::normalize_block`], a pure,
//! infallible transform from one classified trace block to one canonical
//! action record. Around it sit the ingestion runner driving a
//! [`runner::BlockSource`] into an [`runner::ActionSink`] and the
//! file-backed implementations used by the CLI.

pub mod cli;
pub mod jsonl;
pub mod normalizer;
pub mod runner;
pub mod testing;
