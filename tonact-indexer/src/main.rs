#![doc = include_str!("../../README.md")]

use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use tonact_indexer::{
    cli::{Cli, Command, GlobalArgs},
    jsonl::{JsonlActionSink, JsonlBlockSource},
    normalizer::TracingSink,
    runner::NormalizerRunner,
};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), anyhow::Error> {
    let cli: Cli = Cli::parse();
    let global_args = cli.args();

    create_tracing_subscriber();

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("failed to build the tokio runtime")?;

    runtime.block_on(async {
        let mut runner = build_runner(&global_args);
        match cli.command() {
            Command::Normalize => {
                let published = runner.run_once().await?;
                info!(published, "normalization pass finished");
                Ok(())
            }
            Command::Watch(watch_args) => {
                info!(
                    input = %global_args.input.display(),
                    interval_secs = watch_args.interval_secs,
                    "watching the block feed"
                );
                runner
                    .run_every(Duration::from_secs(watch_args.interval_secs))
                    .await
            }
        }
    })
}

fn build_runner(
    args: &GlobalArgs,
) -> NormalizerRunner<JsonlBlockSource, JsonlActionSink, TracingSink> {
    NormalizerRunner::new(
        JsonlBlockSource::new(&args.input),
        JsonlActionSink::new(&args.output),
        TracingSink,
    )
}

fn create_tracing_subscriber() {
    let format = tracing_subscriber::fmt::format()
        .with_level(true)
        .with_target(false)
        .compact();
    tracing_subscriber::fmt()
        .event_format(format)
        .with_env_filter(EnvFilter::from_default_env())
        .init();
}
