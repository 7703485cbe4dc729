use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Args;
use passengers_lib::{bind_trigger, HtmlTableBody, Labels, LoadState, PassengerTableLoader, TableBody};
use tokio::sync::mpsc;

use crate::config::Config;
use crate::output::{print_rows, OutputFormat};
use crate::spinner::Spinner;

#[derive(Args)]
pub struct LoadArgs {
    /// Number of times to trigger the load
    #[arg(long, default_value = "1")]
    pub times: u32,

    /// Pause between triggers, in milliseconds
    #[arg(long, default_value = "0")]
    pub interval_ms: u64,
}

/// Triggers the loader `times` times and prints whatever the table holds
/// afterwards. Returns `false` when the table ended up showing an error.
pub async fn run(
    args: &LoadArgs,
    config: &Config,
    labels: Labels,
    format: &OutputFormat,
) -> Result<bool> {
    let table = Arc::new(HtmlTableBody::new());
    let loader = Arc::new(PassengerTableLoader::new(
        config.client(),
        Arc::new(Spinner::new()),
        table.clone(),
        labels,
    ));

    let times = args.times.max(1);
    let (tx, rx) = mpsc::channel::<()>(times as usize);
    let bound = bind_trigger(Some(rx), Arc::clone(&loader)).context("trigger was not bound")?;

    tracing::debug!("Loading passengers from {}", config.base_url);
    for i in 0..times {
        if i > 0 && args.interval_ms > 0 {
            tokio::time::sleep(Duration::from_millis(args.interval_ms)).await;
        }
        tx.send(()).await?;
    }
    drop(tx);
    bound.join().await?;

    print_rows(&table.rows(), format)?;

    Ok(loader.state() != LoadState::ErrorDisplayed)
}
