// ABOUTME: Headless replay host entry point.
// ABOUTME: Loads a layout config and event script, replays it and prints JSON records.

mod replay;
mod script;

use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use mpl_core::SplitConfig;
use mpl_layout::{QueueHost, SplitLayout};
use tracing_subscriber::EnvFilter;

use replay::Record;

const USAGE: &str = "usage: mpl-replay <script.jsonl> [layout.toml]";

fn emit(record: &Record) {
    match serde_json::to_string(record) {
        Ok(line) => {
            let mut stdout = std::io::stdout().lock();
            if let Err(e) = writeln!(stdout, "{}", line) {
                tracing::error!("Failed to write record: {}", e);
            }
        }
        Err(e) => tracing::error!("Failed to encode record: {}", e),
    }
}

fn main() -> Result<()> {
    // Logs go to stderr so stdout stays a clean JSON stream
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let mut args = std::env::args_os().skip(1);
    let script_path = PathBuf::from(args.next().context(USAGE)?);

    let config = match args.next() {
        Some(path) => {
            let path = PathBuf::from(path);
            SplitConfig::load(&path)
                .with_context(|| format!("Failed to load layout config {}", path.display()))?
        }
        None => SplitConfig::load_or_default(),
    };
    tracing::info!(
        "Loaded config: axis={:?} regime={:?} report={:?}",
        config.axis,
        config.regime,
        config.report
    );

    let events = script::load(&script_path)
        .with_context(|| format!("Failed to load script {}", script_path.display()))?;
    tracing::info!("Replaying {} events", events.len());

    let mut layout = SplitLayout::new(config, &[], QueueHost::new());
    layout.set_listener(|report| emit(&Record::from(report)));

    for event in &events {
        if let Some(record) = replay::apply(&mut layout, event) {
            emit(&record);
        }
    }

    layout.unmount();
    if layout.host().live_subscriptions() != 0 || layout.host().pending_frames() != 0 {
        tracing::warn!("Host resources still held after unmount");
    }
    tracing::info!("Replay finished");
    Ok(())
}
