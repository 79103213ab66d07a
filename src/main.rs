use houses_panel::{LogBridge, Panel, PanelConfig, preview, run_gui};
use std::io::BufRead;
use std::path::PathBuf;
use std::sync::mpsc;
use tracing_subscriber::EnvFilter;

/// Env var standing in for the host's resource-name lookup.
const RESOURCE_ENV: &str = "HOUSES_RESOURCE_NAME";

fn main() -> anyhow::Result<()> {
    // Create logger
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let open = match std::env::args_os().nth(1).map(PathBuf::from) {
        Some(path) => preview::load_preview_path(&path)?,
        None => preview::preview_message()?,
    };

    let config = PanelConfig::from_host_lookup(Some(|| std::env::var(RESOURCE_ENV).ok()));
    tracing::info!(resource = %config.resource_name, "starting preview");
    let mut panel = Panel::new(config, LogBridge);
    panel.handle_message(open);

    // Further host envelopes can be piped in, one JSON object per line.
    let (tx, rx) = mpsc::channel::<String>();
    std::thread::spawn(move || {
        for line in std::io::stdin().lock().lines() {
            let Ok(line) = line else {
                break;
            };
            if line.trim().is_empty() {
                continue;
            }
            if tx.send(line).is_err() {
                break;
            }
        }
    });

    run_gui(panel, Some(rx)).map_err(|e| anyhow::anyhow!("running GUI: {e}"))
}
