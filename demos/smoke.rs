//! Smoke run: build a logger from a YAML file and emit one record per level.
//!
//! ```text
//! cargo run --example smoke -- demos/config.yaml
//! ```

use rust_logger_setup::prelude::*;
use rust_logger_setup::{critical, debug, error, info, warning};

fn main() -> Result<()> {
    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "demos/config.yaml".to_string());

    let (logger, mut listeners) = init_from_path(&path)?;

    debug!(logger, "debug from {}", logger.name());
    info!(logger, "config loaded from {}", path);
    warning!(logger, "this is a warning");
    error!(logger, "this is an error");
    critical!(logger, "this is critical");

    for listener in &mut listeners {
        listener.stop()?;
    }

    let metrics = logger.metrics();
    println!(
        "delivered={} enqueued={} dropped={}",
        metrics.delivered_count(),
        metrics.enqueued_count(),
        metrics.dropped_count()
    );
    Ok(())
}
