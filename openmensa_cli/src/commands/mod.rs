//! CLI subcommand implementations.

use std::future::Future;
use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};
use openmensa_lib::{CanteenQuery, ClientConfig, Query};

pub mod canteens;
pub mod meals;
pub mod menu;

/// Canteen query carrying the configured page size, if any.
pub fn base_query(config: &ClientConfig) -> CanteenQuery {
    match config.page_size {
        Some(limit) => CanteenQuery::default().with_limit(limit),
        None => CanteenQuery::default(),
    }
}

/// Awaits `fut` while a spinner with `message` runs on stderr.
pub async fn with_spinner<F: Future>(message: &str, fut: F) -> F::Output {
    let pb = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::with_template("{spinner} {msg}") {
        pb.set_style(style);
    }
    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(100));
    let output = fut.await;
    pb.finish_and_clear();
    output
}
