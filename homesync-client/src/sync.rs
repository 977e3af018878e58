use std::time::Duration;

use async_trait::async_trait;
use homesync_api::models::Device;
use tokio::sync::watch;
use tokio::time;
use tracing::{debug, warn};

use crate::errors::DispatchError;
use crate::registry::DeviceRegistry;

/// The seam where a real transport fetches the device list.
#[async_trait]
pub trait DeviceSource: Send + Sync {
    async fn fetch_devices(&self) -> Result<Vec<Device>, DispatchError>;
}

/// Periodically refresh the registry from a source until told to stop.
///
/// Fetch failures are logged and skipped; the loop only ends when the
/// shutdown channel flips to `true` or its sender is dropped. This is the
/// cancellable replacement for the callback-based polling the screens used
/// to run themselves.
pub async fn run_refresh_loop(
    source: &dyn DeviceSource,
    registry: &DeviceRegistry,
    interval: Duration,
    mut shutdown: watch::Receiver<bool>,
) {
    let mut ticker = time::interval(interval);
    ticker.set_missed_tick_behavior(time::MissedTickBehavior::Skip);

    loop {
        tokio::select! {
            _ = ticker.tick() => {
                match source.fetch_devices().await {
                    Ok(latest) => {
                        if registry.replace(latest).await {
                            debug!("registry updated from poll");
                        }
                    }
                    Err(e) => warn!("device refresh failed: {e}"),
                }
            }
            changed = shutdown.changed() => {
                if changed.is_err() || *shutdown.borrow() {
                    debug!("refresh loop stopping");
                    break;
                }
            }
        }
    }
}
