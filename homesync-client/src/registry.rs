use std::sync::Arc;

use homesync_api::message::DeviceUpdate;
use homesync_api::models::Device;
use tokio::sync::RwLock;
use tracing::debug;

/// Owner of the current device snapshot.
///
/// Callers take a clone via [`snapshot`](Self::snapshot) and hand it to the
/// pure matching functions; the registry is never read through a shared
/// reference during interpretation, so a concurrent refresh can never race
/// an in-flight call.
#[derive(Clone, Default)]
pub struct DeviceRegistry {
    devices: Arc<RwLock<Vec<Device>>>,
}

impl DeviceRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_devices(devices: Vec<Device>) -> Self {
        Self {
            devices: Arc::new(RwLock::new(devices)),
        }
    }

    /// Clone of the current device list, in backend order.
    pub async fn snapshot(&self) -> Vec<Device> {
        self.devices.read().await.clone()
    }

    /// Install a full refresh. Returns whether the list actually changed.
    pub async fn replace(&self, latest: Vec<Device>) -> bool {
        let mut devices = self.devices.write().await;
        if *devices == latest {
            return false;
        }

        debug!("device snapshot refreshed, {} devices", latest.len());
        *devices = latest;
        true
    }

    /// Patch a single device's status from a push update. Returns false
    /// when no device carries that exact name.
    pub async fn apply_update(&self, update: &DeviceUpdate) -> bool {
        let mut devices = self.devices.write().await;
        match devices
            .iter_mut()
            .find(|device| device.name == update.device_name)
        {
            Some(device) => {
                device.status = update.status.into();
                true
            }
            None => {
                debug!("push update for unknown device {}", update.device_name);
                false
            }
        }
    }
}
