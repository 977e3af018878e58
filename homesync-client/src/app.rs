use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use homesync_api::models::Device;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::watch;
use tracing::info;

use crate::errors::DispatchError;
use crate::registry::DeviceRegistry;
use crate::services::{CommandOutcome, CommandService, CommandSink};
use crate::settings::Settings;
use crate::sync::{DeviceSource, run_refresh_loop};
use crate::updates::UpdateBus;

/// Sink that only logs what it would have sent. Stands in for the real
/// transport so the command flow can be exercised without a backend.
struct LoggingSink {
    base_url: String,
}

#[async_trait]
impl CommandSink for LoggingSink {
    async fn set_status(&self, device: &Device, status: bool) -> Result<(), DispatchError> {
        info!(
            "PATCH {}/device/{} {{\"name\": {:?}, \"status\": {}}}",
            self.base_url, device.id, device.name, status
        );
        Ok(())
    }
}

/// Source that serves whatever the registry already holds, standing in for
/// a backend that agrees with the client.
struct MirrorSource {
    registry: DeviceRegistry,
}

#[async_trait]
impl DeviceSource for MirrorSource {
    async fn fetch_devices(&self) -> Result<Vec<Device>, DispatchError> {
        Ok(self.registry.snapshot().await)
    }
}

fn seed_devices() -> Vec<Device> {
    [
        (1, "White_LED", "LED", false),
        (2, "Yellow_LED", "LED", false),
        (3, "Buzzer", "BUZZER", true),
        (4, "Gas_Sensor", "SENSOR", false),
    ]
    .into_iter()
    .map(|(id, name, device_type, status)| Device {
        id,
        name: name.to_string(),
        description: String::new(),
        status,
        device_type: device_type.to_string(),
        value: 0.0,
    })
    .collect()
}

/// Read phrases from stdin and run each through the command service.
pub async fn run(settings: &Arc<Settings>) {
    let registry = DeviceRegistry::with_devices(seed_devices());
    let updates = Arc::new(UpdateBus::new(settings.updates.capacity));
    let sink = LoggingSink {
        base_url: settings.backend.base_url.clone(),
    };
    let service = CommandService::new(registry.clone(), Arc::new(sink), updates.clone());

    // Background refresh, as the screens would run against the real backend.
    let (shutdown_tx, shutdown_rx) = watch::channel(false);
    let poll_registry = registry.clone();
    let poll_interval = Duration::from_secs(settings.poll.interval_secs);
    let refresh = tokio::spawn(async move {
        let source = MirrorSource {
            registry: poll_registry.clone(),
        };
        run_refresh_loop(&source, &poll_registry, poll_interval, shutdown_rx).await;
    });

    let mut receiver = updates.subscribe();
    tokio::spawn(async move {
        while let Ok(update) = receiver.recv().await {
            info!("update broadcast: {:?}", update);
            registry.apply_update(&update).await;
        }
    });

    info!("say: <device name> on|off (Ctrl-D to quit)");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Ok(Some(line)) = lines.next_line().await {
        match service.handle_phrase(&line).await {
            Ok(CommandOutcome::Dispatched {
                device_name,
                status,
            }) => {
                info!(
                    "{} switched {}",
                    device_name,
                    if status { "ON" } else { "OFF" }
                );
            }
            Ok(CommandOutcome::AlreadyInState { device_name }) => {
                info!("{} unchanged", device_name);
            }
            Ok(CommandOutcome::UnknownDevice { .. }) => {
                info!("no matching device");
            }
            Ok(CommandOutcome::NotACommand) => {
                info!("not understood");
            }
            Err(e) => {
                info!("dispatch failed: {e}");
            }
        }
    }

    let _ = shutdown_tx.send(true);
    let _ = refresh.await;
}
