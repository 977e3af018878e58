use std::sync::Arc;

use async_trait::async_trait;
use homesync_api::message::DeviceUpdate;
use homesync_api::models::Device;
use homesync_voice::{filter_devices, interpret};
use tracing::{debug, info};

use crate::errors::DispatchError;
use crate::registry::DeviceRegistry;
use crate::services::ActivityLog;
use crate::updates::UpdateBus;

/// The seam where a real transport issues the state-change request.
#[async_trait]
pub trait CommandSink: Send + Sync {
    async fn set_status(&self, device: &Device, status: bool) -> Result<(), DispatchError>;
}

/// What became of one spoken phrase.
#[derive(Debug, Clone, PartialEq)]
pub enum CommandOutcome {
    /// Phrase was too short or did not end in a state word
    NotACommand,
    /// State word understood, but no device name matched
    UnknownDevice { desired_state: bool },
    /// Device is already in the requested state; nothing was sent
    AlreadyInState { device_name: String },
    /// Command sent and update broadcast
    Dispatched { device_name: String, status: bool },
}

/// Wires the pure interpreter to the registry, the sink, and the bus.
///
/// The idempotence check lives here: a device already in the requested
/// state causes zero sink calls and zero broadcasts. Unrecognized phrases
/// are a silent no-op, never an error.
pub struct CommandService {
    registry: DeviceRegistry,
    sink: Arc<dyn CommandSink>,
    updates: Arc<UpdateBus>,
    activity: ActivityLog,
}

impl CommandService {
    pub fn new(
        registry: DeviceRegistry,
        sink: Arc<dyn CommandSink>,
        updates: Arc<UpdateBus>,
    ) -> Self {
        Self {
            registry,
            sink,
            updates,
            activity: ActivityLog::default(),
        }
    }

    pub fn activity(&self) -> &ActivityLog {
        &self.activity
    }

    pub async fn handle_phrase(&self, phrase: &str) -> Result<CommandOutcome, DispatchError> {
        let snapshot = self.registry.snapshot().await;

        let (device, desired_state) = interpret(phrase, &snapshot);

        let Some(desired_state) = desired_state else {
            debug!("not a command: {phrase:?}");
            return Ok(CommandOutcome::NotACommand);
        };

        let Some(device) = device else {
            debug!("no device matched in {phrase:?}");
            return Ok(CommandOutcome::UnknownDevice { desired_state });
        };

        if device.status == desired_state {
            debug!(
                "{} already {}",
                device.name,
                if desired_state { "ON" } else { "OFF" }
            );
            return Ok(CommandOutcome::AlreadyInState {
                device_name: device.name.clone(),
            });
        }

        self.sink.set_status(device, desired_state).await?;

        info!(
            "toggling {} -> {}",
            device.name,
            if desired_state { "ON" } else { "OFF" }
        );
        self.updates
            .publish(DeviceUpdate::new(device.name.clone(), desired_state));
        self.activity.record(&device.name, desired_state).await;

        Ok(CommandOutcome::Dispatched {
            device_name: device.name.clone(),
            status: desired_state,
        })
    }

    /// Substring search over the current snapshot, order preserved.
    pub async fn search(&self, query: &str) -> Vec<Device> {
        let snapshot = self.registry.snapshot().await;
        filter_devices(query, &snapshot)
            .into_iter()
            .cloned()
            .collect()
    }
}
