use std::sync::Arc;

use async_trait::async_trait;
use homesync_api::message::SwitchState;
use homesync_api::models::Device;
use tokio::sync::Mutex;

use homesync_client::errors::DispatchError;
use homesync_client::registry::DeviceRegistry;
use homesync_client::services::{CommandOutcome, CommandService, CommandSink};
use homesync_client::updates::UpdateBus;

/// Records every status change it is asked to send.
#[derive(Default)]
struct RecordingSink {
    calls: Mutex<Vec<(String, bool)>>,
}

#[async_trait]
impl CommandSink for RecordingSink {
    async fn set_status(&self, device: &Device, status: bool) -> Result<(), DispatchError> {
        self.calls.lock().await.push((device.name.clone(), status));
        Ok(())
    }
}

struct FailingSink;

#[async_trait]
impl CommandSink for FailingSink {
    async fn set_status(&self, _device: &Device, _status: bool) -> Result<(), DispatchError> {
        Err(DispatchError::Transport("connection refused".to_string()))
    }
}

fn seed_devices() -> Vec<Device> {
    [
        (1, "White_LED", false),
        (2, "Yellow_LED", false),
        (3, "Buzzer", true),
        (4, "Gas_Sensor", false),
    ]
    .into_iter()
    .map(|(id, name, status)| Device {
        id,
        name: name.to_string(),
        description: "desc".to_string(),
        status,
        device_type: "GENERIC".to_string(),
        value: 0.0,
    })
    .collect()
}

fn service_with(sink: Arc<dyn CommandSink>) -> (CommandService, Arc<UpdateBus>) {
    let registry = DeviceRegistry::with_devices(seed_devices());
    let updates = Arc::new(UpdateBus::new(16));
    let service = CommandService::new(registry, sink, updates.clone());
    (service, updates)
}

#[tokio::test]
async fn test_dispatch_sends_command_and_broadcasts_update() {
    let sink = Arc::new(RecordingSink::default());
    let (service, updates) = service_with(sink.clone());
    let mut receiver = updates.subscribe();

    let outcome = service.handle_phrase("white led on").await.unwrap();

    assert_eq!(
        outcome,
        CommandOutcome::Dispatched {
            device_name: "White_LED".to_string(),
            status: true,
        }
    );

    let calls = sink.calls.lock().await;
    assert_eq!(*calls, vec![("White_LED".to_string(), true)]);

    let update = receiver.recv().await.unwrap();
    assert_eq!(update.device_name, "White_LED");
    assert_eq!(update.status, SwitchState::On);

    let activity = service.activity().recent().await;
    assert_eq!(activity.len(), 1);
    assert_eq!(activity[0].device_name, "White_LED");
    assert!(activity[0].status);
}

#[tokio::test]
async fn test_already_in_state_issues_nothing() {
    // Buzzer is already ON in the seed list.
    let sink = Arc::new(RecordingSink::default());
    let (service, updates) = service_with(sink.clone());
    let mut receiver = updates.subscribe();

    let outcome = service.handle_phrase("buzzer on").await.unwrap();

    assert_eq!(
        outcome,
        CommandOutcome::AlreadyInState {
            device_name: "Buzzer".to_string(),
        }
    );
    assert!(sink.calls.lock().await.is_empty());
    assert!(service.activity().is_empty().await);
    // Nothing was broadcast either.
    assert!(receiver.try_recv().is_err());
}

#[tokio::test]
async fn test_unknown_device_is_a_silent_noop() {
    let sink = Arc::new(RecordingSink::default());
    let (service, _updates) = service_with(sink.clone());

    let outcome = service.handle_phrase("fridge on").await.unwrap();

    assert_eq!(
        outcome,
        CommandOutcome::UnknownDevice {
            desired_state: true,
        }
    );
    assert!(sink.calls.lock().await.is_empty());
}

#[tokio::test]
async fn test_unrecognized_phrase_is_not_a_command() {
    let sink = Arc::new(RecordingSink::default());
    let (service, _updates) = service_with(sink.clone());

    for phrase in ["", "buzzer", "white led maybe"] {
        let outcome = service.handle_phrase(phrase).await.unwrap();
        assert_eq!(outcome, CommandOutcome::NotACommand, "{phrase:?}");
    }
    assert!(sink.calls.lock().await.is_empty());
}

#[tokio::test]
async fn test_multi_word_name_with_underscores_matches() {
    let sink = Arc::new(RecordingSink::default());
    let (service, _updates) = service_with(sink.clone());

    let outcome = service.handle_phrase("gas sensor on").await.unwrap();

    assert_eq!(
        outcome,
        CommandOutcome::Dispatched {
            device_name: "Gas_Sensor".to_string(),
            status: true,
        }
    );
}

#[tokio::test]
async fn test_sink_failure_publishes_nothing() {
    let (service, updates) = service_with(Arc::new(FailingSink));
    let mut receiver = updates.subscribe();

    let result = service.handle_phrase("white led on").await;

    assert!(matches!(result, Err(DispatchError::Transport(_))));
    assert!(receiver.try_recv().is_err());
    assert!(service.activity().is_empty().await);
}

#[tokio::test]
async fn test_search_uses_current_snapshot() {
    let sink = Arc::new(RecordingSink::default());
    let (service, _updates) = service_with(sink);

    let names: Vec<String> = service
        .search("led")
        .await
        .into_iter()
        .map(|device| device.name)
        .collect();
    assert_eq!(names, ["White_LED", "Yellow_LED"]);

    assert!(service.search("  ").await.is_empty());
}
