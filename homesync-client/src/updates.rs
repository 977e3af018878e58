use homesync_api::message::DeviceUpdate;
use tokio::sync::broadcast;

/// Fan-out of push updates to any number of subscribers.
///
/// A subscription is just the broadcast receiver; dropping it cancels the
/// subscription. Publishing with no subscribers is not an error, it simply
/// reaches nobody.
pub struct UpdateBus {
    sender: broadcast::Sender<DeviceUpdate>,
}

impl UpdateBus {
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    /// Deliver an update to all current subscribers, returning how many
    /// received it.
    pub fn publish(&self, update: DeviceUpdate) -> usize {
        self.sender.send(update).unwrap_or(0)
    }

    pub fn subscribe(&self) -> broadcast::Receiver<DeviceUpdate> {
        self.sender.subscribe()
    }

    pub fn subscriber_count(&self) -> usize {
        self.sender.receiver_count()
    }
}
