use std::collections::VecDeque;
use std::sync::Arc;

use time::OffsetDateTime;
use tokio::sync::RwLock;

/// One dispatched command, as shown on the activity screen.
#[derive(Debug, Clone, PartialEq)]
pub struct ActivityEntry {
    pub device_name: String,
    pub status: bool,
    pub at: OffsetDateTime,
}

/// Bounded, in-memory record of dispatched commands.
///
/// Oldest entries are evicted first; reads come back newest first.
#[derive(Clone)]
pub struct ActivityLog {
    entries: Arc<RwLock<VecDeque<ActivityEntry>>>,
    capacity: usize,
}

impl ActivityLog {
    pub const DEFAULT_CAPACITY: usize = 128;

    pub fn new(capacity: usize) -> Self {
        Self {
            entries: Arc::new(RwLock::new(VecDeque::with_capacity(capacity))),
            capacity,
        }
    }

    pub async fn record(&self, device_name: &str, status: bool) {
        let mut entries = self.entries.write().await;
        if entries.len() == self.capacity {
            entries.pop_front();
        }
        entries.push_back(ActivityEntry {
            device_name: device_name.to_string(),
            status,
            at: OffsetDateTime::now_utc(),
        });
    }

    /// Entries in reverse-chronological order.
    pub async fn recent(&self) -> Vec<ActivityEntry> {
        self.entries.read().await.iter().rev().cloned().collect()
    }

    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }
}

impl Default for ActivityLog {
    fn default() -> Self {
        Self::new(Self::DEFAULT_CAPACITY)
    }
}
