//! Topic-based event bus for record subscriptions.
//!
//! The backend's push-based sync is modeled as a subscription seam:
//! subscribe to a topic, receive the latest record value after every
//! successful persist, drop the receiver to unsubscribe. Delivery is
//! best-effort broadcast; slow consumers miss events rather than block
//! the service.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;

use economy_core::{ArtifactInstance, ClaimKey, Equipment, UserProgress};

use crate::types::{ItemKey, UserId};

/// Topics for event routing, one per user record.
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, Serialize, Deserialize)]
pub enum Topic {
    /// Progress document changes (wallet, stats, levels).
    Progress,
    /// Inventory document changes.
    Inventory,
    /// Equipment document changes.
    Equipment,
    /// Quest claim recordings.
    Claims,
}

const TOPICS: [Topic; 4] = [
    Topic::Progress,
    Topic::Inventory,
    Topic::Equipment,
    Topic::Claims,
];

/// Event wrapper carrying the latest value of a changed record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum ShopEvent {
    ProgressChanged {
        uid: UserId,
        progress: UserProgress,
    },
    InventoryChanged {
        uid: UserId,
        items: Vec<(ItemKey, ArtifactInstance)>,
    },
    EquipmentChanged {
        uid: UserId,
        equipment: Equipment,
    },
    ClaimRecorded {
        uid: UserId,
        key: ClaimKey,
        coins: u64,
    },
}

impl ShopEvent {
    pub fn topic(&self) -> Topic {
        match self {
            ShopEvent::ProgressChanged { .. } => Topic::Progress,
            ShopEvent::InventoryChanged { .. } => Topic::Inventory,
            ShopEvent::EquipmentChanged { .. } => Topic::Equipment,
            ShopEvent::ClaimRecorded { .. } => Topic::Claims,
        }
    }
}

/// Topic-based event bus.
///
/// Consumers subscribe to the topics they care about and only receive
/// those events.
pub struct EventBus {
    channels: HashMap<Topic, broadcast::Sender<ShopEvent>>,
}

impl EventBus {
    /// Creates a new event bus with default capacity per topic.
    pub fn new() -> Self {
        Self::with_capacity(100)
    }

    /// Creates a new event bus with the given capacity per topic.
    pub fn with_capacity(capacity: usize) -> Self {
        let channels = TOPICS
            .into_iter()
            .map(|topic| (topic, broadcast::channel(capacity).0))
            .collect();
        Self { channels }
    }

    /// Publish an event to its topic. Best-effort: events published with
    /// no live subscribers are dropped.
    pub fn publish(&self, event: ShopEvent) {
        if let Some(sender) = self.channels.get(&event.topic()) {
            let _ = sender.send(event);
        }
    }

    /// Subscribe to one topic. Dropping the receiver unsubscribes.
    pub fn subscribe(&self, topic: Topic) -> broadcast::Receiver<ShopEvent> {
        self.channels
            .get(&topic)
            .expect("all topics are pre-created")
            .subscribe()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn subscribers_receive_only_their_topic() {
        let bus = EventBus::new();
        let mut progress_rx = bus.subscribe(Topic::Progress);
        let mut claims_rx = bus.subscribe(Topic::Claims);

        let uid = UserId::from("sub");
        bus.publish(ShopEvent::ProgressChanged {
            uid: uid.clone(),
            progress: UserProgress::new_hero("sub"),
        });

        let event = progress_rx.recv().await.unwrap();
        assert!(matches!(event, ShopEvent::ProgressChanged { .. }));
        assert!(claims_rx.try_recv().is_err());
    }

    #[test]
    fn publishing_without_subscribers_is_fine() {
        let bus = EventBus::new();
        bus.publish(ShopEvent::ClaimRecorded {
            uid: UserId::from("nobody"),
            key: ClaimKey::new(1, economy_core::QuestTier::Free),
            coins: 50,
        });
    }
}
