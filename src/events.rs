use serde::{Deserialize, Serialize};
use tokio::sync::mpsc;
use tracing::{info, warn};
use uuid::Uuid;

/// Events emitted by the submission workflow. Consumed by the background
/// event processor; delivery is best-effort and never fails a request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Event {
    AssessmentSubmitted {
        assessment_id: Uuid,
        vendor_id: Uuid,
        item_count: usize,
    },
    PersonnelLinked {
        assessment_id: Uuid,
        personnel_count: usize,
    },
    VendorAssetCreated {
        assessment_id: Uuid,
        vendor_asset_id: Uuid,
        equipment_id: Uuid,
    },
    VendorAssetUpdated {
        assessment_id: Uuid,
        vendor_asset_id: Uuid,
        equipment_id: Uuid,
    },
}

#[derive(Debug, Clone)]
pub struct EventSender {
    sender: mpsc::Sender<Event>,
}

impl EventSender {
    /// Creates a new EventSender
    pub fn new(sender: mpsc::Sender<Event>) -> Self {
        Self { sender }
    }

    /// Sends an event asynchronously
    pub async fn send(&self, event: Event) -> Result<(), String> {
        self.sender
            .send(event)
            .await
            .map_err(|e| format!("Failed to send event: {}", e))
    }
}

/// Background consumer for workflow events. Currently logs; an outbound
/// integration would hang off this loop.
pub async fn process_events(mut receiver: mpsc::Receiver<Event>) {
    while let Some(event) = receiver.recv().await {
        match &event {
            Event::AssessmentSubmitted {
                assessment_id,
                vendor_id,
                item_count,
            } => {
                info!(
                    assessment_id = %assessment_id,
                    vendor_id = %vendor_id,
                    item_count = item_count,
                    "Assessment submitted"
                );
            }
            Event::PersonnelLinked {
                assessment_id,
                personnel_count,
            } => {
                info!(
                    assessment_id = %assessment_id,
                    personnel_count = personnel_count,
                    "Assessment personnel linked"
                );
            }
            Event::VendorAssetCreated {
                assessment_id,
                vendor_asset_id,
                equipment_id,
            } => {
                info!(
                    assessment_id = %assessment_id,
                    vendor_asset_id = %vendor_asset_id,
                    equipment_id = %equipment_id,
                    "Vendor asset created"
                );
            }
            Event::VendorAssetUpdated {
                assessment_id,
                vendor_asset_id,
                equipment_id,
            } => {
                info!(
                    assessment_id = %assessment_id,
                    vendor_asset_id = %vendor_asset_id,
                    equipment_id = %equipment_id,
                    "Vendor asset updated"
                );
            }
        }
    }
    warn!("Event channel closed; event processor exiting");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn send_delivers_event_to_receiver() {
        let (tx, mut rx) = mpsc::channel(4);
        let sender = EventSender::new(tx);

        let assessment_id = Uuid::new_v4();
        sender
            .send(Event::AssessmentSubmitted {
                assessment_id,
                vendor_id: Uuid::new_v4(),
                item_count: 3,
            })
            .await
            .expect("send should succeed");

        match rx.recv().await {
            Some(Event::AssessmentSubmitted {
                assessment_id: got, ..
            }) => assert_eq!(got, assessment_id),
            other => panic!("unexpected event: {:?}", other),
        }
    }

    #[tokio::test]
    async fn send_fails_when_receiver_dropped() {
        let (tx, rx) = mpsc::channel(1);
        drop(rx);
        let sender = EventSender::new(tx);

        let result = sender
            .send(Event::PersonnelLinked {
                assessment_id: Uuid::new_v4(),
                personnel_count: 1,
            })
            .await;
        assert!(result.is_err());
    }
}
