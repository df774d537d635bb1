use async_trait::async_trait;
use parking_lot::Mutex;
use resource_api::infrastructure::events::{EventPublisher, ResourceEvent};

/// In-memory stand-in for the webhook publisher. Captures every event so
/// tests can assert what the service emitted and how often.
#[derive(Default)]
pub struct RecordingPublisher {
    events: Mutex<Vec<ResourceEvent>>,
}

impl RecordingPublisher {
    pub fn events(&self) -> Vec<ResourceEvent> {
        self.events.lock().clone()
    }
}

#[async_trait]
impl EventPublisher for RecordingPublisher {
    async fn publish(&self, event: &ResourceEvent) -> anyhow::Result<()> {
        self.events.lock().push(event.clone());
        Ok(())
    }
}
