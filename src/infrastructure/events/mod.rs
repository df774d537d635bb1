use async_trait::async_trait;
use serde::Serialize;
use uuid::Uuid;

/// Lifecycle events emitted after resource writes commit
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ResourceEvent {
    ResourceCreated { id: Uuid, name: String },
    ResourceDeleted { id: Uuid },
}

/// Outbound notification seam.
/// Abstracts the downstream consumer (webhook receiver, queue, test double).
#[async_trait]
pub trait EventPublisher: Send + Sync {
    async fn publish(&self, event: &ResourceEvent) -> anyhow::Result<()>;
}

/// Delivers events as JSON POSTs to a configured webhook endpoint
pub struct WebhookPublisher {
    endpoint: String,
    http_client: reqwest::Client,
}

impl WebhookPublisher {
    pub fn new(endpoint: String) -> Self {
        Self {
            endpoint,
            http_client: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl EventPublisher for WebhookPublisher {
    async fn publish(&self, event: &ResourceEvent) -> anyhow::Result<()> {
        let response = self
            .http_client
            .post(&self.endpoint)
            .json(event)
            .send()
            .await?;

        if !response.status().is_success() {
            anyhow::bail!("webhook endpoint returned {}", response.status());
        }

        tracing::debug!(endpoint = %self.endpoint, "Resource event delivered");
        Ok(())
    }
}

/// Used when no webhook endpoint is configured
pub struct NoopPublisher;

#[async_trait]
impl EventPublisher for NoopPublisher {
    async fn publish(&self, event: &ResourceEvent) -> anyhow::Result<()> {
        tracing::debug!(?event, "Event publishing disabled, dropping event");
        Ok(())
    }
}
