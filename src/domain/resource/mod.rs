pub mod error;
pub mod model;
pub mod service;

pub use error::ResourceServiceError;
pub use model::{RelatedData, Resource};
pub use service::{ResourceService, ResourceServiceApi};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Response for resource endpoints
#[derive(Debug, Serialize, Deserialize)]
pub struct ResourceResponse {
    pub id: Uuid,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Request to create a new resource
#[derive(Debug, Serialize, Deserialize)]
pub struct CreateResourceRequest {
    pub name: String,
    pub description: Option<String>,
}

/// Request to update an existing resource
#[derive(Debug, Serialize, Deserialize)]
pub struct UpdateResourceRequest {
    pub name: String,
    pub description: Option<String>,
}

/// Request for the combined resource + related data write.
/// `info` stays optional here so a null value reaches the NOT NULL
/// constraint inside the transaction instead of being rejected by serde.
#[derive(Debug, Serialize, Deserialize)]
pub struct CreateWithRelatedRequest {
    pub resource: CreateResourceRequest,
    pub related_data: RelatedDataPayload,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct RelatedDataPayload {
    pub info: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct RelatedDataResponse {
    pub id: Uuid,
    pub resource_id: Uuid,
    pub info: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CreateWithRelatedResponse {
    pub resource: ResourceResponse,
    pub related_data: RelatedDataResponse,
}

impl From<Resource> for ResourceResponse {
    fn from(resource: Resource) -> Self {
        Self {
            id: resource.id,
            name: resource.name,
            description: resource.description,
            created_at: resource.created_at,
            updated_at: resource.updated_at,
        }
    }
}

impl From<RelatedData> for RelatedDataResponse {
    fn from(related: RelatedData) -> Self {
        Self {
            id: related.id,
            resource_id: related.resource_id,
            info: related.info,
            created_at: related.created_at,
        }
    }
}
