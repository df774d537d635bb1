use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Resource {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Secondary row written together with a resource in the combined create
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct RelatedData {
    pub id: Uuid,
    pub resource_id: Uuid,
    pub info: String,
    pub created_at: DateTime<Utc>,
}
