use super::error::ResourceServiceError;
use crate::domain::resource::{
    CreateResourceRequest, CreateWithRelatedRequest, CreateWithRelatedResponse, ResourceResponse,
    UpdateResourceRequest,
};
use crate::infrastructure::events::{EventPublisher, ResourceEvent};
use crate::infrastructure::repositories::ResourceRepository;
use async_trait::async_trait;
use chrono::Utc;
use std::sync::Arc;
use uuid::Uuid;

pub struct ResourceService {
    resource_repo: Arc<ResourceRepository>,
    publisher: Arc<dyn EventPublisher>,
}

impl ResourceService {
    pub fn new(resource_repo: Arc<ResourceRepository>, publisher: Arc<dyn EventPublisher>) -> Self {
        Self {
            resource_repo,
            publisher,
        }
    }
}

#[async_trait]
pub trait ResourceServiceApi: Send + Sync {
    async fn list_resources(&self) -> Result<Vec<ResourceResponse>, ResourceServiceError>;

    async fn get_resource(&self, resource_id: Uuid)
        -> Result<ResourceResponse, ResourceServiceError>;

    async fn create_resource(
        &self,
        request: CreateResourceRequest,
    ) -> Result<ResourceResponse, ResourceServiceError>;

    async fn update_resource(
        &self,
        resource_id: Uuid,
        request: UpdateResourceRequest,
    ) -> Result<ResourceResponse, ResourceServiceError>;

    async fn delete_resource(&self, resource_id: Uuid) -> Result<(), ResourceServiceError>;

    async fn create_with_related(
        &self,
        request: CreateWithRelatedRequest,
    ) -> Result<CreateWithRelatedResponse, ResourceServiceError>;
}

#[async_trait]
impl ResourceServiceApi for ResourceService {
    async fn list_resources(&self) -> Result<Vec<ResourceResponse>, ResourceServiceError> {
        let resources = self.resource_repo.find_all().await?;
        Ok(resources.into_iter().map(ResourceResponse::from).collect())
    }

    async fn get_resource(
        &self,
        resource_id: Uuid,
    ) -> Result<ResourceResponse, ResourceServiceError> {
        let resource = self
            .resource_repo
            .find_by_id(resource_id)
            .await?
            .ok_or(ResourceServiceError::NotFound)?;
        Ok(resource.into())
    }

    async fn create_resource(
        &self,
        request: CreateResourceRequest,
    ) -> Result<ResourceResponse, ResourceServiceError> {
        self.validate_name(&request.name)?;

        let resource = self
            .resource_repo
            .create(
                Uuid::new_v4(),
                request.name.trim(),
                request.description.as_deref(),
            )
            .await?;

        self.notify(ResourceEvent::ResourceCreated {
            id: resource.id,
            name: resource.name.clone(),
        })
        .await;

        Ok(resource.into())
    }

    async fn update_resource(
        &self,
        resource_id: Uuid,
        request: UpdateResourceRequest,
    ) -> Result<ResourceResponse, ResourceServiceError> {
        self.validate_name(&request.name)?;

        let mut resource = self
            .resource_repo
            .find_by_id(resource_id)
            .await?
            .ok_or(ResourceServiceError::NotFound)?;

        resource.name = request.name.trim().to_string();
        resource.description = request.description;
        resource.updated_at = Utc::now();

        self.resource_repo.update(&resource).await?;

        Ok(resource.into())
    }

    async fn delete_resource(&self, resource_id: Uuid) -> Result<(), ResourceServiceError> {
        let deleted = self.resource_repo.delete(resource_id).await?;
        if !deleted {
            return Err(ResourceServiceError::NotFound);
        }

        self.notify(ResourceEvent::ResourceDeleted { id: resource_id })
            .await;

        Ok(())
    }

    async fn create_with_related(
        &self,
        request: CreateWithRelatedRequest,
    ) -> Result<CreateWithRelatedResponse, ResourceServiceError> {
        self.validate_name(&request.resource.name)?;

        let (resource, related) = self
            .resource_repo
            .create_with_related(
                Uuid::new_v4(),
                request.resource.name.trim(),
                request.resource.description.as_deref(),
                Uuid::new_v4(),
                request.related_data.info.as_deref(),
            )
            .await?;

        self.notify(ResourceEvent::ResourceCreated {
            id: resource.id,
            name: resource.name.clone(),
        })
        .await;

        Ok(CreateWithRelatedResponse {
            resource: resource.into(),
            related_data: related.into(),
        })
    }
}

impl ResourceService {
    fn validate_name(&self, name: &str) -> Result<(), ResourceServiceError> {
        if name.trim().is_empty() {
            return Err(ResourceServiceError::Invalid(
                "name must not be empty".to_string(),
            ));
        }
        Ok(())
    }

    /// Event delivery is best-effort, a failed webhook never fails the request
    async fn notify(&self, event: ResourceEvent) {
        if let Err(err) = self.publisher.publish(&event).await {
            tracing::warn!(error = %err, "Failed to publish resource event");
        }
    }
}
