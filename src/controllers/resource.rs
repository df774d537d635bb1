use axum::{
    extract::{Path, State},
    http::StatusCode,
    Extension, Json,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::resource::{
    CreateResourceRequest, CreateWithRelatedRequest, CreateWithRelatedResponse, ResourceResponse,
    UpdateResourceRequest,
};
use crate::{
    domain::resource::{ResourceService, ResourceServiceApi},
    error::AppResult,
    infrastructure::auth::AuthUser,
};

pub struct ResourceController {
    resource_service: Arc<ResourceService>,
}

impl ResourceController {
    pub fn new(resource_service: Arc<ResourceService>) -> Self {
        Self { resource_service }
    }

    /// GET /api/resources - List resources
    pub async fn list_resources(
        State(controller): State<Arc<ResourceController>>,
    ) -> AppResult<Json<Vec<ResourceResponse>>> {
        let resources = controller.resource_service.list_resources().await?;
        Ok(Json(resources))
    }

    /// GET /api/resources/{resourceId} - Get a single resource
    pub async fn get_resource(
        State(controller): State<Arc<ResourceController>>,
        Path(resource_id): Path<Uuid>,
    ) -> AppResult<Json<ResourceResponse>> {
        let resource = controller.resource_service.get_resource(resource_id).await?;
        Ok(Json(resource))
    }

    /// POST /api/resources - Create new resource
    pub async fn create_resource(
        State(controller): State<Arc<ResourceController>>,
        Json(request): Json<CreateResourceRequest>,
    ) -> AppResult<(StatusCode, Json<ResourceResponse>)> {
        let resource = controller.resource_service.create_resource(request).await?;
        Ok((StatusCode::CREATED, Json(resource)))
    }

    /// PUT /api/resources/{resourceId} - Update resource
    pub async fn update_resource(
        State(controller): State<Arc<ResourceController>>,
        Path(resource_id): Path<Uuid>,
        Json(request): Json<UpdateResourceRequest>,
    ) -> AppResult<Json<ResourceResponse>> {
        let resource = controller
            .resource_service
            .update_resource(resource_id, request)
            .await?;
        Ok(Json(resource))
    }

    /// DELETE /api/resources/{resourceId} - Delete resource
    pub async fn delete_resource(
        State(controller): State<Arc<ResourceController>>,
        Path(resource_id): Path<Uuid>,
    ) -> AppResult<StatusCode> {
        controller
            .resource_service
            .delete_resource(resource_id)
            .await?;
        Ok(StatusCode::NO_CONTENT)
    }

    /// POST /api/resources/with-related - Create resource and related data atomically
    pub async fn create_with_related(
        State(controller): State<Arc<ResourceController>>,
        Json(request): Json<CreateWithRelatedRequest>,
    ) -> AppResult<(StatusCode, Json<CreateWithRelatedResponse>)> {
        let response = controller
            .resource_service
            .create_with_related(request)
            .await?;
        Ok((StatusCode::CREATED, Json(response)))
    }

    /// GET /api/protected/resources - List resources, authenticated
    pub async fn list_protected_resources(
        State(controller): State<Arc<ResourceController>>,
        Extension(auth_user): Extension<AuthUser>,
    ) -> AppResult<Json<Vec<ResourceResponse>>> {
        tracing::debug!(user_id = %auth_user.user_id, "Listing resources for authenticated user");
        let resources = controller.resource_service.list_resources().await?;
        Ok(Json(resources))
    }
}
