use axum::{middleware, routing::get, Router};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use crate::infrastructure::config::Config;
use crate::infrastructure::db::DbPool;
use crate::{
    controllers::{health, resource::ResourceController},
    infrastructure::auth::{auth_middleware, request_id_middleware},
};

use crate::infrastructure::repositories::UserRepository;

/// Assemble the application router. Shared between `main` and the e2e
/// harness so both serve the identical app.
pub fn build_router(
    pool: Arc<DbPool>,
    config: Arc<Config>,
    user_repo: Arc<UserRepository>,
    resource_controller: Arc<ResourceController>,
) -> Router {
    // Resource routes (public)
    let resource_routes = Router::new()
        .route(
            "/api/resources",
            get(ResourceController::list_resources).post(ResourceController::create_resource),
        )
        .route(
            "/api/resources/with-related",
            axum::routing::post(ResourceController::create_with_related),
        )
        .route(
            "/api/resources/:resourceId",
            get(ResourceController::get_resource)
                .put(ResourceController::update_resource)
                .delete(ResourceController::delete_resource),
        )
        .with_state(resource_controller.clone());

    // Protected routes (require authentication)
    let protected_routes = Router::new()
        .route(
            "/api/protected/resources",
            get(ResourceController::list_protected_resources),
        )
        .with_state(resource_controller.clone())
        .layer(middleware::from_fn_with_state(
            (user_repo.clone(), config.clone()),
            auth_middleware,
        ));

    Router::new()
        .route("/health", get(health::health))
        .route("/health/ready", get(health::health_ready))
        .with_state(pool.clone())
        .merge(resource_routes)
        .merge(protected_routes)
        .layer(middleware::from_fn(request_id_middleware))
        .layer(TraceLayer::new_for_http())
}

/// Start the HTTP server with all routes configured
pub async fn start_http_server(
    pool: Arc<DbPool>,
    config: Arc<Config>,
    user_repo: Arc<UserRepository>,
    resource_controller: Arc<ResourceController>,
) -> Result<(), Box<dyn std::error::Error>> {
    let app = build_router(pool, config.clone(), user_repo, resource_controller);

    let listener =
        tokio::net::TcpListener::bind(format!("{}:{}", config.host, config.port)).await?;

    tracing::info!("Server listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;

    Ok(())
}
