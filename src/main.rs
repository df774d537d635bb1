use resource_api::infrastructure::config::{Config, LogFormat};
use resource_api::infrastructure::db::{check_connection, create_pool};
use resource_api::infrastructure::events::{EventPublisher, NoopPublisher, WebhookPublisher};
use resource_api::infrastructure::http::start_http_server;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration
    let config = Config::from_env()?;

    // Initialize logging
    init_logging(&config);

    tracing::info!(
        "Starting Resource API on {}:{}",
        config.host,
        config.port
    );

    // Create database connection pool
    let pool = create_pool(&config.database_url).await?;
    tracing::info!("Database connection pool created");

    // Verify database connection
    check_connection(&pool).await?;
    tracing::info!("Database connection verified");

    let pool = Arc::new(pool);
    let config = Arc::new(config);

    // === DEPENDENCY INJECTION SETUP ===
    // 1. Instantiate repositories (inject db pool)
    let resource_repo = Arc::new(
        resource_api::infrastructure::repositories::ResourceRepository::new(pool.clone()),
    );
    let user_repo = Arc::new(resource_api::infrastructure::repositories::UserRepository::new(
        pool.clone(),
    ));

    // 2. Instantiate event publisher
    let publisher: Arc<dyn EventPublisher> = match &config.webhook_url {
        Some(url) => {
            tracing::info!(endpoint = %url, "Webhook event delivery enabled");
            Arc::new(WebhookPublisher::new(url.clone()))
        }
        None => Arc::new(NoopPublisher),
    };

    // 3. Instantiate services (inject repositories and publisher)
    let resource_service = Arc::new(resource_api::domain::resource::ResourceService::new(
        resource_repo.clone(),
        publisher,
    ));

    // 4. Instantiate controllers (inject services)
    let resource_controller = Arc::new(
        resource_api::controllers::resource::ResourceController::new(resource_service),
    );

    // Start HTTP server with all routes
    start_http_server(pool, config, user_repo, resource_controller).await?;

    Ok(())
}

fn init_logging(config: &Config) {
    if config.log_format == LogFormat::Json {
        tracing_subscriber::registry()
            .with(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| "resource_api=debug,tower_http=debug".into()),
            )
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| "resource_api=debug,tower_http=debug".into()),
            )
            .with(tracing_subscriber::fmt::layer().pretty())
            .init();
    }
}
