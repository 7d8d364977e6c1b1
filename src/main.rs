use std::sync::Arc;

use actix_cors::Cors;
use actix_web::{web, App, HttpServer};
use anyhow::Context;
use tracing_actix_web::TracingLogger;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use autodinar::config::Config;
use autodinar::middleware::RequestId;
use autodinar::modules::orders::repositories::JsonFileStore;
use autodinar::modules::orders::services::OrderService;
use autodinar::modules::recommendations::services::{PromptFlowClient, RecommendationService};
use autodinar::modules::{catalog, health, orders, recommendations};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "autodinar=debug,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = Config::from_env().context("Failed to load configuration")?;
    config.validate().context("Configuration validation failed")?;

    tracing::info!("Starting AutoDinar Storefront");
    tracing::info!("Environment: {}", config.app.env);
    tracing::info!("Order store: {}", config.storage.orders_path.display());
    tracing::info!("Server binding to: {}", config.server.bind_address());

    // Wire services
    let order_store = Arc::new(JsonFileStore::new(config.storage.orders_path.clone()));
    let order_service = Arc::new(OrderService::new(order_store));

    let recommender = Arc::new(PromptFlowClient::new(
        config.recommender.base_url.clone(),
        config.recommender.api_key.clone(),
    ));
    let recommendation_service = Arc::new(RecommendationService::new(
        recommender,
        order_service.clone(),
    ));

    // Start HTTP server
    let bind_address = config.server.bind_address();
    let server = HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .wrap(RequestId)
            .wrap(Cors::permissive())
            .app_data(web::Data::from(order_service.clone()))
            .app_data(web::Data::from(recommendation_service.clone()))
            .configure(orders::controllers::configure)
            .configure(catalog::controllers::configure)
            .configure(recommendations::controllers::configure)
            .configure(health::configure)
    })
    .workers(config.server.workers)
    .bind(&bind_address)?
    .run();

    tracing::info!("Server started at http://{}", bind_address);

    server.await.context("Server terminated unexpectedly")
}
