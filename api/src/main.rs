//! AGS Windows & Doors API Server
//!
//! Item catalog and product system configurator for a windows-and-doors
//! manufacturer, consumed by the admin portal.
//! Uses hexagonal (ports & adapters) architecture for clean separation of concerns.

use std::sync::Arc;

use axum::{
    routing::{get, post, put},
    Json, Router,
};
use serde::Serialize;
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod adapters;
mod app;
mod config;
mod domain;
mod error;
mod handlers;
mod seed;

#[cfg(test)]
mod test_utils;


use adapters::{
    InMemoryComponentRepository, InMemoryItemRepository, InMemorySystemRepository,
    TracingEventPublisher,
};
use app::{CatalogService, ComponentService, SystemService};
use config::Config;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub catalog_service: Arc<CatalogService<InMemoryItemRepository, TracingEventPublisher>>,
    pub system_service: Arc<SystemService<InMemorySystemRepository>>,
    pub component_service: Arc<
        ComponentService<
            InMemorySystemRepository,
            InMemoryComponentRepository,
            InMemoryItemRepository,
            TracingEventPublisher,
        >,
    >,
}

impl AppState {
    /// Wire the services over fresh in-memory repositories
    pub async fn in_memory(seed_demo_data: bool) -> Result<Self, error::DomainError> {
        let item_repo = Arc::new(InMemoryItemRepository::new());
        let system_repo = Arc::new(InMemorySystemRepository::new());
        let component_repo = Arc::new(InMemoryComponentRepository::new());
        let events = Arc::new(TracingEventPublisher);

        if seed_demo_data {
            seed::seed_demo_data(item_repo.as_ref(), system_repo.as_ref()).await?;
        }

        Ok(Self {
            catalog_service: Arc::new(CatalogService::new(item_repo.clone(), events.clone())),
            system_service: Arc::new(SystemService::new(system_repo.clone())),
            component_service: Arc::new(ComponentService::new(
                system_repo,
                component_repo,
                item_repo,
                events,
            )),
        })
    }
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Build the router with all routes and middleware
pub fn app_router(state: AppState) -> Router {
    let api = Router::new()
        // Item catalog
        .route(
            "/items",
            get(handlers::list_items).post(handlers::create_item),
        )
        .route(
            "/items/:code",
            get(handlers::get_item)
                .put(handlers::update_item)
                .delete(handlers::delete_item),
        )
        .route("/items/:code/activate", post(handlers::activate_item))
        .route("/items/:code/deactivate", post(handlers::deactivate_item))
        // Systems
        .route(
            "/systems",
            get(handlers::list_systems).post(handlers::create_system),
        )
        .route(
            "/systems/:code",
            get(handlers::get_system).put(handlers::update_system),
        )
        // Components
        .route(
            "/systems/:code/components",
            get(handlers::list_components).post(handlers::add_component),
        )
        .route(
            "/components/:id",
            get(handlers::get_component)
                .put(handlers::update_component)
                .delete(handlers::remove_component),
        )
        .route("/components/:id/test", post(handlers::test_component))
        // Orders and calculations (placeholders)
        .route(
            "/orders",
            get(handlers::list_orders).post(handlers::submit_order),
        )
        .route("/orders/:id", get(handlers::get_order))
        .route("/orders/:id/status", put(handlers::update_order_status))
        .route("/calculate-bom", post(handlers::calculate_bom))
        .route("/validate-frame", post(handlers::validate_frame));

    Router::new()
        .route("/health", get(health))
        .nest("/api", api)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(
                    CorsLayer::new()
                        .allow_origin(Any)
                        .allow_methods(Any)
                        .allow_headers(Any),
                ),
        )
        .with_state(state)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,ags_api=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting AGS API...");

    // Load configuration
    let config = Config::from_env();

    let state = AppState::in_memory(config.seed_demo_data).await?;
    if config.seed_demo_data {
        tracing::info!("Demo data loaded");
    }

    let app = app_router(state);

    // Start server
    let addr = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Listening on {}", addr);

    axum::serve(listener, app).await?;
    Ok(())
}
