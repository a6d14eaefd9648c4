use std::sync::Arc;

use tokio::net::TcpListener;

mod adapters;
mod application;
mod config;
mod logging;
mod models;
mod routes;

use adapters::InMemoryPersonaRepository;
use application::PersonaService;
use config::{ApiVariant, ServerConfig};

/// Application service with the concrete repository implementation
pub type AppPersonaService = PersonaService<InMemoryPersonaRepository>;

/// Application state shared across all routes
#[derive(Clone)]
pub struct AppState {
    pub persona_service: Arc<AppPersonaService>,
    pub variant: ApiVariant,
}

impl AppState {
    /// State over a fresh registry holding the seed records
    pub fn seeded(variant: ApiVariant) -> Self {
        let repo = Arc::new(InMemoryPersonaRepository::seeded());
        Self {
            persona_service: Arc::new(PersonaService::new(repo)),
            variant,
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    logging::init_logging();

    tracing::info!("📇 Padron API initializing...");

    let config = ServerConfig::from_env()?;
    let state = AppState::seeded(config.variant);

    tracing::info!(
        "🗂️  Registry seeded with {} personas",
        state.persona_service.count().await?
    );
    if config.variant.has_filters() {
        tracing::info!("🔎 Extended variant: filter endpoints enabled");
    } else {
        tracing::info!("Basic variant: CRUD endpoints only");
    }

    let router = routes::build_router(state);

    let listener = TcpListener::bind(config.bind_addr()).await?;

    tracing::info!("📚 Swagger UI: /swagger-ui");
    tracing::info!("✅ Padron API listening on {}", listener.local_addr()?);

    axum::serve(listener, router).await?;

    Ok(())
}
