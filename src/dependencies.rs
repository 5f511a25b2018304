use std::sync::Arc;

use crate::adapters::identity::{HeaderIdentityProvider, IdentityProvider};
use crate::adapters::repositories::{GreetingStore, InMemoryGreetingStore, PgGreetingStore};
use crate::config::{Config, StoreBackend};
use crate::database::{connection_pool, migrate};
use crate::services::response::ServiceError;

/// Collaborators injected into every handler.
#[derive(Clone)]
pub struct AppState {
	pub store: Arc<dyn GreetingStore>,
	pub identity: Arc<dyn IdentityProvider>,
}

impl AppState {
	pub fn new(
		store: Arc<dyn GreetingStore>,
		identity: Arc<dyn IdentityProvider>,
	) -> Self {
		Self { store, identity }
	}

	/// Wires the configured store and identity provider.
	pub async fn from_config(config: &Config) -> Result<Self, ServiceError> {
		let identity = Arc::new(HeaderIdentityProvider::from_config(config)?);
		Ok(Self::new(greeting_store(config).await?, identity))
	}
}

pub async fn greeting_store(config: &Config) -> Result<Arc<dyn GreetingStore>, ServiceError> {
	match config.store_backend {
		StoreBackend::Postgres => {
			let pool = connection_pool(config).await?;
			migrate(&pool).await?;
			tracing::info!("Using postgres greeting store");
			Ok(Arc::new(PgGreetingStore::new(pool)))
		}
		StoreBackend::Memory => {
			tracing::warn!("Using in-memory greeting store; entries are lost on restart");
			Ok(Arc::new(InMemoryGreetingStore::new()))
		}
	}
}
