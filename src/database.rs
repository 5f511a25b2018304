use sqlx::postgres::{PgPool, PgPoolOptions};

use crate::config::Config;
use crate::services::response::ServiceError;

pub async fn connection_pool(config: &Config) -> Result<PgPool, ServiceError> {
	let url = config
		.database_url
		.as_deref()
		.ok_or_else(|| ServiceError::Config("DATABASE_URL must be set".to_string()))?;

	PgPoolOptions::new()
		.max_connections(config.database_max_connections)
		.connect(url)
		.await
		.map_err(|err| {
			tracing::error!("Failed to connect to database: {:?}", err);
			ServiceError::Database(err)
		})
}

/// Applies the embedded schema migrations.
pub async fn migrate(pool: &PgPool) -> Result<(), ServiceError> {
	sqlx::migrate!("./migrations").run(pool).await?;
	Ok(())
}
