pub mod routers;

use guestbook::{config::Config, services::response::ServiceError, AppState};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), ServiceError> {
	let config = Config::new()?;

	// ! Tracing
	let default_directive = format!(
		"guestbook={level},web={level},tower_http={level},axum::rejection=trace",
		level = config.log_level
	);
	tracing_subscriber::registry()
		.with(tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| default_directive.into()))
		.with(tracing_subscriber::fmt::layer())
		.init();

	// ! Connection
	tracing::info!("Connections Are Being Pooled...");
	let state = AppState::from_config(&config).await?;

	let app = routers::web_app(state, &config);

	tracing::info!("Start Web Server on {}...", config.server_ip_port);
	let listener = tokio::net::TcpListener::bind(config.server_ip_port.as_str()).await?;
	axum::serve(listener, app).await?;
	Ok(())
}
