use std::str::FromStr;

use axum::http::HeaderValue;

use crate::services::response::ServiceError;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum StoreBackend {
	Postgres,
	Memory,
}

impl FromStr for StoreBackend {
	type Err = ServiceError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s.trim().to_ascii_lowercase().as_str() {
			"postgres" => Ok(Self::Postgres),
			"memory" => Ok(Self::Memory),
			other => Err(ServiceError::Config(format!("unknown STORE_BACKEND `{other}`"))),
		}
	}
}

#[derive(Clone, Debug)]
pub struct Config {
	/// Which events we want to log
	pub log_level: String,

	/// Address the server is listening on
	pub server_ip_port: String,
	pub store_backend: StoreBackend,
	pub database_url: Option<String>,
	pub database_max_connections: u32,
	pub allow_origins: Vec<HeaderValue>,

	pub login_url: String,
	pub logout_url: String,
	pub identity_header: String,
	pub email_header: String,
}

impl Config {
	pub fn new() -> Result<Config, ServiceError> {
		dotenv::dotenv().ok();
		Self::from_lookup(|key| std::env::var(key).ok())
	}

	pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Config, ServiceError> {
		let var = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

		let log_level = var("LOG_LEVEL", "info");
		let server_ip_port = var("SERVER_IP_PORT", "0.0.0.0:80");
		let store_backend = var("STORE_BACKEND", "postgres").parse::<StoreBackend>()?;
		let database_url = lookup("DATABASE_URL");
		if store_backend == StoreBackend::Postgres && database_url.is_none() {
			return Err(ServiceError::Config("DATABASE_URL must be set".to_string()));
		}
		let database_max_connections = var("DATABASE_MAX_CONNECTIONS", "30")
			.parse::<u32>()
			.map_err(|err| ServiceError::Config(format!("DATABASE_MAX_CONNECTIONS: {err}")))?;
		let allow_origins = var("ALLOW_ORIGINS", "http://localhost:3000")
			.split(',')
			.map(str::trim)
			.filter(|origin| !origin.is_empty())
			.map(|origin| origin.parse::<HeaderValue>().map_err(|_| ServiceError::Config(format!("invalid origin `{origin}`"))))
			.collect::<Result<Vec<_>, _>>()?;

		Ok(Config {
			log_level,
			server_ip_port,
			store_backend,
			database_url,
			database_max_connections,
			allow_origins,
			login_url: var("LOGIN_URL", "/_auth/login"),
			logout_url: var("LOGOUT_URL", "/_auth/logout"),
			identity_header: var("IDENTITY_HEADER", "x-auth-user-id"),
			email_header: var("EMAIL_HEADER", "x-auth-user-email"),
		})
	}
}
