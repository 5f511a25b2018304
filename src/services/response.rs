use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Redirect, Response};
use thiserror::Error;

#[derive(Debug)]
pub enum ServiceResponse {
	/// Rendered HTML page.
	Page(String),
	/// `303 See Other` to the given location.
	Redirect(String),
}

impl IntoResponse for ServiceResponse {
	fn into_response(self) -> Response {
		match self {
			ServiceResponse::Page(body) => Html(body).into_response(),
			ServiceResponse::Redirect(location) => Redirect::to(&location).into_response(),
		}
	}
}

#[derive(Debug, Error)]
pub enum ServiceError {
	#[error("database error: {0}")]
	Database(#[from] sqlx::Error),

	#[error("migration error: {0}")]
	Migration(#[from] sqlx::migrate::MigrateError),

	#[error("template error: {0}")]
	Template(#[from] askama::Error),

	#[error("invalid configuration: {0}")]
	Config(String),

	#[error("io error: {0}")]
	Io(#[from] std::io::Error),
}

// Every failure surfaces as a bare 500; the cause only goes to the log.
impl IntoResponse for ServiceError {
	fn into_response(self) -> Response {
		tracing::error!("Request failed: {}", self);
		(StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error").into_response()
	}
}
