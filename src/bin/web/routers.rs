use axum::{http::Method, Router};
use guestbook::{config::Config, create_routes, AppState};
use tower_http::{
	cors::{AllowOrigin, CorsLayer},
	trace::TraceLayer,
};

/// Guestbook routes wrapped in the HTTP-level layers.
pub fn web_app(
	state: AppState,
	config: &Config,
) -> Router {
	create_routes(state)
		.layer(
			CorsLayer::new()
				.allow_origin(AllowOrigin::list(config.allow_origins.clone()))
				.allow_methods([Method::GET, Method::POST]),
		)
		.layer(TraceLayer::new_for_http())
}
