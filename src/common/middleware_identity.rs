use std::convert::Infallible;

use axum::extract::{FromRequestParts, Request, State};
use axum::http::request::Parts;
use axum::middleware::Next;
use axum::response::Response;

use crate::dependencies::AppState;
use crate::domain::identity::CurrentUser;

/// Resolves the visitor through the identity provider and stores the result
/// in the request extensions for handlers to pick up.
pub async fn resolve_current_user(
	State(state): State<AppState>,
	mut request: Request,
	next: Next,
) -> Response {
	let current_user = CurrentUser(state.identity.current_identity(request.headers()));
	request.extensions_mut().insert(current_user);

	next.run(request).await
}

// Requests that skipped the middleware are anonymous.
impl<S> FromRequestParts<S> for CurrentUser
where
	S: Send + Sync,
{
	type Rejection = Infallible;

	async fn from_request_parts(
		parts: &mut Parts,
		_state: &S,
	) -> Result<Self, Self::Rejection> {
		Ok(parts.extensions.get::<CurrentUser>().cloned().unwrap_or_default())
	}
}
