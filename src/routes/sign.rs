use axum::{
	extract::{rejection::FormRejection, State},
	response::{IntoResponse, Response},
	Form,
};

use crate::{dependencies::AppState, domain::identity::CurrentUser, services::handlers::GuestbookHandler};

/// First value of `field`, or empty when the field is absent.
fn first_value(
	fields: Vec<(String, String)>,
	field: &str,
) -> String {
	fields.into_iter().find(|(key, _)| key == field).map(|(_, value)| value).unwrap_or_default()
}

// A request without a form content type signs with empty content. A body that
// cannot be read or decoded keeps its rejection status.
pub async fn sign(
	State(state): State<AppState>,
	current_user: CurrentUser,
	form: Result<Form<Vec<(String, String)>>, FormRejection>,
) -> Response {
	let fields = match form {
		Ok(Form(fields)) => fields,
		Err(FormRejection::InvalidFormContentType(rejection)) => {
			tracing::debug!("Sign request without a form body: {}", rejection);
			Vec::new()
		}
		Err(rejection) => {
			tracing::warn!("Rejected sign request: {}", rejection);
			return rejection.into_response();
		}
	};

	GuestbookHandler::sign(state.store.as_ref(), &current_user, first_value(fields, "content"))
		.await
		.into_response()
}
