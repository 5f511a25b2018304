use axum::{extract::State, http::Uri};

use crate::{
	dependencies::AppState,
	domain::identity::CurrentUser,
	services::{
		handlers::GuestbookHandler,
		response::{ServiceError, ServiceResponse},
	},
};

pub async fn index(
	State(state): State<AppState>,
	current_user: CurrentUser,
	uri: Uri,
) -> Result<ServiceResponse, ServiceError> {
	GuestbookHandler::list_greetings(state.store.as_ref(), state.identity.as_ref(), &current_user, &uri.to_string()).await
}
