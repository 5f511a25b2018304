use crate::{
	dependencies::AppState,
	domain::{flow::FlowStep, identity::CurrentUser},
	services::{
		handlers::GuestbookHandler,
		response::{ServiceError, ServiceResponse},
	},
};

pub async fn show_step(
	state: AppState,
	current_user: CurrentUser,
	flow_step: &'static FlowStep,
) -> Result<ServiceResponse, ServiceError> {
	GuestbookHandler::run_flow_step(state.store.as_ref(), &current_user, flow_step).await
}
