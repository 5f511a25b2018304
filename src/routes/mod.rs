mod flow;
mod home;
mod sign;

use axum::{
	extract::State,
	middleware,
	routing::{get, post},
	Router,
};

use crate::{
	common::middleware_identity::resolve_current_user,
	dependencies::AppState,
	domain::{flow::FLOW_STEPS, identity::CurrentUser},
};

pub fn create_routes(state: AppState) -> Router {
	let mut router: Router<AppState> = Router::new().route("/", get(home::index)).route("/sign", post(sign::sign));

	for flow_step in FLOW_STEPS.iter() {
		router = router.route(
			flow_step.path,
			get(move |State(state): State<AppState>, current_user: CurrentUser| flow::show_step(state, current_user, flow_step)),
		);
	}

	router
		.layer(middleware::from_fn_with_state(state.clone(), resolve_current_user))
		.with_state(state)
}
