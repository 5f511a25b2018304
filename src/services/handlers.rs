use askama::Template;

use crate::{
	adapters::{
		identity::IdentityProvider,
		repositories::{GreetingQuery, GreetingStore},
	},
	domain::{
		flow::{FlowStep, FLOW_PLACEHOLDER},
		guestbook::{entity::Greeting, GuestbookKey, LISTING_LIMIT},
		identity::CurrentUser,
	},
};

use super::{
	pages::{render_flow_page, GreetingView, IndexPage},
	response::{ServiceError, ServiceResponse},
};

pub struct GuestbookHandler;
impl GuestbookHandler {
	/// Renders the newest greetings of the default guestbook along with a
	/// login or logout link for the visitor.
	pub async fn list_greetings(
		store: &dyn GreetingStore,
		identity: &dyn IdentityProvider,
		current_user: &CurrentUser,
		request_uri: &str,
	) -> Result<ServiceResponse, ServiceError> {
		let guestbook = GuestbookKey::default();
		let greetings = store.query(&GreetingQuery::newest(guestbook.clone(), LISTING_LIMIT)).await?;

		let visitor = current_user.identity();
		let (url, url_linktext) = match visitor {
			Some(_) => (identity.logout_url(request_uri), "Logout"),
			None => (identity.login_url(request_uri), "Login"),
		};

		let page = IndexPage {
			user: visitor.cloned(),
			greetings: greetings.iter().map(|greeting| GreetingView::from_greeting(greeting, visitor)).collect(),
			guestbook_name: guestbook.url_escaped(),
			url,
			url_linktext,
		};
		Ok(ServiceResponse::Page(page.render()?))
	}

	/// Stores a signed greeting and sends the visitor back to the listing.
	pub async fn sign(
		store: &dyn GreetingStore,
		current_user: &CurrentUser,
		content: String,
	) -> Result<ServiceResponse, ServiceError> {
		let guestbook = GuestbookKey::default();
		let greeting = Greeting::signed(guestbook.clone(), current_user.identity(), content);
		let id = store.put(&greeting).await?;
		tracing::debug!("Signed guestbook {} with greeting {}", guestbook, id);

		Ok(ServiceResponse::Redirect(format!("/?{}", guestbook.url_escaped())))
	}

	/// Serves one flow step. Steps that carry a phase record a new greeting
	/// first; nothing links it to greetings from earlier steps.
	pub async fn run_flow_step(
		store: &dyn GreetingStore,
		current_user: &CurrentUser,
		flow_step: &FlowStep,
	) -> Result<ServiceResponse, ServiceError> {
		if let Some(status) = flow_step.status() {
			let greeting = Greeting::status_marker(GuestbookKey::default(), current_user.identity(), status.to_string());
			let id = store.put(&greeting).await?;
			tracing::debug!("Recorded {} as greeting {}", status, id);
		}

		let body = render_flow_page(flow_step.flow, flow_step.step, FLOW_PLACEHOLDER)?;
		Ok(ServiceResponse::Page(body))
	}
}
