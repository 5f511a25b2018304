//! Askama templates for every page the service renders.
//!
//! Templates live under `templates/` and are compiled into the binary. HTML
//! escaping is on for all of them, which is the only thing standing between
//! visitor-supplied content and the page.

use askama::Template;

use crate::domain::flow::{Flow, Step};
use crate::domain::guestbook::entity::Greeting;
use crate::domain::identity::Identity;

/// One entry on the listing page.
pub struct GreetingView {
	pub author_email: Option<String>,
	/// Written by the visitor looking at the page.
	pub is_own: bool,
	pub content: String,
}

impl GreetingView {
	pub fn from_greeting(
		greeting: &Greeting,
		visitor: Option<&Identity>,
	) -> Self {
		Self {
			author_email: greeting.author.as_ref().map(|author| author.email.clone()),
			is_own: visitor.is_some_and(|visitor| greeting.is_authored_by(visitor)),
			content: greeting.content.clone().unwrap_or_default(),
		}
	}
}

#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexPage {
	pub user: Option<Identity>,
	pub greetings: Vec<GreetingView>,
	pub guestbook_name: String,
	pub url: String,
	pub url_linktext: &'static str,
}

#[derive(Template)]
#[template(path = "flow/ctrl.html")]
struct CtrlIntroPage<'a> {
	placeholder: &'a str,
}

#[derive(Template)]
#[template(path = "flow/ctrl_almost_done.html")]
struct CtrlAlmostDonePage<'a> {
	placeholder: &'a str,
}

#[derive(Template)]
#[template(path = "flow/ctrl_done.html")]
struct CtrlDonePage<'a> {
	placeholder: &'a str,
}

#[derive(Template)]
#[template(path = "flow/ctrl_cheat.html")]
struct CtrlCheatPage<'a> {
	placeholder: &'a str,
}

#[derive(Template)]
#[template(path = "flow/ctrl_cheat_done.html")]
struct CtrlCheatDonePage<'a> {
	placeholder: &'a str,
}

#[derive(Template)]
#[template(path = "flow/exp.html")]
struct ExpIntroPage<'a> {
	placeholder: &'a str,
}

#[derive(Template)]
#[template(path = "flow/exp_almost_done.html")]
struct ExpAlmostDonePage<'a> {
	placeholder: &'a str,
}

#[derive(Template)]
#[template(path = "flow/exp_done.html")]
struct ExpDonePage<'a> {
	placeholder: &'a str,
}

#[derive(Template)]
#[template(path = "flow/exp_cheat.html")]
struct ExpCheatPage<'a> {
	placeholder: &'a str,
}

#[derive(Template)]
#[template(path = "flow/exp_cheat_done.html")]
struct ExpCheatDonePage<'a> {
	placeholder: &'a str,
}

/// Renders the template bound to a flow step.
pub fn render_flow_page(
	flow: Flow,
	step: Step,
	placeholder: &str,
) -> Result<String, askama::Error> {
	match (flow, step) {
		(Flow::Ctrl, Step::Intro) => CtrlIntroPage { placeholder }.render(),
		(Flow::Ctrl, Step::AlmostDone) => CtrlAlmostDonePage { placeholder }.render(),
		(Flow::Ctrl, Step::Done) => CtrlDonePage { placeholder }.render(),
		(Flow::Ctrl, Step::Cheat) => CtrlCheatPage { placeholder }.render(),
		(Flow::Ctrl, Step::CheatDone) => CtrlCheatDonePage { placeholder }.render(),
		(Flow::Exp, Step::Intro) => ExpIntroPage { placeholder }.render(),
		(Flow::Exp, Step::AlmostDone) => ExpAlmostDonePage { placeholder }.render(),
		(Flow::Exp, Step::Done) => ExpDonePage { placeholder }.render(),
		(Flow::Exp, Step::Cheat) => ExpCheatPage { placeholder }.render(),
		(Flow::Exp, Step::CheatDone) => ExpCheatDonePage { placeholder }.render(),
	}
}
