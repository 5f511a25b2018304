use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{GuestbookKey, CONSENT_AGREED};
use crate::domain::identity::Identity;

/// Author embedded in a greeting. Not addressable on its own.
#[derive(Clone, PartialEq, Eq, Debug, Default, Hash, Serialize, Deserialize)]
pub struct Author {
	pub identity: String,
	pub email: String,
}

impl From<&Identity> for Author {
	fn from(value: &Identity) -> Self {
		Self {
			identity: value.id.clone(),
			email: value.email.clone(),
		}
	}
}

#[derive(Clone, PartialEq, Eq, Debug, Hash, Serialize, Deserialize)]
pub struct Greeting {
	pub id: Uuid,
	pub guestbook: GuestbookKey,
	pub author: Option<Author>,
	pub content: Option<String>,
	pub consent: Option<String>,
	pub date: DateTime<Utc>,
	// Never written by any handler.
	pub version: Option<String>,
	pub status: Option<String>,
}

impl Greeting {
	/// Blank greeting in `guestbook`, dated now.
	pub fn new(guestbook: GuestbookKey) -> Self {
		Self {
			id: Uuid::new_v4(),
			guestbook,
			author: None,
			content: None,
			consent: None,
			date: Utc::now(),
			version: None,
			status: None,
		}
	}

	pub fn authored_by(
		mut self,
		identity: Option<&Identity>,
	) -> Self {
		self.author = identity.map(Author::from);
		self
	}

	/// Entry created by signing the guestbook.
	pub fn signed(
		guestbook: GuestbookKey,
		identity: Option<&Identity>,
		content: String,
	) -> Self {
		let mut greeting = Self::new(guestbook).authored_by(identity);
		greeting.content = Some(content);
		greeting.consent = Some(CONSENT_AGREED.to_string());
		greeting
	}

	/// Entry recording that a visitor reached a flow step.
	pub fn status_marker(
		guestbook: GuestbookKey,
		identity: Option<&Identity>,
		status: String,
	) -> Self {
		let mut greeting = Self::new(guestbook).authored_by(identity);
		greeting.status = Some(status);
		greeting
	}

	pub fn is_authored_by(
		&self,
		identity: &Identity,
	) -> bool {
		self.author.as_ref().is_some_and(|author| author.identity == identity.id)
	}
}
