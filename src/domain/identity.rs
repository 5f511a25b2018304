use serde::{Deserialize, Serialize};

/// Visitor identity as reported by the identity provider.
#[derive(Clone, PartialEq, Eq, Debug, Default, Hash, Serialize, Deserialize)]
pub struct Identity {
	pub id: String,
	pub email: String,
}

impl Identity {
	pub fn new(
		id: impl Into<String>,
		email: impl Into<String>,
	) -> Self {
		Self {
			id: id.into(),
			email: email.into(),
		}
	}
}

/// Identity of whoever sent the current request, if anyone signed in.
#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub struct CurrentUser(pub Option<Identity>);

impl CurrentUser {
	pub fn anonymous() -> Self {
		Self(None)
	}

	pub fn identity(&self) -> Option<&Identity> {
		self.0.as_ref()
	}
}

impl From<Identity> for CurrentUser {
	fn from(value: Identity) -> Self {
		Self(Some(value))
	}
}
