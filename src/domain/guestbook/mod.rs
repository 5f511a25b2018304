use std::fmt::Display;

use serde::{Deserialize, Serialize};

pub mod entity;

/// Guestbook every handler reads from and writes to.
pub const DEFAULT_GUESTBOOK: &str = "default";

/// Literal stored in `consent` when a visitor signs the guestbook.
pub const CONSENT_AGREED: &str = "True";

/// Number of entries shown on the listing page.
pub const LISTING_LIMIT: i64 = 10;

/// Partition key of a greeting.
///
/// Reads within one guestbook observe a consistent, ordered view. The backing
/// store only guarantees that per guestbook, so sustained writes to a single
/// guestbook should stay around one per second. Nothing here throttles them.
#[derive(Clone, PartialEq, Eq, Debug, Hash, Serialize, Deserialize)]
pub struct GuestbookKey(String);

impl GuestbookKey {
	pub fn new(name: impl Into<String>) -> Self {
		Self(name.into())
	}

	pub fn as_str(&self) -> &str {
		&self.0
	}

	/// Name escaped for use in a query string, spaces as `+`.
	pub fn url_escaped(&self) -> String {
		urlencoding::encode(&self.0).replace("%20", "+")
	}
}

impl Default for GuestbookKey {
	fn default() -> Self {
		Self::new(DEFAULT_GUESTBOOK)
	}
}

impl Display for GuestbookKey {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}", self.0)
	}
}

#[test]
fn test_guestbook_key_escaping() {
	assert_eq!(GuestbookKey::default().url_escaped(), "default");
	assert_eq!(GuestbookKey::new("my book&co").url_escaped(), "my+book%26co");
	assert_eq!(GuestbookKey::new("a+b").url_escaped(), "a%2Bb");
}
