use axum::http::{HeaderMap, HeaderName};

use crate::config::Config;
use crate::domain::identity::Identity;
use crate::services::response::ServiceError;

/// Source of the visitor's identity and of the login/logout links.
pub trait IdentityProvider: Send + Sync {
	fn current_identity(
		&self,
		headers: &HeaderMap,
	) -> Option<Identity>;

	fn login_url(
		&self,
		return_uri: &str,
	) -> String;

	fn logout_url(
		&self,
		return_uri: &str,
	) -> String;
}

/// Trusts identity headers set by an authenticating reverse proxy.
///
/// Requests must only reach the service through that proxy, otherwise any
/// client can claim any identity.
#[derive(Clone, Debug)]
pub struct HeaderIdentityProvider {
	identity_header: HeaderName,
	email_header: HeaderName,
	login_url: String,
	logout_url: String,
}

impl HeaderIdentityProvider {
	pub fn new(
		identity_header: HeaderName,
		email_header: HeaderName,
		login_url: impl Into<String>,
		logout_url: impl Into<String>,
	) -> Self {
		Self {
			identity_header,
			email_header,
			login_url: login_url.into(),
			logout_url: logout_url.into(),
		}
	}

	pub fn from_config(config: &Config) -> Result<Self, ServiceError> {
		let header = |name: &str| {
			HeaderName::from_bytes(name.as_bytes()).map_err(|_| ServiceError::Config(format!("invalid header name `{name}`")))
		};
		Ok(Self::new(
			header(&config.identity_header)?,
			header(&config.email_header)?,
			config.login_url.clone(),
			config.logout_url.clone(),
		))
	}

	fn header_value<'a>(
		headers: &'a HeaderMap,
		name: &HeaderName,
	) -> Option<&'a str> {
		headers
			.get(name)
			.and_then(|value| value.to_str().ok())
			.map(str::trim)
			.filter(|value| !value.is_empty())
	}
}

fn with_continue(
	base: &str,
	return_uri: &str,
) -> String {
	let separator = if base.contains('?') { '&' } else { '?' };
	format!("{base}{separator}continue={}", urlencoding::encode(return_uri))
}

impl IdentityProvider for HeaderIdentityProvider {
	fn current_identity(
		&self,
		headers: &HeaderMap,
	) -> Option<Identity> {
		let id = Self::header_value(headers, &self.identity_header)?;
		let email = Self::header_value(headers, &self.email_header).unwrap_or_default();
		Some(Identity::new(id, email))
	}

	fn login_url(
		&self,
		return_uri: &str,
	) -> String {
		with_continue(&self.login_url, return_uri)
	}

	fn logout_url(
		&self,
		return_uri: &str,
	) -> String {
		with_continue(&self.logout_url, return_uri)
	}
}
