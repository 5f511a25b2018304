use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, HeaderName, Request, StatusCode};
use axum::Router;
use guestbook::{
	adapters::{identity::HeaderIdentityProvider, repositories::InMemoryGreetingStore},
	create_routes,
	domain::{
		flow::FLOW_STEPS,
		guestbook::{GuestbookKey, CONSENT_AGREED},
	},
	AppState,
};
use http_body_util::BodyExt;
use tower::ServiceExt;

fn test_app() -> (InMemoryGreetingStore, Router) {
	let store = InMemoryGreetingStore::new();
	let identity = HeaderIdentityProvider::new(
		HeaderName::from_static("x-auth-user-id"),
		HeaderName::from_static("x-auth-user-email"),
		"/_auth/login",
		"/_auth/logout",
	);
	let state = AppState::new(Arc::new(store.clone()), Arc::new(identity));
	(store, create_routes(state))
}

fn get(uri: &str) -> Request<Body> {
	Request::builder().method("GET").uri(uri).body(Body::empty()).unwrap()
}

fn get_as(
	uri: &str,
	user_id: &str,
	email: &str,
) -> Request<Body> {
	Request::builder()
		.method("GET")
		.uri(uri)
		.header("x-auth-user-id", user_id)
		.header("x-auth-user-email", email)
		.body(Body::empty())
		.unwrap()
}

fn sign(content: &str) -> Request<Body> {
	Request::builder()
		.method("POST")
		.uri("/sign")
		.header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
		.body(Body::from(format!("content={}", urlencoding::encode(content))))
		.unwrap()
}

async fn text_body(resp: axum::response::Response) -> (StatusCode, String) {
	let status = resp.status();
	let bytes = resp.into_body().collect().await.expect("collect body").to_bytes();
	(status, String::from_utf8(bytes.to_vec()).expect("utf-8 body"))
}

#[tokio::test]
async fn sign_redirects_to_listing() {
	let (store, app) = test_app();

	let resp = app.oneshot(sign("hello")).await.unwrap();

	assert_eq!(resp.status(), StatusCode::SEE_OTHER);
	assert_eq!(resp.headers()[header::LOCATION], "/?default");
	assert_eq!(store.all(&GuestbookKey::default()).await.len(), 1);
}

#[tokio::test]
async fn sign_without_form_body_stores_empty_content() {
	let (store, app) = test_app();

	let resp = app
		.oneshot(Request::builder().method("POST").uri("/sign").body(Body::empty()).unwrap())
		.await
		.unwrap();

	assert_eq!(resp.status(), StatusCode::SEE_OTHER);
	let greetings = store.all(&GuestbookKey::default()).await;
	assert_eq!(greetings.len(), 1);
	assert_eq!(greetings[0].content.as_deref(), Some(""));
	assert_eq!(greetings[0].consent.as_deref(), Some(CONSENT_AGREED));
}

#[tokio::test]
async fn sign_with_form_missing_content_stores_empty_content() {
	let (store, app) = test_app();
	let request = Request::builder()
		.method("POST")
		.uri("/sign")
		.header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
		.body(Body::from("other=1"))
		.unwrap();

	let resp = app.oneshot(request).await.unwrap();

	assert_eq!(resp.status(), StatusCode::SEE_OTHER);
	let greetings = store.all(&GuestbookKey::default()).await;
	assert_eq!(greetings[0].content.as_deref(), Some(""));
}

#[tokio::test]
async fn sign_keeps_first_content_value() {
	let (store, app) = test_app();
	let request = Request::builder()
		.method("POST")
		.uri("/sign")
		.header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
		.body(Body::from("content=first&content=second"))
		.unwrap();

	let resp = app.oneshot(request).await.unwrap();

	assert_eq!(resp.status(), StatusCode::SEE_OTHER);
	let greetings = store.all(&GuestbookKey::default()).await;
	assert_eq!(greetings.len(), 1);
	assert_eq!(greetings[0].content.as_deref(), Some("first"));
}

#[tokio::test]
async fn sign_with_oversized_body_is_rejected() {
	let (store, app) = test_app();
	let body = format!("content={}", "a".repeat(3 * 1024 * 1024));
	let request = Request::builder()
		.method("POST")
		.uri("/sign")
		.header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
		.body(Body::from(body))
		.unwrap();

	let resp = app.oneshot(request).await.unwrap();

	assert_eq!(resp.status(), StatusCode::PAYLOAD_TOO_LARGE);
	assert!(store.all(&GuestbookKey::default()).await.is_empty());
}

#[tokio::test]
async fn sign_while_identified_embeds_author() {
	let (store, app) = test_app();
	let request = Request::builder()
		.method("POST")
		.uri("/sign")
		.header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
		.header("x-auth-user-id", "u7")
		.header("x-auth-user-email", "u7@example.com")
		.body(Body::from("content=hi"))
		.unwrap();

	app.oneshot(request).await.unwrap();

	let greetings = store.all(&GuestbookKey::default()).await;
	let author = greetings[0].author.clone().expect("author");
	assert_eq!(author.identity, "u7");
	assert_eq!(author.email, "u7@example.com");
}

#[tokio::test]
async fn listing_shows_at_most_ten_newest_first() {
	let (_store, app) = test_app();
	for n in 0..13 {
		let resp = app.clone().oneshot(sign(&format!("entry-{n:02}"))).await.unwrap();
		assert_eq!(resp.status(), StatusCode::SEE_OTHER);
	}

	let (status, html) = text_body(app.oneshot(get("/")).await.unwrap()).await;

	assert_eq!(status, StatusCode::OK);
	let positions: Vec<usize> = (3..13)
		.rev()
		.map(|n| html.find(&format!("entry-{n:02}")).unwrap_or_else(|| panic!("entry-{n:02} missing")))
		.collect();
	assert!(positions.windows(2).all(|pair| pair[0] < pair[1]));
	for n in 0..3 {
		assert!(!html.contains(&format!("entry-{n:02}")));
	}
}

#[tokio::test]
async fn listing_escapes_content() {
	let (_store, app) = test_app();
	app.clone().oneshot(sign("<b>")).await.unwrap();

	let (_, html) = text_body(app.oneshot(get("/")).await.unwrap()).await;

	assert!(html.contains("<blockquote>&lt;b&gt;</blockquote>"));
}

#[tokio::test]
async fn listing_link_depends_on_identity() {
	let (_store, app) = test_app();

	let (_, anonymous) = text_body(app.clone().oneshot(get("/")).await.unwrap()).await;
	assert!(anonymous.contains(">Login</a>"));
	assert!(!anonymous.contains(">Logout</a>"));

	let (_, signed_in) = text_body(app.oneshot(get_as("/", "u1", "u1@example.com")).await.unwrap()).await;
	assert!(signed_in.contains(">Logout</a>"));
	assert!(signed_in.contains("u1@example.com"));
}

#[tokio::test]
async fn every_flow_path_is_served() {
	for flow_step in FLOW_STEPS.iter() {
		let (store, app) = test_app();

		let (status, html) = text_body(app.oneshot(get(flow_step.path)).await.unwrap()).await;

		assert_eq!(status, StatusCode::OK, "{}", flow_step.path);
		assert!(html.contains("data-placeholder=\"test\""), "{}", flow_step.path);
		let greetings = store.all(&GuestbookKey::default()).await;
		assert_eq!(greetings.len(), usize::from(flow_step.persists()), "{}", flow_step.path);
		assert_eq!(
			greetings.first().and_then(|g| g.status.clone()),
			flow_step.status().map(|tag| tag.to_string())
		);
	}
}

#[tokio::test]
async fn unknown_path_is_not_found() {
	let (store, app) = test_app();

	let resp = app.oneshot(get("/827sf46")).await.unwrap();

	assert_eq!(resp.status(), StatusCode::NOT_FOUND);
	assert!(store.all(&GuestbookKey::default()).await.is_empty());
}

#[tokio::test]
async fn sign_then_list_then_enter_ctrl_flow() {
	let (store, app) = test_app();

	// Anonymous visitor signs.
	let resp = app.clone().oneshot(sign("hello")).await.unwrap();
	assert_eq!(resp.status(), StatusCode::SEE_OTHER);
	{
		let greetings = store.all(&GuestbookKey::default()).await;
		assert_eq!(greetings.len(), 1);
		assert_eq!(greetings[0].content.as_deref(), Some("hello"));
		assert_eq!(greetings[0].consent.as_deref(), Some(CONSENT_AGREED));
		assert_eq!(greetings[0].author, None);
	}

	// Listing shows it as the newest entry.
	let (status, html) = text_body(app.clone().oneshot(get("/")).await.unwrap()).await;
	assert_eq!(status, StatusCode::OK);
	assert!(html.contains("An anonymous person wrote:"));
	assert!(html.contains("<blockquote>hello</blockquote>"));

	// Identified visitor opens the Ctrl intro.
	let resp = app.oneshot(get_as("/827sf45", "u1", "u1@example.com")).await.unwrap();
	assert_eq!(resp.status(), StatusCode::OK);

	let greetings = store.all(&GuestbookKey::default()).await;
	assert_eq!(greetings.len(), 2);
	let marker = &greetings[1];
	assert_eq!(marker.status.as_deref(), Some("V1:INC"));
	assert_eq!(marker.author.as_ref().map(|a| a.identity.as_str()), Some("u1"));
	assert_eq!(marker.consent, None);
}
