pub(crate) mod greeting_repository;
pub(crate) mod memory;

pub use greeting_repository::PgGreetingStore;
pub use memory::InMemoryGreetingStore;

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::guestbook::{entity::Greeting, GuestbookKey};
use crate::services::response::ServiceError;

/// Sort direction on `Greeting::date`.
///
/// Handlers only list newest first; `OldestFirst` completes the store's
/// order-by contract.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Order {
	#[default]
	NewestFirst,
	OldestFirst,
}

#[derive(Clone, PartialEq, Eq, Debug)]
pub struct GreetingQuery {
	pub guestbook: GuestbookKey,
	pub order: Order,
	pub limit: i64,
}

impl GreetingQuery {
	pub fn newest(
		guestbook: GuestbookKey,
		limit: i64,
	) -> Self {
		Self {
			guestbook,
			order: Order::NewestFirst,
			limit,
		}
	}
}

/// Persistence for greetings, partitioned by guestbook.
///
/// Queries are consistent within one guestbook only. Writers sharing a
/// guestbook should keep their aggregate rate near one write per second.
#[async_trait]
pub trait GreetingStore: Send + Sync {
	async fn put(
		&self,
		greeting: &Greeting,
	) -> Result<Uuid, ServiceError>;

	async fn query(
		&self,
		query: &GreetingQuery,
	) -> Result<Vec<Greeting>, ServiceError>;
}
