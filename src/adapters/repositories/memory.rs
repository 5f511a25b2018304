use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use super::{GreetingQuery, GreetingStore, Order};
use crate::domain::guestbook::{entity::Greeting, GuestbookKey};
use crate::services::response::ServiceError;

/// Process-local store. Entries vanish with the process.
#[derive(Clone, Default)]
pub struct InMemoryGreetingStore {
	books: Arc<RwLock<HashMap<GuestbookKey, Vec<Greeting>>>>,
}

impl InMemoryGreetingStore {
	pub fn new() -> Self {
		Self::default()
	}

	/// Every greeting of `guestbook` in insertion order.
	pub async fn all(
		&self,
		guestbook: &GuestbookKey,
	) -> Vec<Greeting> {
		self.books.read().await.get(guestbook).cloned().unwrap_or_default()
	}
}

#[async_trait]
impl GreetingStore for InMemoryGreetingStore {
	async fn put(
		&self,
		greeting: &Greeting,
	) -> Result<Uuid, ServiceError> {
		self.books
			.write()
			.await
			.entry(greeting.guestbook.clone())
			.or_default()
			.push(greeting.clone());
		Ok(greeting.id)
	}

	async fn query(
		&self,
		query: &GreetingQuery,
	) -> Result<Vec<Greeting>, ServiceError> {
		let books = self.books.read().await;
		let Some(entries) = books.get(&query.guestbook) else {
			return Ok(Vec::new());
		};

		// Sorts are stable, so equal dates fall back to insertion order.
		let mut greetings: Vec<Greeting> = match query.order {
			Order::NewestFirst => {
				let mut greetings: Vec<Greeting> = entries.iter().rev().cloned().collect();
				greetings.sort_by(|a, b| b.date.cmp(&a.date));
				greetings
			}
			Order::OldestFirst => {
				let mut greetings = entries.clone();
				greetings.sort_by(|a, b| a.date.cmp(&b.date));
				greetings
			}
		};
		greetings.truncate(query.limit.max(0) as usize);
		Ok(greetings)
	}
}
