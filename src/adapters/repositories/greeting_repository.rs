use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use super::{GreetingQuery, GreetingStore, Order};
use crate::domain::guestbook::{
	entity::{Author, Greeting},
	GuestbookKey,
};
use crate::services::response::ServiceError;

#[derive(sqlx::FromRow)]
struct GreetingRow {
	id: Uuid,
	guestbook: String,
	author_identity: Option<String>,
	author_email: Option<String>,
	content: Option<String>,
	consent: Option<String>,
	date: DateTime<Utc>,
	version: Option<String>,
	status: Option<String>,
}

impl From<GreetingRow> for Greeting {
	fn from(row: GreetingRow) -> Self {
		// An author is stored as a pair; a lone email is not an author.
		let author = row.author_identity.map(|identity| Author {
			identity,
			email: row.author_email.unwrap_or_default(),
		});
		Greeting {
			id: row.id,
			guestbook: GuestbookKey::new(row.guestbook),
			author,
			content: row.content,
			consent: row.consent,
			date: row.date,
			version: row.version,
			status: row.status,
		}
	}
}

/// Greetings table in PostgreSQL.
#[derive(Clone)]
pub struct PgGreetingStore {
	pool: PgPool,
}

impl PgGreetingStore {
	pub fn new(pool: PgPool) -> Self {
		Self { pool }
	}
}

#[async_trait]
impl GreetingStore for PgGreetingStore {
	async fn put(
		&self,
		greeting: &Greeting,
	) -> Result<Uuid, ServiceError> {
		sqlx::query(
			r#"
			INSERT INTO greetings
				(id, guestbook, author_identity, author_email, content, consent, date, version, status)
			VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
			"#,
		)
		.bind(greeting.id)
		.bind(greeting.guestbook.as_str())
		.bind(greeting.author.as_ref().map(|author| author.identity.as_str()))
		.bind(greeting.author.as_ref().map(|author| author.email.as_str()))
		.bind(greeting.content.as_deref())
		.bind(greeting.consent.as_deref())
		.bind(greeting.date)
		.bind(greeting.version.as_deref())
		.bind(greeting.status.as_deref())
		.execute(&self.pool)
		.await
		.map_err(|err| {
			tracing::error!("Failed to insert greeting {}: {:?}", greeting.id, err);
			ServiceError::Database(err)
		})?;

		Ok(greeting.id)
	}

	async fn query(
		&self,
		query: &GreetingQuery,
	) -> Result<Vec<Greeting>, ServiceError> {
		let direction = match query.order {
			Order::NewestFirst => "DESC",
			Order::OldestFirst => "ASC",
		};
		let sql = format!(
			r#"
			SELECT id, guestbook, author_identity, author_email, content, consent, date, version, status
			FROM greetings
			WHERE guestbook = $1
			ORDER BY date {direction}
			LIMIT $2
			"#
		);

		let rows = sqlx::query_as::<_, GreetingRow>(&sql)
			.bind(query.guestbook.as_str())
			.bind(query.limit)
			.fetch_all(&self.pool)
			.await
			.map_err(|err| {
				tracing::error!("Failed to query guestbook {}: {:?}", query.guestbook, err);
				ServiceError::Database(err)
			})?;

		Ok(rows.into_iter().map(Greeting::from).collect())
	}
}
