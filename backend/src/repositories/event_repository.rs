//! Database repository for event operations.

use crate::database::models::{CreateEvent, Event};
use anyhow::Result;
use sqlx::SqlitePool;

/// Repository for event database operations.
pub struct EventRepository<'a> {
    /// Shared SQLite connection pool
    pool: &'a SqlitePool,
}

impl<'a> EventRepository<'a> {
    /// Creates a new EventRepository instance.
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// Creates a new event in the database.
    pub async fn create_event(&self, event: CreateEvent) -> Result<Event> {
        let event = sqlx::query_as::<_, Event>(
            r#"
            INSERT INTO events (id, title, image_url, description, date, hot, start_time, end_time, created_at)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)
            RETURNING id, title, image_url, description, date, hot, start_time, end_time, created_at
            "#,
        )
        .bind(event.id)
        .bind(event.title)
        .bind(event.image_url)
        .bind(event.description)
        .bind(event.date)
        .bind(event.hot)
        .bind(event.start_time)
        .bind(event.end_time)
        .bind(event.created_at)
        .fetch_one(self.pool)
        .await?;

        Ok(event)
    }

    /// Retrieves every event in insertion order.
    pub async fn get_all_events(&self) -> Result<Vec<Event>> {
        let events = sqlx::query_as::<_, Event>(
            r#"
            SELECT id, title, image_url, description, date, hot, start_time, end_time, created_at
            FROM events
            ORDER BY rowid ASC
            "#,
        )
        .fetch_all(self.pool)
        .await?;

        Ok(events)
    }
}
