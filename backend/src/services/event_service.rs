//! Event business logic service.

use crate::database::models::{CreateEvent, Event, NewEvent};
use crate::errors::ServiceResult;
use crate::repositories::event_repository::EventRepository;
use chrono::Utc;
use sqlx::SqlitePool;
use uuid::Uuid;

/// Service layer for event operations.
pub struct EventService<'a> {
    pool: &'a SqlitePool,
}

impl<'a> EventService<'a> {
    /// Creates a new EventService instance.
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// Returns every stored event.
    pub async fn list_events(&self) -> ServiceResult<Vec<Event>> {
        let events = EventRepository::new(self.pool).get_all_events().await?;
        tracing::debug!(count = events.len(), "Fetched events");
        Ok(events)
    }

    /// Persists an already validated event under a fresh identifier.
    ///
    /// Identical submissions are stored as separate records.
    pub async fn create_event(&self, new_event: NewEvent) -> ServiceResult<Event> {
        let create_event = CreateEvent {
            id: Uuid::now_v7().to_string(),
            title: new_event.title,
            image_url: new_event.image_url,
            description: new_event.description,
            date: new_event.date,
            hot: new_event.hot,
            start_time: new_event.start_time,
            end_time: new_event.end_time,
            created_at: Utc::now(),
        };

        let event = EventRepository::new(self.pool)
            .create_event(create_event)
            .await?;
        tracing::info!(event_id = %event.id, title = %event.title, "Event created");
        Ok(event)
    }
}
