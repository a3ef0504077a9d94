//! Mutation events emitted to store subscribers.
//!
//! Every successful `create`/`update`/`delete` produces one event after the
//! durable mirror has been written, so a subscriber always observes a
//! persisted state. Events are serializable for hosts that forward them to
//! an external sink.

use chrono::{DateTime, Utc};
use serde::Serialize;
use ulid::Ulid;

pub const EVENT_SCHEMA_VERSION: &str = "prioboard.event.v1";

/// What happened to the collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StoreEventKind {
    ProjectCreated,
    ProjectUpdated,
    ProjectDeleted,
}

/// A single mutation record handed to subscribers.
#[derive(Debug, Clone, Serialize)]
pub struct StoreEvent {
    pub schema_version: &'static str,
    pub event_id: String,
    pub kind: StoreEventKind,
    pub project_id: String,
    pub timestamp: DateTime<Utc>,
}

impl StoreEvent {
    pub fn new(kind: StoreEventKind, project_id: impl Into<String>) -> Self {
        Self {
            schema_version: EVENT_SCHEMA_VERSION,
            event_id: Ulid::new().to_string(),
            kind,
            project_id: project_id.into(),
            timestamp: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn events_get_unique_ids() {
        let a = StoreEvent::new(StoreEventKind::ProjectCreated, "p-1");
        let b = StoreEvent::new(StoreEventKind::ProjectCreated, "p-1");
        assert_ne!(a.event_id, b.event_id);
    }

    #[test]
    fn kind_serializes_snake_case() {
        let event = StoreEvent::new(StoreEventKind::ProjectDeleted, "p-9");
        let json = serde_json::to_value(&event).expect("serialize");
        assert_eq!(json["kind"], "project_deleted");
        assert_eq!(json["schema_version"], EVENT_SCHEMA_VERSION);
    }
}
