//! Canonical project collection with write-through persistence.
//!
//! The store owns the ordered list of projects and mirrors it to a single
//! key in the injected [`StorageBackend`]. Every mutation persists
//! synchronously before the caller observes the result; there is no
//! write-behind and no batching. Derived views (timeline grouping, backlog
//! ordering) are recomputed from the canonical list on every read and never
//! stored redundantly.

use std::collections::BTreeMap;

use chrono::Utc;
use tracing::{debug, warn};
use uuid::Uuid;

use crate::error::Result;
use crate::events::{StoreEvent, StoreEventKind};
use crate::model::{Project, ProjectDraft, ProjectPatch};
use crate::storage::StorageBackend;

/// The one durable key holding the whole collection.
pub const STORAGE_KEY: &str = "project-dashboard-data";

/// Number of palette slots color indexes cycle through.
pub const COLOR_PALETTE_SIZE: usize = 10;

/// Handle returned by [`ProjectStore::subscribe`], used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Subscriber = Box<dyn Fn(&StoreEvent)>;

/// Authoritative in-memory project list plus its durable mirror.
pub struct ProjectStore {
    storage: Box<dyn StorageBackend>,
    projects: Vec<Project>,
    subscribers: Vec<(SubscriptionId, Subscriber)>,
    next_subscription: u64,
}

impl ProjectStore {
    /// Open a store over the given backend, loading any saved collection.
    ///
    /// An absent, unreadable, or unparseable value starts the store empty;
    /// the failure is logged for diagnostics and never surfaced. Timestamp
    /// strings in the saved payload are reconstituted into timestamps.
    pub fn open(storage: Box<dyn StorageBackend>) -> Self {
        let projects = load_saved(storage.as_ref());
        Self {
            storage,
            projects,
            subscribers: Vec::new(),
            next_subscription: 0,
        }
    }

    // =========================================================================
    // Read access
    // =========================================================================

    /// The canonical ordered collection.
    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    pub fn get(&self, id: &str) -> Option<&Project> {
        self.projects.iter().find(|project| project.id == id)
    }

    pub fn len(&self) -> usize {
        self.projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }

    // =========================================================================
    // Mutations (write-through)
    // =========================================================================

    /// Create a project from a draft: fresh id, `created_at` stamped now,
    /// color index cycling the palette when the draft leaves it unset.
    ///
    /// Effort/benefit ranges are accepted as given; validation, where it
    /// exists, happened at the draft boundary.
    pub fn create(&mut self, draft: ProjectDraft) -> Result<Project> {
        let color_index = draft
            .color_index
            .unwrap_or_else(|| next_color_index(self.projects.len()));
        let project = Project {
            id: Uuid::new_v4().to_string(),
            title: draft.title,
            effort: draft.effort,
            benefit: draft.benefit,
            color_index,
            created_at: Utc::now(),
            assigned_date: draft.assigned_date,
            discovery: draft.discovery,
            scope: draft.scope,
            complexity_factors: draft.complexity_factors,
            blockers: draft.blockers,
            needs: draft.needs,
            dependencies: draft.dependencies,
            next_steps: draft.next_steps,
            research_focus: draft.research_focus,
            images: draft.images,
            attachments: draft.attachments,
        };

        self.projects.push(project.clone());
        self.persist()?;
        debug!(project_id = %project.id, "project created");
        self.notify(StoreEvent::new(StoreEventKind::ProjectCreated, &project.id));
        Ok(project)
    }

    /// Merge the patch into the matching project.
    ///
    /// Returns `Ok(false)` without touching anything when the id is unknown.
    /// `id` and `created_at` cannot be overwritten; the patch has no such
    /// fields.
    pub fn update(&mut self, id: &str, patch: ProjectPatch) -> Result<bool> {
        let Some(index) = self.projects.iter().position(|project| project.id == id) else {
            debug!(project_id = %id, "update skipped: unknown project");
            return Ok(false);
        };

        patch.apply(&mut self.projects[index]);
        self.persist()?;
        debug!(project_id = %id, "project updated");
        self.notify(StoreEvent::new(StoreEventKind::ProjectUpdated, id));
        Ok(true)
    }

    /// Remove the matching project; `Ok(false)` when the id is unknown.
    pub fn delete(&mut self, id: &str) -> Result<bool> {
        let Some(index) = self.projects.iter().position(|project| project.id == id) else {
            debug!(project_id = %id, "delete skipped: unknown project");
            return Ok(false);
        };

        self.projects.remove(index);
        self.persist()?;
        debug!(project_id = %id, "project deleted");
        self.notify(StoreEvent::new(StoreEventKind::ProjectDeleted, id));
        Ok(true)
    }

    /// Flush the collection to the durable mirror. Idempotent; safe to call
    /// when nothing changed.
    pub fn persist(&self) -> Result<()> {
        let payload = serde_json::to_string(&self.projects)?;
        self.storage.write(STORAGE_KEY, &payload)
    }

    // =========================================================================
    // Derived views
    // =========================================================================

    /// Scheduled projects grouped by the ISO date portion of their assigned
    /// date. Within each day, canonical relative order is preserved.
    pub fn projects_by_date(&self) -> BTreeMap<String, Vec<Project>> {
        let mut grouped: BTreeMap<String, Vec<Project>> = BTreeMap::new();
        for project in &self.projects {
            if let Some(assigned) = project.assigned_date {
                grouped
                    .entry(assigned.date_naive().to_string())
                    .or_default()
                    .push(project.clone());
            }
        }
        grouped
    }

    /// Backlog: projects with no assigned date, ascending by creation time.
    /// The sort is stable, so equal timestamps keep canonical order.
    pub fn projects_without_date(&self) -> Vec<Project> {
        let mut backlog: Vec<Project> = self
            .projects
            .iter()
            .filter(|project| project.assigned_date.is_none())
            .cloned()
            .collect();
        backlog.sort_by_key(|project| project.created_at);
        backlog
    }

    // =========================================================================
    // Subscriptions
    // =========================================================================

    /// Register a callback invoked after every successful mutation, once the
    /// durable mirror has been written.
    pub fn subscribe<F>(&mut self, callback: F) -> SubscriptionId
    where
        F: Fn(&StoreEvent) + 'static,
    {
        self.next_subscription += 1;
        let id = SubscriptionId(self.next_subscription);
        self.subscribers.push((id, Box::new(callback)));
        id
    }

    /// Drop a subscription; returns whether it existed.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(sub_id, _)| *sub_id != id);
        self.subscribers.len() != before
    }

    fn notify(&self, event: StoreEvent) {
        for (_, subscriber) in &self.subscribers {
            subscriber(&event);
        }
    }
}

fn next_color_index(current_count: usize) -> u8 {
    ((current_count % COLOR_PALETTE_SIZE) as u8) + 1
}

fn load_saved(storage: &dyn StorageBackend) -> Vec<Project> {
    match storage.read(STORAGE_KEY) {
        Ok(Some(raw)) => match serde_json::from_str(&raw) {
            Ok(projects) => projects,
            Err(err) => {
                warn!(error = %err, "failed to decode saved projects, starting empty");
                Vec::new()
            }
        },
        Ok(None) => Vec::new(),
        Err(err) => {
            warn!(error = %err, "failed to read saved projects, starting empty");
            Vec::new()
        }
    }
}
