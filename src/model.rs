//! Project and attachment records.
//!
//! Field names serialize in camelCase so the persisted payload stays
//! compatible with data written by earlier versions of the board.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The single planning unit tracked by the board.
///
/// `effort` and `benefit` are intended to be 0-10 but the store accepts any
/// value; validation, where it exists, lives at the input boundary
/// ([`ProjectDraft::new`]). `assigned_date` is the only structurally
/// meaningful optional field: its presence decides timeline vs backlog
/// membership.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    /// Opaque unique identifier, immutable after creation.
    pub id: String,
    pub title: String,
    pub effort: i32,
    pub benefit: i32,
    /// Cosmetic palette slot in 1-10; no uniqueness guarantee.
    pub color_index: u8,
    /// Stamped once at creation, immutable.
    pub created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assigned_date: Option<DateTime<Utc>>,

    #[serde(default)]
    pub discovery: String,
    #[serde(default)]
    pub scope: String,
    #[serde(default)]
    pub complexity_factors: String,
    #[serde(default)]
    pub blockers: String,
    #[serde(default)]
    pub needs: String,
    #[serde(default)]
    pub dependencies: String,
    #[serde(default)]
    pub next_steps: String,
    #[serde(default)]
    pub research_focus: String,

    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub attachments: Vec<Attachment>,
}

/// A file embedded inline as a base64 data URL, not a reference to external
/// storage. Bounded at 5 MB by the upload facility before it ever reaches
/// the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Attachment {
    pub id: String,
    pub name: String,
    pub data_url: String,
    pub size: u64,
    #[serde(rename = "type")]
    pub mime_type: String,
    pub uploaded_at: DateTime<Utc>,
}

/// Creation input: a [`Project`] minus `id` and `created_at`.
///
/// When `color_index` is left unset the store assigns
/// `(current_count % 10) + 1`, cycling the palette.
#[derive(Debug, Clone, Default)]
pub struct ProjectDraft {
    pub title: String,
    pub effort: i32,
    pub benefit: i32,
    pub color_index: Option<u8>,
    pub assigned_date: Option<DateTime<Utc>>,
    pub discovery: String,
    pub scope: String,
    pub complexity_factors: String,
    pub blockers: String,
    pub needs: String,
    pub dependencies: String,
    pub next_steps: String,
    pub research_focus: String,
    pub images: Vec<String>,
    pub attachments: Vec<Attachment>,
}

impl ProjectDraft {
    /// Build a draft with the required fields; planning text starts empty.
    ///
    /// The title must be non-blank. Effort and benefit are accepted as given,
    /// including out-of-range values.
    pub fn new(title: &str, effort: i32, benefit: i32) -> crate::Result<Self> {
        let title = title.trim();
        if title.is_empty() {
            return Err(crate::Error::InvalidArgument(
                "project title cannot be empty".to_string(),
            ));
        }
        Ok(Self {
            title: title.to_string(),
            effort,
            benefit,
            ..Self::default()
        })
    }
}

/// Partial update for a project: every mutable field, all optional.
///
/// Fields left as `None` are untouched. `id` and `created_at` have no
/// counterpart here, so they cannot be overwritten by construction.
/// `assigned_date` is tri-state: `None` leaves it alone, `Some(Some(t))`
/// schedules the project, `Some(None)` moves it back to the backlog.
#[derive(Debug, Clone, Default)]
pub struct ProjectPatch {
    pub title: Option<String>,
    pub effort: Option<i32>,
    pub benefit: Option<i32>,
    pub color_index: Option<u8>,
    pub assigned_date: Option<Option<DateTime<Utc>>>,
    pub discovery: Option<String>,
    pub scope: Option<String>,
    pub complexity_factors: Option<String>,
    pub blockers: Option<String>,
    pub needs: Option<String>,
    pub dependencies: Option<String>,
    pub next_steps: Option<String>,
    pub research_focus: Option<String>,
    pub images: Option<Vec<String>>,
    pub attachments: Option<Vec<Attachment>>,
}

impl ProjectPatch {
    /// Shallow merge: overwrite exactly the fields present in the patch.
    pub(crate) fn apply(self, project: &mut Project) {
        if let Some(title) = self.title {
            project.title = title;
        }
        if let Some(effort) = self.effort {
            project.effort = effort;
        }
        if let Some(benefit) = self.benefit {
            project.benefit = benefit;
        }
        if let Some(color_index) = self.color_index {
            project.color_index = color_index;
        }
        if let Some(assigned_date) = self.assigned_date {
            project.assigned_date = assigned_date;
        }
        if let Some(discovery) = self.discovery {
            project.discovery = discovery;
        }
        if let Some(scope) = self.scope {
            project.scope = scope;
        }
        if let Some(complexity_factors) = self.complexity_factors {
            project.complexity_factors = complexity_factors;
        }
        if let Some(blockers) = self.blockers {
            project.blockers = blockers;
        }
        if let Some(needs) = self.needs {
            project.needs = needs;
        }
        if let Some(dependencies) = self.dependencies {
            project.dependencies = dependencies;
        }
        if let Some(next_steps) = self.next_steps {
            project.next_steps = next_steps;
        }
        if let Some(research_focus) = self.research_focus {
            project.research_focus = research_focus;
        }
        if let Some(images) = self.images {
            project.images = images;
        }
        if let Some(attachments) = self.attachments {
            project.attachments = attachments;
        }
    }
}
