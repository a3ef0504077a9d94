//! prioboard - Project Prioritization Board Core
//!
//! This library provides the data core of a local-first project
//! prioritization board: rate projects on effort and benefit, place them on
//! a 2-D matrix, schedule them on a timeline, and attach planning notes and
//! inline file attachments. Persistence is a single key in a pluggable
//! key/value backend; there is no server and no multi-user coordination.
//!
//! # Core Concepts
//!
//! - **Project**: the single planning unit (title, scores, schedule, notes,
//!   attachments)
//! - **Backlog**: projects with no assigned date, ordered by creation time
//! - **Timeline**: projects grouped by the date they are assigned to
//! - **Matrix**: effort-vs-benefit scatter positions and ball sizes
//! - **Durable mirror**: the persisted copy of the collection, written
//!   through on every mutation
//!
//! # Module Organization
//!
//! - `error`: Error types and result alias
//! - `events`: Mutation events delivered to store subscribers
//! - `layout`: Pure matrix coordinate and size math
//! - `model`: Project, attachment, draft, and patch types
//! - `storage`: Key/value backend trait plus file and in-memory backends
//! - `store`: The canonical project collection and its derived views
//! - `upload`: Bounded attachment embedding and the data-URL codec

pub mod error;
pub mod events;
pub mod layout;
pub mod model;
pub mod storage;
pub mod store;
pub mod upload;

pub use error::{Error, Result};
pub use model::{Attachment, Project, ProjectDraft, ProjectPatch};
pub use storage::{FileStorage, MemoryStorage, StorageBackend};
pub use store::{ProjectStore, SubscriptionId, STORAGE_KEY};
