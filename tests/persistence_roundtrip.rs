//! Round-trip tests over the file backend: what one store session persists,
//! a fresh session must reconstruct exactly, timestamps included.

use chrono::{DateTime, TimeZone, Utc};
use tempfile::TempDir;

use prioboard::{
    FileStorage, ProjectDraft, ProjectPatch, ProjectStore, StorageBackend, STORAGE_KEY,
};

fn open_store(temp: &TempDir) -> ProjectStore {
    ProjectStore::open(Box::new(FileStorage::new(temp.path())))
}

#[test]
fn reload_reproduces_the_collection() {
    let temp = TempDir::new().unwrap();

    let mut store = open_store(&temp);
    let alpha = store
        .create(ProjectDraft::new("Alpha", 3, 7).unwrap())
        .unwrap();
    let beta = store
        .create(ProjectDraft::new("Beta", 8, 2).unwrap())
        .unwrap();
    store
        .update(
            &beta.id,
            ProjectPatch {
                assigned_date: Some(Some(Utc.with_ymd_and_hms(2024, 6, 3, 12, 0, 0).unwrap())),
                next_steps: Some("kick off discovery".to_string()),
                ..ProjectPatch::default()
            },
        )
        .unwrap();

    let reloaded = open_store(&temp);
    assert_eq!(reloaded.projects().len(), 2);
    assert_eq!(reloaded.get(&alpha.id).unwrap(), store.get(&alpha.id).unwrap());
    assert_eq!(reloaded.get(&beta.id).unwrap(), store.get(&beta.id).unwrap());

    // Timestamps came back as timestamps, not strings: comparisons work.
    let restored: DateTime<Utc> = reloaded.get(&beta.id).unwrap().assigned_date.unwrap();
    assert_eq!(restored, Utc.with_ymd_and_hms(2024, 6, 3, 12, 0, 0).unwrap());

    // Derived views agree across sessions.
    assert_eq!(store.projects_by_date(), reloaded.projects_by_date());
    assert_eq!(store.projects_without_date(), reloaded.projects_without_date());
}

#[test]
fn persisted_payload_uses_the_legacy_camel_case_shape() {
    let temp = TempDir::new().unwrap();
    let mut store = open_store(&temp);
    store
        .create(ProjectDraft::new("Shape check", 1, 2).unwrap())
        .unwrap();

    let raw = FileStorage::new(temp.path())
        .read(STORAGE_KEY)
        .unwrap()
        .expect("payload written");
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
    let project = &value.as_array().unwrap()[0];
    assert!(project.get("colorIndex").is_some());
    assert!(project.get("createdAt").is_some());
    assert!(project.get("researchFocus").is_some());
    assert!(project.get("color_index").is_none());
}

#[test]
fn payload_written_by_the_browser_version_loads() {
    // Minimal record the way the original board serialized it; absent
    // planning fields default to empty.
    let temp = TempDir::new().unwrap();
    let backend = FileStorage::new(temp.path());
    backend
        .write(
            STORAGE_KEY,
            r#"[{"id":"legacy-1","title":"Imported","effort":4,"benefit":6,
                "colorIndex":3,"createdAt":"2023-11-20T08:15:00.000Z",
                "assignedDate":"2023-12-01T00:00:00.000Z"}]"#,
        )
        .unwrap();

    let store = ProjectStore::open(Box::new(backend));
    let project = store.get("legacy-1").expect("legacy record loaded");
    assert_eq!(project.title, "Imported");
    assert_eq!(project.color_index, 3);
    assert!(project.discovery.is_empty());
    assert!(project.attachments.is_empty());
    assert_eq!(
        project.assigned_date.unwrap(),
        Utc.with_ymd_and_hms(2023, 12, 1, 0, 0, 0).unwrap()
    );
    assert_eq!(store.projects_by_date().len(), 1);
}

#[test]
fn corrupt_file_on_disk_starts_an_empty_board() {
    let temp = TempDir::new().unwrap();
    let backend = FileStorage::new(temp.path());
    backend.write(STORAGE_KEY, "<<definitely not json>>").unwrap();

    let mut store = ProjectStore::open(Box::new(FileStorage::new(temp.path())));
    assert!(store.is_empty());

    // The board stays usable; the next mutation replaces the bad payload.
    store
        .create(ProjectDraft::new("Fresh start", 5, 5).unwrap())
        .unwrap();
    let reloaded = open_store(&temp);
    assert_eq!(reloaded.projects().len(), 1);
}
