//! End-to-end attachment flow: embed files, attach them to a project,
//! persist, reload, and recover the original bytes.

use std::fs;

use tempfile::TempDir;

use prioboard::upload::{self, MAX_ATTACHMENT_BYTES};
use prioboard::{FileStorage, ProjectDraft, ProjectPatch, ProjectStore};

#[test]
fn embedded_files_survive_a_store_reload() {
    let files = TempDir::new().unwrap();
    let board = TempDir::new().unwrap();

    let notes = files.path().join("plan.md");
    let diagram = files.path().join("arch.png");
    fs::write(&notes, b"# rollout plan\n- phase one").unwrap();
    fs::write(&diagram, &[0x89, b'P', b'N', b'G', 0, 1, 2]).unwrap();

    let report = upload::embed_files(&[&notes, &diagram]).unwrap();
    assert!(report.rejected.is_empty());
    assert_eq!(report.accepted.len(), 2);
    assert_eq!(report.accepted[1].mime_type, "image/png");

    let mut store = ProjectStore::open(Box::new(FileStorage::new(board.path())));
    let project = store
        .create(ProjectDraft::new("Rollout", 6, 9).unwrap())
        .unwrap();
    store
        .update(
            &project.id,
            ProjectPatch {
                attachments: Some(report.accepted.clone()),
                ..ProjectPatch::default()
            },
        )
        .unwrap();

    let reloaded = ProjectStore::open(Box::new(FileStorage::new(board.path())));
    let attachments = &reloaded.get(&project.id).unwrap().attachments;
    assert_eq!(attachments.len(), 2);
    assert_eq!(attachments[0].name, "plan.md");
    assert_eq!(attachments[0].uploaded_at, report.accepted[0].uploaded_at);

    // Download counterpart reproduces the bytes that went in.
    let downloads = board.path().join("downloads");
    let saved = upload::save_attachment(&attachments[0], &downloads).unwrap();
    assert_eq!(fs::read(saved).unwrap(), fs::read(&notes).unwrap());
}

#[test]
fn oversized_file_in_a_batch_only_loses_itself() {
    let files = TempDir::new().unwrap();
    let big = files.path().join("dump.bin");
    let small = files.path().join("summary.txt");
    fs::write(&big, vec![0u8; (MAX_ATTACHMENT_BYTES + 1) as usize]).unwrap();
    fs::write(&small, b"fits fine").unwrap();

    let report = upload::embed_files(&[&big, &small]).unwrap();

    assert_eq!(report.rejected.len(), 1);
    assert_eq!(report.rejected[0].name, "dump.bin");
    assert_eq!(report.rejected[0].size, MAX_ATTACHMENT_BYTES + 1);
    assert_eq!(report.accepted.len(), 1);
    assert_eq!(report.accepted[0].name, "summary.txt");
}
