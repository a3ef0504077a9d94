//! Attachment embedding: bounded file reading and data-URL codec.
//!
//! Files become self-contained [`Attachment`] records with the full content
//! base64-encoded inline, so the store never holds references to external
//! storage. The 5 MB bound is enforced here, before an attachment can reach
//! a project; the store itself never checks sizes.

use std::fs;
use std::path::{Path, PathBuf};

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use chrono::Utc;
use tracing::debug;
use uuid::Uuid;

use crate::error::{Error, Result};
use crate::model::Attachment;

/// Per-file size bound; larger files are rejected before encoding.
pub const MAX_ATTACHMENT_BYTES: u64 = 5 * 1024 * 1024;

/// Outcome of one embedding batch.
///
/// Oversized files land in `rejected` as recoverable per-file warnings while
/// their siblings are still processed. A read failure aborts the whole batch
/// instead (see [`embed_files`]).
#[derive(Debug, Clone, Default)]
pub struct UploadReport {
    pub accepted: Vec<Attachment>,
    pub rejected: Vec<RejectedFile>,
}

/// A file refused for exceeding [`MAX_ATTACHMENT_BYTES`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RejectedFile {
    pub name: String,
    pub size: u64,
}

/// Embed a batch of files as inline attachments.
///
/// Each oversized file is skipped and reported in the result; any read
/// failure fails the entire call with [`Error::AttachmentRead`] and commits
/// nothing.
pub fn embed_files<P: AsRef<Path>>(paths: &[P]) -> Result<UploadReport> {
    let mut report = UploadReport::default();

    for path in paths {
        let path = path.as_ref();
        let name = file_name(path);
        let metadata = fs::metadata(path)
            .map_err(|err| Error::AttachmentRead(format!("{}: {err}", path.display())))?;

        if metadata.len() > MAX_ATTACHMENT_BYTES {
            debug!(file = %name, size = metadata.len(), "attachment rejected: too large");
            report.rejected.push(RejectedFile {
                name,
                size: metadata.len(),
            });
            continue;
        }

        let bytes = fs::read(path)
            .map_err(|err| Error::AttachmentRead(format!("{}: {err}", path.display())))?;
        let mime_type = mime_type_for(&name);
        report.accepted.push(Attachment {
            id: Uuid::new_v4().to_string(),
            data_url: encode_data_url(&mime_type, &bytes),
            size: bytes.len() as u64,
            mime_type,
            name,
            uploaded_at: Utc::now(),
        });
    }

    Ok(report)
}

/// Build a `data:<mime>;base64,<payload>` URL from raw bytes.
pub fn encode_data_url(mime_type: &str, bytes: &[u8]) -> String {
    format!("data:{mime_type};base64,{}", STANDARD.encode(bytes))
}

/// Recover the raw bytes from a data URL.
pub fn decode_data_url(data_url: &str) -> Result<Vec<u8>> {
    let payload = data_url
        .split_once(";base64,")
        .map(|(_, payload)| payload)
        .ok_or_else(|| Error::InvalidArgument("not a base64 data URL".to_string()))?;
    STANDARD
        .decode(payload)
        .map_err(|err| Error::InvalidArgument(format!("invalid base64 payload: {err}")))
}

/// Write an attachment's content into `dir` under its original name,
/// returning the path. The download counterpart of [`embed_files`].
pub fn save_attachment(attachment: &Attachment, dir: &Path) -> Result<PathBuf> {
    let bytes = decode_data_url(&attachment.data_url)?;
    fs::create_dir_all(dir)?;
    let path = dir.join(&attachment.name);
    fs::write(&path, bytes)?;
    Ok(path)
}

/// MIME type from the file extension, `application/octet-stream` when
/// unknown.
pub fn mime_type_for(name: &str) -> String {
    let extension = name
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_ascii_lowercase())
        .unwrap_or_default();
    let mime = match extension.as_str() {
        "txt" | "md" => "text/plain",
        "csv" => "text/csv",
        "html" | "htm" => "text/html",
        "json" => "application/json",
        "pdf" => "application/pdf",
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "svg" => "image/svg+xml",
        "webp" => "image/webp",
        "zip" => "application/zip",
        "gz" => "application/gzip",
        "tar" => "application/x-tar",
        _ => "application/octet-stream",
    };
    mime.to_string()
}

/// Human-readable byte count: `0 B`, `1.5 KB`, `2.3 MB`.
pub fn format_file_size(bytes: u64) -> String {
    if bytes == 0 {
        return "0 B".to_string();
    }
    const UNITS: [&str; 4] = ["B", "KB", "MB", "GB"];
    let exponent = ((bytes as f64).ln() / 1024f64.ln()).floor() as usize;
    let exponent = exponent.min(UNITS.len() - 1);
    let value = bytes as f64 / 1024f64.powi(exponent as i32);
    let rounded = (value * 10.0).round() / 10.0;
    if rounded.fract() == 0.0 {
        format!("{} {}", rounded as u64, UNITS[exponent])
    } else {
        format!("{rounded:.1} {}", UNITS[exponent])
    }
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
