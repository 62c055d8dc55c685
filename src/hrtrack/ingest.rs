//! Document file ingestion: reads a file from disk and encodes it as a
//! self-describing data URL (`data:<mime>;base64,<payload>`) ready to be
//! attached to an employee via `add_document`.

use crate::error::{HrError, Result};
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::thread::{self, JoinHandle};

// The upload set the original tool accepts; everything else falls back to a
// generic binary type.
static MIME_TYPES: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("pdf", "application/pdf"),
        ("doc", "application/msword"),
        (
            "docx",
            "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
        ),
        ("jpg", "image/jpeg"),
        ("jpeg", "image/jpeg"),
        ("png", "image/png"),
        ("txt", "text/plain"),
    ])
});

const FALLBACK_MIME: &str = "application/octet-stream";

/// A file read off disk, encoded and ready for `add_document`.
#[derive(Debug, Clone)]
pub struct DocumentFile {
    pub file_name: String,
    pub file_type: String,
    pub file_data: String,
}

pub fn mime_for_path(path: &Path) -> &'static str {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase())
        .and_then(|ext| MIME_TYPES.get(ext.as_str()).copied())
        .unwrap_or(FALLBACK_MIME)
}

/// Read a file and encode its content as a data URL.
pub fn read_file(path: &Path) -> Result<DocumentFile> {
    let bytes = std::fs::read(path).map_err(HrError::Io)?;
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .ok_or_else(|| HrError::Document(format!("Not a file path: {}", path.display())))?;
    let file_type = mime_for_path(path);

    Ok(DocumentFile {
        file_name,
        file_type: file_type.to_string(),
        file_data: format!("data:{};base64,{}", file_type, BASE64.encode(&bytes)),
    })
}

/// Read a file on a worker thread and hand the result to `on_done`.
///
/// This is the only suspension point in the core: the caller fires the read
/// and continues; completion enqueues exactly one `add_document`-shaped
/// callback. There is no cancellation — the read runs to completion or fails.
pub fn spawn_read<F>(path: PathBuf, on_done: F) -> JoinHandle<()>
where
    F: FnOnce(Result<DocumentFile>) + Send + 'static,
{
    thread::spawn(move || on_done(read_file(&path)))
}

/// Split a data URL back into its MIME type and raw bytes.
pub fn decode_data_url(data: &str) -> Result<(String, Vec<u8>)> {
    let rest = data
        .strip_prefix("data:")
        .ok_or_else(|| HrError::Document("Missing data: prefix".to_string()))?;
    let (header, payload) = rest
        .split_once(',')
        .ok_or_else(|| HrError::Document("Missing payload separator".to_string()))?;
    let mime = header
        .strip_suffix(";base64")
        .ok_or_else(|| HrError::Document("Not base64-encoded".to_string()))?;
    let bytes = BASE64
        .decode(payload)
        .map_err(|e| HrError::Document(e.to_string()))?;
    Ok((mime.to_string(), bytes))
}
