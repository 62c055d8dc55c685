use crate::commands::{CmdMessage, CmdResult, DocumentListing};
use crate::error::{HrError, Result};
use crate::ingest::{self, DocumentFile};
use crate::model::{DocumentCategory, DocumentFields, RecordId};
use crate::state::HrStore;
use crate::store::StateStore;
use std::fs;
use std::path::{Path, PathBuf};

/// Attach an ingested file to an employee. Documents are append-only; the
/// upload date is stamped by the store at creation.
pub fn add<S: StateStore>(
    hr: &mut HrStore<S>,
    employee_id: RecordId,
    category: DocumentCategory,
    description: String,
    file: DocumentFile,
) -> Result<CmdResult> {
    let document = hr.add_document(DocumentFields {
        employee_id,
        file_name: file.file_name,
        file_type: file.file_type,
        category,
        description,
        file_data: file.file_data,
    })?;
    let employee_name = hr.employee_name(&document.employee_id);

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Document uploaded ({}): {} for {}",
        document.id, document.file_name, employee_name
    )));
    result.documents.push(DocumentListing {
        document,
        employee_name,
    });
    Ok(result)
}

pub fn list<S: StateStore>(hr: &HrStore<S>) -> Result<CmdResult> {
    let listed = hr
        .documents()
        .iter()
        .map(|document| DocumentListing {
            document: document.clone(),
            employee_name: hr.employee_name(&document.employee_id),
        })
        .collect();
    Ok(CmdResult::default().with_documents(listed))
}

/// Decode a stored document back to a file on disk. Defaults to the original
/// file name in the current directory.
pub fn save<S: StateStore>(
    hr: &HrStore<S>,
    id: &RecordId,
    out: Option<PathBuf>,
) -> Result<CmdResult> {
    let document = hr
        .documents()
        .iter()
        .find(|d| &d.id == id)
        .ok_or_else(|| HrError::RecordNotFound(id.clone()))?;

    let (_, bytes) = ingest::decode_data_url(&document.file_data)?;
    let target = out.unwrap_or_else(|| Path::new(&document.file_name).to_path_buf());
    fs::write(&target, bytes).map_err(HrError::Io)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Saved {} to {}",
        document.file_name,
        target.display()
    )));
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::fixtures::store_with_employees;

    fn text_file(name: &str, content: &str) -> DocumentFile {
        use base64::engine::general_purpose::STANDARD as BASE64;
        use base64::Engine;
        DocumentFile {
            file_name: name.to_string(),
            file_type: "text/plain".to_string(),
            file_data: format!("data:text/plain;base64,{}", BASE64.encode(content)),
        }
    }

    #[test]
    fn add_attaches_document_to_employee() {
        let mut hr = store_with_employees(&[("Jane", "Doe")]);
        let id = hr.employees()[0].id.clone();
        let result = add(
            &mut hr,
            id,
            DocumentCategory::Personal,
            "A note".to_string(),
            text_file("note.txt", "hello"),
        )
        .unwrap();

        assert_eq!(result.documents[0].employee_name, "Jane Doe");
        assert_eq!(hr.documents().len(), 1);
        assert_eq!(hr.documents()[0].file_name, "note.txt");
    }

    #[test]
    fn save_restores_original_bytes() {
        let mut hr = store_with_employees(&[("Jane", "Doe")]);
        let id = hr.employees()[0].id.clone();
        add(
            &mut hr,
            id,
            DocumentCategory::Other,
            String::new(),
            text_file("memo.txt", "the memo body"),
        )
        .unwrap();

        let doc_id = hr.documents()[0].id.clone();
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("restored.txt");
        save(&hr, &doc_id, Some(target.clone())).unwrap();

        assert_eq!(fs::read_to_string(target).unwrap(), "the memo body");
    }

    #[test]
    fn save_unknown_document_fails() {
        let hr = store_with_employees(&[]);
        assert!(save(&hr, &"missing".into(), None).is_err());
    }
}
