//! # Attachments
//!
//! Opaque handles to files the user picked for the event. The wizard only
//! records where a file lives and what it looked like when it was picked;
//! file content is never read or copied.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::{WizardError, WizardResult};

/// Shared handle stored in the wizard state. Cloning a state clones the
/// `Arc`, not the attachment.
pub type AttachmentHandle = Arc<Attachment>;

/// A file selected by the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Attachment {
    /// Unique handle id, assigned at selection time
    pub id: Uuid,

    /// File name shown in the attachment list
    pub name: String,

    /// Location of the file on disk
    pub path: PathBuf,

    /// Size at selection time
    pub size_bytes: u64,

    /// When the file was attached
    pub added_at: DateTime<Utc>,
}

impl Attachment {
    /// Build a handle without touching the filesystem.
    pub fn new(name: impl Into<String>, path: impl Into<PathBuf>, size_bytes: u64) -> Self {
        Attachment {
            id: Uuid::new_v4(),
            name: name.into(),
            path: path.into(),
            size_bytes,
            added_at: Utc::now(),
        }
    }

    /// Build a handle from a file on disk, reading only its metadata.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use event_core::attachment::Attachment;
    ///
    /// let agenda = Attachment::from_path("agenda.pdf")?;
    /// println!("{} ({})", agenda.name, agenda.size_display());
    /// # Ok::<(), event_core::WizardError>(())
    /// ```
    pub fn from_path(path: impl AsRef<Path>) -> WizardResult<Self> {
        let path = path.as_ref();
        let metadata = std::fs::metadata(path).map_err(|e| {
            WizardError::file_error("read metadata", path.display().to_string(), e.to_string())
        })?;

        if !metadata.is_file() {
            return Err(WizardError::file_error(
                "attach",
                path.display().to_string(),
                "Not a regular file",
            ));
        }

        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());

        Ok(Attachment::new(name, path, metadata.len()))
    }

    /// Build handles for a batch of paths, preserving their order.
    /// Fails on the first path that cannot be attached.
    pub fn batch_from_paths<I, P>(paths: I) -> WizardResult<Vec<AttachmentHandle>>
    where
        I: IntoIterator<Item = P>,
        P: AsRef<Path>,
    {
        paths
            .into_iter()
            .map(|p| Attachment::from_path(p).map(Arc::new))
            .collect()
    }

    /// Human readable size (e.g. "1.5 MB")
    pub fn size_display(&self) -> String {
        const KB: f64 = 1024.0;
        const MB: f64 = KB * 1024.0;
        const GB: f64 = MB * 1024.0;

        let bytes = self.size_bytes as f64;
        if bytes >= GB {
            format!("{:.1} GB", bytes / GB)
        } else if bytes >= MB {
            format!("{:.1} MB", bytes / MB)
        } else if bytes >= KB {
            format!("{:.1} KB", bytes / KB)
        } else {
            format!("{} B", self.size_bytes)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env::temp_dir;
    use std::fs;

    fn temp_file_path(name: &str) -> PathBuf {
        temp_dir().join(format!("event_wizard_test_{}", name))
    }

    #[test]
    fn test_from_path_reads_metadata() {
        let path = temp_file_path("agenda.txt");
        fs::write(&path, b"09:00 welcome").unwrap();

        let attachment = Attachment::from_path(&path).unwrap();
        assert_eq!(attachment.name, "event_wizard_test_agenda.txt");
        assert_eq!(attachment.size_bytes, 13);
        assert_eq!(attachment.path, path);

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_missing_file_is_file_error() {
        let err = Attachment::from_path(temp_file_path("does_not_exist.pdf")).unwrap_err();
        assert_eq!(err.error_code(), "FILE_ERROR");
    }

    #[test]
    fn test_directory_is_rejected() {
        let err = Attachment::from_path(temp_dir()).unwrap_err();
        assert!(matches!(err, WizardError::FileError { ref operation, .. } if operation == "attach"));
    }

    #[test]
    fn test_batch_preserves_order() {
        let first = temp_file_path("batch_a.txt");
        let second = temp_file_path("batch_b.txt");
        fs::write(&first, b"a").unwrap();
        fs::write(&second, b"bb").unwrap();

        let batch = Attachment::batch_from_paths([&second, &first]).unwrap();
        assert_eq!(batch.len(), 2);
        assert_eq!(batch[0].path, second);
        assert_eq!(batch[1].path, first);

        let _ = fs::remove_file(&first);
        let _ = fs::remove_file(&second);
    }

    #[test]
    fn test_size_display() {
        assert_eq!(Attachment::new("a", "a", 512).size_display(), "512 B");
        assert_eq!(Attachment::new("a", "a", 1536).size_display(), "1.5 KB");
        assert_eq!(Attachment::new("a", "a", 3 * 1024 * 1024).size_display(), "3.0 MB");
    }

    #[test]
    fn test_unique_ids() {
        let a = Attachment::new("a", "a", 1);
        let b = Attachment::new("a", "a", 1);
        assert_ne!(a.id, b.id);
    }
}
