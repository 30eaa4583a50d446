//! Pending image attachments for the property form
//!
//! Attachments keep their insertion order. Each one owns a preview
//! handle, a temporary copy of the source file handed to the terminal's
//! image previewer; the copy is removed when the attachment is removed
//! or the owning form is dropped, on every exit path.

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use uuid::Uuid;

/// A revocable preview file. Deleting is tied to `Drop`, so a handle
/// can not outlive the attachment that owns it.
#[derive(Debug)]
pub struct PreviewHandle {
    path: PathBuf,
}

impl PreviewHandle {
    fn create(source: &Path) -> Result<Self> {
        let mut name = format!("labyrinth-preview-{}", Uuid::new_v4());
        if let Some(ext) = source.extension().and_then(|e| e.to_str()) {
            name.push('.');
            name.push_str(ext);
        }
        let path = std::env::temp_dir().join(name);
        fs::copy(source, &path)
            .with_context(|| format!("failed to stage preview for {}", source.display()))?;
        Ok(Self { path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for PreviewHandle {
    fn drop(&mut self) {
        if let Err(err) = fs::remove_file(&self.path) {
            tracing::warn!(path = %self.path.display(), %err, "failed to remove preview file");
        }
    }
}

/// One pending file attachment
#[derive(Debug)]
pub struct Attachment {
    pub id: Uuid,
    pub source: PathBuf,
    pub file_name: String,
    pub preview: PreviewHandle,
}

/// Ordered collection of pending attachments
#[derive(Debug, Default)]
pub struct AttachmentSet {
    items: Vec<Attachment>,
}

impl AttachmentSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a file to the end of the set, staging its preview
    pub fn add(&mut self, source: &Path) -> Result<()> {
        fs::metadata(source)
            .with_context(|| format!("no such file: {}", source.display()))?;
        let file_name = source
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("attachment")
            .to_string();
        let preview = PreviewHandle::create(source)?;
        self.items.push(Attachment {
            id: Uuid::new_v4(),
            source: source.to_path_buf(),
            file_name,
            preview,
        });
        Ok(())
    }

    /// Remove an attachment by identity; its preview file goes with it
    pub fn remove(&mut self, id: Uuid) {
        self.items.retain(|a| a.id != id);
    }

    /// Remove the attachment at `index` if it exists
    pub fn remove_at(&mut self, index: usize) {
        if index < self.items.len() {
            self.items.remove(index);
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Attachment> {
        self.items.iter()
    }

    /// Source paths in insertion order, for the multipart upload
    pub fn source_paths(&self) -> Vec<PathBuf> {
        self.items.iter().map(|a| a.source.clone()).collect()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_source(label: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("labyrinth-test-{}-{}.jpg", label, Uuid::new_v4()));
        fs::write(&path, b"not really a jpeg").unwrap();
        path
    }

    #[test]
    fn test_add_appends_in_order() {
        let first = make_source("first");
        let second = make_source("second");
        let mut set = AttachmentSet::new();
        set.add(&first).unwrap();
        set.add(&second).unwrap();

        let names: Vec<_> = set.iter().map(|a| a.source.clone()).collect();
        assert_eq!(names, vec![first.clone(), second.clone()]);

        fs::remove_file(first).unwrap();
        fs::remove_file(second).unwrap();
    }

    #[test]
    fn test_add_missing_file_fails() {
        let mut set = AttachmentSet::new();
        let result = set.add(Path::new("/nonexistent/labyrinth.jpg"));
        assert!(result.is_err());
        assert!(set.is_empty());
    }

    #[test]
    fn test_preview_exists_while_attached() {
        let source = make_source("alive");
        let mut set = AttachmentSet::new();
        set.add(&source).unwrap();

        let preview_path = set.iter().next().unwrap().preview.path().to_path_buf();
        assert!(preview_path.exists());

        fs::remove_file(source).unwrap();
    }

    #[test]
    fn test_remove_releases_preview() {
        let source = make_source("removed");
        let mut set = AttachmentSet::new();
        set.add(&source).unwrap();

        let attachment = set.iter().next().unwrap();
        let id = attachment.id;
        let preview_path = attachment.preview.path().to_path_buf();

        set.remove(id);
        assert!(set.is_empty());
        assert!(!preview_path.exists());

        fs::remove_file(source).unwrap();
    }

    #[test]
    fn test_drop_releases_all_previews() {
        let source = make_source("dropped");
        let preview_path;
        {
            let mut set = AttachmentSet::new();
            set.add(&source).unwrap();
            preview_path = set.iter().next().unwrap().preview.path().to_path_buf();
            assert!(preview_path.exists());
        }
        assert!(!preview_path.exists());

        fs::remove_file(source).unwrap();
    }

    #[test]
    fn test_remove_at_out_of_range_is_noop() {
        let source = make_source("range");
        let mut set = AttachmentSet::new();
        set.add(&source).unwrap();
        set.remove_at(5);
        assert_eq!(set.len(), 1);

        fs::remove_file(source).unwrap();
    }
}
