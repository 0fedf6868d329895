use crate::backend::{RepoBackend, UploadResponse, UploadedRepo};
use crate::error::CodechatError;
use crate::source::artifact::{validate_archive_name, UploadArtifact};
use crate::source::handle::RepositoryHandle;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Turn typed text into a handle. Only emptiness is checked here; whether the
/// URL is reachable is the backend's call on first use.
pub fn resolve_from_url(text: &str) -> Result<RepositoryHandle, CodechatError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(CodechatError::validation("Repository URL is empty"));
    }
    Ok(RepositoryHandle::new(trimmed))
}

/// Select an archive the backend already holds, as reported by `list_repos`.
pub fn resolve_from_listing(repo: &UploadedRepo) -> Result<RepositoryHandle, CodechatError> {
    let path = repo.repo_path.trim();
    if path.is_empty() {
        return Err(CodechatError::malformed(format!(
            "Repository {} has no path",
            repo.repo_id
        )));
    }
    Ok(RepositoryHandle::new(path))
}

/// Counts in-flight uploads so the UI can show a busy state.
#[derive(Debug, Clone, Default)]
pub struct BusyFlag(Arc<AtomicUsize>);

impl BusyFlag {
    pub fn is_busy(&self) -> bool {
        self.0.load(Ordering::SeqCst) > 0
    }

    pub fn acquire(&self) -> BusyGuard {
        self.0.fetch_add(1, Ordering::SeqCst);
        BusyGuard(self.0.clone())
    }
}

/// Holds the flag raised until dropped, whichever way the operation ends.
#[derive(Debug)]
pub struct BusyGuard(Arc<AtomicUsize>);

impl Drop for BusyGuard {
    fn drop(&mut self) {
        self.0.fetch_sub(1, Ordering::SeqCst);
    }
}

/// Outcome of a successful upload.
#[derive(Debug, Clone)]
pub struct UploadedHandle {
    pub handle: RepositoryHandle,
    pub repo_id: Option<String>,
    pub message: Option<String>,
}

/// Resolves uploaded archives into handles. Cloning shares the busy flag, so a
/// clone can be moved into a background task while the UI keeps reading it.
#[derive(Debug, Clone, Default)]
pub struct UploadResolver {
    busy: BusyFlag,
}

impl UploadResolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_busy(&self) -> bool {
        self.busy.is_busy()
    }

    pub async fn resolve_from_upload(
        &self,
        backend: &dyn RepoBackend,
        artifact: UploadArtifact,
    ) -> Result<UploadedHandle, CodechatError> {
        validate_archive_name(artifact.filename())?;

        let _guard = self.busy.acquire();
        tracing::debug!(file = %artifact.filename(), "Uploading archive");

        let UploadResponse {
            repo_path,
            repo_id,
            message,
        } = backend.upload(&artifact).await?;

        let repo_path = repo_path.trim();
        if repo_path.is_empty() {
            return Err(CodechatError::malformed("Upload response has an empty repo_path"));
        }

        Ok(UploadedHandle {
            handle: RepositoryHandle::new(repo_path),
            repo_id,
            message,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_is_trimmed() {
        let handle = resolve_from_url("  https://github.com/acme/widgets \n").unwrap();
        assert_eq!(handle.as_str(), "https://github.com/acme/widgets");
    }

    #[test]
    fn blank_url_is_rejected() {
        assert!(resolve_from_url("").unwrap_err().is_validation());
        assert!(resolve_from_url(" \t ").unwrap_err().is_validation());
    }

    #[test]
    fn busy_flag_counts_overlapping_guards() {
        let flag = BusyFlag::default();
        assert!(!flag.is_busy());
        let a = flag.acquire();
        let b = flag.acquire();
        drop(a);
        assert!(flag.is_busy());
        drop(b);
        assert!(!flag.is_busy());
    }

    #[test]
    fn listing_with_blank_path_is_malformed() {
        let repo = UploadedRepo {
            repo_id: "abc".into(),
            repo_path: " ".into(),
        };
        assert!(matches!(
            resolve_from_listing(&repo),
            Err(CodechatError::MalformedResponse(_))
        ));
    }
}
