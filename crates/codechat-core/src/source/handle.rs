use std::fmt;
use std::sync::Arc;

/// Opaque identifier naming the repository under discussion: either the URL the
/// user typed or the path token the backend issued for an upload.
///
/// There is no way to mutate a handle. Switching repositories always means a new value.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RepositoryHandle(Arc<str>);

impl RepositoryHandle {
    pub(crate) fn new(value: impl Into<Arc<str>>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RepositoryHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for RepositoryHandle {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
