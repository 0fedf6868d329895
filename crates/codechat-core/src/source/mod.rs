mod artifact;
mod dropped;
mod handle;
mod resolver;

pub use artifact::{validate_archive_name, UploadArtifact, ARCHIVE_SUFFIX};
pub use dropped::first_dropped_path;
pub use handle::RepositoryHandle;
pub use resolver::{
    resolve_from_listing, resolve_from_url, BusyFlag, BusyGuard, UploadResolver, UploadedHandle,
};
