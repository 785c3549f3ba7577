use crate::error::StorageResult;
use crate::models::ContactDirectory;
use async_trait::async_trait;
use tracing::warn;

/// Repository for the address book snapshot.
///
/// The whole directory is read and written at once; there are no partial
/// updates. Implementations: JSON file on disk, in-memory mocks for tests.
#[async_trait]
pub trait DirectoryRepository: Send + Sync {
    /// Read the stored directory.
    ///
    /// A store that has never been written yields an empty directory.
    async fn load(&self) -> StorageResult<ContactDirectory>;

    /// Replace the stored directory with `directory`.
    async fn save(&self, directory: &ContactDirectory) -> StorageResult<()>;

    /// Read the stored directory, starting fresh if it cannot be read.
    ///
    /// Corrupt or unreadable snapshots are logged and otherwise ignored.
    async fn load_or_empty(&self) -> ContactDirectory {
        match self.load().await {
            Ok(directory) => directory,
            Err(e) => {
                warn!("Could not load address book, starting empty: {}", e);
                ContactDirectory::new()
            }
        }
    }
}
