use crate::error::StorageResult;
use crate::models::ContactDirectory;
use crate::repositories::traits::DirectoryRepository;
use async_trait::async_trait;
use std::io::ErrorKind;
use std::path::PathBuf;
use tracing::{debug, info, warn};

/// Directory repository backed by a JSON file.
///
/// Saves go to a sibling `.tmp` file which is then renamed over the target,
/// so a failed write leaves the previous snapshot intact.
pub struct JsonFileRepository {
    path: PathBuf,
}

impl JsonFileRepository {
    /// Create a repository reading and writing `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self.path.as_os_str().to_owned();
        name.push(".tmp");
        PathBuf::from(name)
    }
}

#[async_trait]
impl DirectoryRepository for JsonFileRepository {
    async fn load(&self) -> StorageResult<ContactDirectory> {
        let bytes = match tokio::fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("No address book at {}, starting empty", self.path.display());
                return Ok(ContactDirectory::new());
            }
            Err(e) => return Err(e.into()),
        };

        let directory: ContactDirectory = serde_json::from_slice(&bytes)?;
        info!(
            "Loaded {} contacts from {}",
            directory.len(),
            self.path.display()
        );
        Ok(directory)
    }

    async fn save(&self, directory: &ContactDirectory) -> StorageResult<()> {
        let json = serde_json::to_vec_pretty(directory)?;
        let temp = self.temp_path();

        tokio::fs::write(&temp, &json).await?;
        if let Err(e) = tokio::fs::rename(&temp, &self.path).await {
            if let Err(cleanup) = tokio::fs::remove_file(&temp).await {
                warn!("Could not remove {}: {}", temp.display(), cleanup);
            }
            return Err(e.into());
        }

        info!(
            "Saved {} contacts to {}",
            directory.len(),
            self.path.display()
        );
        Ok(())
    }
}
