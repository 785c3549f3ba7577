use async_trait::async_trait;
use contact_assistant::error::{StorageError, StorageResult};
use contact_assistant::models::ContactDirectory;
use contact_assistant::repositories::DirectoryRepository;
use std::collections::HashMap;
use std::io;
use std::sync::{Arc, Mutex};

/// Mock directory repository for testing.
///
/// Holds the "stored" snapshot in memory, can be told to fail loads or saves,
/// and tracks method calls for verification.
#[allow(dead_code)]
#[derive(Clone)]
pub struct MockDirectoryRepository {
    stored: Arc<Mutex<Option<ContactDirectory>>>,
    fail_load: Arc<Mutex<bool>>,
    fail_save: Arc<Mutex<bool>>,
    call_counts: Arc<Mutex<HashMap<String, usize>>>,
}

#[allow(dead_code)]
impl MockDirectoryRepository {
    /// Create a repository that has never been written.
    pub fn new() -> Self {
        Self {
            stored: Arc::new(Mutex::new(None)),
            fail_load: Arc::new(Mutex::new(false)),
            fail_save: Arc::new(Mutex::new(false)),
            call_counts: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    /// Create a repository already holding `directory`.
    pub fn with_directory(directory: ContactDirectory) -> Self {
        let repo = Self::new();
        *repo.stored.lock().unwrap() = Some(directory);
        repo
    }

    /// Make every subsequent load fail as if the snapshot were corrupt.
    pub fn fail_loads(&self) {
        *self.fail_load.lock().unwrap() = true;
    }

    /// Make every subsequent save fail with an I/O error.
    pub fn fail_saves(&self) {
        *self.fail_save.lock().unwrap() = true;
    }

    /// The last successfully saved snapshot, if any.
    pub fn stored(&self) -> Option<ContactDirectory> {
        self.stored.lock().unwrap().clone()
    }

    /// Get the number of times a method was called.
    pub fn get_call_count(&self, method: &str) -> usize {
        let counts = self.call_counts.lock().unwrap();
        *counts.get(method).unwrap_or(&0)
    }

    fn track_call(&self, method: &str) {
        let mut counts = self.call_counts.lock().unwrap();
        *counts.entry(method.to_string()).or_insert(0) += 1;
    }
}

impl Default for MockDirectoryRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl DirectoryRepository for MockDirectoryRepository {
    async fn load(&self) -> StorageResult<ContactDirectory> {
        self.track_call("load");

        if *self.fail_load.lock().unwrap() {
            let err = serde_json::from_str::<ContactDirectory>("{ corrupt").unwrap_err();
            return Err(StorageError::Json(err));
        }
        Ok(self.stored.lock().unwrap().clone().unwrap_or_default())
    }

    async fn save(&self, directory: &ContactDirectory) -> StorageResult<()> {
        self.track_call("save");

        if *self.fail_save.lock().unwrap() {
            return Err(StorageError::Io(io::Error::new(
                io::ErrorKind::Other,
                "disk full",
            )));
        }
        *self.stored.lock().unwrap() = Some(directory.clone());
        Ok(())
    }
}
