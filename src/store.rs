use crate::error::MonitorError;
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Identifiers of listings that have already triggered a notification,
/// mirrored to a JSON array on disk so restarts do not re-notify.
#[derive(Debug)]
pub struct KnownListings {
    path: PathBuf,
    ids: HashSet<String>,
}

impl KnownListings {
    /// Loads the set from `path`. A missing or unreadable file is not an
    /// error, it just means no prior history.
    pub fn load<P: AsRef<Path>>(path: P) -> KnownListings {
        let path = path.as_ref().to_path_buf();
        let ids = match std::fs::read_to_string(&path) {
            Ok(content) => match serde_json::from_str::<Vec<String>>(&content) {
                Ok(ids) => ids.into_iter().collect(),
                Err(e) => {
                    warn!("Ignoring corrupt state file {}: {}", path.display(), e);
                    HashSet::new()
                }
            },
            Err(e) => {
                debug!("No state file at {}: {}", path.display(), e);
                HashSet::new()
            }
        };
        KnownListings { path, ids }
    }

    pub fn save(&self) -> Result<(), MonitorError> {
        let ids: Vec<&String> = self.ids.iter().collect();
        std::fs::write(&self.path, serde_json::to_string(&ids)?)?;
        Ok(())
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids.contains(id)
    }

    pub fn insert(&mut self, id: &str) {
        self.ids.insert(id.to_string());
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}
