//! Remembers the last contact details so the next quote is prefilled.

use std::path::{Path, PathBuf};

use quote_core::lead::Contact;
use thiserror::Error;
use tracing::{debug, warn};

#[derive(Debug, Error)]
pub enum ContactStoreError {
    #[error("cannot write contact file '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot encode contact: {0}")]
    Encode(#[from] toml::ser::Error),
}

/// A TOML file holding a single [`Contact`].
#[derive(Debug, Clone)]
pub struct ContactStore {
    path: PathBuf,
}

impl ContactStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns the saved contact, or an empty one when the file is missing or
    /// unreadable. Prefill is a convenience, so problems are only logged.
    pub fn load(&self) -> Contact {
        let text = match std::fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "no saved contact");
                return Contact::default();
            }
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "cannot read saved contact");
                return Contact::default();
            }
        };

        toml::from_str(&text).unwrap_or_else(|e| {
            warn!(path = %self.path.display(), error = %e, "ignoring malformed contact file");
            Contact::default()
        })
    }

    pub fn save(
        &self,
        contact: &Contact,
    ) -> Result<(), ContactStoreError> {
        let text = toml::to_string(contact)?;
        std::fs::write(&self.path, text).map_err(|source| ContactStoreError::Io {
            path: self.path.clone(),
            source,
        })?;
        debug!(path = %self.path.display(), "saved contact");
        Ok(())
    }
}
