//! Session store over any key-value storage backend.

use gig_shared::config::StorageConfig;

use crate::domain::entities::session::Session;
use crate::errors::StorageError;
use crate::repositories::storage::KeyValueStorage;

use super::r#trait::SessionStore;

/// The three storage keys holding the session fields
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionKeys {
    pub token: String,
    pub role: String,
    pub user_id: String,
}

impl Default for SessionKeys {
    fn default() -> Self {
        Self::from(&StorageConfig::default())
    }
}

impl From<&StorageConfig> for SessionKeys {
    fn from(config: &StorageConfig) -> Self {
        Self {
            token: config.token_key.clone(),
            role: config.role_key.clone(),
            user_id: config.user_id_key.clone(),
        }
    }
}

/// Session store writing each field under its own key
pub struct KeyValueSessionStore<S: KeyValueStorage> {
    storage: S,
    keys: SessionKeys,
}

impl<S: KeyValueStorage> KeyValueSessionStore<S> {
    /// Create a store using the default keys
    pub fn new(storage: S) -> Self {
        Self::with_keys(storage, SessionKeys::default())
    }

    /// Create a store using custom keys
    pub fn with_keys(storage: S, keys: SessionKeys) -> Self {
        Self { storage, keys }
    }

    /// The underlying storage
    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// The keys in use
    pub fn keys(&self) -> &SessionKeys {
        &self.keys
    }

    /// Reads all three fields from one snapshot of the storage
    fn read_fields(&self) -> Result<(Option<String>, Option<String>, Option<String>), StorageError> {
        let mut values = self
            .storage
            .get_many(&[
                self.keys.token.as_str(),
                self.keys.role.as_str(),
                self.keys.user_id.as_str(),
            ])?
            .into_iter();
        Ok((
            values.next().flatten(),
            values.next().flatten(),
            values.next().flatten(),
        ))
    }
}

impl<S: KeyValueStorage> SessionStore for KeyValueSessionStore<S> {
    fn save(&self, session: &Session) -> Result<(), StorageError> {
        self.storage.set_many(&[
            (self.keys.token.as_str(), session.token()),
            (self.keys.role.as_str(), session.role().as_str()),
            (self.keys.user_id.as_str(), session.user_id()),
        ])?;
        tracing::debug!(role = %session.role(), user_id = session.user_id(), "Session saved");
        Ok(())
    }

    fn load(&self) -> Option<Session> {
        let (token, role, user_id) = match self.read_fields() {
            Ok(values) => values,
            Err(e) => {
                tracing::warn!(error = %e, "Failed to read session storage, treating as logged out");
                return None;
            }
        };

        let present = [&token, &role, &user_id]
            .iter()
            .filter(|value| value.is_some())
            .count();

        match Session::from_parts(token, role, user_id) {
            Some(session) => Some(session),
            None => {
                if present > 0 {
                    tracing::warn!(present, "Ignoring incomplete or malformed stored session");
                }
                None
            }
        }
    }

    fn clear(&self) {
        let keys = [
            self.keys.token.as_str(),
            self.keys.role.as_str(),
            self.keys.user_id.as_str(),
        ];
        if let Err(e) = self.storage.remove_many(&keys) {
            tracing::warn!(error = %e, "Failed to clear session storage");
        }
    }
}
