//! Session store trait defining the persistence contract for the session.

use crate::domain::entities::session::Session;
use crate::errors::StorageError;

/// Durable persistence of the current session
///
/// # Contract
/// - `save` writes token, role and user id together
/// - `load` yields a session only when all three are present and valid;
///   partial or malformed state reads as no session
/// - `clear` removes all three and may be called any number of times
///
/// Only `save` reports failures: a caller that just authenticated must know
/// whether the session survived. Read and clear failures degrade to the
/// logged-out state.
pub trait SessionStore: Send + Sync {
    /// Persist the session
    fn save(&self, session: &Session) -> Result<(), StorageError>;

    /// Read the persisted session
    fn load(&self) -> Option<Session>;

    /// Remove the persisted session
    fn clear(&self);
}
