//! Process-wide view of who is using this client.
//!
//! The context reads the session store exactly once, when it is built, and
//! afterwards serves every query from its in-memory mirror. Writes made by
//! another process to the same storage are not observed until a new context
//! is built; the last writer wins.

use std::sync::{Arc, PoisonError, RwLock, RwLockWriteGuard};

use crate::domain::entities::session::{DerivedIdentity, Role, Session};
use crate::errors::DomainResult;
use crate::repositories::session::SessionStore;

/// Holds the current session and answers identity questions about it
pub struct AuthContext {
    store: Arc<dyn SessionStore>,
    session: RwLock<Option<Session>>,
}

impl AuthContext {
    /// Builds the context from whatever the store holds right now
    pub fn rehydrate(store: Arc<dyn SessionStore>) -> Self {
        let session = store.load();
        match &session {
            Some(session) => tracing::debug!(
                role = %session.role(),
                user_id = session.user_id(),
                "Rehydrated session"
            ),
            None => tracing::debug!("No stored session, starting anonymous"),
        }

        Self {
            store,
            session: RwLock::new(session),
        }
    }

    /// True iff a complete session was found or has been established since
    pub fn is_logged_in(&self) -> bool {
        self.read(|session| session.is_some())
    }

    /// True iff the current session belongs to a company account.
    ///
    /// This answers "which kind of account", not "which privileges": it is
    /// not an administrator check.
    pub fn is_company_role(&self) -> bool {
        self.read(|session| session.map_or(false, Session::is_company))
    }

    /// The session's role, `Freelancer` when anonymous
    pub fn role(&self) -> Role {
        self.read(|session| session.map(Session::role).unwrap_or_default())
    }

    /// Snapshot of the current session
    pub fn session(&self) -> Option<Session> {
        self.read(|session| session.cloned())
    }

    /// Profile id of the logged-in user
    pub fn user_id(&self) -> Option<String> {
        self.read(|session| session.map(|s| s.user_id().to_string()))
    }

    /// Bearer token for outgoing requests
    pub fn bearer_token(&self) -> Option<String> {
        self.read(|session| session.map(|s| s.token().to_string()))
    }

    /// Read-only identity handed to navigation code
    pub fn identity(&self) -> DerivedIdentity {
        self.read(DerivedIdentity::from_session)
    }

    /// Persists a freshly authenticated session and makes it current.
    ///
    /// The mirror only changes once the store accepted the session, so a
    /// failed save leaves the previous state untouched.
    pub fn establish(&self, session: Session) -> DomainResult<()> {
        let mut current = self.write();
        self.store.save(&session)?;
        tracing::info!(role = %session.role(), user_id = session.user_id(), "Session established");
        *current = Some(session);
        Ok(())
    }

    /// Ends the session on explicit logout
    pub fn clear_session(&self) {
        self.drop_session();
        tracing::info!("Session cleared");
    }

    /// Ends the session because the backend rejected its credentials.
    ///
    /// Collaborators that receive an authorization failure call this so
    /// the next guarded navigation sends the user to login.
    pub fn invalidate(&self) {
        if self.is_logged_in() {
            tracing::warn!("Backend rejected session credentials, invalidating session");
        }
        self.drop_session();
    }

    /// Ends the session only if it still uses `token`.
    ///
    /// A rejection can arrive after the user has logged in again; the
    /// newer session must survive it. Returns whether a session was dropped.
    pub fn invalidate_token(&self, token: &str) -> bool {
        let mut current = self.write();
        if current.as_ref().map(Session::token) != Some(token) {
            tracing::debug!("Ignoring rejection of a token that is no longer current");
            return false;
        }
        tracing::warn!("Backend rejected session credentials, invalidating session");
        self.store.clear();
        *current = None;
        true
    }

    fn drop_session(&self) {
        let mut current = self.write();
        self.store.clear();
        *current = None;
    }

    /// Mirror writes hold the lock across the store call so the store and
    /// the mirror change together
    fn write(&self) -> RwLockWriteGuard<'_, Option<Session>> {
        self.session.write().unwrap_or_else(PoisonError::into_inner)
    }

    fn read<T>(&self, f: impl FnOnce(Option<&Session>) -> T) -> T {
        let guard = self.session.read().unwrap_or_else(PoisonError::into_inner);
        f(guard.as_ref())
    }
}

impl std::fmt::Debug for AuthContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthContext")
            .field("identity", &self.identity())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::StorageError;
    use crate::repositories::session::KeyValueSessionStore;
    use crate::repositories::storage::{KeyValueStorage, MemoryStorage};

    fn memory_store() -> (Arc<MemoryStorage>, Arc<dyn SessionStore>) {
        let storage = Arc::new(MemoryStorage::new());
        let store: Arc<dyn SessionStore> =
            Arc::new(KeyValueSessionStore::new(Arc::clone(&storage)));
        (storage, store)
    }

    #[test]
    fn test_anonymous_context() {
        let (_, store) = memory_store();
        let context = AuthContext::rehydrate(store);

        assert!(!context.is_logged_in());
        assert!(!context.is_company_role());
        assert_eq!(context.role(), Role::Freelancer);
        assert!(context.session().is_none());
        assert!(context.bearer_token().is_none());
        assert_eq!(context.identity(), DerivedIdentity::anonymous());
    }

    #[test]
    fn test_rehydrate_reads_stored_session() {
        let (_, store) = memory_store();
        store
            .save(&Session::new("abc", Role::Company, "c1").unwrap())
            .unwrap();

        let context = AuthContext::rehydrate(store);
        assert!(context.is_logged_in());
        assert!(context.is_company_role());
        assert_eq!(context.role(), Role::Company);
        assert_eq!(context.user_id().as_deref(), Some("c1"));
        assert_eq!(context.bearer_token().as_deref(), Some("abc"));
    }

    #[test]
    fn test_partial_storage_is_anonymous() {
        let (storage, store) = memory_store();
        storage.set("token", "abc").unwrap();

        let context = AuthContext::rehydrate(store);
        assert!(!context.is_logged_in());
        assert_eq!(context.role(), Role::Freelancer);
    }

    #[test]
    fn test_establish_persists_and_updates_mirror() {
        let (_, store) = memory_store();
        let context = AuthContext::rehydrate(Arc::clone(&store));

        context
            .establish(Session::new("tok", Role::Freelancer, "f1").unwrap())
            .unwrap();

        assert!(context.is_logged_in());
        assert_eq!(store.load().unwrap().user_id(), "f1");
    }

    #[test]
    fn test_clear_session_logs_out() {
        let (storage, store) = memory_store();
        store
            .save(&Session::new("abc", Role::Freelancer, "f1").unwrap())
            .unwrap();
        let context = AuthContext::rehydrate(store);

        context.clear_session();
        assert!(!context.is_logged_in());
        assert!(storage.is_empty());

        context.clear_session();
        assert!(!context.is_logged_in());
    }

    #[test]
    fn test_invalidate_clears_store_and_mirror() {
        let (storage, store) = memory_store();
        store
            .save(&Session::new("stale", Role::Company, "c1").unwrap())
            .unwrap();
        let context = AuthContext::rehydrate(store);

        context.invalidate();
        assert!(!context.is_logged_in());
        assert!(storage.get("token").unwrap().is_none());
    }

    #[test]
    fn test_invalidate_token_only_drops_matching_session() {
        let (_, store) = memory_store();
        let context = AuthContext::rehydrate(Arc::clone(&store));
        context
            .establish(Session::new("fresh", Role::Freelancer, "f9").unwrap())
            .unwrap();

        assert!(!context.invalidate_token("old"));
        assert!(context.is_logged_in());
        assert_eq!(store.load().unwrap().token(), "fresh");

        assert!(context.invalidate_token("fresh"));
        assert!(!context.is_logged_in());
        assert!(store.load().is_none());
    }

    #[test]
    fn test_invalidate_token_when_anonymous() {
        let (storage, store) = memory_store();
        let context = AuthContext::rehydrate(store);

        assert!(!context.invalidate_token("old"));
        assert!(storage.is_empty());
    }

    #[test]
    fn test_external_writes_not_observed_until_rehydrate() {
        let (_, store) = memory_store();
        let context = AuthContext::rehydrate(Arc::clone(&store));

        store
            .save(&Session::new("other-tab", Role::Company, "c2").unwrap())
            .unwrap();
        assert!(!context.is_logged_in());

        let reloaded = AuthContext::rehydrate(store);
        assert!(reloaded.is_logged_in());
    }

    struct ReadOnlyStore;

    impl SessionStore for ReadOnlyStore {
        fn save(&self, _session: &Session) -> Result<(), StorageError> {
            Err(StorageError::Poisoned)
        }

        fn load(&self) -> Option<Session> {
            None
        }

        fn clear(&self) {}
    }

    #[test]
    fn test_failed_establish_keeps_previous_state() {
        let context = AuthContext::rehydrate(Arc::new(ReadOnlyStore));

        let result = context.establish(Session::new("abc", Role::Company, "c1").unwrap());
        assert!(result.is_err());
        assert!(!context.is_logged_in());
    }
}
