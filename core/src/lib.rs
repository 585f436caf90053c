//! # Gig Core
//!
//! Session and navigation core for the Gig freelance marketplace client.
//! This crate contains the session entity, the storage and session store
//! interfaces, the auth context, the route guard and the role-dispatch
//! helpers that the rest of the client consults before navigating.

pub mod domain;
pub mod errors;
pub mod repositories;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::{DerivedIdentity, Dispatch, Navigation, Role, Session};
pub use errors::{AuthError, DomainError, DomainResult, StorageError, ValidationError};
pub use repositories::{KeyValueSessionStore, KeyValueStorage, MemoryStorage, SessionKeys, SessionStore};
pub use services::{AuthContext, AuthService, GuardDecision, RouteGuard};
