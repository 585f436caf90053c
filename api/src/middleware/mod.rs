pub mod session_guard;

pub use session_guard::{CurrentIdentity, RequireSession};
