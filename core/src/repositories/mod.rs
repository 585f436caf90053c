pub mod session;
pub mod storage;

pub use session::{KeyValueSessionStore, SessionKeys, SessionStore};
pub use storage::{KeyValueStorage, MemoryStorage};
