pub mod r#trait {
    pub use super::trait_::*;
}
#[path = "trait.rs"]
mod trait_;
pub mod key_value;

pub use key_value::{KeyValueSessionStore, SessionKeys};
pub use r#trait::SessionStore;
