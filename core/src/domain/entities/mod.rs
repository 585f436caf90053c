//! Domain entities.

pub mod session;

pub use session::{DerivedIdentity, Role, Session};

#[cfg(test)]
mod tests;
