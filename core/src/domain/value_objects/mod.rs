//! Value objects describing navigation outcomes.

pub mod navigation;

pub use navigation::{Dispatch, Navigation};
