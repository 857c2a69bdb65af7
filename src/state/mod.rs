//! Client state that outlives a single page load.

pub mod persisted;
