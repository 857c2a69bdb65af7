//! Utility helpers for browser environment concerns.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate `localStorage`, `location` and query-string
//! handling behind small traits so the rest of the crate stays testable off
//! the browser.

pub mod navigation;
pub mod query;
pub mod storage;
