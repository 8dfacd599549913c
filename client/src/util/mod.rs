//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns and record
//! normalization from page and component logic to improve reuse and
//! testability.

pub mod admin_rows;
pub mod auth;
pub mod format;
pub mod images;
pub mod storage;
