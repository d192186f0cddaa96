//! Shared helpers for the runnable porthist demos.

/// Source selection for demos.
pub mod common;
