//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate build-environment and rendering concerns from
//! component logic to improve reuse and testability.

pub mod api_config;
pub mod markdown;
