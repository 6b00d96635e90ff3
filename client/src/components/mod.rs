//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each component owns its state in a local signal and reads only the backend
//! config from context, so the upload and chat panels never observe each
//! other.

pub mod chat;
pub mod document_badge;
pub mod upload_notes;
