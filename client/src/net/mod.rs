//! Networking modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs the backend HTTP calls from the browser; request and
//! response shapes come from the shared `wire` crate.

pub mod api;
