//! Client-side component state.
//!
//! DESIGN
//! ======
//! Each component owns one plain state struct held in a local `RwSignal`.
//! Network work is split around explicit transitions: a `begin_*` method moves
//! the state from idle to in-flight and hands back what to send, and a
//! `finish_*` method consumes the request's `Result` and returns to idle.
//! Components only glue these transitions to HTTP calls, so every rule about
//! what a submission does is testable without a browser.

pub mod chat;
pub mod documents;
pub mod phase;
pub mod upload;
