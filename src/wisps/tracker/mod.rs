//! Player lookups against the external player tracker.
//!
//! Every invocation fetches the roster fresh, picks or lists players and replies once.

pub mod client;
pub mod commands;
pub mod error;
pub mod lookup;
pub mod model;
pub mod render;
