//! Server module
//!
//! Listener creation and interrupt-driven shutdown signaling.

pub mod listener;
pub mod signal;

pub use listener::create_reusable_listener;
