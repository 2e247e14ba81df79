//! User-facing messages.
//!
//! All text qtask prints goes through the [`Message`] enum so wording lives
//! in one place (`display.rs`), and through the `msg_*` macros so it can be
//! routed to `tracing` in debug mode.

pub mod display;
pub mod macros;
pub mod types;

pub use types::Message;
