//! Voxevent - Telegram bot that collects per-event voice notes
//!
//! Participants join an event by code (`/start <code>`, or by typing the code
//! as plain text) and then send voice notes, which are stored in memory keyed
//! by that code until the organizer picks them up.
//!
//! # Module Structure
//!
//! - `core`: configuration, errors, and logging setup
//! - `session`: the user -> event-code and event-code -> voice-ref store
//! - `telegram`: bot construction, update classification, routing, handlers

pub mod core;
pub mod session;
pub mod telegram;

// Re-export commonly used types for convenience
pub use crate::core::{config, AppError, AppResult};
pub use session::SessionStore;
pub use telegram::{create_bot, schema, HandlerDeps};
