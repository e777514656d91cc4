//! Telegram bot integration: bot construction, update classification,
//! routing, and the dispatcher schema

pub mod bot;
pub mod classify;
pub mod handlers;
pub mod router;

// Re-exports for convenience
pub use bot::{create_bot, send_text, setup_bot_commands};
pub use classify::{classify, Inbound};
pub use handlers::{schema, HandlerDeps, HandlerError};
pub use router::route;
