//! Standalone environment and file helpers.
//!
//! These are independent of the client: stateless functions for `.env`
//! loading, JSON persistence, directory creation, and conversation
//! pretty-printing. Nothing here touches the network.

mod display;
mod env;
mod files;

pub use display::format_messages;
pub use env::{api_key_present, load_env_file};
pub use files::{ensure_directory, load_json, save_json};
