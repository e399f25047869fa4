//! shutter-app - Application state and orchestration for Shutter Tester
//!
//! This crate implements the TEA (The Elm Architecture) pattern for state
//! management, the crash boundary and its reports, the shared settings store,
//! configuration loading and the background side effects (clipboard, browser,
//! settings persistence).

pub mod actions;
pub mod browser;
pub mod clipboard;
pub mod config;
pub mod crash;
pub mod handler;
pub mod input_key;
pub mod message;
pub mod process;
pub mod root;
pub mod settings_store;
pub mod signals;
pub mod spawn;
pub mod speed_input;
pub mod state;

// Re-export primary types
pub use handler::{UpdateAction, UpdateResult};
pub use input_key::InputKey;
pub use message::Message;
pub use root::AppRoot;
pub use settings_store::SettingsStore;
pub use state::{AppState, Focus};
