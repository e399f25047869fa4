//! shutter-tui - Terminal UI for Shutter Tester
//!
//! This crate provides the ratatui-based terminal interface: it mounts the
//! application root from shutter-app and adds terminal rendering, event
//! polling and widget display.

pub mod event;
pub mod layout;
pub mod render;
pub mod runner;
pub mod startup;
pub mod terminal;
pub mod theme;
pub mod widgets;

#[cfg(test)]
pub mod test_utils;

// Re-export main entry points
pub use runner::{run, RunOptions};
