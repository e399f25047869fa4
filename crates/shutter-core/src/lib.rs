//! # shutter-core - Core Domain Types
//!
//! Foundation crate for Shutter Tester. Provides domain types, error handling,
//! logging setup and shutter speed validation.
//!
//! This crate has **zero internal dependencies**.
//!
//! ## Public API
//!
//! ### Domain Types (`types`)
//! - [`AppPhase`] - Application lifecycle phase (Running, Reloading, Quitting)
//! - [`Theme`] - Colour theme preference (System, Light, Dark)
//!
//! ### Speeds (`speed`)
//! - [`validate()`] - Accept `"250"`, `"1/250"` or `"1 / 250"` style drafts
//! - [`SpeedEntry`] - A validated speed, kept exactly as typed
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Custom error enum with `fatal` vs `recoverable` classification
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//! - [`ResultExt`] - Extension trait for adding error context
//!
//! ## Prelude
//!
//! ```rust
//! use shutter_core::prelude::*;
//! ```

pub mod error;
pub mod logging;
pub mod prelude;
pub mod speed;
pub mod types;

pub use error::{Error, Result, ResultExt};
pub use speed::{validate, SpeedEntry, SpeedKind};
pub use types::{AppPhase, Theme};
