//! Domain layer for the Greene Genie chat widget.
//!
//! Everything in this crate is free of I/O: the keyword response table,
//! the slide-in animation curve, window placement arithmetic and the
//! chat session state machine that the desktop front-end drives.

pub mod animation;
pub mod config;
pub mod error;
pub mod placement;
pub mod responder;
pub mod session;

// Re-export common error type
pub use error::{GenieError, Result};
