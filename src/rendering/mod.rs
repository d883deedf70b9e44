//! # Rendering Module
//!
//! Plain-text views over session snapshots.
//!
//! Everything here is pure string building: the core never draws, and a
//! front end (or a test) can take these strings to any terminal, widget, or
//! log line it likes.

pub mod display;

pub use display::*;
