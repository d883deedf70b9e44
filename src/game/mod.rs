//! # Game Module
//!
//! The presentation-free dungeon-crawl core.
//!
//! This module contains the fundamental building blocks of Dungeon Escape:
//! - Player and enemy character state
//! - The fixed room catalog and per-room content
//! - Dungeon navigation (advance, backtrack, current-room lookup)
//! - The turn-resolution engine and session snapshots

pub mod actions;
pub mod characters;
pub mod dungeon;
pub mod rooms;
pub mod state;

pub use actions::*;
pub use characters::*;
pub use dungeon::*;
pub use rooms::*;
pub use state::*;
