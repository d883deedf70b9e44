//! # Dungeon Escape
//!
//! A small turn-based dungeon-crawl: the player advances through a fixed,
//! linear sequence of rooms, each holding one enemy, one treasure, and one
//! narrative challenge, choosing to fight, bypass, or backtrack each turn
//! until escaping the last room, running out of health or moves, or quitting.
//!
//! ## Architecture Overview
//!
//! The crate is a presentation-free game core plus a thin terminal front end:
//!
//! - **Characters**: common name/health handling shared by `Player` and `Enemy`
//! - **Room Catalog**: the immutable ordered list of rooms, fixed at startup
//! - **Dungeon Navigation**: cursor plus visited stack, supporting one-step
//!   backtracking over the catalog
//! - **Turn Engine**: `GameSession` resolves one action per turn into
//!   health/inventory/coin mutations and a win/lose/continue outcome
//! - **Rendering**: pure string views over session snapshots, so any front
//!   end (or test) can display the game without the core knowing about it
//!
//! ## Driving the Core
//!
//! Front ends feed one [`Action`] per turn into [`GameSession::resolve_turn`]
//! and read the result back through [`GameSession::snapshot`]. All outcome
//! types are serializable so sessions can be observed remotely or recorded.

pub mod game;
pub mod input;
pub mod rendering;
pub mod utils;

// Core module re-exports
pub use game::*;
pub use input::*;
pub use rendering::*;
pub use utils::*;

// Explicit re-exports for commonly used types
pub use game::{
    // From actions
    Action,
    // From characters
    Character,
    // From state
    CompletionState,
    DefeatReason,
    Dungeon,
    Enemy,
    GameSession,
    Player,
    PlayerView,
    Room,
    RoomView,
    SessionSnapshot,
    Treasure,
    TurnReport,
};

/// Core error type for the Dungeon Escape engine.
#[derive(thiserror::Error, Debug)]
pub enum DungeonError {
    /// I/O operation failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    /// Game state is invalid
    #[error("Invalid game state: {0}")]
    InvalidState(String),
}

/// Result type used throughout the Dungeon Escape codebase.
pub type DungeonResult<T> = Result<T, DungeonError>;

/// Version information for the game.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Game configuration constants.
pub mod config {
    /// Health a new player starts with
    pub const STARTING_HEALTH: u32 = 100;

    /// Health cap enforced by healing
    pub const MAX_HEALTH: u32 = 100;

    /// Moves a new player starts with
    pub const STARTING_MOVES: u32 = 10;

    /// Health below which the player loses
    pub const CRITICAL_HEALTH: u32 = 20;

    /// Flat damage taken when a fight is lost
    pub const FAILED_FIGHT_DAMAGE: u32 = 10;

    /// Flat damage taken when bypassing a room
    pub const BYPASS_DAMAGE: u32 = 5;

    /// Coins awarded for defeating an enemy
    pub const FIGHT_COIN_REWARD: u32 = 10;
}
