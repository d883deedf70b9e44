//! Raw command values recognized by the terminal front end.

/// Commands a front end can resolve from raw input.
///
/// `Play` carries a game action; the other variants are front-end concerns
/// that never reach the turn engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Take a game action this turn
    Play(crate::game::Action),
    /// Show the rules again
    Help,
    /// Input that maps to no command; the turn is still consumed
    Unrecognized,
}
