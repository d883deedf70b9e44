//! # Input Module
//!
//! Input handling and command parsing for the terminal front end.
//!
//! The core only understands [`Action`](crate::game::Action); this module
//! owns the mapping from whatever the player typed to a [`Command`]. GUI
//! front ends would do the same mapping from clicks or key codes.

pub mod commands;

pub use commands::*;

use crate::game::Action;

/// Parses typed player input into commands.
///
/// Accepts the classic numeric menu (`1..=4`), single-letter shortcuts, and
/// full action words, all case-insensitively.
#[derive(Debug, Clone, Copy, Default)]
pub struct InputHandler;

impl InputHandler {
    /// Creates a new input handler.
    ///
    /// # Examples
    ///
    /// ```
    /// use dungeon_escape::{Action, Command, InputHandler};
    ///
    /// let handler = InputHandler::new();
    /// assert_eq!(handler.parse("1"), Command::Play(Action::Fight));
    /// assert_eq!(handler.parse("bypass"), Command::Play(Action::Bypass));
    /// assert_eq!(handler.parse("xyzzy"), Command::Unrecognized);
    /// ```
    pub fn new() -> Self {
        Self
    }

    /// Maps one line of input to a command.
    pub fn parse(&self, line: &str) -> Command {
        let trimmed = line.trim();
        if let Ok(code) = trimmed.parse::<u32>() {
            return match Action::from_code(code) {
                Some(action) => Command::Play(action),
                None => Command::Unrecognized,
            };
        }
        match trimmed.to_lowercase().as_str() {
            "f" | "fight" => Command::Play(Action::Fight),
            "b" | "bypass" => Command::Play(Action::Bypass),
            "r" | "back" | "backtrack" => Command::Play(Action::Backtrack),
            "q" | "quit" => Command::Play(Action::Quit),
            "h" | "help" | "?" => Command::Help,
            _ => Command::Unrecognized,
        }
    }
}
