//! # Action Module
//!
//! The closed set of actions a player can take on a turn.
//!
//! Front ends translate whatever raw input they receive (key presses,
//! button clicks, typed text) into one `Action` per turn and hand it to the
//! session. Actions are serializable so turns can be driven or recorded
//! remotely.

use serde::{Deserialize, Serialize};

/// One player action, resolved once per turn.
///
/// # Examples
///
/// ```
/// use dungeon_escape::Action;
///
/// assert_eq!(Action::from_code(1), Some(Action::Fight));
/// assert_eq!(Action::from_code(9), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Action {
    /// Fight the current room's enemy
    Fight,
    /// Sneak past the enemy, taking minor damage but no treasure
    Bypass,
    /// Return to the previous room on the visited path
    Backtrack,
    /// End the session immediately
    Quit,
}

impl Action {
    /// Maps a raw numeric action code (the classic `1..=4` menu) to an action.
    ///
    /// Returns `None` for unrecognized codes; the caller decides whether the
    /// turn is still consumed (see `GameSession::waste_turn`).
    pub fn from_code(code: u32) -> Option<Action> {
        match code {
            1 => Some(Action::Fight),
            2 => Some(Action::Bypass),
            3 => Some(Action::Backtrack),
            4 => Some(Action::Quit),
            _ => None,
        }
    }

    /// The menu label shown for this action.
    pub fn label(self) -> &'static str {
        match self {
            Action::Fight => "Fight enemy",
            Action::Bypass => "Attempt to bypass",
            Action::Backtrack => "Backtrack to previous room",
            Action::Quit => "Quit game",
        }
    }

    /// All actions in menu order.
    pub fn all() -> [Action; 4] {
        [
            Action::Fight,
            Action::Bypass,
            Action::Backtrack,
            Action::Quit,
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_action_from_code_menu_order() {
        assert_eq!(Action::from_code(1), Some(Action::Fight));
        assert_eq!(Action::from_code(2), Some(Action::Bypass));
        assert_eq!(Action::from_code(3), Some(Action::Backtrack));
        assert_eq!(Action::from_code(4), Some(Action::Quit));
    }

    #[test]
    fn test_action_from_code_rejects_out_of_range() {
        assert_eq!(Action::from_code(0), None);
        assert_eq!(Action::from_code(5), None);
        assert_eq!(Action::from_code(u32::MAX), None);
    }

    #[test]
    fn test_action_roundtrips_through_json() {
        let json = serde_json::to_string(&Action::Backtrack).unwrap();
        let back: Action = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Action::Backtrack);
    }
}
