//! Text layout for the turn screen, action menu, and game-over summary.

use crate::game::{Action, SessionSnapshot};
use crate::utils::format_item_list;
use std::fmt::Write;

/// Renders session snapshots as plain text.
///
/// # Examples
///
/// ```
/// use dungeon_escape::{GameSession, TextDisplay};
///
/// let session = GameSession::new("Aria");
/// let screen = TextDisplay::new().status_panel(&session.snapshot());
/// assert!(screen.contains("You are in Room: Base"));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct TextDisplay;

impl TextDisplay {
    /// Creates a new text display.
    pub fn new() -> Self {
        Self
    }

    /// The per-turn status panel: room, player, and enemy summary.
    pub fn status_panel(&self, snapshot: &SessionSnapshot) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "----------------------------------------");
        match &snapshot.room {
            Some(room) => {
                let _ = writeln!(out, "You are in Room: {}", room.name);
                let _ = writeln!(
                    out,
                    "Player: {} | Health: {}",
                    snapshot.player.name, snapshot.player.health
                );
                let _ = writeln!(out, "Moves Remaining: {}", snapshot.player.moves);
                let _ = writeln!(
                    out,
                    "Enemy: {} - {}",
                    room.enemy_name, room.enemy_description
                );
                let _ = writeln!(out, "Challenge: {}", room.challenge);
            }
            None => {
                let _ = writeln!(out, "You are outside the dungeon.");
            }
        }
        let _ = write!(out, "----------------------------------------");
        out
    }

    /// The numbered action menu in classic order.
    pub fn action_menu(&self) -> String {
        let mut out = String::from("Choose your action:\n");
        for (i, action) in Action::all().iter().enumerate() {
            let _ = writeln!(out, "{}. {}", i + 1, action.label());
        }
        out.push_str("Enter choice: ");
        out
    }

    /// The end-of-game banner and final player stats.
    pub fn game_over(&self, snapshot: &SessionSnapshot) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "======== GAME OVER ========");
        if let Some(message) = &snapshot.final_message {
            let _ = writeln!(out, "{}", message);
        }
        let player = &snapshot.player;
        let _ = writeln!(out, "--- Player Stats ---");
        let _ = writeln!(out, "Name: {}", player.name);
        let _ = writeln!(out, "Health: {}", player.health);
        let _ = writeln!(out, "Moves Left: {}", player.moves);
        let _ = writeln!(out, "Coins Collected: {}", player.coins);
        let _ = writeln!(out, "Enemies Defeated: {}", player.enemies_defeated);
        let _ = writeln!(
            out,
            "Inventory (Sorted): {}",
            format_item_list(&player.inventory)
        );
        let _ = write!(out, "--------------------");
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::GameSession;

    #[test]
    fn test_status_panel_shows_room_and_player() {
        let session = GameSession::new("Tess");
        let panel = TextDisplay::new().status_panel(&session.snapshot());
        assert!(panel.contains("You are in Room: Base"));
        assert!(panel.contains("Player: Tess | Health: 100"));
        assert!(panel.contains("Moves Remaining: 10"));
        assert!(panel.contains("Enemy: Shadow Stalker - A stealthy, dark creature."));
    }

    #[test]
    fn test_status_panel_after_escaping() {
        let mut session = GameSession::new("Tess");
        for _ in 0..5 {
            session.resolve_turn(Action::Bypass).unwrap();
        }
        let panel = TextDisplay::new().status_panel(&session.snapshot());
        assert!(panel.contains("You are outside the dungeon."));
    }

    #[test]
    fn test_action_menu_lists_all_four_actions() {
        let menu = TextDisplay::new().action_menu();
        assert!(menu.contains("1. Fight enemy"));
        assert!(menu.contains("2. Attempt to bypass"));
        assert!(menu.contains("3. Backtrack to previous room"));
        assert!(menu.contains("4. Quit game"));
    }

    #[test]
    fn test_game_over_shows_final_message_and_stats() {
        let mut session = GameSession::new("Tess");
        session.resolve_turn(Action::Fight).unwrap();
        session.resolve_turn(Action::Quit).unwrap();
        let screen = TextDisplay::new().game_over(&session.snapshot());
        assert!(screen.contains("======== GAME OVER ========"));
        assert!(screen.contains("You have quit the dungeon."));
        assert!(screen.contains("Coins Collected: 10"));
        assert!(screen.contains("Inventory (Sorted): 5 Coins, Armour"));
    }
}
