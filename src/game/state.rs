//! # Session State Module
//!
//! The turn-resolution engine and its external interface.
//!
//! A [`GameSession`] owns one `Player` and one `Dungeon` and is the only
//! code that mutates either. Front ends drive it with one [`Action`] per
//! turn through [`GameSession::resolve_turn`] and observe it through
//! [`GameSession::snapshot`]; nothing here knows how the game is displayed.
//!
//! Each turn is a single synchronous state transition: one move is consumed
//! unconditionally, the action's effects are applied, and the terminal
//! conditions are evaluated in fixed priority order (escape, critical
//! health, out of moves).

use crate::game::{Action, Character, Dungeon, Player, Room};
use crate::{config, DungeonError, DungeonResult};
use log::{debug, info};
use serde::{Deserialize, Serialize};

/// Why a session was lost.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DefeatReason {
    /// Health dropped below the critical threshold
    CriticalHealth,
    /// All moves were spent without escaping
    OutOfMoves,
}

/// Whether the session is still running, and if not, how it ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CompletionState {
    /// The session is still in progress
    Playing,
    /// The player escaped past the final room
    Escaped,
    /// The player lost
    Defeated(DefeatReason),
    /// The player quit
    Quit,
}

impl CompletionState {
    /// True once the session has ended for any reason.
    pub fn is_terminal(self) -> bool {
        self != CompletionState::Playing
    }
}

/// The result of one resolved turn, handed back to the front end.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnReport {
    /// Human-readable description of what the action did
    pub message: String,
    /// Session state after the turn
    pub outcome: CompletionState,
    /// End-of-game message, present only on a terminal outcome
    pub final_message: Option<String>,
}

/// Read-only view of the player for presentation layers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerView {
    pub name: String,
    pub health: u32,
    pub moves: u32,
    pub coins: u32,
    pub enemies_defeated: u32,
    /// Snapshot copy; mutating it cannot touch the session
    pub inventory: Vec<String>,
}

/// Read-only view of the current room for presentation layers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomView {
    pub name: String,
    pub enemy_name: String,
    pub enemy_description: String,
    /// Health the player must have to defeat the room's enemy
    pub enemy_health_required: u32,
    pub challenge: String,
}

/// Everything a view needs to render one frame of the game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub player: PlayerView,
    /// `None` before the first room and after the catalog is exhausted
    pub room: Option<RoomView>,
    /// Outcome message of the most recent turn
    pub message: String,
    pub completion: CompletionState,
    pub final_message: Option<String>,
    pub turn_number: u64,
}

/// One playthrough: a player, a dungeon, and the turn engine over both.
///
/// A session enters the first room on construction, so a current room
/// exists from the first turn onward while the game is running. Sessions
/// are single-threaded and turn-synchronous; there is no partial turn to
/// observe.
///
/// # Examples
///
/// ```
/// use dungeon_escape::{Action, CompletionState, GameSession};
///
/// let mut session = GameSession::new("Aria");
/// assert_eq!(session.completion_state(), CompletionState::Playing);
///
/// let report = session.resolve_turn(Action::Bypass).unwrap();
/// assert_eq!(report.message, "You bypassed the enemy, taking minor damage.");
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameSession {
    player: Player,
    dungeon: Dungeon,
    turn_number: u64,
    completion: CompletionState,
    last_message: String,
    final_message: Option<String>,
}

impl GameSession {
    /// Starts a session over the stock catalog.
    pub fn new(player_name: impl Into<String>) -> Self {
        Self::with_dungeon(player_name, Dungeon::new())
    }

    /// Starts a session over a caller-supplied dungeon.
    pub fn with_dungeon(player_name: impl Into<String>, mut dungeon: Dungeon) -> Self {
        let player = Player::new(player_name);
        let entry_message = match dungeon.advance_to_next_room() {
            Some(room) => format!("You have entered the {} room.", room.name()),
            None => String::from("The dungeon has no rooms."),
        };
        let mut session = Self {
            player,
            dungeon,
            turn_number: 0,
            completion: CompletionState::Playing,
            last_message: entry_message,
            final_message: None,
        };
        // An empty catalog is escaped on arrival.
        if session.dungeon.is_exhausted() {
            session.finish(CompletionState::Escaped, "Congratulations! You escaped!");
        }
        session
    }

    /// Resolves one turn for the given action.
    ///
    /// Every turn consumes exactly one move before the action's own effects
    /// apply. Returns an error only if the session has already ended; every
    /// in-game edge case (exhausted catalog, failed backtrack) resolves to a
    /// normal report instead.
    pub fn resolve_turn(&mut self, action: Action) -> DungeonResult<TurnReport> {
        self.begin_turn()?;
        debug!("turn {}: {:?}", self.turn_number, action);

        let message = match action {
            Action::Fight => self.resolve_fight(),
            Action::Bypass => self.resolve_bypass(),
            Action::Backtrack => self.resolve_backtrack(),
            Action::Quit => {
                self.finish(CompletionState::Quit, "You have quit the dungeon.");
                String::from("You have quit the dungeon.")
            }
        };

        Ok(self.end_turn(message))
    }

    /// Resolves a turn for an unrecognized action code.
    ///
    /// The move is still consumed and the player is told they hesitated;
    /// running out of moves this way still loses the game.
    pub fn waste_turn(&mut self) -> DungeonResult<TurnReport> {
        self.begin_turn()?;
        debug!("turn {}: unrecognized action", self.turn_number);
        Ok(self.end_turn(String::from(
            "Invalid choice. You hesitate and lose a turn.",
        )))
    }

    fn begin_turn(&mut self) -> DungeonResult<()> {
        if self.completion.is_terminal() {
            return Err(DungeonError::InvalidState(String::from(
                "session has already ended",
            )));
        }
        self.turn_number += 1;
        self.player.use_move();
        Ok(())
    }

    fn resolve_fight(&mut self) -> String {
        let Some(room) = self.dungeon.current_room() else {
            return String::from("There is no enemy here to fight.");
        };
        let enemy_name = room.enemy().name().to_string();
        let threshold = room.enemy().health();
        let item1 = room.treasure().item1().to_string();
        let item2 = room.treasure().item2().to_string();

        if self.player.health() >= threshold {
            self.player.take_damage(threshold);
            self.player.add_to_inventory(item1);
            self.player.add_to_inventory(item2);
            self.player.add_coins(config::FIGHT_COIN_REWARD);
            self.player.increment_enemies_defeated();
            info!(
                "{} defeated {} ({} health spent)",
                self.player.name(),
                enemy_name,
                threshold
            );
            self.dungeon.advance_to_next_room();
            format!("Victory! You defeated the {}.", enemy_name)
        } else {
            self.player.take_damage(config::FAILED_FIGHT_DAMAGE);
            String::from("Too weak! You fled and took damage.")
        }
    }

    fn resolve_bypass(&mut self) -> String {
        self.player.take_damage(config::BYPASS_DAMAGE);
        self.dungeon.advance_to_next_room();
        String::from("You bypassed the enemy, taking minor damage.")
    }

    fn resolve_backtrack(&mut self) -> String {
        match self.dungeon.backtrack() {
            Some(room) => format!("You backtracked to the {} room.", room.name()),
            None => String::from("No room to backtrack to!"),
        }
    }

    /// Evaluates terminal conditions in fixed priority order and records the
    /// turn's outcome. Escaping wins even if the final fight left health
    /// below the critical threshold.
    fn end_turn(&mut self, message: String) -> TurnReport {
        if self.completion == CompletionState::Playing {
            if self.dungeon.is_exhausted() {
                self.finish(CompletionState::Escaped, "Congratulations! You escaped!");
            } else if self.player.health() < config::CRITICAL_HEALTH {
                self.finish(
                    CompletionState::Defeated(DefeatReason::CriticalHealth),
                    "Game Over! Your health is critical.",
                );
            } else if self.player.moves() == 0 {
                self.finish(
                    CompletionState::Defeated(DefeatReason::OutOfMoves),
                    "Game Over! You ran out of moves.",
                );
            }
        }
        self.last_message = message.clone();
        TurnReport {
            message,
            outcome: self.completion,
            final_message: self.final_message.clone(),
        }
    }

    fn finish(&mut self, state: CompletionState, message: &str) {
        self.completion = state;
        self.final_message = Some(message.to_string());
        // Final stats always report a sorted inventory.
        self.player.sort_inventory();
        info!(
            "session over for {} after {} turns: {:?}",
            self.player.name(),
            self.turn_number,
            state
        );
    }

    /// The player being run by this session.
    pub fn player(&self) -> &Player {
        &self.player
    }

    /// The dungeon being navigated by this session.
    pub fn dungeon(&self) -> &Dungeon {
        &self.dungeon
    }

    /// The room the player currently stands in, if any.
    pub fn current_room(&self) -> Option<&Room> {
        self.dungeon.current_room()
    }

    /// Current completion state.
    pub fn completion_state(&self) -> CompletionState {
        self.completion
    }

    /// True once the session has ended.
    pub fn is_over(&self) -> bool {
        self.completion.is_terminal()
    }

    /// Outcome message of the most recent turn (or the entry message).
    pub fn last_message(&self) -> &str {
        &self.last_message
    }

    /// End-of-game message, if the session has ended.
    pub fn final_message(&self) -> Option<&str> {
        self.final_message.as_deref()
    }

    /// Number of turns resolved so far.
    pub fn turn_number(&self) -> u64 {
        self.turn_number
    }

    /// Builds the read-only view a presentation layer renders from.
    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            player: PlayerView {
                name: self.player.name().to_string(),
                health: self.player.health(),
                moves: self.player.moves(),
                coins: self.player.coins(),
                enemies_defeated: self.player.enemies_defeated(),
                inventory: self.player.inventory().to_vec(),
            },
            room: self.dungeon.current_room().map(|room| RoomView {
                name: room.name().to_string(),
                enemy_name: room.enemy().name().to_string(),
                enemy_description: room.enemy().description().to_string(),
                enemy_health_required: room.enemy().health(),
                challenge: room.challenge().to_string(),
            }),
            message: self.last_message.clone(),
            completion: self.completion,
            final_message: self.final_message.clone(),
            turn_number: self.turn_number,
        }
    }
}
