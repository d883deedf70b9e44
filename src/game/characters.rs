//! # Character Module
//!
//! Player and enemy state, plus the small shared character capability.
//!
//! Both concrete kinds share a name and a health figure with the same
//! clamping rule (health never goes below zero), but interpret health
//! differently: a player's health is hit points, an enemy's health is the
//! threshold a player must meet to defeat it.

use crate::config;
use crate::utils::format_item_list;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Common capability of anything with a name and a health figure.
///
/// Only two concrete kinds exist ([`Player`] and [`Enemy`]); the trait is a
/// closed seam so views can summarize either one without knowing which.
pub trait Character {
    /// The character's name.
    fn name(&self) -> &str;

    /// The character's health figure (hit points or defeat threshold).
    fn health(&self) -> u32;

    /// One-line textual summary, distinct per concrete kind.
    fn status_line(&self) -> String;
}

/// The player: health, moves, coins, defeated-enemy count, and inventory.
///
/// Created once per session and mutated only by the turn engine. Health is
/// capped at [`config::MAX_HEALTH`] and floored at 0; moves never go
/// negative.
///
/// # Examples
///
/// ```
/// use dungeon_escape::{Character, Player};
///
/// let player = Player::new("Aria");
/// assert_eq!(player.health(), 100);
/// assert_eq!(player.moves(), 10);
/// assert!(player.inventory().is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    name: String,
    health: u32,
    moves: u32,
    coins: u32,
    enemies_defeated: u32,
    inventory: Vec<String>,
}

impl Player {
    /// Creates a new player with starting stats and an empty inventory.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            health: config::STARTING_HEALTH,
            moves: config::STARTING_MOVES,
            coins: 0,
            enemies_defeated: 0,
            inventory: Vec::new(),
        }
    }

    /// Reduces health by `amount`, floored at 0.
    pub fn take_damage(&mut self, amount: u32) {
        self.health = self.health.saturating_sub(amount);
    }

    /// Restores health by `amount`, capped at [`config::MAX_HEALTH`].
    pub fn heal(&mut self, amount: u32) {
        self.health = self.health.saturating_add(amount).min(config::MAX_HEALTH);
    }

    /// Appends an item to the inventory; insertion order is preserved until
    /// [`Player::sort_inventory`] runs.
    pub fn add_to_inventory(&mut self, item: impl Into<String>) {
        self.inventory.push(item.into());
    }

    /// Sorts the inventory ascending by case-insensitive comparison.
    ///
    /// The sort is stable, so items equal under case folding keep their
    /// insertion order, and repeated sorts are deterministic.
    pub fn sort_inventory(&mut self) {
        self.inventory
            .sort_by(|a, b| a.to_lowercase().cmp(&b.to_lowercase()));
    }

    /// Adds coins to the player's purse.
    pub fn add_coins(&mut self, amount: u32) {
        self.coins += amount;
    }

    /// Consumes one move. Moves never go below zero.
    pub fn use_move(&mut self) {
        if self.moves > 0 {
            self.moves -= 1;
        }
    }

    /// Records one defeated enemy.
    pub fn increment_enemies_defeated(&mut self) {
        self.enemies_defeated += 1;
    }

    /// Moves remaining this session.
    pub fn moves(&self) -> u32 {
        self.moves
    }

    /// Coins collected so far.
    pub fn coins(&self) -> u32 {
        self.coins
    }

    /// Enemies defeated so far.
    pub fn enemies_defeated(&self) -> u32 {
        self.enemies_defeated
    }

    /// Read-only view of the inventory, in its current order.
    pub fn inventory(&self) -> &[String] {
        &self.inventory
    }
}

impl Character for Player {
    fn name(&self) -> &str {
        &self.name
    }

    fn health(&self) -> u32 {
        self.health
    }

    fn status_line(&self) -> String {
        format!("Player: {} | Health: {}", self.name, self.health)
    }
}

impl fmt::Display for Player {
    /// The end-of-game stats block shown with a sorted inventory.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "--- Player Stats ---")?;
        writeln!(f, "Name: {}", self.name)?;
        writeln!(f, "Health: {}", self.health)?;
        writeln!(f, "Moves Left: {}", self.moves)?;
        writeln!(f, "Coins Collected: {}", self.coins)?;
        writeln!(f, "Enemies Defeated: {}", self.enemies_defeated)?;
        writeln!(f, "Inventory (Sorted): {}", format_item_list(&self.inventory))?;
        write!(f, "--------------------")
    }
}

/// An enemy guarding one room.
///
/// Immutable after construction. `health` is the health a player must have
/// to defeat this enemy, not the enemy's own hit points.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Enemy {
    name: String,
    health: u32,
    description: String,
}

impl Enemy {
    /// Creates a new enemy with a defeat threshold of `health`.
    pub fn new(name: impl Into<String>, description: impl Into<String>, health: u32) -> Self {
        Self {
            name: name.into(),
            health,
            description: description.into(),
        }
    }

    /// Flavor text describing the enemy.
    pub fn description(&self) -> &str {
        &self.description
    }
}

impl Character for Enemy {
    fn name(&self) -> &str {
        &self.name
    }

    fn health(&self) -> u32 {
        self.health
    }

    fn status_line(&self) -> String {
        format!(
            "Enemy: {} | Health Required to Win: {}",
            self.name, self.health
        )
    }
}
