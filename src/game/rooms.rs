//! # Room Module
//!
//! Rooms and their contents, plus the fixed standard catalog.
//!
//! Rooms are static configuration data: the catalog is built once at dungeon
//! construction and never mutated afterwards. Any ordered set of rooms works
//! as a catalog; [`standard_rooms`] is the stock five-room run.

use crate::game::Enemy;
use serde::{Deserialize, Serialize};

/// The loot held by one room: two items and a reserved key.
///
/// `key` is carried by every room but not consumed by any current game
/// rule; it stays in the data model for room content that keys future doors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Treasure {
    item1: String,
    item2: String,
    key: String,
}

impl Treasure {
    /// Creates a treasure with two items and a key.
    pub fn new(
        item1: impl Into<String>,
        item2: impl Into<String>,
        key: impl Into<String>,
    ) -> Self {
        Self {
            item1: item1.into(),
            item2: item2.into(),
            key: key.into(),
        }
    }

    /// First item awarded when the room's enemy is defeated.
    pub fn item1(&self) -> &str {
        &self.item1
    }

    /// Second item awarded when the room's enemy is defeated.
    pub fn item2(&self) -> &str {
        &self.item2
    }

    /// The room's key. Reserved; unused by gameplay.
    pub fn key(&self) -> &str {
        &self.key
    }
}

/// One room of the dungeon: name, enemy, treasure, and a challenge text.
///
/// Immutable after construction; the catalog owns every room exclusively.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Room {
    name: String,
    enemy: Enemy,
    treasure: Treasure,
    challenge: String,
}

impl Room {
    /// Creates a room.
    pub fn new(
        name: impl Into<String>,
        enemy: Enemy,
        treasure: Treasure,
        challenge: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            enemy,
            treasure,
            challenge: challenge.into(),
        }
    }

    /// The room's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The enemy guarding this room.
    pub fn enemy(&self) -> &Enemy {
        &self.enemy
    }

    /// The treasure awarded for defeating the enemy.
    pub fn treasure(&self) -> &Treasure {
        &self.treasure
    }

    /// The room's narrative challenge.
    pub fn challenge(&self) -> &str {
        &self.challenge
    }
}

/// Builds the stock catalog: `Base → Bronze → Platinum → Silver → Gold`.
///
/// # Examples
///
/// ```
/// use dungeon_escape::{standard_rooms, Character};
///
/// let rooms = standard_rooms();
/// assert_eq!(rooms.len(), 5);
/// assert_eq!(rooms[0].name(), "Base");
/// assert_eq!(rooms[4].enemy().health(), 70);
/// ```
pub fn standard_rooms() -> Vec<Room> {
    vec![
        Room::new(
            "Base",
            Enemy::new("Shadow Stalker", "A stealthy, dark creature.", 15),
            Treasure::new("5 Coins", "Armour", "Key1"),
            "Collect 5 coins",
        ),
        Room::new(
            "Bronze",
            Enemy::new("Viper", "A venomous menace.", 25),
            Treasure::new("5 Coins", "Health Booster Potion", "Key2"),
            "Exit the room within 5 seconds",
        ),
        Room::new(
            "Platinum",
            Enemy::new("Crawler", "A fast, wall-climbing creature.", 35),
            Treasure::new("Health Booster Potion", "Armour", "Key3"),
            "Defeat the enemy without armour",
        ),
        Room::new(
            "Silver",
            Enemy::new("Hunter", "A swift and deadly assassin.", 50),
            Treasure::new("5 Coins", "Armour", "Key4"),
            "Riddle: I have no voice, but I can teach you all I know. What am I? (Answer: book)",
        ),
        Room::new(
            "Gold",
            Enemy::new("Boss", "The ultimate challenge.", 70),
            Treasure::new("5 Coins", "Health Booster Potion", "Key5"),
            "Defeat the boss",
        ),
    ]
}
