//! # Dungeon Module
//!
//! Navigation over the fixed room catalog: a cursor, a visited stack, and
//! the rules text shown before play.
//!
//! The visited stack holds catalog *indices*, never room references, so it
//! can neither outlive the catalog nor imply ownership of a room. Its top is
//! always the room the player currently stands in; the entries beneath it
//! are the forward path taken from the first room.

use crate::game::{standard_rooms, Room};
use serde::{Deserialize, Serialize};

/// Where the navigation cursor currently points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
enum Cursor {
    /// Before the first advance; no current room yet
    BeforeStart,
    /// Inside the catalog at the given index
    At(usize),
    /// Past the last room; the dungeon has been escaped
    Exhausted,
}

/// The dungeon: an immutable room catalog plus navigation state.
///
/// # Examples
///
/// ```
/// use dungeon_escape::Dungeon;
///
/// let mut dungeon = Dungeon::new();
/// assert!(dungeon.current_room().is_none());
///
/// let first = dungeon.advance_to_next_room().unwrap();
/// assert_eq!(first.name(), "Base");
/// assert_eq!(dungeon.visited_depth(), 1);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Dungeon {
    rooms: Vec<Room>,
    cursor: Cursor,
    visited: Vec<usize>,
}

impl Dungeon {
    /// Creates a dungeon over the stock five-room catalog.
    pub fn new() -> Self {
        Self::with_rooms(standard_rooms())
    }

    /// Creates a dungeon over an arbitrary ordered catalog.
    pub fn with_rooms(rooms: Vec<Room>) -> Self {
        Self {
            rooms,
            cursor: Cursor::BeforeStart,
            visited: Vec::new(),
        }
    }

    /// The multi-line rules text shown before play begins.
    pub fn rules() -> &'static str {
        "Welcome to Dungeon Escape!\n\
         Rules:\n\
         1. You have 10 moves to escape the dungeon.\n\
         2. Each room has an enemy, a treasure, and a challenge.\n\
         3. Defeating enemies gets you treasure.\n\
         4. If your health drops below 20, you lose.\n\
         5. Clear the final room to win.\n\
         Good luck!"
    }

    /// The room the cursor points at, if any.
    ///
    /// Bounds handling is the dungeon's own responsibility: before the first
    /// advance and after the catalog is exhausted this returns `None`, never
    /// an error.
    pub fn current_room(&self) -> Option<&Room> {
        match self.cursor {
            Cursor::At(index) => self.rooms.get(index),
            Cursor::BeforeStart | Cursor::Exhausted => None,
        }
    }

    /// Steps forward to the next room in the catalog.
    ///
    /// Every successful advance pushes the newly entered room's index onto
    /// the visited stack, keeping the stack equal to the forward path ending
    /// at the current room. Stepping past the last room marks the catalog
    /// exhausted and returns `None`; every advance after that also returns
    /// `None` and never a stale or duplicate room.
    pub fn advance_to_next_room(&mut self) -> Option<&Room> {
        let next = match self.cursor {
            Cursor::BeforeStart => 0,
            Cursor::At(index) => index + 1,
            Cursor::Exhausted => return None,
        };
        if next < self.rooms.len() {
            self.cursor = Cursor::At(next);
            self.visited.push(next);
            self.rooms.get(next)
        } else {
            self.cursor = Cursor::Exhausted;
            None
        }
    }

    /// Steps back to the previous room on the visited path.
    ///
    /// Backtracking needs more than one visited entry: the current room is
    /// popped and the new stack top becomes the active catalog position.
    /// With one entry or none there is
    /// nowhere to go back to; nothing is mutated and `None` is returned.
    ///
    /// A backtrack discards only one level of history. The next advance
    /// pushes a fresh entry on top of the truncated stack, so forward
    /// history beyond the backtrack point is not resurrected.
    pub fn backtrack(&mut self) -> Option<&Room> {
        if self.visited.len() <= 1 {
            return None;
        }
        self.visited.pop();
        let index = *self.visited.last()?;
        self.cursor = Cursor::At(index);
        self.rooms.get(index)
    }

    /// Number of rooms on the visited path (current room included).
    pub fn visited_depth(&self) -> usize {
        self.visited.len()
    }

    /// Number of rooms in the catalog.
    pub fn room_count(&self) -> usize {
        self.rooms.len()
    }

    /// Whether the catalog has been walked off its far end.
    pub fn is_exhausted(&self) -> bool {
        self.cursor == Cursor::Exhausted
    }

    /// The full catalog, in order.
    pub fn rooms(&self) -> &[Room] {
        &self.rooms
    }
}

impl Default for Dungeon {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_dungeon_has_no_current_room() {
        let dungeon = Dungeon::new();
        assert!(dungeon.current_room().is_none());
        assert_eq!(dungeon.visited_depth(), 0);
        assert!(!dungeon.is_exhausted());
    }

    #[test]
    fn test_advance_walks_catalog_in_order() {
        let mut dungeon = Dungeon::new();
        let mut names = Vec::new();
        while let Some(room) = dungeon.advance_to_next_room() {
            names.push(room.name().to_string());
        }
        assert_eq!(names, ["Base", "Bronze", "Platinum", "Silver", "Gold"]);
        assert!(dungeon.is_exhausted());
    }

    #[test]
    fn test_advance_past_end_keeps_returning_none() {
        let mut dungeon = Dungeon::new();
        for _ in 0..dungeon.room_count() {
            assert!(dungeon.advance_to_next_room().is_some());
        }
        for _ in 0..3 {
            assert!(dungeon.advance_to_next_room().is_none());
            assert!(dungeon.current_room().is_none());
        }
        // The visited path is exactly the full forward walk, nothing stale.
        assert_eq!(dungeon.visited_depth(), dungeon.room_count());
    }

    #[test]
    fn test_backtrack_before_start_mutates_nothing() {
        let mut dungeon = Dungeon::new();
        assert!(dungeon.backtrack().is_none());
        assert!(dungeon.current_room().is_none());
        assert_eq!(dungeon.visited_depth(), 0);
    }

    #[test]
    fn test_backtrack_in_first_room_mutates_nothing() {
        let mut dungeon = Dungeon::new();
        dungeon.advance_to_next_room();
        assert!(dungeon.backtrack().is_none());
        assert_eq!(dungeon.current_room().unwrap().name(), "Base");
        assert_eq!(dungeon.visited_depth(), 1);
    }

    #[test]
    fn test_backtrack_restores_previous_room() {
        let mut dungeon = Dungeon::new();
        dungeon.advance_to_next_room();
        dungeon.advance_to_next_room();
        let back = dungeon.backtrack().unwrap();
        assert_eq!(back.name(), "Base");
        assert_eq!(dungeon.current_room().unwrap().name(), "Base");
        assert_eq!(dungeon.visited_depth(), 1);
    }

    #[test]
    fn test_backtrack_then_advance_grows_from_truncated_path() {
        let mut dungeon = Dungeon::new();
        dungeon.advance_to_next_room(); // Base
        dungeon.advance_to_next_room(); // Bronze
        dungeon.advance_to_next_room(); // Platinum
        dungeon.backtrack(); // back to Bronze
        let depth_after_backtrack = dungeon.visited_depth();
        assert_eq!(depth_after_backtrack, 2);

        let room = dungeon.advance_to_next_room().unwrap();
        assert_eq!(room.name(), "Platinum");
        assert_eq!(dungeon.visited_depth(), depth_after_backtrack + 1);
    }

    #[test]
    fn test_repeated_backtrack_stops_at_first_room() {
        let mut dungeon = Dungeon::new();
        for _ in 0..3 {
            dungeon.advance_to_next_room();
        }
        assert!(dungeon.backtrack().is_some());
        assert!(dungeon.backtrack().is_some());
        assert!(dungeon.backtrack().is_none());
        assert_eq!(dungeon.current_room().unwrap().name(), "Base");
    }
}
