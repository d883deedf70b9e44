//! Property tests for the turn engine's state-machine invariants.

use dungeon_escape::{Action, Character, CompletionState, GameSession};
use proptest::prelude::*;

fn action_strategy() -> impl Strategy<Value = Action> {
    prop_oneof![
        4 => Just(Action::Fight),
        4 => Just(Action::Bypass),
        4 => Just(Action::Backtrack),
        1 => Just(Action::Quit),
    ]
}

proptest! {
    /// No sequence of actions can break the health cap, overdraw moves,
    /// leave a running session without a current room, or stretch the
    /// visited path beyond the turns taken.
    #[test]
    fn session_invariants_hold_for_any_action_sequence(
        actions in prop::collection::vec(action_strategy(), 0..25)
    ) {
        let mut session = GameSession::new("Prop");
        let starting_moves = session.player().moves();

        for (turn, action) in actions.into_iter().enumerate() {
            if session.is_over() {
                // A finished session rejects further turns without mutating.
                let before = session.snapshot();
                prop_assert!(session.resolve_turn(action).is_err());
                prop_assert_eq!(session.snapshot(), before);
                continue;
            }

            let report = session.resolve_turn(action).unwrap();

            prop_assert!(session.player().health() <= 100);
            prop_assert_eq!(
                session.player().moves(),
                starting_moves - (turn as u32 + 1).min(starting_moves)
            );
            prop_assert!(session.dungeon().visited_depth() <= turn + 2);
            match report.outcome {
                CompletionState::Playing => {
                    prop_assert!(session.current_room().is_some());
                    prop_assert!(report.final_message.is_none());
                }
                _ => {
                    prop_assert!(session.is_over());
                    prop_assert!(report.final_message.is_some());
                }
            }
        }
    }

    /// Every session ends within the move budget: moves run out after ten
    /// turns at the latest, and the engine reports a terminal outcome.
    #[test]
    fn sessions_always_terminate_within_the_move_budget(
        actions in prop::collection::vec(action_strategy(), 10)
    ) {
        let mut session = GameSession::new("Prop");
        for action in actions {
            if session.is_over() {
                break;
            }
            session.resolve_turn(action).unwrap();
        }
        prop_assert!(session.is_over());
        prop_assert!(session.final_message().is_some());
    }
}
