//! Engine integration tests.
//!
//! Scripted games covering the turn rule, double completions and ties,
//! plus property tests over random move sequences checking the scoring
//! and terminal invariants after every move.

use dots_boxes::core::{all_boxes, all_edges};
use dots_boxes::{
    BoxId, Dot, Edge, GameEngine, GameError, GameResult, GameState, MoveError, MoveOutcome,
    Player,
};
use proptest::prelude::*;

fn d(x: u8, y: u8) -> Dot {
    Dot::new(x, y)
}

/// Check every structural invariant of `state` on a grid with `size` dots.
fn assert_consistent(state: &GameState, size: u8) {
    let total = (size as usize - 1).pow(2);
    let owners = state.box_owners();

    assert_eq!(state.claimed_boxes(), owners.len());
    assert!(owners.len() <= total);
    assert_eq!(state.is_over(), state.claimed_boxes() == total);

    for player in Player::ALL {
        let owned = owners.values().filter(|&&p| p == player).count();
        assert_eq!(state.score(player) as usize, owned, "score of {}", player);
    }

    for (b, _) in owners.iter() {
        assert!(b.in_bounds(size));
        for side in b.edges().unwrap() {
            assert!(state.has_edge(&side), "{} owned without {}", b, side);
        }
    }
}

// =============================================================================
// Scripted games
// =============================================================================

/// Three sides of box (0,0) toggle the turn each time; the fourth side,
/// drawn by player 2, claims the box and keeps the turn with player 2.
#[test]
fn test_first_box_scenario() {
    let mut engine = GameEngine::with_size(3).unwrap();
    let mut turns = vec![engine.state().current_player()];

    for (a, b) in [(d(0, 0), d(1, 0)), (d(0, 0), d(0, 1)), (d(1, 0), d(1, 1))] {
        let placed = engine.place_edge(a, b).unwrap();
        assert_eq!(placed.outcome, MoveOutcome::NoBoxCompleted);
        turns.push(engine.state().current_player());
    }
    assert_eq!(turns, vec![Player::One, Player::Two, Player::One, Player::Two]);
    assert_eq!(engine.owner_of(BoxId::new(0, 0)), None);

    let placed = engine.place_edge(d(0, 1), d(1, 1)).unwrap();
    assert_eq!(placed.player, Player::Two);
    assert_eq!(placed.outcome, MoveOutcome::BoxCompleted(1));
    assert_eq!(engine.owner_of(BoxId::new(0, 0)), Some(Player::Two));
    assert_eq!(engine.state().player1_score(), 0);
    assert_eq!(engine.state().player2_score(), 1);
    assert_eq!(engine.state().current_player(), Player::Two);
}

/// A full 2×2-box game that ends 2-2. Player 1 takes the left column with
/// two separate moves; player 2 takes the right column with one edge.
#[test]
fn test_tie_game() {
    let mut engine = GameEngine::with_size(3).unwrap();

    let script = [
        (d(1, 0), d(2, 0), Player::One, MoveOutcome::NoBoxCompleted),
        (d(0, 0), d(1, 0), Player::Two, MoveOutcome::NoBoxCompleted),
        (d(0, 0), d(0, 1), Player::One, MoveOutcome::NoBoxCompleted),
        (d(0, 1), d(1, 1), Player::Two, MoveOutcome::NoBoxCompleted),
        (d(1, 0), d(1, 1), Player::One, MoveOutcome::BoxCompleted(1)),
        (d(0, 2), d(1, 2), Player::One, MoveOutcome::NoBoxCompleted),
        (d(0, 1), d(0, 2), Player::Two, MoveOutcome::NoBoxCompleted),
        (d(1, 1), d(1, 2), Player::One, MoveOutcome::BoxCompleted(1)),
        (d(2, 0), d(2, 1), Player::One, MoveOutcome::NoBoxCompleted),
        (d(1, 2), d(2, 2), Player::Two, MoveOutcome::NoBoxCompleted),
        (d(2, 1), d(2, 2), Player::One, MoveOutcome::NoBoxCompleted),
        (
            d(1, 1),
            d(2, 1),
            Player::Two,
            MoveOutcome::GameOver(GameResult::Tie),
        ),
    ];

    for (i, (a, b, mover, outcome)) in script.into_iter().enumerate() {
        assert_eq!(engine.state().current_player(), mover, "move {}", i + 1);
        let placed = engine.place_edge(a, b).unwrap();
        assert_eq!(placed.outcome, outcome, "move {}", i + 1);
        assert_consistent(engine.state(), 3);
    }

    assert!(engine.state().is_over());
    assert_eq!(engine.state().player1_score(), 2);
    assert_eq!(engine.state().player2_score(), 2);
    assert_eq!(engine.result(), Some(GameResult::Tie));
    assert_eq!(engine.owner_of(BoxId::new(0, 0)), Some(Player::One));
    assert_eq!(engine.owner_of(BoxId::new(0, 1)), Some(Player::One));
    assert_eq!(engine.owner_of(BoxId::new(1, 0)), Some(Player::Two));
    assert_eq!(engine.owner_of(BoxId::new(1, 1)), Some(Player::Two));
}

/// The last edge closing two boxes is credited +2 to the mover in one call.
#[test]
fn test_shared_edge_credits_both_boxes() {
    let mut engine = GameEngine::with_size(4).unwrap();

    // Surround boxes (1,1) and (1,2), leaving their shared side (1,2)-(2,2).
    let surround = [
        (d(1, 1), d(2, 1)),
        (d(1, 1), d(1, 2)),
        (d(2, 1), d(2, 2)),
        (d(1, 2), d(1, 3)),
        (d(2, 2), d(2, 3)),
        (d(1, 3), d(2, 3)),
    ];
    for (a, b) in surround {
        engine.place_edge(a, b).unwrap();
    }
    let mover = engine.state().current_player();
    let before = engine.state().score(mover);

    let placed = engine.place_edge(d(2, 2), d(1, 2)).unwrap();

    assert_eq!(placed.outcome, MoveOutcome::BoxCompleted(2));
    assert_eq!(placed.claimed.as_slice(), &[BoxId::new(1, 1), BoxId::new(1, 2)]);
    assert_eq!(engine.state().score(mover), before + 2);
    assert_eq!(engine.state().score(mover.other()), 0);
    assert_eq!(engine.state().current_player(), mover);
}

#[test]
fn test_duplicate_rejection_is_idempotent() {
    let mut engine = GameEngine::with_size(3).unwrap();
    engine.place_edge(d(1, 1), d(1, 2)).unwrap();
    let before = engine.snapshot();

    let first = engine.place_edge(d(1, 1), d(1, 2));
    let after_first = engine.snapshot();
    let second = engine.place_edge(d(1, 2), d(1, 1));

    assert_eq!(first, Err(GameError::InvalidMove(MoveError::DuplicateEdge)));
    assert_eq!(first, second);
    assert_eq!(before, after_first);
    assert_eq!(&before, engine.state());
}

#[test]
fn test_nothing_succeeds_after_game_over() {
    let mut engine = GameEngine::with_size(3).unwrap();
    for edge in all_edges(3).collect::<Vec<_>>() {
        engine.place(edge).unwrap();
    }
    assert!(engine.state().is_over());
    assert_eq!(engine.available_edges().count(), 0);

    for edge in all_edges(3) {
        assert_eq!(
            engine.place_edge(edge.start(), edge.end()),
            Err(GameError::InvalidMove(MoveError::GameOver))
        );
    }
}

#[test]
fn test_reset_to_new_size() {
    let mut engine = GameEngine::with_size(3).unwrap();
    engine.place_edge(d(0, 0), d(1, 0)).unwrap();
    engine.place_edge(d(0, 0), d(0, 1)).unwrap();

    let state = engine.reset_with_size(4).unwrap().clone();

    assert!(state.placed_edges().is_empty());
    assert!(state.box_owners().is_empty());
    assert_eq!(state.player1_score(), 0);
    assert_eq!(state.player2_score(), 0);
    assert_eq!(state.current_player(), Player::One);
    assert!(!state.is_over());
    assert_eq!(engine.total_boxes(), 9);
}

#[test]
fn test_snapshot_survives_later_moves() {
    let mut engine = GameEngine::with_size(3).unwrap();
    let placed = engine.place_edge(d(0, 0), d(1, 0)).unwrap();
    engine.place_edge(d(0, 0), d(0, 1)).unwrap();

    assert_eq!(placed.state.placed_edges().len(), 1);
    assert_eq!(engine.state().placed_edges().len(), 2);
}

// =============================================================================
// Property tests
// =============================================================================

/// A requested move: a dot and a direction to its neighbour.
/// Directions off the low edge of the grid reuse the dot itself, which the
/// engine must reject as not adjacent.
fn request(x: u8, y: u8, dir: u8) -> (Dot, Dot) {
    let a = d(x, y);
    let b = match dir {
        0 => d(x + 1, y),
        1 => d(x, y + 1),
        2 => x.checked_sub(1).map_or(a, |x| d(x, y)),
        _ => y.checked_sub(1).map_or(a, |y| d(x, y)),
    };
    (a, b)
}

proptest! {
    #[test]
    fn prop_invariants_hold_after_every_request(
        size in 2usize..=6,
        requests in prop::collection::vec((0u8..7, 0u8..7, 0u8..4), 0..150),
    ) {
        let mut engine = GameEngine::with_size(size).unwrap();
        let size = size as u8;

        for (x, y, dir) in requests {
            let (a, b) = request(x, y, dir);
            let before = engine.snapshot();

            match engine.place_edge(a, b) {
                Ok(placed) => {
                    let after = engine.state();
                    prop_assert!(!before.is_over());
                    prop_assert_eq!(after.placed_edges().len(), before.placed_edges().len() + 1);
                    prop_assert_eq!(placed.player, before.current_player());

                    let gained = after.score(placed.player) - before.score(placed.player);
                    prop_assert_eq!(gained as usize, placed.claimed.len());

                    if !after.is_over() {
                        if placed.claimed.is_empty() {
                            prop_assert_eq!(after.current_player(), before.current_player().other());
                        } else {
                            prop_assert_eq!(after.current_player(), before.current_player());
                        }
                    }
                }
                Err(err) => {
                    prop_assert_eq!(engine.state(), &before);
                    if before.is_over() {
                        prop_assert_eq!(err, GameError::InvalidMove(MoveError::GameOver));
                    }
                }
            }

            assert_consistent(engine.state(), size);
            prop_assert_eq!(engine.is_edge_placed(a, b), engine.is_edge_placed(b, a));
        }
    }

    #[test]
    fn prop_random_games_finish(size in 2usize..=7, seed in prop::collection::vec(any::<prop::sample::Index>(), 84)) {
        let mut engine = GameEngine::with_size(size).unwrap();
        let total_edges = engine.config().total_edges();

        for pick in seed.iter().cycle().take(total_edges) {
            let available: Vec<Edge> = engine.available_edges().collect();
            let edge = *pick.get(available.as_slice());
            engine.place(edge).unwrap();
        }

        let state = engine.state();
        prop_assert!(state.is_over());
        prop_assert_eq!(state.placed_edges().len(), total_edges);
        prop_assert_eq!(state.claimed_boxes(), engine.total_boxes());
        for b in all_boxes(size as u8) {
            prop_assert!(state.owner(b).is_some());
        }

        let result = engine.result().unwrap();
        match state.player1_score().cmp(&state.player2_score()) {
            std::cmp::Ordering::Greater => prop_assert_eq!(result, GameResult::Winner(Player::One)),
            std::cmp::Ordering::Less => prop_assert_eq!(result, GameResult::Winner(Player::Two)),
            std::cmp::Ordering::Equal => prop_assert_eq!(result, GameResult::Tie),
        }
    }

    #[test]
    fn prop_edge_identity_is_orientation_independent(x in 0u8..10, y in 0u8..10, dir in 0u8..4) {
        let (a, b) = request(x, y, dir);
        prop_assert_eq!(Edge::new(a, b), Edge::new(b, a));
    }
}
