//! Reference game on a 10x10 board with 2 players and 3 areas each

use gamma::core::{Game, MoveError, MoveKind};

const FINAL_BOARD: &str = "\
1.........
..........
..........
......2...
.....1....
..........
..........
1.........
1222......
1.........
";

/// (player, x, y, accepted, owned by 1, owned by 2, free for 1, free for 2)
const SEQUENCE: [(u32, u32, u32, bool, u64, u64, u64, u64); 12] = [
    (1, 0, 0, true, 1, 0, 99, 99),
    (2, 3, 1, true, 1, 1, 98, 98),
    (1, 0, 2, true, 2, 1, 97, 97),
    (1, 0, 9, true, 3, 1, 6, 96),
    (1, 5, 5, false, 3, 1, 6, 96),
    (1, 0, 1, true, 4, 1, 95, 95),
    (1, 5, 5, true, 5, 1, 10, 94),
    (1, 6, 6, false, 5, 1, 10, 94),
    (2, 2, 1, true, 5, 2, 10, 93),
    (2, 1, 1, true, 5, 3, 9, 92),
    (2, 0, 1, false, 5, 3, 9, 92),
    (2, 6, 6, true, 5, 4, 9, 91),
];

#[test]
fn test_golden_sequence_counters() {
    let mut game = Game::new(10, 10, 2, 3).unwrap();

    for (i, &(p, x, y, accepted, own1, own2, free1, free2)) in SEQUENCE.iter().enumerate() {
        assert_eq!(game.place_marker(p, x, y), accepted, "move {} ({p} at {x},{y})", i + 1);
        assert_eq!(game.owned_field_count(1), own1, "owned(1) after move {}", i + 1);
        assert_eq!(game.owned_field_count(2), own2, "owned(2) after move {}", i + 1);
        assert_eq!(game.free_field_count(1), free1, "free(1) after move {}", i + 1);
        assert_eq!(game.free_field_count(2), free2, "free(2) after move {}", i + 1);
    }

    assert_eq!(game.render_board().unwrap(), FINAL_BOARD);
    assert_eq!(game.to_string(), FINAL_BOARD);
}

#[test]
fn test_golden_sequence_internal_counters() {
    let mut game = Game::new(10, 10, 2, 3).unwrap();
    for &(p, x, y, ..) in &SEQUENCE {
        game.place_marker(p, x, y);
    }

    let p1 = game.player_state(1).unwrap();
    assert_eq!(
        (p1.boundary(), p1.busy_areas(), p1.completed_moves()),
        (9, 3, 5)
    );
    let p2 = game.player_state(2).unwrap();
    assert_eq!(
        (p2.boundary(), p2.busy_areas(), p2.completed_moves()),
        (10, 2, 4)
    );
    assert_eq!(game.claimed_field_count(), 9);
}

#[test]
fn test_golden_sequence_rejection_reasons() {
    let mut game = Game::new(10, 10, 2, 3).unwrap();
    for &(p, x, y, ..) in &SEQUENCE[..4] {
        game.place_marker(p, x, y);
    }

    assert_eq!(
        game.try_place(1, 5, 5),
        Err(MoveError::AreaLimit { player: 1, limit: 3 })
    );
    // Two neighbouring areas count as a single distinct pair, so joining
    // (0,0) and (0,2) is an extension of the lower one that frees a slot.
    assert_eq!(game.try_place(1, 0, 1), Ok(MoveKind::Extension { area: 1 }));
    assert_eq!(game.busy_areas(1), 2);
    assert_eq!(game.field(0, 2).map(|f| f.area()), Some(2));
    assert_eq!(game.try_place(1, 5, 5), Ok(MoveKind::NewArea { area: 3 }));
    assert_eq!(game.try_place(2, 0, 1), Err(MoveError::Occupied { x: 0, y: 1 }));
}
