//! Adjacency queries over the board
//!
//! Stateless geometry used to classify a move and to correct the boundary
//! counter. Every query treats off-board cells as absent.

use crate::board::{Board, ORTHOGONAL};
use crate::types::PlayerId;

/// Area ids of the four orthogonal neighbours (left, right, down, up).
///
/// A slot is 0 when the neighbour is off the board or not owned by the player.
pub type NeighborAreas = [u32; 4];

/// Number of orthogonal neighbours of (x, y) owned by `owner`.
///
/// With `owner == None` this counts unclaimed neighbours instead.
pub fn orthogonal_count(board: &Board, owner: Option<PlayerId>, x: u32, y: u32) -> u32 {
    board
        .neighbors(x, y)
        .iter()
        .filter(|&&(nx, ny)| board.field(nx, ny).is_owned_by(owner))
        .count() as u32
}

/// Number of fields owned by `player` exactly two steps away along an axis.
///
/// The field in between was already counted as boundary by that other field.
pub fn distance_two_count(board: &Board, player: PlayerId, x: u32, y: u32) -> u32 {
    ORTHOGONAL
        .iter()
        .filter_map(|&(dx, dy)| board.offset(x, y, 2 * dx, 2 * dy))
        .filter(|&(nx, ny)| board.field(nx, ny).is_owned_by(Some(player)))
        .count() as u32
}

/// Unclaimed corners shared with a diagonal neighbour of the same player.
///
/// Only the (x-1, y-1) and (x+1, y+1) diagonals are inspected. For each of them
/// owned by `player`, both orthogonal cells touching (x, y) and that diagonal
/// count once when unclaimed.
pub fn diagonal_pinch_count(board: &Board, player: PlayerId, x: u32, y: u32) -> u32 {
    let mut pinches = 0;
    for d in [-1, 1] {
        let Some((dx, dy)) = board.offset(x, y, d, d) else {
            continue;
        };
        if !board.field(dx, dy).is_owned_by(Some(player)) {
            continue;
        }
        // Both corners are on the board whenever the diagonal is.
        for (cx, cy) in [(x, dy), (dx, y)] {
            if !board.field(cx, cy).is_claimed() {
                pinches += 1;
            }
        }
    }
    pinches
}

/// Area ids of the neighbours of (x, y) that belong to `player`.
pub fn neighbor_areas(board: &Board, player: PlayerId, x: u32, y: u32) -> NeighborAreas {
    let mut ids = [0; 4];
    for (slot, &(dx, dy)) in ids.iter_mut().zip(ORTHOGONAL.iter()) {
        if let Some((nx, ny)) = board.offset(x, y, dx, dy) {
            let field = board.field(nx, ny);
            if field.is_owned_by(Some(player)) {
                *slot = field.area();
            }
        }
    }
    ids
}

/// How many distinct areas surround a move, as used for classification.
///
/// `around` is the same-owner neighbour count. A fully surrounded field reports
/// 4 without looking at the ids. Otherwise pairs of differing non-zero ids are
/// counted, stopping once the count reaches `around`. No differing pair yields 1.
pub fn distinct_areas(ids: &NeighborAreas, around: u32) -> u32 {
    if around == 4 {
        return around;
    }

    let mut differing = 0;
    for i in 0..3 {
        for j in (i + 1)..4 {
            if differing >= around {
                break;
            }
            if ids[i] != 0 && ids[j] != 0 && ids[i] != ids[j] {
                differing += 1;
            }
        }
    }

    if differing == 0 {
        1
    } else {
        differing
    }
}

/// First non-zero id in neighbour order, 0 if there is none.
pub fn representative_area(ids: &NeighborAreas) -> u32 {
    ids.iter().copied().find(|&id| id != 0).unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(raw: u32) -> PlayerId {
        PlayerId::new(raw).unwrap()
    }

    #[test]
    fn test_orthogonal_count_for_owner_and_empty() {
        let mut board = Board::new(3, 3).unwrap();
        board.claim(0, 1, p(1), 1);
        board.claim(1, 0, p(1), 2);
        board.claim(2, 1, p(2), 1);

        assert_eq!(orthogonal_count(&board, Some(p(1)), 1, 1), 2);
        assert_eq!(orthogonal_count(&board, Some(p(2)), 1, 1), 1);
        assert_eq!(orthogonal_count(&board, None, 1, 1), 1);
        // Corner: only two neighbours exist.
        assert_eq!(orthogonal_count(&board, None, 0, 0), 0);
        assert_eq!(orthogonal_count(&board, None, 2, 2), 1);
    }

    #[test]
    fn test_distance_two_ignores_diagonals() {
        let mut board = Board::new(5, 5).unwrap();
        board.claim(0, 2, p(1), 1);
        board.claim(2, 4, p(1), 2);
        board.claim(4, 2, p(2), 1);
        board.claim(3, 3, p(1), 3);

        assert_eq!(distance_two_count(&board, p(1), 2, 2), 2);
        assert_eq!(distance_two_count(&board, p(2), 2, 2), 1);
        assert_eq!(distance_two_count(&board, p(1), 0, 0), 1);
    }

    #[test]
    fn test_diagonal_pinch_checks_one_diagonal_pair_only() {
        let mut board = Board::new(3, 3).unwrap();
        // Anti-diagonal neighbours are never inspected.
        board.claim(0, 2, p(1), 1);
        board.claim(2, 0, p(1), 2);
        assert_eq!(diagonal_pinch_count(&board, p(1), 1, 1), 0);

        board.claim(0, 0, p(1), 3);
        assert_eq!(diagonal_pinch_count(&board, p(1), 1, 1), 2);

        board.claim(2, 2, p(1), 4);
        assert_eq!(diagonal_pinch_count(&board, p(1), 1, 1), 4);

        // Claimed corners are not pinched, whoever owns them.
        board.claim(1, 0, p(2), 1);
        board.claim(2, 1, p(1), 2);
        assert_eq!(diagonal_pinch_count(&board, p(1), 1, 1), 2);
    }

    #[test]
    fn test_neighbor_areas_order_and_masking() {
        let mut board = Board::new(3, 3).unwrap();
        board.claim(0, 1, p(1), 5); // left
        board.claim(2, 1, p(2), 9); // right, other player
        board.claim(1, 2, p(1), 6); // up
        assert_eq!(neighbor_areas(&board, p(1), 1, 1), [5, 0, 0, 6]);
        assert_eq!(neighbor_areas(&board, p(2), 1, 1), [0, 9, 0, 0]);
        assert_eq!(neighbor_areas(&board, p(1), 0, 0), [0, 0, 0, 5]);
    }

    #[test]
    fn test_distinct_areas() {
        assert_eq!(distinct_areas(&[0, 0, 0, 0], 0), 1);
        assert_eq!(distinct_areas(&[3, 0, 0, 0], 1), 1);
        assert_eq!(distinct_areas(&[3, 3, 0, 0], 2), 1);
        // Two different areas give a single differing pair.
        assert_eq!(distinct_areas(&[3, 4, 0, 0], 2), 1);
        assert_eq!(distinct_areas(&[3, 3, 4, 0], 3), 2);
        assert_eq!(distinct_areas(&[1, 2, 3, 0], 3), 3);
        assert_eq!(distinct_areas(&[1, 1, 1, 1], 4), 4);
    }

    #[test]
    fn test_representative_area() {
        assert_eq!(representative_area(&[0, 0, 0, 0]), 0);
        assert_eq!(representative_area(&[0, 7, 2, 0]), 7);
        assert_eq!(representative_area(&[4, 7, 2, 1]), 4);
    }
}
