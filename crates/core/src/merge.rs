//! Area relabeling for merge moves
//!
//! When a move joins several areas, every field of the joined region takes the
//! representative area id. The traversal keeps its own work-list, so stack usage
//! does not grow with the region size.

use tracing::trace;

use crate::board::{Board, Pos};
use crate::types::PlayerId;

/// Relabel the 4-connected region of `player` fields reachable from `start`.
///
/// A field whose area already equals `target` counts as visited and is not
/// expanded, so the field that triggered the merge must carry `target` before
/// this runs. `stack` is scratch space; it is left empty on return.
///
/// Returns the number of relabeled fields.
pub fn relabel_region(
    board: &mut Board,
    target: u32,
    player: PlayerId,
    start: Pos,
    stack: &mut Vec<Pos>,
) -> usize {
    stack.clear();
    stack.push(start);

    let mut relabeled = 0;
    while let Some((x, y)) = stack.pop() {
        let field = board.field(x, y);
        if !field.is_owned_by(Some(player)) || field.area() == target {
            continue;
        }

        board.set_area(x, y, target);
        relabeled += 1;
        stack.extend(unvisited_neighbors(board, target, player, x, y));
    }

    trace!(area = target, relabeled, "relabeled region");
    relabeled
}

/// Neighbours of `(x, y)` that still belong to `player`'s region but not yet to
/// `target`. Duplicates can still reach the stack and are skipped on pop.
fn unvisited_neighbors(
    board: &Board,
    target: u32,
    player: PlayerId,
    x: u32,
    y: u32,
) -> impl Iterator<Item = Pos> + '_ {
    board.neighbors(x, y).into_iter().filter(move |&(nx, ny)| {
        let field = board.field(nx, ny);
        field.is_owned_by(Some(player)) && field.area() != target
    })
}
