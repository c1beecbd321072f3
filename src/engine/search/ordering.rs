//! Move ordering: forcing moves (captures, promotions) before quiet ones.

use crate::game::GameState;

/// Stable partition, so the collaborator's order survives inside each group.
pub(super) fn order_moves<P: GameState>(pos: &P, mut moves: Vec<P::Move>) -> Vec<P::Move> {
    moves.sort_by_key(|mv| !pos.is_forcing(mv));
    moves
}

/// [`order_moves`] for the root, tagging each move with its index in the
/// collaborator's list so ties can be broken in that order.
pub(super) fn order_indexed<P: GameState>(pos: &P, moves: Vec<P::Move>) -> Vec<(usize, P::Move)> {
    let mut indexed: Vec<(usize, P::Move)> = moves.into_iter().enumerate().collect();
    indexed.sort_by_key(|(_, mv)| !pos.is_forcing(mv));
    indexed
}
