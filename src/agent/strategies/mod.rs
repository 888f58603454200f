use std::time::Instant;

use crate::prelude::*;

use super::search::Search;

mod alphabeta;
mod expectimax;
mod human;
mod iterative;
mod minimax;
mod random;

pub use alphabeta::AlphaBeta;
pub use expectimax::Expectimax;
pub use human::{Human, MoveSource, Scripted};
pub use iterative::IterativeDeepening;
pub use minimax::Minimax;
pub use random::Random;

/// Gets the moves a strategy may choose from, or explains why it was asked to choose at all.
pub(crate) fn candidates(board: &Board, color: Color) -> Result<Vec<Move>>
{
    if board.turn() != color
    {
        let base = Error::new(
            Kind::MismatchError,
            format!("Cannot choose a move for {} while {} is to move.", color, board.turn()),
        );
        return Err(Error::mismatch(board.turn(), color).chain(base));
    }

    let moves = board.legal_moves(color);
    if moves.is_empty()
    {
        let err_msg = format!("{} has no legal moves; the game should already be over.", color);
        return Err(Error::new(Kind::NoLegalMoves, err_msg));
    }

    Ok(moves)
}

/// Ensures a search depth is usable.
pub(crate) fn validate_depth(depth: u8) -> Result<u8>
{
    if depth == 0
    {
        return Err(Error::new(Kind::InvalidOption, "Search depth must be at least 1.".into()));
    }
    Ok(depth)
}

/// Runs a single search of fixed depth, recording its telemetry.
pub(crate) fn search_to_depth(board: &Board, color: Color, depth: u8, method: Method, statistics: &mut Statistics) -> Result<Move>
{
    statistics.reset();
    let start = Instant::now();

    candidates(board, color)?;

    let mut search = Search::new(None);
    let (mv, score) = search.root(board, depth, method)?;

    statistics.nodes = search.nodes();
    statistics.elapsed = start.elapsed();
    statistics.score = Some(score);
    statistics.last_move = Some(mv.clone());

    log::debug!("{} found {} for {}: scored {:.2}", method, mv, color, score);
    log::debug!(
        "visited {:09} nodes in {: >3.3}s ({: >8.0} N/s)",
        statistics.nodes,
        statistics.elapsed.as_secs_f64(),
        statistics.nodes_per_second()
    );

    Ok(mv)
}
