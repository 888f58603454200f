use crate::prelude::*;

pub mod search;
pub mod statistics;
pub mod strategies;

pub use search::Method;
pub use statistics::Statistics;
pub use strategies::*;

/// A policy by which a player picks its moves.
///
/// Every variant owns its own configuration and telemetry. Strategies never mutate the board they are handed.
pub trait Strategy
{
    /// Returns the move to play for the given color.
    ///
    /// Fails with [Kind::NoLegalMoves] if the color has none, which callers prevent by checking [Board::game_over()]
    /// first, and with [Kind::MismatchError] if the color is not on turn.
    fn choose_move(&mut self, board: &Board, color: Color) -> Result<Move>;

    /// A short, human-readable description of the strategy and its configuration.
    fn name(&self) -> String;

    /// Telemetry about the most recent call to [Strategy::choose_move()].
    fn statistics(&self) -> &Statistics;
}

impl<S: Strategy + ?Sized> Strategy for Box<S>
{
    fn choose_move(&mut self, board: &Board, color: Color) -> Result<Move>
    {
        (**self).choose_move(board, color)
    }

    fn name(&self) -> String
    {
        (**self).name()
    }

    fn statistics(&self) -> &Statistics
    {
        (**self).statistics()
    }
}
