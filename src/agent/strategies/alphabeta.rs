use crate::prelude::*;

#[derive(Clone, Debug)]
/// A strategy that runs minimax with alpha-beta pruning to a fixed depth.
///
/// It always picks the move plain minimax would pick; only the number of visited nodes differs.
pub struct AlphaBeta
{
    depth:      u8,
    statistics: Statistics,
}

impl AlphaBeta
{
    /// Creates an alpha-beta searcher of the given depth, which must be at least 1.
    pub fn new(depth: u8) -> Result<Self>
    {
        let depth = super::validate_depth(depth)?;
        Ok(AlphaBeta {
            depth,
            statistics: Statistics {
                depth: Some(depth),
                ..Default::default()
            },
        })
    }
}

impl Strategy for AlphaBeta
{
    fn choose_move(&mut self, board: &Board, color: Color) -> Result<Move>
    {
        super::search_to_depth(board, color, self.depth, Method::AlphaBeta, &mut self.statistics)
    }

    fn name(&self) -> String
    {
        format!("AlphaBeta({})", self.depth)
    }

    fn statistics(&self) -> &Statistics
    {
        &self.statistics
    }
}
