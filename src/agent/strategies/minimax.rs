use crate::prelude::*;

#[derive(Clone, Debug)]
/// A strategy that explores every line exhaustively to a fixed depth.
pub struct Minimax
{
    depth:      u8,
    statistics: Statistics,
}

impl Minimax
{
    /// Creates a minimax searcher of the given depth, which must be at least 1.
    pub fn new(depth: u8) -> Result<Self>
    {
        let depth = super::validate_depth(depth)?;
        Ok(Minimax {
            depth,
            statistics: Statistics {
                depth: Some(depth),
                ..Default::default()
            },
        })
    }
}

impl Strategy for Minimax
{
    fn choose_move(&mut self, board: &Board, color: Color) -> Result<Move>
    {
        super::search_to_depth(board, color, self.depth, Method::Minimax, &mut self.statistics)
    }

    fn name(&self) -> String
    {
        format!("Minimax({})", self.depth)
    }

    fn statistics(&self) -> &Statistics
    {
        &self.statistics
    }
}
