use crate::prelude::*;

#[derive(Clone, Debug)]
/// A strategy that searches to a fixed depth against an opponent who errs.
///
/// Each opponent reply is scored as `(1 - p) * best + p * mean` over its alternatives, where `p` is the modelled
/// probability that the opponent deviates from optimal play. With `p = 0` this picks exactly what minimax picks.
pub struct Expectimax
{
    depth:             u8,
    error_probability: f64,
    statistics:        Statistics,
}

impl Expectimax
{
    /// Creates an expectimax searcher. The depth must be at least 1 and the error probability must lie in [0, 1].
    pub fn new(depth: u8, error_probability: f64) -> Result<Self>
    {
        let depth = super::validate_depth(depth)?;
        Method::Expectimax { error_probability }.validate()?;

        Ok(Expectimax {
            depth,
            error_probability,
            statistics: Statistics {
                depth: Some(depth),
                ..Default::default()
            },
        })
    }

    /// The modelled probability of an opponent error.
    pub fn error_probability(&self) -> f64
    {
        self.error_probability
    }
}

impl Strategy for Expectimax
{
    fn choose_move(&mut self, board: &Board, color: Color) -> Result<Move>
    {
        let method = Method::Expectimax {
            error_probability: self.error_probability,
        };
        super::search_to_depth(board, color, self.depth, method, &mut self.statistics)
    }

    fn name(&self) -> String
    {
        format!("Expectimax({}, p = {})", self.depth, self.error_probability)
    }

    fn statistics(&self) -> &Statistics
    {
        &self.statistics
    }
}
