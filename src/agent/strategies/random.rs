use std::time::Instant;

use rand::{rngs::StdRng, seq::SliceRandom, Rng, SeedableRng};

use crate::prelude::*;

/// A strategy that plays a uniformly random legal move.
pub struct Random<R: Rng = StdRng>
{
    rng:        R,
    statistics: Statistics,
}

impl<R: Rng> Random<R>
{
    /// Creates a random player drawing from the given generator.
    pub fn new(rng: R) -> Self
    {
        Random {
            rng,
            statistics: Statistics::default(),
        }
    }
}

impl Random<StdRng>
{
    /// Creates a reproducible random player.
    pub fn seeded(seed: u64) -> Self
    {
        Self::new(StdRng::seed_from_u64(seed))
    }

    /// Creates a random player seeded by the operating system.
    pub fn from_entropy() -> Self
    {
        Self::new(StdRng::from_entropy())
    }
}

impl<R: Rng> Strategy for Random<R>
{
    fn choose_move(&mut self, board: &Board, color: Color) -> Result<Move>
    {
        self.statistics.reset();
        let start = Instant::now();

        let moves = super::candidates(board, color)?;
        let mv = moves
            .choose(&mut self.rng)
            .cloned()
            .ok_or_else(|| Error::new(Kind::NoLegalMoves, format!("{} has no legal moves.", color)))?;

        self.statistics.nodes = moves.len() as u64;
        self.statistics.elapsed = start.elapsed();
        self.statistics.last_move = Some(mv.clone());

        log::debug!("picked {} for {} out of {} moves", mv, color, moves.len());
        Ok(mv)
    }

    fn name(&self) -> String
    {
        "Random".into()
    }

    fn statistics(&self) -> &Statistics
    {
        &self.statistics
    }
}
