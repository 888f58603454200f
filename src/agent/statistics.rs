use std::time::Duration;

use crate::prelude::*;

#[derive(Clone, Debug, Default, PartialEq)]
/// Telemetry about a strategy's most recent move selection.
///
/// This is reset at the start of every top-level selection, and is never part of the game state.
pub struct Statistics
{
    /// The configured search depth, for strategies that search.
    pub depth: Option<u8>,

    /// The deepest fully completed search, for strategies that deepen iteratively.
    pub depth_reached: Option<u8>,

    /// Wall-clock time spent choosing.
    pub elapsed: Duration,

    /// The move that was chosen.
    pub last_move: Option<Move>,

    /// The number of search nodes visited.
    pub nodes: u64,

    /// The backed-up score of the chosen move, from Light's perspective.
    pub score: Option<f64>,
}

impl Statistics
{
    /// Search throughput, in nodes per second.
    pub fn nodes_per_second(&self) -> f64
    {
        let secs = self.elapsed.as_secs_f64();
        if secs > 0.0
        {
            self.nodes as f64 / secs
        }
        else
        {
            0.0
        }
    }

    /// Clears the statistics ahead of a new selection, keeping the configured depth.
    pub fn reset(&mut self)
    {
        *self = Statistics {
            depth: self.depth,
            ..Default::default()
        };
    }
}

impl std::fmt::Display for Statistics
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result
    {
        write!(f, "{} nodes in {:.3}s", self.nodes, self.elapsed.as_secs_f64())?;
        if let Some(reached) = self.depth_reached
        {
            write!(f, ", reached depth {}", reached)?;
        }
        else if let Some(depth) = self.depth
        {
            write!(f, ", depth {}", depth)?;
        }
        if let Some(score) = self.score
        {
            write!(f, ", scored {:.2}", score)?;
        }
        Ok(())
    }
}
