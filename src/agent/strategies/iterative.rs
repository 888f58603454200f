use std::time::{Duration, Instant};

use crate::prelude::*;

use super::super::search::Search;

#[derive(Clone, Debug)]
/// A strategy that repeats a search at depths 1, 2, ... up to a maximum, within a wall-clock budget.
///
/// It keeps the result of the deepest search that fully completed. A search cut short by the budget is thrown away
/// whole, and if not even depth 1 completes, the first legal move is played.
pub struct IterativeDeepening
{
    budget:     Duration,
    max_depth:  u8,
    method:     Method,
    statistics: Statistics,
}

impl IterativeDeepening
{
    /// Creates an iteratively deepening searcher over the given method.
    pub fn new(method: Method, max_depth: u8, budget: Duration) -> Result<Self>
    {
        let max_depth = super::validate_depth(max_depth)?;
        method.validate()?;

        Ok(IterativeDeepening {
            budget,
            max_depth,
            method,
            statistics: Statistics {
                depth: Some(max_depth),
                ..Default::default()
            },
        })
    }
}

impl Strategy for IterativeDeepening
{
    fn choose_move(&mut self, board: &Board, color: Color) -> Result<Move>
    {
        self.statistics.reset();
        let start = Instant::now();
        let deadline = start + self.budget;

        let legal = super::candidates(board, color)?;

        let mut best: Option<(Move, f64)> = None;
        let mut reached = 0;
        let mut nodes = 0;

        for depth in 1..=self.max_depth
        {
            // If we ran out of time, there is no point starting another iteration.
            if Instant::now() >= deadline
            {
                break;
            }

            let mut search = Search::new(Some(deadline));
            let result = search.root(board, depth, self.method);
            nodes += search.nodes();

            match result
            {
                | Ok((mv, score)) =>
                {
                    log::trace!("depth {: >2}: {} scored {:.2} ({} nodes so far)", depth, mv, score, nodes);

                    let decided = score.is_infinite();
                    best = Some((mv, score));
                    reached = depth;

                    // A forced result will not change with more depth.
                    if decided
                    {
                        break;
                    }
                }
                | Err(err) if err.kind == Kind::SearchTimeout =>
                {
                    log::trace!("depth {: >2}: abandoned after {:.3}s", depth, start.elapsed().as_secs_f64());
                    break;
                }
                | Err(err) => return Err(err),
            }
        }

        let (mv, score) = match best
        {
            | Some((mv, score)) => (mv, Some(score)),
            | None => (legal[0].clone(), None),
        };

        self.statistics.nodes = nodes;
        self.statistics.elapsed = start.elapsed();
        self.statistics.depth_reached = Some(reached);
        self.statistics.score = score;
        self.statistics.last_move = Some(mv.clone());

        log::debug!("found {} for {} at depth {}: scored {:?}", mv, color, reached, score);
        log::debug!(
            "took {: >3.3}s and visited {:09} nodes ({: >8.0} N/s)",
            self.statistics.elapsed.as_secs_f64(),
            nodes,
            self.statistics.nodes_per_second()
        );

        Ok(mv)
    }

    fn name(&self) -> String
    {
        format!("IterativeDeepening({}, {}, {}ms)", self.method, self.max_depth, self.budget.as_millis())
    }

    fn statistics(&self) -> &Statistics
    {
        &self.statistics
    }
}
