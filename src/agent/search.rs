use std::time::Instant;

use crate::prelude::*;

use scores::WIN;

#[derive(Clone, Copy, Debug, PartialEq)]
/// The tree-search algorithms available to searching strategies.
pub enum Method
{
    /// Exhaustive minimax.
    Minimax,

    /// Minimax with alpha-beta pruning. It picks the same moves as [Method::Minimax] while visiting fewer nodes.
    AlphaBeta,

    /// Minimax in which every opponent reply is a chance node, modelling an opponent that errs with the given
    /// probability.
    Expectimax
    {
        error_probability: f64,
    },
}

impl Method
{
    /// Ensures the method's parameters make sense.
    pub fn validate(&self) -> Result<()>
    {
        match self
        {
            | Self::Expectimax { error_probability } if !(0.0..=1.0).contains(error_probability) =>
            {
                let err_msg = format!("Error probability must lie in [0, 1], found {}.", error_probability);
                Err(Error::new(Kind::InvalidOption, err_msg))
            }
            | _ => Ok(()),
        }
    }
}

impl std::fmt::Display for Method
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result
    {
        match self
        {
            | Self::Minimax => write!(f, "minimax"),
            | Self::AlphaBeta => write!(f, "alpha-beta"),
            | Self::Expectimax { error_probability } => write!(f, "expectimax (p = {})", error_probability),
        }
    }
}

/// Combines the values of a chance node's children.
///
/// The opponent plays its best reply (`extreme`) with probability `1 - p`, and a uniformly random reply otherwise.
/// Terms with no weight are dropped, so certain outcomes never turn into NaN. Opposing certain outcomes cancel out in
/// the mean.
pub fn expectation(extreme: f64, mean: f64, error_probability: f64) -> f64
{
    let mean = if mean.is_nan() { 0.0 } else { mean };

    if error_probability <= 0.0
    {
        extreme
    }
    else if error_probability >= 1.0
    {
        mean
    }
    else
    {
        (1.0 - error_probability) * extreme + error_probability * mean
    }
}

/// A single search over a game tree, counting the nodes it visits.
///
/// Every hypothetical move is played on a clone, so the board handed in is never touched.
pub(crate) struct Search
{
    deadline: Option<Instant>,
    nodes:    u64,
}

impl Search
{
    /// Creates a search that gives up with [Kind::SearchTimeout] once the deadline passes.
    pub fn new(deadline: Option<Instant>) -> Self
    {
        Search { deadline, nodes: 0 }
    }

    /// The number of nodes visited so far.
    pub fn nodes(&self) -> u64
    {
        self.nodes
    }

    /// Searches every legal move of the side to move to the given depth, returning the best move and its value.
    ///
    /// Ties go to the move generated first.
    pub fn root(&mut self, board: &Board, depth: u8, method: Method) -> Result<(Move, f64)>
    {
        let color = board.turn();
        let maximizing = color.maximizing();
        let (mut alpha, mut beta) = (-WIN, WIN);
        let mut best: Option<(Move, f64)> = None;

        for mv in board.legal_moves(color)
        {
            let child = Self::child(board, &mv);
            let remaining = depth.saturating_sub(1);

            let value = match method
            {
                | Method::Minimax => self.minimax(&child, remaining)?,
                | Method::AlphaBeta => self.alpha_beta(&child, remaining, alpha, beta)?,
                | Method::Expectimax { error_probability } => self.chance(&child, remaining, error_probability)?,
            };

            let improves = match &best
            {
                | None => true,
                | Some((_, score)) if maximizing => value > *score,
                | Some((_, score)) => value < *score,
            };

            if improves
            {
                best = Some((mv, value));
            }

            if method == Method::AlphaBeta
            {
                let Some((_, score)) = &best
                else
                {
                    continue;
                };

                if maximizing
                {
                    alpha = alpha.max(*score);
                }
                else
                {
                    beta = beta.min(*score);
                }

                if beta <= alpha
                {
                    break;
                }
            }
        }

        best.ok_or_else(|| Error::new(Kind::NoLegalMoves, format!("{} has no legal moves.", color)))
    }
}

/// Private implementation for the recursive searches.
impl Search
{
    /// Alpha-beta recursion. `alpha` is the best value the maximizer is guaranteed on this path, and `beta` the
    /// minimizer's.
    fn alpha_beta(&mut self, board: &Board, depth: u8, mut alpha: f64, mut beta: f64) -> Result<f64>
    {
        self.tick()?;

        let moves = board.legal_moves(board.turn());
        if depth == 0 || board.state_with(moves.len()) != GameState::InProgress
        {
            return Ok(board.evaluate());
        }

        let maximizing = board.turn().maximizing();
        let mut best = if maximizing { -WIN } else { WIN };

        for mv in moves
        {
            let value = self.alpha_beta(&Self::child(board, &mv), depth - 1, alpha, beta)?;

            if maximizing
            {
                best = best.max(value);
                alpha = alpha.max(best);
            }
            else
            {
                best = best.min(value);
                beta = beta.min(best);
            }

            // Nothing further down this node can change the parent's decision.
            if beta <= alpha
            {
                break;
            }
        }

        Ok(best)
    }

    /// Plays a move on a copy of the board's position.
    fn child(board: &Board, mv: &Move) -> Board
    {
        let mut child = board.detached();
        child.play_unchecked(mv);
        child
    }

    /// A chance node: the opponent's reply, which is optimal only with probability `1 - p`.
    fn chance(&mut self, board: &Board, depth: u8, error_probability: f64) -> Result<f64>
    {
        self.tick()?;

        let moves = board.legal_moves(board.turn());
        if depth == 0 || board.state_with(moves.len()) != GameState::InProgress
        {
            return Ok(board.evaluate());
        }

        let mut values = Vec::with_capacity(moves.len());
        for mv in moves
        {
            values.push(self.decision(&Self::child(board, &mv), depth - 1, error_probability)?);
        }

        let extreme = if board.turn().maximizing()
        {
            values.iter().copied().fold(-WIN, f64::max)
        }
        else
        {
            values.iter().copied().fold(WIN, f64::min)
        };
        let mean = values.iter().sum::<f64>() / values.len() as f64;

        Ok(expectation(extreme, mean, error_probability))
    }

    /// A decision node of the expectimax search, where the searching side picks its best move.
    fn decision(&mut self, board: &Board, depth: u8, error_probability: f64) -> Result<f64>
    {
        self.tick()?;

        let moves = board.legal_moves(board.turn());
        if depth == 0 || board.state_with(moves.len()) != GameState::InProgress
        {
            return Ok(board.evaluate());
        }

        let maximizing = board.turn().maximizing();
        let mut best = if maximizing { -WIN } else { WIN };

        for mv in moves
        {
            let value = self.chance(&Self::child(board, &mv), depth - 1, error_probability)?;
            best = if maximizing { best.max(value) } else { best.min(value) };
        }

        Ok(best)
    }

    /// Plain minimax recursion.
    fn minimax(&mut self, board: &Board, depth: u8) -> Result<f64>
    {
        self.tick()?;

        let moves = board.legal_moves(board.turn());
        if depth == 0 || board.state_with(moves.len()) != GameState::InProgress
        {
            return Ok(board.evaluate());
        }

        let maximizing = board.turn().maximizing();
        let mut best = if maximizing { -WIN } else { WIN };

        for mv in moves
        {
            let value = self.minimax(&Self::child(board, &mv), depth - 1)?;
            best = if maximizing { best.max(value) } else { best.min(value) };
        }

        Ok(best)
    }

    /// Counts a node, and checks the clock.
    fn tick(&mut self) -> Result<()>
    {
        self.nodes += 1;

        match self.deadline
        {
            | Some(deadline) if Instant::now() >= deadline => Err(Error::empty(Kind::SearchTimeout)),
            | _ => Ok(()),
        }
    }
}
