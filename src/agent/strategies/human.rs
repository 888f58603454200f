use std::{collections::VecDeque, time::Instant};

use crate::prelude::*;

/// Somewhere a human player's decisions come from.
pub trait MoveSource
{
    /// Asks for one of the given legal moves for the given color.
    fn request(&mut self, board: &Board, color: Color, legal: &[Move]) -> Result<Move>;
}

/// A strategy that defers every decision to a [MoveSource], such as a person at a terminal.
pub struct Human<S: MoveSource>
{
    source:     S,
    statistics: Statistics,
}

impl<S: MoveSource> Human<S>
{
    /// Creates a player backed by the given source.
    pub fn new(source: S) -> Self
    {
        Human {
            source,
            statistics: Statistics::default(),
        }
    }
}

impl<S: MoveSource> Strategy for Human<S>
{
    fn choose_move(&mut self, board: &Board, color: Color) -> Result<Move>
    {
        self.statistics.reset();
        let start = Instant::now();

        let legal = super::candidates(board, color)?;
        let mv = self.source.request(board, color, &legal)?;

        if !legal.contains(&mv)
        {
            let err_msg = format!("{} is not among the {} legal moves for {}.", mv, legal.len(), color);
            return Err(Error::new(Kind::InvalidMove, err_msg));
        }

        self.statistics.elapsed = start.elapsed();
        self.statistics.last_move = Some(mv.clone());

        Ok(mv)
    }

    fn name(&self) -> String
    {
        "Human".into()
    }

    fn statistics(&self) -> &Statistics
    {
        &self.statistics
    }
}

#[derive(Clone, Debug, Default)]
/// A [MoveSource] that replays a fixed list of answers, each an index or move text as accepted by [Move::resolve()].
pub struct Scripted
{
    answers: VecDeque<String>,
}

impl Scripted
{
    /// Creates a source that gives the given answers in order.
    pub fn new<I, T>(answers: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        Scripted {
            answers: answers.into_iter().map(Into::into).collect(),
        }
    }

    /// How many answers are left.
    pub fn remaining(&self) -> usize
    {
        self.answers.len()
    }
}

impl MoveSource for Scripted
{
    fn request(&mut self, _board: &Board, color: Color, legal: &[Move]) -> Result<Move>
    {
        let Some(answer) = self.answers.pop_front()
        else
        {
            let err_msg = format!("The script has no answer left for {}.", color);
            return Err(Error::new(Kind::StrategyFailure, err_msg));
        };

        Move::resolve(&answer, legal)
    }
}
