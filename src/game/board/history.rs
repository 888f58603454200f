use crate::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// A move played on the board, with the color that played it.
pub struct Entry<'a>
{
    pub color: Color,
    pub mv:    &'a Move,
}

impl std::fmt::Display for Entry<'_>
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result
    {
        write!(f, "{: <5} {}", self.color, self.mv)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
/// A linear, append-only move history.
///
/// Moves are never taken back, so the color of any entry follows from its parity and the first mover.
pub struct History
{
    first: Color,
    past:  Vec<Move>,
}

impl Default for History
{
    fn default() -> Self
    {
        History::starting_with(Color::Light)
    }
}

impl History
{
    /// Gets the entries of this history in play order.
    pub fn entries(&self) -> impl Iterator<Item = Entry<'_>>
    {
        let first = self.first;
        self.past.iter().enumerate().map(move |(i, mv)| Entry {
            color: if i % 2 == 0 { first } else { first.flip() },
            mv,
        })
    }

    /// Determines whether or not the history is empty.
    pub fn is_empty(&self) -> bool
    {
        self.past.is_empty()
    }

    /// Gets the number of moves played.
    pub fn len(&self) -> usize
    {
        self.past.len()
    }

    /// Appends a move.
    pub fn play(&mut self, mv: Move)
    {
        self.past.push(mv);
    }

    /// Gets the last move played, if one exists.
    pub fn prev(&self) -> Option<&Move>
    {
        self.past.last()
    }

    /// An empty history whose first move belongs to the given color.
    pub fn starting_with(first: Color) -> Self
    {
        History { first, past: Vec::new() }
    }
}
