use std::time::Duration;

use crate::prelude::*;

#[derive(Clone, Debug, Default, PartialEq)]
/// A plain record of a match, meant for external serialization or reporting.
pub struct MatchSummary
{
    /// The evaluation of the board after every move.
    pub evaluations: Vec<f64>,

    /// Notable happenings, such as forfeits and the move ceiling.
    pub events: Vec<String>,

    /// Every move played, with the color that played it.
    pub moves: Vec<String>,

    /// How the match ended, if it has.
    pub outcome: Option<Outcome>,

    /// The pieces each color has left.
    pub pieces: ByColor<usize>,

    /// The name of each color's strategy.
    pub players: ByColor<String>,

    /// Each color's strategy telemetry, one entry per turn it took, a forfeited one included.
    pub statistics: ByColor<Vec<Statistics>>,

    /// The number of moves played.
    pub turns: usize,
}

impl MatchSummary
{
    /// The average time a color took per move.
    pub fn average_elapsed(&self, color: Color) -> Duration
    {
        match self.statistics[color].len()
        {
            | 0 => Duration::ZERO,
            | n => self.total_elapsed(color) / n as u32,
        }
    }

    /// The average number of nodes a color visited per move.
    pub fn average_nodes(&self, color: Color) -> f64
    {
        match self.statistics[color].len()
        {
            | 0 => 0.0,
            | n => self.total_nodes(color) as f64 / n as f64,
        }
    }

    /// The time a color spent choosing moves.
    pub fn total_elapsed(&self, color: Color) -> Duration
    {
        self.statistics[color].iter().map(|stats| stats.elapsed).sum()
    }

    /// The nodes a color visited over the whole match.
    pub fn total_nodes(&self, color: Color) -> u64
    {
        self.statistics[color].iter().map(|stats| stats.nodes).sum()
    }

    /// The winner, if the match has one.
    pub fn winner(&self) -> Option<Color>
    {
        self.outcome.and_then(|outcome| outcome.winner())
    }
}

impl std::fmt::Display for MatchSummary
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result
    {
        match self.outcome
        {
            | Some(outcome) => writeln!(f, "result: {} after {} moves", outcome, self.turns)?,
            | None => writeln!(f, "in progress after {} moves", self.turns)?,
        }

        for color in Color::all()
        {
            writeln!(
                f,
                "{: <5} {}: {} pieces left, {} nodes in {:.3}s ({:.3}s per move)",
                color,
                self.players[color],
                self.pieces[color],
                self.total_nodes(color),
                self.total_elapsed(color).as_secs_f64(),
                self.average_elapsed(color).as_secs_f64()
            )?;
        }

        if let Some(last) = self.evaluations.last()
        {
            write!(f, "final evaluation: {:.2}", last)?;
        }
        Ok(())
    }
}
