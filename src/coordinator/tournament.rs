use std::time::Duration;

use crate::prelude::*;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
/// One entrant's results over a tournament.
pub struct Standing
{
    pub draws:   usize,
    pub elapsed: Duration,
    pub losses:  usize,
    /// Turns taken, a forfeited one included.
    pub moves:   usize,
    pub name:    String,
    pub nodes:   u64,
    pub wins:    usize,
}

impl Standing
{
    /// Average time spent per move.
    pub fn average_elapsed(&self) -> Duration
    {
        match self.moves
        {
            | 0 => Duration::ZERO,
            | n => self.elapsed / n as u32,
        }
    }

    /// Average nodes visited per move.
    pub fn average_nodes(&self) -> f64
    {
        match self.moves
        {
            | 0 => 0.0,
            | n => self.nodes as f64 / n as f64,
        }
    }

    /// Folds one game's result into the standing.
    fn record(&mut self, summary: &MatchSummary, color: Color)
    {
        match summary.outcome
        {
            | Some(Outcome::Winner(winner)) if winner == color => self.wins += 1,
            | Some(Outcome::Winner(_)) => self.losses += 1,
            | Some(Outcome::Draw) | None => self.draws += 1,
        }

        self.moves += summary.statistics[color].len();
        self.nodes += summary.total_nodes(color);
        self.elapsed += summary.total_elapsed(color);
    }
}

impl std::fmt::Display for Standing
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result
    {
        write!(
            f,
            "{}: {}W {}D {}L, {:.3}s and {:.0} nodes per move",
            self.name,
            self.wins,
            self.draws,
            self.losses,
            self.average_elapsed().as_secs_f64(),
            self.average_nodes()
        )
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// A series of matches between two entrants, who swap colors after every game.
pub struct Tournament
{
    pub games:      usize,
    pub move_limit: usize,
}

impl Tournament
{
    pub fn new(games: usize, move_limit: usize) -> Self
    {
        Tournament { games, move_limit }
    }

    /// Plays every game, building each entrant's strategy afresh from its factory.
    ///
    /// The first entrant plays Light in even-numbered games (counting from zero) and Dark in the others.
    pub fn play<A, B>(&self, mut first: A, mut second: B) -> Result<[Standing; 2]>
    where
        A: FnMut() -> Result<Box<dyn Strategy>>,
        B: FnMut() -> Result<Box<dyn Strategy>>,
    {
        let mut standings: [Standing; 2] = Default::default();

        for game in 0..self.games
        {
            let (a, b) = (first()?, second()?);
            standings[0].name = a.name();
            standings[1].name = b.name();

            let (light, dark, a_color) = if game % 2 == 0
            {
                (a, b, Color::Light)
            }
            else
            {
                (b, a, Color::Dark)
            };

            let mut coordinator = MatchCoordinator::new(light, dark, self.move_limit);
            let outcome = coordinator.run();
            let summary = coordinator.summary();

            standings[0].record(&summary, a_color);
            standings[1].record(&summary, a_color.flip());

            log::info!("game {: >3}/{}: {} ({} as {})", game + 1, self.games, outcome, standings[0].name, a_color);
        }

        Ok(standings)
    }
}
