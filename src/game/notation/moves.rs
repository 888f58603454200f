use arrayvec::ArrayVec;
use itertools::Itertools;
use lazy_static::lazy_static;
use regex::Regex;

use crate::prelude::*;

/// A chain can never take more pieces than the opponent owns.
pub const MAXIMUM_CAPTURES: usize = piece::consts::PER_COLOR;

/// The ordered squares taken by a single move.
pub type Captures = ArrayVec<Square, MAXIMUM_CAPTURES>;

lazy_static! {
    static ref MOVE: Regex = Regex::new(r"^(?<from>\(?\s*[0-9]\s*,\s*[0-9]\s*\)?)\s*(->|-|x)\s*(?<to>\(?\s*[0-9]\s*,\s*[0-9]\s*\)?)$").unwrap();
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
/// Represents a movement in a game of draughts.
///
/// Moves are generated fresh from a position and never change afterwards. A move captures exactly when its capture list
/// is non-empty, and two moves are equal when all four of their parts are.
pub struct Move
{
    origin:      Square,
    destination: Square,
    captures:    Captures,
    promotes:    bool,
}

impl Move
{
    /// Creates a capturing move along the given chain.
    pub fn capture(origin: Square, destination: Square, captures: Captures, promotes: bool) -> Move
    {
        Move {
            origin,
            destination,
            captures,
            promotes,
        }
    }

    /// The squares of the pieces taken by this move, in the order they are jumped.
    pub fn captures(&self) -> &[Square]
    {
        &self.captures
    }

    /// Where the moving piece ends up.
    pub fn destination(&self) -> Square
    {
        self.destination
    }

    /// Whether this move takes at least one piece.
    pub fn is_capture(&self) -> bool
    {
        !self.captures.is_empty()
    }

    /// Where the moving piece starts.
    pub fn origin(&self) -> Square
    {
        self.origin
    }

    /// Whether the moving man is crowned on arrival.
    pub fn promotes(&self) -> bool
    {
        self.promotes
    }

    /// Picks the move a piece of text refers to out of a list of legal moves.
    ///
    /// The text is either a 1-based index into the list, or an origin and destination such as `5,0-4,1`.
    pub fn resolve(text: &str, legal: &[Move]) -> Result<Move>
    {
        let text = text.trim();
        let base = Error::new(Kind::InvalidMove, format!("'{}' does not name a legal move.", text));

        if let Ok(index) = text.parse::<usize>()
        {
            return match index.checked_sub(1).and_then(|i| legal.get(i))
            {
                | Some(mv) => Ok(mv.clone()),
                | None =>
                {
                    let err_msg = format!("Expected an index from 1 to {}, found {}.", legal.len(), index);
                    Err(Error::new(Kind::InvalidMove, err_msg).chain(base))
                }
            };
        }

        let Some(caps) = MOVE.captures(text)
        else
        {
            return Err(Error::for_parse::<Self>(text.into()).chain(base));
        };

        let origin = caps["from"].parse::<Square>().map_err(|err| err.chain(base.clone()))?;
        let destination = caps["to"].parse::<Square>().map_err(|err| err.chain(base.clone()))?;

        let candidates = legal
            .iter()
            .filter(|mv| mv.origin == origin && mv.destination == destination)
            .collect::<Vec<_>>();

        match candidates.as_slice()
        {
            | [] => Err(base),
            | [mv] => Ok((*mv).clone()),
            | many =>
            {
                let err_msg = format!(
                    "{} chains go from {} to {}: {}",
                    many.len(),
                    origin,
                    destination,
                    many.iter().map(|mv| mv.to_string()).join("; ")
                );
                Err(Error::new(Kind::AmbiguousMove, err_msg))
            }
        }
    }

    /// Creates a non-capturing move.
    pub fn step(origin: Square, destination: Square, promotes: bool) -> Move
    {
        Move {
            origin,
            destination,
            captures: Captures::new(),
            promotes,
        }
    }
}

impl std::fmt::Display for Move
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result
    {
        write!(f, "{} -> {}", self.origin, self.destination)?;
        if self.is_capture()
        {
            write!(f, " x [{}]", self.captures.iter().join(", "))?;
        }
        if self.promotes
        {
            write!(f, " =K")?;
        }
        Ok(())
    }
}
