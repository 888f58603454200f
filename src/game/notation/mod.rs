mod moves;
mod position;

pub mod types
{
    pub use super::{
        moves::{Captures, Move, MAXIMUM_CAPTURES},
        position::PositionString,
    };
}
