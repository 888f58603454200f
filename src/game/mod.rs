pub(crate) mod board;
pub(crate) mod notation;
pub mod piece;
pub mod square;

pub use board::{scores, Board, Entry, GameState, History, Tally};
pub use notation::types::*;
pub use piece::{ByColor, Color, Piece, Rank};
pub use square::{Direction, Square};
