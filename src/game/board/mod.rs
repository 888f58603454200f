use arrayvec::ArrayVec;

use crate::prelude::*;

mod evaluate;
mod generate;
mod history;
mod printers;
mod state;

pub use evaluate::consts as scores;
pub use history::{Entry, History};
pub use state::GameState;

use crate::game::{
    piece::consts::{HOME_ROWS, PER_COLOR},
    square::consts::{CELLS, SIZE},
};

/// The pieces a color has taken, in the order they were taken.
pub type Tally = ArrayVec<Piece, PER_COLOR>;

#[derive(Clone, PartialEq, Eq)]
/// An 8x8 draughts board.
///
/// The grid is a flat array of cells. Search never touches the board it was handed; it plays every hypothetical move on
/// a copy of the grid that leaves the game's history behind.
pub struct Board
{
    /// The pieces each color has captured.
    captured: ByColor<Tally>,

    /// The board is an array of cells that might or might not be filled, indexed by [Square::index()].
    ///
    /// Only dark squares are ever filled.
    cells: [Option<Piece>; CELLS],

    /// Every move played on this board.
    history: History,

    /// The color to move.
    turn: Color,
}

impl Default for Board
{
    fn default() -> Self
    {
        Board::new()
    }
}

impl std::fmt::Debug for Board
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result
    {
        if f.alternate()
        {
            self.pretty(f)
        }
        else
        {
            self.debug(f)
        }
    }
}

impl std::fmt::Display for Board
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result
    {
        self.pretty(f)
    }
}

impl Board
{
    /// Gets the pieces the given color has captured.
    pub fn captured(&self, color: Color) -> &[Piece]
    {
        &self.captured[color]
    }

    /// Ensures a move is legal in the current position, or returns an error explaining why it isn't.
    ///
    /// Moves are always checked against a fresh generation, never trusted from an earlier one.
    pub fn check(&self, mv: &Move) -> Result<()>
    {
        let base = Error::new(Kind::InvalidMove, format!("Cannot play {} for {}.", mv, self.turn));

        let Some(piece) = self.piece_at(mv.origin())
        else
        {
            let err = Error::new(Kind::InvalidMove, format!("There is no piece on {}.", mv.origin()));
            return Err(err.chain(base));
        };

        if piece.color != self.turn
        {
            return Err(Error::mismatch(self.turn, piece.color).chain(base));
        }

        let legal = self.legal_moves(self.turn);
        if !legal.contains(mv)
        {
            let err_msg = format!("It is not among the {} legal moves in this position.", legal.len());
            return Err(Error::new(Kind::InvalidMove, err_msg).chain(base));
        }

        Ok(())
    }

    /// Copies the position without the history behind it, for boards that only live inside a search.
    ///
    /// The copy starts a fresh history with the color on turn, so it never grows past the depth of the search.
    pub fn detached(&self) -> Board
    {
        Board {
            captured: self.captured.clone(),
            cells: self.cells,
            history: History::starting_with(self.turn),
            turn: self.turn,
        }
    }

    /// Creates a board with no pieces on it.
    pub fn empty(turn: Color) -> Board
    {
        Board {
            captured: ByColor::default(),
            cells: [None; CELLS],
            history: History::starting_with(turn),
            turn,
        }
    }

    /// Plays the given move on the board, if it is legal.
    ///
    /// Either the whole move is applied or nothing changes.
    pub fn execute_move(&mut self, mv: &Move) -> Result<()>
    {
        self.check(mv)?;
        self.play_unchecked(mv);
        Ok(())
    }

    /// Gets the history of this game.
    pub fn history(&self) -> &History
    {
        &self.history
    }

    /// Creates a board in the standard starting position, with Light to move.
    pub fn new() -> Board
    {
        let mut board = Board::empty(Color::Light);

        for square in Square::all().filter(Square::dark)
        {
            if square.row() < HOME_ROWS
            {
                board.cells[square.index()] = Some(Piece::man(Color::Dark, square));
            }
            else if square.row() >= SIZE - HOME_ROWS
            {
                board.cells[square.index()] = Some(Piece::man(Color::Light, square));
            }
        }

        board
    }

    /// Gets every piece on the board, in row-major order.
    pub fn occupied(&self) -> impl Iterator<Item = Piece> + '_
    {
        self.cells.iter().flatten().copied()
    }

    /// Gets the piece on the given square, if any.
    pub fn piece_at(&self, square: Square) -> Option<Piece>
    {
        self.cells[square.index()]
    }

    /// Counts the pieces the given color still has on the board.
    pub fn piece_count(&self, color: Color) -> usize
    {
        self.pieces(color).count()
    }

    /// Gets the pieces of the given color, in row-major order.
    pub fn pieces(&self, color: Color) -> impl Iterator<Item = Piece> + '_
    {
        self.occupied().filter(move |piece| piece.color == color)
    }

    /// Puts a piece on the board while setting up a position.
    ///
    /// Pieces can only go on empty dark squares.
    pub fn place(&mut self, piece: Piece) -> Result<()>
    {
        let base = Error::new(Kind::InvalidState, format!("Cannot place {}.", piece));

        if !piece.square.dark()
        {
            let err = Error::new(Kind::InvalidSquare, format!("{} is a light square.", piece.square));
            return Err(err.chain(base));
        }

        if let Some(other) = self.piece_at(piece.square)
        {
            let err = Error::new(Kind::InvalidState, format!("{} is already occupied by {}.", piece.square, other));
            return Err(err.chain(base));
        }

        if self.piece_count(piece.color) >= PER_COLOR
        {
            let err = Error::new(Kind::InvalidState, format!("{} already has {} pieces.", piece.color, PER_COLOR));
            return Err(err.chain(base));
        }

        self.cells[piece.square.index()] = Some(piece);
        Ok(())
    }

    /// Gets the number of moves played on this board.
    pub fn ply(&self) -> usize
    {
        self.history.len()
    }

    /// Returns the color that should play the next move.
    pub fn turn(&self) -> Color
    {
        self.turn
    }
}

/// Private implementation for this board.
impl Board
{
    /// Plays the move onto the board. Assumes [Board::check()].
    pub(crate) fn play_unchecked(&mut self, mv: &Move)
    {
        let Some(mut piece) = self.cells[mv.origin().index()].take()
        else
        {
            debug_assert!(false, "{} was played from an empty square", mv);
            log::error!("refusing to play {} from an empty square", mv);
            return;
        };

        for square in mv.captures()
        {
            let victim = self.cells[square.index()].take();
            debug_assert!(victim.is_some(), "{} captures the empty square {}", mv, square);

            // The tally is as large as the opponent's army.
            if let Some(overflow) = victim.and_then(|victim| self.captured[piece.color].try_push(victim).err())
            {
                debug_assert!(false, "{} has already captured a whole army", piece.color);
                log::error!("{} has no room to tally {}", piece.color, overflow.element());
            }
        }

        piece.square = mv.destination();
        if mv.promotes()
        {
            piece.promote();
        }
        self.cells[mv.destination().index()] = Some(piece);

        self.history.play(mv.clone());
        self.turn = self.turn.flip();
    }
}
