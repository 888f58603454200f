use itertools::Itertools;

use crate::prelude::*;

impl Board
{
    /// Generates every capturing move available to the given color.
    ///
    /// Each completed chain is its own move. Longer chains are not preferred over shorter ones here; that choice is
    /// left to whoever picks among the legal moves.
    pub fn capture_moves(&self, color: Color) -> Vec<Move>
    {
        let mut moves: Vec<Move> = Vec::new();
        for piece in self.pieces(color)
        {
            self.extend_chain(&piece, piece.square, &Captures::new(), &mut moves);
        }

        // A flying king can reach the same chain through different landing squares.
        moves.into_iter().unique().collect()
    }

    /// Generates all legal moves for the given color, in row-major order of the moving pieces.
    ///
    /// Captures are mandatory: if any exist, nothing else is legal.
    pub fn legal_moves(&self, color: Color) -> Vec<Move>
    {
        let captures = self.capture_moves(color);
        if !captures.is_empty()
        {
            return captures;
        }

        let mut moves: Vec<Move> = Vec::new();
        for piece in self.pieces(color)
        {
            self.generate_steps_into(&piece, &mut moves);
        }
        moves
    }
}

/// Private implementation for move generation.
impl Board
{
    /// Recursively continues a capture chain from the given square.
    ///
    /// Every branch carries its own copy of the squares taken so far, so siblings never see each other's captures.
    fn extend_chain(&self, piece: &Piece, at: Square, taken: &Captures, moves: &mut Vec<Move>)
    {
        let mut extended = false;

        for direction in Direction::all()
        {
            let Some((victim, landings)) = self.jump(piece, at, direction, taken)
            else
            {
                continue;
            };

            let mut chain = taken.clone();
            if chain.try_push(victim).is_err()
            {
                continue;
            }

            for landing in landings
            {
                self.extend_chain(piece, landing, &chain, moves);
                extended = true;
            }
        }

        // A chain only ends where it cannot continue, and an empty chain is not a capture at all.
        if !extended && !taken.is_empty()
        {
            moves.push(Move::capture(piece.square, at, taken.clone(), piece.promotes_at(at)));
        }
    }

    /// Generates the non-capturing moves of a single piece.
    fn generate_steps_into(&self, piece: &Piece, moves: &mut Vec<Move>)
    {
        let from = piece.square;

        if piece.king()
        {
            for direction in Direction::all()
            {
                for to in from.ray(direction).take_while(|sq| self.piece_at(*sq).is_none())
                {
                    moves.push(Move::step(from, to, false));
                }
            }
        }
        else
        {
            for direction in Direction::forward(piece.color)
            {
                if let Some(to) = from.offset(direction).filter(|sq| self.piece_at(*sq).is_none())
                {
                    moves.push(Move::step(from, to, piece.promotes_at(to)));
                }
            }
        }
    }

    /// Looks for a capture from `at` along one diagonal.
    ///
    /// Returns the square of the piece that would be taken and every square the capturer could land on. A man must find
    /// the victim adjacent and land directly behind it; a king may slide up to the victim and land on any vacant square
    /// behind it before the next occupied square. Pieces already taken in this chain stay on the board until the move
    /// completes, so they block rather than being jumped twice. The capturer stays on its starting square as well, so a
    /// chain can neither pass through nor land on it.
    fn jump(&self, piece: &Piece, at: Square, direction: Direction, taken: &Captures) -> Option<(Square, Vec<Square>)>
    {
        let vacant = |sq: &Square| self.piece_at(*sq).is_none();

        let mut ray = at.ray(direction);
        let victim = if piece.king()
        {
            ray.find(|sq| !vacant(sq))?
        }
        else
        {
            ray.next().filter(|sq| !vacant(sq))?
        };

        let target = self.piece_at(victim)?;
        if target.color == piece.color || taken.contains(&victim)
        {
            return None;
        }

        let landings: Vec<Square> = if piece.king()
        {
            ray.take_while(vacant).collect()
        }
        else
        {
            ray.next().filter(vacant).into_iter().collect()
        };

        if landings.is_empty()
        {
            None
        }
        else
        {
            Some((victim, landings))
        }
    }
}
