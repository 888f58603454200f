use draughtsman::prelude::*;

/// The standard starting position.
pub const START: &str = ".d.d.d.d/d.d.d.d./.d.d.d.d/......../......../l.l.l.l./.l.l.l.l/l.l.l.l.;Light";

/// A Light man ringed by four Dark men. Its own square blocks the chain, so either way round it takes three of them.
pub const LOOP: &str = "......../......../.d.d..../......../.d.d..../..l...../......../........;Light";

/// A quiet middlegame with a few pieces each and no captures for either side.
pub const MIDDLEGAME: &str = ".d.d..../d......./...d.d../......../......../..l.l.../.l...l../l.......;Light";

/// A Light king that has to turn onto a second diagonal to finish its chain.
pub const KING_PIVOT: &str = "......../......../......../..d...../......../..d...../......../L.......;Light";

/// A Light man with a choice of two double jumps.
pub const DOUBLE_JUMPS: &str = "......../......../...d.d../......../.....d../......l./......../........;Light";

/// Parses a position, panicking with the full error chain if it is invalid.
pub fn board(position: &str) -> Board
{
    match position.parse::<Board>()
    {
        | Ok(board) => board,
        | Err(err) => panic!("invalid position {}:\n\tdue to {}", position, err),
    }
}

/// Builds a square, panicking if it is off the board.
pub fn sq(row: u8, col: u8) -> Square
{
    match Square::new(row, col)
    {
        | Ok(square) => square,
        | Err(err) => panic!("{}", err),
    }
}

/// Gets the legal moves of the side to move that start on the given square.
pub fn moves_from(board: &Board, origin: Square) -> Vec<Move>
{
    board
        .legal_moves(board.turn())
        .into_iter()
        .filter(|mv| mv.origin() == origin)
        .collect()
}

/// Checks that every capture the given color could make takes distinct opposing pieces.
pub fn assert_captures_sound(board: &Board, color: Color)
{
    for mv in board.legal_moves(color)
    {
        let captures = mv.captures();
        for (i, square) in captures.iter().enumerate()
        {
            assert!(!captures[..i].contains(square), "{} takes {} twice", mv, square);

            let victim = board.piece_at(*square);
            assert!(
                matches!(victim, Some(piece) if piece.color != color),
                "{} takes {} which holds {:?}",
                mv,
                square,
                victim
            );
        }
    }
}

/// Plays a sequence of moves, always picking the first legal one, and returns the boards along the way.
pub fn play_first_moves(mut board: Board, count: usize) -> Vec<Board>
{
    let mut boards = vec![board.clone()];
    for _ in 0..count
    {
        if board.game_over().0
        {
            break;
        }

        let mv = board.legal_moves(board.turn())[0].clone();
        if let Err(err) = board.execute_move(&mv)
        {
            panic!("first legal move {} was rejected:\n\tdue to {}", mv, err);
        }
        boards.push(board.clone());
    }
    boards
}
