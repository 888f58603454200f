mod common;
use common::*;

#[cfg(test)]
mod board
{
    use draughtsman::prelude::*;

    use super::*;
    use templates::{board, moves_from, sq};

    #[test]
    fn starting_position()
    {
        let _setup = setup::setup();
        let start = Board::new();

        assert_eq!(start.turn(), Color::Light);
        assert_eq!(start.piece_count(Color::Light), 12);
        assert_eq!(start.piece_count(Color::Dark), 12);
        assert_eq!(start.ply(), 0);
        assert!(start.occupied().all(|piece| piece.square.dark() && piece.rank == Rank::Man));

        let moves = start.legal_moves(Color::Light);
        assert_eq!(moves.len(), 7);
        assert!(moves.iter().all(|mv| !mv.is_capture() && mv.destination().row() == 4));

        assert_eq!(start.legal_moves(Color::Dark).len(), 7);
        assert_eq!(start.game_over(), (false, None));
        assert!(start.evaluate().abs() < 1e-9);
    }

    #[test]
    fn position_notation_round_trips()
    {
        let _setup = setup::setup();
        let start = Board::new();

        assert_eq!(PositionString::from(&start).to_string(), templates::START);
        assert_eq!(board(templates::START), start);

        let middlegame = board(templates::MIDDLEGAME);
        assert_eq!(PositionString::from(&middlegame).as_ref(), templates::MIDDLEGAME);
    }

    #[test]
    fn position_notation_rejects_bad_input()
    {
        let _setup = setup::setup();

        let light_square = "l......./......../......../......../......../......../......../........;Light";
        assert_eq!(light_square.parse::<Board>().map_err(|err| err.kind), Err(Kind::InvalidState));

        let short_row = ".d.d.d./......../......../......../......../......../......../........;Light";
        assert_eq!(short_row.parse::<Board>().map_err(|err| err.kind), Err(Kind::ParseError));

        let no_turn = ".d.d.d.d/......../......../......../......../......../......../........";
        assert_eq!(no_turn.parse::<Board>().map_err(|err| err.kind), Err(Kind::ParseError));
    }

    #[test]
    fn pieces_are_placed_on_empty_dark_squares()
    {
        let _setup = setup::setup();
        let mut position = Board::empty(Color::Dark);

        assert!(position.place(Piece::king_at(Color::Light, sq(7, 0))).is_ok());
        assert!(position.place(Piece::man(Color::Dark, sq(2, 3))).is_ok());

        let taken = position.place(Piece::man(Color::Dark, sq(7, 0)));
        assert_eq!(taken.map_err(|err| err.kind), Err(Kind::InvalidState));
        let light = position.place(Piece::man(Color::Dark, sq(0, 0)));
        assert_eq!(light.map_err(|err| err.kind), Err(Kind::InvalidState));

        assert_eq!(position.turn(), Color::Dark);
        assert!(position.history().is_empty());
        assert!(matches!(position.piece_at(sq(7, 0)), Some(piece) if piece.king() && piece.color == Color::Light));

        let expected = "......../......../...d..../......../......../......../......../L.......;Dark";
        assert_eq!(PositionString::from(&position).as_ref(), expected);
    }

    #[test]
    fn captures_are_mandatory()
    {
        let _setup = setup::setup();
        let position = board("......../......../......../......../...d..../..l...l./......../........;Light");

        let moves = position.legal_moves(Color::Light);
        assert_eq!(moves.len(), 1);
        assert_eq!(moves[0].origin(), sq(5, 2));
        assert_eq!(moves[0].destination(), sq(3, 4));
        assert_eq!(moves[0].captures(), &[sq(4, 3)]);
        assert!(moves[0].is_capture());
    }

    #[test]
    fn men_step_forward_only()
    {
        let _setup = setup::setup();
        let position = board(".d....../......../......../......../...l..../......../......../........;Light");

        let light = moves_from(&position, sq(4, 3));
        assert_eq!(light.len(), 2);
        assert!(light.iter().all(|mv| mv.destination().row() == 3));

        let dark = position.legal_moves(Color::Dark);
        assert_eq!(dark.len(), 2);
        assert!(dark.iter().all(|mv| mv.destination().row() == 1));
    }

    #[test]
    fn men_capture_backwards()
    {
        let _setup = setup::setup();
        let position = board("......../......../......../..l...../...d..../......../......../........;Light");

        let moves = position.legal_moves(Color::Light);
        assert_eq!(moves.len(), 1);
        assert_eq!(moves[0].destination(), sq(5, 4));
        assert_eq!(moves[0].captures(), &[sq(4, 3)]);
    }

    #[test]
    fn kings_slide()
    {
        let _setup = setup::setup();
        let position = board(".......d/......../......../......../......../......../......../L.......;Light");

        let moves = position.legal_moves(Color::Light);
        assert_eq!(moves.len(), 6);
        assert!(moves.iter().all(|mv| !mv.is_capture() && !mv.promotes()));
        assert!(moves.iter().any(|mv| mv.destination() == sq(1, 6)));
        assert!(moves.iter().all(|mv| mv.destination() != sq(0, 7)));
    }

    #[test]
    fn kings_capture_from_a_distance()
    {
        let _setup = setup::setup();
        let position = board(".d....../......../......../......../...d..../......../......../L.......;Light");

        let moves = position.legal_moves(Color::Light);
        assert_eq!(moves.len(), 4);
        assert!(moves.iter().all(|mv| mv.captures() == [sq(4, 3)]));

        let mut landings = moves.iter().map(|mv| mv.destination()).collect::<Vec<_>>();
        landings.sort();
        assert_eq!(landings, vec![sq(0, 7), sq(1, 6), sq(2, 5), sq(3, 4)]);
    }

    #[test]
    fn kings_turn_mid_chain()
    {
        let _setup = setup::setup();
        let mut position = board(templates::KING_PIVOT);

        let moves = position.legal_moves(Color::Light);
        assert!(moves.iter().all(|mv| mv.origin() == sq(7, 0) && mv.captures()[0] == sq(5, 2)));

        // Every landing beyond the first victim is its own branch; only the ones on the second diagonal continue.
        let mut doubles = moves
            .iter()
            .filter(|mv| mv.captures().len() == 2)
            .map(|mv| (mv.destination(), mv.captures().to_vec()))
            .collect::<Vec<_>>();
        doubles.sort();
        assert_eq!(
            doubles,
            vec![(sq(1, 0), vec![sq(5, 2), sq(3, 2)]), (sq(2, 1), vec![sq(5, 2), sq(3, 2)])]
        );

        let mut singles = moves.iter().filter(|mv| mv.captures().len() == 1).map(|mv| mv.destination()).collect::<Vec<_>>();
        singles.sort();
        assert_eq!(singles, vec![sq(0, 7), sq(1, 6), sq(2, 5), sq(3, 4)]);
        assert!(moves.iter().all(|mv| !mv.promotes()));

        let Some(double) = moves.iter().find(|mv| mv.destination() == sq(1, 0)).cloned()
        else
        {
            panic!("no chain ends on (1, 0)");
        };
        assert!(position.execute_move(&double).is_ok());
        assert_eq!(position.game_over(), (true, Some(Color::Light)));
        assert!(matches!(position.piece_at(sq(1, 0)), Some(piece) if piece.rank == Rank::King));
    }

    #[test]
    fn kings_capture_in_every_direction()
    {
        let _setup = setup::setup();

        // A lone victim to the northeast, northwest, southeast and southwest in turn.
        let cases = [
            ("......../......../......../......../......../..d...../......../L.......;Light", sq(4, 3)),
            ("......../......../......../......../.....d../......../.......L/........;Light", sq(3, 4)),
            (".L....../......../...d..../......../......../......../......../........;Light", sq(3, 4)),
            (".......L/......../.....d../......../......../......../......../........;Light", sq(3, 4)),
        ];

        for (position, nearest) in cases
        {
            let position = board(position);
            let moves = position.legal_moves(Color::Light);
            assert!(!moves.is_empty(), "no capture in {}", PositionString::from(&position));
            assert!(moves.iter().all(|mv| mv.captures().len() == 1), "{:?}", moves);
            assert!(moves.iter().any(|mv| mv.destination() == nearest), "{:?}", moves);
        }
    }

    #[test]
    fn chained_capture_is_one_move()
    {
        let _setup = setup::setup();
        let mut position = board("......../......../......../....d.../......../..d...../.l....../........;Light");

        let moves = position.legal_moves(Color::Light);
        assert_eq!(moves.len(), 1);

        let mv = moves[0].clone();
        assert_eq!(mv.origin(), sq(6, 1));
        assert_eq!(mv.destination(), sq(2, 5));
        assert_eq!(mv.captures(), &[sq(5, 2), sq(3, 4)]);

        assert!(position.execute_move(&mv).is_ok());
        assert_eq!(position.piece_count(Color::Dark), 0);
        let tally = position.captured(Color::Light).iter().map(|piece| (piece.color, piece.square)).collect::<Vec<_>>();
        assert_eq!(tally, vec![(Color::Dark, sq(5, 2)), (Color::Dark, sq(3, 4))]);
        assert!(position.captured(Color::Dark).is_empty());
        assert_eq!(position.game_over(), (true, Some(Color::Light)));
        assert_eq!(position.state(), GameState::LightWins);
        assert_eq!(position.evaluate(), scores::WIN);
    }

    #[test]
    fn chains_never_take_a_piece_twice()
    {
        let _setup = setup::setup();
        let position = board(templates::LOOP);

        let moves = position.legal_moves(Color::Light);
        assert_eq!(moves.len(), 2);
        assert_eq!(moves[0].destination(), sq(3, 4));
        assert_eq!(moves[0].captures(), &[sq(4, 1), sq(2, 1), sq(2, 3)]);
        assert_eq!(moves[1].destination(), sq(3, 0));
        assert_eq!(moves[1].captures(), &[sq(4, 3), sq(2, 3), sq(2, 1)]);
        assert!(moves.iter().all(|mv| mv.destination() != mv.origin()));

        templates::assert_captures_sound(&position, Color::Light);
        templates::assert_captures_sound(&board(templates::DOUBLE_JUMPS), Color::Light);
        for reached in templates::play_first_moves(Board::new(), 40)
        {
            templates::assert_captures_sound(&reached, reached.turn());
        }
    }

    #[test]
    fn every_maximal_chain_is_legal()
    {
        let _setup = setup::setup();
        let position = board(templates::DOUBLE_JUMPS);

        let mut destinations = position.legal_moves(Color::Light).iter().map(|mv| mv.destination()).collect::<Vec<_>>();
        destinations.sort();
        assert_eq!(destinations, vec![sq(1, 2), sq(1, 6)]);
    }

    #[test]
    fn men_promote_on_the_far_edge()
    {
        let _setup = setup::setup();
        let mut position = board("......../..l...../......../......../......../......../.d....../........;Light");

        let moves = moves_from(&position, sq(1, 2));
        assert_eq!(moves.len(), 2);
        assert!(moves.iter().all(|mv| mv.promotes()));

        assert!(position.execute_move(&moves[0]).is_ok());
        let promoted = position.piece_at(moves[0].destination());
        assert!(matches!(promoted, Some(piece) if piece.rank == Rank::King && piece.color == Color::Light));

        // Dark's man promotes on the opposite edge.
        let dark = position.legal_moves(Color::Dark);
        assert!(dark.iter().all(|mv| mv.promotes() && mv.destination().row() == 7));
    }

    #[test]
    fn clones_are_independent()
    {
        let _setup = setup::setup();
        let original = Board::new();
        let mut copy = original.clone();

        let mv = copy.legal_moves(Color::Light)[0].clone();
        assert!(copy.execute_move(&mv).is_ok());

        assert_eq!(original, Board::new());
        assert_eq!(original.ply(), 0);
        assert_eq!(original.turn(), Color::Light);
        assert_eq!(copy.ply(), 1);
        assert_eq!(copy.turn(), Color::Dark);
        assert_eq!(copy.history().prev(), Some(&mv));

        // A search copy keeps the position and the tallies but starts its own history.
        let mut detached = copy.detached();
        assert_eq!(PositionString::from(&detached), PositionString::from(&copy));
        assert_eq!(detached.legal_moves(Color::Dark), copy.legal_moves(Color::Dark));
        assert!(detached.history().is_empty());

        let reply = detached.legal_moves(Color::Dark)[0].clone();
        assert!(detached.execute_move(&reply).is_ok());
        assert_eq!(detached.history().entries().map(|entry| entry.color).collect::<Vec<_>>(), vec![Color::Dark]);
        assert_eq!(copy.ply(), 1);
        assert_eq!(copy.turn(), Color::Dark);
    }

    #[test]
    fn illegal_moves_change_nothing()
    {
        let _setup = setup::setup();
        let mut position = Board::new();
        let before = position.clone();

        let too_far = Move::step(sq(5, 0), sq(3, 2), false);
        let empty_origin = Move::step(sq(4, 1), sq(3, 2), false);
        let wrong_color = Move::step(sq(2, 1), sq(3, 2), false);

        for mv in [too_far, empty_origin, wrong_color]
        {
            let result = position.execute_move(&mv);
            assert_eq!(result.map_err(|err| err.kind), Err(Kind::InvalidMove), "{} was accepted", mv);
            assert_eq!(position, before);
        }

        // A move that was legal once is re-validated, not trusted.
        let mv = position.legal_moves(Color::Light)[0].clone();
        assert!(position.execute_move(&mv).is_ok());
        assert_eq!(position.execute_move(&mv).map_err(|err| err.kind), Err(Kind::InvalidMove));
    }

    #[test]
    fn a_side_without_pieces_loses()
    {
        let _setup = setup::setup();

        let no_dark = board("......../......../......../......../......../..l...../......../........;Dark");
        assert_eq!(no_dark.game_over(), (true, Some(Color::Light)));

        let no_light = board("......../......../.d....../......../......../......../......../........;Light");
        assert_eq!(no_light.game_over(), (true, Some(Color::Dark)));
        assert_eq!(no_light.evaluate(), -scores::WIN);
    }

    #[test]
    fn a_side_without_moves_loses()
    {
        let _setup = setup::setup();
        let blocked = board(".d....../l......./......../......../......../......../......../........;Light");

        assert!(blocked.legal_moves(Color::Light).is_empty());
        assert_eq!(blocked.game_over(), (true, Some(Color::Dark)));
        assert_eq!(blocked.evaluate(), -scores::WIN);
    }

    #[test]
    fn history_records_colors()
    {
        let _setup = setup::setup();
        let boards = templates::play_first_moves(Board::new(), 4);
        let last = boards.last().map(|board| board.history().clone()).unwrap_or_default();

        assert!(boards[0].history().is_empty());
        assert!(!last.is_empty());

        let colors = last.entries().map(|entry| entry.color).collect::<Vec<_>>();
        assert_eq!(colors, vec![Color::Light, Color::Dark, Color::Light, Color::Dark]);
    }

    #[test]
    fn moves_resolve_from_text()
    {
        let _setup = setup::setup();
        let start = Board::new();
        let legal = start.legal_moves(Color::Light);

        assert_eq!(Move::resolve("1", &legal).ok(), Some(legal[0].clone()));
        assert_eq!(Move::resolve("5,0-4,1", &legal).map(|mv| mv.destination()).ok(), Some(sq(4, 1)));
        assert_eq!(Move::resolve("(5, 2) -> (4, 3)", &legal).map(|mv| mv.origin()).ok(), Some(sq(5, 2)));

        assert_eq!(Move::resolve("0", &legal).map_err(|err| err.kind), Err(Kind::InvalidMove));
        assert_eq!(Move::resolve("8", &legal).map_err(|err| err.kind), Err(Kind::InvalidMove));
        assert_eq!(Move::resolve("5,0-3,2", &legal).map_err(|err| err.kind), Err(Kind::InvalidMove));
        assert_eq!(Move::resolve("e3-d4", &legal).map_err(|err| err.kind), Err(Kind::InvalidMove));

        let looping = board(templates::LOOP);
        let legal = looping.legal_moves(Color::Light);
        assert_eq!(Move::resolve("5,2-3,4", &legal).ok(), Some(legal[0].clone()));
        assert_eq!(Move::resolve("5,2-5,2", &legal).map_err(|err| err.kind), Err(Kind::InvalidMove));

        // Two chains between the same squares can only be told apart by index.
        let around = |first: Square, second: Square| {
            let captures = [first, second].into_iter().collect::<Captures>();
            Move::capture(sq(5, 2), sq(1, 2), captures, false)
        };
        let twins = vec![around(sq(4, 1), sq(2, 1)), around(sq(4, 3), sq(2, 3))];
        assert_eq!(Move::resolve("5,2-1,2", &twins).map_err(|err| err.kind), Err(Kind::AmbiguousMove));
        assert_eq!(Move::resolve("2", &twins).ok(), Some(twins[1].clone()));
    }

    #[test]
    fn moves_display()
    {
        let _setup = setup::setup();
        let position = board(templates::DOUBLE_JUMPS);
        let moves = position.legal_moves(Color::Light);

        assert_eq!(moves[0].to_string(), "(5, 6) -> (1, 2) x [(4, 5), (2, 3)]");
        assert_eq!(Move::step(sq(1, 2), sq(0, 1), true).to_string(), "(1, 2) -> (0, 1) =K");
    }
}
