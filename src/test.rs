#[cfg(test)]
pub mod test {
    use anyhow::Result;

    use crate::{
        board::{Board, GridBoard, Move},
        coord::Coord,
        error::{BoardError, SearchError},
        evaluator::{connectivity_score, evaluate, positional_score, LOSS_SCORE, WIN_SCORE},
        minimax::{Minimax, SearchConfig},
        scanner::{scan, LineSpan, Visited},
        tournament::{self, TournamentConfig},
        weights::{run_coefficient, CoefficientPolicy},
        Color, HEIGHT, WIDTH,
    };

    const EMPTY_ROWS: [&str; HEIGHT] = [
        ".......", ".......", ".......", ".......", ".......", ".......",
    ];

    // a full board without four in a row
    const DRAWN_ROWS: [&str; HEIGHT] = [
        "XXOOXXO", "OOXXOOX", "XXOOXXO", "OOXXOOX", "XXOOXXO", "OOXXOOX",
    ];

    fn bot(depth: u32) -> Minimax {
        Minimax::new(SearchConfig::default().with_depth(depth))
    }

    /// A board that never reports a finished game, to reach evaluator states
    /// a real game would stop before
    #[derive(Clone)]
    struct UnfinishedBoard(GridBoard);

    impl Board for UnfinishedBoard {
        fn legal_moves(&self) -> Vec<Move> {
            (0..WIDTH).filter(|&column| self.0.playable(column)).collect()
        }
        fn apply_move(&mut self, color: Color, mv: Move) -> Result<(), BoardError> {
            self.0.apply_move(color, mv)
        }
        fn is_game_over(&self) -> bool {
            false
        }
        fn cell(&self, row: usize, col: usize) -> Color {
            self.0.cell(row, col)
        }
    }

    // minimax without pruning, for comparison against the agent
    fn plain_minimax(board: &GridBoard, depth: u32, maximizing: bool, leaves: &mut usize) -> Result<i32> {
        let moves = board.legal_moves();
        if depth == 0 || moves.is_empty() {
            *leaves += 1;
            return Ok(evaluate(board, maximizing, CoefficientPolicy::Saturate)?);
        }
        let color = if maximizing { Color::Positive } else { Color::Negative };
        let mut values = vec![];
        for mv in moves {
            let mut next = board.clone();
            next.apply_move(color, mv)?;
            values.push(plain_minimax(&next, depth - 1, !maximizing, leaves)?);
        }
        Ok(if maximizing {
            values.into_iter().max().unwrap_or(i32::MIN)
        } else {
            values.into_iter().min().unwrap_or(i32::MAX)
        })
    }

    #[test]
    pub fn board_rules() -> Result<()> {
        let board = GridBoard::from_moves("4453")?;
        assert_eq!(board.cell(5, 3), Color::Positive);
        assert_eq!(board.cell(4, 3), Color::Negative);
        assert_eq!(board.cell(5, 4), Color::Positive);
        assert_eq!(board.cell(5, 2), Color::Negative);
        assert_eq!(board.to_move(), Color::Positive);
        assert_eq!(board.dimensions(), (HEIGHT, WIDTH));

        assert_eq!(GridBoard::from_moves("408"), Err(BoardError::Parse("0".to_string())));
        assert_eq!(
            GridBoard::from_moves("1111111"),
            Err(BoardError::ColumnFull { column: 0 })
        );
        assert_eq!(GridBoard::from_moves("12121212"), Err(BoardError::GameOver));

        let mut board = GridBoard::new();
        assert_eq!(
            board.apply_move(Color::Positive, WIDTH),
            Err(BoardError::ColumnOutOfRange { column: WIDTH })
        );
        assert_eq!(board.apply_move(Color::Empty, 0), Err(BoardError::EmptyPiece));
        assert_eq!(board.legal_moves(), (0..WIDTH).collect::<Vec<_>>());
        Ok(())
    }

    #[test]
    pub fn won_board_has_no_moves() -> Result<()> {
        let board = GridBoard::from_moves("1212121")?;
        assert!(board.is_game_over());
        assert_eq!(board.winner(), Some(Color::Positive));
        assert!(board.legal_moves().is_empty());

        // diagonal found by a full scan
        let board = GridBoard::from_rows([
            ".......", ".......", "...O...", "..OX...", ".OXX...", "OXXX...",
        ])?;
        assert_eq!(board.winner(), Some(Color::Negative));
        assert_eq!(board.inverted().winner(), Some(Color::Positive));

        let drawn = GridBoard::from_rows(DRAWN_ROWS)?;
        assert!(!drawn.is_game_over());
        assert!(drawn.is_full());
        assert!(drawn.legal_moves().is_empty());
        Ok(())
    }

    #[test]
    pub fn finished_games_score_as_sentinels() -> Result<()> {
        for moves in ["1212121", "1526374", "4545454", "12121232"].iter() {
            let board = GridBoard::from_moves(moves)?;
            assert!(board.is_game_over());
            for policy in [CoefficientPolicy::Saturate, CoefficientPolicy::Strict].iter() {
                assert_eq!(evaluate(&board, true, *policy)?, LOSS_SCORE);
                assert_eq!(evaluate(&board, false, *policy)?, WIN_SCORE);
            }
        }
        Ok(())
    }

    #[test]
    pub fn full_board_scores_zero() -> Result<()> {
        let board = GridBoard::from_rows(DRAWN_ROWS)?;
        assert_eq!(evaluate(&board, true, CoefficientPolicy::Saturate)?, 0);
        assert_eq!(evaluate(&board, false, CoefficientPolicy::Strict)?, 0);
        Ok(())
    }

    #[test]
    pub fn static_scores() -> Result<()> {
        let board = GridBoard::from_rows(EMPTY_ROWS)?;
        assert_eq!(evaluate(&board, true, CoefficientPolicy::Saturate)?, 0);

        let pair = GridBoard::from_rows([
            ".......", ".......", ".......", ".......", ".......", "..XX...",
        ])?;
        assert_eq!(positional_score(&pair), 12);
        assert_eq!(connectivity_score(&pair, CoefficientPolicy::Saturate)?, 10);
        assert_eq!(evaluate(&pair, true, CoefficientPolicy::Saturate)?, 22);

        // the open pair and the open stack cancel out
        let contested = GridBoard::from_rows([
            ".......", ".......", ".......", ".......", "......O", "..XX..O",
        ])?;
        assert_eq!(positional_score(&contested), 5);
        assert_eq!(connectivity_score(&contested, CoefficientPolicy::Saturate)?, 0);

        let board = GridBoard::from_rows([
            ".......", ".......", ".......", "..O....", "..XO...", ".XXOX..",
        ])?;
        assert_eq!(positional_score(&board), -6);
        assert_eq!(connectivity_score(&board, CoefficientPolicy::Saturate)?, -10);
        assert_eq!(evaluate(&board, false, CoefficientPolicy::Saturate)?, -16);
        Ok(())
    }

    #[test]
    pub fn positional_score_symmetry() -> Result<()> {
        for moves in ["4453", "1234567", "776655", "3344556", "12344321"].iter() {
            let board = GridBoard::from_moves(moves)?;
            let score = positional_score(&board);
            assert_eq!(positional_score(&board.mirrored()), score);
            assert_eq!(positional_score(&board.inverted()), -score);
            assert_eq!(positional_score(&board.mirrored().inverted()), -score);
        }
        Ok(())
    }

    #[test]
    pub fn line_scan() -> Result<()> {
        let board = GridBoard::from_rows([
            ".......", ".......", ".......", ".......", ".......", "XX.O...",
        ])?;
        let mut visited = Visited::new();

        let span = scan(&board, Coord::new(5, 0), Coord::new(0, 1), Color::Positive, &mut visited);
        assert_eq!(span, LineSpan { connected: 1, reach: 2 });
        assert!(visited.is_marked(5, 1));
        assert!(visited.is_marked(5, 2));
        assert!(!visited.is_marked(5, 3));

        // off the grid straight away
        let span = scan(&board, Coord::new(5, 0), Coord::new(0, -1), Color::Positive, &mut visited);
        assert_eq!(span, LineSpan::default());

        let span = scan(&board, Coord::new(5, 3), Coord::new(-1, 0), Color::Negative, &mut visited);
        assert_eq!(span, LineSpan { connected: 0, reach: 5 });
        Ok(())
    }

    #[test]
    pub fn coefficient_policy() -> Result<()> {
        assert_eq!(run_coefficient(0, CoefficientPolicy::Strict)?, 0);
        assert_eq!(run_coefficient(1, CoefficientPolicy::Strict)?, 10);
        assert_eq!(run_coefficient(2, CoefficientPolicy::Strict)?, 100);
        assert_eq!(run_coefficient(3, CoefficientPolicy::Saturate)?, 100);
        assert_eq!(
            run_coefficient(3, CoefficientPolicy::Strict),
            Err(SearchError::HeuristicRange { length: 3 })
        );

        let board = UnfinishedBoard(GridBoard::from_rows([
            ".......", ".......", ".......", ".......", ".......", "XXXX...",
        ])?);
        assert_eq!(connectivity_score(&board, CoefficientPolicy::Saturate)?, 100);
        assert_eq!(
            connectivity_score(&board, CoefficientPolicy::Strict),
            Err(SearchError::HeuristicRange { length: 3 })
        );

        let mut strict = Minimax::new(
            SearchConfig::default()
                .with_depth(1)
                .with_coefficient_policy(CoefficientPolicy::Strict),
        );
        assert_eq!(
            strict.select_move(&board),
            Err(SearchError::HeuristicRange { length: 3 })
        );
        assert!(bot(1).select_move(&board).is_ok());
        Ok(())
    }

    #[test]
    pub fn invalid_arguments() -> Result<()> {
        let mut agent = bot(0);
        assert!(matches!(
            agent.select_move(&GridBoard::new()),
            Err(SearchError::InvalidArgument(_))
        ));

        let mut agent = bot(3);
        assert!(matches!(
            agent.select_move(&GridBoard::from_moves("1212121")?),
            Err(SearchError::InvalidArgument(_))
        ));
        assert!(matches!(
            agent.select_move(&GridBoard::from_rows(DRAWN_ROWS)?),
            Err(SearchError::InvalidArgument(_))
        ));
        assert_eq!(agent.last_leaf_count(), 0);
        Ok(())
    }

    #[test]
    pub fn empty_board_prefers_centre() -> Result<()> {
        let mut agent = bot(1);
        let selection = agent.select_move(&GridBoard::new())?;
        assert_eq!(selection.mv, 3);
        assert_eq!(selection.value, 7);
        assert_eq!(
            selection.scores,
            vec![(0, 3), (1, 4), (2, 5), (3, 7), (4, 5), (5, 4), (6, 3)]
        );
        assert_eq!(selection.leaf_count, 7);
        assert_eq!(agent.last_leaf_count(), 7);
        Ok(())
    }

    #[test]
    pub fn ties_keep_earliest_move() -> Result<()> {
        let board = GridBoard::from_moves("444444")?;

        let selection = bot(1).select_move(&board)?;
        assert_eq!(selection.scores[2], (2, 15));
        assert_eq!(selection.scores[3], (4, 15));
        assert_eq!(selection.mv, 2);

        let selection = bot(2).select_move(&board)?;
        assert_eq!(selection.scores[2], (2, -3));
        assert_eq!(selection.scores[3], (4, -3));
        assert_eq!(selection.mv, 2);

        for moves in ["", "4", "4453", "112233", "5161725"].iter() {
            let selection = bot(3).select_move(&GridBoard::from_moves(moves)?)?;
            let first_best = selection
                .scores
                .iter()
                .find(|(_, value)| *value == selection.value)
                .map(|(mv, _)| *mv);
            assert_eq!(first_best, Some(selection.mv));
        }
        Ok(())
    }

    #[test]
    pub fn takes_immediate_win() -> Result<()> {
        let board = GridBoard::from_moves("112233")?;

        let selection = bot(1).select_move(&board)?;
        assert_eq!((selection.mv, selection.value), (3, WIN_SCORE));
        assert_eq!(selection.leaf_count, 7);

        let selection = bot(3).select_move(&board)?;
        assert_eq!((selection.mv, selection.value), (3, WIN_SCORE));
        assert_eq!(selection.leaf_count, 155);
        Ok(())
    }

    #[test]
    pub fn blocks_opponent_threat() -> Result<()> {
        let board = GridBoard::from_rows([
            ".......", ".......", ".......", ".......", ".....X.", "OOO..XX",
        ])?;

        // one ply is not enough to see the threat
        assert_eq!(bot(1).select_move(&board)?.mv, 5);

        let selection = bot(2).select_move(&board)?;
        assert_eq!((selection.mv, selection.value), (3, 0));
        for &(mv, value) in selection.scores.iter() {
            if mv != 3 {
                assert_eq!(value, LOSS_SCORE);
            }
        }

        assert_eq!(bot(4).select_move(&board)?.mv, 3);
        Ok(())
    }

    #[test]
    pub fn negative_side_through_inverted_board() -> Result<()> {
        let board = GridBoard::from_moves("1526371")?;
        assert_eq!(board.to_move(), Color::Negative);

        let selection = bot(2).select_move(&board.inverted())?;
        assert_eq!((selection.mv, selection.value), (3, WIN_SCORE));
        Ok(())
    }

    #[test]
    pub fn pruning_matches_plain_minimax() -> Result<()> {
        for moves in ["", "4", "4453", "112233", "5161725"].iter() {
            let board = GridBoard::from_moves(moves)?;
            for depth in 1..=4 {
                let mut agent = bot(depth);
                let selection = agent.select_move(&board)?;

                let mut leaves = 0;
                let mut expected = vec![];
                for mv in board.legal_moves() {
                    let mut next = board.clone();
                    next.apply_move(Color::Positive, mv)?;
                    expected.push((mv, plain_minimax(&next, depth - 1, false, &mut leaves)?));
                }
                assert_eq!(selection.scores, expected);
                assert!(selection.leaf_count <= leaves);
            }
        }

        // pruning only starts paying off from three plies
        assert_eq!(bot(2).select_move(&GridBoard::new())?.leaf_count, 49);
        assert_eq!(bot(3).select_move(&GridBoard::new())?.leaf_count, 244);
        Ok(())
    }

    #[test]
    pub fn selection_is_deterministic() -> Result<()> {
        let board = GridBoard::from_moves("3344")?;
        let mut agent = bot(5);
        let first = agent.select_move(&board)?;
        let second = agent.select_move(&board)?;
        assert_eq!(first, second);

        // the counter only reflects the latest call
        agent = bot(1);
        agent.select_move(&board)?;
        assert_eq!(agent.last_leaf_count(), 7);
        Ok(())
    }

    #[test]
    pub fn opening_enumeration() {
        assert_eq!(tournament::openings(0).len(), 1);
        assert_eq!(tournament::openings(1).len(), WIDTH);
        assert_eq!(tournament::openings(2).len(), WIDTH * WIDTH);
        assert!(tournament::openings(3)
            .iter()
            .all(|board| board.num_moves() == 3 && !board.is_game_over()));
    }

    #[test]
    pub fn tournament_plays_every_game() -> Result<()> {
        let mut positive = bot(2);
        let mut negative = bot(1);
        let board = GridBoard::from_moves("44")?;
        let winner = tournament::play_game(board, &mut positive, &mut negative)?;
        assert_ne!(winner, Some(Color::Empty));

        let config = TournamentConfig {
            agent_a: SearchConfig::default().with_depth(2),
            agent_b: SearchConfig::default().with_depth(1),
            opening_plies: 1,
        };
        let result = tournament::run(&config, false)?;
        assert_eq!(result.games(), 2 * WIDTH);
        Ok(())
    }
}
