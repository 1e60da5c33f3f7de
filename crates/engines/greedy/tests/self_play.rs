use arcade_chess::{
    Board, Color, Game, GameConfig, GameMode, MoveSelector, QueueScheduler, TurnState, legal_moves,
};
use greedy_engine::GreedyEngine;

fn cvc_game(seed: u64) -> Game<GreedyEngine, QueueScheduler> {
    let config = GameConfig {
        think_delay_ms: 0,
        mode: GameMode::ComputerVsComputer,
    };
    Game::new(GreedyEngine::seeded(seed), QueueScheduler::new(), config)
}

/// Fire tickets until the game ends or `max_plies` moves were played.
fn play_out(game: &mut Game<GreedyEngine, QueueScheduler>, max_plies: usize) {
    while game.log().len() < max_plies {
        let Some(due) = game.scheduler_mut().next_due() else {
            break;
        };
        let before = game.status().side_to_move;
        assert!(game.on_think(due.ticket));
        match game.status().turn_state {
            TurnState::GameOver(_) => break,
            _ => assert_eq!(game.status().side_to_move, before.other()),
        }
    }
}

#[test]
fn greedy_self_play_ends_with_a_king_capture_or_runs_out() {
    for seed in 0..4 {
        let mut game = cvc_game(seed);
        play_out(&mut game, 400);

        if let TurnState::GameOver(winner) = game.status().turn_state {
            let last = game.last_move().copied();
            match last {
                Some(rec) if rec.captured_king() => assert_eq!(rec.color, winner),
                _ => {
                    // Lost on having no moves at all.
                    let loser = winner.other();
                    assert!(legal_moves(game.board(), loser).is_empty());
                }
            }
        }
    }
}

#[test]
fn seeded_self_play_is_reproducible() {
    let mut a = cvc_game(11);
    let mut b = cvc_game(11);
    play_out(&mut a, 60);
    play_out(&mut b, 60);
    assert_eq!(a.log(), b.log());
    assert_eq!(a.snapshot(), b.snapshot());
}

#[test]
fn rook_takes_king_and_wins() {
    let board = Board::from_placement("8/8/8/3R3k/8/8/8/4K3").unwrap();
    let config = GameConfig {
        think_delay_ms: 0,
        mode: GameMode::HumanVsComputer,
    };
    let mut game = Game::with_position(
        GreedyEngine::seeded(0),
        QueueScheduler::new(),
        config,
        board,
        Color::White,
    );
    game.select_square(3, 3);
    game.select_square(3, 7);
    let st = game.status();
    assert_eq!(st.winner, Some(Color::White));
    assert_eq!(st.turn_state, TurnState::GameOver(Color::White));
}

#[test]
fn computer_side_with_only_boxed_in_pieces_has_no_move() {
    let boxed = Board::from_placement("7K/8/8/8/8/8/pp6/kp6").unwrap();
    let mut engine = GreedyEngine::seeded(3);
    assert_eq!(engine.select_move(&boxed, Color::Black), None);

    // Surrounded by enemy attackers is not the same as having no move: the
    // king may walk into danger because nothing checks for it.
    let hunted = Board::from_placement("7K/8/8/8/8/2Q5/8/k7").unwrap();
    let picked = engine.select_move(&hunted, Color::Black);
    assert!(picked.is_some());
}

#[test]
fn computer_reply_in_human_game() {
    let config = GameConfig {
        think_delay_ms: 250,
        mode: GameMode::HumanVsComputer,
    };
    let mut game = Game::new(GreedyEngine::seeded(5), QueueScheduler::new(), config);
    game.select_square(6, 4);
    game.select_square(4, 4);
    let due = game.scheduler_mut().next_due().unwrap();
    assert_eq!(due.delay.as_millis(), 250);
    assert!(game.on_think(due.ticket));
    assert_eq!(game.status().turn_state, TurnState::AwaitingSelection);
    assert_eq!(game.move_log(10).len(), 2);
    assert_eq!(game.move_log(10)[1].color, Color::Black);
}
