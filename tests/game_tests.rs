use rand::rngs::SmallRng;
use rand::SeedableRng;
use seabattle::{config, AiPlayer, GameSession, GameStatus, Player, ShotOutcome};

fn fresh_session(seed: u64, size: u8) -> GameSession {
    let mut rng = SmallRng::seed_from_u64(seed);
    let mut first = AiPlayer::new();
    let mut second = AiPlayer::new();
    let board_a = first.place_fleet(&mut rng, size, false).unwrap();
    let board_b = second.place_fleet(&mut rng, size, false).unwrap();
    let players: [Box<dyn Player>; 2] = [Box::new(first), Box::new(second)];
    GameSession::new(rng, players, [board_a, board_b])
}

#[test]
fn test_outcome_turn_contract() {
    assert!(!ShotOutcome::Miss.repeats_turn());
    assert!(ShotOutcome::Damaged.repeats_turn());
    assert!(ShotOutcome::Sunk.repeats_turn());
}

#[test]
fn test_session_starts_in_progress() {
    let session = fresh_session(1, 6);
    assert_eq!(session.status(0), GameStatus::InProgress);
    assert_eq!(session.status(1), GameStatus::InProgress);
    assert_eq!(session.winner(), None);
}

#[test]
fn test_ai_vs_ai_game_completes() {
    for seed in [123, 456, 789] {
        let mut session = fresh_session(seed, 6);
        let winner = session.run().unwrap();
        let loser = 1 - winner;

        assert_eq!(session.status(winner), GameStatus::Won);
        assert_eq!(session.status(loser), GameStatus::Lost);
        assert_eq!(session.board(loser).remaining_ships(), 0);
        assert!(session.board(winner).remaining_ships() > 0);
        assert_eq!(
            session.board(loser).sunk_count(),
            config::ship_count(6).unwrap()
        );

        // a side never fires at the same cell twice
        assert!(session.shots_fired(winner) <= 36);
        assert!(session.shots_fired(loser) <= 36);
    }
}

#[test]
fn test_every_board_size_plays_out() {
    for size in config::MIN_BOARD_SIZE..=config::MAX_BOARD_SIZE {
        let mut session = fresh_session(u64::from(size), size);
        let winner = session.run().unwrap();
        assert_eq!(session.board(1 - winner).remaining_ships(), 0);
    }
}
