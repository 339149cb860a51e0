use clap::Parser;
use rand::rngs::SmallRng;
use rand::SeedableRng;

use seabattle::{config, ui, AiPlayer, CliPlayer, GameSession, Player};

#[derive(Parser)]
#[command(author, version, about = "Console sea battle", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Parser)]
enum Commands {
    /// Play against the computer.
    Play {
        #[arg(long, default_value_t = 6, value_parser = clap::value_parser!(u8).range(6..=9))]
        size: u8,
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
        #[arg(long, help = "Place your ships by hand instead of at random")]
        manual: bool,
    },
    /// Watch the computer play itself.
    Auto {
        #[arg(long, default_value_t = 6, value_parser = clap::value_parser!(u8).range(6..=9))]
        size: u8,
        #[arg(long, default_value_t = 1)]
        games: u32,
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
    },
}

fn main() -> anyhow::Result<()> {
    seabattle::init_logging();
    let cli = Cli::parse();
    match cli.command {
        Commands::Play { size, seed, manual } => play(size, seed, manual),
        Commands::Auto { size, games, seed } => auto(size, games, seed),
    }
}

fn rng_from(seed: Option<u64>) -> SmallRng {
    match seed {
        Some(s) => SmallRng::seed_from_u64(s),
        None => {
            let mut seed_rng = rand::rng();
            SmallRng::from_rng(&mut seed_rng)
        }
    }
}

fn play(size: u8, seed: Option<u64>, manual: bool) -> anyhow::Result<()> {
    let mut rng = rng_from(seed);
    let mut human = if manual {
        CliPlayer::with_manual_placement()
    } else {
        CliPlayer::new()
    };
    let mut computer = AiPlayer::new();

    let own = human.place_fleet(&mut rng, size, false)?;
    let enemy = computer.place_fleet(&mut rng, size, true)?;

    let players: [Box<dyn Player>; 2] = [Box::new(human), Box::new(computer)];
    let mut session = GameSession::new(rng, players, [own, enemy]);

    println!(
        "Sink all {} enemy ships. Moves look like `c4`.",
        config::ship_count(size).unwrap_or_default()
    );

    let mut attacker = 0;
    let winner = loop {
        if attacker == 0 {
            println!("{}", ui::draw_player_view(session.board(0), session.board(1)));
        }
        let record = session.turn(attacker)?;
        if let Some(winner) = session.winner() {
            break winner;
        }
        if !record.outcome.repeats_turn() {
            attacker = 1 - attacker;
        }
    };

    println!("{}", ui::draw_player_view(session.board(0), session.board(1)));
    if winner == 0 {
        println!("You win! The enemy fleet is destroyed.");
    } else {
        println!("You lose! Your fleet is destroyed.");
    }
    Ok(())
}

fn auto(size: u8, games: u32, seed: Option<u64>) -> anyhow::Result<()> {
    let mut wins = [0u32; 2];
    for game in 0..games {
        let mut rng = rng_from(seed.map(|s| s.wrapping_add(game as u64)));
        let mut first = AiPlayer::new();
        let mut second = AiPlayer::new();
        let board_a = first.place_fleet(&mut rng, size, false)?;
        let board_b = second.place_fleet(&mut rng, size, false)?;

        let players: [Box<dyn Player>; 2] = [Box::new(first), Box::new(second)];
        let mut session = GameSession::new(rng, players, [board_a, board_b]);
        let winner = session.run()?;
        wins[winner] += 1;
        println!(
            "game {}: player {} wins in {} shots",
            game + 1,
            winner + 1,
            session.shots_fired(winner)
        );
    }
    println!("totals: player 1 {} - {} player 2", wins[0], wins[1]);
    Ok(())
}
