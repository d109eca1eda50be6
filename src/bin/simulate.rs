use std::time::Instant;

use clap::Parser;
use log::{info, warn};
use owo_colors::OwoColorize;
use rand::rngs::SmallRng;
use rand::SeedableRng;

use gametree::agents::{Agent, RandomAgent};
use gametree::board::{Board, Outcome};
use gametree::games::{Player, UltimateBoard};
use gametree::logging;
use gametree::search::SearchError;

#[derive(Parser)]
#[command(
    name = "gametree simulate",
    about = "Play ultimate tic-tac-toe games between two agents."
)]
struct Opts {
    #[arg(short, long, default_value_t = 10)]
    game_count: usize,
    /// Seed for reproducible runs.
    #[arg(long)]
    seed: Option<u64>,
    #[arg(short, long)]
    verbose: bool,
    /// The evaluated agent and its opponent.
    /// Defaults to the minimax agent against a random agent.
    #[arg(num_args = 0..=2)]
    agents: Vec<Agent>,
}

#[derive(Debug, Default)]
struct Stats {
    wins: usize,
    losses: usize,
    ties: usize,
}

fn main() -> Result<(), SearchError> {
    logging();

    let Opts {
        game_count,
        seed,
        verbose,
        mut agents,
    } = Opts::parse();

    if agents.is_empty() {
        agents.push(Agent::default());
    }
    if agents.len() < 2 {
        agents.push(Agent::Random(RandomAgent));
    }

    let mut rng = match seed {
        Some(seed) => SmallRng::seed_from_u64(seed),
        None => SmallRng::from_entropy(),
    };

    info!("{} vs {}", agents[0], agents[1]);
    let start = Instant::now();
    let mut stats = Stats::default();

    for i in 0..game_count {
        // alternate who goes first
        let us = if i % 2 == 0 { Player::X } else { Player::O };
        let outcome = play_game(&agents[0], &agents[1], us, &mut rng, verbose)?;
        match outcome {
            Outcome::Winner(p) if p == us => stats.wins += 1,
            Outcome::Winner(_) => stats.losses += 1,
            _ => stats.ties += 1,
        }
        println!(
            "{}: {} {:?} {}ms",
            "Finish Game".bright_green(),
            i,
            outcome,
            start.elapsed().as_millis()
        );
    }

    let win_rate = if game_count > 0 {
        stats.wins as f64 / game_count as f64 * 100.0
    } else {
        0.0
    };
    println!(
        "Result: {}/{} (losses {}, ties {}, win rate {:.2}%)",
        stats.wins, game_count, stats.losses, stats.ties, win_rate
    );
    Ok(())
}

fn play_game(
    agent: &Agent,
    opponent: &Agent,
    us: Player,
    rng: &mut SmallRng,
    verbose: bool,
) -> Result<Outcome<Player>, SearchError> {
    let mut game = UltimateBoard::new();

    for turn in 0.. {
        if game.outcome().is_terminal() {
            break;
        }

        let current = if game.current_player() == us {
            agent
        } else {
            opponent
        };
        let Some(mv) = current.step(&game, rng)? else {
            warn!("no move in a running game");
            break;
        };
        game.apply(&mv);

        if verbose {
            println!("{}: {:?} {:?}", turn, mv, game);
        }
    }
    Ok(game.outcome())
}
