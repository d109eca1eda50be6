use clap::Parser;
use log::{error, info};
use rand::rngs::SmallRng;
use rand::SeedableRng;

use gametree::agents::Agent;
use gametree::games::UltimateBoard;
use gametree::logging;
use gametree::search::SearchError;

#[derive(Parser)]
#[command(name = "gametree move", about = "Compute a move for an agent.")]
struct Opts {
    /// Agent configuration as JSON.
    #[arg(long, default_value_t = Agent::default())]
    config: Agent,
    /// Sub board (0-8) the move has to be played in.
    #[arg(long)]
    next: Option<usize>,
    /// Nine rows of `x`, `o` and `.`, separated by newlines or `/`.
    board: String,
}

fn main() -> Result<(), SearchError> {
    logging();

    let Opts {
        config,
        next,
        board,
    } = Opts::parse();

    let Some(mut game) = UltimateBoard::parse(&board.replace('/', "\n")) else {
        error!("invalid board: {}", board);
        std::process::exit(1);
    };
    if let Some(next) = next {
        if next >= 9 {
            error!("invalid sub board: {} (expected 0-8)", next);
            std::process::exit(1);
        }
        game = game.with_next(next);
    }
    info!("{:?}", game);

    let mut rng = SmallRng::from_entropy();
    let step = config.step(&game, &mut rng)?;

    info!("Step: {:?}", step);
    Ok(())
}
