#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use clap::Parser;
#[cfg(feature = "std")]
use rand::rngs::SmallRng;
#[cfg(feature = "std")]
use rand::{Rng, SeedableRng};
#[cfg(feature = "std")]
use seabattle::{init_logging, Board};

#[derive(Parser)]
#[command(author, version, about = "Sink the hidden fleet on a 10x10 grid", long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Parser)]
#[cfg(feature = "std")]
enum Commands {
    /// Play in the terminal.
    Play {
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
    },
    /// Place a fleet and print it face up.
    Reveal {
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
    },
}

#[cfg(feature = "std")]
fn seeded_rng(seed: Option<u64>) -> SmallRng {
    let seed = seed.unwrap_or_else(|| rand::rng().random());
    log::info!("using seed {}", seed);
    SmallRng::seed_from_u64(seed)
}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Play { seed } => {
            let rng = seeded_rng(seed);
            let stdin = std::io::stdin();
            let games = seabattle::cli::run(stdin.lock(), std::io::stdout(), rng)?;
            log::info!("played {} game(s)", games.len());
        }
        Commands::Reveal { seed } => {
            let mut rng = seeded_rng(seed);
            let board = Board::with_fleet(&mut rng)?;
            println!("{}", board.revealed());
        }
    }
    Ok(())
}
