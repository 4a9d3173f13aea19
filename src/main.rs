#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use sos::{
    init_logging, init_logging_with, playout::random_empty_cell, ui, CliParticipant,
    MatchConfig, MatchEngine, MatchSession, SharedMatch, DEFAULT_TURN_SECONDS,
};

#[cfg(feature = "std")]
use clap::Parser;
#[cfg(feature = "std")]
use rand::rngs::SmallRng;
#[cfg(feature = "std")]
use rand::SeedableRng;
#[cfg(feature = "std")]
use tokio::time::Duration;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Parser)]
#[cfg(feature = "std")]
enum Commands {
    /// Two players taking turns at this terminal.
    Play {
        #[arg(long, default_value_t = DEFAULT_TURN_SECONDS, help = "Seconds per turn before it passes")]
        turn_seconds: u32,
        #[arg(long, help = "Disable the turn clock")]
        no_clock: bool,
    },
    /// Watch a random playout, one move at a time.
    Watch {
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
        #[arg(long, default_value_t = 300)]
        delay_ms: u64,
    },
}

#[cfg(feature = "std")]
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Play {
            turn_seconds,
            no_clock,
        } => {
            // Keep the terminal readable: only warnings interrupt the board.
            init_logging_with(log::LevelFilter::Warn);
            println!("SOS GAME - type 'help' for instructions");
            let shared = SharedMatch::new(MatchConfig::new(turn_seconds));
            let (blue, red) = CliParticipant::hot_seat_stdin();
            let mut session = MatchSession::new(shared, blue, red);
            if no_clock {
                session = session.without_clock();
            }
            let last = session.run().await?;
            println!("\n{}", ui::render(&last));
            if !last.is_game_over() {
                println!("Match abandoned.");
            }
        }
        Commands::Watch { seed, delay_ms } => {
            init_logging();
            let mut rng = if let Some(s) = seed {
                println!("Using fixed seed: {} (game will be reproducible)", s);
                SmallRng::seed_from_u64(s)
            } else {
                let mut seed_rng = rand::rng();
                SmallRng::from_rng(&mut seed_rng)
            };
            let mut engine = MatchEngine::default();
            while let Some((r, c)) = random_empty_cell(&mut rng, engine.state()) {
                let report = engine.apply_move(r, c).map_err(|e| anyhow::anyhow!(e))?;
                println!(
                    "\n{} placed {} at {}{}",
                    report.player,
                    report.letter,
                    (b'A' + c as u8) as char,
                    r + 1
                );
                println!("{}", ui::render(engine.state()));
                tokio::time::sleep(Duration::from_millis(delay_ms)).await;
            }
        }
    }
    Ok(())
}
