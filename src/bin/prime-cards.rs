//! Command-line front end: play a single game or analyse every game.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};

use prime_cards::{
    analyze, play_game, ConsolePlayer, FirstPlayer, GameConfig, GameRng, Player, PrimeSumGame,
    RandomPlayer,
};

#[derive(Parser)]
#[command(name = "prime-cards", version, about = "Play and analyse the prime-sum card game")]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// JSON file overriding the default game configuration
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Play a single game between two strategies
    Play {
        /// Strategy for player 0
        #[arg(long, value_enum, default_value_t = PlayerKind::Random)]
        first: PlayerKind,

        /// Strategy for player 1
        #[arg(long, value_enum, default_value_t = PlayerKind::Random)]
        second: PlayerKind,

        /// Seed for random strategies (defaults to the current time)
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Enumerate every game and print statistics
    Analyze {
        /// Also print the sequence tree as GraphViz DOT
        #[arg(long)]
        dot: bool,

        /// Print the report as JSON instead of text
        #[arg(long)]
        json: bool,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum PlayerKind {
    Human,
    First,
    Random,
}

impl PlayerKind {
    fn build(self, rng: &mut GameRng) -> Box<dyn Player> {
        match self {
            PlayerKind::Human => Box::new(ConsolePlayer),
            PlayerKind::First => Box::new(FirstPlayer),
            PlayerKind::Random => Box::new(RandomPlayer::new(rng.fork())),
        }
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        2 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

fn load_game(path: Option<&PathBuf>) -> Result<PrimeSumGame> {
    let config = match path {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("reading {}", path.display()))?;
            GameConfig::from_json(&text).with_context(|| format!("loading {}", path.display()))?
        }
        None => GameConfig::default(),
    };
    Ok(PrimeSumGame::new(config)?)
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let game = load_game(cli.config.as_ref())?;

    match cli.command {
        Command::Play { first, second, seed } => {
            let seed = seed.unwrap_or_else(|| {
                std::time::SystemTime::now()
                    .duration_since(std::time::UNIX_EPOCH)
                    .map(|d| d.as_secs())
                    .unwrap_or_default()
            });
            log::info!("playing {:?} vs {:?} with seed {}", first, second, seed);

            let mut rng = GameRng::new(seed);
            let mut p0 = first.build(&mut rng);
            let mut p1 = second.build(&mut rng);

            let record = play_game(&game, [p0.as_mut(), p1.as_mut()], |ply| println!("{}", ply))?;
            println!("{} wins", record.winner());
        }
        Command::Analyze { dot, json } => {
            let analysis = analyze(&game)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&analysis.report)?);
            } else {
                print!("{}", analysis.report);
            }
            if dot {
                println!("GraphViz DOT Code:");
                print!("{}", analysis.dot());
            }
        }
    }

    Ok(())
}
