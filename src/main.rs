use std::sync::Arc;

use battleship_engine::{
    init_logging, AttackOutcome, GameEngine, InMemoryStore, Tile,
};
use clap::Parser;
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use serde_json::json;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Parser)]
enum Commands {
    /// Auto-place a fleet and play random attacks until the game ends.
    Sim {
        #[arg(long, default_value_t = 10)]
        width: u16,
        #[arg(long, default_value_t = 10)]
        height: u16,
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
        #[arg(long, help = "Print the attack history after the game ends")]
        history: bool,
    },
    /// Auto-place a fleet and print the resulting board status as JSON.
    Fleet {
        #[arg(long, default_value_t = 10)]
        width: u16,
        #[arg(long, default_value_t = 10)]
        height: u16,
        #[arg(long, help = "Fix RNG seed for a reproducible fleet")]
        seed: Option<u64>,
    },
}

fn seeded_rng(seed: Option<u64>) -> SmallRng {
    match seed {
        Some(s) => SmallRng::seed_from_u64(s),
        None => {
            let mut seed_rng = rand::rng();
            SmallRng::from_rng(&mut seed_rng)
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();
    let engine = GameEngine::new(Arc::new(InMemoryStore::new()));

    match cli.command {
        Commands::Sim {
            width,
            height,
            seed,
            history,
        } => {
            let mut rng = seeded_rng(seed);
            let board = engine.create_board(width, height).await?;
            engine.auto_place_fleet_with(board.id, &mut rng).await?;

            // Attacking every tile once in random order always ends the game.
            let mut targets: Vec<Tile> = (0..width as i64)
                .flat_map(|x| (0..height as i64).map(move |y| Tile::new(x, y)))
                .collect();
            targets.shuffle(&mut rng);

            let mut last = None;
            for tile in targets {
                let raw = format!("[{},{}]", tile.x, tile.y);
                let outcome = engine.attack(board.id, &raw).await?;
                println!("attack {} -> {:?}", tile, outcome);
                if let AttackOutcome::GameWon { .. } = outcome {
                    last = Some(outcome);
                    break;
                }
            }

            if history {
                for line in engine.attack_history(board.id).await? {
                    println!("{}", line);
                }
            }

            let status = engine.status(board.id).await?;
            let result = json!({
                "board": status.board,
                "attacks": status.attacks,
                "outcome": last,
            });
            println!("{}", serde_json::to_string(&result)?);
        }
        Commands::Fleet {
            width,
            height,
            seed,
        } => {
            let mut rng = seeded_rng(seed);
            let board = engine.create_board(width, height).await?;
            engine.auto_place_fleet_with(board.id, &mut rng).await?;
            let status = engine.status(board.id).await?;
            println!("{}", serde_json::to_string_pretty(&status)?);
        }
    }
    Ok(())
}
