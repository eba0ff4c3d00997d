#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use battleships::{init_logging, parse_coord, render::render_board, Fleet, ShotOutcome};
#[cfg(feature = "std")]
use clap::Parser;
#[cfg(feature = "std")]
use rand::rngs::SmallRng;
#[cfg(feature = "std")]
use rand::SeedableRng;
#[cfg(feature = "std")]
use std::io::{self, BufRead, Write};

/// Sink the hidden fleet on a 10×10 grid.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    #[arg(long, help = "Fix RNG seed for a reproducible fleet (e.g., --seed 12345)")]
    seed: Option<u64>,
    #[arg(long, help = "Show unhit ships on the board")]
    reveal: bool,
}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    let mut rng = match cli.seed {
        Some(s) => {
            println!("Using fixed seed: {} (fleet will be reproducible)", s);
            SmallRng::seed_from_u64(s)
        }
        None => {
            let mut seed_rng = rand::rng();
            SmallRng::from_rng(&mut seed_rng)
        }
    };
    let mut fleet = Fleet::new(&mut rng, true);

    println!("{}", render_board(&fleet, cli.reveal));
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    while !fleet.game_over() {
        print!("\nTarget (e.g. C4 or '4 2', 'quit' to give up): ");
        io::stdout().flush()?;
        let Some(line) = lines.next().transpose()? else {
            break;
        };
        let line = line.trim();
        if line.eq_ignore_ascii_case("quit") || line.eq_ignore_ascii_case("q") {
            break;
        }
        let coord = match parse_coord(line) {
            Ok(coord) => coord,
            Err(e) => {
                println!("✗ {}", e);
                continue;
            }
        };
        if let Some(ShotOutcome::GameOver) = fleet.fire(coord.row(), coord.col()) {
            println!("\nAll ships sunk in {} shots.", fleet.shots());
        }
        println!("{}", render_board(&fleet, cli.reveal));
    }

    if !fleet.game_over() {
        println!("\nFinal fleet:");
        println!("{}", render_board(&fleet, true));
    }
    Ok(())
}
