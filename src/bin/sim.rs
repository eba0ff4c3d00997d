#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use battleships::{Fleet, BOARD_SIZE};
#[cfg(feature = "std")]
use rand::{rngs::SmallRng, seq::SliceRandom, SeedableRng};
#[cfg(feature = "std")]
use serde_json::json;

/// Place a seeded fleet, then shoot every cell in random order until the
/// game ends, and print the result as JSON.
#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    battleships::init_logging();
    let args: Vec<String> = std::env::args().collect();
    if args.len() != 2 {
        eprintln!("Usage: {} <seed>", args[0]);
        std::process::exit(1);
    }
    let seed: u64 = args[1].parse()?;

    let mut rng = SmallRng::seed_from_u64(seed);
    let mut fleet = Fleet::new(&mut rng, true);

    let n = BOARD_SIZE as usize;
    let mut targets: Vec<(usize, usize)> = (0..n * n).map(|i| (i / n, i % n)).collect();
    targets.shuffle(&mut rng);
    for (row, col) in targets {
        if fleet.fire(row, col).is_none() {
            break;
        }
    }

    let result = json!({
        "seed": seed,
        "summary": fleet.summary(),
    });
    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}
