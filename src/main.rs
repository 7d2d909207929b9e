#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use std::io::{self, Write};

#[cfg(feature = "std")]
use clap::Parser;
#[cfg(feature = "std")]
use minibattleship::{
    init_logging,
    ui::{parse_coord, print_board},
    CellView, GameEngine, GameStatus,
};
#[cfg(feature = "std")]
use rand::rngs::SmallRng;
#[cfg(feature = "std")]
use rand::SeedableRng;

/// Find the two hidden ships on a 4x4 board.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
    seed: Option<u64>,
}

#[cfg(feature = "std")]
fn prompt(text: &str) -> anyhow::Result<Option<String>> {
    print!("{}", text);
    io::stdout().flush()?;
    let mut buf = String::new();
    if io::stdin().read_line(&mut buf)? == 0 {
        return Ok(None);
    }
    Ok(Some(buf))
}

/// Run one game to completion. Returns `false` if input ended early.
#[cfg(feature = "std")]
fn play(engine: &mut GameEngine) -> anyhow::Result<bool> {
    while engine.status() == GameStatus::InProgress {
        print_board(engine);
        let Some(line) = prompt("Guess (e.g. B3): ")? else {
            return Ok(false);
        };
        let Some((row, col)) = parse_coord(&line) else {
            println!("Coordinates run from A1 to D4.");
            continue;
        };
        let outcome = engine.reveal(row, col);
        if !outcome.changed {
            println!("Already revealed.");
            continue;
        }
        match outcome.cell {
            CellView::Water => println!("Splash."),
            CellView::Hit(_) => println!("Hit!"),
            CellView::Hidden => unreachable!("a changed reveal always reports a terminal state"),
        }
        if outcome.won {
            print_board(engine);
            println!("You won in {} moves!", outcome.moves);
        }
    }
    Ok(true)
}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging();

    let mut rng = match cli.seed {
        Some(seed) => SmallRng::seed_from_u64(seed),
        None => SmallRng::from_rng(&mut rand::rng()),
    };

    let mut engine = GameEngine::new();
    loop {
        engine.new_game(&mut rng).map_err(|e| anyhow::anyhow!(e))?;
        log::debug!("new game started");
        if !play(&mut engine)? {
            break;
        }
        let Some(answer) = prompt("Play again? (y/n): ")? else {
            break;
        };
        if !answer.trim().eq_ignore_ascii_case("y") {
            break;
        }
    }
    Ok(())
}
