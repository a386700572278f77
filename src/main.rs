// src/main.rs

use std::path::Path;

use anyhow::Result;

use fence_chess::game::board::Position;
use fence_chess::game::moves::attacks;
use fence_chess::search::engine::{evaluate_fence, run_game_simulated};

fn main() -> Result<()> {
    // A pregenerated mapping file takes priority; without one the table is
    // synthesized in-process on first use.
    if Path::new("mapping.txt").exists() {
        attacks::init_from_file("mapping.txt")?;
    }

    evaluate_fence("K....n.........k b 0 1", 10).map_err(anyhow::Error::msg)?;
    // evaluate_fence("KQRB..NP.p.nbrqk b 0 1", 10)?; // b +100
    // evaluate_fence("KQRBN.P.pn..brqk w 0 1", 10)?; // w +100
    // evaluate_fence("KQRBNP....pnbrqk w 0 1", 16)?;

    Ok(())
}

#[allow(dead_code)]
fn play_simulated() {
    run_game_simulated(Position::default(), 6);
}
