// src/bin/explore.rs
//! Count the boards reachable from the start position, ply by ply.

use std::env;
use std::path::Path;

use anyhow::Result;

use fence_chess::game::moves::attacks;
use fence_chess::search::explore::explore;

fn main() -> Result<()> {
    let max_level: u32 = env::args()
        .nth(1)
        .map(|arg| arg.parse())
        .transpose()?
        .unwrap_or(5);

    if Path::new("mapping.txt").exists() {
        attacks::init_from_file("mapping.txt")?;
    }

    for (level, count) in explore(max_level).iter().enumerate() {
        println!(
            "# positions reachable after {:>3} halfmoves = {}",
            level + 1,
            count
        );
    }
    println!("No more traversable positions after this depth.");
    Ok(())
}
