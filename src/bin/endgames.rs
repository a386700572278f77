// src/bin/endgames.rs
//! Sweep candidate endgame positions for small piece sets and dump the
//! classified records for later table building.

use std::fs::File;
use std::io::BufWriter;

use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};

use fence_chess::search::endgame::{mate_positions, EndgameEntry};

/// Extra material beyond the two kings, one sweep per entry.
const PIECE_SETS: [&str; 11] = ["", "Q", "R", "B", "N", "P", "q", "r", "b", "n", "p"];

const DUMP_PATH: &str = "endgames.bin";

fn main() -> Result<()> {
    let bar = ProgressBar::new(PIECE_SETS.len() as u64);
    bar.set_style(ProgressStyle::with_template(
        "{bar:40.cyan/blue} {pos}/{len} {msg}",
    )?);

    let mut records: Vec<EndgameEntry> = Vec::new();
    for extra in PIECE_SETS {
        let label = if extra.is_empty() { "-" } else { extra };
        bar.set_message(format!("Kk + {label}"));

        let entries = mate_positions(extra, true, true);
        bar.println(format!("Kk + {:<2} -> {} records", label, entries.len()));
        records.extend(entries);
        bar.inc(1);
    }
    bar.finish_and_clear();

    let file = File::create(DUMP_PATH).with_context(|| format!("creating {DUMP_PATH}"))?;
    let mut writer = BufWriter::new(file);
    bincode::serialize_into(&mut writer, &records)
        .map_err(|e| anyhow::anyhow!("bincode::serialize_into failed: {}", e))?;

    println!("Wrote {} records to {}", records.len(), DUMP_PATH);
    Ok(())
}
