//! Recolor sprite files in place.
//!
//! ```sh
//! cargo run --bin recolor -- 15 15 48A12D
//! cargo run --bin recolor -- 12 16 '#FFAA00' --dir sprites
//! ```

use bear_country::recolor::{parse_hex_color, recolor_sprites};
use clap::Parser;
use std::path::PathBuf;

/// Replace the RGB of every visible pixel of sprite.<n>.png, keeping alpha.
#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// First sprite index (inclusive).
    start: u32,
    /// Last sprite index (inclusive).
    end: u32,
    /// Target color as RRGGBB, with or without a leading '#'.
    color: String,
    /// Directory holding the sprite files.
    #[arg(long, value_name = "DIR", default_value = "sprites")]
    dir: PathBuf,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let result = parse_hex_color(&cli.color)
        .and_then(|rgb| recolor_sprites(&cli.dir, cli.start, cli.end, rgb));
    match result {
        Ok(report) => {
            log::info!(
                "Recolored {} file(s), skipped {}",
                report.processed.len(),
                report.skipped.len()
            );
        }
        Err(e) => {
            log::error!("{e}");
            std::process::exit(1);
        }
    }
}
