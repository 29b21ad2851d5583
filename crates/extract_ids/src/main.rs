mod config;

use anyhow::Context;
use log::debug;

use crate::config::{INPUT_FILE, OUTPUT_FILE};

fn summary(count: usize, output: &str) -> String {
    format!("Found {count} unique IDs. Saved to '{output}'.")
}

fn main() -> anyhow::Result<()> {
    // Filtered by RUST_LOG.
    env_logger::init();

    debug!("extracting tile ids from '{INPUT_FILE}' into '{OUTPUT_FILE}'");

    let count = tmx_ids::run(INPUT_FILE, OUTPUT_FILE).with_context(|| {
        format!("failed to write the tile ids of '{INPUT_FILE}' to '{OUTPUT_FILE}'")
    })?;

    println!("{}", summary(count, OUTPUT_FILE));

    Ok(())
}
