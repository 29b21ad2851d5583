pub mod data_types;
pub mod error;
pub mod extract;
pub mod output;
pub mod util;
pub mod xml;

use std::path::Path;

use log::info;

pub use data_types::{Extraction, Gid, TileIdSet};
pub use error::{ExtractError, XmlError};
pub use extract::extract_unique_tile_ids;

/// Collects the tile ids of `input` and writes them to `output`, returning
/// how many were written.
///
/// `output` is only opened once `input` has been read and parsed, so a
/// failed parse leaves it untouched.
pub fn run(input: impl AsRef<Path>, output: impl AsRef<Path>) -> Result<usize, ExtractError> {
    let (input, output) = (input.as_ref(), output.as_ref());

    let extraction = extract::extract_file(input)?;
    output::write_listing(output, &extraction.ids)?;

    info!(
        "{} -> {}: {} ids from {} layers ({} without data, {} malformed tokens)",
        input.display(),
        output.display(),
        extraction.ids.len(),
        extraction.layers.len() + extraction.layers_without_data,
        extraction.layers_without_data,
        extraction.malformed_tokens()
    );

    Ok(extraction.ids.len())
}
