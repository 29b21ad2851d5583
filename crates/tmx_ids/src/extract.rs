use std::{fs, path::Path};

use log::{debug, warn};

use crate::{
    data_types::*,
    error::ExtractError,
    util::{classify_token, csv_tokens, Token},
    xml::{leading_text, parse_document},
};

/// Reads a TMX file and returns the distinct non-empty tile ids of its
/// layers, ascending.
pub fn extract_unique_tile_ids(path: impl AsRef<Path>) -> Result<Vec<Gid>, ExtractError> {
    extract_file(path).map(|e| e.ids.to_sorted_vec())
}

pub fn extract_file(path: impl AsRef<Path>) -> Result<Extraction, ExtractError> {
    let path = path.as_ref();

    let data = fs::read(path).map_err(|source| ExtractError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let text = std::str::from_utf8(&data).map_err(|source| ExtractError::Encoding {
        path: path.to_path_buf(),
        source,
    })?;

    extract_from_str(text)
}

pub fn extract_from_str(input: &str) -> Result<Extraction, ExtractError> {
    let document = parse_document(input)?;
    debug!("parsed document with {} nodes", document.iter().count());

    Ok(extract_from_document(&document))
}

/// Only `<layer>` elements directly under the root are scanned; layers nested
/// in groups are ignored.
pub fn extract_from_document(document: &Document) -> Extraction {
    let mut extraction = Extraction::default();

    for layer in document.children_where(|n| n.tag_has_name("layer")) {
        let name = layer.item().attribute("name").map(str::to_owned);

        let Some(text) = layer
            .find_child(|n| n.tag_has_name("data"))
            .and_then(|data| {
                if let Some(encoding) = data.item().attribute("encoding") {
                    if encoding != "csv" {
                        warn!(
                            "layer {:?} uses `{encoding}` encoding, its tile data isn't decoded",
                            name.as_deref().unwrap_or_default()
                        );
                    }
                }
                leading_text(data)
            })
        else {
            debug!("layer {name:?} has no tile data");
            extraction.layers_without_data += 1;
            continue;
        };

        let scan = scan_layer(name, &text, &mut extraction.ids);

        if scan.malformed > 0 {
            warn!(
                "layer {:?}: skipped {} malformed tokens",
                scan.name.as_deref().unwrap_or_default(),
                scan.malformed
            );
        }
        debug!(
            "layer {:?}: {} tiles, {} empty",
            scan.name.as_deref().unwrap_or_default(),
            scan.tiles,
            scan.empty
        );

        extraction.layers.push(scan);
    }

    extraction
}

fn scan_layer(name: Option<String>, text: &str, ids: &mut TileIdSet) -> LayerScan {
    let mut scan = LayerScan {
        name,
        ..LayerScan::default()
    };

    for token in csv_tokens(text) {
        match classify_token(&token) {
            Token::Tile(gid) => {
                scan.tiles += 1;
                ids.insert(gid);
            }
            Token::Empty => scan.empty += 1,
            Token::Malformed => scan.malformed += 1,
        }
    }

    scan
}
