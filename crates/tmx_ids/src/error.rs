use std::{io, path::PathBuf, str::Utf8Error};

use thiserror::Error;

/// A document that isn't well-formed XML. Positions are 1-based.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("malformed XML at line {line}, column {column}: {message}")]
pub struct XmlError {
    pub line: usize,
    pub column: usize,
    pub message: String,
}

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("could not read '{}'", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("'{}' is not valid UTF-8", .path.display())]
    Encoding {
        path: PathBuf,
        #[source]
        source: Utf8Error,
    },

    #[error(transparent)]
    Xml(#[from] XmlError),

    #[error("could not write '{}'", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
