//! Table-reading seam for meaning documents.
//!
//! The resolver only needs "open path -> rows of cell text". Anything that
//! can produce the first table of a document as ordered rows can back it,
//! which keeps the document format swappable and lets tests substitute
//! in-memory fixtures.

use std::io;
use std::path::Path;

use thiserror::Error;

/// Ordered rows of cell text from a document table.
pub type Table = Vec<Vec<String>>;

/// Failure reading or parsing a meaning document.
///
/// Absence is not an error: `read_table` returns `Ok(None)` for a missing
/// file so callers can distinguish "not authored yet" from "corrupt".
#[derive(Debug, Error)]
pub enum TableError {
    #[error("failed to read document: {0}")]
    Io(#[from] io::Error),

    #[error("document is not a valid archive: {0}")]
    Archive(#[from] zip::result::ZipError),

    #[error("document XML is malformed: {0}")]
    Xml(#[from] quick_xml::Error),
}

/// Reads the first table of a document as rows of cell text.
pub trait TableReader: Send + Sync {
    /// Read the first table of the document at `path`.
    ///
    /// Returns `Ok(None)` when no file exists at `path`. An empty row list
    /// means the document exists but contains no table.
    fn read_table(&self, path: &Path) -> Result<Option<Table>, TableError>;
}
