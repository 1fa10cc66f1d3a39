//! Meaning documents: reading, parsing, contextual lookup.
//!
//! ## Key Types
//!
//! - `TableReader`: Narrow "path -> rows of cell text" seam
//! - `DocxTableReader`: WordprocessingML implementation of the seam
//! - `MeaningTable`: Ordered category -> text mapping
//! - `MeaningResolver`: Fallback-matching context lookup, infallible

pub mod docx;
pub mod resolver;
pub mod table;

pub use docx::DocxTableReader;
pub use resolver::{MeaningResolver, MeaningTable};
pub use table::{Table, TableError, TableReader};
