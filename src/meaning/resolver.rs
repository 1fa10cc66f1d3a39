//! Contextual meaning resolution.
//!
//! Meaning documents are hand-maintained, one per card, each carrying a
//! table of (context label, meaning text) rows. Authors are not consistent
//! about labels - "Soul" today, "soul searching" tomorrow - so lookup
//! applies a three-tier fallback instead of demanding a strict schema:
//! exact match, then case-insensitive, then substring in either direction.
//!
//! The resolver is infallible by design. Every failure mode (missing file,
//! corrupt document, unknown context) degrades to a human-readable string
//! so a half-authored meaning library never breaks a reading.

use std::path::PathBuf;

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use crate::deck::Card;

use super::docx::DocxTableReader;
use super::table::TableReader;

/// Ordered category -> text mapping parsed from a meaning table.
///
/// Preserves table order so category listings read the way the document
/// does. A duplicate category keeps its original position and takes the
/// later row's text (last write wins).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MeaningTable {
    entries: Vec<(String, String)>,
}

impl MeaningTable {
    /// Build a table from document rows.
    ///
    /// Rows with fewer than two cells, or whose category or text is empty
    /// after trimming, are skipped.
    #[must_use]
    pub fn from_rows(rows: &[Vec<String>]) -> Self {
        let mut table = Self::default();
        for cells in rows {
            let (Some(category), Some(text)) = (cells.first(), cells.get(1)) else {
                continue;
            };
            let category = category.trim();
            let text = text.trim();
            if category.is_empty() || text.is_empty() {
                continue;
            }
            table.insert(category, text);
        }
        table
    }

    fn insert(&mut self, category: &str, text: &str) {
        if let Some(entry) = self.entries.iter_mut().find(|(c, _)| c == category) {
            tracing::warn!(category, "duplicate category in meaning table, keeping later text");
            entry.1 = text.to_string();
        } else {
            self.entries.push((category.to_string(), text.to_string()));
        }
    }

    /// Single error entry, used when a document cannot be read.
    fn error_entry(message: String) -> Self {
        Self {
            entries: vec![("error".to_string(), message)],
        }
    }

    /// Exact, case-sensitive lookup.
    #[must_use]
    pub fn get(&self, category: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(c, _)| c == category)
            .map(|(_, text)| text.as_str())
    }

    /// Best-match lookup: exact, then case-insensitive, then substring in
    /// either direction. The first tier that matches wins, and within a
    /// tier the first entry in table order wins.
    #[must_use]
    pub fn lookup(&self, context: &str) -> Option<&str> {
        if let Some(text) = self.get(context) {
            return Some(text);
        }

        let lowered = context.to_lowercase();
        if let Some((_, text)) = self.entries.iter().find(|(c, _)| c.to_lowercase() == lowered) {
            return Some(text.as_str());
        }

        self.entries
            .iter()
            .find(|(c, _)| {
                let c = c.to_lowercase();
                c.contains(&lowered) || lowered.contains(&c)
            })
            .map(|(_, text)| text.as_str())
    }

    /// Category labels, in table order.
    pub fn categories(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(c, _)| c.as_str())
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when no usable rows were found.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// Serializes as a JSON object in table order.
impl Serialize for MeaningTable {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (category, text) in &self.entries {
            map.serialize_entry(category, text)?;
        }
        map.end()
    }
}

/// Resolves contextual meanings for cards from their meaning documents.
///
/// Documents are re-read on every call. The corpus is small and requests
/// are infrequent, and skipping a cache means edits to a document show up
/// on the next draw without a restart.
pub struct MeaningResolver {
    assets_root: PathBuf,
    reader: Box<dyn TableReader>,
}

impl MeaningResolver {
    /// Resolver reading `.docx` meaning documents under `assets_root`.
    #[must_use]
    pub fn new(assets_root: impl Into<PathBuf>) -> Self {
        Self::with_reader(assets_root, Box::new(DocxTableReader))
    }

    /// Resolver with a custom table reader (tests, alternative formats).
    #[must_use]
    pub fn with_reader(assets_root: impl Into<PathBuf>, reader: Box<dyn TableReader>) -> Self {
        Self {
            assets_root: assets_root.into(),
            reader,
        }
    }

    /// Location of `card`'s meaning document on disk.
    ///
    /// Card paths are dashboard-facing URLs rooted at `assets/`; the
    /// prefix is stripped before joining onto the assets directory.
    #[must_use]
    pub fn document_path(&self, card: &Card) -> PathBuf {
        let relative = card
            .meaning_path
            .strip_prefix("assets/")
            .unwrap_or(&card.meaning_path);
        self.assets_root.join(relative)
    }

    /// Meaning text for `card` under the given context label.
    ///
    /// Never fails: missing documents, corrupt documents, and unknown
    /// contexts all come back as descriptive text.
    pub fn resolve(&self, card: &Card, context: &str) -> String {
        let path = self.document_path(card);
        let table = match self.reader.read_table(&path) {
            Ok(Some(rows)) => MeaningTable::from_rows(&rows),
            Ok(None) => {
                return format!(
                    "Meaning file not found for {} (expected {}). Please add the document.",
                    card.display_name,
                    path.display()
                );
            }
            Err(err) => {
                tracing::warn!(card = %card.name, error = %err, "failed to read meaning document");
                return format!("Error reading meaning for {}: {err}", card.display_name);
            }
        };

        if table.is_empty() {
            return format!("No meaning table found in document for {}.", card.display_name);
        }

        match table.lookup(context) {
            Some(text) => text.to_string(),
            None => format!(
                "Context '{}' not found for {}. Available contexts: {}",
                context,
                card.display_name,
                table.categories().collect::<Vec<_>>().join(", ")
            ),
        }
    }

    /// Full category -> text mapping for `card`.
    ///
    /// Empty when the document is absent or has no usable table; a single
    /// `error` entry when the document cannot be read.
    pub fn resolve_all(&self, card: &Card) -> MeaningTable {
        let path = self.document_path(card);
        match self.reader.read_table(&path) {
            Ok(Some(rows)) => MeaningTable::from_rows(&rows),
            Ok(None) => MeaningTable::default(),
            Err(err) => {
                tracing::warn!(card = %card.name, error = %err, "failed to read meaning document");
                MeaningTable::error_entry(format!(
                    "Error reading meaning for {}: {err}",
                    card.display_name
                ))
            }
        }
    }
}
