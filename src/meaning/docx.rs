//! `.docx` table extraction.
//!
//! A `.docx` file is a ZIP archive whose body lives in `word/document.xml`
//! as WordprocessingML. Tables are `w:tbl` elements containing `w:tr` rows
//! of `w:tc` cells; visible text sits in `w:t` runs. Only the first
//! top-level table is read - meaning documents put the context table
//! first by convention.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use quick_xml::events::Event;
use quick_xml::Reader;

use super::table::{Table, TableError, TableReader};

/// Reads meaning tables out of WordprocessingML documents.
#[derive(Clone, Copy, Debug, Default)]
pub struct DocxTableReader;

impl TableReader for DocxTableReader {
    fn read_table(&self, path: &Path) -> Result<Option<Table>, TableError> {
        if !path.exists() {
            return Ok(None);
        }

        let file = File::open(path)?;
        let mut archive = zip::ZipArchive::new(BufReader::new(file))?;
        let mut xml = String::new();
        archive.by_name("word/document.xml")?.read_to_string(&mut xml)?;

        Ok(Some(first_table(&xml)?))
    }
}

/// Extract the first top-level `w:tbl` as rows of cell text.
///
/// Cell text concatenates all `w:t` runs, with paragraphs inside a cell
/// joined by newlines. Text inside a nested table stays part of the outer
/// cell, which mirrors how word processors report cell content.
fn first_table(xml: &str) -> Result<Table, TableError> {
    let mut reader = Reader::from_str(xml);

    let mut rows: Table = Vec::new();
    let mut row: Vec<String> = Vec::new();
    let mut cell = String::new();

    // Depth counters distinguish the first top-level table from tables
    // nested inside its cells.
    let mut table_depth = 0usize;
    let mut cell_depth = 0usize;

    loop {
        match reader.read_event()? {
            Event::Start(e) => match e.name().as_ref() {
                b"w:tbl" => table_depth += 1,
                b"w:tr" if table_depth == 1 => row = Vec::new(),
                b"w:tc" if table_depth >= 1 => {
                    cell_depth += 1;
                    if cell_depth == 1 {
                        cell = String::new();
                    }
                }
                b"w:p" if cell_depth >= 1 && !cell.is_empty() => cell.push('\n'),
                _ => {}
            },
            Event::End(e) => match e.name().as_ref() {
                b"w:tbl" if table_depth > 0 => {
                    table_depth -= 1;
                    if table_depth == 0 {
                        return Ok(rows);
                    }
                }
                b"w:tr" if table_depth == 1 => rows.push(std::mem::take(&mut row)),
                b"w:tc" if cell_depth >= 1 => {
                    cell_depth -= 1;
                    if cell_depth == 0 {
                        row.push(std::mem::take(&mut cell));
                    }
                }
                _ => {}
            },
            Event::Text(e) if cell_depth >= 1 => cell.push_str(&e.unescape()?),
            Event::Eof => return Ok(rows),
            _ => {}
        }
    }
}
