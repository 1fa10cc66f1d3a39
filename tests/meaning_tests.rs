//! Meaning resolution against real `.docx` fixtures.
//!
//! The unit tests cover the match policy with in-memory tables; these
//! tests exercise the whole path - card -> document location -> ZIP ->
//! WordprocessingML -> table -> fallback lookup - against files on disk.

use std::fs;
use std::io::Write;
use std::path::Path;

use tempfile::TempDir;
use zip::write::SimpleFileOptions;
use zip::ZipWriter;

use tarot_deck::deck::{Card, Rank, Suit};
use tarot_deck::meaning::MeaningResolver;

/// Write a minimal `.docx` whose body is a single two-column table.
fn write_docx(path: &Path, rows: &[(&str, &str)]) {
    let mut body = String::from("<w:tbl>");
    for (category, text) in rows {
        body.push_str(&format!(
            "<w:tr><w:tc><w:p><w:r><w:t>{category}</w:t></w:r></w:p></w:tc>\
             <w:tc><w:p><w:r><w:t>{text}</w:t></w:r></w:p></w:tc></w:tr>"
        ));
    }
    body.push_str("</w:tbl>");

    let document = format!(
        r#"<?xml version="1.0" encoding="UTF-8"?><w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main"><w:body>{body}</w:body></w:document>"#
    );

    fs::create_dir_all(path.parent().unwrap()).unwrap();
    let file = fs::File::create(path).unwrap();
    let mut writer = ZipWriter::new(file);
    writer
        .start_file("word/document.xml", SimpleFileOptions::default())
        .unwrap();
    writer.write_all(document.as_bytes()).unwrap();
    writer.finish().unwrap();
}

fn fixture(card: &Card, assets: &TempDir, rows: &[(&str, &str)]) {
    let relative = card.meaning_path.strip_prefix("assets/").unwrap();
    write_docx(&assets.path().join(relative), rows);
}

#[test]
fn test_resolve_from_docx() {
    let assets = TempDir::new().unwrap();
    let card = Card::major("FOOL");
    fixture(
        &card,
        &assets,
        &[("Soul", "New beginnings"), ("Past", "Innocence")],
    );

    let resolver = MeaningResolver::new(assets.path());
    assert_eq!(resolver.resolve(&card, "Soul"), "New beginnings");
    assert_eq!(resolver.resolve(&card, "Past"), "Innocence");
}

#[test]
fn test_resolve_is_case_insensitive_on_fallback() {
    let assets = TempDir::new().unwrap();
    let card = Card::minor(Suit::Swords, Rank::Ten);
    fixture(&card, &assets, &[("Soul", "A hard ending")]);

    let resolver = MeaningResolver::new(assets.path());
    assert_eq!(resolver.resolve(&card, "soul"), "A hard ending");
}

#[test]
fn test_unmatched_context_lists_available() {
    let assets = TempDir::new().unwrap();
    let card = Card::major("MOON");
    fixture(
        &card,
        &assets,
        &[("Soul", "Illusion"), ("Past", "Hidden fears")],
    );

    let resolver = MeaningResolver::new(assets.path());
    let message = resolver.resolve(&card, "XYZ");
    assert!(message.contains("XYZ"));
    assert!(message.contains("Soul"));
    assert!(message.contains("Past"));
}

#[test]
fn test_missing_document_is_a_placeholder() {
    let assets = TempDir::new().unwrap();
    let card = Card::major("HERMIT");

    let resolver = MeaningResolver::new(assets.path());
    let message = resolver.resolve(&card, "Soul");
    assert!(message.contains("Hermit"));
    assert!(message.contains("HERMIT.docx"));
}

#[test]
fn test_corrupt_document_is_descriptive_text() {
    let assets = TempDir::new().unwrap();
    let card = Card::major("TOWER");

    let path = assets.path().join("meanings/major/TOWER.docx");
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(&path, b"this is not a zip archive").unwrap();

    let resolver = MeaningResolver::new(assets.path());
    let message = resolver.resolve(&card, "Soul");
    assert!(message.contains("Error reading meaning"));
    assert!(message.contains("Tower"));
}

#[test]
fn test_resolve_all_returns_whole_table() {
    let assets = TempDir::new().unwrap();
    let card = Card::minor(Suit::Cups, Rank::Ace);
    fixture(
        &card,
        &assets,
        &[
            ("Yes/No", "Yes"),
            ("+/-", "+"),
            ("Soul", "Overflowing feeling"),
        ],
    );

    let resolver = MeaningResolver::new(assets.path());
    let table = resolver.resolve_all(&card);
    assert_eq!(table.len(), 3);
    assert_eq!(table.get("Yes/No"), Some("Yes"));
    assert_eq!(table.get("+/-"), Some("+"));

    // Wire shape: a JSON object in table order.
    let json = serde_json::to_value(&table).unwrap();
    assert_eq!(json["Soul"], "Overflowing feeling");
}

#[test]
fn test_resolve_all_missing_document_is_empty() {
    let assets = TempDir::new().unwrap();
    let resolver = MeaningResolver::new(assets.path());
    assert!(resolver.resolve_all(&Card::major("STAR")).is_empty());
}

#[test]
fn test_document_without_table_degrades() {
    let assets = TempDir::new().unwrap();
    let card = Card::major("SUN");

    // A well-formed docx whose body has paragraphs but no table.
    let path = assets.path().join("meanings/major/SUN.docx");
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    let file = fs::File::create(&path).unwrap();
    let mut writer = ZipWriter::new(file);
    writer
        .start_file("word/document.xml", SimpleFileOptions::default())
        .unwrap();
    writer
        .write_all(
            br#"<?xml version="1.0" encoding="UTF-8"?><w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main"><w:body><w:p><w:r><w:t>Prose only.</w:t></w:r></w:p></w:body></w:document>"#,
        )
        .unwrap();
    writer.finish().unwrap();

    let resolver = MeaningResolver::new(assets.path());
    let message = resolver.resolve(&card, "Soul");
    assert!(message.contains("No meaning table"));
    assert!(resolver.resolve_all(&card).is_empty());
}
