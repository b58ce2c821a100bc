//! Shared helpers for building scratch trees and reading documents back

use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use std::fs;
use std::path::{Path, PathBuf};
use xdir::models::config::{OutputTarget, Settings};

/// A `<file>` element read back from a document
#[derive(Debug, Default, Clone, PartialEq)]
pub struct ParsedFile {
    pub name: String,
    pub size: u64,
    pub content: String,
    pub imports: Vec<ParsedEdge>,
    pub imported_by: Vec<ParsedEdge>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ParsedEdge {
    pub path: String,
    pub kind: String,
    pub location: Option<String>,
}

/// Write `files` (relative path, content) under `root`, creating directories
pub fn write_tree(root: &Path, files: &[(&str, &str)]) {
    for (relative, content) in files {
        let path = root.join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, content).unwrap();
    }
}

/// Settings scanning `source` into `out`, with token naming off
pub fn settings(source: &Path, out: &Path) -> Settings {
    let mut settings = Settings::for_dir(source);
    settings.output = OutputTarget::File(out.to_path_buf());
    settings.token_count = false;
    settings
}

pub fn read_document(path: &Path) -> String {
    fs::read_to_string(path).unwrap()
}

/// Only entry in `dir` whose name ends with `suffix`
pub fn single_output(dir: &Path, suffix: &str) -> PathBuf {
    let matches: Vec<PathBuf> = fs::read_dir(dir)
        .unwrap()
        .map(|entry| entry.unwrap().path())
        .filter(|path| path.to_string_lossy().ends_with(suffix))
        .collect();
    assert_eq!(matches.len(), 1, "expected one output ending in {suffix}: {matches:?}");
    matches.into_iter().next().unwrap()
}

fn attr(element: &BytesStart<'_>, name: &[u8]) -> Option<String> {
    element
        .attributes()
        .flatten()
        .find(|a| a.key.as_ref() == name)
        .map(|a| String::from_utf8(a.value.into_owned()).unwrap())
}

fn edge(element: &BytesStart<'_>) -> ParsedEdge {
    ParsedEdge {
        path: attr(element, b"path").unwrap(),
        kind: attr(element, b"type").unwrap(),
        location: attr(element, b"location"),
    }
}

/// Parse a document with a real XML reader; panics if it is not well formed
pub fn parse_files(document: &str) -> Vec<ParsedFile> {
    let mut reader = Reader::from_str(document);
    reader.config_mut().trim_text(true);

    let mut files: Vec<ParsedFile> = Vec::new();
    let mut buf = Vec::new();
    let mut saw_root = false;

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(e)) if e.name().as_ref() == b"files" => saw_root = true,
            Ok(Event::Start(e)) if e.name().as_ref() == b"file" => {
                files.push(ParsedFile {
                    name: attr(&e, b"name").unwrap(),
                    size: attr(&e, b"size").unwrap().parse().unwrap(),
                    ..Default::default()
                });
            }
            Ok(Event::CData(e)) => {
                let text = String::from_utf8(e.into_inner().into_owned()).unwrap();
                files.last_mut().unwrap().content.push_str(&text);
            }
            Ok(Event::GeneralRef(e)) => {
                let ch = e.resolve_char_ref().unwrap().expect("only character references");
                files.last_mut().unwrap().content.push(ch);
            }
            Ok(Event::Empty(e)) if e.name().as_ref() == b"imports" => {
                files.last_mut().unwrap().imports.push(edge(&e));
            }
            Ok(Event::Empty(e)) if e.name().as_ref() == b"imported_by" => {
                files.last_mut().unwrap().imported_by.push(edge(&e));
            }
            Ok(Event::Eof) => break,
            Err(e) => panic!("malformed document at {}: {}", reader.buffer_position(), e),
            _ => {}
        }
        buf.clear();
    }

    assert!(saw_root, "document has no <files> root");
    files
}
