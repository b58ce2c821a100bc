//! XML document serialization
//!
//! Produces the `<files>` document one record at a time so the same code
//! serves streaming runs (records written as they are collected) and
//! buffered runs (records written into memory after linking).

use quick_xml::events::{BytesCData, BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;
use std::io::Write;

use crate::error::Result;
use crate::models::{FileRecord, ImportEdge};

const CDATA_END: &str = "]]>";
const CARRIAGE_RETURN_REF: &str = "&#13;";

/// Check that text can be carried verbatim in an XML 1.0 document
///
/// Returns a description of the first offending character.
pub fn check_embeddable(content: &str) -> std::result::Result<(), String> {
    match content.char_indices().find(|&(_, c)| !is_xml_char(c)) {
        Some((offset, c)) => Err(format!(
            "character U+{:04X} at byte {} is not allowed in XML",
            c as u32, offset
        )),
        None => Ok(()),
    }
}

fn is_xml_char(c: char) -> bool {
    matches!(c,
        '\u{9}' | '\u{A}' | '\u{D}'
        | '\u{20}'..='\u{D7FF}'
        | '\u{E000}'..='\u{FFFD}'
        | '\u{10000}'..='\u{10FFFF}')
}

/// Split content so that no piece contains `]]>`
///
/// Each terminator is cut between `]]` and `>`; emitting every piece as its
/// own CDATA section yields the original text when the sections are read
/// back and concatenated.
pub fn cdata_segments(content: &str) -> Vec<&str> {
    let mut segments = Vec::new();
    let mut start = 0;
    for (idx, _) in content.match_indices(CDATA_END) {
        let cut = idx + 2;
        segments.push(&content[start..cut]);
        start = cut;
    }
    if start < content.len() {
        segments.push(&content[start..]);
    }
    segments
}

/// Streams file records into a `<files>` document
pub struct XmlSerializer<W: Write> {
    writer: Writer<W>,
    include_dependencies: bool,
}

impl<W: Write> XmlSerializer<W> {
    /// Write the declaration and open the root element
    pub fn begin(inner: W, include_dependencies: bool) -> Result<Self> {
        let mut writer = Writer::new(inner);
        writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;
        writer.write_event(Event::Text(BytesText::new("\n")))?;
        writer.write_event(Event::Start(BytesStart::new("files")))?;

        Ok(Self {
            writer,
            include_dependencies,
        })
    }

    /// Append one `<file>` element
    pub fn write_record(&mut self, record: &FileRecord) -> Result<()> {
        self.indent(1)?;

        let size = record.size.to_string();
        let mut start = BytesStart::new("file");
        start.push_attribute(("name", record.path.as_str()));
        start.push_attribute(("size", size.as_str()));
        self.writer.write_event(Event::Start(start))?;

        self.write_content(&record.content)?;

        if self.include_dependencies {
            if let Some(deps) = &record.dependencies {
                self.indent(2)?;
                self.writer
                    .write_event(Event::Start(BytesStart::new("dependencies")))?;
                for edge in &deps.imports {
                    self.write_edge("imports", edge)?;
                }
                for edge in &deps.imported_by {
                    self.write_edge("imported_by", edge)?;
                }
                self.indent(2)?;
                self.writer
                    .write_event(Event::End(BytesEnd::new("dependencies")))?;
                self.indent(1)?;
            }
        }

        self.writer.write_event(Event::End(BytesEnd::new("file")))?;
        Ok(())
    }

    /// Close the root element and hand back the underlying writer
    pub fn finish(mut self) -> Result<W> {
        self.indent(0)?;
        self.writer.write_event(Event::End(BytesEnd::new("files")))?;
        self.writer.write_event(Event::Text(BytesText::new("\n")))?;
        Ok(self.writer.into_inner())
    }

    /// Emit content as CDATA sections
    ///
    /// Parsers fold `\r\n` and lone `\r` into `\n` inside CDATA, so every
    /// carriage return goes out as a character reference between sections.
    fn write_content(&mut self, content: &str) -> Result<()> {
        for (idx, piece) in content.split('\r').enumerate() {
            if idx > 0 {
                self.writer
                    .write_event(Event::Text(BytesText::from_escaped(CARRIAGE_RETURN_REF)))?;
            }
            for segment in cdata_segments(piece) {
                self.writer
                    .write_event(Event::CData(BytesCData::new(segment)))?;
            }
        }
        Ok(())
    }

    fn write_edge(&mut self, tag: &str, edge: &ImportEdge) -> Result<()> {
        self.indent(3)?;
        let mut element = BytesStart::new(tag);
        element.push_attribute(("path", edge.path.as_str()));
        element.push_attribute(("type", edge.kind.as_str()));
        if let Some(location) = &edge.location {
            element.push_attribute(("location", location.as_str()));
        }
        self.writer.write_event(Event::Empty(element))?;
        Ok(())
    }

    fn indent(&mut self, depth: usize) -> Result<()> {
        let text = format!("\n{}", "  ".repeat(depth));
        self.writer.write_event(Event::Text(BytesText::new(&text)))?;
        Ok(())
    }
}

/// Serialize a complete document into memory
pub fn serialize_document<'a, I>(records: I, include_dependencies: bool) -> Result<String>
where
    I: IntoIterator<Item = &'a FileRecord>,
{
    let mut serializer = XmlSerializer::begin(Vec::new(), include_dependencies)?;
    for record in records {
        serializer.write_record(record)?;
    }
    let bytes = serializer.finish()?;

    // Everything written above came from &str
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}
