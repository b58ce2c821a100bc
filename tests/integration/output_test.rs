use flate2::read::GzDecoder;
use std::fs;
use std::io::Read;
use std::path::PathBuf;
use tempfile::tempdir;
use xdir::{
    error::Result,
    models::{
        config::SummaryFormat, DependencyInfo, FileRecord, ImportEdge, ImportKind, RunReport,
        Stats,
    },
    output::{create_formatter, create_writer, serialize_document, XmlSerializer},
};

use super::support::parse_files;

fn linked_records() -> Vec<FileRecord> {
    let mut app = FileRecord::new("app.js", 28, "import u from './util.js';\n");
    let mut edge = ImportEdge::new("./util.js", ImportKind::Local);
    edge.location = Some("util.js".to_string());
    app.dependencies = Some(DependencyInfo::with_imports(vec![
        edge,
        ImportEdge::new("fs", ImportKind::Standard),
    ]));

    let mut util = FileRecord::new("util.js", 17, "export default 1;");
    util.dependencies = Some(DependencyInfo {
        imports: Vec::new(),
        imported_by: vec![ImportEdge::new("app.js", ImportKind::Local)],
    });

    vec![app, util]
}

#[test]
fn test_dependency_section_layout() -> Result<()> {
    let document = serialize_document(&linked_records(), true)?;

    assert!(document.contains(
        "<imports path=\"./util.js\" type=\"local\" location=\"util.js\"/>"
    ));
    assert!(document.contains("<imports path=\"fs\" type=\"standard\"/>"));
    assert!(document.contains("<imported_by path=\"app.js\" type=\"local\"/>"));

    let files = parse_files(&document);
    assert_eq!(files[0].imports.len(), 2);
    assert_eq!(files[1].imported_by[0].path, "app.js");
    Ok(())
}

#[test]
fn test_dependencies_omitted_when_disabled() -> Result<()> {
    let document = serialize_document(&linked_records(), false)?;
    assert!(!document.contains("<dependencies>"));
    assert_eq!(parse_files(&document).len(), 2);
    Ok(())
}

#[test]
fn test_incremental_serializer_matches_buffered() -> Result<()> {
    let records = linked_records();

    let mut serializer = XmlSerializer::begin(Vec::new(), true)?;
    for record in &records {
        serializer.write_record(record)?;
    }
    let streamed = String::from_utf8(serializer.finish()?).unwrap();

    assert_eq!(streamed, serialize_document(&records, true)?);
    Ok(())
}

#[test]
fn test_create_writer_for_file() -> Result<()> {
    let dir = tempdir()?;
    let path = dir.path().join("doc.xml.gz");

    create_writer(Some(&path), true).write(b"<files/>")?;

    let mut decoded = String::new();
    GzDecoder::new(fs::File::open(&path)?).read_to_string(&mut decoded)?;
    assert_eq!(decoded, "<files/>");

    // Only the final file is left behind
    assert_eq!(fs::read_dir(dir.path())?.count(), 1);
    Ok(())
}

#[test]
fn test_json_summary_shape() -> Result<()> {
    let mut stats = Stats::new();
    stats.record_file(10);
    stats.add_tokens(3);
    let report = RunReport {
        stats,
        output: Some(PathBuf::from("3-out.xml")),
        buffered: true,
    };

    let output = create_formatter(SummaryFormat::Json, false, false, false).format(&report)?;
    let json: serde_json::Value = serde_json::from_str(&output)?;

    assert_eq!(json["stats"]["files_processed"], 1);
    assert_eq!(json["stats"]["bytes_processed"], 10);
    assert_eq!(json["stats"]["tokens"], 3);
    assert_eq!(json["output"], "3-out.xml");
    assert_eq!(json["buffered"], true);
    Ok(())
}

#[test]
fn test_quiet_text_summary_is_one_line() -> Result<()> {
    let mut stats = Stats::new();
    stats.record_file(10);
    let report = RunReport {
        stats,
        output: None,
        buffered: false,
    };

    let output = create_formatter(SummaryFormat::Text, false, false, true).format(&report)?;
    assert_eq!(output.trim_end().lines().count(), 1);
    Ok(())
}
