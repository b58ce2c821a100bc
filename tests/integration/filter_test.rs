use tempfile::tempdir;
use xdir::{error::Result, Walker};

use super::support::{parse_files, read_document, settings, write_tree};

fn names(document: &str) -> Vec<String> {
    parse_files(document).into_iter().map(|f| f.name).collect()
}

fn sample_tree(root: &std::path::Path) {
    write_tree(
        root,
        &[
            ("Dockerfile", "FROM scratch"),
            ("main.go", "package main"),
            ("notes.md", "# notes"),
            ("src/lib.rs", "pub fn f() {}"),
            ("data.bin", "binary-ish"),
        ],
    );
}

#[test]
fn test_default_extensions() -> Result<()> {
    let src = tempdir()?;
    let out = tempdir()?;
    sample_tree(src.path());

    let out_file = out.path().join("out.xml");
    Walker::new(settings(src.path(), &out_file)).run()?;
    assert_eq!(names(&read_document(&out_file)), vec!["main.go", "notes.md", "src/lib.rs"]);
    Ok(())
}

#[test]
fn test_explicit_extensions_shadow_globs() -> Result<()> {
    let src = tempdir()?;
    let out = tempdir()?;
    sample_tree(src.path());

    let out_file = out.path().join("out.xml");
    let mut settings = settings(src.path(), &out_file);
    settings.file_patterns = vec!["GO".to_string(), ".bin".to_string()];
    settings.glob_patterns = vec!["Dockerfile".to_string()];
    Walker::new(settings).run()?;

    assert_eq!(names(&read_document(&out_file)), vec!["data.bin", "main.go"]);
    Ok(())
}

#[test]
fn test_globs_match_base_names() -> Result<()> {
    let src = tempdir()?;
    let out = tempdir()?;
    sample_tree(src.path());

    let out_file = out.path().join("out.xml");
    let mut settings = settings(src.path(), &out_file);
    settings.glob_patterns = vec!["Dockerfile".to_string(), "*.rs".to_string()];
    Walker::new(settings).run()?;

    assert_eq!(names(&read_document(&out_file)), vec!["Dockerfile", "src/lib.rs"]);
    Ok(())
}

#[test]
fn test_invalid_glob_is_fatal() -> Result<()> {
    let src = tempdir()?;
    let out = tempdir()?;
    sample_tree(src.path());

    let mut settings = settings(src.path(), &out.path().join("out.xml"));
    settings.glob_patterns = vec!["[".to_string()];
    let err = Walker::new(settings).run().unwrap_err();
    assert!(err.is_critical());
    assert!(!out.path().join("out.xml").exists());
    Ok(())
}

#[test]
fn test_custom_excluded_names() -> Result<()> {
    let src = tempdir()?;
    let out = tempdir()?;
    write_tree(
        src.path(),
        &[("keep/a.md", "a"), ("vendor/b.md", "b"), ("node_modules/c.md", "c")],
    );

    let out_file = out.path().join("out.xml");
    let mut settings = settings(src.path(), &out_file);
    settings.excluded_names = vec!["vendor".to_string()];
    Walker::new(settings).run()?;

    // Replacing the list drops the built-in names too
    assert_eq!(names(&read_document(&out_file)), vec!["keep/a.md", "node_modules/c.md"]);
    Ok(())
}

#[test]
fn test_hidden_root_is_still_scanned() -> Result<()> {
    let parent = tempdir()?;
    let out = tempdir()?;
    let root = parent.path().join(".config");
    write_tree(&root, &[("settings.json", "{}")]);

    let out_file = out.path().join("out.xml");
    Walker::new(settings(&root, &out_file)).run()?;
    assert_eq!(names(&read_document(&out_file)), vec!["settings.json"]);
    Ok(())
}
