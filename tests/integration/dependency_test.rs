use tempfile::tempdir;
use xdir::{error::Result, Walker};

use super::support::{parse_files, read_document, settings, write_tree};

#[test]
fn test_go_imports_are_classified() -> Result<()> {
    let src = tempdir()?;
    let out = tempdir()?;
    write_tree(
        src.path(),
        &[(
            "main.go",
            "package main\n\nimport (\n\t\"fmt\"\n\t\"github.com/pkg/errors\"\n\t\"example.com/app/util\"\n)\n",
        )],
    );

    let out_file = out.path().join("out.xml");
    let mut settings = settings(src.path(), &out_file);
    settings.dependency_graph = true;
    settings.local_prefix = Some("example.com/app".to_string());
    Walker::new(settings).run()?;

    let files = parse_files(&read_document(&out_file));
    let kinds: Vec<(String, String)> = files[0]
        .imports
        .iter()
        .map(|e| (e.path.clone(), e.kind.clone()))
        .collect();
    assert_eq!(
        kinds,
        vec![
            ("fmt".to_string(), "standard".to_string()),
            ("github.com/pkg/errors".to_string(), "external".to_string()),
            ("example.com/app/util".to_string(), "local".to_string()),
        ]
    );
    Ok(())
}

#[test]
fn test_unterminated_go_block_counts_an_error() -> Result<()> {
    let src = tempdir()?;
    let out = tempdir()?;
    write_tree(src.path(), &[("broken.go", "package x\nimport (\n\t\"fmt\"\n")]);

    let out_file = out.path().join("out.xml");
    let mut settings = settings(src.path(), &out_file);
    settings.dependency_graph = true;
    let report = Walker::new(settings).run()?;

    // The file is still in the document with the edges found so far
    assert_eq!(report.stats.files_processed, 1);
    assert_eq!(report.stats.errors, 1);
    let files = parse_files(&read_document(&out_file));
    assert_eq!(files[0].imports.len(), 1);
    assert_eq!(files[0].imports[0].path, "fmt");
    Ok(())
}

#[test]
fn test_python_imports_are_classified() -> Result<()> {
    let src = tempdir()?;
    let out = tempdir()?;
    write_tree(
        src.path(),
        &[("app.py", "import os\nfrom pkg.models import User\n\ndef main():\n    pass\n")],
    );

    let out_file = out.path().join("out.xml");
    let mut settings = settings(src.path(), &out_file);
    settings.dependency_graph = true;
    Walker::new(settings).run()?;

    let files = parse_files(&read_document(&out_file));
    let imports = &files[0].imports;
    assert_eq!(imports.len(), 2);
    assert_eq!((imports[0].path.as_str(), imports[0].kind.as_str()), ("os", "standard"));
    assert_eq!(
        (imports[1].path.as_str(), imports[1].kind.as_str()),
        ("pkg.models", "local")
    );
    Ok(())
}

#[test]
fn test_imported_by_follows_walk_order() -> Result<()> {
    let src = tempdir()?;
    let out = tempdir()?;
    write_tree(
        src.path(),
        &[
            ("shared.js", "export const x = 1;\n"),
            ("z.js", "import { x } from './shared.js';\n"),
            ("lib/a.js", "const s = require('./shared.js');\n"),
            ("m.ts", "export * from './shared.js';\n"),
        ],
    );

    let out_file = out.path().join("out.xml");
    let mut settings = settings(src.path(), &out_file);
    settings.dependency_graph = true;
    Walker::new(settings).run()?;

    let files = parse_files(&read_document(&out_file));
    let shared = files.iter().find(|f| f.name == "shared.js").unwrap();
    let importers: Vec<&str> = shared.imported_by.iter().map(|e| e.path.as_str()).collect();
    assert_eq!(importers, vec!["lib/a.js", "m.ts", "z.js"]);
    assert!(shared.imported_by.iter().all(|e| e.location.is_none()));
    Ok(())
}

#[test]
fn test_unsupported_languages_get_empty_dependencies() -> Result<()> {
    let src = tempdir()?;
    let out = tempdir()?;
    write_tree(src.path(), &[("README.md", "import x from './y.js'")]);

    let out_file = out.path().join("out.xml");
    let mut settings = settings(src.path(), &out_file);
    settings.dependency_graph = true;
    Walker::new(settings).run()?;

    let document = read_document(&out_file);
    assert!(document.contains("<dependencies>"));
    let files = parse_files(&document);
    assert!(files[0].imports.is_empty());
    assert!(files[0].imported_by.is_empty());
    Ok(())
}
