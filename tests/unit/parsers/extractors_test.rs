use xdir::{
    models::{FileRecord, ImportKind},
    parsers::{DependencyAnalyzer, Language},
    utils::PathResolver,
};

fn edges(language: Language, content: &str, prefix: &str) -> Vec<(String, ImportKind)> {
    language
        .extractor()
        .extract(content, prefix)
        .imports
        .into_iter()
        .map(|e| (e.path, e.kind))
        .collect()
}

#[test]
fn test_script_import_styles() {
    let content = r#"
import React from 'react';
import { join } from "node:path";
import './styles.css';
export { helper } from './helper';
const lodash = require('lodash/fp');
const local = require("../shared/util");
"#;

    assert_eq!(
        edges(Language::Script, content, ""),
        vec![
            ("react".to_string(), ImportKind::Standard),
            ("node:path".to_string(), ImportKind::Standard),
            ("./styles.css".to_string(), ImportKind::Local),
            ("./helper".to_string(), ImportKind::Local),
            ("lodash/fp".to_string(), ImportKind::External),
            ("../shared/util".to_string(), ImportKind::Local),
        ]
    );
}

#[test]
fn test_go_aliases_and_single_imports() {
    let content = "package main\n\nimport \"os\"\nimport (\n\tlog \"github.com/sirupsen/logrus\"\n\t_ \"example.com/app/db\"\n)\n";

    assert_eq!(
        edges(Language::Go, content, "example.com/app"),
        vec![
            ("os".to_string(), ImportKind::Standard),
            ("github.com/sirupsen/logrus".to_string(), ImportKind::External),
            ("example.com/app/db".to_string(), ImportKind::Local),
        ]
    );
}

#[test]
fn test_go_without_prefix_has_no_local_imports() {
    let content = "import \"example.com/app/db\"\n";
    assert_eq!(
        edges(Language::Go, content, ""),
        vec![("example.com/app/db".to_string(), ImportKind::External)]
    );
}

#[test]
fn test_python_only_matches_line_starts() {
    let content = "import json\n    from .models import User\n# import nothing\nx = 'import os'\n";
    assert_eq!(
        edges(Language::Python, content, ""),
        vec![
            ("json".to_string(), ImportKind::Standard),
            (".models".to_string(), ImportKind::Local),
        ]
    );
}

#[test]
fn test_analyzer_links_relative_script_imports() {
    let analyzer = DependencyAnalyzer::new(PathResolver::new("/project"), "/project");

    let mut record = FileRecord::new("web/app.ts", 0, "import x from './web/util.ts';\n");
    assert!(analyzer.extract(&mut record).is_none());

    let deps = record.dependencies.unwrap();
    assert_eq!(deps.imports.len(), 1);
    assert_eq!(deps.imports[0].kind, ImportKind::Local);
    assert!(deps.imports[0].location.is_none());
}
