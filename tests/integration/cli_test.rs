use clap::Parser;
use std::fs;
use std::path::PathBuf;
use tempfile::tempdir;
use xdir::{
    cli::{args::SummaryArg, commands::exit_code, Args, Command},
    error::Result,
    XdirError,
};

use super::support::{parse_files, read_document, write_tree};

#[test]
fn test_cli_defaults() {
    let args = Args::parse_from(["xdir"]);
    assert_eq!(args.source_dir, None);
    assert_eq!(args.output, None);
    assert!(args.patterns.is_empty());
    assert!(args.glob.is_empty());
    assert_eq!(args.max_size, None);
    assert!(!args.compress);
    assert!(!args.unsafe_mode);
    assert!(!args.deps);
    assert_eq!(args.token_count(), None);
    assert!(!args.stdout);
    assert_eq!(args.summary, None);
}

#[test]
fn test_cli_full_invocation() {
    let args = Args::parse_from([
        "xdir",
        "src",
        "ctx.xml",
        "-p",
        "go,md",
        "-g",
        "*.rs",
        "-s",
        "2048",
        "-z",
        "--unsafe",
        "-d",
        "--no-tokens",
        "--local-prefix",
        "example.com/app",
        "--summary",
        "json",
        "-q",
    ]);

    assert_eq!(args.source_dir, Some(PathBuf::from("src")));
    assert_eq!(args.output, Some(PathBuf::from("ctx.xml")));
    assert_eq!(args.patterns, vec!["go".to_string(), "md".to_string()]);
    assert_eq!(args.glob, vec!["*.rs".to_string()]);
    assert_eq!(args.max_size, Some(2048));
    assert!(args.compress);
    assert!(args.unsafe_mode);
    assert!(args.deps);
    assert_eq!(args.token_count(), Some(false));
    assert_eq!(args.local_prefix.as_deref(), Some("example.com/app"));
    assert_eq!(args.summary, Some(SummaryArg::Json));
    assert!(args.quiet);
}

#[test]
fn test_init_flag_selects_init_command() {
    let args = Args::parse_from(["xdir", "--init"]);
    assert!(matches!(Command::from_args(args), Command::Init));
}

#[test]
fn test_run_command_end_to_end() -> Result<()> {
    let src = tempdir()?;
    let out = tempdir()?;
    write_tree(src.path(), &[("a.md", "alpha"), ("b.go", "package b")]);

    // An explicit config keeps the user's own config files out of the run
    let config = out.path().join("xdir.toml");
    fs::write(&config, "file_patterns = [\"md\"]\n")?;

    let out_file = out.path().join("ctx.xml");
    let args = Args::parse_from([
        "xdir".to_string(),
        src.path().display().to_string(),
        out_file.display().to_string(),
        "--no-tokens".to_string(),
        "--no-progress".to_string(),
        "-q".to_string(),
        "--config".to_string(),
        config.display().to_string(),
    ]);

    let command = Command::from_args(args);
    assert_eq!(command.run(), 0);

    let names: Vec<String> = parse_files(&read_document(&out_file))
        .into_iter()
        .map(|f| f.name)
        .collect();
    assert_eq!(names, vec!["a.md"]);
    Ok(())
}

#[test]
fn test_missing_source_exits_with_critical_code() -> Result<()> {
    let out = tempdir()?;
    let missing = out.path().join("missing");
    let args = Args::parse_from([
        "xdir".to_string(),
        missing.display().to_string(),
        "--no-progress".to_string(),
    ]);

    let command = Command::from_args(args);
    let err = command.execute().unwrap_err();
    assert!(matches!(err, XdirError::InvalidPath { .. }));
    assert_eq!(exit_code(&err), 2);
    Ok(())
}
