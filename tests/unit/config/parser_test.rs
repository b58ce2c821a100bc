use std::fs;
use std::path::PathBuf;
use tempfile::tempdir;
use xdir::{
    config::parser::{
        create_default_config, parse_config_content, parse_config_file, validate_partial_settings,
    },
    error::Result,
    models::config::{PartialSettings, SummaryFormat},
};

const SAMPLE: &str = r#"
    target_dir = "/test/path"
    output_file = "ctx.xml"
    file_patterns = ["GO", ".md", " ts "]
    glob_patterns = ["Dockerfile"]
    max_file_size = 2048
    dependency_graph = true
    token_count = false
    local_prefix = "example.com/app"
    summary_format = "json"
"#;

#[test]
fn test_parse_config_content() -> Result<()> {
    let settings = parse_config_content(SAMPLE, "virtual_path.toml")?;

    assert_eq!(settings.target_dir, Some(PathBuf::from("/test/path")));
    assert_eq!(settings.output_file, Some(PathBuf::from("ctx.xml")));
    // Extensions come back normalized
    assert_eq!(
        settings.file_patterns,
        Some(vec![".go".to_string(), ".md".to_string(), ".ts".to_string()])
    );
    assert_eq!(settings.glob_patterns, Some(vec!["Dockerfile".to_string()]));
    assert_eq!(settings.max_file_size, Some(2048));
    assert_eq!(settings.dependency_graph, Some(true));
    assert_eq!(settings.token_count, Some(false));
    assert_eq!(settings.local_prefix.as_deref(), Some("example.com/app"));
    assert_eq!(settings.summary_format, Some(SummaryFormat::Json));
    assert_eq!(settings.compress, None);

    Ok(())
}

#[test]
fn test_parse_config_file() -> Result<()> {
    let temp_dir = tempdir()?;
    let config_path = temp_dir.path().join("test_config.toml");
    fs::write(&config_path, SAMPLE)?;

    let settings = parse_config_file(&config_path)?;
    assert_eq!(settings.target_dir, Some(PathBuf::from("/test/path")));
    assert_eq!(settings.max_file_size, Some(2048));

    Ok(())
}

#[test]
fn test_validate_partial_settings() -> Result<()> {
    let valid_settings = PartialSettings {
        target_dir: Some(PathBuf::from("/test/path")),
        glob_patterns: Some(vec!["*.rs".to_string()]),
        excluded_names: Some(vec!["vendor".to_string()]),
        ..Default::default()
    };
    assert!(validate_partial_settings(&valid_settings, "test.toml").is_ok());

    let empty_extension = PartialSettings {
        file_patterns: Some(vec![" . ".to_string()]),
        ..Default::default()
    };
    assert!(validate_partial_settings(&empty_extension, "test.toml").is_err());

    let bad_glob = PartialSettings {
        glob_patterns: Some(vec!["[".to_string()]),
        ..Default::default()
    };
    assert!(validate_partial_settings(&bad_glob, "test.toml").is_err());

    let empty_exclusion = PartialSettings {
        excluded_names: Some(vec!["".to_string()]),
        ..Default::default()
    };
    assert!(validate_partial_settings(&empty_exclusion, "test.toml").is_err());

    Ok(())
}

#[test]
fn test_create_default_config() -> Result<()> {
    let temp_dir = tempdir()?;
    let config_path = temp_dir.path().join("nested").join(".xdir.toml");

    create_default_config(&config_path)?;
    assert!(config_path.exists());

    // Every option in the template is commented out
    let settings = parse_config_file(&config_path)?;
    assert_eq!(settings, PartialSettings::default());

    Ok(())
}

#[test]
fn test_invalid_config_content() {
    let invalid_toml = r#"
        target_dir = "/test/path"
        file_patterns = ["go", "md"
    "#;
    assert!(parse_config_content(invalid_toml, "virtual_path.toml").is_err());

    let invalid_format = r#"
        summary_format = "yaml"
    "#;
    assert!(parse_config_content(invalid_format, "virtual_path.toml").is_err());

    let wrong_type = r#"
        max_file_size = "big"
    "#;
    assert!(parse_config_content(wrong_type, "virtual_path.toml").is_err());
}
