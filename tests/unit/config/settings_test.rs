use std::path::PathBuf;
use tempfile::tempdir;
use xdir::{
    config::SettingsValidator,
    error::Result,
    models::config::{OutputTarget, PartialSettings, Settings, DEFAULT_EXCLUDED_NAMES},
    XdirError,
};

#[test]
fn test_partial_settings_merge() -> Result<()> {
    let mut base = PartialSettings {
        target_dir: Some(PathBuf::from("/base/path")),
        excluded_names: Some(vec!["node_modules".to_string()]),
        compress: Some(true),
        ..Default::default()
    };

    let override_settings = PartialSettings {
        target_dir: Some(PathBuf::from("/override/path")),
        excluded_names: Some(vec!["dist".to_string(), "build".to_string()]),
        token_count: Some(false),
        ..Default::default()
    };

    base.merge_from(override_settings);

    assert_eq!(base.target_dir, Some(PathBuf::from("/override/path")));
    assert_eq!(
        base.excluded_names,
        Some(vec!["dist".to_string(), "build".to_string()])
    );
    // Untouched fields survive
    assert_eq!(base.compress, Some(true));
    assert_eq!(base.token_count, Some(false));

    Ok(())
}

#[test]
fn test_settings_defaults() {
    let settings = Settings::default();

    assert_eq!(settings.target_dir, PathBuf::from("."));
    assert_eq!(settings.output, OutputTarget::File(PathBuf::from("output.xml")));
    assert_eq!(settings.max_file_size, 10 * 1024 * 1024);
    assert_eq!(
        settings.excluded_names,
        DEFAULT_EXCLUDED_NAMES.iter().map(|s| s.to_string()).collect::<Vec<_>>()
    );
    assert!(settings.file_patterns.is_empty());
    assert!(settings.glob_patterns.is_empty());
    assert!(!settings.unsafe_mode);
    assert!(!settings.compress);
    assert!(!settings.dependency_graph);
    assert!(settings.token_count);
    assert!(settings.needs_full_document());
}

#[test]
fn test_streaming_only_without_deps_and_tokens() {
    let mut settings = Settings::default();
    settings.token_count = false;
    assert!(!settings.needs_full_document());

    settings.dependency_graph = true;
    assert!(settings.needs_full_document());
}

#[test]
fn test_local_prefix_falls_back_to_root() {
    let mut settings = Settings::default();
    assert_eq!(settings.local_prefix_or(std::path::Path::new("/srv/app")), "/srv/app");

    settings.local_prefix = Some("example.com/app".to_string());
    assert_eq!(
        settings.local_prefix_or(std::path::Path::new("/srv/app")),
        "example.com/app"
    );
}

#[test]
fn test_validator() -> Result<()> {
    let dir = tempdir()?;

    let mut settings = Settings::for_dir(dir.path());
    settings.output = OutputTarget::Stdout;
    SettingsValidator::validate(&settings)?;

    settings.file_patterns = vec![".".to_string()];
    assert!(matches!(
        SettingsValidator::validate(&settings),
        Err(XdirError::Config { .. })
    ));

    settings.file_patterns.clear();
    settings.glob_patterns = vec!["[".to_string()];
    assert!(SettingsValidator::validate(&settings).is_err());

    settings.glob_patterns.clear();
    settings.output = OutputTarget::File(dir.path().join("missing").join("out.xml"));
    assert!(matches!(
        SettingsValidator::validate(&settings),
        Err(XdirError::InvalidPath { .. })
    ));

    Ok(())
}
