//! Integration tests for settings loading.

mod common;

use std::path::PathBuf;

use boxlabel::core::labels::DEFAULT_LABELS;
use common::*;

#[test]
fn test_missing_file_uses_defaults() {
    let dir = tempfile::TempDir::new().unwrap();
    let settings = Settings::load(Some(dir.path().join("absent.yaml").as_path()));
    assert_eq!(settings, Settings::default());
    assert_eq!(settings.labels, DEFAULT_LABELS);
    assert_eq!(settings.label_set(), LabelSet::default());
}

#[test]
fn test_yaml_overrides_labels_and_output_dir() -> anyhow::Result<()> {
    let dir = tempfile::TempDir::new()?;
    let path = dir.path().join("settings.yaml");
    std::fs::write(&path, "labels: [car, truck, bus]\noutput_dir: /tmp/labels\n")?;

    let settings = Settings::read(&path)?;
    assert_eq!(settings.labels, ["car", "truck", "bus"]);
    assert_eq!(settings.output_dir, Some(PathBuf::from("/tmp/labels")));
    assert_eq!(settings.label_set().class_index("bus"), 2);
    Ok(())
}

#[test]
fn test_partial_yaml_keeps_default_labels() -> anyhow::Result<()> {
    let dir = tempfile::TempDir::new()?;
    let path = dir.path().join("settings.yaml");
    std::fs::write(&path, "output_dir: out\n")?;

    let settings = Settings::load(Some(path.as_path()));
    assert_eq!(settings.labels, DEFAULT_LABELS);
    assert_eq!(settings.output_dir, Some(PathBuf::from("out")));
    Ok(())
}

#[test]
fn test_invalid_yaml_falls_back_to_defaults() -> anyhow::Result<()> {
    let dir = tempfile::TempDir::new()?;
    let path = dir.path().join("settings.yaml");
    std::fs::write(&path, "labels: {not: [a list\n")?;

    assert!(Settings::read(&path).is_err());
    assert_eq!(Settings::load(Some(path.as_path())), Settings::default());
    Ok(())
}

#[test]
fn test_read_errors_name_the_settings_file() -> anyhow::Result<()> {
    let dir = tempfile::TempDir::new()?;
    let missing = dir.path().join("missing.yaml");
    let err = Settings::read(&missing).unwrap_err();
    assert!(err.to_string().starts_with("Failed to read settings file"));
    assert!(err.to_string().contains("missing.yaml"));
    assert!(err.chain().count() >= 2);

    let broken = dir.path().join("broken.yaml");
    std::fs::write(&broken, "labels: {not: [a list\n")?;
    let err = Settings::read(&broken).unwrap_err();
    assert!(err.to_string().starts_with("Failed to parse settings file"));
    assert!(err.chain().count() >= 2);
    Ok(())
}

#[test]
fn test_empty_label_list_falls_back_to_defaults() {
    let settings = Settings {
        labels: vec![],
        output_dir: None,
    };
    assert_eq!(settings.label_set(), LabelSet::default());
}

#[test]
fn test_save_then_read() -> anyhow::Result<()> {
    let dir = tempfile::TempDir::new()?;
    let path = dir.path().join("nested").join("settings.yaml");
    let settings = Settings {
        labels: vec!["x".to_string(), "y".to_string()],
        output_dir: Some(PathBuf::from("annotations")),
    };

    settings.save(&path)?;
    assert_eq!(Settings::read(&path)?, settings);
    Ok(())
}
