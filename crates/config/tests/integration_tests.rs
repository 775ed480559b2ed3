//! Integration tests for the configuration system

use chapterfeed_config::{
    ChannelConfig, Config, ConfigError, ConfigManager, ConfigSection, OutputConfig, SourceConfig,
    ENV_TIMEOUT_SECS, ENV_URL,
};
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

fn setup_test_manager() -> (TempDir, ConfigManager) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let manager = ConfigManager::with_directory(temp_dir.path());
    (temp_dir, manager)
}

#[test]
fn test_full_lifecycle() -> Result<(), Box<dyn std::error::Error>> {
    let (_temp_dir, manager) = setup_test_manager();

    assert!(manager.initialize()?);
    let mut config = manager.load()?;
    assert_eq!(config, Config::default());

    config.output.path = PathBuf::from("public/wandering-inn.xml");
    config.channel.description = "Every chapter, newest first".to_string();
    manager.save(&config)?;

    let reloaded = manager.load()?;
    assert_eq!(reloaded.output.path, PathBuf::from("public/wandering-inn.xml"));
    assert_eq!(reloaded.channel.description, "Every chapter, newest first");

    Ok(())
}

#[test]
fn test_hand_written_file() -> Result<(), Box<dyn std::error::Error>> {
    let (temp_dir, manager) = setup_test_manager();
    fs::write(
        temp_dir.path().join("config.toml"),
        r#"
[source]
url = "https://example.com/serial/toc/"
selector = "li.chapter > a"

[channel]
title = "Example Serial"
"#,
    )?;

    let config = manager.load()?;
    assert_eq!(config.source.url, "https://example.com/serial/toc/");
    assert_eq!(config.source.selector, "li.chapter > a");
    assert_eq!(config.source.timeout_secs, SourceConfig::default().timeout_secs);
    assert_eq!(config.channel.title, "Example Serial");
    assert_eq!(config.channel.language, ChannelConfig::default().language);
    assert_eq!(config.output, OutputConfig::default());

    Ok(())
}

#[test]
fn test_env_overrides_apply_after_file() -> Result<(), Box<dyn std::error::Error>> {
    let (temp_dir, manager) = setup_test_manager();
    fs::write(
        temp_dir.path().join("config.toml"),
        "[source]\nurl = \"https://file.example.com/toc/\"\ntimeout_secs = 20\n",
    )?;

    let mut config = manager.load()?;
    config.apply_env_overrides(|key| match key {
        k if k == ENV_URL => Some("https://env.example.com/toc/".to_string()),
        _ => None,
    })?;

    assert_eq!(config.source.url, "https://env.example.com/toc/");
    assert_eq!(config.source.timeout_secs, 20);
    Ok(())
}

#[test]
fn test_env_override_can_make_config_invalid() {
    let mut config = Config::default();
    config
        .apply_env_overrides(|key| (key == ENV_TIMEOUT_SECS).then(|| "0".to_string()))
        .expect("parses as a number");

    assert!(matches!(config.ensure_valid(), Err(ConfigError::ValidationError(_))));
}

#[test]
fn test_section_names() {
    assert_eq!(SourceConfig::default().section_name(), "source");
    assert_eq!(ChannelConfig::default().section_name(), "channel");
    assert_eq!(OutputConfig::default().section_name(), "output");
}

#[test]
fn test_serialized_defaults_are_readable() -> Result<(), Box<dyn std::error::Error>> {
    let (_temp_dir, manager) = setup_test_manager();
    manager.initialize()?;

    let text = fs::read_to_string(manager.config_path())?;
    assert!(text.contains("[source]"));
    assert!(text.contains("https://wanderinginn.com/table-of-contents/"));
    assert!(text.contains("[output]"));
    Ok(())
}
