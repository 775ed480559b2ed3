// FILE: crates/cli/src/commands.rs

use anyhow::{Context, Result};
use chapterfeed_config::{Config, ConfigError, ConfigManager};
use chapterfeed_feed::FeedWriter;
use chapterfeed_generator::{FeedGenerator, GeneratorError};
use clap::ArgMatches;
use console::style;
use std::path::{Path, PathBuf};

/// Builds the effective configuration: defaults < file < environment < flags
pub fn resolve_config(matches: &ArgMatches) -> Result<Config> {
    let mut config = load_file_config(matches.get_one::<PathBuf>("config"))?;

    config
        .apply_process_env()
        .context("Invalid environment override")?;
    apply_flags(&mut config, matches);

    config.ensure_valid().context("Invalid configuration")?;
    Ok(config)
}

fn load_file_config(explicit: Option<&PathBuf>) -> Result<Config> {
    let manager = match explicit {
        Some(path) => {
            if !path.exists() {
                anyhow::bail!("Config file not found: {}", path.display());
            }
            ConfigManager::with_file(path)
        }
        None => match ConfigManager::new() {
            Ok(manager) => manager,
            Err(ConfigError::PathResolutionError { reason }) => {
                log::debug!("No platform config directory ({}), using defaults", reason);
                return Ok(Config::default());
            }
            Err(e) => return Err(e.into()),
        },
    };

    manager.load().with_context(|| {
        format!(
            "Failed to load config from {}",
            manager.config_path().display()
        )
    })
}

/// Applies command-line flags on top of `config`
pub fn apply_flags(config: &mut Config, matches: &ArgMatches) {
    if let Some(url) = matches.get_one::<String>("url") {
        config.source.url = url.clone();
    }
    if let Some(output) = matches.get_one::<PathBuf>("output") {
        config.output.path = output.clone();
    }
    if let Some(agent) = matches.get_one::<String>("user-agent") {
        config.source.user_agent = agent.clone();
    }
    if let Some(timeout) = matches.get_one::<u64>("timeout") {
        config.source.timeout_secs = *timeout;
    }
}

/// Runs one fetch-and-generate cycle and writes the feed file
pub async fn generate(config: Config) -> Result<()> {
    let generator = FeedGenerator::new(config)?;
    let report = generator.generate().await?;

    println!("{} {}", style("✓").green(), report);
    if report.items == 0 {
        println!(
            "{} the feed has no items; check that the page still uses the configured selector",
            style("!").yellow()
        );
    }
    Ok(())
}

/// Renders the feed and prints it to stdout
pub async fn print_feed(config: Config) -> Result<()> {
    let generator = FeedGenerator::new(config)?;
    let rendered = generator.render().await?;

    let stdout = std::io::stdout();
    FeedWriter::write_to(&rendered.feed, stdout.lock()).context("Failed to print feed")?;
    Ok(())
}

/// Writes a default config file to `path`
pub fn init_config(path: &Path) -> Result<()> {
    let manager = ConfigManager::with_file(path);
    let created = manager
        .initialize()
        .with_context(|| format!("Failed to write config to {}", path.display()))?;

    if created {
        println!("{} Wrote default config to {}", style("✓").green(), path.display());
    } else {
        println!("Config already exists at {}", path.display());
    }
    Ok(())
}

/// Prints the error and its causes to stderr
pub fn report_error(error: &anyhow::Error) {
    eprintln!("{} {}", style("error:").red().bold(), error);
    for cause in error.chain().skip(1) {
        eprintln!("  caused by: {}", cause);
    }
}

/// True when the failure is the operator's configuration, not the run
pub fn is_config_failure(error: &anyhow::Error) -> bool {
    error
        .downcast_ref::<GeneratorError>()
        .is_some_and(GeneratorError::is_config_error)
}
