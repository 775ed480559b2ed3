// FILE: crates/cli/src/main.rs

use clap::{value_parser, Arg, ArgAction, Command};
use std::path::PathBuf;
use std::process::ExitCode;

mod commands;

/// Exit status for a run that failed after configuration was accepted
const EXIT_FAILURE: u8 = 1;
/// Exit status for unusable configuration
const EXIT_CONFIG: u8 = 2;

fn build_cli() -> Command {
    Command::new("chapterfeed")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Generate an RSS feed from a web serial's table-of-contents page")
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .value_name("PATH")
                .help("Config file (defaults to the platform config directory)")
                .value_parser(value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("url")
                .short('u')
                .long("url")
                .value_name("URL")
                .help("Table-of-contents page to scrape"),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .value_name("PATH")
                .help("Where to write the feed")
                .value_parser(value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("user-agent")
                .long("user-agent")
                .value_name("UA")
                .help("User-Agent header for the request"),
        )
        .arg(
            Arg::new("timeout")
                .long("timeout")
                .value_name("SECS")
                .help("Request timeout in seconds")
                .value_parser(value_parser!(u64)),
        )
        .arg(
            Arg::new("stdout")
                .long("stdout")
                .help("Print the feed instead of writing the output file")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("init-config")
                .long("init-config")
                .value_name("PATH")
                .help("Write a default config file to PATH and exit")
                .value_parser(value_parser!(PathBuf))
                .exclusive(true),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Log debug details")
                .action(ArgAction::SetTrue)
                .conflicts_with("quiet"),
        )
        .arg(
            Arg::new("quiet")
                .short('q')
                .long("quiet")
                .help("Only log warnings and errors")
                .action(ArgAction::SetTrue),
        )
}

fn init_logging(matches: &clap::ArgMatches) {
    let level = if matches.get_flag("verbose") {
        "debug"
    } else if matches.get_flag("quiet") {
        "warn"
    } else {
        "info"
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let matches = build_cli().get_matches();
    init_logging(&matches);

    if let Some(path) = matches.get_one::<PathBuf>("init-config") {
        return match commands::init_config(path) {
            Ok(()) => ExitCode::SUCCESS,
            Err(e) => {
                commands::report_error(&e);
                ExitCode::from(EXIT_FAILURE)
            }
        };
    }

    let config = match commands::resolve_config(&matches) {
        Ok(config) => config,
        Err(e) => {
            commands::report_error(&e);
            return ExitCode::from(EXIT_CONFIG);
        }
    };

    let result = if matches.get_flag("stdout") {
        commands::print_feed(config).await
    } else {
        commands::generate(config).await
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            commands::report_error(&e);
            if commands::is_config_failure(&e) {
                ExitCode::from(EXIT_CONFIG)
            } else {
                ExitCode::from(EXIT_FAILURE)
            }
        }
    }
}
