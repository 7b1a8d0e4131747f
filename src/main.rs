use clap::{Arg, Command};
use dotenv::dotenv;
use std::path::PathBuf;
use std::process;
use tracing_subscriber::EnvFilter;

mod cli;

fn main() {
    // Load environment variables from .env file
    dotenv().ok();

    let matches = build_cli().get_matches();

    let settings = match mongen::config::Config::load() {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };

    init_tracing(&settings.logging.level);

    if let Err(e) = run_command(matches, &settings) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn init_tracing(level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("mongen={}", level)));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn build_cli() -> Command {
    Command::new("mongen")
        .version("0.1.0")
        .about("Mongen - Mongoid configuration scaffolder")
        .long_about("Generates the Mongoid client configuration and boot initializer for a host application")
        .arg_required_else_help(true)
        .subcommand(
            Command::new("config")
                .about("Create the Mongoid configuration files")
                .long_about("Writes config/mongoid.yml and config/initializers/mongoid.rb under the target root, substituting the host application name and an optional database name")
                .arg(
                    Arg::new("database-name")
                        .help("Database name rendered into the configuration")
                        .required(false)
                        .index(1)
                )
                .arg(
                    Arg::new("root")
                        .long("root")
                        .help("Host application root to write into")
                        .value_parser(clap::value_parser!(PathBuf))
                        .default_value(".")
                )
                .arg(
                    Arg::new("app-name")
                        .long("app-name")
                        .help("Override the resolved application name")
                )
                .arg(
                    Arg::new("verbose")
                        .short('v')
                        .long("verbose")
                        .help("Verbose output")
                        .action(clap::ArgAction::SetTrue)
                )
        )
}

fn run_command(matches: clap::ArgMatches, settings: &mongen::config::Config) -> anyhow::Result<()> {
    match matches.subcommand() {
        Some(("config", sub_matches)) => {
            cli::commands::config::handle_config(sub_matches, settings)?
        }
        _ => {
            unreachable!("Command parsing should ensure we never reach this");
        }
    }

    Ok(())
}
