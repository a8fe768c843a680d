pub mod commands;
pub mod logging;
pub mod render;

use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use kitbag_core::config::{AppConfig, ConfigOverrides, LoadOptions};
use kitbag_core::{ApplicationError, ProductId};

#[derive(Debug, Parser)]
#[command(
    name = "kitbag",
    about = "Kitbag jersey shop",
    long_about = "Browse the jersey catalog, toggle jerseys into the bag, and review the order summary.",
    after_help = "Examples:\n  kitbag catalog\n  kitbag bag 1 2 --json\n  kitbag shop"
)]
pub struct Cli {
    #[arg(long, global = true, help = "Path to a kitbag.toml config file")]
    config: Option<PathBuf>,
    #[arg(long, global = true, help = "Override the log level (trace|debug|info|warn|error)")]
    log_level: Option<String>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    #[command(about = "Render the jersey catalog")]
    Catalog {
        #[arg(long, help = "Emit the storefront view as JSON")]
        json: bool,
    },
    #[command(about = "Toggle the given jersey ids in order and render catalog plus order summary")]
    Bag {
        #[arg(value_name = "ID", required = true)]
        ids: Vec<ProductId>,
        #[arg(long, help = "Emit the storefront view as JSON")]
        json: bool,
    },
    #[command(about = "Start an interactive shopping session on stdin/stdout")]
    Shop,
    #[command(about = "Inspect effective configuration values with source attribution")]
    Config,
}

impl Cli {
    fn load_options(&self) -> LoadOptions {
        LoadOptions {
            config_path: self.config.clone(),
            require_file: self.config.is_some(),
            overrides: ConfigOverrides {
                log_level: self.log_level.clone(),
                ..ConfigOverrides::default()
            },
        }
    }

    fn overridden_keys(&self) -> Vec<&'static str> {
        self.log_level.iter().map(|_| "logging.level").collect()
    }
}

pub fn run() -> ExitCode {
    let cli = Cli::parse();

    let config = match AppConfig::load(cli.load_options()) {
        Ok(config) => config,
        Err(error) => {
            let error = ApplicationError::Configuration(error.to_string());
            let result = commands::CommandResult::application_failure("startup", &error);
            println!("{}", result.output);
            return ExitCode::from(result.exit_code);
        }
    };
    logging::init(&config);

    let result = match &cli.command {
        Command::Catalog { json } => commands::catalog::run(&config, *json),
        Command::Bag { ids, json } => commands::bag::run(&config, ids, *json),
        Command::Shop => commands::shop::run(&config, io::stdin().lock(), io::stdout().lock()),
        Command::Config => {
            commands::config::run(&config, cli.config.as_deref(), &cli.overridden_keys())
        }
    };

    println!("{}", result.output);
    ExitCode::from(result.exit_code)
}
