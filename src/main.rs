use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::warn;

use slackpanel::api::ApiClient;
use slackpanel::config::Config;

mod cli;

#[derive(Parser)]
#[command(name = "slackpanel")]
#[command(about = "Configure and test Slack webhook notifications for your media server")]
#[command(version)]
struct Cli {
    /// Server base URL (overrides the config file)
    #[arg(short, long, global = true)]
    server: Option<String>,

    /// Path to the config file (defaults to ~/.slackpanel/config.toml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Open the settings panel (default)
    Gui,

    /// Print the current Slack notification settings
    Show,

    /// Send a test notification
    Test {
        /// Send to this webhook URL instead of the saved one
        #[arg(long)]
        webhook_url: Option<String>,
    },

    /// Write a default config file
    Init {
        /// Overwrite existing config file
        #[arg(long)]
        force: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .init();

    let config_path = cli
        .config
        .clone()
        .unwrap_or_else(Config::global_config_path);

    if let Some(Commands::Init { force }) = &cli.command {
        return cli::init::init_command(&config_path, *force);
    }

    let mut config = if config_path.exists() {
        match Config::from_file(&config_path) {
            Ok(cfg) => cfg,
            Err(e) => {
                warn!(
                    "Failed to parse config ({}): {}. Falling back to defaults.",
                    config_path.display(),
                    e
                );
                Config::default()
            }
        }
    } else {
        Config::default()
    };

    if let Some(server) = cli.server {
        config.server.base_url = server;
    }

    match cli.command {
        None | Some(Commands::Gui) => slackpanel::gui::run_gui(config),
        Some(Commands::Show) => {
            let client = ApiClient::from_server(&config.server);
            cli::show::show_command(&client)
        }
        Some(Commands::Test { webhook_url }) => {
            let client = ApiClient::from_server(&config.server);
            cli::test::test_command(&client, webhook_url)
        }
        Some(Commands::Init { .. }) => unreachable!("handled above"),
    }
}
