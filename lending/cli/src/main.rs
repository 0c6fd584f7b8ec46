mod config;
mod dashboard;
mod deploy;
mod home_directory;
mod init;
mod prompt;
mod tracing_filter;
mod tx;

use {
    crate::{
        dashboard::DashboardCmd, deploy::DeployCmd, home_directory::HomeDirectory, init::InitCmd,
        tracing_filter::CustomLevelFilter, tx::TxCmd,
    },
    clap::Parser,
    config::Config,
    config_parser::parse_config,
    lending_view::Action,
    std::path::PathBuf,
    tracing_subscriber::{fmt, prelude::*, registry},
};

const DEFAULT_LOG_LEVEL: &str = "info";

#[derive(Parser)]
#[command(author, version, about, next_display_order = None)]
struct Cli {
    /// Directory for the config file [default: ~/.instant-lending]
    #[arg(long, global = true)]
    home: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Parser)]
enum Command {
    /// Write the default config file
    Init(InitCmd),

    /// Show health factor and position [alias: d]
    #[command(next_display_order = None, alias = "d")]
    Dashboard(DashboardCmd),

    /// Supply native collateral
    Supply(TxCmd),

    /// Borrow against supplied collateral
    Borrow(TxCmd),

    /// Deploy the pool contract from its Hardhat artifact
    Deploy(DeployCmd),
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load `EVM_MNEMONIC` and friends from `.env`, if there is one.
    dotenvy::dotenv().ok();

    // Parse CLI arguments.
    let cli = Cli::parse();

    // Find the home directory from the CLI `--home` flag.
    let app_dir = HomeDirectory::new_or_default(cli.home)?;

    // Read the log level from the config file. `init` runs before there is one.
    let log_level = match &cli.command {
        Command::Init(_) => DEFAULT_LOG_LEVEL.to_string(),
        _ => parse_config::<Config, _>(app_dir.config_file())?.log_level,
    };

    // Set up tracing.
    registry()
        .with(log_level.parse::<CustomLevelFilter>()?)
        .with(fmt::layer())
        .init();

    match cli.command {
        Command::Init(cmd) => cmd.run(&app_dir),
        Command::Dashboard(cmd) => cmd.run(app_dir).await,
        Command::Supply(cmd) => cmd.run(Action::Supply, app_dir).await,
        Command::Borrow(cmd) => cmd.run(Action::Borrow, app_dir).await,
        Command::Deploy(cmd) => cmd.run(app_dir).await,
    }
}
