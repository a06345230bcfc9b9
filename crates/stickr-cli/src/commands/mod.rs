//! CLI command definitions and dispatch.

pub mod board;
pub mod folder;
pub mod migrate;
pub mod serve;
pub mod sticker;

use std::sync::Arc;

use clap::{Parser, Subcommand};

use stickr_core::config::{AppConfig, LoggingConfig};
use stickr_core::error::AppError;
use stickr_database::Stores;
use stickr_service::{FolderService, StickerService};

use crate::output::OutputFormat;

/// Stickr: shareable sticky-note boards
#[derive(Debug, Parser)]
#[command(name = "stickr", version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "config/default.toml")]
    pub config: String,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub format: OutputFormat,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Start the HTTP API server
    Serve(serve::ServeArgs),
    /// Database migration management
    Migrate(migrate::MigrateArgs),
    /// Folder management
    Folder(folder::FolderArgs),
    /// Sticker management
    Sticker(sticker::StickerArgs),
    /// Open a folder as an interactive terminal board
    Board(board::BoardArgs),
}

impl Cli {
    /// Execute the CLI command
    pub async fn execute(&self) -> Result<(), AppError> {
        match &self.command {
            Commands::Serve(args) => serve::execute(args, &self.config).await,
            Commands::Migrate(args) => migrate::execute(args, &self.config).await,
            Commands::Folder(args) => folder::execute(args, &self.config, self.format).await,
            Commands::Sticker(args) => sticker::execute(args, &self.config, self.format).await,
            Commands::Board(args) => board::execute(args, &self.config).await,
        }
    }

    /// Logging settings for this invocation.
    ///
    /// `serve` follows the `[logging]` section of the configuration. The
    /// board owns the terminal, so it stays silent unless `RUST_LOG` asks
    /// otherwise. Every other command only reports warnings.
    pub fn logging(&self) -> LoggingConfig {
        match &self.command {
            Commands::Serve(_) => load_config(&self.config)
                .map(|config| config.logging)
                .unwrap_or_default(),
            Commands::Board(_) => LoggingConfig {
                level: "off".to_string(),
                ..LoggingConfig::default()
            },
            _ => LoggingConfig {
                level: "warn".to_string(),
                ..LoggingConfig::default()
            },
        }
    }
}

/// Helper: load configuration from file
pub fn load_config(config_path: &str) -> Result<AppConfig, AppError> {
    AppConfig::load(config_path)
}

/// Both repositories over the configured store.
pub struct Services {
    pub stores: Stores,
    pub folders: FolderService,
    pub stickers: StickerService,
}

/// Helper: connect the configured store and build the repositories
pub async fn connect_services(config: &AppConfig) -> Result<Services, AppError> {
    let stores = Stores::connect(&config.database).await?;
    let folders = FolderService::new(
        Arc::clone(&stores.folders),
        Arc::clone(&stores.stickers),
        config.server.public_url.clone(),
    );
    let stickers = StickerService::new(Arc::clone(&stores.stickers));

    Ok(Services {
        stores,
        folders,
        stickers,
    })
}
