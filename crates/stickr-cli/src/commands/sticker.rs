//! Sticker management CLI commands.

use clap::{Args, Subcommand};
use serde::Serialize;
use tabled::Tabled;

use stickr_core::error::AppError;
use stickr_core::types::{ColorIndex, FolderId, StickerId};
use stickr_entity::sticker::Sticker;

use crate::output::{self, OutputFormat};

/// Arguments for sticker commands
#[derive(Debug, Args)]
pub struct StickerArgs {
    /// Sticker subcommand
    #[command(subcommand)]
    pub command: StickerCommand,
}

/// Sticker subcommands
#[derive(Debug, Subcommand)]
pub enum StickerCommand {
    /// List the stickers of a folder, oldest first
    List {
        /// Folder id
        folder: String,
    },
    /// Add a sticker to a folder
    Add {
        /// Folder id
        folder: String,
        /// Sticker text
        content: String,
        /// Palette index (0 yellow, 1 pink, 2 blue, 3 green, 4 purple)
        #[arg(short, long, default_value_t = 0, allow_negative_numbers = true)]
        color: i64,
    },
    /// Delete a sticker
    Delete {
        /// Sticker id
        id: String,
    },
    /// Set the color of a sticker
    Color {
        /// Sticker id
        id: String,
        /// Palette index; other values wrap around
        #[arg(allow_negative_numbers = true)]
        index: i64,
    },
}

/// Sticker display row
#[derive(Debug, Serialize, Tabled)]
struct StickerRow {
    /// Sticker ID
    id: String,
    /// Color
    color: String,
    /// Content
    content: String,
    /// Created at
    created_at: String,
}

impl StickerRow {
    fn new(sticker: &Sticker, format: OutputFormat) -> Self {
        let content = match format {
            OutputFormat::Table => output::truncate(&sticker.content, 48),
            OutputFormat::Json => sticker.content.clone(),
        };
        Self {
            id: sticker.id.to_string(),
            color: sticker.color().color().to_string(),
            content,
            created_at: sticker.created_at.format("%Y-%m-%d %H:%M:%S").to_string(),
        }
    }
}

/// Execute sticker commands
pub async fn execute(
    args: &StickerArgs,
    config_path: &str,
    format: OutputFormat,
) -> Result<(), AppError> {
    let config = super::load_config(config_path)?;
    let services = super::connect_services(&config).await?;
    let stickers = &services.stickers;

    match &args.command {
        StickerCommand::List { folder } => {
            let folder = FolderId::parse(folder)?;
            let rows: Vec<StickerRow> = stickers
                .list(&folder)
                .await?
                .iter()
                .map(|s| StickerRow::new(s, format))
                .collect();
            output::print_list(&rows, format);
        }
        StickerCommand::Add {
            folder,
            content,
            color,
        } => {
            let folder = FolderId::parse(folder)?;
            services.folders.get_or_create(&folder).await?;
            let sticker = stickers
                .create(&folder, content, ColorIndex::from_raw(*color))
                .await?;
            output::print_item(&StickerRow::new(&sticker, format), format);
        }
        StickerCommand::Delete { id } => {
            let id: StickerId = id.parse()?;
            if stickers.delete(id).await? {
                output::print_success("Sticker deleted.");
            } else {
                output::print_warning("Sticker was already gone.");
            }
        }
        StickerCommand::Color { id, index } => {
            let id: StickerId = id.parse()?;
            let color = stickers.set_color(id, *index).await?;
            output::print_success(&format!("Sticker color set to {color}"));
        }
    }

    services.stores.close().await;
    Ok(())
}
