//! Folder management CLI commands.

use clap::{Args, Subcommand};
use serde::Serialize;
use tabled::Tabled;

use stickr_core::error::AppError;
use stickr_core::types::FolderId;
use stickr_entity::folder::Folder;
use stickr_service::{FolderRemoval, RenameOutcome};

use crate::output::{self, OutputFormat};

/// Arguments for folder commands
#[derive(Debug, Args)]
pub struct FolderArgs {
    /// Folder subcommand
    #[command(subcommand)]
    pub command: FolderCommand,
}

/// Folder subcommands
#[derive(Debug, Subcommand)]
pub enum FolderCommand {
    /// Create a folder with a random id
    New,
    /// Show a folder, creating it on first access
    Show {
        /// Folder id
        id: String,
    },
    /// Rename a folder
    Rename {
        /// Folder id
        id: String,
        /// New name
        name: String,
    },
    /// Turn dark display mode on or off
    DarkMode {
        /// Folder id
        id: String,
        /// on or off
        #[arg(value_parser = clap::builder::BoolishValueParser::new())]
        enabled: bool,
    },
    /// Delete a folder and all of its stickers
    Delete {
        /// Folder id
        id: String,
        /// Skip confirmation prompt
        #[arg(long)]
        force: bool,
    },
    /// Print the share link of a folder
    Share {
        /// Folder id
        id: String,
    },
}

/// Folder display row
#[derive(Debug, Serialize, Tabled)]
struct FolderRow {
    /// Folder ID
    id: String,
    /// Name
    name: String,
    /// Dark mode
    dark_mode: bool,
    /// Share link
    share_url: String,
    /// Updated at
    updated_at: String,
}

impl FolderRow {
    fn new(folder: &Folder, share_url: String) -> Self {
        Self {
            id: folder.id.to_string(),
            name: folder.name.clone(),
            dark_mode: folder.dark_mode,
            share_url,
            updated_at: folder.updated_at.format("%Y-%m-%d %H:%M:%S").to_string(),
        }
    }
}

/// Execute folder commands
pub async fn execute(
    args: &FolderArgs,
    config_path: &str,
    format: OutputFormat,
) -> Result<(), AppError> {
    let config = super::load_config(config_path)?;
    let services = super::connect_services(&config).await?;
    let folders = &services.folders;

    match &args.command {
        FolderCommand::New => {
            let folder = folders.create_random().await?;
            output::print_item(&FolderRow::new(&folder, folders.share_url(&folder.id)), format);
        }
        FolderCommand::Show { id } => {
            let id = FolderId::parse(id)?;
            let folder = folders.get_or_create(&id).await?;
            output::print_item(&FolderRow::new(&folder, folders.share_url(&id)), format);
        }
        FolderCommand::Rename { id, name } => {
            let id = FolderId::parse(id)?;
            let current = folders.find(&id).await?;
            match folders.apply_rename(&current, name).await? {
                RenameOutcome::Renamed(folder) => {
                    output::print_success(&format!("Folder renamed to '{}'", folder.name));
                }
                RenameOutcome::Unchanged => output::print_warning("Name unchanged."),
            }
        }
        FolderCommand::DarkMode { id, enabled } => {
            let id = FolderId::parse(id)?;
            let folder = folders.set_display_mode(&id, *enabled).await?;
            let state = if folder.dark_mode { "on" } else { "off" };
            output::print_success(&format!("Dark mode {state} for '{}'", folder.name));
        }
        FolderCommand::Delete { id, force } => {
            let id = FolderId::parse(id)?;
            if !force {
                let confirm = dialoguer::Confirm::new()
                    .with_prompt(format!("Delete folder '{id}' and all of its stickers?"))
                    .default(false)
                    .interact()
                    .map_err(|e| AppError::internal(format!("Input error: {e}")))?;

                if !confirm {
                    println!("Cancelled.");
                    return Ok(());
                }
            }

            let outcome = folders.delete(&id).await?;
            match &outcome.folder {
                FolderRemoval::Removed => output::print_success(&format!(
                    "Folder deleted ({} stickers removed)",
                    outcome.stickers_deleted
                )),
                FolderRemoval::AlreadyGone => output::print_warning(&format!(
                    "Folder did not exist ({} stickers removed)",
                    outcome.stickers_deleted
                )),
                FolderRemoval::Orphaned { reason } => output::print_warning(&format!(
                    "{} stickers removed, but the folder could not be deleted: {reason}",
                    outcome.stickers_deleted
                )),
            }
        }
        FolderCommand::Share { id } => {
            let id = FolderId::parse(id)?;
            println!("{}", folders.share_url(&id));
        }
    }

    services.stores.close().await;
    Ok(())
}
