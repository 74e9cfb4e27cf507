use crate::api::Surface;
use crate::libs::messages::Message;
use crate::libs::view::View;
use crate::{msg_error, msg_info, msg_print, msg_success};
use anyhow::Result;
use clap::{Args, Subcommand};
use dialoguer::{theme::ColorfulTheme, Confirm};

#[derive(Debug, Args)]
pub struct FolderArgs {
    #[command(subcommand)]
    command: FolderCommand,
}

#[derive(Debug, Subcommand)]
enum FolderCommand {
    /// Create a new folder
    Add {
        /// Folder name
        name: String,
        /// Display icon identifier
        #[arg(short, long)]
        icon: Option<String>,
    },
    /// List all folders
    List,
    /// Delete a folder and every task in it
    Delete {
        /// Folder id
        id: i64,
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
}

pub fn cmd(args: FolderArgs) -> Result<()> {
    let surface = Surface::new()?;

    match args.command {
        FolderCommand::Add { name, icon } => {
            let folder = surface.create_folder(&name, icon.as_deref())?;
            msg_success!(Message::FolderCreated(folder.name));
        }
        FolderCommand::List => {
            let folders = surface.get_folders()?;
            if folders.is_empty() {
                msg_info!(Message::NoFoldersFound);
                return Ok(());
            }
            msg_print!(Message::FoldersHeader, true);
            View::folders(&folders);
        }
        FolderCommand::Delete { id, yes } => {
            let Some(folder) = surface.get_folders()?.into_iter().find(|f| f.id == id) else {
                msg_error!(Message::FolderNotFound(id));
                return Ok(());
            };
            if !yes {
                let confirmed = Confirm::with_theme(&ColorfulTheme::default())
                    .with_prompt(Message::ConfirmDeleteFolder(folder.name.clone()).to_string())
                    .default(false)
                    .interact()?;
                if !confirmed {
                    msg_info!(Message::FolderDeleteCancelled);
                    return Ok(());
                }
            }
            if surface.delete_folder(id)? {
                msg_success!(Message::FolderDeleted(id));
            } else {
                msg_error!(Message::FolderNotFound(id));
            }
        }
    }

    Ok(())
}
