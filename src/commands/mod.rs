pub mod call;
pub mod folder;
pub mod sum;
pub mod task;

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Manage tasks")]
    Task(task::TaskArgs),
    #[command(about = "Manage folders")]
    Folder(folder::FolderArgs),
    #[command(about = "Show task counts")]
    Sum,
    #[command(about = "Dispatch a raw JSON request against the command surface")]
    Call(call::CallArgs),
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn menu() -> Result<()> {
        let cli = Self::parse();
        match cli.command {
            Commands::Task(args) => task::cmd(args),
            Commands::Folder(args) => folder::cmd(args),
            Commands::Sum => sum::cmd(),
            Commands::Call(args) => call::cmd(args),
        }
    }
}
