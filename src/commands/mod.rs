pub mod interactive;
pub mod list;
pub mod settings;
pub mod strategies;
pub mod tree;

use crate::libs::metadata::{APP_NAME, APP_VERSION};
use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "List tasks of the demo board through a sort and filter strategy")]
    List(list::ListArgs),
    #[command(about = "Show the demo board as a tree of groups")]
    Tree(tree::TreeArgs),
    #[command(about = "List registered sort and filter strategies")]
    Strategies,
    #[command(about = "Inspect or change settings")]
    Settings(settings::SettingsArgs),
    #[command(about = "Work with an in-memory board interactively")]
    Interactive,
}

#[derive(Debug, Parser)]
#[command(name = APP_NAME, version = APP_VERSION, author, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn menu() -> Result<()> {
        let cli = Self::parse();
        match cli.command {
            Commands::List(args) => list::cmd(args),
            Commands::Tree(args) => tree::cmd(args),
            Commands::Strategies => strategies::cmd(),
            Commands::Settings(args) => settings::cmd(args),
            Commands::Interactive => interactive::cmd(),
        }
    }
}
