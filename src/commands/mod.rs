pub mod lists;
pub mod migrations;
pub mod serve;

use crate::libs::config::Config;
use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Open the database, apply migrations and serve the JSON API")]
    Serve(serve::ServeArgs),
    #[command(about = "Print every list with its open items")]
    Lists(lists::ListsArgs),
    #[command(about = "Inspect the database schema version", arg_required_else_help = true)]
    Migrations(migrations::MigrationsArgs),
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub async fn menu() -> Result<()> {
        let cli = Self::parse();
        match cli.command {
            Commands::Serve(args) => serve::cmd(args).await,
            Commands::Lists(args) => lists::cmd(args),
            Commands::Migrations(args) => migrations::cmd(args),
        }
    }
}

/// Database selection flags shared by every command that opens the database.
#[derive(Debug, Clone, Default, Args)]
pub struct DatabaseArgs {
    /// Database file, overriding DB_PATH
    #[arg(long)]
    pub db_path: Option<PathBuf>,
    /// Use an ephemeral in-memory database
    #[arg(long)]
    pub in_memory: bool,
}

impl DatabaseArgs {
    /// Environment configuration with these flags applied on top.
    pub fn config(&self) -> Result<Config> {
        let mut config = Config::from_env()?;
        self.apply(&mut config);
        Ok(config)
    }

    pub fn apply(&self, config: &mut Config) {
        if let Some(path) = &self.db_path {
            config.db_path = Some(path.clone());
        }
        if self.in_memory {
            config.in_memory = true;
        }
    }
}
