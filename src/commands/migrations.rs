use super::DatabaseArgs;
use crate::{
    db::{db::Db, migrations::MigrationManager},
    libs::messages::Message,
    msg_info, msg_print,
};
use anyhow::Result;
use clap::{Args, Subcommand};

#[derive(Debug, Args)]
pub struct MigrationsArgs {
    #[command(subcommand)]
    command: MigrationsCommand,
    #[command(flatten)]
    database: DatabaseArgs,
}

#[derive(Debug, Subcommand)]
enum MigrationsCommand {
    /// Show current database version and pending steps
    Status,
}

pub fn cmd(args: MigrationsArgs) -> Result<()> {
    let location = args.database.config()?.database()?;
    // Inspection only: the schema is left exactly as found
    let conn = Db::open_without_migrations(&location)?;
    let manager = MigrationManager::new();

    match args.command {
        MigrationsCommand::Status => {
            let version = manager.current_version(&conn)?;
            msg_print!(Message::DatabaseVersion(version));

            let pending = manager.pending_migrations(&conn)?;
            if pending.is_empty() {
                msg_info!(Message::DatabaseUpToDate);
            } else {
                msg_info!(Message::DatabaseNeedsUpdate(version, manager.latest_version()));
                for (version, name) in pending {
                    println!("  v{}: {}", version, name);
                }
            }
        }
    }

    Ok(())
}
