use super::DatabaseArgs;
use crate::api::{self, AppState};
use crate::db::db::Db;
use crate::libs::config::DatabaseLocation;
use crate::libs::messages::Message;
use crate::{msg_info, msg_success, msg_warning};
use actix_web::{middleware, web, App, HttpServer};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct ServeArgs {
    /// Bind host, overriding LISTKEEPER_HOST
    #[arg(long)]
    pub host: Option<String>,
    /// Bind port, overriding LISTKEEPER_PORT
    #[arg(short, long)]
    pub port: Option<u16>,
    #[command(flatten)]
    pub database: DatabaseArgs,
}

pub async fn cmd(args: ServeArgs) -> Result<()> {
    let mut config = args.database.config()?;
    if let Some(host) = args.host {
        config.host = host;
    }
    if let Some(port) = args.port {
        config.port = port;
    }

    // Schema problems are fatal here, before anything is bound
    let db = Db::from_config(&config)?;
    msg_info!(Message::DatabaseOpened(db.location().to_string()));
    if *db.location() == DatabaseLocation::InMemory {
        msg_warning!(Message::InMemoryDatabase);
    }

    let state = web::Data::new(AppState::new(db));
    let address = config.address();
    msg_success!(Message::ServerStarting(address.clone()));

    HttpServer::new(move || App::new().wrap(middleware::Logger::default()).app_data(state.clone()).configure(api::configure))
        .bind(address.as_str())?
        .run()
        .await?;

    msg_info!(Message::ServerStopped);
    Ok(())
}
