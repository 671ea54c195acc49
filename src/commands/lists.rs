use super::DatabaseArgs;
use crate::db::db::Db;
use crate::db::lists::TodoLists;
use crate::libs::messages::Message;
use crate::libs::view::View;
use crate::{msg_info, msg_print};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct ListsArgs {
    #[command(flatten)]
    database: DatabaseArgs,
}

pub fn cmd(args: ListsArgs) -> Result<()> {
    let db = Db::from_config(&args.database.config()?)?;
    let lists = TodoLists::new(&db.conn).all_with_open_items()?;

    if lists.is_empty() {
        msg_info!(Message::NoListsFound);
        return Ok(());
    }

    msg_print!(Message::ListsHeader, true);
    View::lists(&lists);

    Ok(())
}
