use anyhow::{Context, Result};

use xdgmime::model::Associations;

use crate::Commands;
use crate::cli_runtime::Session;

mod inspect;
mod resolve;

pub(super) fn handle_command(session: &Session, command: Commands) -> Result<()> {
    match command {
        Commands::Locations(args) => inspect::handle_locations_command(session, args.json)?,
        Commands::DesktopFiles(args) => {
            inspect::handle_desktop_files_command(session, args.json)?
        }
        Commands::Associations(args) => {
            resolve::handle_associations_command(session, args.json)?
        }
        Commands::Defaults(args) => {
            resolve::handle_defaults_command(session, args.probe, args.json)?
        }
        Commands::Query(args) => resolve::handle_query_command(session, args.mimes, args.json)?,
        Commands::Broader(args) => {
            inspect::handle_broader_command(session, &args.mime, args.once, args.json)?
        }
    }
    Ok(())
}

fn print_json<T: serde::Serialize>(value: &T, what: &str) -> Result<()> {
    println!(
        "{}",
        serde_json::to_string_pretty(value).with_context(|| format!("serialize {what} json"))?
    );
    Ok(())
}

fn print_table(table: &Associations) {
    for (mime, ids) in table {
        let ids: Vec<&str> = ids.iter().map(|id| id.as_str()).collect();
        println!("{}={};", mime, ids.join(";"));
    }
}
