use anyhow::Result;

use xdgmime::mimeapps::{associations, defaults, preferred_applications};
use xdgmime::model::Associations;

use super::{print_json, print_table};
use crate::cli_runtime::Session;

pub(super) fn handle_associations_command(session: &Session, json: bool) -> Result<()> {
    let index = session.desktop_index()?;
    let table = associations(&session.locations, &index);
    if json {
        return print_json(&table, "associations");
    }
    print_table(&table);
    Ok(())
}

pub(super) fn handle_defaults_command(session: &Session, probe: bool, json: bool) -> Result<()> {
    let index = session.desktop_index()?;
    let associated = associations(&session.locations, &index);
    let table = if probe {
        defaults(&session.locations, &associated, None)
    } else {
        defaults(&session.locations, &associated, Some(&index))
    };

    if json {
        return print_json(&table, "defaults");
    }
    print_table(&table);
    Ok(())
}

pub(super) fn handle_query_command(session: &Session, mimes: Vec<String>, json: bool) -> Result<()> {
    let index = session.desktop_index()?;
    let preferred = preferred_applications(&session.locations, &index);

    let table: Associations = mimes
        .into_iter()
        .map(|mime| {
            let ids = preferred.get(&mime).cloned().unwrap_or_default();
            (mime, ids)
        })
        .collect();

    if json {
        return print_json(&table, "preferred applications");
    }
    print_table(&table);
    Ok(())
}
