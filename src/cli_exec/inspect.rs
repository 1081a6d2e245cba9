use anyhow::Result;

use xdgmime::subclass::Subclasses;

use super::print_json;
use crate::cli_runtime::Session;

pub(super) fn handle_locations_command(session: &Session, json: bool) -> Result<()> {
    if json {
        return print_json(&session.locations, "locations");
    }
    for location in &session.locations {
        if location.has_desktop_files {
            println!("{} (desktop files)", location.path.display());
        } else {
            println!("{}", location.path.display());
        }
    }
    Ok(())
}

pub(super) fn handle_desktop_files_command(session: &Session, json: bool) -> Result<()> {
    let index = session.desktop_index()?;
    if json {
        return print_json(&index, "desktop files");
    }
    for (id, paths) in index.iter() {
        for path in paths {
            println!("{} {}", id, path.display());
        }
    }
    Ok(())
}

pub(super) fn handle_broader_command(
    session: &Session,
    mime: &str,
    once: bool,
    json: bool,
) -> Result<()> {
    let subclasses = Subclasses::from_base_dirs(&session.base)?;
    let broader = if once {
        subclasses.broader_once(mime)
    } else {
        subclasses.broader_dfs(mime)
    };

    if json {
        return print_json(&broader, "broader types");
    }
    for mime in broader {
        println!("{}", mime);
    }
    Ok(())
}
