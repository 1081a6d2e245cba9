use std::path::Path;

use crate::basedir::BaseDirs;
use crate::model::{ListLocation, MIMEAPPS_LIST};

/// Every `mimeapps.list` location, highest precedence first. Existence is not checked.
///
/// Per directory, one `<desktop>-mimeapps.list` for each entry of `desktops` precedes
/// the plain `mimeapps.list`. Only the plain files under the `applications` data
/// directories are flagged as having desktop files next to them.
pub fn list_locations(base: &BaseDirs, desktops: &[String]) -> Vec<ListLocation> {
    let mut out = Vec::new();

    push_tier(&mut out, &base.config_home, desktops, false);
    for dir in &base.config_dirs {
        push_tier(&mut out, dir, desktops, false);
    }
    push_tier(&mut out, &base.data_home.join("applications"), desktops, true);
    for dir in &base.data_dirs {
        push_tier(&mut out, &dir.join("applications"), desktops, true);
    }

    out
}

fn push_tier(out: &mut Vec<ListLocation>, dir: &Path, desktops: &[String], data: bool) {
    for desktop in desktops {
        out.push(ListLocation::new(
            dir.join(format!("{desktop}-{MIMEAPPS_LIST}")),
            false,
        ));
    }
    out.push(ListLocation::new(dir.join(MIMEAPPS_LIST), data));
}

/// Splits an `XDG_CURRENT_DESKTOP` style value (`ubuntu:GNOME`) into lower-case names.
pub fn split_desktops(value: &str) -> Vec<String> {
    value
        .split(':')
        .filter(|name| !name.is_empty())
        .map(str::to_lowercase)
        .collect()
}

pub fn current_desktops() -> Vec<String> {
    split_desktops(&std::env::var("XDG_CURRENT_DESKTOP").unwrap_or_default())
}

#[cfg(test)]
#[path = "../tests/mimeapps/locations_tests.rs"]
mod tests;
