use std::path::Path;

use crate::desktop::{DesktopIndex, probe_by_id};
use crate::model::{Associations, ListLocation, push_unique};

use super::list::read_list;

/// MIME type to default desktop IDs, collected from the Default directives of every
/// location (desktop-specific lists included) in precedence order.
///
/// A default is kept only when its desktop file loads and the pair is present in
/// `associations`. Without an index, desktop files are probed in the directories of
/// the locations that have desktop files next to them.
pub fn defaults(
    locations: &[ListLocation],
    associations: &Associations,
    index: Option<&DesktopIndex>,
) -> Associations {
    let probe_dirs: Vec<&Path> = locations
        .iter()
        .filter(|location| location.has_desktop_files)
        .filter_map(ListLocation::dir)
        .collect();

    let mut out = Associations::new();
    for location in locations {
        let Some(list) = read_list(&location.path) else {
            continue;
        };
        let path = location.path.display();

        for (mime, ids) in &list.default {
            for id in ids {
                let found = match index {
                    Some(index) => index.load_by_id(id),
                    None => probe_by_id(id, &probe_dirs),
                };
                if found.is_none() {
                    tracing::debug!(path = %path, %id, mime, "default application has no loadable desktop file");
                    continue;
                }

                let associated = associations
                    .get(mime)
                    .is_some_and(|ids| ids.contains(id));
                if !associated {
                    tracing::warn!(path = %path, %id, mime, "default application is not associated with the type");
                    continue;
                }

                push_unique(&mut out, mime, id);
            }
        }
    }
    out
}

#[cfg(test)]
#[path = "../tests/mimeapps/defaults_tests.rs"]
mod tests;
