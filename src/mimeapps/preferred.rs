use crate::desktop::DesktopIndex;
use crate::model::{Associations, ListLocation, dedup};

use super::associations::associations;
use super::defaults::defaults;

/// Puts each type's defaults in front of its associations, dropping repeats.
pub fn merge_preferences(mut associations: Associations, defaults: Associations) -> Associations {
    for (mime, default_ids) in defaults {
        match associations.get_mut(&mime) {
            Some(ids) => {
                let merged: Vec<_> = default_ids.iter().chain(ids.iter()).cloned().collect();
                *ids = dedup(&merged);
            }
            None => {
                associations.insert(mime, default_ids);
            }
        }
    }
    associations
}

/// The preferred applications of every type, most preferred first.
pub fn preferred_applications(locations: &[ListLocation], index: &DesktopIndex) -> Associations {
    let associations = associations(locations, index);
    let defaults = defaults(locations, &associations, Some(index));
    merge_preferences(associations, defaults)
}

#[cfg(test)]
#[path = "../tests/mimeapps/preferred_tests.rs"]
mod tests;
