use std::collections::{BTreeMap, HashMap, HashSet};

use crate::desktop::{DesktopEntry, DesktopIndex};
use crate::model::{Associations, DesktopId, ListLocation, push_unique};

use super::list::read_list;
use super::precedence::PrecedenceIndex;

/// What a higher-precedence source already said about a `(mime, id)` pair.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Decision {
    #[default]
    Undecided,
    Added,
    Removed,
}

/// Accumulator threaded through the locations by [`associations`].
///
/// The first decision on a pair is final. An ID becomes exhausted once the desktop
/// files next to some location have been scanned for it; lower locations can then no
/// longer add or remove it.
#[derive(Clone, Debug, Default)]
pub struct AssociationState {
    decisions: HashMap<(String, DesktopId), Decision>,
    exhausted: HashSet<DesktopId>,
    table: Associations,
}

impl AssociationState {
    pub fn decision(&self, mime: &str, id: &DesktopId) -> Decision {
        self.decisions
            .get(&(mime.to_string(), id.clone()))
            .copied()
            .unwrap_or_default()
    }

    pub fn is_exhausted(&self, id: &DesktopId) -> bool {
        self.exhausted.contains(id)
    }

    pub fn table(&self) -> &Associations {
        &self.table
    }

    pub fn into_table(self) -> Associations {
        self.table
    }

    /// Folds location `i` into the state.
    pub fn apply_location(
        &mut self,
        i: usize,
        location: &ListLocation,
        precedence: &PrecedenceIndex,
        index: &DesktopIndex,
    ) {
        // Desktop-specific lists only carry defaults.
        if !location.is_unqualified() {
            tracing::trace!(path = %location.path.display(), "skipping desktop-specific list");
            return;
        }

        let list = read_list(&location.path).unwrap_or_default();
        for (mime, ids) in &list.added {
            for id in ids {
                if self.accepts(i, mime, id, precedence) {
                    self.decide(mime, id, Decision::Added);
                    push_unique(&mut self.table, mime, id);
                }
            }
        }
        for (mime, ids) in &list.removed {
            for id in ids {
                if self.accepts(i, mime, id, precedence) {
                    self.decide(mime, id, Decision::Removed);
                }
            }
        }

        if location.has_desktop_files {
            self.scan_desktop_files(location, index);
        }
    }

    fn accepts(&self, i: usize, mime: &str, id: &DesktopId, precedence: &PrecedenceIndex) -> bool {
        if self.is_exhausted(id) {
            return false;
        }
        if !precedence.is_valid_at(id, i) {
            tracing::debug!(%id, mime, location = i, "ignoring directive for desktop file not installed at this level");
            return false;
        }
        self.decision(mime, id) == Decision::Undecided
    }

    fn decide(&mut self, mime: &str, id: &DesktopId, decision: Decision) {
        self.decisions
            .insert((mime.to_string(), id.clone()), decision);
    }

    fn scan_desktop_files(&mut self, location: &ListLocation, index: &DesktopIndex) {
        let Some(dir) = location.dir() else {
            return;
        };
        let mut queued: BTreeMap<String, Vec<DesktopId>> = BTreeMap::new();

        for (id, paths) in index.iter() {
            if self.is_exhausted(id) {
                continue;
            }
            let Some(path) = paths.iter().find(|path| path.starts_with(dir)) else {
                continue;
            };
            self.exhausted.insert(id.clone());

            let entry = match DesktopEntry::load(path) {
                Ok(entry) => entry,
                Err(err) => {
                    tracing::warn!(path = %path.display(), error = %format!("{err:#}"), "skipping unloadable desktop file");
                    continue;
                }
            };

            for mime in &entry.mime_types {
                if self.decision(mime, id) != Decision::Undecided {
                    continue;
                }
                self.decide(mime, id, Decision::Added);
                queued.entry(mime.clone()).or_default().push(id.clone());
            }
        }

        for (mime, mut ids) in queued {
            ids.sort();
            for id in &ids {
                push_unique(&mut self.table, &mime, id);
            }
        }
    }
}

/// MIME type to associated desktop IDs, most preferred first.
///
/// Added directives come first in location order, followed after each co-located
/// location by the applications installed there (sorted by ID per type).
pub fn associations(locations: &[ListLocation], index: &DesktopIndex) -> Associations {
    let precedence = PrecedenceIndex::new(locations, index);
    let mut state = AssociationState::default();
    for (i, location) in locations.iter().enumerate() {
        tracing::trace!(path = %location.path.display(), "reading associations");
        state.apply_location(i, location, &precedence, index);
    }
    state.into_table()
}

#[cfg(test)]
#[path = "../tests/mimeapps/associations_tests.rs"]
mod tests;
