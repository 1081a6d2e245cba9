use std::collections::HashMap;

use crate::desktop::DesktopIndex;
use crate::model::{DesktopId, ListLocation};

/// For each desktop ID, the lowest-precedence location whose directory holds one of
/// its desktop files.
///
/// An Added or Removed directive at location `i` may only refer to IDs whose deepest
/// index is at least `i`: an application installed only in a higher-precedence
/// directory cannot be configured from a lower one.
#[derive(Clone, Debug, Default)]
pub struct PrecedenceIndex {
    deepest: HashMap<DesktopId, usize>,
}

impl PrecedenceIndex {
    pub fn new(locations: &[ListLocation], index: &DesktopIndex) -> Self {
        let mut deepest = HashMap::new();
        for (id, paths) in index.iter() {
            let found = locations.iter().rposition(|location| {
                location
                    .dir()
                    .is_some_and(|dir| paths.iter().any(|path| path.starts_with(dir)))
            });
            if let Some(i) = found {
                deepest.insert(id.clone(), i);
            }
        }
        Self { deepest }
    }

    /// `None` when no desktop file for `id` lives next to any location.
    pub fn deepest_valid_index(&self, id: &DesktopId) -> Option<usize> {
        self.deepest.get(id).copied()
    }

    pub fn is_valid_at(&self, id: &DesktopId, location: usize) -> bool {
        self.deepest_valid_index(id)
            .is_some_and(|deepest| deepest >= location)
    }
}

#[cfg(test)]
#[path = "../tests/mimeapps/precedence_tests.rs"]
mod tests;
