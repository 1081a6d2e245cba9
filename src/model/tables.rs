use std::collections::BTreeMap;

use super::ids::DesktopId;

/// MIME type to desktop IDs, most preferred first. IDs are unique per type.
pub type Associations = BTreeMap<String, Vec<DesktopId>>;

pub(crate) fn push_unique(table: &mut Associations, mime: &str, id: &DesktopId) -> bool {
    let ids = table.entry(mime.to_string()).or_default();
    if ids.contains(id) {
        return false;
    }
    ids.push(id.clone());
    true
}

/// Removes every value after its first occurrence.
pub fn dedup<T: PartialEq + Clone>(input: &[T]) -> Vec<T> {
    let mut out: Vec<T> = Vec::with_capacity(input.len());
    for item in input {
        if !out.contains(item) {
            out.push(item.clone());
        }
    }
    out
}
