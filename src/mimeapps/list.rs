use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use anyhow::{Context, Result};
use indexmap::IndexMap;
use thiserror::Error;

use crate::model::DesktopId;

/// MIME type to desktop IDs, in file order.
pub type Directives = IndexMap<String, Vec<DesktopId>>;

#[derive(Debug, Error)]
pub enum ListError {
    #[error("failed reading line {line}")]
    Read {
        line: usize,
        #[source]
        source: io::Error,
    },
}

/// The three sections of one `mimeapps.list` file.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MimeAppsList {
    pub default: Directives,
    pub added: Directives,
    pub removed: Directives,
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Section {
    Unknown,
    Default,
    Added,
    Removed,
}

impl MimeAppsList {
    /// Lines outside the three known sections and lines without `=` are ignored.
    /// A key repeated within a section extends its list.
    pub fn parse<R: BufRead>(reader: R) -> Result<Self, ListError> {
        let mut list = Self::default();
        let mut section = Section::Unknown;

        for (line_no, line) in reader.lines().enumerate() {
            let line = line.map_err(|source| ListError::Read {
                line: line_no,
                source,
            })?;
            let line = line.trim_end();
            if line.is_empty() {
                continue;
            }

            if line.starts_with('[') && line.ends_with(']') {
                section = match line {
                    "[Default Applications]" => Section::Default,
                    "[Added Associations]" => Section::Added,
                    "[Removed Associations]" => Section::Removed,
                    _ => Section::Unknown,
                };
                continue;
            }

            let directives = match section {
                Section::Unknown => continue,
                Section::Default => &mut list.default,
                Section::Added => &mut list.added,
                Section::Removed => &mut list.removed,
            };
            let Some((mime, ids)) = line.split_once('=') else {
                continue;
            };

            directives.entry(mime.to_string()).or_default().extend(
                ids.split(';')
                    .filter(|id| !id.is_empty())
                    .map(DesktopId::from),
            );
        }

        Ok(list)
    }

    pub fn parse_str(s: &str) -> Result<Self, ListError> {
        Self::parse(s.as_bytes())
    }

    /// `Ok(None)` when the file does not exist.
    pub fn load(path: &Path) -> Result<Option<Self>> {
        let file = match File::open(path) {
            Ok(file) => file,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(err) => {
                return Err(err).with_context(|| format!("open {}", path.display()));
            }
        };
        let list = Self::parse(BufReader::new(file))
            .with_context(|| format!("parse {}", path.display()))?;
        Ok(Some(list))
    }
}

/// Like [`MimeAppsList::load`], but a file that cannot be read is logged and treated
/// as missing.
pub(super) fn read_list(path: &Path) -> Option<MimeAppsList> {
    match MimeAppsList::load(path) {
        Ok(list) => list,
        Err(err) => {
            tracing::warn!(path = %path.display(), error = %format!("{err:#}"), "ignoring unreadable mimeapps.list");
            None
        }
    }
}

#[cfg(test)]
#[path = "../tests/mimeapps/list_tests.rs"]
mod tests;
