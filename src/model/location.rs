use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

pub const MIMEAPPS_LIST: &str = "mimeapps.list";

/// A candidate `mimeapps.list` file. Existence is not implied.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListLocation {
    pub path: PathBuf,

    /// Whether desktop files may live in the same directory as `path`.
    pub has_desktop_files: bool,
}

impl ListLocation {
    pub fn new(path: impl Into<PathBuf>, has_desktop_files: bool) -> Self {
        Self {
            path: path.into(),
            has_desktop_files,
        }
    }

    /// The directory holding the list. `None` for a bare `/` or file name, which
    /// have no directory desktop files could live in.
    pub fn dir(&self) -> Option<&Path> {
        self.path
            .parent()
            .filter(|dir| !dir.as_os_str().is_empty())
    }

    /// True for the plain `mimeapps.list`, false for `$desktop-mimeapps.list` variants.
    pub fn is_unqualified(&self) -> bool {
        self.path
            .file_name()
            .is_some_and(|name| name == MIMEAPPS_LIST)
    }
}
