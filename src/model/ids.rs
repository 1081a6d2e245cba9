use std::fmt;

use serde::{Deserialize, Serialize};

/// Desktop file ID, e.g. `firefox.desktop` or `kde-okular.desktop`.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DesktopId(pub String);

impl DesktopId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DesktopId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for DesktopId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}
