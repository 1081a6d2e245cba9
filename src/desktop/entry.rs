use std::collections::BTreeMap;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;

use super::exec::ExecValue;
use super::locale::{LocaleString, LocaleStrings};
use super::parse::{ParseError, Parser};

pub const TYPE_APPLICATION: &str = "Application";
pub const TYPE_LINK: &str = "Link";
pub const TYPE_DIRECTORY: &str = "Directory";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub enum StartupNotify {
    /// Support is unknown.
    #[default]
    Unset,
    /// The application is known to send a "remove" message when started with
    /// `DESKTOP_STARTUP_ID` set.
    Supported,
    /// The application is known not to work with startup notification.
    Unsupported,
}

/// A parsed `[Desktop Entry]` (Desktop Entry Specification 1.5).
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct DesktopEntry {
    /// `Application`, `Link` or `Directory`. Unknown types are kept verbatim.
    pub entry_type: String,
    pub version: Option<String>,
    pub name: LocaleString,
    pub generic_name: LocaleString,
    pub no_display: bool,
    pub comment: LocaleString,
    pub icon: LocaleString,
    /// The user "deleted" this entry at their level.
    pub hidden: bool,
    pub only_show_in: Vec<String>,
    pub not_show_in: Vec<String>,
    pub dbus_activatable: bool,
    pub try_exec: Option<String>,
    pub exec: Option<ExecValue>,
    /// Working directory for `Type=Application`.
    pub path: Option<String>,
    pub terminal: bool,
    pub actions: Vec<Action>,
    /// MIME types this application declares support for.
    pub mime_types: Vec<String>,
    pub categories: Vec<String>,
    pub implements: Vec<String>,
    pub keywords: LocaleStrings,
    pub startup_notify: StartupNotify,
    pub startup_wm_class: Option<String>,
    /// Present on `Type=Link`.
    pub url: Option<String>,
    pub prefers_non_default_gpu: bool,
    pub single_main_window: bool,
    /// Remaining keys of the `[Desktop Entry]` group.
    pub other_keys: BTreeMap<String, String>,
    /// Groups other than `[Desktop Entry]` and the declared action groups.
    pub other_groups: BTreeMap<String, BTreeMap<String, String>>,
}

/// An additional application action (`[Desktop Action <name>]`).
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Action {
    pub id: String,
    pub name: LocaleString,
    pub icon: LocaleString,
    pub exec: Option<ExecValue>,
}

impl DesktopEntry {
    pub fn parse<R: std::io::BufRead>(reader: R) -> Result<Self, ParseError> {
        let mut parser = Parser::default();
        for (line_no, line) in reader.lines().enumerate() {
            let line = line.map_err(|err| ParseError::Read {
                line: line_no,
                message: err.to_string(),
            })?;
            parser.feed(line_no, &line)?;
        }
        parser.finish()
    }

    pub fn parse_str(s: &str) -> Result<Self, ParseError> {
        Self::parse(s.as_bytes())
    }

    pub fn load(path: &Path) -> Result<Self> {
        let file =
            File::open(path).with_context(|| format!("open desktop file {}", path.display()))?;
        Self::parse(BufReader::new(file))
            .with_context(|| format!("parse desktop file {}", path.display()))
    }

    pub fn is_application(&self) -> bool {
        self.entry_type == TYPE_APPLICATION
    }
}
