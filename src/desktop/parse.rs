use std::collections::{BTreeMap, HashSet};

use indexmap::IndexMap;
use thiserror::Error;

use super::entry::{Action, DesktopEntry, StartupNotify, TYPE_APPLICATION, TYPE_LINK};
use super::exec::{ExecError, ExecValue};
use super::values::{
    is_ascii_no_control, parse_bool, parse_list, parse_string, split_escaped, split_key, unescape,
};

const DESKTOP_ENTRY_GROUP: &str = "Desktop Entry";
const DESKTOP_ACTION_PREFIX: &str = "Desktop Action ";

/// Errors for a single value. Wrapped in [`ParseError::Value`] with the line number.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ValueError {
    #[error("unexpected end of string, escape sequence not completed")]
    EscapeIncomplete,
    #[error("invalid boolean value: {0}")]
    InvalidBoolean(String),
    #[error("value must be ASCII: {0}")]
    NotAscii(String),
    #[error("key does not have a matching opening bracket: {0}")]
    UnmatchedBracket(String),
    #[error("the Actions key can only appear in the [Desktop Entry] group")]
    MisplacedActions,
    #[error(transparent)]
    Exec(#[from] ExecError),
}

/// Line numbers are 0-based and count every line of the input.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("parse failure at line {line}, expected [Desktop Entry], found {found}")]
    MissingDesktopEntryGroup { line: usize, found: String },
    #[error("parse failure at line {line}, duplicate group {group}")]
    DuplicateGroup { line: usize, group: String },
    #[error("parse failure on line {line}, no value could be determined: {text}")]
    MissingValue { line: usize, text: String },
    #[error("parse failure on line {line}, invalid key: {key}")]
    InvalidKey { line: usize, key: String },
    #[error("parse failure on line {line}, duplicate key {key}")]
    DuplicateKey { line: usize, key: String },
    #[error("parse failure on line {line}, key '{key}': {source}")]
    Value {
        line: usize,
        key: String,
        #[source]
        source: ValueError,
    },
    #[error("action has no matching Desktop Action group: {0:?}")]
    ActionHasNoGroup(String),
    #[error("{0} field is required")]
    MissingField(&'static str),
    #[error("failed reading line {line}: {message}")]
    Read { line: usize, message: String },
}

impl ParseError {
    /// The value-level cause, if this error came from a single key's value.
    pub fn value_error(&self) -> Option<&ValueError> {
        match self {
            ParseError::Value { source, .. } => Some(source),
            _ => None,
        }
    }
}

#[derive(Default)]
enum Group {
    #[default]
    Start,
    Main,
    Action(Action),
    Other(String),
}

/// Incremental desktop entry parser. Feed lines in order, then [`Parser::finish`].
#[derive(Default)]
pub(super) struct Parser {
    entry: DesktopEntry,
    group: Group,
    seen_groups: HashSet<String>,
    seen_keys: HashSet<String>,
    /// Declared action names, and whether a group was found for each.
    declared_actions: IndexMap<String, bool>,
    saw_url: bool,
}

impl Parser {
    pub(super) fn feed(&mut self, line_no: usize, raw: &str) -> Result<(), ParseError> {
        let line = raw.trim_end_matches([' ', '\t']);
        if line.is_empty() || line.starts_with('#') {
            return Ok(());
        }

        if let Group::Start = self.group {
            if line != "[Desktop Entry]" {
                return Err(ParseError::MissingDesktopEntryGroup {
                    line: line_no,
                    found: line.to_string(),
                });
            }
            self.group = Group::Main;
            self.seen_groups.insert(DESKTOP_ENTRY_GROUP.to_string());
            return Ok(());
        }

        if line.starts_with('[') && line.ends_with(']') {
            return self.open_group(line_no, &line[1..line.len() - 1]);
        }

        let Some((key, value)) = line.split_once('=') else {
            return Err(ParseError::MissingValue {
                line: line_no,
                text: line.to_string(),
            });
        };

        if key.is_empty() || key.ends_with("[]") || !is_ascii_no_control(key) {
            return Err(ParseError::InvalidKey {
                line: line_no,
                key: key.to_string(),
            });
        }
        if !self.seen_keys.insert(key.to_string()) {
            return Err(ParseError::DuplicateKey {
                line: line_no,
                key: key.to_string(),
            });
        }
        // Empty values are not covered by the format; treat them as absent.
        if value.is_empty() {
            return Ok(());
        }

        let result = match &mut self.group {
            Group::Start => Ok(()),
            Group::Main => self.apply_main(key, value),
            Group::Action(action) => apply_action(action, key, value),
            Group::Other(name) => {
                self.entry
                    .other_groups
                    .entry(name.clone())
                    .or_default()
                    .insert(key.to_string(), value.to_string());
                Ok(())
            }
        };

        result.map_err(|source| ParseError::Value {
            line: line_no,
            key: key.to_string(),
            source,
        })
    }

    pub(super) fn finish(mut self) -> Result<DesktopEntry, ParseError> {
        self.close_group();

        if let Some((name, _)) = self.declared_actions.iter().find(|(_, found)| !**found) {
            return Err(ParseError::ActionHasNoGroup(name.clone()));
        }
        if self.entry.name.default.is_empty() {
            return Err(ParseError::MissingField("Name"));
        }
        if self.entry.entry_type.is_empty() {
            return Err(ParseError::MissingField("Type"));
        }
        if self.entry.entry_type == TYPE_LINK && !self.saw_url {
            return Err(ParseError::MissingField("URL"));
        }
        if self.entry.entry_type == TYPE_APPLICATION
            && self.entry.exec.is_none()
            && !self.entry.dbus_activatable
        {
            return Err(ParseError::MissingField("Exec"));
        }

        Ok(self.entry)
    }

    fn open_group(&mut self, line_no: usize, name: &str) -> Result<(), ParseError> {
        self.close_group();

        if !self.seen_groups.insert(name.to_string()) {
            return Err(ParseError::DuplicateGroup {
                line: line_no,
                group: name.to_string(),
            });
        }
        self.seen_keys.clear();

        let declared = name
            .strip_prefix(DESKTOP_ACTION_PREFIX)
            .and_then(|action| self.declared_actions.get_mut(action).map(|f| (action, f)));

        self.group = match declared {
            Some((action, found)) => {
                *found = true;
                Group::Action(Action {
                    id: action.to_string(),
                    ..Action::default()
                })
            }
            // Action groups that are not listed in Actions= are kept as plain groups.
            None => {
                self.entry
                    .other_groups
                    .insert(name.to_string(), BTreeMap::new());
                Group::Other(name.to_string())
            }
        };
        Ok(())
    }

    fn close_group(&mut self) {
        if let Group::Action(action) = std::mem::take(&mut self.group)
            && !action.name.default.is_empty()
        {
            self.entry.actions.push(action);
        }
    }

    fn apply_main(&mut self, key: &str, value: &str) -> Result<(), ValueError> {
        let (name, locale) = split_key(key)?;
        let entry = &mut self.entry;

        match name {
            "Type" => entry.entry_type = parse_string(value)?,
            "Version" => entry.version = Some(parse_string(value)?),
            "Name" => entry.name.assign(locale, unescape(value)?),
            "GenericName" => entry.generic_name.assign(locale, unescape(value)?),
            "NoDisplay" => entry.no_display = parse_bool(value)?,
            "Comment" => entry.comment.assign(locale, unescape(value)?),
            "Icon" => entry.icon.assign(locale, unescape(value)?),
            "Hidden" => entry.hidden = parse_bool(value)?,
            "OnlyShowIn" => entry.only_show_in = parse_list(value)?,
            "NotShowIn" => entry.not_show_in = parse_list(value)?,
            "DBusActivatable" => entry.dbus_activatable = parse_bool(value)?,
            "TryExec" => entry.try_exec = Some(parse_string(value)?),
            "Exec" => entry.exec = Some(ExecValue::parse(value)?),
            "Path" => entry.path = Some(parse_string(value)?),
            "Terminal" => entry.terminal = parse_bool(value)?,
            "Actions" => {
                for action in parse_list(value)? {
                    self.declared_actions.entry(action).or_insert(false);
                }
            }
            "MimeType" => entry.mime_types = parse_list(value)?,
            "Categories" => entry.categories = parse_list(value)?,
            "Implements" => entry.implements = parse_list(value)?,
            "Keywords" => entry.keywords.assign(locale, split_escaped(value)?),
            "StartupNotify" => {
                entry.startup_notify = if parse_bool(value)? {
                    StartupNotify::Supported
                } else {
                    StartupNotify::Unsupported
                };
            }
            "StartupWMClass" => entry.startup_wm_class = Some(parse_string(value)?),
            "URL" => {
                entry.url = Some(parse_string(value)?);
                self.saw_url = true;
            }
            "PrefersNonDefaultGPU" => entry.prefers_non_default_gpu = parse_bool(value)?,
            "SingleMainWindow" => entry.single_main_window = parse_bool(value)?,
            _ => {
                entry.other_keys.insert(key.to_string(), value.to_string());
            }
        }

        Ok(())
    }
}

fn apply_action(action: &mut Action, key: &str, value: &str) -> Result<(), ValueError> {
    let (name, locale) = split_key(key)?;
    match name {
        "Name" => action.name.assign(locale, unescape(value)?),
        "Icon" => action.icon.assign(locale, unescape(value)?),
        "Exec" => action.exec = Some(ExecValue::parse(value)?),
        "Actions" => return Err(ValueError::MisplacedActions),
        _ => {}
    }
    Ok(())
}

#[cfg(test)]
#[path = "../tests/desktop/parse_tests.rs"]
mod tests;
