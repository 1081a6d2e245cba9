//! Desktop entries (`.desktop` files) and the desktop ID index.
//!
//! Parsing follows the Desktop Entry Specification 1.5. Only what the association
//! engine and the command line need is interpreted: typed known keys, localized
//! strings, actions and the Exec key. Launching is out of scope.

mod entry;
mod exec;
mod index;
mod locale;
mod magic;
mod parse;
mod values;

pub use self::entry::{
    Action, DesktopEntry, StartupNotify, TYPE_APPLICATION, TYPE_DIRECTORY, TYPE_LINK,
};
pub use self::exec::{ExecArgPart, ExecError, ExecValue, FieldCodes};
pub use self::index::{DesktopIndex, desktop_file_dirs, desktop_id_for, probe_by_id};
pub use self::locale::{LocaleString, LocaleStrings};
pub use self::magic::{looks_like_desktop_entry, path_looks_like_desktop_entry};
pub use self::parse::{ParseError, ValueError};
