//! `mimeapps.list` resolution.
//!
//! Locations are ordered highest precedence first. [`associations`] folds the
//! Added/Removed directives and co-located desktop files of every location into one
//! table, [`defaults`] collects the Default directives that name an associated
//! application, and [`preferred_applications`] merges the two.
//!
//! Nothing here fails on a bad source: missing files read as empty, and unreadable
//! files or invalid references are dropped with a `tracing` diagnostic.

mod associations;
mod defaults;
mod list;
mod locations;
mod precedence;
mod preferred;

pub use self::associations::{AssociationState, Decision, associations};
pub use self::defaults::defaults;
pub use self::list::{Directives, ListError, MimeAppsList};
pub use self::locations::{current_desktops, list_locations, split_desktops};
pub use self::precedence::PrecedenceIndex;
pub use self::preferred::{merge_preferences, preferred_applications};
