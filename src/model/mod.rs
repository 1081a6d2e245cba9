mod ids;
mod location;
mod tables;

pub use self::ids::DesktopId;
pub use self::location::{ListLocation, MIMEAPPS_LIST};
pub(crate) use self::tables::push_unique;
pub use self::tables::{Associations, dedup};
