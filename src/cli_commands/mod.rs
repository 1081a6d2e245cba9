use clap::Subcommand;

pub(crate) mod inspect;
pub(crate) mod resolve;

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// List mimeapps.list locations, highest precedence first
    Locations(inspect::LocationsArgs),

    /// List desktop IDs and the desktop files providing them
    #[command(name = "desktop-files")]
    DesktopFiles(inspect::DesktopFilesArgs),

    /// Show the MIME type associations of all installed applications
    Associations(resolve::AssociationsArgs),

    /// Show the default applications of each MIME type
    Defaults(resolve::DefaultsArgs),

    /// Show the preferred applications for MIME types
    Query(resolve::QueryArgs),

    /// Show the broader types of a MIME type (shared-mime-info subclasses)
    Broader(inspect::BroaderArgs),
}
