use clap::Args;

#[derive(Args)]
pub(crate) struct LocationsArgs {
    /// Emit JSON
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args)]
pub(crate) struct DesktopFilesArgs {
    /// Emit JSON
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args)]
pub(crate) struct BroaderArgs {
    pub(crate) mime: String,
    /// Only show the direct parents
    #[arg(long)]
    pub(crate) once: bool,
    /// Emit JSON
    #[arg(long)]
    pub(crate) json: bool,
}
