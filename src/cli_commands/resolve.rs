use clap::Args;

#[derive(Args)]
pub(crate) struct AssociationsArgs {
    /// Emit JSON
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args)]
pub(crate) struct DefaultsArgs {
    /// Look up desktop files on disk instead of indexing every desktop file first
    #[arg(long)]
    pub(crate) probe: bool,
    /// Emit JSON
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args)]
pub(crate) struct QueryArgs {
    /// MIME types to look up (e.g. text/plain)
    #[arg(required = true)]
    pub(crate) mimes: Vec<String>,
    /// Emit JSON
    #[arg(long)]
    pub(crate) json: bool,
}
