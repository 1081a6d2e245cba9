use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use xdgmime::basedir::BaseDirs;
use xdgmime::desktop::{DesktopIndex, desktop_file_dirs};
use xdgmime::mimeapps::{current_desktops, list_locations, split_desktops};
use xdgmime::model::ListLocation;

use crate::Commands;

#[derive(Parser)]
#[command(name = "xdgmime")]
#[command(about = "Resolve preferred applications for MIME types", long_about = None)]
pub(crate) struct Cli {
    /// Colon separated desktop names (defaults to $XDG_CURRENT_DESKTOP)
    #[arg(long, global = true, value_name = "NAMES")]
    desktop: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

pub(crate) fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing();

    let session = Session::from_env(cli.desktop.as_deref())?;
    crate::cli_exec::handle_command(&session, cli.command)
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "xdgmime=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

/// Base directories and list locations for one invocation.
pub(crate) struct Session {
    pub(crate) base: BaseDirs,
    pub(crate) locations: Vec<ListLocation>,
}

impl Session {
    pub(crate) fn from_env(desktop: Option<&str>) -> Result<Self> {
        let base = BaseDirs::from_env().context("resolve XDG base directories")?;
        let desktops = match desktop {
            Some(names) => split_desktops(names),
            None => current_desktops(),
        };
        let locations = list_locations(&base, &desktops);
        Ok(Self { base, locations })
    }

    pub(crate) fn desktop_index(&self) -> Result<DesktopIndex> {
        DesktopIndex::scan(&desktop_file_dirs(&self.base)).context("index desktop files")
    }
}
