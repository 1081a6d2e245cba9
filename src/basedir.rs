//! XDG Base Directory lookup.
//!
//! Values are resolved once from an environment lookup so callers (and tests) can
//! supply their own variables without touching the process environment.

use std::fs::{DirBuilder, File};
use std::io;
use std::os::unix::fs::DirBuilderExt;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum BaseDirError {
    #[error("no home directory: $HOME is not set and none could be determined")]
    NoHome,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BaseDirs {
    pub home: PathBuf,
    pub cache_home: PathBuf,
    pub config_home: PathBuf,
    pub config_dirs: Vec<PathBuf>,
    pub data_home: PathBuf,
    pub data_dirs: Vec<PathBuf>,
    pub state_home: PathBuf,
    pub runtime_dir: Option<PathBuf>,
    pub local_bin: PathBuf,
}

impl BaseDirs {
    pub fn from_env() -> Result<Self, BaseDirError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, BaseDirError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let home = lookup("HOME")
            .filter(|h| !h.is_empty())
            .map(PathBuf::from)
            .or_else(dirs::home_dir)
            .ok_or(BaseDirError::NoHome)?;

        Ok(Self {
            cache_home: single_var(&lookup, "XDG_CACHE_HOME")
                .unwrap_or_else(|| home.join(".cache")),
            config_home: single_var(&lookup, "XDG_CONFIG_HOME")
                .unwrap_or_else(|| home.join(".config")),
            config_dirs: list_var(&lookup, "XDG_CONFIG_DIRS", &["/etc/xdg"]),
            data_home: single_var(&lookup, "XDG_DATA_HOME")
                .unwrap_or_else(|| home.join(".local/share")),
            data_dirs: list_var(&lookup, "XDG_DATA_DIRS", &["/usr/local/share/", "/usr/share/"]),
            state_home: single_var(&lookup, "XDG_STATE_HOME")
                .unwrap_or_else(|| home.join(".local/state")),
            runtime_dir: single_var(&lookup, "XDG_RUNTIME_DIR"),
            local_bin: home.join(".local/bin"),
            home,
        })
    }

    /// First existing `$dir/suffix`, checking `$XDG_CONFIG_HOME` then `$XDG_CONFIG_DIRS`.
    pub fn find_config_file(&self, suffix: impl AsRef<Path>) -> Result<Option<PathBuf>> {
        find_file(suffix.as_ref(), &self.config_home, &self.config_dirs)
    }

    /// First existing `$dir/suffix`, checking `$XDG_DATA_HOME` then `$XDG_DATA_DIRS`.
    pub fn find_data_file(&self, suffix: impl AsRef<Path>) -> Result<Option<PathBuf>> {
        find_file(suffix.as_ref(), &self.data_home, &self.data_dirs)
    }

    /// Create or truncate `suffix` under `$XDG_CONFIG_HOME`, falling back to each
    /// `$XDG_CONFIG_DIRS` entry in turn.
    pub fn create_config_file(&self, suffix: impl AsRef<Path>) -> Result<(File, PathBuf)> {
        let dirs = std::iter::once(self.config_home.as_path())
            .chain(self.config_dirs.iter().map(PathBuf::as_path));
        create_file_in(suffix.as_ref(), dirs)
    }

    /// Like [`Self::create_config_file`], but only in `$XDG_CONFIG_DIRS` entries
    /// outside `$HOME`.
    pub fn create_system_config_file(&self, suffix: impl AsRef<Path>) -> Result<(File, PathBuf)> {
        create_file_in(suffix.as_ref(), self.system_dirs(&self.config_dirs))
    }

    /// Create or truncate `suffix` under `$XDG_DATA_HOME`, falling back to each
    /// `$XDG_DATA_DIRS` entry in turn.
    pub fn create_data_file(&self, suffix: impl AsRef<Path>) -> Result<(File, PathBuf)> {
        let dirs = std::iter::once(self.data_home.as_path())
            .chain(self.data_dirs.iter().map(PathBuf::as_path));
        create_file_in(suffix.as_ref(), dirs)
    }

    /// Like [`Self::create_data_file`], but only in `$XDG_DATA_DIRS` entries
    /// outside `$HOME`.
    pub fn create_system_data_file(&self, suffix: impl AsRef<Path>) -> Result<(File, PathBuf)> {
        create_file_in(suffix.as_ref(), self.system_dirs(&self.data_dirs))
    }

    /// Create a fresh private directory under the system temp dir and use it as
    /// the runtime dir.
    pub fn create_runtime_dir(&mut self) -> Result<PathBuf> {
        let dir = tempfile::Builder::new()
            .prefix("xdgmime-runtime-")
            .tempdir()
            .context("create runtime dir")?
            .keep();
        tracing::debug!(path = %dir.display(), "created runtime dir");
        self.runtime_dir = Some(dir.clone());
        Ok(dir)
    }

    fn system_dirs<'a>(&'a self, dirs: &'a [PathBuf]) -> impl Iterator<Item = &'a Path> {
        dirs.iter()
            .map(PathBuf::as_path)
            .filter(|dir| !dir.starts_with(&self.home))
    }
}

fn single_var<F>(lookup: &F, name: &str) -> Option<PathBuf>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(name)
        .map(PathBuf::from)
        .filter(|p| p.is_absolute())
}

fn list_var<F>(lookup: &F, name: &str, default: &[&str]) -> Vec<PathBuf>
where
    F: Fn(&str) -> Option<String>,
{
    let dirs: Vec<PathBuf> = lookup(name)
        .unwrap_or_default()
        .split(':')
        .filter(|s| !s.is_empty())
        .map(PathBuf::from)
        .filter(|p| p.is_absolute())
        .collect();

    if dirs.is_empty() {
        default.iter().map(PathBuf::from).collect()
    } else {
        dirs
    }
}

fn find_file(suffix: &Path, primary: &Path, secondary: &[PathBuf]) -> Result<Option<PathBuf>> {
    for dir in std::iter::once(primary).chain(secondary.iter().map(PathBuf::as_path)) {
        let candidate = dir.join(suffix);
        match std::fs::metadata(&candidate) {
            Ok(_) => return Ok(Some(candidate)),
            Err(err) if err.kind() == io::ErrorKind::NotFound => continue,
            Err(err) => {
                return Err(err).with_context(|| format!("stat {}", candidate.display()));
            }
        }
    }
    Ok(None)
}

fn create_file_in<'a>(
    suffix: &Path,
    dirs: impl IntoIterator<Item = &'a Path>,
) -> Result<(File, PathBuf)> {
    let mut failures = Vec::new();
    for dir in dirs {
        match create_file(&dir.join(suffix)) {
            Ok(created) => return Ok(created),
            Err(err) => {
                tracing::debug!(dir = %dir.display(), error = %format!("{err:#}"), "create failed");
                failures.push(format!("{err:#}"));
            }
        }
    }

    if failures.is_empty() {
        return Err(anyhow!("no directory to create {} in", suffix.display()));
    }
    Err(anyhow!(
        "could not create {} in any directory: {}",
        suffix.display(),
        failures.join("; ")
    ))
}

fn create_file(path: &Path) -> Result<(File, PathBuf)> {
    if let Some(parent) = path.parent() {
        DirBuilder::new()
            .recursive(true)
            .mode(0o700)
            .create(parent)
            .with_context(|| format!("create dir {}", parent.display()))?;
    }
    let file = File::create(path).with_context(|| format!("create {}", path.display()))?;
    Ok((file, path.to_path_buf()))
}

#[cfg(test)]
#[path = "tests/basedir_tests.rs"]
mod tests;
