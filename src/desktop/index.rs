use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};
use serde::Serialize;

use crate::basedir::BaseDirs;
use crate::model::DesktopId;

use super::entry::DesktopEntry;
use super::magic::path_looks_like_desktop_entry;

/// Desktop ID to the desktop files carrying it, highest precedence first.
///
/// For example `libreoffice-writer.desktop` may map to both
/// `~/.local/share/applications/libreoffice-writer.desktop` and
/// `/usr/share/applications/libreoffice/writer.desktop`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct DesktopIndex {
    entries: BTreeMap<DesktopId, Vec<PathBuf>>,
}

impl DesktopIndex {
    /// Walks each directory in order. Missing directories are skipped; any other
    /// failure to walk a directory aborts the scan.
    pub fn scan<P: AsRef<Path>>(dirs: &[P]) -> Result<Self> {
        let mut index = Self::default();
        for dir in dirs {
            let dir = dir.as_ref();
            match fs::metadata(dir) {
                Ok(meta) if meta.is_dir() => {}
                Ok(_) => continue,
                Err(err) if err.kind() == io::ErrorKind::NotFound => continue,
                Err(err) => {
                    return Err(err).with_context(|| format!("stat {}", dir.display()));
                }
            }
            index
                .scan_dir(dir, dir)
                .with_context(|| format!("scan {} for desktop files", dir.display()))?;
        }
        tracing::trace!(ids = index.len(), "indexed desktop files");
        Ok(index)
    }

    fn scan_dir(&mut self, root: &Path, dir: &Path) -> Result<()> {
        for child in read_dir_sorted(dir)? {
            let path = child.path();
            let file_type = child.file_type().context("read file type")?;

            if file_type.is_dir() {
                self.scan_dir(root, &path)?;
                continue;
            }
            if file_type.is_symlink() && !path.is_file() {
                tracing::debug!(path = %path.display(), "skipping symlink that is not a file");
                continue;
            }

            if !is_desktop_file(&path) {
                continue;
            }

            let id = desktop_id_for(root, &path)?;
            self.insert(id, path);
        }
        Ok(())
    }

    pub fn insert(&mut self, id: DesktopId, path: PathBuf) {
        self.entries.entry(id).or_default().push(path);
    }

    pub fn paths(&self, id: &DesktopId) -> &[PathBuf] {
        self.entries.get(id).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn contains(&self, id: &DesktopId) -> bool {
        self.entries.contains_key(id)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&DesktopId, &[PathBuf])> {
        self.entries.iter().map(|(id, paths)| (id, paths.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Loads the first parseable desktop file for `id`. Unparseable files are logged
    /// and skipped.
    pub fn load_by_id(&self, id: &DesktopId) -> Option<(DesktopEntry, PathBuf)> {
        for path in self.paths(id) {
            match DesktopEntry::load(path) {
                Ok(entry) => return Some((entry, path.clone())),
                Err(err) => {
                    tracing::warn!(%id, path = %path.display(), error = %format!("{err:#}"), "skipping unloadable desktop file");
                }
            }
        }
        None
    }
}

/// Looks for `id` directly on disk without an index.
///
/// Each directory is tried in order, first as `dir/id`, then with the first `-` of the
/// ID taken as a subdirectory separator (`foo-bar.desktop` → `dir/foo/bar.desktop`).
pub fn probe_by_id<P: AsRef<Path>>(id: &DesktopId, dirs: &[P]) -> Option<(DesktopEntry, PathBuf)> {
    for dir in dirs {
        let dir = dir.as_ref();
        let mut candidates = vec![dir.join(id.as_str())];
        let nested = dir.join(id.as_str().replacen('-', "/", 1));
        if !candidates.contains(&nested) {
            candidates.push(nested);
        }

        for path in candidates {
            match fs::metadata(&path) {
                Ok(_) => {}
                Err(err) if err.kind() == io::ErrorKind::NotFound => continue,
                Err(err) => {
                    tracing::warn!(path = %path.display(), error = %err, "failed to stat desktop file");
                    continue;
                }
            }

            match DesktopEntry::load(&path) {
                Ok(entry) => return Some((entry, path)),
                Err(err) => {
                    tracing::warn!(%id, path = %path.display(), error = %format!("{err:#}"), "skipping unloadable desktop file");
                }
            }
        }
    }
    None
}

/// `$XDG_DATA_HOME/applications` followed by each `$XDG_DATA_DIRS/applications`.
pub fn desktop_file_dirs(base: &BaseDirs) -> Vec<PathBuf> {
    std::iter::once(&base.data_home)
        .chain(base.data_dirs.iter())
        .map(|dir| dir.join("applications"))
        .collect()
}

/// The desktop ID of `path` found under `root`: the relative path with separators
/// replaced by `-`.
pub fn desktop_id_for(root: &Path, path: &Path) -> Result<DesktopId> {
    let rel = path
        .strip_prefix(root)
        .with_context(|| format!("{} is not under {}", path.display(), root.display()))?;

    let mut parts = Vec::new();
    for component in rel.components() {
        let part = component
            .as_os_str()
            .to_str()
            .ok_or_else(|| anyhow!("non-utf8 path {}", path.display()))?;
        parts.push(part);
    }
    Ok(DesktopId(parts.join("-")))
}

fn is_desktop_file(path: &Path) -> bool {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("desktop") => true,
        Some("directory") => false,
        _ => match path_looks_like_desktop_entry(path) {
            Ok(found) => found,
            Err(err) => {
                tracing::debug!(path = %path.display(), error = %format!("{err:#}"), "cannot sniff file");
                false
            }
        },
    }
}

fn read_dir_sorted(dir: &Path) -> Result<Vec<fs::DirEntry>> {
    let mut entries: Vec<fs::DirEntry> = fs::read_dir(dir)
        .with_context(|| format!("read dir {}", dir.display()))?
        .collect::<std::result::Result<_, _>>()
        .with_context(|| format!("collect dir entries for {}", dir.display()))?;

    entries.sort_by_key(|entry| entry.file_name());
    Ok(entries)
}

#[cfg(test)]
#[path = "../tests/desktop/index_tests.rs"]
mod tests;
