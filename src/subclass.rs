//! shared-mime-info subclass lookup (`mime/subclasses`).
//!
//! Each line of a subclasses file is `specific broad`, for example
//! `image/svg+xml application/xml`. Every type is implicitly a subclass of
//! `application/octet-stream` unless it is an `inode/*` type, and every `text/*` type
//! is a subclass of `text/plain`.

use std::collections::{HashMap, HashSet};
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::PathBuf;

use anyhow::{Context, Result};
use thiserror::Error;

use crate::basedir::BaseDirs;

const TEXT_PLAIN: &str = "text/plain";
const OCTET_STREAM: &str = "application/octet-stream";

#[derive(Debug, Error)]
pub enum SubclassError {
    #[error("malformed subclass line at {line}")]
    Malformed { file: usize, line: usize },
    #[error("failed reading subclasses")]
    Read {
        file: usize,
        #[source]
        source: io::Error,
    },
}

impl SubclassError {
    /// Index of the reader the error came from.
    pub fn file_index(&self) -> usize {
        match self {
            SubclassError::Malformed { file, .. } | SubclassError::Read { file, .. } => *file,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Subclasses {
    parents: HashMap<String, Vec<String>>,
}

impl Subclasses {
    /// Earlier readers take precedence: their parents are listed first.
    pub fn from_readers<I, R>(readers: I) -> Result<Self, SubclassError>
    where
        I: IntoIterator<Item = R>,
        R: BufRead,
    {
        let mut parents: HashMap<String, Vec<String>> = HashMap::new();

        for (file, reader) in readers.into_iter().enumerate() {
            for (line_no, line) in reader.lines().enumerate() {
                let line = line.map_err(|source| SubclassError::Read { file, source })?;
                let Some((specific, broad)) = line.split_once(' ') else {
                    return Err(SubclassError::Malformed {
                        file,
                        line: line_no,
                    });
                };

                let list = parents.entry(specific.to_string()).or_default();
                if !list.iter().any(|known| known == broad) {
                    list.push(broad.to_string());
                }
            }
        }

        Ok(Self { parents })
    }

    /// Reads `mime/subclasses` from `$XDG_DATA_HOME` and each of `$XDG_DATA_DIRS`.
    /// Missing files are skipped.
    pub fn from_base_dirs(base: &BaseDirs) -> Result<Self> {
        let mut paths: Vec<PathBuf> = Vec::new();
        let mut readers = Vec::new();

        for dir in std::iter::once(&base.data_home).chain(base.data_dirs.iter()) {
            let path = dir.join("mime/subclasses");
            match File::open(&path) {
                Ok(file) => {
                    readers.push(BufReader::new(file));
                    paths.push(path);
                }
                Err(err) if err.kind() == io::ErrorKind::NotFound => continue,
                Err(err) => {
                    return Err(err)
                        .with_context(|| format!("open subclasses file {}", path.display()));
                }
            }
        }
        tracing::trace!(files = paths.len(), "loading subclasses");

        Self::from_readers(readers).map_err(|err| {
            let path = paths
                .get(err.file_index())
                .map(|path| path.display().to_string())
                .unwrap_or_default();
            anyhow::Error::new(err).context(format!("load subclasses file {path}"))
        })
    }

    /// The direct parents of `mime`, or the implicit parent when none are known.
    pub fn broader_once(&self, mime: &str) -> Vec<String> {
        if let Some(parents) = self.parents.get(mime).filter(|p| !p.is_empty()) {
            return parents.clone();
        }

        let implicit = if mime == OCTET_STREAM {
            None
        } else if mime == TEXT_PLAIN {
            Some(OCTET_STREAM)
        } else if mime.starts_with("text/") {
            Some(TEXT_PLAIN)
        } else if !mime.starts_with("inode/") {
            Some(OCTET_STREAM)
        } else {
            None
        };
        implicit.map(str::to_string).into_iter().collect()
    }

    /// Every ancestor of `mime`, depth first in pre-order, followed by the implicit
    /// `text/plain` and `application/octet-stream` parents when they apply and were
    /// not reached.
    pub fn broader_dfs(&self, mime: &str) -> Vec<String> {
        let mut visited: HashSet<&str> = HashSet::from([mime]);
        let mut out: Vec<String> = Vec::new();
        let mut stack: Vec<&str> = self.parents_of(mime).rev().collect();

        while let Some(broad) = stack.pop() {
            if !visited.insert(broad) {
                continue;
            }
            out.push(broad.to_string());
            stack.extend(self.parents_of(broad).rev());
        }

        let mut seen = std::iter::once(mime).chain(out.iter().map(String::as_str));
        let has_text = seen.clone().any(|m| m.starts_with("text/"));
        let has_non_inode = seen.any(|m| !m.starts_with("inode/"));

        if has_text && !visited.contains(TEXT_PLAIN) {
            out.push(TEXT_PLAIN.to_string());
        }
        if has_non_inode && !visited.contains(OCTET_STREAM) {
            out.push(OCTET_STREAM.to_string());
        }
        out
    }

    fn parents_of(&self, mime: &str) -> impl DoubleEndedIterator<Item = &str> {
        self.parents
            .get(mime)
            .into_iter()
            .flatten()
            .map(String::as_str)
    }
}

#[cfg(test)]
#[path = "tests/subclass_tests.rs"]
mod tests;
