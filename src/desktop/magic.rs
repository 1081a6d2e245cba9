use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

use anyhow::{Context, Result};

const UTF8_BOM_TAIL: [u8; 2] = [0xBB, 0xBF];
const HEADER_TAIL: &[u8; 14] = b"Desktop Entry]";

/// Whether the content is likely a desktop entry: an optional UTF-8 BOM, any number of
/// empty lines and comments, then a `[Desktop Entry]` header.
///
/// Comments may contain arbitrary bytes. Anything else before the header disqualifies
/// the content, so binary files are rejected after the first byte.
pub fn looks_like_desktop_entry<R: Read>(reader: R) -> bool {
    let mut reader = BufReader::new(reader);
    let mut byte = [0u8; 1];
    let mut at_start = true;

    loop {
        if reader.read_exact(&mut byte).is_err() {
            return false;
        }

        match byte[0] {
            0xEF if at_start => {
                let mut tail = [0u8; 2];
                if reader.read_exact(&mut tail).is_err() || tail != UTF8_BOM_TAIL {
                    return false;
                }
            }
            b'\n' => {}
            b'#' => {
                if reader.skip_until(b'\n').is_err() {
                    return false;
                }
            }
            b'[' => {
                let mut tail = [0u8; 14];
                return reader.read_exact(&mut tail).is_ok() && &tail == HEADER_TAIL;
            }
            _ => return false,
        }

        at_start = false;
    }
}

pub fn path_looks_like_desktop_entry(path: &Path) -> Result<bool> {
    let file = File::open(path)
        .with_context(|| format!("open {} to check for a desktop entry", path.display()))?;
    Ok(looks_like_desktop_entry(file))
}

#[cfg(test)]
#[path = "../tests/desktop/magic_tests.rs"]
mod tests;
