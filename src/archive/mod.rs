// src/archive/mod.rs

//! Archive expansion with legacy-codepage filename handling.

pub mod cp437;

use std::fs;
use std::io::{self, Cursor};
use std::path::{Component, Path, PathBuf};

use zip::ZipArchive;

use crate::error::Result;

/// Expands fetched archive bytes into a destination directory.
///
/// Member names arrive as raw bytes and go through [`cp437::decode`] before
/// they become paths. Failure to read the central directory surfaces as
/// `CorruptArchive` before anything is written.
pub struct ArchiveExpander;

impl ArchiveExpander {
    /// Expand every member of the archive under `dest`, recreating the
    /// internal directory structure. Members that resolve outside `dest`
    /// are skipped.
    pub fn expand(bytes: &[u8], dest: &Path) -> Result<()> {
        let mut archive = ZipArchive::new(Cursor::new(bytes))?;
        for index in 0..archive.len() {
            let mut member = archive.by_index(index)?;
            let raw_name = member.name_raw().to_vec();
            let decoded = cp437::decode(&raw_name);

            let Some(relative) = sanitize(&decoded) else {
                log::warn!("Skipping archive member with unusable path {decoded:?}");
                continue;
            };
            let target = dest.join(relative);

            // A trailing separator marks a directory member.
            if decoded.ends_with('/') {
                fs::create_dir_all(&target)?;
                continue;
            }

            if let Some(parent) = target.parent() {
                fs::create_dir_all(parent)?;
            }
            let mut out = fs::File::create(&target)?;
            io::copy(&mut member, &mut out)?;
        }
        Ok(())
    }
}

/// Keep only normal components of a decoded member name, dropping parent
/// references, roots and drive prefixes.
fn sanitize(name: &str) -> Option<PathBuf> {
    let mut clean = PathBuf::new();
    for component in Path::new(name).components() {
        if let Component::Normal(part) = component {
            clean.push(part);
        }
    }
    (!clean.as_os_str().is_empty()).then_some(clean)
}
