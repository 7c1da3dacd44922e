//! Finds candidate types by scanning a build output directory for descriptors.

use crate::error::{FacesgenError, Result};
use crate::model::TypeId;
use crate::naming::class_name;
use std::fs;
use std::path::Path;

/// Maximum directory depth scanned below the classes directory.
pub const DEFAULT_SCAN_DEPTH: usize = 100;

/// Type names of every descriptor below `base`, sorted.
///
/// A missing `base` yields an empty list. Depth counts path components below
/// `base`: a descriptor directly in `base` is at depth 1, and descriptors deeper
/// than `max_depth` are not listed.
pub fn discover_types(base: &Path, ext: &str, max_depth: usize) -> Result<Vec<TypeId>> {
    if !base.is_dir() {
        tracing::warn!(dir = %base.display(), "classes directory not found");
        return Ok(Vec::new());
    }

    let mut types = Vec::new();
    walk(base, base, ext, 0, max_depth, &mut types)?;
    types.sort();
    tracing::debug!(count = types.len(), "discovered types");
    Ok(types)
}

fn walk(
    base: &Path,
    dir: &Path,
    ext: &str,
    depth: usize,
    max_depth: usize,
    found: &mut Vec<TypeId>,
) -> Result<()> {
    // entries of `dir` sit at depth + 1
    if depth >= max_depth {
        return Ok(());
    }
    let entries = fs::read_dir(dir).map_err(FacesgenError::Io)?;
    for entry in entries {
        let path = entry.map_err(FacesgenError::Io)?.path();
        if path.is_dir() {
            walk(base, &path, ext, depth + 1, max_depth, found)?;
        } else if is_descriptor(&path, ext) {
            found.push(class_name(base, &path, ext)?);
        }
    }
    Ok(())
}

fn is_descriptor(path: &Path, ext: &str) -> bool {
    path.file_name()
        .map(|name| {
            let name = name.to_string_lossy();
            name.len() > ext.len() && name.ends_with(ext)
        })
        .unwrap_or(false)
}
