//! Name normalization shared by discovery and component building.

use crate::error::{FacesgenError, Result};
use crate::model::TypeId;
use std::path::{Component, Path, PathBuf};

/// Lower-cases the first character. Strings shorter than two characters are
/// lower-cased entirely.
pub fn lower_case_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(first) if chars.as_str().is_empty() => first.to_lowercase().collect(),
        Some(first) => first.to_lowercase().chain(chars).collect(),
    }
}

/// `None` for an empty string.
pub fn non_empty(s: &str) -> Option<&str> {
    if s.is_empty() {
        None
    } else {
        Some(s)
    }
}

/// Public component name: the explicit tag name when given, otherwise the
/// simple name with a lower-cased first character.
pub fn component_name(tag_name: &str, simple_name: &str) -> String {
    non_empty(tag_name)
        .map(str::to_string)
        .unwrap_or_else(|| lower_case_first(simple_name))
}

/// Maps a descriptor file below `base` to its type name:
/// `<base>/some/Random.json` becomes `some.Random`.
pub fn class_name(base: &Path, path: &Path, ext: &str) -> Result<TypeId> {
    let relative = path.strip_prefix(base).map_err(|_| {
        FacesgenError::InvalidPath(format!(
            "{} is not below {}",
            path.display(),
            base.display()
        ))
    })?;

    let mut segments = Vec::new();
    for component in relative.components() {
        match component {
            Component::Normal(part) => segments.push(part.to_string_lossy().into_owned()),
            _ => {
                return Err(FacesgenError::InvalidPath(format!(
                    "unexpected component in {}",
                    path.display()
                )))
            }
        }
    }

    let file = segments
        .pop()
        .ok_or_else(|| FacesgenError::InvalidPath(format!("{} has no file name", path.display())))?;
    let stem = file.strip_suffix(ext).filter(|s| !s.is_empty()).ok_or_else(|| {
        FacesgenError::InvalidPath(format!("{} should end with '{}'", path.display(), ext))
    })?;
    segments.push(stem.to_string());

    Ok(TypeId::new(segments.join(".")))
}

/// Checks that every dotted segment of a type name is a plain file name, so the
/// descriptor path cannot leave its root.
pub fn check_type_name(type_id: &TypeId) -> std::result::Result<(), String> {
    for segment in type_id.as_str().split('.') {
        if segment.is_empty() {
            return Err(format!("'{}' has an empty segment", type_id));
        }
        if segment.contains(['/', '\\', ':', '\0']) {
            return Err(format!("'{}' contains a path separator", type_id));
        }
    }
    Ok(())
}

/// Relative descriptor path for a type name (inverse of [`class_name`]).
pub fn descriptor_path(type_id: &TypeId, ext: &str) -> Result<PathBuf> {
    check_type_name(type_id).map_err(FacesgenError::InvalidPath)?;
    let mut path: PathBuf = type_id.as_str().split('.').collect();
    let file = format!("{}{}", type_id.simple_name(), ext);
    path.set_file_name(file);
    Ok(path)
}
