use super::DeclarationProvider;
use crate::error::{FacesgenError, Result};
use crate::model::{AttributeDecl, AttributeMap, ComponentAnnotation, TypeDeclaration, TypeId};
use crate::naming::{check_type_name, descriptor_path};
use serde::Deserialize;
use std::cell::RefCell;
use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::{Path, PathBuf};
use std::rc::Rc;

pub const DEFAULT_DESCRIPTOR_EXT: &str = ".json";

/// On-disk shape of a type descriptor.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct TypeDescriptor {
    simple_name: Option<String>,
    parent: Option<TypeId>,
    component: Option<ComponentAnnotation>,
    description: Option<String>,
    // keys mapped to null are properties without an attribute declaration
    property_keys: Option<BTreeMap<String, Option<AttributeDecl>>>,
}

/// Reads JSON type descriptors from a list of roots, first match wins.
///
/// The first root is normally the build output directory, the rest stand in for
/// the compile class path (descriptors of inherited base types).
/// Each descriptor is parsed at most once per provider.
pub struct FileProvider {
    roots: Vec<PathBuf>,
    descriptor_ext: String,
    cache: RefCell<HashMap<TypeId, Rc<TypeDescriptor>>>,
}

impl FileProvider {
    pub fn new(roots: Vec<PathBuf>) -> Self {
        Self {
            roots,
            descriptor_ext: DEFAULT_DESCRIPTOR_EXT.to_string(),
            cache: RefCell::new(HashMap::new()),
        }
    }

    pub fn with_descriptor_ext(mut self, ext: &str) -> Self {
        if ext.starts_with('.') {
            self.descriptor_ext = ext.to_string();
        } else {
            self.descriptor_ext = format!(".{}", ext);
        }
        self
    }

    pub fn descriptor_ext(&self) -> &str {
        &self.descriptor_ext
    }

    pub fn roots(&self) -> &[PathBuf] {
        &self.roots
    }

    /// Path of the descriptor for `type_id`, if any root has one.
    pub fn locate(&self, type_id: &TypeId) -> Result<Option<PathBuf>> {
        let relative = descriptor_path(type_id, &self.descriptor_ext)?;
        Ok(self
            .roots
            .iter()
            .map(|root| root.join(&relative))
            .find(|path| path.is_file()))
    }

    fn descriptor(&self, type_id: &TypeId) -> Result<Rc<TypeDescriptor>> {
        if let Some(found) = self.cache.borrow().get(type_id) {
            return Ok(Rc::clone(found));
        }

        let path = self
            .locate(type_id)?
            .ok_or_else(|| FacesgenError::UnresolvableType(type_id.clone()))?;
        let descriptor = Rc::new(read_descriptor(&path)?);
        tracing::debug!(type_name = %type_id, path = %path.display(), "parsed descriptor");

        self.cache
            .borrow_mut()
            .insert(type_id.clone(), Rc::clone(&descriptor));
        Ok(descriptor)
    }
}

fn read_descriptor(path: &Path) -> Result<TypeDescriptor> {
    let content = fs::read_to_string(path).map_err(FacesgenError::Io)?;
    serde_json::from_str(&content).map_err(|source| FacesgenError::Descriptor {
        path: path.to_path_buf(),
        source,
    })
}

impl DeclarationProvider for FileProvider {
    fn own_declaration(&self, type_id: &TypeId) -> Result<TypeDeclaration> {
        let descriptor = self.descriptor(type_id)?;
        if let Some(parent) = &descriptor.parent {
            check_type_name(parent).map_err(|reason| FacesgenError::MalformedDeclaration {
                type_name: type_id.clone(),
                reason: format!("invalid parent: {}", reason),
            })?;
        }
        Ok(TypeDeclaration {
            simple_name: descriptor
                .simple_name
                .clone()
                .unwrap_or_else(|| type_id.simple_name().to_string()),
            parent: descriptor.parent.clone(),
            component: descriptor.component.clone(),
            description: descriptor.description.clone(),
        })
    }

    fn local_attributes(&self, type_id: &TypeId) -> Result<Option<AttributeMap>> {
        let descriptor = self.descriptor(type_id)?;
        Ok(descriptor.property_keys.as_ref().map(|keys| {
            keys.iter()
                .filter_map(|(name, decl)| decl.clone().map(|d| (name.clone(), d)))
                .collect()
        }))
    }
}
