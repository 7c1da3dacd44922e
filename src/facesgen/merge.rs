//! # Attribute Merging
//!
//! A component's effective attributes are the union of what it and all of its
//! ancestors declare. When several levels declare the same name, the level
//! closest to the component wins.
//!
//! The walk goes leaf first, so precedence reduces to "first insertion wins":
//!
//! ```text
//! InputText  { value: required }        <- visited first, kept
//!    │
//! UIInput    { value: optional, id }    <- `value` ignored, `id` added
//!    │
//! UIComponent{ rendered }               <- `rendered` added
//! ```
//!
//! Parent pointers come from the provider and are not trusted to be acyclic; the
//! walk gives up after `max_depth` levels.

use crate::error::{FacesgenError, Result};
use crate::model::{AttributeMap, TypeId};
use crate::provider::DeclarationProvider;

/// Default bound on the number of types visited for one component.
pub const DEFAULT_MAX_HIERARCHY_DEPTH: usize = 64;

pub struct AttributeMerger<'a, P: ?Sized> {
    provider: &'a P,
    max_depth: usize,
}

impl<'a, P: DeclarationProvider + ?Sized> AttributeMerger<'a, P> {
    pub fn new(provider: &'a P) -> Self {
        Self {
            provider,
            max_depth: DEFAULT_MAX_HIERARCHY_DEPTH,
        }
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// Effective attributes of `start`, inherited ones included.
    pub fn merge(&self, start: &TypeId) -> Result<AttributeMap> {
        let mut merged = AttributeMap::new();
        let mut current = Some(start.clone());
        let mut visited = 0;

        while let Some(type_id) = current {
            if visited == self.max_depth {
                return Err(FacesgenError::HierarchyTooDeep {
                    type_name: start.clone(),
                    max_depth: self.max_depth,
                });
            }
            visited += 1;

            if let Some(local) = self.provider.local_attributes(&type_id)? {
                for (name, decl) in local {
                    merged.entry(name).or_insert(decl);
                }
            }
            current = self.provider.own_declaration(&type_id)?.parent;
        }

        Ok(merged)
    }
}
