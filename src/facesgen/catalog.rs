//! # Catalog
//!
//! The catalog is the set of components produced by one generation run. It has
//! two states, expressed as two types:
//!
//! ```text
//!   CatalogBuilder  ──finalize()──▶  Catalog
//!   (add only)        sorts once       (read only)
//! ```
//!
//! `finalize` consumes the builder, so reading unsorted data or finalizing twice
//! does not compile. A new run builds a new catalog; nothing is cached between
//! runs.
//!
//! Component names are unique. Adding a component whose name is already taken
//! replaces the earlier one (last write wins) and records a [`Duplicate`] so the
//! collision can be reported instead of silently vanishing.

use crate::component::ComponentBuilder;
use crate::error::Result;
use crate::model::{Component, TypeId};
use crate::provider::DeclarationProvider;
use serde::Serialize;
use std::collections::HashMap;

/// A name collision resolved during building.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Duplicate {
    pub name: String,
    pub replaced: TypeId,
    pub winner: TypeId,
}

#[derive(Debug, Default)]
pub struct CatalogBuilder {
    components: Vec<Component>,
    positions: HashMap<String, usize>,
    duplicates: Vec<Duplicate>,
}

impl CatalogBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a component, returning the one it replaced if the name was taken.
    pub fn add(&mut self, component: Component) -> Option<Component> {
        match self.positions.get(component.name()) {
            Some(&index) => {
                let duplicate = Duplicate {
                    name: component.name().to_string(),
                    replaced: self.components[index].class_name().clone(),
                    winner: component.class_name().clone(),
                };
                tracing::warn!(
                    component = %duplicate.name,
                    replaced = %duplicate.replaced,
                    winner = %duplicate.winner,
                    "duplicate component name, keeping the later type"
                );
                self.duplicates.push(duplicate);
                Some(std::mem::replace(&mut self.components[index], component))
            }
            None => {
                self.positions
                    .insert(component.name().to_string(), self.components.len());
                self.components.push(component);
                None
            }
        }
    }

    pub fn len(&self) -> usize {
        self.components.len()
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    /// Sorts the components by name and freezes the catalog.
    pub fn finalize(mut self) -> Catalog {
        self.components.sort();
        Catalog {
            components: self.components,
            duplicates: self.duplicates,
        }
    }
}

/// Finalized, name-sorted components of one run.
#[derive(Debug, Clone, Serialize)]
pub struct Catalog {
    components: Vec<Component>,
    #[serde(skip)]
    duplicates: Vec<Duplicate>,
}

impl Catalog {
    pub fn components(&self) -> &[Component] {
        &self.components
    }

    pub fn get(&self, name: &str) -> Option<&Component> {
        self.components
            .binary_search_by(|c| c.name().cmp(name))
            .ok()
            .map(|i| &self.components[i])
    }

    /// Name collisions seen while building, in insertion order.
    pub fn duplicates(&self) -> &[Duplicate] {
        &self.duplicates
    }

    pub fn len(&self) -> usize {
        self.components.len()
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }
}

/// Builds the catalog for a set of discovered types.
///
/// Types that are not declared as components (base classes, helpers) are skipped.
/// Any type that cannot be resolved or is malformed aborts the run.
pub fn build_catalog<P: DeclarationProvider + ?Sized>(
    provider: &P,
    types: &[TypeId],
    max_depth: usize,
) -> Result<Catalog> {
    let builder = ComponentBuilder::new(provider).with_max_depth(max_depth);
    let mut catalog = CatalogBuilder::new();

    for type_id in types {
        if !provider.own_declaration(type_id)?.is_component() {
            tracing::debug!(type_name = %type_id, "skipping non-component type");
            continue;
        }
        catalog.add(builder.build(type_id)?);
    }

    let catalog = catalog.finalize();
    tracing::info!(components = catalog.len(), "catalog built");
    Ok(catalog)
}
