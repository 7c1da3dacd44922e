use super::DeclarationProvider;
use crate::error::{FacesgenError, Result};
use crate::model::{AttributeMap, TypeDeclaration, TypeId};
use std::collections::HashMap;

#[derive(Debug, Clone)]
struct Entry {
    declaration: TypeDeclaration,
    attributes: Option<AttributeMap>,
}

/// In-memory declarations for testing.
#[derive(Debug, Default, Clone)]
pub struct InMemoryProvider {
    types: HashMap<TypeId, Entry>,
}

impl InMemoryProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers (or replaces) a type.
    pub fn insert(
        &mut self,
        type_id: TypeId,
        declaration: TypeDeclaration,
        attributes: Option<AttributeMap>,
    ) {
        self.types.insert(
            type_id,
            Entry {
                declaration,
                attributes,
            },
        );
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    fn entry(&self, type_id: &TypeId) -> Result<&Entry> {
        self.types
            .get(type_id)
            .ok_or_else(|| FacesgenError::UnresolvableType(type_id.clone()))
    }
}

impl DeclarationProvider for InMemoryProvider {
    fn own_declaration(&self, type_id: &TypeId) -> Result<TypeDeclaration> {
        Ok(self.entry(type_id)?.declaration.clone())
    }

    fn local_attributes(&self, type_id: &TypeId) -> Result<Option<AttributeMap>> {
        Ok(self.entry(type_id)?.attributes.clone())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::{AttributeDecl, ComponentAnnotation};

    /// Builder for small type hierarchies.
    ///
    /// ```ignore
    /// let provider = ProviderFixture::new()
    ///     .with_base("a.Base", &[("id", AttributeDecl::default())])
    ///     .with_component("a.Input", Some("a.Base"), "", &[])
    ///     .provider;
    /// ```
    pub struct ProviderFixture {
        pub provider: InMemoryProvider,
    }

    impl Default for ProviderFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl ProviderFixture {
        pub fn new() -> Self {
            Self {
                provider: InMemoryProvider::new(),
            }
        }

        /// A non-component type with local attributes (none if the slice is empty).
        pub fn with_base(mut self, name: &str, attrs: &[(&str, AttributeDecl)]) -> Self {
            self.insert(name, None, None, attrs);
            self
        }

        /// A non-component type extending `parent`.
        pub fn with_base_extending(
            mut self,
            name: &str,
            parent: &str,
            attrs: &[(&str, AttributeDecl)],
        ) -> Self {
            self.insert(name, Some(parent), None, attrs);
            self
        }

        /// A component whose classification is its own type name.
        pub fn with_component(
            mut self,
            name: &str,
            parent: Option<&str>,
            tag_name: &str,
            attrs: &[(&str, AttributeDecl)],
        ) -> Self {
            let annotation = ComponentAnnotation::new(name, tag_name);
            self.insert(name, parent, Some(annotation), attrs);
            self
        }

        fn insert(
            &mut self,
            name: &str,
            parent: Option<&str>,
            component: Option<ComponentAnnotation>,
            attrs: &[(&str, AttributeDecl)],
        ) {
            let type_id = TypeId::from(name);
            let declaration = TypeDeclaration {
                simple_name: type_id.simple_name().to_string(),
                parent: parent.map(TypeId::from),
                component,
                description: None,
            };
            let attributes = if attrs.is_empty() {
                None
            } else {
                Some(
                    attrs
                        .iter()
                        .map(|(n, d)| (n.to_string(), d.clone()))
                        .collect(),
                )
            };
            self.provider.insert(type_id, declaration, attributes);
        }
    }
}
