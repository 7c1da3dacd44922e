use crate::error::{FacesgenError, Result};
use crate::merge::AttributeMerger;
use crate::model::{Attribute, Component, TypeId};
use crate::naming::component_name;
use crate::provider::DeclarationProvider;

/// Materializes one [`Component`] from a discovered type.
pub struct ComponentBuilder<'a, P: ?Sized> {
    provider: &'a P,
    merger: AttributeMerger<'a, P>,
}

impl<'a, P: DeclarationProvider + ?Sized> ComponentBuilder<'a, P> {
    pub fn new(provider: &'a P) -> Self {
        Self {
            provider,
            merger: AttributeMerger::new(provider),
        }
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.merger = self.merger.with_max_depth(max_depth);
        self
    }

    pub fn build(&self, type_id: &TypeId) -> Result<Component> {
        let own = self.provider.own_declaration(type_id)?;
        let annotation = own
            .component
            .ok_or_else(|| FacesgenError::MalformedDeclaration {
                type_name: type_id.clone(),
                reason: "not declared as a component".to_string(),
            })?;

        if annotation.value.trim().is_empty() {
            return Err(FacesgenError::MalformedDeclaration {
                type_name: type_id.clone(),
                reason: "component type is missing".to_string(),
            });
        }

        let name = component_name(&annotation.tag_name, &own.simple_name);
        let attributes = self
            .merger
            .merge(type_id)?
            .into_iter()
            .map(|(attr_name, decl)| Attribute::from_decl(attr_name, decl))
            .collect();

        tracing::debug!(component = %name, type_name = %type_id, "built component");
        Ok(Component::new(
            name,
            annotation.value,
            own.description,
            type_id.clone(),
            attributes,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{AttributeDecl, ComponentAnnotation, TypeDeclaration};
    use crate::provider::memory::fixtures::ProviderFixture;
    use crate::provider::memory::InMemoryProvider;

    #[test]
    fn name_falls_back_to_simple_name() {
        let provider = ProviderFixture::new()
            .with_component("org.example.InputText", None, "", &[])
            .provider;

        let comp = ComponentBuilder::new(&provider)
            .build(&TypeId::from("org.example.InputText"))
            .unwrap();
        assert_eq!(comp.name(), "inputText");
        assert_eq!(comp.component_type(), "org.example.InputText");
        assert_eq!(comp.class_name().as_str(), "org.example.InputText");
    }

    #[test]
    fn explicit_tag_name_wins() {
        let provider = ProviderFixture::new()
            .with_component("org.example.InputText", None, "customInput", &[])
            .provider;

        let comp = ComponentBuilder::new(&provider)
            .build(&TypeId::from("org.example.InputText"))
            .unwrap();
        assert_eq!(comp.name(), "customInput");
    }

    #[test]
    fn attributes_are_sorted_by_name() {
        let provider = ProviderFixture::new()
            .with_base("a.Base", &[("zeta", AttributeDecl::default())])
            .with_component(
                "a.Widget",
                Some("a.Base"),
                "",
                &[("alpha", AttributeDecl::default())],
            )
            .provider;

        let comp = ComponentBuilder::new(&provider)
            .build(&TypeId::from("a.Widget"))
            .unwrap();
        let names: Vec<_> = comp.attributes().iter().map(|a| a.name()).collect();
        assert_eq!(names, vec!["alpha", "zeta"]);
    }

    #[test]
    fn type_and_description_are_not_inherited() {
        let mut provider = InMemoryProvider::new();
        provider.insert(
            TypeId::from("a.Base"),
            TypeDeclaration {
                simple_name: "Base".into(),
                parent: None,
                component: Some(ComponentAnnotation::new("a.BaseType", "")),
                description: Some("base description".into()),
            },
            None,
        );
        provider.insert(
            TypeId::from("a.Child"),
            TypeDeclaration {
                simple_name: "Child".into(),
                parent: Some(TypeId::from("a.Base")),
                component: Some(ComponentAnnotation::new("a.ChildType", "")),
                description: None,
            },
            None,
        );

        let comp = ComponentBuilder::new(&provider)
            .build(&TypeId::from("a.Child"))
            .unwrap();
        assert_eq!(comp.component_type(), "a.ChildType");
        assert_eq!(comp.description(), None);
    }

    #[test]
    fn description_comes_from_own_declaration() {
        let mut provider = InMemoryProvider::new();
        provider.insert(
            TypeId::from("a.Panel"),
            TypeDeclaration {
                simple_name: "Panel".into(),
                parent: None,
                component: Some(ComponentAnnotation::new("a.Panel", "")),
                description: Some("Groups children".into()),
            },
            None,
        );

        let comp = ComponentBuilder::new(&provider)
            .build(&TypeId::from("a.Panel"))
            .unwrap();
        assert_eq!(comp.description(), Some("Groups children"));
        assert!(comp.attributes().is_empty());
    }

    #[test]
    fn blank_component_type_is_malformed() {
        let mut provider = InMemoryProvider::new();
        provider.insert(
            TypeId::from("a.Bad"),
            TypeDeclaration {
                simple_name: "Bad".into(),
                parent: None,
                component: Some(ComponentAnnotation::new("  ", "bad")),
                description: None,
            },
            None,
        );

        let err = ComponentBuilder::new(&provider)
            .build(&TypeId::from("a.Bad"))
            .unwrap_err();
        assert!(matches!(err, FacesgenError::MalformedDeclaration { .. }));
    }

    #[test]
    fn non_component_cannot_be_built() {
        let provider = ProviderFixture::new().with_base("a.Base", &[]).provider;
        let err = ComponentBuilder::new(&provider)
            .build(&TypeId::from("a.Base"))
            .unwrap_err();
        assert!(matches!(err, FacesgenError::MalformedDeclaration { .. }));
    }
}
