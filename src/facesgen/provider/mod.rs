//! # Declaration Providers
//!
//! The catalog core never inspects compiled artifacts itself. Everything it knows
//! about a type comes through the [`DeclarationProvider`] trait, which answers two
//! questions:
//!
//! - what does the type declare about *itself* ([`TypeDeclaration`]): its simple name,
//!   its parent, whether it is a component and with which classification;
//! - which attributes does it declare *locally* (no inheritance applied).
//!
//! Inheritance is resolved by the caller (see [`crate::merge`]), so providers stay
//! dumb lookups.
//!
//! ## Implementations
//!
//! - [`fs::FileProvider`]: JSON type descriptors laid out like a class path
//!   (`org/example/InputText.json`), searched across several roots.
//! - [`memory::InMemoryProvider`]: a map of declarations for tests.

use crate::error::Result;
use crate::model::{AttributeMap, TypeDeclaration, TypeId};

pub mod fs;
pub mod memory;

pub trait DeclarationProvider {
    /// The type's own declaration.
    ///
    /// Fails with [`crate::error::FacesgenError::UnresolvableType`] when the type
    /// cannot be found at all.
    fn own_declaration(&self, type_id: &TypeId) -> Result<TypeDeclaration>;

    /// Attributes declared directly on the type.
    ///
    /// `None` means the type has no attribute container; that is not an error.
    fn local_attributes(&self, type_id: &TypeId) -> Result<Option<AttributeMap>>;
}

impl<P: DeclarationProvider + ?Sized> DeclarationProvider for &P {
    fn own_declaration(&self, type_id: &TypeId) -> Result<TypeDeclaration> {
        (**self).own_declaration(type_id)
    }

    fn local_attributes(&self, type_id: &TypeId) -> Result<Option<AttributeMap>> {
        (**self).local_attributes(type_id)
    }
}
