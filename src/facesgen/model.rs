use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::fmt;
use std::hash::{Hash, Hasher};

const DEFAULT_ATTRIBUTE_TYPE: &str = "java.lang.Object";

/// Fully-qualified, dot separated type name (`org.example.InputText`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TypeId(String);

impl TypeId {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Last dotted segment of the name.
    pub fn simple_name(&self) -> &str {
        self.0.rsplit('.').next().unwrap_or(&self.0)
    }
}

impl fmt::Display for TypeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for TypeId {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for TypeId {
    fn from(name: String) -> Self {
        Self(name)
    }
}

/// An attribute as declared on a single type, before merging.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttributeDecl {
    #[serde(default)]
    pub required: bool,
    #[serde(rename = "type", default = "default_attribute_type")]
    pub value_type: String,
    #[serde(default)]
    pub description: String,
}

fn default_attribute_type() -> String {
    DEFAULT_ATTRIBUTE_TYPE.to_string()
}

impl AttributeDecl {
    pub fn new(required: bool, value_type: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            required,
            value_type: value_type.into(),
            description: description.into(),
        }
    }
}

impl Default for AttributeDecl {
    fn default() -> Self {
        Self::new(false, DEFAULT_ATTRIBUTE_TYPE, "")
    }
}

/// Attribute name to declaration.
pub type AttributeMap = BTreeMap<String, AttributeDecl>;

/// Marks a type as a component and carries its classification.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentAnnotation {
    /// Component type, e.g. `org.example.InputText`. Must not be blank.
    #[serde(default)]
    pub value: String,
    /// Explicit tag name; empty means "derive from the simple name".
    #[serde(default)]
    pub tag_name: String,
}

impl ComponentAnnotation {
    pub fn new(value: impl Into<String>, tag_name: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            tag_name: tag_name.into(),
        }
    }
}

/// What a type declares about itself, not counting anything inherited.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeDeclaration {
    pub simple_name: String,
    pub parent: Option<TypeId>,
    pub component: Option<ComponentAnnotation>,
    pub description: Option<String>,
}

impl TypeDeclaration {
    pub fn is_component(&self) -> bool {
        self.component.is_some()
    }
}

/// A component attribute after merging. Identity is the name alone.
#[derive(Debug, Clone, Serialize)]
pub struct Attribute {
    name: String,
    required: bool,
    #[serde(rename = "type")]
    value_type: String,
    description: String,
}

impl Attribute {
    pub fn from_decl(name: impl Into<String>, decl: AttributeDecl) -> Self {
        Self {
            name: name.into(),
            required: decl.required,
            value_type: decl.value_type,
            description: decl.description,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn required(&self) -> bool {
        self.required
    }

    pub fn value_type(&self) -> &str {
        &self.value_type
    }

    pub fn description(&self) -> &str {
        &self.description
    }
}

impl PartialEq for Attribute {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for Attribute {}

impl Hash for Attribute {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
    }
}

impl PartialOrd for Attribute {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Attribute {
    fn cmp(&self, other: &Self) -> Ordering {
        self.name.cmp(&other.name)
    }
}

/// One UI component of the catalog. Identity is the name alone.
#[derive(Debug, Clone, Serialize)]
pub struct Component {
    name: String,
    #[serde(rename = "type")]
    component_type: String,
    description: Option<String>,
    class_name: TypeId,
    attributes: Vec<Attribute>,
}

impl Component {
    /// Attributes are sorted by name; later duplicates of a name are dropped.
    pub fn new(
        name: impl Into<String>,
        component_type: impl Into<String>,
        description: Option<String>,
        class_name: TypeId,
        mut attributes: Vec<Attribute>,
    ) -> Self {
        attributes.sort();
        attributes.dedup();
        Self {
            name: name.into(),
            component_type: component_type.into(),
            description,
            class_name,
            attributes,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn component_type(&self) -> &str {
        &self.component_type
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn class_name(&self) -> &TypeId {
        &self.class_name
    }

    pub fn attributes(&self) -> &[Attribute] {
        &self.attributes
    }

    pub fn attribute(&self, name: &str) -> Option<&Attribute> {
        self.attributes
            .binary_search_by(|a| a.name.as_str().cmp(name))
            .ok()
            .map(|i| &self.attributes[i])
    }
}

impl PartialEq for Component {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for Component {}

impl Hash for Component {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
    }
}

impl PartialOrd for Component {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Component {
    fn cmp(&self, other: &Self) -> Ordering {
        self.name.cmp(&other.name)
    }
}
