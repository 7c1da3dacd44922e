//! Builtin descriptor templates.
//!
//! Templates are minijinja sources rendered by `taglet` with the context
//! `{ components, namespace }`, where `components` is the finalized catalog.
//! Values are escaped explicitly with the `xml` filter.

pub const TAGLIB_XML: &str = include_str!("templates/taglib.xml.j2");
pub const FACES_CONFIG_XML: &str = include_str!("templates/faces-config.xml.j2");

/// Builtin templates by name.
pub const BUILTIN: &[(&str, &str)] = &[
    ("taglib.xml", TAGLIB_XML),
    ("faces-config.xml", FACES_CONFIG_XML),
];

pub fn builtin(name: &str) -> Option<&'static str> {
    BUILTIN
        .iter()
        .find(|(builtin_name, _)| *builtin_name == name)
        .map(|(_, source)| *source)
}
