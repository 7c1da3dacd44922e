//! # Rendering Module
//!
//! Styled terminal output through `taglet` templates, with automatic terminal
//! color detection.
//!
//! Column widths are measured here, in Rust, because they need display-width
//! aware processing. Templates only pick what to print and which style to use.

use super::styles::FACESGEN_THEME;
use super::templates::{COMPONENT_TEMPLATE, LIST_TEMPLATE, TEXT_LIST_TEMPLATE};
use console::measure_text_width;
use facesgen::model::Component;
use serde::Serialize;
use taglet::{render, render_with_color};

const LABEL_WIDTH: usize = 5;

#[derive(Serialize)]
struct ListData<'a> {
    rows: &'a [Component],
    empty: bool,
    show_attributes: bool,
    name_width: usize,
    type_width: usize,
    attr_width: usize,
}

#[derive(Serialize)]
struct ComponentData<'a> {
    component: &'a Component,
    label_width: usize,
    attr_width: usize,
}

#[derive(Serialize)]
struct TextListData<'a> {
    lines: &'a [String],
    empty_message: &'a str,
}

/// Renders the catalog as one line per component.
pub fn render_component_list(components: &[Component], show_attributes: bool) -> String {
    render_component_list_internal(components, show_attributes, None)
}

fn render_component_list_internal(
    components: &[Component],
    show_attributes: bool,
    use_color: Option<bool>,
) -> String {
    let data = ListData {
        rows: components,
        empty: components.is_empty(),
        show_attributes,
        name_width: max_width(components.iter().map(|c| c.name())),
        type_width: max_width(components.iter().map(|c| c.component_type())),
        attr_width: max_width(
            components
                .iter()
                .flat_map(|c| c.attributes())
                .map(|a| a.name()),
        ),
    };
    render_template(LIST_TEMPLATE, &data, use_color)
}

/// Renders one component with all of its attributes.
pub fn render_component(component: &Component) -> String {
    render_component_internal(component, None)
}

fn render_component_internal(component: &Component, use_color: Option<bool>) -> String {
    let data = ComponentData {
        component,
        label_width: LABEL_WIDTH,
        attr_width: max_width(component.attributes().iter().map(|a| a.name())),
    };
    render_template(COMPONENT_TEMPLATE, &data, use_color)
}

pub fn render_text_list(lines: &[String], empty_message: &str) -> String {
    render_text_list_internal(lines, empty_message, None)
}

fn render_text_list_internal(
    lines: &[String],
    empty_message: &str,
    use_color: Option<bool>,
) -> String {
    let data = TextListData {
        lines,
        empty_message,
    };
    render_template(TEXT_LIST_TEMPLATE, &data, use_color)
}

fn render_template<T: Serialize>(template: &str, data: &T, use_color: Option<bool>) -> String {
    match use_color {
        Some(c) => render_with_color(template, data, &FACESGEN_THEME, c),
        None => render(template, data, &FACESGEN_THEME),
    }
    .unwrap_or_else(|e| format!("Render error: {}\n", e))
}

fn max_width<'a>(texts: impl Iterator<Item = &'a str>) -> usize {
    texts.map(measure_text_width).max().unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use facesgen::model::{Attribute, AttributeDecl, TypeId};

    fn component(name: &str, class_name: &str, attributes: Vec<Attribute>) -> Component {
        Component::new(
            name,
            class_name,
            None,
            TypeId::from(class_name),
            attributes,
        )
    }

    fn attribute(name: &str, required: bool) -> Attribute {
        Attribute::from_decl(name, AttributeDecl::new(required, "java.lang.String", ""))
    }

    fn sample() -> Vec<Component> {
        vec![
            component("box", "ui.Panel", vec![]),
            component(
                "inputText",
                "ui.InputText",
                vec![attribute("value", true), attribute("id", false)],
            ),
        ]
    }

    #[test]
    fn test_render_empty_list() {
        let output = render_component_list_internal(&[], false, Some(false));
        assert_eq!(output, "No components found.\n");
    }

    #[test]
    fn test_render_list_one_line_per_component() {
        let output = render_component_list_internal(&sample(), false, Some(false));
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("box        ui.Panel"));
        assert!(lines[1].starts_with("inputText  ui.InputText"));
        assert!(lines[1].ends_with("ui.InputText"));
    }

    #[test]
    fn test_render_list_with_attributes() {
        let output = render_component_list_internal(&sample(), true, Some(false));
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[2], "    id     java.lang.String");
        assert_eq!(lines[3], "    value  java.lang.String required");
    }

    #[test]
    fn test_render_with_color_includes_ansi() {
        console::set_colors_enabled(true);
        let output = render_component_list_internal(&sample(), false, Some(true));
        assert!(output.contains("\x1b["));
    }

    #[test]
    fn test_render_component_without_attributes() {
        let comp = component("box", "ui.Panel", vec![]);
        let output = render_component_internal(&comp, Some(false));
        assert_eq!(
            output,
            "box\ntype   ui.Panel\nclass  ui.Panel\nNo attributes.\n"
        );
    }

    #[test]
    fn test_render_component_with_description_and_attributes() {
        let comp = Component::new(
            "inputText",
            "ui.InputText",
            Some("Single line input".to_string()),
            TypeId::from("ui.InputText"),
            vec![
                Attribute::from_decl(
                    "value",
                    AttributeDecl::new(true, "java.lang.String", "Bound value"),
                ),
                attribute("id", false),
            ],
        );
        let output = render_component_internal(&comp, Some(false));
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines[3], "about  Single line input");
        assert_eq!(lines[4], "");
        assert_eq!(lines[5], "id     java.lang.String");
        assert_eq!(lines[6], "value  java.lang.String required");
        assert_eq!(lines[7], "       Bound value");
        assert_eq!(lines.len(), 8);
    }

    #[test]
    fn test_render_text_list_empty() {
        let output = render_text_list_internal(&[], "No types found.", Some(false));
        assert_eq!(output, "No types found.\n");
    }

    #[test]
    fn test_render_text_list_lines() {
        let lines = vec!["ui.Button".to_string(), "ui.Panel".to_string()];
        let output = render_text_list_internal(&lines, "No types found.", Some(false));
        assert_eq!(output, "ui.Button\nui.Panel\n");
    }
}
