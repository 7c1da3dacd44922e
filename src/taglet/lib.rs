//! # Taglet - Named Templates for Generated Files and Terminal Output
//!
//! A small layer over [minijinja](https://docs.rs/minijinja) used in two places:
//!
//! - **Generated descriptors**: XML files such as a facelet taglib, rendered from a
//!   serializable catalog. These want plain text with explicit XML escaping.
//! - **Terminal output**: listings shown by a CLI, where named styles decorate values
//!   and are dropped when the terminal cannot show colors.
//!
//! Both go through the same [`Renderer`], which owns a minijinja environment with a
//! fixed set of filters registered:
//!
//! | filter            | effect                                                      |
//! |-------------------|-------------------------------------------------------------|
//! | `style("name")`   | applies a named [`console::Style`] from the [`Theme`]       |
//! | `xml`             | escapes `& < > " '` for XML text and attribute values       |
//! | `pad(width)`      | right-pads to a display width (unicode aware)               |
//!
//! All three filters render `none` as an empty string and booleans as `true` or
//! `false`.
//!
//! Auto-escaping is disabled for every template, including ones named `*.xml`.
//! Templates decide what to escape with the `xml` filter, so that values such as
//! namespace URIs come out verbatim.
//!
//! ## Quick Example
//!
//! ```rust
//! use taglet::{Renderer, Theme};
//! use console::Style;
//! use serde::Serialize;
//!
//! #[derive(Serialize)]
//! struct Tag { name: String }
//!
//! let mut renderer = Renderer::with_color(Theme::new().add("name", Style::new().bold()), false);
//! renderer.add_template("tag", "<tag-name>{{ name | xml }}</tag-name>").unwrap();
//!
//! let out = renderer.render("tag", &Tag { name: "a<b".into() }).unwrap();
//! assert_eq!(out, "<tag-name>a&lt;b</tag-name>");
//! ```

use console::{Style, Term};
use minijinja::value::ValueKind;
use minijinja::{AutoEscape, Environment, Value};
use serde::Serialize;
use std::collections::HashMap;
use unicode_width::UnicodeWidthStr;

pub use minijinja::Error;

/// Default prefix shown when a style name is not found.
pub const DEFAULT_MISSING_STYLE_INDICATOR: &str = "(!?)";

/// A collection of named styles.
///
/// When a style name is not found, a configurable indicator is prepended to the
/// text so typos in templates are visible (defaults to `(!?)`).
///
/// ```rust
/// use taglet::Styles;
/// use console::Style;
///
/// let styles = Styles::new().add("warn", Style::new().yellow());
/// assert!(styles.apply("typo", "Hello").starts_with("(!?)"));
/// ```
#[derive(Clone)]
pub struct Styles {
    styles: HashMap<String, Style>,
    missing_indicator: String,
}

impl Default for Styles {
    fn default() -> Self {
        Self {
            styles: HashMap::new(),
            missing_indicator: DEFAULT_MISSING_STYLE_INDICATOR.to_string(),
        }
    }
}

impl Styles {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the indicator prepended when a style name is not found.
    /// An empty indicator makes unknown styles silent.
    pub fn missing_indicator(mut self, indicator: &str) -> Self {
        self.missing_indicator = indicator.to_string();
        self
    }

    /// Adds a named style, replacing any style of the same name.
    pub fn add(mut self, name: &str, style: Style) -> Self {
        self.styles.insert(name.to_string(), style);
        self
    }

    /// Applies a named style to text, with ANSI codes.
    pub fn apply(&self, name: &str, text: &str) -> String {
        match self.styles.get(name) {
            Some(style) => style.apply_to(text).to_string(),
            None => self.missing(text),
        }
    }

    /// Checks the style name but leaves the text unstyled.
    pub fn apply_plain(&self, name: &str, text: &str) -> String {
        if self.styles.contains_key(name) {
            text.to_string()
        } else {
            self.missing(text)
        }
    }

    fn missing(&self, text: &str) -> String {
        if self.missing_indicator.is_empty() {
            text.to_string()
        } else {
            format!("{} {}", self.missing_indicator, text)
        }
    }

    pub fn has(&self, name: &str) -> bool {
        self.styles.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.styles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.styles.is_empty()
    }
}

/// A named collection of styles used by the `style` filter.
#[derive(Clone, Default)]
pub struct Theme {
    styles: Styles,
}

impl Theme {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_styles(styles: Styles) -> Self {
        Self { styles }
    }

    /// Adds a named style, returning the theme for chaining.
    pub fn add(mut self, name: &str, style: Style) -> Self {
        self.styles = self.styles.add(name, style);
        self
    }

    pub fn styles(&self) -> &Styles {
        &self.styles
    }
}

/// Renders a one-off template, detecting color support on stdout.
pub fn render<T: Serialize>(template: &str, data: &T, theme: &Theme) -> Result<String, Error> {
    let use_color = Term::stdout().features().colors_supported();
    render_with_color(template, data, theme, use_color)
}

/// Renders a one-off template with explicit color control.
///
/// ```rust
/// use taglet::{render_with_color, Theme};
/// use console::Style;
/// use serde::Serialize;
///
/// #[derive(Serialize)]
/// struct Data { status: String }
///
/// let theme = Theme::new().add("ok", Style::new().green());
/// let plain = render_with_color(
///     r#"{{ status | style("ok") }}"#,
///     &Data { status: "done".into() },
///     &theme,
///     false,
/// ).unwrap();
/// assert_eq!(plain, "done");
/// ```
pub fn render_with_color<T: Serialize>(
    template: &str,
    data: &T,
    theme: &Theme,
    use_color: bool,
) -> Result<String, Error> {
    let mut renderer = Renderer::with_color(theme.clone(), use_color);
    renderer.add_template("_inline", template)?;
    renderer.render("_inline", data)
}

/// A set of named, pre-compiled templates sharing one filter configuration.
pub struct Renderer {
    env: Environment<'static>,
}

impl Renderer {
    /// Creates a renderer for terminal output, detecting color support on stdout.
    pub fn new(theme: Theme) -> Self {
        let use_color = Term::stdout().features().colors_supported();
        Self::with_color(theme, use_color)
    }

    /// Creates a renderer with explicit color control.
    pub fn with_color(theme: Theme, use_color: bool) -> Self {
        let mut env = Environment::new();
        env.set_auto_escape_callback(|_| AutoEscape::None);
        register_filters(&mut env, theme, use_color);
        Self { env }
    }

    /// Creates a renderer for generated files: no colors, and unknown style names
    /// pass text through untouched.
    pub fn plain() -> Self {
        Self::with_color(
            Theme::from_styles(Styles::new().missing_indicator("")),
            false,
        )
    }

    /// Registers a named template. Syntax errors are reported here.
    pub fn add_template(&mut self, name: &str, source: &str) -> Result<(), Error> {
        self.env
            .add_template_owned(name.to_string(), source.to_string())
    }

    pub fn has_template(&self, name: &str) -> bool {
        self.env.get_template(name).is_ok()
    }

    /// Renders a registered template with the given data.
    pub fn render<T: Serialize>(&self, name: &str, data: &T) -> Result<String, Error> {
        let tmpl = self.env.get_template(name)?;
        tmpl.render(data)
    }
}

fn register_filters(env: &mut Environment<'static>, theme: Theme, use_color: bool) {
    let styles = theme.styles;
    env.add_filter("style", move |value: Value, name: String| -> String {
        let text = value_text(&value);
        if use_color {
            styles.apply(&name, &text)
        } else {
            styles.apply_plain(&name, &text)
        }
    });
    env.add_filter("xml", |value: Value| -> String { escape_xml(&value_text(&value)) });
    env.add_filter("pad", |value: Value, width: usize| -> String {
        pad_to_width(&value_text(&value), width)
    });
}

// `none` renders as an empty string rather than the literal "none"
fn value_text(value: &Value) -> String {
    match value.kind() {
        ValueKind::None | ValueKind::Undefined => String::new(),
        // XML booleans are lower case
        ValueKind::Bool => value.is_true().to_string(),
        _ => value.to_string(),
    }
}

/// Escapes the five XML special characters.
pub fn escape_xml(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}

/// Right-pads `text` with spaces up to `width` display columns.
pub fn pad_to_width(text: &str, width: usize) -> String {
    let current = text.width();
    if current >= width {
        return text.to_string();
    }
    format!("{}{}", text, " ".repeat(width - current))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Serialize)]
    struct SimpleData {
        message: String,
    }

    #[derive(Serialize)]
    struct OptionalData {
        description: Option<String>,
    }

    #[test]
    fn test_styles_apply_unknown_shows_indicator() {
        let styles = Styles::new();
        assert_eq!(styles.apply("nope", "hello"), "(!?) hello");
        assert_eq!(styles.apply_plain("nope", "hello"), "(!?) hello");
    }

    #[test]
    fn test_styles_apply_unknown_with_empty_indicator() {
        let styles = Styles::new().missing_indicator("");
        assert_eq!(styles.apply("nope", "hello"), "hello");
    }

    #[test]
    fn test_styles_apply_known_style() {
        let styles = Styles::new().add("bold", Style::new().bold().force_styling(true));
        let result = styles.apply("bold", "hello");
        assert!(result.contains("hello"));
        assert!(result.contains("\x1b[1m"));
        assert_eq!(styles.len(), 1);
        assert!(styles.has("bold"));
    }

    #[test]
    fn test_render_with_color_false_no_ansi() {
        let theme = Theme::new().add("red", Style::new().red());
        let data = SimpleData {
            message: "test".into(),
        };

        let output =
            render_with_color(r#"{{ message | style("red") }}"#, &data, &theme, false).unwrap();

        assert_eq!(output, "test");
    }

    #[test]
    fn test_render_with_color_true_has_ansi() {
        let theme = Theme::new().add("green", Style::new().green().force_styling(true));
        let data = SimpleData {
            message: "success".into(),
        };

        let output =
            render_with_color(r#"{{ message | style("green") }}"#, &data, &theme, true).unwrap();

        assert!(output.contains("success"));
        assert!(output.contains("\x1b["));
    }

    #[test]
    fn test_xml_filter_escapes_specials() {
        let data = SimpleData {
            message: r#"a < b & "c" 'd' >"#.into(),
        };
        let output = render_with_color("{{ message | xml }}", &data, &Theme::new(), false).unwrap();
        assert_eq!(output, "a &lt; b &amp; &quot;c&quot; &apos;d&apos; &gt;");
    }

    #[test]
    fn test_xml_named_templates_are_not_auto_escaped() {
        let mut renderer = Renderer::plain();
        renderer
            .add_template("ns.xml", "<namespace>{{ message }}</namespace>")
            .unwrap();
        let data = SimpleData {
            message: "http://example.org/ui".into(),
        };
        let output = renderer.render("ns.xml", &data).unwrap();
        assert_eq!(output, "<namespace>http://example.org/ui</namespace>");
    }

    #[test]
    fn test_none_renders_empty_through_filters() {
        let data = OptionalData { description: None };
        let output =
            render_with_color("[{{ description | xml }}]", &data, &Theme::new(), false).unwrap();
        assert_eq!(output, "[]");
    }

    #[test]
    fn test_booleans_render_lower_case_through_filters() {
        let data = serde_json::json!({ "on": true, "off": false });
        let output = render_with_color(
            "{{ on | xml }}/{{ off | xml }}/{{ off | pad(6) }}|",
            &data,
            &Theme::new(),
            false,
        )
        .unwrap();
        assert_eq!(output, "true/false/false |");
    }

    #[test]
    fn test_pad_filter_uses_display_width() {
        assert_eq!(pad_to_width("ab", 4), "ab  ");
        assert_eq!(pad_to_width("abcdef", 4), "abcdef");
        // wide characters take two columns
        assert_eq!(pad_to_width("日本", 6), "日本  ");
    }

    #[test]
    fn test_plain_renderer_ignores_unknown_styles() {
        let mut renderer = Renderer::plain();
        renderer
            .add_template("t", r#"{{ message | style("whatever") }}"#)
            .unwrap();
        let data = SimpleData {
            message: "hi".into(),
        };
        assert_eq!(renderer.render("t", &data).unwrap(), "hi");
    }

    #[test]
    fn test_renderer_reports_missing_template() {
        let renderer = Renderer::plain();
        assert!(!renderer.has_template("missing"));
        let data = SimpleData {
            message: "x".into(),
        };
        assert!(renderer.render("missing", &data).is_err());
    }

    #[test]
    fn test_add_template_rejects_bad_syntax() {
        let mut renderer = Renderer::plain();
        assert!(renderer.add_template("bad", "{% for x in %}").is_err());
    }
}
