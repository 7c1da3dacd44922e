use console::Style;
use once_cell::sync::Lazy;
use taglet::Theme;

/// Style names used by the CLI templates.
pub mod names {
    pub const NAME: &str = "name";
    pub const TYPE: &str = "type";
    pub const CLASS: &str = "class";
    pub const ATTRIBUTE: &str = "attribute";
    pub const REQUIRED: &str = "required";
    pub const MUTED: &str = "muted";
}

pub static FACESGEN_THEME: Lazy<Theme> = Lazy::new(|| {
    Theme::new()
        .add(names::NAME, Style::new().bold())
        .add(names::TYPE, Style::new().cyan())
        .add(names::CLASS, Style::new().dim())
        .add(names::ATTRIBUTE, Style::new().yellow())
        .add(names::REQUIRED, Style::new().red().bold())
        .add(names::MUTED, Style::new().dim().italic())
});
