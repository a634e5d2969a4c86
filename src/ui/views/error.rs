//! Error and warning rendering

use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;
use asset_publisher::config::ConfigWarning;

/// `Error: <message>`, with the error chain joined by `: `
pub fn render_error(err: &anyhow::Error, supports_color: bool) -> String {
    format!(
        "{} {:#}",
        ColoredText::error("Error:").bold().render(supports_color),
        err
    )
}

pub fn render_config_warning(
    warning: &ConfigWarning,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    format!(
        "{} {}",
        Icon::Warning.colored(supports_color, supports_unicode),
        ColoredText::warning(warning.to_string()).render(supports_color)
    )
}
