//! Clean command UI views

use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;

pub fn render_clean_start(url: &str) -> String {
    format!("Deleting bucket at {} (if exists)", url)
}

pub fn render_clean_completed(
    prefix: &str,
    removed: bool,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let icon = Icon::Success.colored(supports_color, supports_unicode);
    if removed {
        format!("{} Deleted {}", icon, prefix)
    } else {
        format!(
            "{} {}",
            icon,
            ColoredText::dim(format!("Nothing to delete at {}", prefix)).render(supports_color)
        )
    }
}

pub fn render_clean_dry_run(prefix: &str, supports_color: bool) -> String {
    ColoredText::warning(format!("Dry run: would delete {}", prefix)).render(supports_color)
}
