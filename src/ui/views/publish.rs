//! Publish command UI views

use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;
use asset_publisher::domain::ports::PublishStep;

pub fn render_resolved(version: &str, supports_color: bool) -> String {
    format!(
        "Resolved latest to {}",
        ColoredText::info(version).bold().render(supports_color)
    )
}

pub fn render_publish_start(url: &str) -> String {
    format!("Uploading to {}", url)
}

fn step_label(step: PublishStep) -> &'static str {
    match step {
        PublishStep::Install => "Installing dependencies",
        PublishStep::Build => "Building production assets",
        PublishStep::Upload => "Copying build output",
    }
}

pub fn render_step(step: PublishStep, supports_color: bool, supports_unicode: bool) -> String {
    format!(
        "{} {}",
        Icon::Progress.colored(supports_color, supports_unicode),
        step_label(step)
    )
}

pub fn render_step_skipped(
    step: PublishStep,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    format!(
        "{} {}",
        Icon::Skipped.colored(supports_color, supports_unicode),
        ColoredText::dim(format!("{} (skipped, dry run)", step_label(step))).render(supports_color)
    )
}

/// Conflict report with remediation steps. Goes to stderr.
pub fn render_conflict(index_url: &str, console_url: &str, supports_color: bool) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "{} bucket already exists at: {}\n",
        ColoredText::error("Error:").bold().render(supports_color),
        index_url
    ));
    out.push_str("Remove the bucket by running this script with --clean,\n");
    out.push_str("or manually delete the bucket at:\n");
    out.push_str(&format!("\t{}\n", console_url));
    out.push_str("Then try uploading assets again.\n");
    out
}

pub fn render_published(index_url: &str, supports_color: bool, supports_unicode: bool) -> String {
    format!(
        "{} {} {}",
        Icon::Success.colored(supports_color, supports_unicode),
        ColoredText::success("Published").bold().render(supports_color),
        index_url
    )
}

pub fn render_dry_run_summary(version: &str, planned: &[PublishStep], supports_color: bool) -> String {
    let steps: Vec<&str> = planned.iter().map(|s| s.as_str()).collect();
    ColoredText::warning(format!(
        "Dry run: {} is not published yet; would run {}",
        version,
        steps.join(", ")
    ))
    .render(supports_color)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn conflict_block_has_remediation_steps() {
        let rendered = render_conflict(
            "https://storage.googleapis.com/tilt-static-assets/v9.9.9/index.html",
            "https://console.cloud.google.com/storage/browser/tilt-static-assets?forceOnBucketsSortingFiltering=false&project=windmill-prod&prefix=v9.9.9",
            false,
        );

        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(
            lines,
            vec![
                "Error: bucket already exists at: https://storage.googleapis.com/tilt-static-assets/v9.9.9/index.html",
                "Remove the bucket by running this script with --clean,",
                "or manually delete the bucket at:",
                "\thttps://console.cloud.google.com/storage/browser/tilt-static-assets?forceOnBucketsSortingFiltering=false&project=windmill-prod&prefix=v9.9.9",
                "Then try uploading assets again.",
            ]
        );
    }

    #[test]
    fn publish_progress_lines() {
        let lines = [
            render_publish_start("https://storage.googleapis.com/tilt-static-assets/v1.0.0/"),
            render_step(PublishStep::Install, false, false),
            render_step(PublishStep::Build, false, false),
            render_step(PublishStep::Upload, false, false),
            render_published(
                "https://storage.googleapis.com/tilt-static-assets/v1.0.0/index.html",
                false,
                false,
            ),
        ]
        .join("\n");

        insta::assert_snapshot!(lines, @r"
        Uploading to https://storage.googleapis.com/tilt-static-assets/v1.0.0/
        [..] Installing dependencies
        [..] Building production assets
        [..] Copying build output
        [OK] Published https://storage.googleapis.com/tilt-static-assets/v1.0.0/index.html
        ");
    }

    #[test]
    fn dry_run_lines() {
        let skipped = render_step_skipped(PublishStep::Build, false, true);
        assert_eq!(skipped, "○ Building production assets (skipped, dry run)");

        let summary = render_dry_run_summary(
            "v1.0.0",
            &[PublishStep::Install, PublishStep::Build, PublishStep::Upload],
            false,
        );
        assert_eq!(
            summary,
            "Dry run: v1.0.0 is not published yet; would run install, build, upload"
        );
    }

    #[test]
    fn resolved_line() {
        assert_eq!(render_resolved("v0.30.2", false), "Resolved latest to v0.30.2");
    }
}
