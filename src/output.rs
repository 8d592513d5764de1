//! CLI output formatting.
//!
//! Every entity prints as a header line followed by indented `Label: value`
//! context lines, the same shape for a parsed directive and for resolved
//! defaults.
//!
//! # Output Format
//!
//! ## Directive
//!
//! ```text
//! fill 300x200
//!     Quality: 90
//!     Rotate: 90°
//!     Filter: lanczos
//!     Anchor: center
//!     Key: 300x200_fill_q90_r90_lanczos_center (JPEG)
//! ```
//!
//! ## Defaults
//!
//! ```text
//! Imaging defaults
//!     Quality: 75
//!     Filter: box
//!     Anchor: smart
//!     Source: content/config.toml
//! ```
//!
//! # Architecture
//!
//! Each entity has a `format_*` function (returns `Vec<String>`) for
//! testability and a `print_*` wrapper that writes to stdout. Format
//! functions are pure — no I/O, no side effects.

use crate::imaging::{Format, ImageConfig, Imaging};
use std::path::Path;

/// Return indentation string: 4 spaces per depth level.
fn indent(depth: usize) -> String {
    "    ".repeat(depth)
}

fn context_line(label: &str, value: impl std::fmt::Display) -> String {
    format!("{}{}: {}", indent(1), label, value)
}

/// A dimension side as written in a directive; 0 (derived) is left blank.
fn format_side(side: u32) -> String {
    if side == 0 {
        String::new()
    } else {
        side.to_string()
    }
}

// ============================================================================
// Directive
// ============================================================================

/// Format a parsed directive, with its cache key when a target format is known.
///
/// Quality falls back to `defaults` for display and is marked as such. The
/// anchor only shows for `fill`, the one action that crops.
pub fn format_image_config(
    config: &ImageConfig,
    defaults: &Imaging,
    target: Option<Format>,
) -> Vec<String> {
    let mut lines = Vec::new();

    let action = if config.action.is_empty() {
        "(no action)"
    } else {
        config.action.as_str()
    };
    lines.push(format!(
        "{} {}x{}",
        action,
        format_side(config.width),
        format_side(config.height)
    ));

    match config.quality {
        Some(q) => lines.push(context_line("Quality", q)),
        None => lines.push(context_line(
            "Quality",
            format!("{} (default)", config.effective_quality(defaults)),
        )),
    }
    if config.rotate != 0 {
        lines.push(context_line("Rotate", format!("{}°", config.rotate)));
    }
    lines.push(context_line("Filter", config.filter));
    if config.action.eq_ignore_ascii_case("fill") {
        lines.push(context_line("Anchor", config.anchor));
    }
    if let Some(format) = target {
        lines.push(context_line(
            "Key",
            format!("{} ({})", config.key(format), format),
        ));
    }

    lines
}

/// Print a parsed directive to stdout.
pub fn print_image_config(config: &ImageConfig, defaults: &Imaging, target: Option<Format>) {
    for line in format_image_config(config, defaults, target) {
        println!("{}", line);
    }
}

// ============================================================================
// Defaults
// ============================================================================

/// Format resolved imaging defaults and where they came from.
pub fn format_imaging(imaging: &Imaging, source: Option<&Path>) -> Vec<String> {
    let source = match source {
        Some(path) => path.display().to_string(),
        None => "stock defaults".to_string(),
    };
    vec![
        "Imaging defaults".to_string(),
        context_line("Quality", imaging.quality),
        context_line("Filter", imaging.resample_filter),
        context_line("Anchor", imaging.anchor),
        context_line("Source", source),
    ]
}

/// Print resolved imaging defaults to stdout.
pub fn print_imaging(imaging: &Imaging, source: Option<&Path>) {
    for line in format_imaging(imaging, source) {
        println!("{}", line);
    }
}
