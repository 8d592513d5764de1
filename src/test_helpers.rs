//! Shared test utilities for the image-directive test suite.
//!
//! # Usage
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let config = parse_ok("fill", "300x200 center");
//! assert_eq!(config.key(Format::Jpeg), "300x200_fill_box_center");
//!
//! let err = parse_err("resize", "");
//! assert_eq!(err, DirectiveError::Empty);
//! ```

use std::path::Path;
use tempfile::TempDir;

use crate::imaging::{
    Anchor, CropAnchor, DirectiveError, ImageConfig, Imaging, ResampleFilter, parse_directive,
};

// =========================================================================
// Defaults
// =========================================================================

/// Non-stock defaults, so tests can tell a fallback from a parsed token.
pub fn lanczos_center_defaults() -> Imaging {
    Imaging {
        resample_filter: ResampleFilter::Lanczos,
        anchor: CropAnchor::Position(Anchor::Center),
        ..Imaging::default()
    }
}

// =========================================================================
// Parsing
// =========================================================================

/// Parse against stock defaults, panicking with the error on failure.
pub fn parse_ok(action: &str, directive: &str) -> ImageConfig {
    parse_ok_with(action, directive, &Imaging::default())
}

pub fn parse_ok_with(action: &str, directive: &str, defaults: &Imaging) -> ImageConfig {
    parse_directive(action, directive, defaults)
        .unwrap_or_else(|e| panic!("{directive:?} should parse, got: {e}"))
}

/// Parse against stock defaults, panicking if it succeeds.
pub fn parse_err(action: &str, directive: &str) -> DirectiveError {
    match parse_directive(action, directive, &Imaging::default()) {
        Ok(config) => panic!("{directive:?} should fail, got: {config:?}"),
        Err(e) => e,
    }
}

// =========================================================================
// Config fixtures
// =========================================================================

/// A temp content root holding `config.toml` with `contents`.
pub fn content_root_with_config(contents: &str) -> TempDir {
    let tmp = TempDir::new().unwrap();
    write_config(tmp.path(), contents);
    tmp
}

pub fn write_config(root: &Path, contents: &str) {
    std::fs::write(root.join("config.toml"), contents).unwrap();
}
