//! Directive parsing.
//!
//! A directive is the short, space-separated instruction an author writes
//! next to an image operation:
//!
//! ```text
//! 300x200 Center Lanczos q90 r90
//! ```
//!
//! Tokens are lower-cased and classified one at a time, in this order:
//!
//! | Token | Meaning |
//! |---|---|
//! | `smart` | smart-crop anchor |
//! | `center`, `topleft`, ... | fixed anchor |
//! | `box`, `lanczos`, ... | resample filter |
//! | `q<n>` | JPEG quality, 1–100 |
//! | `r<n>` | rotation in degrees, counter-clockwise |
//! | `<w>x<h>`, `<w>x`, `x<h>` | target dimensions |
//!
//! Token order doesn't matter; a later token of the same kind replaces an
//! earlier one. Tokens matching nothing are ignored.

use super::defaults::Imaging;
use super::params::Quality;
use super::registry::{Anchor, CropAnchor, ResampleFilter, SMART_CROP};
use serde::Serialize;
use std::num::ParseIntError;
use std::str::FromStr;
use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum DirectiveError {
    #[error("image config cannot be empty")]
    Empty,
    #[error("invalid integer {value:?} in image config: {source}")]
    InvalidInteger {
        value: String,
        #[source]
        source: ParseIntError,
    },
    #[error("quality ranges from 1 to 100 inclusive")]
    QualityRange,
    #[error("invalid image dimensions")]
    InvalidDimensions,
    #[error("must provide Width or Height")]
    MissingDimensions,
}

/// A fully resolved image operation, ready for the transformation engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImageConfig {
    /// Operation name (`resize`, `fill`, `fit`, ...). Not validated here.
    pub action: String,
    /// Overrides the derived cache key when set.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    /// JPEG quality. `None` means use the site default.
    pub quality: Option<Quality>,
    /// Degrees counter-clockwise. Rotation happens before resizing.
    pub rotate: i32,
    /// Target width; 0 means derive from the aspect ratio.
    pub width: u32,
    /// Target height; 0 means derive from the aspect ratio.
    pub height: u32,
    pub filter: ResampleFilter,
    pub anchor: CropAnchor,
}

impl ImageConfig {
    /// Use `key` in place of the derived cache key.
    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = Some(key.into());
        self
    }

    /// The quality to encode with: the directive's own, else the default.
    pub fn effective_quality(&self, defaults: &Imaging) -> Quality {
        self.quality.unwrap_or(defaults.quality)
    }
}

/// Parse `directive` for `action`, falling back to `defaults` for the filter
/// and anchor when the directive doesn't name them.
pub fn parse_directive(
    action: &str,
    directive: &str,
    defaults: &Imaging,
) -> Result<ImageConfig, DirectiveError> {
    if directive.trim().is_empty() {
        return Err(DirectiveError::Empty);
    }

    let mut quality = None;
    let mut rotate = 0;
    let mut width = 0;
    let mut height = 0;
    let mut filter = None;
    let mut anchor = None;

    for token in directive.split_whitespace() {
        let token = token.to_lowercase();

        if token == SMART_CROP {
            anchor = Some(CropAnchor::Smart);
        } else if let Some(position) = Anchor::from_name(&token) {
            anchor = Some(CropAnchor::Position(position));
        } else if let Some(f) = ResampleFilter::from_name(&token) {
            filter = Some(f);
        } else if let Some(rest) = token.strip_prefix('q') {
            let q: i64 = parse_int(rest)?;
            quality = Some(Quality::new(q).ok_or(DirectiveError::QualityRange)?);
        } else if let Some(rest) = token.strip_prefix('r') {
            rotate = parse_int(rest)?;
        } else if token.contains('x') {
            let mut sides = token.split('x');
            let (first, second) = (sides.next(), sides.next());
            if sides.next().is_some() {
                return Err(DirectiveError::InvalidDimensions);
            }
            if let Some(w) = first.filter(|s| !s.is_empty()) {
                width = parse_int(w)?;
            }
            if let Some(h) = second.filter(|s| !s.is_empty()) {
                height = parse_int(h)?;
            }
        } else {
            log::debug!("ignoring unrecognized image config token {token:?}");
        }
    }

    if width == 0 && height == 0 {
        return Err(DirectiveError::MissingDimensions);
    }

    let filter = filter.unwrap_or_else(|| {
        log::debug!("no filter in {directive:?}, using default {}", defaults.resample_filter);
        defaults.resample_filter
    });
    let anchor = anchor.unwrap_or(defaults.anchor);

    Ok(ImageConfig {
        action: action.to_string(),
        key: None,
        quality,
        rotate,
        width,
        height,
        filter,
        anchor,
    })
}

fn parse_int<T>(value: &str) -> Result<T, DirectiveError>
where
    T: FromStr<Err = ParseIntError>,
{
    value
        .parse()
        .map_err(|source| DirectiveError::InvalidInteger {
            value: value.to_string(),
            source,
        })
}
