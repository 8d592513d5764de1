//! Site-wide imaging defaults.
//!
//! The `[imaging]` settings arrive as a loosely-typed table (from
//! `config.toml`, or any other source the caller converts into a
//! [`toml::Table`]). [`resolve_defaults`] decodes it into an explicit
//! [`Imaging`] record, coercing only where authors commonly write the "wrong"
//! type (`quality = "80"`), and validates every value against the registries.
//!
//! ```toml
//! [imaging]
//! quality = 75            # 1-100, JPEG only
//! resampleFilter = "box"  # any registry filter name, case-insensitive
//! anchor = "smart"        # "smart" or a compass position, case-insensitive
//! ```
//!
//! Key names are matched case-insensitively, so `ResampleFilter` and
//! `resamplefilter` both work. Unknown keys are ignored.

use super::params::Quality;
use super::registry::{Anchor, CropAnchor, ResampleFilter, SMART_CROP};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DefaultsError {
    #[error("invalid imaging config: {0}")]
    Decode(#[from] toml::de::Error),
    #[error("invalid imaging config: {field} {value:?} is not an integer")]
    NotAnInteger { field: &'static str, value: String },
    #[error("JPEG quality must be a number between 1 and 100")]
    Quality,
    #[error("invalid anchor value in imaging config")]
    Anchor,
    #[error("{0:?} is not a valid resample filter")]
    Filter(String),
}

/// Default image processing settings, shared read-only by every directive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Imaging {
    /// Default JPEG quality.
    pub quality: Quality,
    /// Filter used by resize operations that don't name one.
    pub resample_filter: ResampleFilter,
    /// Anchor used by fill operations that don't name one.
    pub anchor: CropAnchor,
}

/// Shape of the settings table before validation. Keys are lower-cased
/// before decoding.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawImaging {
    quality: Option<LooseInt>,
    #[serde(rename = "resamplefilter")]
    resample_filter: Option<String>,
    anchor: Option<String>,
}

/// An integer as config authors actually write it.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum LooseInt {
    Int(i64),
    Float(f64),
    Bool(bool),
    Text(String),
}

impl LooseInt {
    fn to_i64(&self, field: &'static str) -> Result<i64, DefaultsError> {
        match self {
            LooseInt::Int(n) => Ok(*n),
            LooseInt::Float(f) => Ok(f.trunc() as i64),
            LooseInt::Bool(b) => Ok(i64::from(*b)),
            LooseInt::Text(s) if s.trim().is_empty() => Ok(0),
            LooseInt::Text(s) => {
                s.trim()
                    .parse()
                    .map_err(|_| DefaultsError::NotAnInteger {
                        field,
                        value: s.clone(),
                    })
            }
        }
    }
}

/// Decode and validate imaging defaults from a settings table.
///
/// - `quality`: 0 or absent → 75, otherwise 1–100.
/// - `anchor`: empty or `smart` (any case) → smart crop, otherwise a known position.
/// - `resampleFilter`: empty → `box`, otherwise a known filter.
pub fn resolve_defaults(settings: &toml::Table) -> Result<Imaging, DefaultsError> {
    let normalized: toml::Table = settings
        .iter()
        .map(|(k, v)| (k.to_lowercase(), v.clone()))
        .collect();
    let raw: RawImaging = toml::Value::Table(normalized).try_into()?;

    let quality = match raw.quality {
        Some(q) => q.to_i64("quality")?,
        None => 0,
    };
    let quality = if quality == 0 {
        Quality::DEFAULT
    } else {
        Quality::new(quality).ok_or(DefaultsError::Quality)?
    };

    let anchor = raw.anchor.unwrap_or_default();
    let anchor = if anchor.is_empty() || anchor.eq_ignore_ascii_case(SMART_CROP) {
        CropAnchor::Smart
    } else {
        Anchor::from_name(&anchor.to_lowercase())
            .map(CropAnchor::Position)
            .ok_or(DefaultsError::Anchor)?
    };

    let filter = raw.resample_filter.unwrap_or_default();
    let resample_filter = if filter.is_empty() {
        ResampleFilter::default()
    } else {
        let filter = filter.to_lowercase();
        ResampleFilter::from_name(&filter).ok_or(DefaultsError::Filter(filter))?
    };

    let imaging = Imaging {
        quality,
        resample_filter,
        anchor,
    };
    log::debug!(
        "imaging defaults: quality={} filter={} anchor={}",
        imaging.quality,
        imaging.resample_filter,
        imaging.anchor
    );
    Ok(imaging)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolve(src: &str) -> Result<Imaging, DefaultsError> {
        let table: toml::Table = toml::from_str(src).unwrap();
        resolve_defaults(&table)
    }

    #[test]
    fn empty_table_gives_stock_defaults() {
        let imaging = resolve("").unwrap();
        assert_eq!(imaging, Imaging::default());
        assert_eq!(imaging.quality.value(), 75);
        assert_eq!(imaging.resample_filter, ResampleFilter::Box);
        assert_eq!(imaging.anchor, CropAnchor::Smart);
    }

    #[test]
    fn every_valid_quality_is_kept() {
        for q in 1..=100 {
            let imaging = resolve(&format!("quality = {q}")).unwrap();
            assert_eq!(i64::from(imaging.quality.value()), q);
        }
    }

    #[test]
    fn zero_quality_means_default() {
        assert_eq!(resolve("quality = 0").unwrap().quality.value(), 75);
    }

    #[test]
    fn out_of_range_quality_fails() {
        for src in ["quality = -1", "quality = 101", "quality = 1000"] {
            let err = resolve(src).unwrap_err();
            assert!(matches!(err, DefaultsError::Quality), "{src}");
            assert_eq!(
                err.to_string(),
                "JPEG quality must be a number between 1 and 100"
            );
        }
    }

    #[test]
    fn quality_coerces_strings_floats_and_bools() {
        assert_eq!(resolve(r#"quality = "80""#).unwrap().quality.value(), 80);
        assert_eq!(resolve(r#"quality = " 42 ""#).unwrap().quality.value(), 42);
        assert_eq!(resolve(r#"quality = """#).unwrap().quality.value(), 75);
        assert_eq!(resolve("quality = 90.7").unwrap().quality.value(), 90);
        assert_eq!(resolve("quality = true").unwrap().quality.value(), 1);
    }

    #[test]
    fn non_numeric_quality_string_fails_decode() {
        let err = resolve(r#"quality = "high""#).unwrap_err();
        assert!(matches!(
            err,
            DefaultsError::NotAnInteger { field: "quality", ref value } if value == "high"
        ));
    }

    #[test]
    fn incompatible_shape_fails_decode() {
        assert!(matches!(
            resolve("quality = [1, 2]").unwrap_err(),
            DefaultsError::Decode(_)
        ));
        assert!(matches!(
            resolve("anchor = 5").unwrap_err(),
            DefaultsError::Decode(_)
        ));
    }

    #[test]
    fn keys_are_case_insensitive() {
        let imaging =
            resolve("Quality = 60\nResampleFilter = \"Lanczos\"\nANCHOR = \"TopLeft\"").unwrap();
        assert_eq!(imaging.quality.value(), 60);
        assert_eq!(imaging.resample_filter, ResampleFilter::Lanczos);
        assert_eq!(imaging.anchor, CropAnchor::Position(Anchor::TopLeft));
    }

    #[test]
    fn unknown_keys_are_ignored() {
        let imaging = resolve(r#"exif = { disableDate = true }"#).unwrap();
        assert_eq!(imaging, Imaging::default());
    }

    #[test]
    fn smart_anchor_any_case() {
        assert_eq!(resolve(r#"anchor = "SMART""#).unwrap().anchor, CropAnchor::Smart);
        assert_eq!(resolve(r#"anchor = """#).unwrap().anchor, CropAnchor::Smart);
    }

    #[test]
    fn unknown_anchor_fails() {
        let err = resolve(r#"anchor = "middle""#).unwrap_err();
        assert_eq!(err.to_string(), "invalid anchor value in imaging config");
    }

    #[test]
    fn unknown_filter_names_the_filter() {
        let err = resolve(r#"resampleFilter = "Sharpest""#).unwrap_err();
        assert!(matches!(err, DefaultsError::Filter(ref f) if f == "sharpest"));
        assert_eq!(err.to_string(), r#""sharpest" is not a valid resample filter"#);
    }

    #[test]
    fn empty_filter_means_box() {
        let imaging = resolve(r#"resampleFilter = """#).unwrap();
        assert_eq!(imaging.resample_filter, ResampleFilter::Box);
    }

    #[test]
    fn serialized_defaults_resolve_to_themselves() {
        let imaging = Imaging {
            quality: Quality::new(88).unwrap(),
            resample_filter: ResampleFilter::CatmullRom,
            anchor: CropAnchor::Position(Anchor::Bottom),
        };
        let value = toml::Value::try_from(imaging).unwrap();
        let table = value.as_table().unwrap();
        assert_eq!(resolve_defaults(table).unwrap(), imaging);
    }
}
