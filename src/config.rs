//! Site configuration loading.
//!
//! Imaging defaults live in the `[imaging]` table of `config.toml` in the
//! content root. A multilingual site can override them per language:
//!
//! ```toml
//! [imaging]
//! quality = 75
//! resampleFilter = "box"
//! anchor = "smart"
//!
//! [languages.de.imaging]
//! quality = 90              # overrides the site value for "de" only
//! ```
//!
//! Other tables in the file belong to other tools and are left alone. A
//! missing file or missing `[imaging]` table yields the stock defaults.

use crate::imaging::{DefaultsError, Imaging, resolve_defaults};
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Name of the config file within the content root.
pub const CONFIG_FILENAME: &str = "config.toml";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
    #[error(transparent)]
    Imaging(#[from] DefaultsError),
}

/// Load `config.toml` from a directory as a raw TOML table.
///
/// Returns `Ok(None)` if no `config.toml` exists in the directory.
/// Returns `Err` if the file exists but contains invalid TOML.
pub fn load_raw_config(root: &Path) -> Result<Option<toml::Table>, ConfigError> {
    let config_path = root.join(CONFIG_FILENAME);
    if !config_path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(&config_path)?;
    let table: toml::Table = toml::from_str(&content)?;
    Ok(Some(table))
}

/// Recursively merge `overlay` on top of `base`.
///
/// - Tables are merged key-by-key (overlay keys override base keys).
/// - Non-table values in overlay replace base values entirely.
/// - Keys in base that are not in overlay are preserved.
///
/// Keys are compared case-insensitively, matching how the imaging settings
/// themselves are read.
pub fn merge_tables(mut base: toml::Table, overlay: toml::Table) -> toml::Table {
    for (key, overlay_val) in overlay {
        let existing_key = base.keys().find(|k| k.eq_ignore_ascii_case(&key)).cloned();
        let existing = existing_key.and_then(|k| base.remove(&k));
        let merged = match (existing, overlay_val) {
            (Some(toml::Value::Table(base_table)), toml::Value::Table(overlay_table)) => {
                toml::Value::Table(merge_tables(base_table, overlay_table))
            }
            (_, overlay_val) => overlay_val,
        };
        base.insert(key, merged);
    }
    base
}

/// Case-insensitive table lookup.
fn get_ci<'a>(table: &'a toml::Table, key: &str) -> Option<&'a toml::Value> {
    table
        .iter()
        .find(|(k, _)| k.eq_ignore_ascii_case(key))
        .map(|(_, v)| v)
}

fn as_table<'a>(value: &'a toml::Value, path: &str) -> Result<&'a toml::Table, ConfigError> {
    value
        .as_table()
        .ok_or_else(|| ConfigError::Validation(format!("{path} must be a table")))
}

/// Extract the effective `[imaging]` settings from a parsed config.
///
/// With `lang`, `[languages.<lang>.imaging]` is merged over the site-level
/// table. An unknown language is not an error; it just has no overrides.
pub fn imaging_settings(
    config: &toml::Table,
    lang: Option<&str>,
) -> Result<toml::Table, ConfigError> {
    let site = match get_ci(config, "imaging") {
        Some(value) => as_table(value, "imaging")?.clone(),
        None => toml::Table::new(),
    };

    let Some(lang) = lang else {
        return Ok(site);
    };

    let overrides = get_ci(config, "languages")
        .map(|v| as_table(v, "languages"))
        .transpose()?
        .and_then(|languages| get_ci(languages, lang))
        .map(|v| as_table(v, &format!("languages.{lang}")))
        .transpose()?
        .and_then(|language| get_ci(language, "imaging"));

    match overrides {
        Some(overlay) => {
            let overlay = as_table(overlay, &format!("languages.{lang}.imaging"))?;
            Ok(merge_tables(site, overlay.clone()))
        }
        None => Ok(site),
    }
}

/// Load and validate imaging defaults from `config.toml` in `root`.
pub fn load_imaging(root: &Path, lang: Option<&str>) -> Result<Imaging, ConfigError> {
    let settings = match load_raw_config(root)? {
        Some(config) => imaging_settings(&config, lang)?,
        None => toml::Table::new(),
    };
    Ok(resolve_defaults(&settings)?)
}

/// Returns a fully-commented stock `config.toml` `[imaging]` section.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# Image Processing Defaults
# =========================
# All settings are optional. Values shown below are the defaults.
# Key names and values are case-insensitive.

[imaging]
# JPEG encoding quality, 1 (worst) to 100 (best).
# A directive can override it per image with e.g. "q90".
quality = 75

# Resampling filter used when a directive doesn't name one.
# One of: NearestNeighbor, Box, Linear, Hermite, MitchellNetravali,
# CatmullRom, BSpline, Gaussian, Lanczos, Hann, Hamming, Blackman,
# Bartlett, Welch, Cosine.
resampleFilter = "Box"

# Crop anchor used by "fill" when a directive doesn't name one.
# "Smart" picks the most interesting region automatically. Otherwise one of:
# Center, TopLeft, Top, TopRight, Left, Right, BottomLeft, Bottom, BottomRight.
anchor = "Smart"

# Per-language overrides:
# [languages.de.imaging]
# quality = 90
"##
}
