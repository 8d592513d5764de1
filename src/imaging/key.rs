//! Cache keys for processed images.
//!
//! The key names the output of one [`ImageConfig`] applied to one target
//! [`Format`]. Parts are joined with `_`:
//!
//! ```text
//! 300x200_fill_q90_r90_lanczos_center
//! 300x0_resize_box_2          ← PNG, format version 2
//! 200x200_fill_box_smart1     ← smart crop, algorithm version 1
//! ```
//!
//! Equal inputs always give equal keys. The versions at the end let a
//! processing change stale old outputs without touching anything else.

use super::directive::ImageConfig;
use super::format::{Format, MAIN_VERSION};
use super::registry::{CropAnchor, SMART_CROP_VERSION};

/// Version counters folded into every key.
#[derive(Debug, Clone, Copy)]
struct KeyVersions {
    smart_crop: u32,
    main: u32,
}

impl KeyVersions {
    const CURRENT: KeyVersions = KeyVersions {
        smart_crop: SMART_CROP_VERSION,
        main: MAIN_VERSION,
    };
}

impl ImageConfig {
    /// Cache key for this operation producing `format`.
    pub fn key(&self, format: Format) -> String {
        self.key_with_versions(format, KeyVersions::CURRENT)
    }

    fn key_with_versions(&self, format: Format, versions: KeyVersions) -> String {
        if let Some(key) = self.key.as_deref().filter(|k| !k.is_empty()) {
            return format!("{}_{}", self.action, key);
        }

        let mut parts = vec![format!("{}x{}", self.width, self.height)];
        if !self.action.is_empty() {
            parts.push(self.action.clone());
        }
        if let Some(quality) = self.quality {
            parts.push(format!("q{quality}"));
        }
        if self.rotate != 0 {
            parts.push(format!("r{}", self.rotate));
        }
        parts.push(self.filter.name().to_string());
        if self.action.eq_ignore_ascii_case("fill") {
            parts.push(match self.anchor {
                CropAnchor::Smart => format!("{}{}", self.anchor.name(), versions.smart_crop),
                CropAnchor::Position(anchor) => anchor.name().to_string(),
            });
        }
        if format.version() != 0 {
            parts.push(format.version().to_string());
        }
        if versions.main > 0 {
            parts.push(versions.main.to_string());
        }

        parts.join("_")
    }
}
