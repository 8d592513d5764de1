//! Target image formats and their cache-invalidation versions.
//!
//! The file-handling layer maps a filename extension to a [`Format`] with
//! [`Format::from_ext`]. The format then takes part in the cache key: when
//! the processing for one format changes (e.g. PNG dithering), bumping its
//! entry in [`Format::version`] stales only that format's cached outputs.
//! [`MAIN_VERSION`] stales everything at once.

use serde::Serialize;
use std::fmt;
use std::path::Path;

/// Increment to mark every processed image as stale. Only use when absolutely
/// needed; prefer the per-format versions and the smart-crop version.
pub const MAIN_VERSION: u32 = 0;

/// Extension → format table. Case-sensitive, leading dot included.
const EXTENSIONS: &[(&str, Format)] = &[
    (".jpg", Format::Jpeg),
    (".jpeg", Format::Jpeg),
    (".png", Format::Png),
    (".tif", Format::Tiff),
    (".tiff", Format::Tiff),
    (".bmp", Format::Bmp),
    (".gif", Format::Gif),
];

/// An image encoding the processing pipeline can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    Jpeg,
    Png,
    Tiff,
    Bmp,
    Gif,
}

impl Format {
    /// Look up a format by extension, e.g. `".jpg"`.
    ///
    /// The dot is required and matching is case-sensitive: `".JPG"` and
    /// `"jpg"` are both unknown.
    pub fn from_ext(ext: &str) -> Option<Format> {
        EXTENSIONS
            .iter()
            .find(|(name, _)| *name == ext)
            .map(|&(_, format)| format)
    }

    /// Look up the format of a file by its extension.
    pub fn from_path(path: &Path) -> Option<Format> {
        let ext = path.extension()?.to_str()?;
        Self::from_ext(&format!(".{ext}"))
    }

    /// Processing version for this format. Add or increment an entry when a
    /// change to the format's processing requires re-generation.
    pub fn version(self) -> u32 {
        match self {
            // Floyd-Steinberg dithering
            Format::Png => 2,
            _ => 0,
        }
    }

    /// Canonical extension used when writing this format, with the dot.
    pub fn default_extension(self) -> &'static str {
        match self {
            Format::Jpeg => ".jpg",
            Format::Png => ".png",
            Format::Tiff => ".tif",
            Format::Bmp => ".bmp",
            Format::Gif => ".gif",
        }
    }

    /// Whether the encoder honours a quality setting. Only JPEG does.
    pub fn supports_quality(self) -> bool {
        self == Format::Jpeg
    }

    /// The matching `image` crate format, for handing off to an encoder.
    pub fn image_format(self) -> image::ImageFormat {
        match self {
            Format::Jpeg => image::ImageFormat::Jpeg,
            Format::Png => image::ImageFormat::Png,
            Format::Tiff => image::ImageFormat::Tiff,
            Format::Bmp => image::ImageFormat::Bmp,
            Format::Gif => image::ImageFormat::Gif,
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Format::Jpeg => "JPEG",
            Format::Png => "PNG",
            Format::Tiff => "TIFF",
            Format::Bmp => "BMP",
            Format::Gif => "GIF",
        };
        f.write_str(name)
    }
}
