//! Fixed name tables for anchors and resampling filters.
//!
//! Directive tokens and config values are matched against these tables after
//! lower-casing. Each resolved value keeps its registry name (via `name()`),
//! which is what ends up in cache keys.

use image::imageops::FilterType;
use serde::{Serialize, Serializer};
use std::fmt;

/// Anchor value selecting automatic, content-aware cropping.
pub const SMART_CROP: &str = "smart";

/// Version of the smart-crop algorithm. Bump to re-crop every smart fill.
pub const SMART_CROP_VERSION: u32 = 1;

const ANCHORS: &[(&str, Anchor)] = &[
    ("center", Anchor::Center),
    ("topleft", Anchor::TopLeft),
    ("top", Anchor::Top),
    ("topright", Anchor::TopRight),
    ("left", Anchor::Left),
    ("right", Anchor::Right),
    ("bottomleft", Anchor::BottomLeft),
    ("bottom", Anchor::Bottom),
    ("bottomright", Anchor::BottomRight),
];

const FILTERS: &[(&str, ResampleFilter)] = &[
    ("nearestneighbor", ResampleFilter::NearestNeighbor),
    ("box", ResampleFilter::Box),
    ("linear", ResampleFilter::Linear),
    ("hermite", ResampleFilter::Hermite),
    ("mitchellnetravali", ResampleFilter::MitchellNetravali),
    ("catmullrom", ResampleFilter::CatmullRom),
    ("bspline", ResampleFilter::BSpline),
    ("gaussian", ResampleFilter::Gaussian),
    ("lanczos", ResampleFilter::Lanczos),
    ("hann", ResampleFilter::Hann),
    ("hamming", ResampleFilter::Hamming),
    ("blackman", ResampleFilter::Blackman),
    ("bartlett", ResampleFilter::Bartlett),
    ("welch", ResampleFilter::Welch),
    ("cosine", ResampleFilter::Cosine),
];

/// A fixed crop position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Anchor {
    Center,
    TopLeft,
    Top,
    TopRight,
    Left,
    Right,
    BottomLeft,
    Bottom,
    BottomRight,
}

impl Anchor {
    /// Look up an anchor by its lower-case name.
    pub fn from_name(name: &str) -> Option<Anchor> {
        lookup(ANCHORS, name)
    }

    pub fn name(self) -> &'static str {
        reverse_lookup(ANCHORS, self)
    }

    pub fn all() -> impl Iterator<Item = Anchor> {
        ANCHORS.iter().map(|&(_, anchor)| anchor)
    }
}

/// Where a fill crop is taken from: a fixed [`Anchor`] or smart crop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CropAnchor {
    #[default]
    Smart,
    Position(Anchor),
}

impl CropAnchor {
    /// Look up a crop anchor by its lower-case name, including `"smart"`.
    pub fn from_name(name: &str) -> Option<CropAnchor> {
        if name == SMART_CROP {
            return Some(CropAnchor::Smart);
        }
        Anchor::from_name(name).map(CropAnchor::Position)
    }

    pub fn name(self) -> &'static str {
        match self {
            CropAnchor::Smart => SMART_CROP,
            CropAnchor::Position(anchor) => anchor.name(),
        }
    }

    /// The concrete position, if not smart crop.
    pub fn position(self) -> Option<Anchor> {
        match self {
            CropAnchor::Smart => None,
            CropAnchor::Position(anchor) => Some(anchor),
        }
    }
}

/// A named resampling kernel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ResampleFilter {
    NearestNeighbor,
    #[default]
    Box,
    Linear,
    Hermite,
    MitchellNetravali,
    CatmullRom,
    BSpline,
    Gaussian,
    Lanczos,
    Hann,
    Hamming,
    Blackman,
    Bartlett,
    Welch,
    Cosine,
}

impl ResampleFilter {
    /// Look up a filter by its lower-case name.
    pub fn from_name(name: &str) -> Option<ResampleFilter> {
        lookup(FILTERS, name)
    }

    pub fn name(self) -> &'static str {
        reverse_lookup(FILTERS, self)
    }

    pub fn all() -> impl Iterator<Item = ResampleFilter> {
        FILTERS.iter().map(|&(_, filter)| filter)
    }

    /// Closest kernel the `image` crate provides.
    ///
    /// `image` ships five filters, so the windowed-sinc family collapses to
    /// Lanczos3 and the cubic family to Catmull-Rom.
    pub fn image_filter(self) -> FilterType {
        use ResampleFilter::*;
        match self {
            NearestNeighbor => FilterType::Nearest,
            Box | Linear | Bartlett => FilterType::Triangle,
            Hermite | MitchellNetravali | CatmullRom | BSpline => FilterType::CatmullRom,
            Gaussian => FilterType::Gaussian,
            Lanczos | Hann | Hamming | Blackman | Welch | Cosine => FilterType::Lanczos3,
        }
    }
}

fn lookup<T: Copy>(table: &[(&str, T)], name: &str) -> Option<T> {
    table.iter().find(|(n, _)| *n == name).map(|&(_, v)| v)
}

fn reverse_lookup<T: Copy + PartialEq>(table: &[(&'static str, T)], value: T) -> &'static str {
    table
        .iter()
        .find(|&&(_, v)| v == value)
        .map(|&(n, _)| n)
        .unwrap_or_default()
}

macro_rules! display_and_serialize_by_name {
    ($($ty:ty),*) => {$(
        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.name())
            }
        }

        impl Serialize for $ty {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(self.name())
            }
        }
    )*};
}

display_and_serialize_by_name!(Anchor, CropAnchor, ResampleFilter);
