//! Image directives: defaults, parsing, and cache keys.
//!
//! | Step | Entry point |
//! |---|---|
//! | **Site defaults** | [`resolve_defaults`] → [`Imaging`] |
//! | **Directive** | [`parse_directive`] → [`ImageConfig`] |
//! | **Cache key** | [`ImageConfig::key`] |
//! | **Target format** | [`Format::from_ext`] |
//!
//! The module is split into:
//! - **Registries**: anchor and filter name tables, smart-crop constants
//! - **Format**: extension table and per-format processing versions
//! - **Parameters**: the validated [`Quality`] type
//! - **Defaults / Directive / Key**: the three steps above
//! - **Calculations**: dimension math for whoever executes an [`ImageConfig`]
//!
//! Everything here is pure. The only state is the `const` tables, so any of
//! these functions can be called from many threads at once.

mod calculations;
mod defaults;
mod directive;
mod format;
mod key;
mod params;
mod registry;

pub use calculations::{crop_origin, fill_dimensions, target_dimensions};
pub use defaults::{DefaultsError, Imaging, resolve_defaults};
pub use directive::{DirectiveError, ImageConfig, parse_directive};
pub use format::{Format, MAIN_VERSION};
pub use params::Quality;
pub use registry::{Anchor, CropAnchor, ResampleFilter, SMART_CROP, SMART_CROP_VERSION};
