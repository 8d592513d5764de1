//! # Image Directive
//!
//! Turns the short processing instructions authors write next to images,
//! like `"200x300 r90 q80 Center Lanczos"`, into validated operations and
//! stable cache keys.
//!
//! # Architecture: Three Steps
//!
//! ```text
//! 1. Defaults   [imaging] table      →  Imaging       (site-wide, once)
//! 2. Parse      action + directive   →  ImageConfig   (per operation)
//! 3. Key        ImageConfig + Format →  "200x300_fill_q80_r90_lanczos_center"
//! ```
//!
//! Each step is a pure function. Nothing here touches pixels or the cache:
//! the engine that resizes images and the store that keeps the results take
//! an [`ImageConfig`](imaging::ImageConfig) and its key and do the work.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`imaging`] | Registries, defaults resolution, directive parsing, cache keys, dimension math |
//! | [`config`] | `config.toml` loading, per-language `[imaging]` overrides |
//! | [`output`] | CLI output formatting |
//!
//! # Design Decisions
//!
//! ## Tolerant Tokens
//!
//! A directive token that matches no category is skipped, not rejected
//! (it's logged at `debug`). Directives live in templates and content files
//! written against many versions of a site; an unknown word shouldn't break
//! a build.
//!
//! ## Keys Are Strings, Not Hashes
//!
//! A key is a readable concatenation of the operation's parameters. It ends
//! up in output filenames, so a person looking at a cache directory can tell
//! what each file is. Version counters at the end of the key (per format,
//! smart crop, global) invalidate old outputs when processing changes.
//!
//! ## Typed Defaults
//!
//! Settings arrive loosely typed, but the resolver produces enums, not
//! strings: once an [`Imaging`](imaging::Imaging) exists, its filter and
//! anchor are known registry values and nothing downstream re-validates them.

pub mod config;
pub mod imaging;
pub mod output;

#[cfg(test)]
pub(crate) mod test_helpers;
