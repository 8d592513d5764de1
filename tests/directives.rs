//! End-to-end tests through the public API: config file → defaults →
//! directive → cache key.
//!
//! Run with: cargo test --test directives

use image_directive::config::load_imaging;
use image_directive::imaging::{
    Anchor, CropAnchor, DirectiveError, Format, ImageConfig, Imaging, ResampleFilter,
    crop_origin, fill_dimensions, parse_directive, resolve_defaults, target_dimensions,
};
use rayon::prelude::*;
use tempfile::TempDir;

fn site(config: &str) -> (TempDir, Imaging) {
    let tmp = TempDir::new().unwrap();
    std::fs::write(tmp.path().join("config.toml"), config).unwrap();
    let imaging = load_imaging(tmp.path(), None).unwrap();
    (tmp, imaging)
}

#[test]
fn site_defaults_flow_into_keys() {
    let (_tmp, defaults) = site("[imaging]\nresampleFilter = \"Lanczos\"\nanchor = \"Bottom\"\n");

    let fill = parse_directive("fill", "400x300", &defaults).unwrap();
    assert_eq!(fill.filter, ResampleFilter::Lanczos);
    assert_eq!(fill.anchor, CropAnchor::Position(Anchor::Bottom));
    assert_eq!(fill.key(Format::Jpeg), "400x300_fill_lanczos_bottom");

    let resize = parse_directive("resize", "400x", &defaults).unwrap();
    assert_eq!(resize.key(Format::Png), "400x0_resize_lanczos_2");
}

#[test]
fn directive_tokens_beat_site_defaults() {
    let (_tmp, defaults) = site("[imaging]\nresampleFilter = \"Lanczos\"\nanchor = \"Bottom\"\n");
    let c = parse_directive("fill", "400x300 hermite smart", &defaults).unwrap();
    assert_eq!(c.key(Format::Gif), "400x300_fill_hermite_smart1");
}

#[test]
fn documented_examples() {
    let defaults = Imaging::default();

    let c = parse_directive("fill", "300x200 Center Lanczos q90 r90", &defaults).unwrap();
    assert_eq!((c.width, c.height, c.rotate), (300, 200, 90));
    assert_eq!(c.quality.map(|q| q.value()), Some(90));

    let c = parse_directive("resize", "x400", &defaults).unwrap();
    assert_eq!((c.width, c.height), (0, 400));

    assert_eq!(
        parse_directive("resize", "", &defaults).unwrap_err(),
        DirectiveError::Empty
    );
    assert_eq!(
        parse_directive("resize", "200x300x400", &defaults).unwrap_err(),
        DirectiveError::InvalidDimensions
    );

    let c = parse_directive("resize", "100x q10 q20", &defaults).unwrap();
    assert_eq!(c.quality.map(|q| q.value()), Some(20));
}

#[test]
fn settings_from_any_table_source() {
    let mut settings = toml::Table::new();
    settings.insert("Quality".into(), "90".into());
    settings.insert("Anchor".into(), "TOPRIGHT".into());
    let defaults = resolve_defaults(&settings).unwrap();
    assert_eq!(defaults.quality.value(), 90);
    assert_eq!(defaults.anchor, CropAnchor::Position(Anchor::TopRight));
}

#[test]
fn parsing_and_keying_in_parallel_is_consistent() {
    let defaults = Imaging::default();
    let directives: Vec<String> = (1..=500)
        .map(|i| format!("{}x{} q{} r{} lanczos center", i, i * 2, i % 100 + 1, i))
        .collect();

    let sequential: Vec<String> = directives
        .iter()
        .map(|d| parse_directive("fill", d, &defaults).unwrap().key(Format::Jpeg))
        .collect();
    let parallel: Vec<String> = directives
        .par_iter()
        .map(|d| parse_directive("fill", d, &defaults).unwrap().key(Format::Jpeg))
        .collect();

    assert_eq!(sequential, parallel);
    let mut unique = parallel.clone();
    unique.sort();
    unique.dedup();
    assert_eq!(unique.len(), directives.len());
}

#[test]
fn fill_plan_from_parsed_directive() {
    // What an engine does with a fill: cover the target, then crop at the anchor.
    let c: ImageConfig = parse_directive("fill", "400x500 right", &Imaging::default()).unwrap();
    let source = (800, 600);
    let target = target_dimensions(source, (c.width, c.height));
    let resized = fill_dimensions(source, target);
    assert_eq!(resized, (667, 500));
    let anchor = c.anchor.position().unwrap();
    assert_eq!(crop_origin(anchor, resized, target), (267, 0));
}

#[test]
fn target_extension_selects_format() {
    let c = parse_directive("resize", "100x", &Imaging::default()).unwrap();
    let png = Format::from_ext(".png").unwrap();
    let jpg = Format::from_ext(".jpeg").unwrap();
    assert_eq!(c.key(png), "100x0_resize_box_2");
    assert_eq!(c.key(jpg), "100x0_resize_box");
}
