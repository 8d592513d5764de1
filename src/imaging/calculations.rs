//! Pure calculation functions for image dimensions.
//!
//! A parsed directive leaves one side unspecified (`x400`) or asks for a
//! fill with an anchor. The engine that executes it needs these numbers;
//! they live here so they stay testable without any images.

use super::registry::Anchor;

/// Resolve requested dimensions against the source size.
///
/// A zero side is computed from the source aspect ratio. When both sides are
/// given they are returned unchanged.
///
/// # Examples
/// ```
/// # use image_directive::imaging::target_dimensions;
/// // 2000x1500 source, "x400" → 533x400
/// assert_eq!(target_dimensions((2000, 1500), (0, 400)), (533, 400));
///
/// // "600x" → 600x450
/// assert_eq!(target_dimensions((2000, 1500), (600, 0)), (600, 450));
/// ```
pub fn target_dimensions(source: (u32, u32), requested: (u32, u32)) -> (u32, u32) {
    let (src_w, src_h) = source;
    match requested {
        (0, 0) => source,
        (0, h) => {
            let w = (h as f64 * src_w as f64 / src_h as f64).round() as u32;
            (w.max(1), h)
        }
        (w, 0) => {
            let h = (w as f64 * src_h as f64 / src_w as f64).round() as u32;
            (w, h.max(1))
        }
        both => both,
    }
}

/// Calculate dimensions needed to fill a target area (resize before crop).
///
/// Returns dimensions that completely cover the target area while maintaining
/// the source aspect ratio. One dimension will match exactly, the other may exceed.
pub fn fill_dimensions(source: (u32, u32), target: (u32, u32)) -> (u32, u32) {
    let (src_w, src_h) = source;
    let (tgt_w, tgt_h) = target;

    let src_aspect = src_w as f64 / src_h as f64;
    let tgt_aspect = tgt_w as f64 / tgt_h as f64;

    if src_aspect > tgt_aspect {
        // Source is wider: height will match, width will exceed
        let h = tgt_h;
        let w = (h as f64 * src_aspect).round() as u32;
        (w, h)
    } else {
        // Source is taller: width will match, height will exceed
        let w = tgt_w;
        let h = (w as f64 / src_aspect).round() as u32;
        (w, h)
    }
}

/// Top-left corner of a `crop` window placed inside `resized` at `anchor`.
///
/// A crop larger than the image on some axis is pinned to 0 on that axis.
pub fn crop_origin(anchor: Anchor, resized: (u32, u32), crop: (u32, u32)) -> (u32, u32) {
    let spare_w = resized.0.saturating_sub(crop.0);
    let spare_h = resized.1.saturating_sub(crop.1);

    let x = match anchor {
        Anchor::TopLeft | Anchor::Left | Anchor::BottomLeft => 0,
        Anchor::Top | Anchor::Center | Anchor::Bottom => spare_w / 2,
        Anchor::TopRight | Anchor::Right | Anchor::BottomRight => spare_w,
    };
    let y = match anchor {
        Anchor::TopLeft | Anchor::Top | Anchor::TopRight => 0,
        Anchor::Left | Anchor::Center | Anchor::Right => spare_h / 2,
        Anchor::BottomLeft | Anchor::Bottom | Anchor::BottomRight => spare_h,
    };
    (x, y)
}
