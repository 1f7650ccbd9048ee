//! Canvas and surface sizing.

/// Physical backing-store size for a CSS box of `css` pixels at
/// `device_ratio`, with the ratio clamped to `[1, max_ratio]`.
///
/// Depends only on the CSS box, never on a previous backing size, so
/// repeated resizes at the same window size are stable.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn backing_size(css: (f64, f64), device_ratio: f64, max_ratio: f64) -> (u32, u32) {
    let ratio = device_ratio.min(max_ratio).max(1.0);
    (
        ((css.0 * ratio).round() as u32).max(1),
        ((css.1 * ratio).round() as u32).max(1),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ratio_is_capped() {
        assert_eq!(backing_size((800.0, 600.0), 3.0, 2.0), (1600, 1200));
        assert_eq!(backing_size((800.0, 600.0), 0.5, 2.0), (800, 600));
    }

    #[test]
    fn repeated_resizes_do_not_compound() {
        let css = (1280.0, 720.0);
        let first = backing_size(css, 2.0, 2.0);
        let again = backing_size(css, 2.0, 2.0);
        assert_eq!(first, (2560, 1440));
        assert_eq!(again, first);
    }

    #[test]
    fn empty_box_keeps_one_pixel() {
        assert_eq!(backing_size((0.0, 0.0), 2.0, 2.0), (1, 1));
    }
}
