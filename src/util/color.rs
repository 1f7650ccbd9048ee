//! `#rrggbb` parsing and sRGB → linear conversion.
//!
//! Colors are authored in sRGB (as a designer would pick them) while the
//! shaders write to an sRGB surface, so everything handed to the GPU is
//! converted to linear first.

/// Parse `#rrggbb` (leading `#` optional) into sRGB components in [0, 1].
#[must_use]
pub fn parse_hex(hex: &str) -> Option<[f32; 3]> {
    let digits = hex.trim().trim_start_matches('#');
    if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    let channel = |range: std::ops::Range<usize>| {
        u8::from_str_radix(&digits[range], 16)
            .ok()
            .map(|v| f32::from(v) / 255.0)
    };
    Some([channel(0..2)?, channel(2..4)?, channel(4..6)?])
}

/// Convert one sRGB-encoded channel to linear.
#[must_use]
pub fn channel_to_linear(c: f32) -> f32 {
    if c <= 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

/// Convert an sRGB triple to linear.
#[must_use]
pub fn srgb_to_linear(rgb: [f32; 3]) -> [f32; 3] {
    rgb.map(channel_to_linear)
}

/// Parse a hex color straight into a linear [`wgpu::Color`] (opaque).
#[must_use]
pub fn hex_to_wgpu(hex: &str) -> Option<wgpu::Color> {
    let [r, g, b] = srgb_to_linear(parse_hex(hex)?);
    Some(wgpu::Color {
        r: f64::from(r),
        g: f64::from(g),
        b: f64::from(b),
        a: 1.0,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_with_and_without_hash() {
        assert_eq!(parse_hex("#ff0000"), Some([1.0, 0.0, 0.0]));
        assert_eq!(parse_hex("00ff00"), Some([0.0, 1.0, 0.0]));
    }

    #[test]
    fn rejects_malformed() {
        assert_eq!(parse_hex("#fff"), None);
        assert_eq!(parse_hex("#gg0000"), None);
        assert_eq!(parse_hex("#ff00ää"), None);
        assert_eq!(parse_hex(""), None);
    }

    #[test]
    fn linear_conversion_keeps_endpoints() {
        assert_eq!(channel_to_linear(0.0), 0.0);
        assert!((channel_to_linear(1.0) - 1.0).abs() < 1e-6);
        // mid-grey is darker in linear space
        assert!(channel_to_linear(0.5) < 0.25);
    }

    #[test]
    fn background_converts_to_dark_linear() {
        let c = hex_to_wgpu("#1e1a20").unwrap();
        assert!(c.r < 0.02 && c.g < 0.02 && c.b < 0.02);
        assert_eq!(c.a, 1.0);
    }
}
