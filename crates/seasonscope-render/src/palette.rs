//! Sequential color scales.

use plotters::style::RGBColor;
use seasonscope_core::Palette;

const YLORRD: [RGBColor; 9] = [
    RGBColor(0xff, 0xff, 0xcc),
    RGBColor(0xff, 0xed, 0xa0),
    RGBColor(0xfe, 0xd9, 0x76),
    RGBColor(0xfe, 0xb2, 0x4c),
    RGBColor(0xfd, 0x8d, 0x3c),
    RGBColor(0xfc, 0x4e, 0x2a),
    RGBColor(0xe3, 0x1a, 0x1c),
    RGBColor(0xbd, 0x00, 0x26),
    RGBColor(0x80, 0x00, 0x26),
];

const BLUES: [RGBColor; 9] = [
    RGBColor(0xf7, 0xfb, 0xff),
    RGBColor(0xde, 0xeb, 0xf7),
    RGBColor(0xc6, 0xdb, 0xef),
    RGBColor(0x9e, 0xca, 0xe1),
    RGBColor(0x6b, 0xae, 0xd6),
    RGBColor(0x42, 0x92, 0xc6),
    RGBColor(0x21, 0x71, 0xb5),
    RGBColor(0x08, 0x51, 0x9c),
    RGBColor(0x08, 0x30, 0x6b),
];

const VIRIDIS: [RGBColor; 10] = [
    RGBColor(0x44, 0x01, 0x54),
    RGBColor(0x48, 0x28, 0x78),
    RGBColor(0x3e, 0x49, 0x89),
    RGBColor(0x31, 0x68, 0x8e),
    RGBColor(0x26, 0x82, 0x8e),
    RGBColor(0x1f, 0x9e, 0x89),
    RGBColor(0x35, 0xb7, 0x79),
    RGBColor(0x6e, 0xce, 0x58),
    RGBColor(0xb5, 0xde, 0x2b),
    RGBColor(0xfd, 0xe7, 0x25),
];

/// Anchor colors of `palette`, from low to high.
pub fn stops(palette: Palette) -> &'static [RGBColor] {
    match palette {
        Palette::YlOrRd => &YLORRD,
        Palette::Blues => &BLUES,
        Palette::Viridis => &VIRIDIS,
    }
}

/// Color at position `t` on the scale, linearly interpolated between stops.
///
/// `t` is clamped to `0.0..=1.0`; NaN maps to the low end.
///
/// # Examples
///
/// ```
/// use plotters::style::RGBColor;
/// use seasonscope_core::Palette;
/// use seasonscope_render::palette::sample;
///
/// assert_eq!(sample(Palette::YlOrRd, 0.0), RGBColor(0xff, 0xff, 0xcc));
/// assert_eq!(sample(Palette::YlOrRd, 1.0), RGBColor(0x80, 0x00, 0x26));
/// ```
pub fn sample(palette: Palette, t: f64) -> RGBColor {
    let stops = stops(palette);
    let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };

    let scaled = t * (stops.len() - 1) as f64;
    let lower = (scaled.floor() as usize).min(stops.len() - 2);
    let frac = scaled - lower as f64;

    let RGBColor(r0, g0, b0) = stops[lower];
    let RGBColor(r1, g1, b1) = stops[lower + 1];
    RGBColor(lerp(r0, r1, frac), lerp(g0, g1, frac), lerp(b0, b1, frac))
}

fn lerp(a: u8, b: u8, t: f64) -> u8 {
    (f64::from(a) + (f64::from(b) - f64::from(a)) * t).round() as u8
}

/// Black or white, whichever reads better on `background`.
pub fn contrasting_text(background: RGBColor) -> RGBColor {
    let RGBColor(r, g, b) = background;
    let luminance =
        (0.2126 * f64::from(r) + 0.7152 * f64::from(g) + 0.0722 * f64::from(b)) / 255.0;
    if luminance > 0.5 {
        RGBColor(0, 0, 0)
    } else {
        RGBColor(0xff, 0xff, 0xff)
    }
}
