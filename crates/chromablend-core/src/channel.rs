//! Channel arithmetic: clamping, restriction and rounding.

use crate::color::Rgba;

/// Clamp a channel value to the given bounds.
///
/// A NaN input counts as a missing channel and clamps from 0.
#[inline]
pub fn restrict(value: f64, lo: f64, hi: f64) -> f64 {
    let value = if value.is_nan() { 0.0 } else { value };
    value.clamp(lo, hi)
}

/// Restrict a color to its boundaries: 0..255 for the color channels,
/// 0..1 for alpha.
#[inline]
pub fn restrict_color(color: Rgba) -> Rgba {
    Rgba {
        r: restrict(color.r, 0.0, 255.0),
        g: restrict(color.g, 0.0, 255.0),
        b: restrict(color.b, 0.0, 255.0),
        a: restrict(color.a, 0.0, 1.0),
    }
}

/// Round the color channels to `precision` decimal digits, half away from
/// zero. Alpha passes through unchanged.
pub fn round_channels(color: Rgba, precision: u32) -> Rgba {
    let multiplier = 10f64.powi(precision as i32);
    Rgba {
        r: (color.r * multiplier).round() / multiplier,
        g: (color.g * multiplier).round() / multiplier,
        b: (color.b * multiplier).round() / multiplier,
        a: color.a,
    }
}

/// Round the color channels to 9 decimal digits, collapsing IEEE 754 noise
/// (39.00000000000001 becomes 39) without affecting displayed precision.
#[inline]
pub fn snap_channels(color: Rgba) -> Rgba {
    round_channels(color, 9)
}
