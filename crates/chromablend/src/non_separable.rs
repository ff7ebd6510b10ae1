//! Non-separable blend modes: hue, saturation, color and luminosity.
//!
//! These operate on whole colors in the unit range (0..1), mixing the HSL
//! qualities of backdrop and source. Formulas follow
//! <https://www.w3.org/TR/compositing-1/#blendingnonseparable>.

use chromablend_core::Rgb;

/// Weighted luminosity of a unit-range color.
fn lum(color: Rgb) -> f64 {
    0.3 * color.r + 0.59 * color.g + 0.11 * color.b
}

/// Saturation as the spread between the largest and smallest channel.
fn sat(color: Rgb) -> f64 {
    let max = color.r.max(color.g).max(color.b);
    let min = color.r.min(color.g).min(color.b);
    max - min
}

/// Rebuild a color with the given saturation, keeping the channel order.
///
/// The middle channel is scaled into the new spread, the largest becomes
/// `s` and the smallest becomes 0. A flat color (all channels equal) has
/// nothing to spread and collapses to black.
fn set_sat(color: Rgb, s: f64) -> Rgb {
    let mut channels = [color.r, color.g, color.b];
    let mut order = [0usize, 1, 2];
    // stable: ties keep r, g, b order
    order.sort_by(|&i, &j| channels[i].total_cmp(&channels[j]));
    let [lo, mid, hi] = order;

    if channels[hi] > channels[lo] {
        channels[mid] = (channels[mid] - channels[lo]) * s / (channels[hi] - channels[lo]);
        channels[hi] = s;
    } else {
        channels[mid] = 0.0;
        channels[hi] = 0.0;
    }
    channels[lo] = 0.0;

    Rgb::new(channels[0], channels[1], channels[2])
}

/// Pull out-of-range channels back toward the luminosity.
///
/// The luminosity and both extremes are taken from the input once; the
/// upper clip reuses them even after the lower clip moved the channels.
fn clip_color(color: Rgb) -> Rgb {
    let l = lum(color);
    let n = color.r.min(color.g).min(color.b);
    let x = color.r.max(color.g).max(color.b);
    let mut color = color;

    if n < 0.0 {
        color.r = l + (color.r - l) * l / (l - n);
        color.g = l + (color.g - l) * l / (l - n);
        color.b = l + (color.b - l) * l / (l - n);
    }
    if x > 1.0 {
        color.r = l + (color.r - l) * (1.0 - l) / (x - l);
        color.g = l + (color.g - l) * (1.0 - l) / (x - l);
        color.b = l + (color.b - l) * (1.0 - l) / (x - l);
    }

    color
}

/// Shift a color to the given luminosity, clipping back into range.
fn set_lum(color: Rgb, l: f64) -> Rgb {
    let d = l - lum(color);
    clip_color(Rgb::new(color.r + d, color.g + d, color.b + d))
}

/// "hue": source hue with the backdrop's saturation and luminosity.
pub fn hue(backdrop: Rgb, source: Rgb) -> Rgb {
    set_lum(set_sat(source, sat(backdrop)), lum(backdrop))
}

/// "saturation": source saturation with the backdrop's hue and luminosity.
pub fn saturation(backdrop: Rgb, source: Rgb) -> Rgb {
    set_lum(set_sat(backdrop, sat(source)), lum(backdrop))
}

/// "color": source hue and saturation with the backdrop's luminosity.
pub fn color(backdrop: Rgb, source: Rgb) -> Rgb {
    set_lum(source, lum(backdrop))
}

/// "luminosity": source luminosity with the backdrop's hue and saturation.
pub fn luminosity(backdrop: Rgb, source: Rgb) -> Rgb {
    set_lum(backdrop, lum(source))
}
