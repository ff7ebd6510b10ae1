//! Per-mode entry points for the 8-bit convention: 0..255 color channels in
//! and out, output channels rounded to whole values.

use chromablend_core::Rgba;

use crate::compose;
use crate::mode::BlendMode;
use crate::options::BlendOptions;

/// Blend with the "normal" mode in the 8-bit convention.
pub fn normal(backdrop: Rgba, source: Rgba) -> Rgba {
    compose::blend(BlendMode::Normal, backdrop, source, BlendOptions::EIGHT_BIT)
}

/// Blend with the "multiply" mode in the 8-bit convention.
pub fn multiply(backdrop: Rgba, source: Rgba) -> Rgba {
    compose::blend(BlendMode::Multiply, backdrop, source, BlendOptions::EIGHT_BIT)
}

/// Blend with the "screen" mode in the 8-bit convention.
pub fn screen(backdrop: Rgba, source: Rgba) -> Rgba {
    compose::blend(BlendMode::Screen, backdrop, source, BlendOptions::EIGHT_BIT)
}

/// Blend with the "overlay" mode in the 8-bit convention.
pub fn overlay(backdrop: Rgba, source: Rgba) -> Rgba {
    compose::blend(BlendMode::Overlay, backdrop, source, BlendOptions::EIGHT_BIT)
}

/// Blend with the "darken" mode in the 8-bit convention.
pub fn darken(backdrop: Rgba, source: Rgba) -> Rgba {
    compose::blend(BlendMode::Darken, backdrop, source, BlendOptions::EIGHT_BIT)
}

/// Blend with the "lighten" mode in the 8-bit convention.
pub fn lighten(backdrop: Rgba, source: Rgba) -> Rgba {
    compose::blend(BlendMode::Lighten, backdrop, source, BlendOptions::EIGHT_BIT)
}

/// Blend with the "colorDodge" mode in the 8-bit convention.
pub fn color_dodge(backdrop: Rgba, source: Rgba) -> Rgba {
    compose::blend(BlendMode::ColorDodge, backdrop, source, BlendOptions::EIGHT_BIT)
}

/// Blend with the "colorBurn" mode in the 8-bit convention.
pub fn color_burn(backdrop: Rgba, source: Rgba) -> Rgba {
    compose::blend(BlendMode::ColorBurn, backdrop, source, BlendOptions::EIGHT_BIT)
}

/// Blend with the "hardLight" mode in the 8-bit convention.
pub fn hard_light(backdrop: Rgba, source: Rgba) -> Rgba {
    compose::blend(BlendMode::HardLight, backdrop, source, BlendOptions::EIGHT_BIT)
}

/// Blend with the "softLight" mode in the 8-bit convention.
pub fn soft_light(backdrop: Rgba, source: Rgba) -> Rgba {
    compose::blend(BlendMode::SoftLight, backdrop, source, BlendOptions::EIGHT_BIT)
}

/// Blend with the "difference" mode in the 8-bit convention.
pub fn difference(backdrop: Rgba, source: Rgba) -> Rgba {
    compose::blend(BlendMode::Difference, backdrop, source, BlendOptions::EIGHT_BIT)
}

/// Blend with the "exclusion" mode in the 8-bit convention.
pub fn exclusion(backdrop: Rgba, source: Rgba) -> Rgba {
    compose::blend(BlendMode::Exclusion, backdrop, source, BlendOptions::EIGHT_BIT)
}

/// Blend with the "hue" mode in the 8-bit convention.
pub fn hue(backdrop: Rgba, source: Rgba) -> Rgba {
    compose::blend(BlendMode::Hue, backdrop, source, BlendOptions::EIGHT_BIT)
}

/// Blend with the "saturation" mode in the 8-bit convention.
pub fn saturation(backdrop: Rgba, source: Rgba) -> Rgba {
    compose::blend(BlendMode::Saturation, backdrop, source, BlendOptions::EIGHT_BIT)
}

/// Blend with the "color" mode in the 8-bit convention.
pub fn color(backdrop: Rgba, source: Rgba) -> Rgba {
    compose::blend(BlendMode::Color, backdrop, source, BlendOptions::EIGHT_BIT)
}

/// Blend with the "luminosity" mode in the 8-bit convention.
pub fn luminosity(backdrop: Rgba, source: Rgba) -> Rgba {
    compose::blend(BlendMode::Luminosity, backdrop, source, BlendOptions::EIGHT_BIT)
}
