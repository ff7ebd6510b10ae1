//! Per-mode entry points for the unit convention: 0..1 color channels in
//! and out, output channels left unrounded.

use chromablend_core::Rgba;

use crate::compose;
use crate::mode::BlendMode;
use crate::options::BlendOptions;

/// Blend with the "normal" mode in the unit convention.
pub fn normal(backdrop: Rgba, source: Rgba) -> Rgba {
    compose::blend(BlendMode::Normal, backdrop, source, BlendOptions::UNIT)
}

/// Blend with the "multiply" mode in the unit convention.
pub fn multiply(backdrop: Rgba, source: Rgba) -> Rgba {
    compose::blend(BlendMode::Multiply, backdrop, source, BlendOptions::UNIT)
}

/// Blend with the "screen" mode in the unit convention.
pub fn screen(backdrop: Rgba, source: Rgba) -> Rgba {
    compose::blend(BlendMode::Screen, backdrop, source, BlendOptions::UNIT)
}

/// Blend with the "overlay" mode in the unit convention.
pub fn overlay(backdrop: Rgba, source: Rgba) -> Rgba {
    compose::blend(BlendMode::Overlay, backdrop, source, BlendOptions::UNIT)
}

/// Blend with the "darken" mode in the unit convention.
pub fn darken(backdrop: Rgba, source: Rgba) -> Rgba {
    compose::blend(BlendMode::Darken, backdrop, source, BlendOptions::UNIT)
}

/// Blend with the "lighten" mode in the unit convention.
pub fn lighten(backdrop: Rgba, source: Rgba) -> Rgba {
    compose::blend(BlendMode::Lighten, backdrop, source, BlendOptions::UNIT)
}

/// Blend with the "colorDodge" mode in the unit convention.
pub fn color_dodge(backdrop: Rgba, source: Rgba) -> Rgba {
    compose::blend(BlendMode::ColorDodge, backdrop, source, BlendOptions::UNIT)
}

/// Blend with the "colorBurn" mode in the unit convention.
pub fn color_burn(backdrop: Rgba, source: Rgba) -> Rgba {
    compose::blend(BlendMode::ColorBurn, backdrop, source, BlendOptions::UNIT)
}

/// Blend with the "hardLight" mode in the unit convention.
pub fn hard_light(backdrop: Rgba, source: Rgba) -> Rgba {
    compose::blend(BlendMode::HardLight, backdrop, source, BlendOptions::UNIT)
}

/// Blend with the "softLight" mode in the unit convention.
pub fn soft_light(backdrop: Rgba, source: Rgba) -> Rgba {
    compose::blend(BlendMode::SoftLight, backdrop, source, BlendOptions::UNIT)
}

/// Blend with the "difference" mode in the unit convention.
pub fn difference(backdrop: Rgba, source: Rgba) -> Rgba {
    compose::blend(BlendMode::Difference, backdrop, source, BlendOptions::UNIT)
}

/// Blend with the "exclusion" mode in the unit convention.
pub fn exclusion(backdrop: Rgba, source: Rgba) -> Rgba {
    compose::blend(BlendMode::Exclusion, backdrop, source, BlendOptions::UNIT)
}

/// Blend with the "hue" mode in the unit convention.
pub fn hue(backdrop: Rgba, source: Rgba) -> Rgba {
    compose::blend(BlendMode::Hue, backdrop, source, BlendOptions::UNIT)
}

/// Blend with the "saturation" mode in the unit convention.
pub fn saturation(backdrop: Rgba, source: Rgba) -> Rgba {
    compose::blend(BlendMode::Saturation, backdrop, source, BlendOptions::UNIT)
}

/// Blend with the "color" mode in the unit convention.
pub fn color(backdrop: Rgba, source: Rgba) -> Rgba {
    compose::blend(BlendMode::Color, backdrop, source, BlendOptions::UNIT)
}

/// Blend with the "luminosity" mode in the unit convention.
pub fn luminosity(backdrop: Rgba, source: Rgba) -> Rgba {
    compose::blend(BlendMode::Luminosity, backdrop, source, BlendOptions::UNIT)
}
