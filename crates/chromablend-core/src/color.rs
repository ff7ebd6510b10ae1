//! Color value types shared across the chromablend crates.
//!
//! Channel domains are a caller-side convention: r, g and b may hold
//! 8-bit-range values (0..255) or unit-range values (0..1) depending on the
//! pipeline stage, while alpha is always a unit-range fraction. Nothing in
//! the types tags the domain; `to_unit`/`from_unit` move between the two.

use bytemuck::{Pod, Zeroable};
use serde::{Deserialize, Serialize};

/// RGB color with 64-bit float channels.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize, Pod, Zeroable)]
#[repr(C)]
pub struct Rgb {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl Rgb {
    /// Create a new color from RGB channels.
    #[inline]
    pub const fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    /// Attach an alpha channel.
    #[inline]
    pub const fn with_alpha(self, a: f64) -> Rgba {
        Rgba {
            r: self.r,
            g: self.g,
            b: self.b,
            a,
        }
    }

    /// Scale unit-range channels (0..1) up to the 8-bit range (0..255).
    #[inline]
    pub fn from_unit(self) -> Self {
        Self {
            r: self.r * 255.0,
            g: self.g * 255.0,
            b: self.b * 255.0,
        }
    }

    /// Scale 8-bit-range channels (0..255) down to the unit range (0..1).
    #[inline]
    pub fn to_unit(self) -> Self {
        Self {
            r: self.r / 255.0,
            g: self.g / 255.0,
            b: self.b / 255.0,
        }
    }
}

/// RGBA color with 64-bit float channels. Alpha is always a fraction in 0..1.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize, Pod, Zeroable)]
#[repr(C)]
pub struct Rgba {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    pub a: f64,
}

impl Rgba {
    /// Fully transparent black; identical in both channel domains.
    pub const TRANSPARENT: Self = Self::new(0.0, 0.0, 0.0, 0.0);

    /// Create a new color from RGBA channels.
    #[inline]
    pub const fn new(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self { r, g, b, a }
    }

    /// Drop the alpha channel.
    #[inline]
    pub const fn rgb(self) -> Rgb {
        Rgb {
            r: self.r,
            g: self.g,
            b: self.b,
        }
    }

    /// Scale unit-range color channels up to the 8-bit range. Alpha passes
    /// through unchanged.
    #[inline]
    pub fn from_unit(self) -> Self {
        Self {
            r: self.r * 255.0,
            g: self.g * 255.0,
            b: self.b * 255.0,
            a: self.a,
        }
    }

    /// Scale 8-bit-range color channels down to the unit range. Alpha passes
    /// through unchanged.
    #[inline]
    pub fn to_unit(self) -> Self {
        Self {
            r: self.r / 255.0,
            g: self.g / 255.0,
            b: self.b / 255.0,
            a: self.a,
        }
    }
}
