//! The blend mode catalogue and its kernel dispatch.

use std::fmt;
use std::str::FromStr;

use chromablend_core::{Rgb, Rgba};
use serde::{Deserialize, Serialize};

use crate::error::BlendError;
use crate::options::BlendOptions;
use crate::{compose, non_separable, separable};

/// A separable kernel: blends one backdrop/source channel pair in the unit
/// range.
pub type ChannelBlender = fn(f64, f64) -> f64;

/// A non-separable kernel: blends whole unit-range colors.
pub type WholeColorBlender = fn(Rgb, Rgb) -> Rgb;

/// How a mode's kernel consumes its inputs.
pub(crate) enum Kernel {
    Channel(ChannelBlender),
    Whole(WholeColorBlender),
}

/// The W3C compositing-and-blending blend modes.
///
/// Serialized names use the camelCase spelling of the CSS keywords
/// ("colorDodge", "hardLight"), matching `name` and `FromStr`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum BlendMode {
    Normal,
    Multiply,
    Screen,
    Overlay,
    Darken,
    Lighten,
    ColorDodge,
    ColorBurn,
    HardLight,
    SoftLight,
    Difference,
    Exclusion,
    Hue,
    Saturation,
    Color,
    Luminosity,
}

impl BlendMode {
    /// All modes, in spec order: the 12 separable ones first, then the 4
    /// non-separable ones.
    pub const ALL: [Self; 16] = [
        Self::Normal,
        Self::Multiply,
        Self::Screen,
        Self::Overlay,
        Self::Darken,
        Self::Lighten,
        Self::ColorDodge,
        Self::ColorBurn,
        Self::HardLight,
        Self::SoftLight,
        Self::Difference,
        Self::Exclusion,
        Self::Hue,
        Self::Saturation,
        Self::Color,
        Self::Luminosity,
    ];

    /// Blend `source` over `backdrop` with this mode.
    pub fn apply(self, backdrop: Rgba, source: Rgba, options: BlendOptions) -> Rgba {
        compose::blend(self, backdrop, source, options)
    }

    /// Whether this mode blends each channel independently.
    pub fn is_separable(self) -> bool {
        matches!(self.kernel(), Kernel::Channel(_))
    }

    /// The mode's camelCase wire name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::Multiply => "multiply",
            Self::Screen => "screen",
            Self::Overlay => "overlay",
            Self::Darken => "darken",
            Self::Lighten => "lighten",
            Self::ColorDodge => "colorDodge",
            Self::ColorBurn => "colorBurn",
            Self::HardLight => "hardLight",
            Self::SoftLight => "softLight",
            Self::Difference => "difference",
            Self::Exclusion => "exclusion",
            Self::Hue => "hue",
            Self::Saturation => "saturation",
            Self::Color => "color",
            Self::Luminosity => "luminosity",
        }
    }

    pub(crate) fn kernel(self) -> Kernel {
        match self {
            Self::Normal => Kernel::Channel(separable::normal),
            Self::Multiply => Kernel::Channel(separable::multiply),
            Self::Screen => Kernel::Channel(separable::screen),
            Self::Overlay => Kernel::Channel(separable::overlay),
            Self::Darken => Kernel::Channel(separable::darken),
            Self::Lighten => Kernel::Channel(separable::lighten),
            Self::ColorDodge => Kernel::Channel(separable::color_dodge),
            Self::ColorBurn => Kernel::Channel(separable::color_burn),
            Self::HardLight => Kernel::Channel(separable::hard_light),
            Self::SoftLight => Kernel::Channel(separable::soft_light),
            Self::Difference => Kernel::Channel(separable::difference),
            Self::Exclusion => Kernel::Channel(separable::exclusion),
            Self::Hue => Kernel::Whole(non_separable::hue),
            Self::Saturation => Kernel::Whole(non_separable::saturation),
            Self::Color => Kernel::Whole(non_separable::color),
            Self::Luminosity => Kernel::Whole(non_separable::luminosity),
        }
    }
}

impl fmt::Display for BlendMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for BlendMode {
    type Err = BlendError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|mode| mode.name() == s)
            .ok_or_else(|| BlendError::UnknownMode(s.to_string()))
    }
}
