//! Blend conventions: input/output channel domains and output rounding.

use chromablend_core::Rgba;
use serde::{Deserialize, Serialize};

use crate::compose;
use crate::mode::BlendMode;

/// How a blend call interprets its inputs and presents its output.
///
/// Every blend call takes its options explicitly; there is no process-wide
/// setting to mutate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BlendOptions {
    /// Inputs carry unit-range (0..1) color channels instead of 8-bit ones.
    pub unit_input: bool,
    /// The output carries unit-range color channels instead of 8-bit ones.
    pub unit_output: bool,
    /// Round 8-bit output channels to whole values. Ignored when
    /// `unit_output` is set; when neither applies, channels are still
    /// snapped to 9 decimals to collapse IEEE 754 noise.
    pub round_output: bool,
}

impl BlendOptions {
    /// 8-bit channels in and out, output rounded to whole values.
    pub const EIGHT_BIT: Self = Self {
        unit_input: false,
        unit_output: false,
        round_output: true,
    };

    /// Unit-range channels in and out, output unrounded.
    pub const UNIT: Self = Self {
        unit_input: true,
        unit_output: true,
        round_output: false,
    };
}

impl Default for BlendOptions {
    fn default() -> Self {
        Self::EIGHT_BIT
    }
}

/// A blend entry point carrying a fixed set of options, for callers that
/// blend many colors under one convention.
#[derive(Debug, Clone, Copy, Default)]
pub struct Blender {
    pub options: BlendOptions,
}

impl Blender {
    /// Create a blender with the given options.
    pub const fn new(options: BlendOptions) -> Self {
        Self { options }
    }

    /// Blend `source` over `backdrop` under this blender's convention.
    pub fn blend(&self, mode: BlendMode, backdrop: Rgba, source: Rgba) -> Rgba {
        compose::blend(mode, backdrop, source, self.options)
    }
}
