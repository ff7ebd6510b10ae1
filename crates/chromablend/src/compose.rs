//! The blend pipeline: channel domain handling, kernel dispatch and
//! alpha-aware composition.
//!
//! Kernels work on unit-range values while composition works on 8-bit-range
//! channels, so the pipeline converts at the kernel boundary and again at the
//! edges when the caller asked for unit conventions.

use chromablend_core::{restrict_color, round_channels, snap_channels, Rgb, Rgba};

use crate::mode::{BlendMode, ChannelBlender, Kernel, WholeColorBlender};
use crate::options::BlendOptions;

/// Blend `source` over `backdrop` with the given mode and conventions.
///
/// Inputs are restricted to their channel boundaries before blending, so
/// out-of-range and NaN channels never reach a kernel.
pub fn blend(mode: BlendMode, backdrop: Rgba, source: Rgba, options: BlendOptions) -> Rgba {
    let (backdrop, source) = if options.unit_input {
        (backdrop.from_unit(), source.from_unit())
    } else {
        (backdrop, source)
    };

    let backdrop = restrict_color(backdrop);
    let source = restrict_color(source);

    let composite_alpha = source.a + backdrop.a - source.a * backdrop.a;

    let composite = match mode.kernel() {
        Kernel::Channel(f) => separable_blend(backdrop.rgb(), source.rgb(), f),
        Kernel::Whole(f) => non_separable_blend(backdrop.rgb(), source.rgb(), f),
    };

    // Kernels may overshoot the channel range, so restrict once more after
    // composition.
    let result = restrict_color(Rgba {
        r: alpha_compose(
            backdrop.a,
            source.a,
            composite_alpha,
            backdrop.r,
            source.r,
            composite.r,
        ),
        g: alpha_compose(
            backdrop.a,
            source.a,
            composite_alpha,
            backdrop.g,
            source.g,
            composite.g,
        ),
        b: alpha_compose(
            backdrop.a,
            source.a,
            composite_alpha,
            backdrop.b,
            source.b,
            composite.b,
        ),
        a: composite_alpha,
    });

    if options.unit_output {
        result.to_unit()
    } else if options.round_output {
        round_channels(result, 0)
    } else {
        snap_channels(result)
    }
}

/// Apply a per-channel kernel to 8-bit-range colors.
fn separable_blend(backdrop: Rgb, source: Rgb, kernel: ChannelBlender) -> Rgb {
    Rgb {
        r: kernel(backdrop.r / 255.0, source.r / 255.0) * 255.0,
        g: kernel(backdrop.g / 255.0, source.g / 255.0) * 255.0,
        b: kernel(backdrop.b / 255.0, source.b / 255.0) * 255.0,
    }
}

/// Apply a whole-color kernel to 8-bit-range colors.
fn non_separable_blend(backdrop: Rgb, source: Rgb, kernel: WholeColorBlender) -> Rgb {
    kernel(backdrop.to_unit(), source.to_unit()).from_unit()
}

/// Weigh a blended channel against backdrop and source per the W3C
/// compositing formula, with the blended contribution rounded to a whole
/// 8-bit value.
///
/// When both input alphas are 0 the alpha ratio is NaN; `restrict_color`
/// downstream maps that to 0, making the result transparent black.
fn alpha_compose(
    backdrop_alpha: f64,
    source_alpha: f64,
    composite_alpha: f64,
    backdrop_channel: f64,
    source_channel: f64,
    composite_channel: f64,
) -> f64 {
    (1.0 - source_alpha / composite_alpha) * backdrop_channel
        + (source_alpha / composite_alpha)
            * ((1.0 - backdrop_alpha) * source_channel + backdrop_alpha * composite_channel)
                .round()
}
