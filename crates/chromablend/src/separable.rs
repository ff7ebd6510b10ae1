//! Separable blend modes: the same curve applied to each color channel
//! independently.
//!
//! All functions take a backdrop/source channel pair in the unit range
//! (0..1) and return the blended channel. Formulas follow
//! <https://www.w3.org/TR/compositing-1/#blendingseparable>.

/// "normal": the source channel wins.
pub fn normal(_backdrop: f64, source: f64) -> f64 {
    source
}

/// "multiply": backdrop × source.
pub fn multiply(backdrop: f64, source: f64) -> f64 {
    backdrop * source
}

/// "screen": complement of multiplying the complements.
pub fn screen(backdrop: f64, source: f64) -> f64 {
    backdrop + source - backdrop * source
}

/// "overlay": hard light with the layers swapped.
pub fn overlay(backdrop: f64, source: f64) -> f64 {
    hard_light(source, backdrop)
}

/// "darken": the smaller channel.
pub fn darken(backdrop: f64, source: f64) -> f64 {
    backdrop.min(source)
}

/// "lighten": the larger channel, capped at 1.
pub fn lighten(backdrop: f64, source: f64) -> f64 {
    backdrop.max(source).min(1.0)
}

/// "color-dodge": brighten the backdrop to reflect the source.
pub fn color_dodge(backdrop: f64, source: f64) -> f64 {
    if backdrop == 0.0 {
        0.0
    } else if source == 1.0 {
        1.0
    } else {
        (backdrop / (1.0 - source)).min(1.0)
    }
}

/// "color-burn": darken the backdrop to reflect the source.
pub fn color_burn(backdrop: f64, source: f64) -> f64 {
    if backdrop == 1.0 {
        1.0
    } else if source == 0.0 {
        0.0
    } else {
        1.0 - ((1.0 - backdrop) / source).min(1.0)
    }
}

/// "hard-light": multiply or screen depending on the source channel.
pub fn hard_light(backdrop: f64, source: f64) -> f64 {
    if source <= 0.5 {
        multiply(backdrop, 2.0 * source)
    } else {
        screen(backdrop, 2.0 * source - 1.0)
    }
}

/// "soft-light": darken or lighten depending on the source channel, with a
/// polynomial ramp below backdrop 0.25 and a square root above.
pub fn soft_light(backdrop: f64, source: f64) -> f64 {
    if source <= 0.5 {
        backdrop - (1.0 - 2.0 * source) * backdrop * (1.0 - backdrop)
    } else {
        let d = if backdrop <= 0.25 {
            ((16.0 * backdrop - 12.0) * backdrop + 4.0) * backdrop
        } else {
            backdrop.sqrt()
        };
        backdrop + (2.0 * source - 1.0) * (d - backdrop)
    }
}

/// "difference": absolute distance between the channels.
pub fn difference(backdrop: f64, source: f64) -> f64 {
    (backdrop - source).abs()
}

/// "exclusion": like difference, with lower contrast.
pub fn exclusion(backdrop: f64, source: f64) -> f64 {
    backdrop + source - 2.0 * backdrop * source
}
