//! Convention tests: unit/8-bit channel domains, output rounding and the
//! serde wire surface, exercised across the crate boundary.

use chromablend::{blend, eight_bit, unit, BlendMode, BlendOptions, Blender, Rgba};
use chromablend_core::snap_channels;

const BACKDROP: Rgba = Rgba::new(250.0, 200.0, 0.0, 0.6);
const SOURCE: Rgba = Rgba::new(50.0, 150.0, 75.0, 0.4);

// ── Output rounding ────────────────────────────────────────────

#[test]
fn unrounded_output_is_snapped_to_nine_decimals() {
    let options = BlendOptions {
        round_output: false,
        ..BlendOptions::EIGHT_BIT
    };
    let out = blend(BlendMode::Normal, BACKDROP, SOURCE, options);
    // 2750/19, 3300/19 and 750/19 snapped at the ninth decimal.
    assert!((out.r - 144.736842105).abs() < 1e-9);
    assert!((out.g - 173.684210526).abs() < 1e-9);
    assert!((out.b - 39.473684211).abs() < 1e-9);
    assert_eq!(out.a, 0.76);
}

#[test]
fn rounded_output_rounds_to_whole_channels() {
    let out = blend(BlendMode::Normal, BACKDROP, SOURCE, BlendOptions::EIGHT_BIT);
    assert_eq!(out, Rgba::new(145.0, 174.0, 39.0, 0.76));
}

// ── Unit domain ────────────────────────────────────────────────

#[test]
fn unit_input_matches_prescaled_eight_bit_input() {
    let options = BlendOptions {
        unit_input: true,
        ..BlendOptions::EIGHT_BIT
    };
    let out = blend(
        BlendMode::Multiply,
        BACKDROP.to_unit(),
        SOURCE.to_unit(),
        options,
    );
    assert_eq!(
        out,
        blend(BlendMode::Multiply, BACKDROP, SOURCE, BlendOptions::EIGHT_BIT)
    );
}

#[test]
fn unit_output_is_the_unrounded_result_scaled_down() {
    for mode in BlendMode::ALL {
        let unit_out = blend(mode, BACKDROP.to_unit(), SOURCE.to_unit(), BlendOptions::UNIT);
        let eight_bit_out = blend(mode, BACKDROP, SOURCE, BlendOptions::EIGHT_BIT);
        let rescaled = snap_channels(unit_out.from_unit());
        assert_eq!(rescaled.r.round(), eight_bit_out.r, "mode {}", mode);
        assert_eq!(rescaled.g.round(), eight_bit_out.g, "mode {}", mode);
        assert_eq!(rescaled.b.round(), eight_bit_out.b, "mode {}", mode);
        assert_eq!(unit_out.a, eight_bit_out.a, "mode {}", mode);
    }
}

#[test]
fn unit_convention_blends_half_transparent_primaries() {
    let out = unit::normal(
        Rgba::new(1.0, 0.0, 0.0, 0.5),
        Rgba::new(0.0, 1.0, 0.0, 0.5),
    );
    assert!((out.r - 1.0 / 3.0).abs() < 1e-3);
    assert!((out.g - 2.0 / 3.0).abs() < 1e-3);
    assert!((out.b - 0.0).abs() < 1e-3);
    assert_eq!(out.a, 0.75);
}

#[test]
fn unrounded_half_transparent_primaries_keep_fractions() {
    let options = BlendOptions {
        round_output: false,
        ..BlendOptions::EIGHT_BIT
    };
    let out = blend(
        BlendMode::Normal,
        Rgba::new(150.0, 0.0, 0.0, 0.5),
        Rgba::new(0.0, 250.0, 0.0, 0.5),
        options,
    );
    assert!((out.r - 50.0).abs() < 1e-3);
    assert!((out.g - 166.667).abs() < 1e-3);
    assert!((out.b - 0.0).abs() < 1e-3);
    assert_eq!(out.a, 0.75);
}

#[test]
fn overlay_is_hard_light_with_layers_swapped() {
    let backdrop = Rgba::new(250.0, 200.0, 0.0, 1.0);
    let source = Rgba::new(50.0, 150.0, 75.0, 1.0);
    assert_eq!(
        blend(BlendMode::Overlay, backdrop, source, BlendOptions::EIGHT_BIT),
        blend(BlendMode::HardLight, source, backdrop, BlendOptions::EIGHT_BIT)
    );
}

#[test]
fn unit_output_stays_in_unit_range() {
    let out = blend(
        BlendMode::ColorDodge,
        BACKDROP.to_unit(),
        SOURCE.to_unit(),
        BlendOptions::UNIT,
    );
    for channel in [out.r, out.g, out.b, out.a] {
        assert!((0.0..=1.0).contains(&channel), "channel {}", channel);
    }
}

// ── Per-mode entry points ──────────────────────────────────────

#[test]
fn eight_bit_module_matches_enum_dispatch() {
    let pairs: [(fn(Rgba, Rgba) -> Rgba, BlendMode); 16] = [
        (eight_bit::normal, BlendMode::Normal),
        (eight_bit::multiply, BlendMode::Multiply),
        (eight_bit::screen, BlendMode::Screen),
        (eight_bit::overlay, BlendMode::Overlay),
        (eight_bit::darken, BlendMode::Darken),
        (eight_bit::lighten, BlendMode::Lighten),
        (eight_bit::color_dodge, BlendMode::ColorDodge),
        (eight_bit::color_burn, BlendMode::ColorBurn),
        (eight_bit::hard_light, BlendMode::HardLight),
        (eight_bit::soft_light, BlendMode::SoftLight),
        (eight_bit::difference, BlendMode::Difference),
        (eight_bit::exclusion, BlendMode::Exclusion),
        (eight_bit::hue, BlendMode::Hue),
        (eight_bit::saturation, BlendMode::Saturation),
        (eight_bit::color, BlendMode::Color),
        (eight_bit::luminosity, BlendMode::Luminosity),
    ];
    for (entry, mode) in pairs {
        assert_eq!(
            entry(BACKDROP, SOURCE),
            blend(mode, BACKDROP, SOURCE, BlendOptions::EIGHT_BIT),
            "mode {}",
            mode
        );
    }
}

#[test]
fn unit_module_uses_the_unit_convention() {
    let out = unit::screen(BACKDROP.to_unit(), SOURCE.to_unit());
    assert_eq!(
        out,
        blend(
            BlendMode::Screen,
            BACKDROP.to_unit(),
            SOURCE.to_unit(),
            BlendOptions::UNIT
        )
    );
}

#[test]
fn blender_carries_one_convention_across_calls() {
    let blender = Blender::new(BlendOptions::EIGHT_BIT);
    for mode in BlendMode::ALL {
        assert_eq!(
            blender.blend(mode, BACKDROP, SOURCE),
            blend(mode, BACKDROP, SOURCE, BlendOptions::EIGHT_BIT)
        );
    }
}

// ── Wire surface ───────────────────────────────────────────────

#[test]
fn modes_parse_from_their_wire_names() {
    for name in [
        "normal",
        "multiply",
        "screen",
        "overlay",
        "darken",
        "lighten",
        "colorDodge",
        "colorBurn",
        "hardLight",
        "softLight",
        "difference",
        "exclusion",
        "hue",
        "saturation",
        "color",
        "luminosity",
    ] {
        let mode: BlendMode = name.parse().unwrap();
        assert_eq!(mode.name(), name);
    }
}

#[test]
fn colors_serialize_as_plain_channel_objects() {
    let json = serde_json::to_string(&BACKDROP).unwrap();
    assert_eq!(json, r#"{"r":250.0,"g":200.0,"b":0.0,"a":0.6}"#);
    let back: Rgba = serde_json::from_str(&json).unwrap();
    assert_eq!(back, BACKDROP);
}

#[test]
fn a_blend_request_deserializes_end_to_end() {
    let request = r#"{
        "mode": "softLight",
        "options": { "unitInput": false, "unitOutput": false, "roundOutput": true }
    }"#;
    #[derive(serde::Deserialize)]
    struct Request {
        mode: BlendMode,
        options: BlendOptions,
    }
    let request: Request = serde_json::from_str(request).unwrap();
    let out = blend(request.mode, BACKDROP, SOURCE, request.options);
    assert_eq!(out, Rgba::new(207.0, 191.0, 16.0, 0.76));
}
