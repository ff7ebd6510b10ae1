//! chromablend-core - Foundation types for color blending
//!
//! This crate provides the pieces shared by the chromablend crates:
//! - RGB/RGBA value types with untagged 8-bit/unit channel domains
//! - Channel arithmetic (restriction, rounding, domain scaling)

pub mod channel;
pub mod color;

pub use channel::{restrict, restrict_color, round_channels, snap_channels};
pub use color::{Rgb, Rgba};
