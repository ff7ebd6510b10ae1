//! ChromaBlend — W3C compositing-and-blending for RGBA colors.
//!
//! Implements the 16 blend modes of
//! <https://www.w3.org/TR/compositing-1/> with alpha-aware composition.
//! Color channels default to the 8-bit range (0..255) with alpha as a
//! unit-range fraction; [`BlendOptions`] switches either end of a call to
//! unit-range channels.
//!
//! The main entry point is [`blend`]; [`eight_bit`] and [`unit`] offer
//! per-mode functions for the two fixed conventions.

pub mod compose;
pub mod eight_bit;
pub mod error;
pub mod mode;
pub mod non_separable;
pub mod options;
pub mod separable;
pub mod unit;

pub use chromablend_core::{Rgb, Rgba};
pub use compose::blend;
pub use error::BlendError;
pub use mode::{BlendMode, ChannelBlender, WholeColorBlender};
pub use options::{BlendOptions, Blender};
