//! Core domain types for ase2css.
//!
//! - `Rgb` - 8-bit RGB triple written into the stylesheet
//! - `SwatchNode` - tree of groups and swatches read from an `.ase` file
//! - `ColorSpec` - a swatch's channel values, tagged by colour model

mod colour;
mod swatch;

pub use colour::Rgb;
pub use swatch::{ColorSpec, ColorSwatch, Group, SwatchKind, SwatchNode};
