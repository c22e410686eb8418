//! ase2css - Adobe Swatch Exchange to CSS custom properties
//!
//! Reads an `.ase` palette, flattens its group tree, converts every swatch to
//! an 8-bit RGB triple and writes the result as `--name: rgb(r, g, b);`
//! declarations inside a `:root` block.

pub mod cli;
pub mod convert;
pub mod error;
pub mod output;
pub mod parser;
pub mod stylesheet;
pub mod types;

pub use convert::{css_identifier, flatten, flatten_report, CssVariable, Flattened, SkippedSwatch};
pub use error::{AseError, Result};
pub use parser::{parse_bytes, parse_file};
pub use stylesheet::{render, write_stylesheet};
pub use types::{ColorSpec, ColorSwatch, Group, Rgb, SwatchKind, SwatchNode};
