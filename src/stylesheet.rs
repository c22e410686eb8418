//! Stylesheet output.
//!
//! Variables are written inside a single `:root` block, one per line, two
//! spaces deep, in flattened order.

use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use crate::convert::CssVariable;
use crate::error::{AseError, Result};

const INDENT: &str = "  ";

/// Render variables as a `:root { ... }` stylesheet.
pub fn render(vars: &[CssVariable]) -> String {
    let mut out = String::from(":root {\n");
    for var in vars {
        // Writing to a String cannot fail
        let _ = writeln!(out, "{INDENT}{var}");
    }
    out.push_str("}\n");
    out
}

/// Render and write a stylesheet in one call.
pub fn write_stylesheet(path: &Path, vars: &[CssVariable]) -> Result<()> {
    fs::write(path, render(vars)).map_err(|e| AseError::Io {
        path: path.to_path_buf(),
        message: format!("Failed to write stylesheet: {}", e),
    })
}
