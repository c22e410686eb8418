//! Swatch tree flattening and colour conversion.
//!
//! Walks the tree depth-first in file order. A group's place in its parent is
//! taken by its flattened children; each swatch becomes one `CssVariable`.
//! Swatches in a model with no RGB conversion (Lab, unknown tags) are left
//! out without stopping the walk.

use std::fmt;

use crate::types::{ColorSpec, ColorSwatch, Rgb, SwatchNode};

/// A CSS custom property holding an RGB colour.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CssVariable {
    /// Property name without the leading `--`
    pub identifier: String,
    pub rgb: Rgb,
}

impl CssVariable {
    pub fn new(identifier: impl Into<String>, rgb: Rgb) -> Self {
        Self {
            identifier: identifier.into(),
            rgb,
        }
    }
}

impl fmt::Display for CssVariable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "--{}: {};", self.identifier, self.rgb)
    }
}

/// A swatch that produced no variable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedSwatch {
    pub name: String,
    pub mode: String,
}

/// Result of a flattening pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Flattened {
    pub variables: Vec<CssVariable>,
    pub skipped: Vec<SkippedSwatch>,
}

/// Flatten a swatch tree into CSS variables.
pub fn flatten(nodes: &[SwatchNode]) -> Vec<CssVariable> {
    flatten_report(nodes).variables
}

/// Flatten a swatch tree, also recording the swatches that were left out.
pub fn flatten_report(nodes: &[SwatchNode]) -> Flattened {
    let mut out = Flattened::default();
    walk(nodes, &mut out);
    out
}

fn walk(nodes: &[SwatchNode], out: &mut Flattened) {
    for node in nodes {
        match node {
            SwatchNode::Group(group) => walk(&group.children, out),
            SwatchNode::Swatch(swatch) => match convert_swatch(swatch) {
                Some(var) => out.variables.push(var),
                None => out.skipped.push(SkippedSwatch {
                    name: swatch.name.clone(),
                    mode: swatch.color.mode().to_string(),
                }),
            },
        }
    }
}

/// Convert one swatch, or `None` if its model has no RGB conversion.
pub fn convert_swatch(swatch: &ColorSwatch) -> Option<CssVariable> {
    let rgb = swatch.color.to_rgb()?;
    Some(CssVariable::new(css_identifier(&swatch.name), rgb))
}

/// Derive a property name: lowercase, spaces become hyphens.
///
/// Only the space character is replaced; other whitespace and punctuation
/// pass through.
pub fn css_identifier(name: &str) -> String {
    name.to_lowercase().replace(' ', "-")
}

impl ColorSpec {
    /// Convert to 8-bit RGB by truncation.
    ///
    /// CMYK uses the uncalibrated `255 * (1 - ink) * (1 - k)` approximation,
    /// which is not colour managed and will not match print output.
    pub fn to_rgb(&self) -> Option<Rgb> {
        match *self {
            ColorSpec::Rgb([r, g, b]) => Some(Rgb::from_unit(r.into(), g.into(), b.into())),
            ColorSpec::Cmyk([c, m, y, k]) => {
                let (c, m, y, k) = (f64::from(c), f64::from(m), f64::from(y), f64::from(k));
                Some(Rgb::from_scaled(
                    255.0 * (1.0 - c) * (1.0 - k),
                    255.0 * (1.0 - m) * (1.0 - k),
                    255.0 * (1.0 - y) * (1.0 - k),
                ))
            }
            ColorSpec::Gray(v) => {
                let v = f64::from(v);
                Some(Rgb::from_unit(v, v, v))
            }
            ColorSpec::Lab(_) | ColorSpec::Other { .. } => None,
        }
    }
}
