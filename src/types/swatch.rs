//! Swatch tree types.
//!
//! An `.ase` file decodes into an ordered list of `SwatchNode`s. Groups may
//! hold swatches and further groups; only swatches carry colour.

use std::fmt;

/// A node in the swatch tree.
#[derive(Debug, Clone, PartialEq)]
pub enum SwatchNode {
    Group(Group),
    Swatch(ColorSwatch),
}

impl SwatchNode {
    /// Convenience constructor for a group node.
    pub fn group(name: impl Into<String>, children: Vec<SwatchNode>) -> Self {
        Self::Group(Group::new(name, children))
    }

    /// Convenience constructor for a process swatch node.
    pub fn swatch(name: impl Into<String>, color: ColorSpec) -> Self {
        Self::Swatch(ColorSwatch::new(name, color))
    }

    /// Name of the group or swatch.
    pub fn name(&self) -> &str {
        match self {
            SwatchNode::Group(group) => &group.name,
            SwatchNode::Swatch(swatch) => &swatch.name,
        }
    }

    /// Number of swatches in this subtree.
    pub fn swatch_count(&self) -> usize {
        match self {
            SwatchNode::Group(group) => group.children.iter().map(Self::swatch_count).sum(),
            SwatchNode::Swatch(_) => 1,
        }
    }
}

/// A named container of swatches and nested groups.
///
/// The name is organisational only and never appears in output.
#[derive(Debug, Clone, PartialEq)]
pub struct Group {
    pub name: String,
    pub children: Vec<SwatchNode>,
}

impl Group {
    pub fn new(name: impl Into<String>, children: Vec<SwatchNode>) -> Self {
        Self {
            name: name.into(),
            children,
        }
    }
}

/// A single named colour.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorSwatch {
    /// Display name, free text
    pub name: String,
    pub color: ColorSpec,
    pub kind: SwatchKind,
}

impl ColorSwatch {
    /// Create a process swatch.
    pub fn new(name: impl Into<String>, color: ColorSpec) -> Self {
        Self {
            name: name.into(),
            color,
            kind: SwatchKind::Process,
        }
    }

    /// Set the swatch kind.
    pub fn with_kind(mut self, kind: SwatchKind) -> Self {
        self.kind = kind;
        self
    }
}

/// Channel values of a swatch, tagged by colour model.
///
/// Supported channels are unit-range floats as stored in the file.
#[derive(Debug, Clone, PartialEq)]
pub enum ColorSpec {
    Rgb([f32; 3]),
    Cmyk([f32; 4]),
    Gray(f32),
    /// Read but never converted.
    Lab([f32; 3]),
    /// Any model tag the reader does not recognise.
    Other { model: String, values: Vec<f32> },
}

impl ColorSpec {
    /// Model name as written in diagnostics.
    pub fn mode(&self) -> &str {
        match self {
            ColorSpec::Rgb(_) => "RGB",
            ColorSpec::Cmyk(_) => "CMYK",
            ColorSpec::Gray(_) => "Gray",
            ColorSpec::Lab(_) => "LAB",
            ColorSpec::Other { model, .. } => model,
        }
    }

    /// Channel values in file order.
    pub fn values(&self) -> &[f32] {
        match self {
            ColorSpec::Rgb(v) | ColorSpec::Lab(v) => &v[..],
            ColorSpec::Cmyk(v) => &v[..],
            ColorSpec::Gray(v) => std::slice::from_ref(v),
            ColorSpec::Other { values, .. } => values,
        }
    }
}

/// How a swatch is bound in the authoring application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SwatchKind {
    Global,
    Spot,
    #[default]
    Process,
}

impl SwatchKind {
    /// Decode the trailing kind code of a colour block.
    ///
    /// Unknown codes fall back to `Process`.
    pub fn from_code(code: u16) -> Self {
        match code {
            0 => SwatchKind::Global,
            1 => SwatchKind::Spot,
            _ => SwatchKind::Process,
        }
    }
}

impl fmt::Display for SwatchKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SwatchKind::Global => write!(f, "global"),
            SwatchKind::Spot => write!(f, "spot"),
            SwatchKind::Process => write!(f, "process"),
        }
    }
}
