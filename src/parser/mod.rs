//! Reader for Adobe Swatch Exchange (`.ase`) files.
//!
//! # File Structure
//!
//! All integers are big-endian.
//!
//! - Header: `ASEF`, `u16` major, `u16` minor, `u32` block count
//! - Blocks: `u16` type, `u32` body length, body
//!   - `0xC001` group start (name)
//!   - `0xC002` group end (empty)
//!   - `0x0001` colour entry (name, 4-byte model, `f32` channels, `u16` kind)
//! - Names: `u16` unit count, then UTF-16BE units ending in NUL
//!
//! Groups nest between start and end blocks. The reader decodes everything
//! into `SwatchNode`s up front, so later stages never see raw fields.
//!
//! # Usage
//!
//! ```ignore
//! use ase2css::parser::parse_file;
//!
//! let nodes = parse_file(Path::new("brand.ase"))?;
//! for node in &nodes {
//!     println!("Found: {}", node.name());
//! }
//! ```

mod block;
mod document;
mod errors;
mod scalars;

pub use block::Block;
pub use document::{parse_bytes, parse_file, parse_header, Header, SIGNATURE};
pub use errors::ParseError;
