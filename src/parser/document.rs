//! Whole-file reader: header, block loop, and group nesting.

use std::fs;
use std::path::Path;

use nom::bytes::complete::tag;

use crate::error::{AseError, Result};
use crate::types::{Group, SwatchNode};

use super::block::{parse_block, Block};
use super::errors::{convert_err, ParseError, ParseResult};
use super::scalars::{dword, word, Dword, Word};

/// File signature.
pub const SIGNATURE: &[u8; 4] = b"ASEF";

/// Fixed file header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Header {
    pub version: (Word, Word),
    pub block_count: Dword,
}

pub fn parse_header(input: &[u8]) -> ParseResult<'_, Header> {
    let (input, _) = tag(&SIGNATURE[..])(input)
        .map_err(|_: nom::Err<ParseError>| nom::Err::Failure(ParseError::InvalidSignature))?;
    let (input, major) = word(input)?;
    let (input, minor) = word(input)?;
    let (input, block_count) = dword(input)?;
    Ok((
        input,
        Header {
            version: (major, minor),
            block_count,
        },
    ))
}

/// Parse an in-memory `.ase` file into its swatch tree.
///
/// Exactly `block_count` blocks are read; trailing bytes are ignored.
pub fn parse_bytes(data: &[u8]) -> Result<Vec<SwatchNode>> {
    let (mut input, header) = parse_header(data).map_err(|e| convert_err(e, data.len()))?;

    let mut tree = TreeBuilder::default();
    for index in 0..header.block_count {
        let (rest, block) = parse_block(input).map_err(|e| convert_err(e, data.len()))?;
        input = rest;
        tree.push(block, index)?;
    }

    tree.finish()
}

/// Read and parse an `.ase` file from disk.
pub fn parse_file(path: &Path) -> Result<Vec<SwatchNode>> {
    let data = fs::read(path).map_err(|e| AseError::Io {
        path: path.to_path_buf(),
        message: format!("Failed to read file: {}", e),
    })?;
    parse_bytes(&data)
}

/// Assembles the flat block stream into nested nodes.
#[derive(Debug, Default)]
struct TreeBuilder {
    roots: Vec<SwatchNode>,
    open: Vec<Group>,
}

impl TreeBuilder {
    fn push(&mut self, block: Block, index: Dword) -> Result<()> {
        match block {
            Block::GroupStart { name } => self.open.push(Group::new(name, Vec::new())),
            Block::GroupEnd => {
                let group = self.open.pop().ok_or_else(|| AseError::Structure {
                    message: format!("group end at block {} has no matching group start", index),
                    help: None,
                })?;
                self.attach(SwatchNode::Group(group));
            }
            Block::Color(swatch) => self.attach(SwatchNode::Swatch(swatch)),
            Block::Unknown { .. } => {}
        }
        Ok(())
    }

    fn attach(&mut self, node: SwatchNode) {
        match self.open.last_mut() {
            Some(parent) => parent.children.push(node),
            None => self.roots.push(node),
        }
    }

    fn finish(self) -> Result<Vec<SwatchNode>> {
        if let Some(group) = self.open.last() {
            return Err(AseError::Structure {
                message: format!("group '{}' is never closed", group.name),
                help: Some("Each group start block needs a matching group end".to_string()),
            });
        }
        Ok(self.roots)
    }
}
