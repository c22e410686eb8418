//! Block-level reader.
//!
//! Every block is `u16 type, u32 length, body`. The body is sliced out by its
//! length first, so a malformed body never desynchronises the next block.

use nom::bytes::complete::take;

use crate::types::{ColorSpec, ColorSwatch, SwatchKind};

use super::errors::{ParseError, ParseResult};
use super::scalars::{dword, float, floats, parse_name, word, Word};

pub const GROUP_START: Word = 0xC001;
pub const GROUP_END: Word = 0xC002;
pub const COLOR_ENTRY: Word = 0x0001;

/// A decoded block.
#[derive(Debug, Clone, PartialEq)]
pub enum Block {
    GroupStart { name: String },
    GroupEnd,
    Color(ColorSwatch),
    /// Block type this reader does not know; its body is skipped.
    Unknown { block_type: Word },
}

pub fn parse_block(input: &[u8]) -> ParseResult<'_, Block> {
    let (input, block_type) = word(input)?;
    let (input, length) = dword(input)?;
    let (rest, body) = take(length)(input)?;

    let block = match block_type {
        GROUP_START => {
            let name = within_block(parse_name(body), block_type)?;
            Block::GroupStart { name }
        }
        GROUP_END => Block::GroupEnd,
        COLOR_ENTRY => Block::Color(within_block(parse_color_entry(body), block_type)?),
        other => Block::Unknown { block_type: other },
    };

    Ok((rest, block))
}

/// Parse the body of a colour entry block.
pub fn parse_color_entry(input: &[u8]) -> ParseResult<'_, ColorSwatch> {
    let (input, name) = parse_name(input)?;
    let (input, model) = take(4usize)(input)?;

    let (input, color) = match model {
        b"RGB " => {
            let (input, values) = floats::<3>(input)?;
            (input, ColorSpec::Rgb(values))
        }
        b"CMYK" => {
            let (input, values) = floats::<4>(input)?;
            (input, ColorSpec::Cmyk(values))
        }
        b"Gray" => {
            let (input, value) = float(input)?;
            (input, ColorSpec::Gray(value))
        }
        b"LAB " => {
            let (input, values) = floats::<3>(input)?;
            (input, ColorSpec::Lab(values))
        }
        other => {
            // Unknown model: everything up to the trailing kind word is channels
            let channels = input.len().saturating_sub(2) / 4;
            let mut values = Vec::with_capacity(channels);
            let mut input = input;
            for _ in 0..channels {
                let (rest, value) = float(input)?;
                values.push(value);
                input = rest;
            }
            let model = String::from_utf8_lossy(other).trim_end().to_string();
            (input, ColorSpec::Other { model, values })
        }
    };

    let (input, kind) = word(input)?;

    Ok((
        input,
        ColorSwatch::new(name, color).with_kind(SwatchKind::from_code(kind)),
    ))
}

/// Run a body parser; running out of body is an overrun of the block.
fn within_block<O>(result: ParseResult<'_, O>, block_type: Word) -> Result<O, nom::Err<ParseError>> {
    match result {
        Ok((_, value)) => Ok(value),
        Err(nom::Err::Error(_)) | Err(nom::Err::Incomplete(_)) => {
            Err(nom::Err::Failure(ParseError::BlockOverrun { block_type }))
        }
        Err(failure) => Err(failure),
    }
}
