//! Big-endian scalar readers and the UTF-16 name field.

use nom::number::complete::{be_f32, be_u16, be_u32};

use super::errors::{ParseError, ParseResult};

pub type Word = u16;
pub type Dword = u32;

pub fn word(input: &[u8]) -> ParseResult<'_, Word> {
    be_u16(input)
}

pub fn dword(input: &[u8]) -> ParseResult<'_, Dword> {
    be_u32(input)
}

pub fn float(input: &[u8]) -> ParseResult<'_, f32> {
    be_f32(input)
}

/// Read `N` consecutive floats.
pub fn floats<const N: usize>(input: &[u8]) -> ParseResult<'_, [f32; N]> {
    let mut values = [0.0f32; N];
    let mut input = input;
    for slot in values.iter_mut() {
        let (rest, value) = float(input)?;
        *slot = value;
        input = rest;
    }
    Ok((input, values))
}

/// Read a name: a unit count followed by that many UTF-16BE code units.
///
/// The count includes the terminating NUL; trailing NULs are dropped.
pub fn parse_name(input: &[u8]) -> ParseResult<'_, String> {
    let (mut input, units) = word(input)?;
    let mut raw = Vec::with_capacity(usize::from(units).min(input.len() / 2));
    for _ in 0..units {
        let (rest, unit) = word(input)?;
        raw.push(unit);
        input = rest;
    }
    while raw.last() == Some(&0) {
        raw.pop();
    }
    let name = String::from_utf16(&raw).map_err(|_| nom::Err::Failure(ParseError::InvalidName))?;
    Ok((input, name))
}
