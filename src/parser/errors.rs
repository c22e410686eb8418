//! Low-level reader errors.
//!
//! `ParseError` is the nom error type for every combinator in the reader. It
//! only knows how much input was left when it fired; `into_ase_error` turns
//! that back into a byte offset once the whole buffer is known.

use nom::error::ErrorKind;
use thiserror::Error;

use crate::error::AseError;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("missing ASEF signature")]
    InvalidSignature,
    #[error("name is not valid UTF-16")]
    InvalidName,
    #[error("block 0x{block_type:04X} is shorter than its contents")]
    BlockOverrun { block_type: u16 },
    #[error("unexpected data ({kind:?})")]
    Nom { kind: ErrorKind, remaining: usize },
}

pub type ParseResult<'a, O> = nom::IResult<&'a [u8], O, ParseError>;

impl nom::error::ParseError<&[u8]> for ParseError {
    fn from_error_kind(input: &[u8], kind: ErrorKind) -> Self {
        ParseError::Nom {
            kind,
            remaining: input.len(),
        }
    }

    fn append(_input: &[u8], _kind: ErrorKind, other: Self) -> Self {
        other
    }
}

impl ParseError {
    /// Convert to the crate error, given the length of the full buffer.
    pub fn into_ase_error(self, total: usize) -> AseError {
        let help = match &self {
            ParseError::InvalidSignature => {
                Some("Only Adobe Swatch Exchange (.ase) files are supported".to_string())
            }
            ParseError::InvalidName => None,
            ParseError::BlockOverrun { .. } | ParseError::Nom { .. } => {
                Some("The file may be truncated; try exporting it again".to_string())
            }
        };
        let message = match self {
            ParseError::Nom {
                kind: ErrorKind::Eof,
                remaining,
            } => format!("unexpected end of data at byte {}", total.saturating_sub(remaining)),
            ParseError::Nom { kind, remaining } => format!(
                "unexpected data at byte {} ({:?})",
                total.saturating_sub(remaining),
                kind
            ),
            other => other.to_string(),
        };
        AseError::Parse { message, help }
    }
}

/// Flatten a nom result error into a crate error.
pub(crate) fn convert_err(err: nom::Err<ParseError>, total: usize) -> AseError {
    match err {
        nom::Err::Error(e) | nom::Err::Failure(e) => e.into_ase_error(total),
        nom::Err::Incomplete(_) => AseError::Parse {
            message: "unexpected end of data".to_string(),
            help: None,
        },
    }
}
