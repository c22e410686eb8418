//! Convert command implementation.
//!
//! Reads an `.ase` file, flattens it, and writes the stylesheet. The output
//! file is only touched once parsing and conversion have succeeded.

use std::path::PathBuf;

use crate::convert::flatten_report;
use crate::error::{AseError, Result};
use crate::output::{display_path, plural, Printer};
use crate::parser::parse_file;
use crate::stylesheet::write_stylesheet;

#[derive(Debug, Clone)]
pub struct ConvertArgs {
    pub input: PathBuf,
    pub output: PathBuf,
}

/// Counts from a finished conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConvertSummary {
    pub variables: usize,
    pub skipped: usize,
}

pub fn run(args: &ConvertArgs, printer: &Printer) -> Result<ConvertSummary> {
    if !args.input.exists() {
        return Err(AseError::InputNotFound {
            path: args.input.clone(),
        });
    }

    let nodes = parse_file(&args.input)?;
    let flattened = flatten_report(&nodes);

    for skipped in &flattened.skipped {
        printer.warning(
            "Skipped",
            &format!("'{}' ({} has no RGB conversion)", skipped.name, skipped.mode),
        );
    }

    write_stylesheet(&args.output, &flattened.variables)?;

    let summary = ConvertSummary {
        variables: flattened.variables.len(),
        skipped: flattened.skipped.len(),
    };
    printer.success(
        "Converted",
        &format!(
            "{} -> {} ({})",
            display_path(&args.input),
            display_path(&args.output),
            plural(summary.variables, "variable", "variables")
        ),
    );

    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    // ASEF v1.0, one block: Gray swatch "Mid" = 0.5
    fn single_gray_file() -> Vec<u8> {
        let mut data = b"ASEF".to_vec();
        data.extend_from_slice(&[0, 1, 0, 0, 0, 0, 0, 1]);
        let mut body = vec![0, 4];
        for unit in "Mid\0".encode_utf16() {
            body.extend_from_slice(&unit.to_be_bytes());
        }
        body.extend_from_slice(b"Gray");
        body.extend_from_slice(&0.5f32.to_be_bytes());
        body.extend_from_slice(&[0, 2]);
        data.extend_from_slice(&[0x00, 0x01]);
        data.extend_from_slice(&(body.len() as u32).to_be_bytes());
        data.extend(body);
        data
    }

    #[test]
    fn test_convert_writes_stylesheet() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("grey.ase");
        let output = dir.path().join("grey.css");
        fs::write(&input, single_gray_file()).unwrap();

        let args = ConvertArgs {
            input,
            output: output.clone(),
        };
        let summary = run(&args, &Printer::quiet()).unwrap();

        assert_eq!(summary, ConvertSummary { variables: 1, skipped: 0 });
        assert_eq!(
            fs::read_to_string(&output).unwrap(),
            ":root {\n  --mid: rgb(127, 127, 127);\n}\n"
        );
    }

    #[test]
    fn test_missing_input_writes_nothing() {
        let dir = tempdir().unwrap();
        let output = dir.path().join("out.css");
        let args = ConvertArgs {
            input: dir.path().join("missing.ase"),
            output: output.clone(),
        };

        let err = run(&args, &Printer::quiet()).unwrap_err();
        assert!(matches!(err, AseError::InputNotFound { .. }));
        assert_eq!(err.exit_code(), 2);
        assert!(!output.exists());
    }

    #[test]
    fn test_parse_failure_writes_nothing() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("broken.ase");
        let output = dir.path().join("out.css");
        fs::write(&input, b"not a swatch file").unwrap();

        let args = ConvertArgs {
            input,
            output: output.clone(),
        };
        let err = run(&args, &Printer::quiet()).unwrap_err();
        assert!(matches!(err, AseError::Parse { .. }));
        assert_eq!(err.exit_code(), 3);
        assert!(!output.exists());
    }
}
