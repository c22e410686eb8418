use miette::Diagnostic;
use thiserror::Error;

/// Main error type for ase2css operations
#[derive(Error, Diagnostic, Debug)]
pub enum AseError {
    #[error("Input file not found: {}", .path.display())]
    #[diagnostic(
        code(ase2css::not_found),
        help("Check the path to the .ase file")
    )]
    InputNotFound { path: std::path::PathBuf },

    #[error("IO error with {}: {message}", .path.display())]
    #[diagnostic(code(ase2css::io))]
    Io {
        path: std::path::PathBuf,
        message: String,
    },

    #[error("Parse error: {message}")]
    #[diagnostic(code(ase2css::parse))]
    Parse {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Structure error: {message}")]
    #[diagnostic(code(ase2css::structure))]
    Structure {
        message: String,
        #[help]
        help: Option<String>,
    },
}

impl AseError {
    /// Process exit status for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            AseError::InputNotFound { .. } => 2,
            AseError::Parse { .. } | AseError::Structure { .. } => 3,
            AseError::Io { .. } => 1,
        }
    }
}

pub type Result<T> = std::result::Result<T, AseError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_exit_codes_are_distinct_per_kind() {
        let not_found = AseError::InputNotFound {
            path: PathBuf::from("missing.ase"),
        };
        let parse = AseError::Parse {
            message: "bad signature".to_string(),
            help: None,
        };
        let structure = AseError::Structure {
            message: "stray group end".to_string(),
            help: None,
        };
        let io = AseError::Io {
            path: PathBuf::from("out.css"),
            message: "denied".to_string(),
        };

        assert_eq!(not_found.exit_code(), 2);
        assert_eq!(parse.exit_code(), 3);
        assert_eq!(structure.exit_code(), 3);
        assert_eq!(io.exit_code(), 1);
    }

    #[test]
    fn test_not_found_message_names_path() {
        let err = AseError::InputNotFound {
            path: PathBuf::from("palettes/brand.ase"),
        };
        assert_eq!(err.to_string(), "Input file not found: palettes/brand.ase");
    }
}
