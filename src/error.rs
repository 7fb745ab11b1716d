use std::path::PathBuf;

/// Structural error in a hair curve file.
///
/// Binary errors carry the byte offset of the offending record, ascii errors
/// the 1-based line number.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ParseError {
    #[error("binary hair file ends before the vertex count header (byte {offset})")]
    MissingHeader { offset: usize },

    #[error("binary hair record starting at byte {offset} is truncated")]
    TruncatedRecord { offset: usize },

    #[error("ascii hair file is not valid UTF-8 (byte {offset})")]
    InvalidUtf8 { offset: usize },

    #[error("line {line}: malformed number {token:?}")]
    MalformedNumber { line: usize, token: String },

    #[error("line {line}: expected 3 coordinates, found {found}")]
    CoordinateCount { line: usize, found: usize },
}

/// Errors that abort loading a hair file.
#[derive(Debug, thiserror::Error)]
pub enum HairError {
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse hair file {name}: {source}")]
    Parse {
        name: String,
        #[source]
        source: ParseError,
    },

    #[error("invalid hair config: {0}")]
    Config(#[from] toml::de::Error),

    #[error("hair radius must be finite and non-negative, got {0}")]
    InvalidRadius(f32),
}
