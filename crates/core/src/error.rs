use std::path::PathBuf;
use thiserror::Error;

pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

pub type Result<T> = std::result::Result<T, ClipError>;

/// Failures of a clipping run, one variant per stage.
#[derive(Error, Debug)]
pub enum ClipError {
    /// The input point cloud could not be opened or its header parsed.
    #[error("cannot open point source \"{}\": {source}", .path.display())]
    SourceUnavailable { path: PathBuf, source: BoxError },

    /// The output could not be created, or a write/finalize on it failed.
    #[error("cannot write point destination \"{}\": {source}", .path.display())]
    DestinationUnwritable { path: PathBuf, source: BoxError },

    /// The polygon source could not be parsed or holds no usable polygon.
    #[error("malformed geometry in \"{}\": {reason}", .path.display())]
    MalformedGeometry { path: PathBuf, reason: String },

    /// A point could not be decoded mid-stream.
    #[error("point stream corrupt at point {index}: {source}")]
    StreamCorruption { index: u64, source: BoxError },

    /// Contract violation by the caller, such as writing after close.
    #[error("invalid use: {0}")]
    InvalidUse(&'static str),

    /// The run was cancelled between two chunks.
    #[error("interrupted after {processed} points")]
    Interrupted { processed: u64 },
}

#[cfg(test)]
mod tests {
    use super::ClipError;
    use std::error::Error as _;
    use std::io;

    #[test]
    fn messages_name_the_stage() {
        let err = ClipError::SourceUnavailable {
            path: "in.las".into(),
            source: Box::new(io::Error::new(io::ErrorKind::NotFound, "gone")),
        };
        assert_eq!(err.to_string(), "cannot open point source \"in.las\": gone");
        assert!(err.source().is_some());

        let err = ClipError::StreamCorruption {
            index: 42,
            source: Box::new(io::Error::new(io::ErrorKind::UnexpectedEof, "eof")),
        };
        assert!(err.to_string().contains("point 42"));

        let err = ClipError::InvalidUse("write after close");
        assert_eq!(err.to_string(), "invalid use: write after close");
    }
}
