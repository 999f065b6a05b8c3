//! Error types shared by the bitstream layer and the codecs.
//!
//! Reaching the LZW table limit is a normal state, so there is no variant for it.

use thiserror::Error;

/// Failures reported by bitstream reads/writes and by the codec engines.
#[derive(Debug, Error)]
pub enum CodecError {
    /// Attempted to read past the last available bit.
    #[error("unexpected end of stream")]
    EndOfStream,

    /// The encoded data is structurally invalid.
    #[error("corrupt stream: {0}")]
    CorruptStream(String),

    /// Input the encoder cannot represent in its output format.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Attempted to write to a BitWriter after close().
    #[error("write after the bitstream was closed")]
    StreamClosed,

    /// Bit width outside 1..=32, or a value that does not fit the width.
    #[error("invalid bit width: {0}")]
    InvalidWidth(u32),

    /// The underlying source or sink failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, CodecError>;

impl From<CodecError> for std::io::Error {
    fn from(err: CodecError) -> Self {
        match err {
            CodecError::Io(e) => e,
            CodecError::EndOfStream => {
                std::io::Error::new(std::io::ErrorKind::UnexpectedEof, err.to_string())
            }
            CodecError::InvalidInput(_) => {
                std::io::Error::new(std::io::ErrorKind::InvalidInput, err.to_string())
            }
            other => std::io::Error::new(std::io::ErrorKind::InvalidData, other.to_string()),
        }
    }
}

#[cfg(test)]
mod test {
    use super::CodecError;

    #[test]
    fn io_conversion_test() {
        let e: std::io::Error = CodecError::EndOfStream.into();
        assert_eq!(e.kind(), std::io::ErrorKind::UnexpectedEof);
        let e: std::io::Error = CodecError::CorruptStream("bad".into()).into();
        assert_eq!(e.kind(), std::io::ErrorKind::InvalidData);
        let e: std::io::Error = CodecError::InvalidInput("big".into()).into();
        assert_eq!(e.kind(), std::io::ErrorKind::InvalidInput);
        assert_eq!(e.to_string(), "invalid input: big");
    }
}
