use std::string::FromUtf8Error;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LsbFrameError {
    /// Represents a carrier that is too small for the frame header plus the payload
    #[error("Capacity Error: the frame requires {required} carrier bytes but only {available} are available")]
    Capacity { required: usize, available: usize },

    /// Represents a length header that could not be read from the carrier
    #[error("Format Error: message in carrier is incorrectly formatted or missing ({0})")]
    Format(FormatErrorKind),

    /// Represents a carrier access outside of the buffer, for example on a truncated carrier
    #[error("Bounds Error: carrier index {index} is out of range for a carrier of {len} bytes")]
    Bounds { index: usize, len: usize },

    /// Represents a bit depth other than the 2 bit scheme
    #[error("Unsupported bit depth: {0} bits per carrier byte")]
    UnsupportedBitDepth(u8),

    /// Represents the error of invalid UTF-8 text data found inside of a text only message
    #[error("Invalid text data found inside a message")]
    InvalidTextData(#[from] FromUtf8Error),

    /// Represents a failure to read from input.
    #[error("Read error")]
    ReadError { source: std::io::Error },

    /// Represents a failure to write target file.
    #[error("Write error")]
    WriteError { source: std::io::Error },

    #[error("No carrier file set")]
    CarrierNotSet,

    #[error("No target file set")]
    TargetNotSet,

    #[error("API Error: Missing message or data file")]
    MissingPayload,

    #[error("API Error: A message and a data file were both given, only one can be hidden")]
    AmbiguousPayload,
}

/// Why a length header was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatErrorKind {
    /// The delimiter came before any digit
    EmptyLength,
    /// A byte other than an ASCII digit was found before the delimiter
    NonDigit(u8),
    /// No delimiter within the longest header the carrier could hold
    MissingDelimiter { scanned: usize },
    /// The digits do not fit into a `usize`
    LengthOverflow,
}

impl std::fmt::Display for FormatErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FormatErrorKind::EmptyLength => write!(f, "empty length header"),
            FormatErrorKind::NonDigit(b) => write!(f, "unexpected byte 0x{b:02x} in length header"),
            FormatErrorKind::MissingDelimiter { scanned } => {
                write!(f, "no delimiter after {scanned} header bytes")
            }
            FormatErrorKind::LengthOverflow => write!(f, "length header overflows"),
        }
    }
}
