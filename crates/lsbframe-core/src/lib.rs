//! # lsbframe core API
//!
//! Hides a payload in the two least significant bits of a raw carrier buffer and
//! reads it back. The carrier is treated as an opaque byte array, there is no
//! awareness of image headers or any other file format.
//!
//! - [`bit_plane`] spreads one payload byte over four carrier bytes
//! - [`frame`] places a length prefixed frame in the second half of the carrier
//! - [`api`] works on files instead of buffers
//!
//! # Usage Examples
//!
//! ## Hide and unveil a message in a buffer
//!
//! ```rust
//! let mut carrier = vec![0_u8; 1000];
//!
//! lsbframe_core::encode(&mut carrier, b"hi").expect("Carrier is too small");
//! let secret = lsbframe_core::decode(&carrier).expect("No message found");
//!
//! assert_eq!(secret, b"hi");
//! ```
//!
//! ## Hide a message inside a file
//!
//! ```rust
//! use tempfile::tempdir;
//!
//! let temp_dir = tempdir().expect("Failed to create temporary directory");
//! let carrier = temp_dir.path().join("carrier.png");
//! std::fs::write(&carrier, vec![0xaa; 4096]).expect("Failed to write carrier");
//!
//! lsbframe_core::api::hide::prepare()
//!     .with_message("Hello, World!")
//!     .with_carrier(&carrier)
//!     .with_output(temp_dir.path().join("carrier-with-a-message.png"))
//!     .execute()
//!     .expect("Failed to hide message in carrier");
//! ```

#![warn(clippy::redundant_else)]

pub mod api;
pub mod bit_plane;
pub mod error;
pub mod frame;
pub mod frame_options;
pub mod result;

pub use crate::error::{FormatErrorKind, LsbFrameError};
pub use crate::frame_options::FrameOptions;
pub use crate::result::Result;

/// Hides `payload` in `carrier` using the default [`FrameOptions`].
///
/// The carrier is changed in place, clone it first to keep the original.
pub fn encode(carrier: &mut [u8], payload: &[u8]) -> Result<()> {
    frame::encode(carrier, payload, &FrameOptions::default())
}

/// Unveils the payload of a carrier produced by [`encode`]
pub fn decode(carrier: &[u8]) -> Result<Vec<u8>> {
    frame::decode(carrier, &FrameOptions::default())
}

/// The largest payload [`encode`] accepts for a carrier of `carrier_len` bytes
pub fn capacity(carrier_len: usize) -> usize {
    frame::capacity(carrier_len, &FrameOptions::default())
}
