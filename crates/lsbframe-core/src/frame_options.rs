use crate::{LsbFrameError, Result};

/// Bits of each carrier byte that hold payload bits
pub const DEFAULT_BITS_PER_CARRIER_BYTE: u8 = 2;

/// Carrier bytes kept free at the end of the buffer
pub const DEFAULT_HEADER_MARGIN_BYTES: usize = 50;

/// Framing configuration shared by encoding and decoding.
///
/// Both sides must use the same options, otherwise the frame is read from the wrong place
/// or rejected by the capacity check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameOptions {
    /// Only the 2 bit scheme is supported, see [`FrameOptions::validate`]
    pub bits_per_carrier_byte: u8,

    /// Subtracted from the usable half of the carrier before checking the capacity
    pub header_margin_bytes: usize,
}

impl Default for FrameOptions {
    fn default() -> Self {
        Self {
            bits_per_carrier_byte: DEFAULT_BITS_PER_CARRIER_BYTE,
            header_margin_bytes: DEFAULT_HEADER_MARGIN_BYTES,
        }
    }
}

impl FrameOptions {
    pub fn with_header_margin_bytes(mut self, header_margin_bytes: usize) -> Self {
        self.header_margin_bytes = header_margin_bytes;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.bits_per_carrier_byte != DEFAULT_BITS_PER_CARRIER_BYTE {
            return Err(LsbFrameError::UnsupportedBitDepth(
                self.bits_per_carrier_byte,
            ));
        }
        Ok(())
    }

    /// The frame always starts in the middle of the carrier.
    ///
    /// This is a heuristic to stay clear of file headers at the beginning of a carrier,
    /// it knows nothing about the actual layout of any media format.
    pub fn start_offset(&self, carrier_len: usize) -> usize {
        carrier_len / 2
    }

    /// Carrier bytes a frame may occupy
    pub fn available(&self, carrier_len: usize) -> usize {
        (carrier_len / 2).saturating_sub(self.header_margin_bytes)
    }
}
