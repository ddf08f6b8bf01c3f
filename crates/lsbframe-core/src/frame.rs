//! Frame layout inside a carrier
//!
//! ```text
//! offset = carrier.len() / 2
//! [ 4 carrier bytes per header digit ]...
//! [ 4 carrier bytes for the delimiter '|' ]
//! [ 4 carrier bytes per payload byte ]...
//! ```
//!
//! The header is the payload length as ASCII decimal digits, terminated by `|`.

use crate::bit_plane::{BitPlaneReader, BitPlaneWriter, CARRIER_BYTES_PER_BYTE};
use crate::error::FormatErrorKind;
use crate::{FrameOptions, LsbFrameError, Result};

/// Terminates the length header
pub const DELIMITER: u8 = b'|';

/// The length prefix of a frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameHeader {
    pub payload_len: usize,
}

impl FrameHeader {
    pub fn new(payload_len: usize) -> Self {
        Self { payload_len }
    }

    /// ASCII digits of the payload length followed by the delimiter
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut header = self.payload_len.to_string().into_bytes();
        header.push(DELIMITER);
        header
    }

    /// Number of bytes [`FrameHeader::to_bytes`] produces
    pub fn encoded_len(&self) -> usize {
        decimal_digits(self.payload_len) + 1
    }

    /// Parses the digits found in front of the delimiter
    pub fn parse(digits: &[u8]) -> Result<Self> {
        if digits.is_empty() {
            return Err(LsbFrameError::Format(FormatErrorKind::EmptyLength));
        }

        let mut payload_len: usize = 0;
        for d in digits {
            if !d.is_ascii_digit() {
                return Err(LsbFrameError::Format(FormatErrorKind::NonDigit(*d)));
            }
            payload_len = payload_len
                .checked_mul(10)
                .and_then(|l| l.checked_add(usize::from(d - b'0')))
                .ok_or(LsbFrameError::Format(FormatErrorKind::LengthOverflow))?;
        }

        Ok(Self::new(payload_len))
    }

    /// Scans for the delimiter, giving up after `max_digits` digits
    fn read_from(reader: &mut BitPlaneReader<'_>, max_digits: usize) -> Result<Self> {
        let mut digits = Vec::with_capacity(max_digits);
        for _ in 0..=max_digits {
            let b = reader.read_byte()?;
            if b == DELIMITER {
                return Self::parse(&digits);
            }
            if !b.is_ascii_digit() {
                return Err(LsbFrameError::Format(FormatErrorKind::NonDigit(b)));
            }
            digits.push(b);
        }

        Err(LsbFrameError::Format(FormatErrorKind::MissingDelimiter {
            scanned: max_digits + 1,
        }))
    }
}

fn decimal_digits(mut n: usize) -> usize {
    let mut digits = 1;
    while n >= 10 {
        n /= 10;
        digits += 1;
    }
    digits
}

/// Carrier bytes a frame for `payload_len` bytes occupies
fn frame_len(payload_len: usize) -> usize {
    FrameHeader::new(payload_len)
        .encoded_len()
        .saturating_add(payload_len)
        .saturating_mul(CARRIER_BYTES_PER_BYTE)
}

/// The largest payload a carrier of `carrier_len` bytes accepts.
///
/// Returns 0 also when not even an empty payload fits.
pub fn capacity(carrier_len: usize, opts: &FrameOptions) -> usize {
    let logical = opts.available(carrier_len) / CARRIER_BYTES_PER_BYTE;
    let mut payload_len = logical.saturating_sub(2);
    while payload_len > 0 && payload_len + FrameHeader::new(payload_len).encoded_len() > logical
    {
        payload_len -= 1;
    }
    payload_len
}

/// The smallest carrier that accepts a payload of `payload_len` bytes
pub fn required_carrier_len(payload_len: usize, opts: &FrameOptions) -> usize {
    frame_len(payload_len)
        .saturating_add(opts.header_margin_bytes)
        .saturating_mul(2)
}

/// Longest length header a decoder accepts for a carrier of this size
fn max_header_digits(carrier_len: usize, opts: &FrameOptions) -> usize {
    decimal_digits(capacity(carrier_len, opts))
}

/// Hides `payload` in `carrier`.
///
/// On error the carrier is left as it was.
pub fn encode(carrier: &mut [u8], payload: &[u8], opts: &FrameOptions) -> Result<()> {
    opts.validate()?;

    let header = FrameHeader::new(payload.len());
    let required = frame_len(payload.len());
    let available = opts.available(carrier.len());
    if available < required {
        return Err(LsbFrameError::Capacity {
            required,
            available,
        });
    }

    let offset = opts.start_offset(carrier.len());
    let mut writer = BitPlaneWriter::new(carrier, offset);
    writer.write_all(&header.to_bytes())?;
    writer.write_all(payload)?;

    Ok(())
}

/// Recovers the payload hidden by [`encode`] with the same options
pub fn decode(carrier: &[u8], opts: &FrameOptions) -> Result<Vec<u8>> {
    opts.validate()?;

    let mut reader = BitPlaneReader::new(carrier, opts.start_offset(carrier.len()));
    let header = FrameHeader::read_from(&mut reader, max_header_digits(carrier.len(), opts))?;

    if header.payload_len > reader.remaining() {
        let index = header
            .payload_len
            .checked_mul(CARRIER_BYTES_PER_BYTE)
            .and_then(|n| n.checked_add(reader.position()))
            .map_or(usize::MAX, |end| end - 1);
        return Err(LsbFrameError::Bounds {
            index,
            len: carrier.len(),
        });
    }

    let mut payload = Vec::with_capacity(header.payload_len);
    for _ in 0..header.payload_len {
        payload.push(reader.read_byte()?);
    }

    Ok(payload)
}
