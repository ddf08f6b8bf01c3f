//! Spreads one payload byte over the two low bits of four consecutive carrier bytes.
//!
//! The least significant bit pair of the payload byte lands in the first carrier byte,
//! the most significant pair in the fourth one. The upper 6 bits of every carrier byte
//! are left untouched.

use std::io::Read;

use crate::{LsbFrameError, Result};

/// Payload bits stored in one carrier byte
pub const BITS_PER_CARRIER_BYTE: usize = 2;

/// Carrier bytes needed for one payload byte
pub const CARRIER_BYTES_PER_BYTE: usize = 8 / BITS_PER_CARRIER_BYTE;

const LOW_BITS_MASK: u8 = 0b0000_0011;

fn group(carrier_len: usize, index: usize) -> Result<std::ops::Range<usize>> {
    match index.checked_add(CARRIER_BYTES_PER_BYTE) {
        Some(end) if end <= carrier_len => Ok(index..end),
        _ => Err(LsbFrameError::Bounds {
            index: index.saturating_add(CARRIER_BYTES_PER_BYTE - 1),
            len: carrier_len,
        }),
    }
}

/// Hides `value` in `carrier[index..index + 4]`.
///
/// Fails with [`LsbFrameError::Bounds`] without touching the carrier if the group does not fit.
pub fn write_byte(carrier: &mut [u8], index: usize, value: u8) -> Result<()> {
    let range = group(carrier.len(), index)?;
    let mut bits = value;
    for b in carrier[range].iter_mut() {
        *b = (*b & !LOW_BITS_MASK) | (bits & LOW_BITS_MASK);
        bits >>= BITS_PER_CARRIER_BYTE;
    }

    Ok(())
}

/// Reads the byte hidden in `carrier[index..index + 4]`.
pub fn read_byte(carrier: &[u8], index: usize) -> Result<u8> {
    let range = group(carrier.len(), index)?;
    let value = carrier[range]
        .iter()
        .enumerate()
        .fold(0_u8, |acc, (j, b)| {
            acc | ((b & LOW_BITS_MASK) << (j * BITS_PER_CARRIER_BYTE))
        });

    Ok(value)
}

/// Writes bytes one after another into a carrier, starting at a given offset
#[derive(Debug)]
pub struct BitPlaneWriter<'c> {
    carrier: &'c mut [u8],
    cursor: usize,
}

impl<'c> BitPlaneWriter<'c> {
    pub fn new(carrier: &'c mut [u8], offset: usize) -> Self {
        Self {
            carrier,
            cursor: offset,
        }
    }

    pub fn write_byte(&mut self, value: u8) -> Result<()> {
        write_byte(self.carrier, self.cursor, value)?;
        self.cursor += CARRIER_BYTES_PER_BYTE;
        Ok(())
    }

    pub fn write_all(&mut self, values: &[u8]) -> Result<()> {
        values.iter().try_for_each(|v| self.write_byte(*v))
    }

    /// Carrier index the next byte goes to
    pub fn position(&self) -> usize {
        self.cursor
    }
}

/// Reads bytes one after another from a carrier, starting at a given offset.
///
/// As a [`Read`] it yields every byte up to the end of the carrier, which is
/// what a raw unveil dumps.
#[derive(Debug, Clone)]
pub struct BitPlaneReader<'c> {
    carrier: &'c [u8],
    cursor: usize,
}

impl<'c> BitPlaneReader<'c> {
    pub fn new(carrier: &'c [u8], offset: usize) -> Self {
        Self {
            carrier,
            cursor: offset,
        }
    }

    pub fn read_byte(&mut self) -> Result<u8> {
        let value = read_byte(self.carrier, self.cursor)?;
        self.cursor += CARRIER_BYTES_PER_BYTE;
        Ok(value)
    }

    /// Carrier index the next byte comes from
    pub fn position(&self) -> usize {
        self.cursor
    }

    /// Number of whole bytes left before the end of the carrier
    pub fn remaining(&self) -> usize {
        self.carrier.len().saturating_sub(self.cursor) / CARRIER_BYTES_PER_BYTE
    }
}

impl Read for BitPlaneReader<'_> {
    fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
        let n = buf.len().min(self.remaining());
        for slot in buf[..n].iter_mut() {
            *slot = read_byte(self.carrier, self.cursor)
                .map_err(|e| std::io::Error::new(std::io::ErrorKind::UnexpectedEof, e))?;
            self.cursor += CARRIER_BYTES_PER_BYTE;
        }

        Ok(n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_spread_bits_little_endian() {
        let mut carrier = [0_u8; 4];
        write_byte(&mut carrier, 0, 0b11_10_01_00).unwrap();

        assert_eq!(carrier, [0b00, 0b01, 0b10, 0b11]);
    }

    #[test]
    fn should_keep_the_upper_six_bits() {
        let mut carrier = [0xff_u8, 0xfc, 0x80, 0x7f];
        write_byte(&mut carrier, 0, 0x68).unwrap();

        for (before, after) in [0xff_u8, 0xfc, 0x80, 0x7f].iter().zip(carrier.iter()) {
            assert_eq!(before & 0xfc, after & 0xfc);
        }
        assert_eq!(read_byte(&carrier, 0).unwrap(), 0x68);
    }

    #[test]
    fn should_read_back_every_value() {
        let mut carrier = [0xa5_u8; 8];
        for v in 0..=u8::MAX {
            write_byte(&mut carrier, 3, v).unwrap();
            assert_eq!(read_byte(&carrier, 3).unwrap(), v);
        }
    }

    #[test]
    fn should_reject_a_group_past_the_end() {
        let mut carrier = [0_u8; 7];

        assert!(matches!(
            write_byte(&mut carrier, 4, 0xff),
            Err(LsbFrameError::Bounds { index: 7, len: 7 })
        ));
        assert_eq!(carrier, [0; 7], "carrier must stay untouched");
        assert!(matches!(
            read_byte(&carrier, 5),
            Err(LsbFrameError::Bounds { len: 7, .. })
        ));
        assert!(matches!(
            read_byte(&carrier, usize::MAX),
            Err(LsbFrameError::Bounds { .. })
        ));
    }

    #[test]
    fn should_advance_the_cursor_by_four() {
        let mut carrier = [0_u8; 16];
        {
            let mut w = BitPlaneWriter::new(&mut carrier, 2);
            w.write_all(b"abc").unwrap();
            assert_eq!(w.position(), 14);
            assert!(w.write_byte(b'd').is_err());
        }

        let mut r = BitPlaneReader::new(&carrier, 2);
        assert_eq!(r.remaining(), 3);
        assert_eq!(r.read_byte().unwrap(), b'a');
        assert_eq!(r.read_byte().unwrap(), b'b');
        assert_eq!(r.read_byte().unwrap(), b'c');
        assert_eq!(r.position(), 14);
        assert!(r.read_byte().is_err());
    }

    #[test]
    fn should_read_up_to_the_end_of_the_carrier() {
        let mut carrier = [0_u8; 18];
        BitPlaneWriter::new(&mut carrier, 0)
            .write_all(b"raw!")
            .unwrap();

        let mut buf = Vec::new();
        BitPlaneReader::new(&carrier, 0)
            .read_to_end(&mut buf)
            .expect("Cannot read from carrier");

        assert_eq!(buf, b"raw!");
    }
}
