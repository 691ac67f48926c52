//! Conversions between bytes, integers and ordered bit sequences.
//!
//! Bits are always ordered most significant first, both within a byte and
//! within a fixed-width integer.

use std::io::{ErrorKind, Read};
use std::slice;

use bitstream_io::{BigEndian, BitWrite, BitWriter};

use crate::error::StegoError;
use crate::result::Result;

/// An ordered sequence of bits, `true` being a set bit.
pub type Bits = Vec<bool>;

/// Iterates the bits of a byte source, most significant bit of each byte first.
pub struct BitIterator<I> {
    source: I,
    byte: u8,
    remaining: u8,
}

impl<I> BitIterator<I> {
    pub fn new(source: I) -> Self {
        Self {
            source,
            byte: 0,
            remaining: 0,
        }
    }
}

impl<I> Iterator for BitIterator<I>
where
    I: Read,
{
    type Item = bool;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            let mut b = 0;
            loop {
                match self.source.read(slice::from_mut(&mut b)) {
                    Ok(0) => return None,
                    Ok(..) => break,
                    Err(ref e) if e.kind() == ErrorKind::Interrupted => continue,
                    Err(_) => return None,
                }
            }
            self.byte = b;
            self.remaining = 8;
        }
        self.remaining -= 1;

        Some((self.byte >> self.remaining) & 1 == 1)
    }
}

/// Flattens bytes into bits, the result is always `8 * data.len()` long.
pub fn bytes_to_bits(data: &[u8]) -> Bits {
    let mut bits = Vec::with_capacity(data.len() << 3);
    bits.extend(BitIterator::new(data));
    bits
}

/// Packs bits into bytes, front to back.
///
/// Fails with [`StegoError::TrailingBitsInvalid`] if the bits do not form whole bytes.
pub fn bits_to_bytes(bits: &[bool]) -> Result<Vec<u8>> {
    if bits.len() % 8 != 0 {
        return Err(StegoError::TrailingBitsInvalid(bits.len()));
    }

    let mut writer = BitWriter::endian(Vec::with_capacity(bits.len() >> 3), BigEndian);
    for bit in bits {
        writer.write_bit(*bit)?;
    }

    Ok(writer.into_writer())
}

/// Left zero-padded binary representation of `value` in exactly `width` bits.
pub fn int_to_bits(value: u64, width: u32) -> Result<Bits> {
    if !fits_in(value, width) {
        return Err(StegoError::ValueOutOfRange { value, width });
    }

    Ok((0..width).rev().map(|i| (value >> i) & 1 == 1).collect())
}

/// Big-endian interpretation of `bits`, only the last 64 bits are significant.
pub fn bits_to_int(bits: &[bool]) -> u64 {
    bits.iter().fold(0u64, |acc, bit| (acc << 1) | u64::from(*bit))
}

pub(crate) fn fits_in(value: u64, width: u32) -> bool {
    match width {
        0 => value == 0,
        1..=63 => value >> width == 0,
        64 => true,
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_flatten_bytes_msb_first() {
        let bits = bytes_to_bits(b"H");

        assert_eq!(
            bits,
            vec![false, true, false, false, true, false, false, false]
        );
    }

    #[test]
    fn should_keep_byte_order() {
        let bits = bytes_to_bits(&[0b1000_0000, 0b0000_0001]);

        assert_eq!(bits.len(), 16);
        assert!(bits[0], "1st bit should be the msb of the first byte");
        assert!(bits[15], "16th bit should be the lsb of the second byte");
        assert_eq!(bits.iter().filter(|b| **b).count(), 2);
    }

    #[test]
    fn should_pack_bits_back_into_bytes() {
        let data = b"Hello World!";

        assert_eq!(bits_to_bytes(&bytes_to_bits(data)).unwrap(), data.to_vec());
    }

    #[test]
    fn should_pack_nothing_into_nothing() {
        assert!(bytes_to_bits(&[]).is_empty());
        assert!(bits_to_bytes(&[]).unwrap().is_empty());
    }

    #[test]
    fn should_reject_partial_bytes() {
        let bits = vec![true; 13];

        match bits_to_bytes(&bits) {
            Err(StegoError::TrailingBitsInvalid(13)) => (),
            other => panic!("expected TrailingBitsInvalid, got {other:?}"),
        }
    }

    #[test]
    fn should_pad_integers_on_the_left() {
        assert_eq!(int_to_bits(5, 6).unwrap(), vec![false, false, false, true, false, true]);
        assert_eq!(int_to_bits(0, 0).unwrap(), Vec::<bool>::new());
        assert_eq!(int_to_bits(u64::MAX, 64).unwrap().len(), 64);
    }

    #[test]
    fn should_reject_integers_wider_than_the_width() {
        match int_to_bits(256, 8) {
            Err(StegoError::ValueOutOfRange { value: 256, width: 8 }) => (),
            other => panic!("expected ValueOutOfRange, got {other:?}"),
        }
        assert!(int_to_bits(1, 0).is_err());
        assert!(int_to_bits(1, 65).is_err());
    }

    #[test]
    fn should_read_bits_as_big_endian_integer() {
        assert_eq!(bits_to_int(&[true, false, true]), 5);
        assert_eq!(bits_to_int(&[]), 0);
        assert_eq!(bits_to_int(&int_to_bits(0xBEEF, 16).unwrap()), 0xBEEF);
    }

    #[test]
    fn should_stop_iterating_after_the_last_byte() {
        let mut it = BitIterator::new(&[0xFF_u8][..]).skip(7);

        assert_eq!(it.next(), Some(true));
        assert_eq!(it.next(), None, "it should end after the last bit");
    }
}
