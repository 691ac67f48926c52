use crate::bits::{bits_to_int, fits_in, int_to_bits, Bits};
use crate::codec_options::GroupWidth;
use crate::error::StegoError;
use crate::result::Result;

fn low_mask(bits: u32) -> u64 {
    if bits >= 64 {
        u64::MAX
    } else {
        (1 << bits) - 1
    }
}

fn check_unit(unit: u64, unit_width: u32) -> Result<()> {
    if !fits_in(unit, unit_width) {
        return Err(StegoError::ValueOutOfRange {
            value: unit,
            width: unit_width,
        });
    }
    Ok(())
}

/// Replaces the low `group_width` bits of a `unit_width` wide unit.
///
/// `replacement` is laid out from the highest bit of the group downwards. A
/// replacement shorter than the group (only the last group of a stream) is
/// followed by zero bits, so every splice touches exactly `group_width` bits
/// and the replacement bits are read back first.
pub fn splice_low(
    unit: u64,
    unit_width: u32,
    replacement: &[bool],
    group_width: GroupWidth,
) -> Result<u64> {
    let k = group_width.bits();
    group_width.check_unit_width(unit_width)?;
    check_unit(unit, unit_width)?;
    if replacement.len() > k as usize {
        return Err(StegoError::ValueOutOfRange {
            value: bits_to_int(replacement),
            width: k,
        });
    }

    let padding = k - replacement.len() as u32;
    let group = bits_to_int(replacement).checked_shl(padding).unwrap_or(0);
    let mask = low_mask(k);

    Ok((unit & !mask) | (group & mask))
}

/// The last `count` bits of a `unit_width` wide unit, highest first.
pub fn read_low(unit: u64, unit_width: u32, count: u32) -> Result<Bits> {
    check_unit(unit, unit_width)?;
    if count > unit_width {
        return Err(StegoError::GroupWidthExceedsUnit {
            group_width: count,
            unit_width,
        });
    }

    int_to_bits(unit & low_mask(count), count)
}
