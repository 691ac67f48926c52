use log::debug;

use crate::bits::bytes_to_bits;
use crate::carrier::CarrierSequence;
use crate::codec_options::GroupWidth;
use crate::error::StegoError;
use crate::marker::Marker;
use crate::result::Result;
use crate::splice::splice_low;

/// Hides `payload` followed by `marker` in the low bits of the carrier units.
///
/// Units are written in sequence order, `group_width` bits each, and nothing
/// after the unit holding the last marker bit is touched. The capacity is
/// checked up front, a payload that does not fit leaves the carrier as it was.
///
/// Returns the number of units written.
pub fn embed<C>(
    carrier: &mut C,
    payload: &[u8],
    marker: &Marker,
    group_width: GroupWidth,
) -> Result<usize>
where
    C: CarrierSequence + ?Sized,
{
    group_width.check_unit_width(carrier.unit_width())?;

    let mut bits = bytes_to_bits(payload);
    bits.extend(marker.bits());

    let available = carrier.capacity(group_width);
    if bits.len() > available {
        return Err(StegoError::CapacityExceeded {
            needed: bits.len(),
            available,
        });
    }
    debug!(
        "embedding {} bits in {} of {} units, {group_width} bits per unit",
        bits.len(),
        bits.len().div_ceil(group_width.bits() as usize),
        carrier.unit_count()
    );

    let mut written = 0;
    for (index, group) in bits.chunks(group_width.bits() as usize).enumerate() {
        let unit = carrier
            .get(index)
            .ok_or(StegoError::UnitIndexOutOfRange {
                index,
                count: carrier.unit_count(),
            })?;
        carrier.set(index, splice_low(unit.value, unit.width, group, group_width)?)?;
        written += 1;
    }

    Ok(written)
}
