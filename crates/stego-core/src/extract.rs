use log::debug;

use crate::bits::{bits_to_bytes, Bits};
use crate::carrier::{CarrierSequence, Units};
use crate::codec_options::GroupWidth;
use crate::error::StegoError;
use crate::marker::{Marker, MarkerWindow};
use crate::result::Result;
use crate::splice::read_low;

/// Reads the low bits of the carrier units in sequence order until `marker`
/// shows up and returns everything in front of it.
///
/// The marker is looked for after every single bit, so reading stops in the
/// middle of a unit's group as soon as the marker is complete. The carrier is
/// never modified.
pub fn extract<C>(carrier: &C, marker: &Marker, group_width: GroupWidth) -> Result<Vec<u8>>
where
    C: CarrierSequence + ?Sized,
{
    group_width.check_unit_width(carrier.unit_width())?;

    let mut window = MarkerWindow::new(marker);
    let mut data = Bits::new();
    for (index, unit) in Units::new(carrier).enumerate() {
        for bit in read_low(unit.value, unit.width, group_width.bits())? {
            data.push(bit);
            if window.push(bit) {
                debug!(
                    "marker found in unit {index} after {} bits",
                    window.seen()
                );
                data.truncate(data.len() - marker.bit_len());
                return bits_to_bytes(&data);
            }
        }
    }
    debug!(
        "no marker in {} units, {} bits read",
        carrier.unit_count(),
        window.seen()
    );

    Err(StegoError::MarkerNotFound)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::embed::embed;
    use crate::test_utils::{gray_carrier, pcm16_carrier};

    fn k(bits: u32) -> GroupWidth {
        GroupWidth::new(bits).unwrap()
    }

    #[test]
    fn should_stop_in_the_middle_of_a_group() {
        let mut carrier = gray_carrier(3, 3, 0);
        let marker = Marker::new(vec![0xFF]).unwrap();
        embed(&mut carrier, &[0x01], &marker, k(3)).unwrap();
        // 16 bits end after the first bit of unit 5, garbage follows
        for i in 6..carrier.unit_count() {
            carrier.set(i, 0xFF).unwrap();
        }

        assert_eq!(extract(&carrier, &marker, k(3)).unwrap(), vec![0x01]);
    }

    #[test]
    fn should_unveil_an_empty_payload() {
        let mut carrier = gray_carrier(4, 4, 0x33);
        let marker = Marker::try_from("EOD").unwrap();
        embed(&mut carrier, &[], &marker, k(2)).unwrap();

        assert!(extract(&carrier, &marker, k(2)).unwrap().is_empty());
    }

    #[test]
    fn should_report_a_missing_marker() {
        let carrier = gray_carrier(4, 4, 0);
        let marker = Marker::new(vec![0xFF]).unwrap();

        assert!(matches!(
            extract(&carrier, &marker, k(1)),
            Err(StegoError::MarkerNotFound)
        ));
    }

    #[test]
    fn should_not_find_the_marker_with_another_group_width() {
        let mut carrier = pcm16_carrier(&[0; 32]);
        let marker = Marker::new(vec![0xF0, 0x0F]).unwrap();
        embed(&mut carrier, b"hi", &marker, k(4)).unwrap();

        assert_eq!(extract(&carrier, &marker, k(4)).unwrap(), b"hi".to_vec());
        assert!(extract(&carrier, &marker, k(1)).is_err());
    }

    #[test]
    fn should_reject_groups_wider_than_the_unit() {
        let carrier = gray_carrier(2, 2, 0);
        let marker = Marker::new(vec![0xFF]).unwrap();

        assert!(matches!(
            extract(&carrier, &marker, k(16)),
            Err(StegoError::GroupWidthExceedsUnit { .. })
        ));
    }
}
