//! Carriers seen as a flat, ordered sequence of fixed-width integer units.

pub mod audio;
pub mod image;

use enum_dispatch::enum_dispatch;

use crate::codec_options::GroupWidth;
use crate::result::Result;

pub use self::audio::AudioCarrier;
pub use self::image::{ColorMode, ImageCarrier};

/// One addressable slot of a carrier
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct CarrierUnit {
    pub value: u64,
    /// width of the unit in bits
    pub width: u32,
}

/// Ordered, randomly addressable sequence of carrier units.
///
/// The order is fixed by the implementation and must be the same for hiding
/// and unveiling.
#[enum_dispatch]
pub trait CarrierSequence {
    fn unit_count(&self) -> usize;

    /// Width in bits shared by all units
    fn unit_width(&self) -> u32;

    fn get(&self, index: usize) -> Option<CarrierUnit>;

    /// Overwrites the unit at `index`, `value` has to fit into the unit width.
    fn set(&mut self, index: usize, value: u64) -> Result<()>;

    /// Bits this carrier can take when `group_width` bits are used per unit
    fn capacity(&self, group_width: GroupWidth) -> usize {
        self.unit_count().saturating_mul(group_width.bits() as usize)
    }
}

/// Lazy, finite walk over the units of a carrier in sequence order.
pub struct Units<'a, C: ?Sized> {
    carrier: &'a C,
    next: usize,
}

impl<'a, C: CarrierSequence + ?Sized> Units<'a, C> {
    pub fn new(carrier: &'a C) -> Self {
        Self { carrier, next: 0 }
    }
}

impl<C: CarrierSequence + ?Sized> Iterator for Units<'_, C> {
    type Item = CarrierUnit;

    fn next(&mut self) -> Option<Self::Item> {
        let unit = self.carrier.get(self.next)?;
        self.next += 1;
        Some(unit)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = self.carrier.unit_count().saturating_sub(self.next);
        (left, Some(left))
    }
}
