use std::fmt;

use crate::error::StegoError;
use crate::result::Result;

/// Number of low bits written to or read from each carrier unit.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct GroupWidth(u32);

impl GroupWidth {
    pub const MIN: u32 = 1;
    pub const MAX: u32 = 64;

    pub fn new(bits: u32) -> Result<Self> {
        if (Self::MIN..=Self::MAX).contains(&bits) {
            Ok(Self(bits))
        } else {
            Err(StegoError::InvalidGroupWidth(bits))
        }
    }

    pub fn bits(self) -> u32 {
        self.0
    }

    /// Ensures a unit of `unit_width` bits can hold a whole group.
    pub fn check_unit_width(self, unit_width: u32) -> Result<()> {
        if self.0 > unit_width {
            return Err(StegoError::GroupWidthExceedsUnit {
                group_width: self.0,
                unit_width,
            });
        }
        Ok(())
    }
}

impl Default for GroupWidth {
    fn default() -> Self {
        Self(3)
    }
}

impl TryFrom<u32> for GroupWidth {
    type Error = StegoError;

    fn try_from(bits: u32) -> Result<Self> {
        Self::new(bits)
    }
}

impl TryFrom<u8> for GroupWidth {
    type Error = StegoError;

    fn try_from(bits: u8) -> Result<Self> {
        Self::new(u32::from(bits))
    }
}

impl fmt::Display for GroupWidth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Codec configuration shared by hiding and unveiling.
///
/// Nothing of this is stored inside the carrier, both sides have to agree on it.
#[derive(Debug, Default, Clone, Copy)]
pub struct CodecOptions {
    /// How many low bits of every carrier unit carry data.
    /// A wider group raises the capacity and the distortion at the same time.
    pub group_width: GroupWidth,
}

impl CodecOptions {
    pub fn with_group_width(mut self, group_width: GroupWidth) -> Self {
        self.group_width = group_width;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_default_to_three_bits() {
        assert_eq!(CodecOptions::default().group_width.bits(), 3);
    }

    #[test]
    fn should_reject_zero_and_too_wide_groups() {
        assert!(matches!(
            GroupWidth::new(0),
            Err(StegoError::InvalidGroupWidth(0))
        ));
        assert!(matches!(
            GroupWidth::try_from(65_u32),
            Err(StegoError::InvalidGroupWidth(65))
        ));
        assert_eq!(GroupWidth::try_from(8_u8).unwrap().bits(), 8);
    }

    #[test]
    fn should_not_fit_a_group_into_a_narrower_unit() {
        let k = GroupWidth::new(9).unwrap();

        assert!(k.check_unit_width(16).is_ok());
        assert!(matches!(
            k.check_unit_width(8),
            Err(StegoError::GroupWidthExceedsUnit {
                group_width: 9,
                unit_width: 8
            })
        ));
    }
}
