//! File based hiding and unveiling, see [`hide::prepare`] and [`unveil::prepare`].

pub mod hide;
pub mod unveil;

use std::path::Path;

use crate::{CarrierSequence, GroupWidth, Media, Result};

/// How much a carrier can take for a given group width
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Capacity {
    pub unit_count: usize,
    pub unit_width: u32,
    pub group_width: GroupWidth,
    /// payload and marker bits together
    pub bits: usize,
}

impl Capacity {
    pub fn of<C: CarrierSequence + ?Sized>(carrier: &C, group_width: GroupWidth) -> Self {
        Self {
            unit_count: carrier.unit_count(),
            unit_width: carrier.unit_width(),
            group_width,
            bits: carrier.capacity(group_width),
        }
    }

    /// Largest payload in bytes that still fits next to a marker of `marker_len` bytes
    pub fn max_payload_len(&self, marker_len: usize) -> usize {
        (self.bits / 8).saturating_sub(marker_len)
    }
}

pub fn capacity(media: &Path, group_width: GroupWidth) -> Result<Capacity> {
    let media = Media::from_file(media)?;
    group_width.check_unit_width(media.unit_width())?;

    Ok(Capacity::of(&media, group_width))
}
