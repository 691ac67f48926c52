use std::collections::VecDeque;

use crate::bits::{bytes_to_bits, Bits};
use crate::error::StegoError;
use crate::result::Result;

/// End-of-data sentinel appended after the payload.
///
/// The payload must not contain the marker at a byte boundary, otherwise
/// unveiling stops early and returns a truncated payload.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Marker(Vec<u8>);

impl Marker {
    pub fn new(bytes: impl Into<Vec<u8>>) -> Result<Self> {
        let bytes = bytes.into();
        if bytes.is_empty() {
            return Err(StegoError::EmptyMarker);
        }
        Ok(Self(bytes))
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Length of the marker in bits
    pub fn bit_len(&self) -> usize {
        self.0.len() << 3
    }

    pub fn bits(&self) -> Bits {
        bytes_to_bits(&self.0)
    }
}

impl TryFrom<&[u8]> for Marker {
    type Error = StegoError;

    fn try_from(bytes: &[u8]) -> Result<Self> {
        Self::new(bytes)
    }
}

impl TryFrom<&str> for Marker {
    type Error = StegoError;

    fn try_from(text: &str) -> Result<Self> {
        Self::new(text.as_bytes())
    }
}

impl AsRef<[u8]> for Marker {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

/// Rolling view on the last `marker.bit_len()` bits of a bit stream.
///
/// Bits are pushed one at a time, [`MarkerWindow::push`] reports when the
/// window equals the marker and everything before it forms whole bytes.
pub(crate) struct MarkerWindow {
    pattern: Bits,
    window: VecDeque<bool>,
    seen: usize,
}

impl MarkerWindow {
    pub fn new(marker: &Marker) -> Self {
        let pattern = marker.bits();
        Self {
            window: VecDeque::with_capacity(pattern.len()),
            pattern,
            seen: 0,
        }
    }

    /// Number of bits pushed so far
    pub fn seen(&self) -> usize {
        self.seen
    }

    pub fn push(&mut self, bit: bool) -> bool {
        if self.window.len() == self.pattern.len() {
            self.window.pop_front();
        }
        self.window.push_back(bit);
        self.seen += 1;

        // the marker length is a whole number of bytes, so a byte aligned
        // end means the data in front of it is byte aligned too
        self.seen % 8 == 0
            && self.window.len() == self.pattern.len()
            && self.window.iter().eq(self.pattern.iter())
    }
}
