//! Pulse-code frame streamed to the output timer.

use crate::types::{BITS_PER_LED, PulseCode, StripError};
use heapless::Vec;

/// Fixed-length frame of pulse codes, 24 per LED.
///
/// Stored as one 24-slot region per LED so each region can be encoded on its
/// own; [`as_slice`](Self::as_slice) exposes the contiguous view the DMA
/// stream reads. The length is set at construction and never changes.
#[derive(Debug, Clone)]
pub struct TransferBuffer<const N: usize> {
    regions: Vec<[PulseCode; BITS_PER_LED], N>,
}

impl<const N: usize> TransferBuffer<N> {
    /// Creates a zero-filled frame for `leds` LEDs.
    ///
    /// # Errors
    /// * `CapacityExceeded` - `leds` is larger than `N`
    pub fn new(leds: usize) -> Result<Self, StripError> {
        let mut regions = Vec::new();
        regions
            .resize(leds, [0; BITS_PER_LED])
            .map_err(|_| StripError::CapacityExceeded {
                requested: leds,
                capacity: N,
            })?;
        Ok(Self { regions })
    }

    /// Zeroes every slot.
    pub fn clear(&mut self) {
        self.as_mut_slice().fill(0);
    }

    /// Number of LEDs the frame covers.
    #[inline]
    pub fn led_count(&self) -> usize {
        self.regions.len()
    }

    /// Number of pulse codes in the frame.
    #[inline]
    pub fn len(&self) -> usize {
        self.regions.len() * BITS_PER_LED
    }

    /// Returns true if the frame covers no LEDs.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }

    /// Contiguous view of the frame, as streamed by DMA.
    pub fn as_slice(&self) -> &[PulseCode] {
        self.regions.as_slice().as_flattened()
    }

    /// Mutable contiguous view of the frame.
    pub fn as_mut_slice(&mut self) -> &mut [PulseCode] {
        self.regions.as_mut_slice().as_flattened_mut()
    }

    /// Per-LED regions, in strip order.
    pub(crate) fn regions_mut(&mut self) -> core::slice::IterMut<'_, [PulseCode; BITS_PER_LED]> {
        self.regions.iter_mut()
    }
}
