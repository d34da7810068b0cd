//! Per-LED color storage.

use crate::colors::HsvColor;
use crate::types::StripError;
use heapless::Vec;

/// One HSV color per LED, indexed by position on the strip.
///
/// Pure data: nothing here touches hardware. The driver reads the store when
/// encoding a frame; callers may change it at any time, including while a
/// transfer is running.
///
/// # Type Parameters
/// * `N` - Maximum number of LEDs; the actual count is chosen at construction
#[derive(Debug, Clone)]
pub struct ColorStore<const N: usize> {
    colors: Vec<HsvColor, N>,
}

impl<const N: usize> ColorStore<N> {
    /// Creates a store of `len` black LEDs.
    ///
    /// # Errors
    /// * `CapacityExceeded` - `len` is larger than `N`
    pub fn new(len: usize) -> Result<Self, StripError> {
        let mut colors = Vec::new();
        colors
            .resize(len, HsvColor::BLACK)
            .map_err(|_| StripError::CapacityExceeded {
                requested: len,
                capacity: N,
            })?;
        Ok(Self { colors })
    }

    /// Stores `color` at `index`.
    pub fn set(&mut self, index: usize, color: HsvColor) -> Result<(), StripError> {
        *self.slot_mut(index)? = color;
        Ok(())
    }

    /// Returns the color stored at `index`.
    pub fn get(&self, index: usize) -> Result<HsvColor, StripError> {
        self.colors
            .get(index)
            .copied()
            .ok_or(StripError::IndexOutOfRange {
                index,
                len: self.colors.len(),
            })
    }

    /// Overwrites the value channel only, keeping hue and saturation.
    pub fn set_value(&mut self, index: usize, value: u8) -> Result<(), StripError> {
        self.slot_mut(index)?.v = value;
        Ok(())
    }

    /// Scales the value channel to `value * percent / 100`, truncating.
    ///
    /// Percentages above 100 amplify. Nothing is clamped: the product is
    /// computed in 16 bits and the quotient keeps only its low 8 bits, so
    /// 200 scaled by 150% ends up as 44, not 255.
    pub fn scale_value(&mut self, index: usize, percent: u8) -> Result<(), StripError> {
        let slot = self.slot_mut(index)?;
        let scaled = u16::from(slot.v) * u16::from(percent) / 100;
        slot.v = scaled as u8;
        Ok(())
    }

    /// Sets every LED to `color`.
    pub fn fill(&mut self, color: HsvColor) {
        for slot in self.colors.iter_mut() {
            *slot = color;
        }
    }

    /// Copies one color per LED from `colors`, in index order.
    ///
    /// Entries past the strip length are ignored. A short source leaves the
    /// store untouched.
    pub fn fill_from(&mut self, colors: &[HsvColor]) -> Result<(), StripError> {
        let len = self.colors.len();
        let source = colors.get(..len).ok_or(StripError::SourceTooShort {
            expected: len,
            actual: colors.len(),
        })?;
        self.colors.copy_from_slice(source);
        Ok(())
    }

    /// Number of LEDs.
    #[inline]
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Returns true if the strip has no LEDs.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Maximum number of LEDs this store type can hold.
    #[inline]
    pub const fn capacity(&self) -> usize {
        N
    }

    /// Iterates over the colors in strip order.
    pub fn iter(&self) -> core::slice::Iter<'_, HsvColor> {
        self.colors.iter()
    }

    /// The colors as a slice, in strip order.
    pub fn as_slice(&self) -> &[HsvColor] {
        &self.colors
    }

    fn slot_mut(&mut self, index: usize) -> Result<&mut HsvColor, StripError> {
        let len = self.colors.len();
        self.colors
            .get_mut(index)
            .ok_or(StripError::IndexOutOfRange { index, len })
    }
}
