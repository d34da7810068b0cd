//! Color to pulse-code encoding.
//!
//! Every bit of an LED's 24-bit word becomes one timer compare value. The
//! timer runs at the 800 kHz bit rate, so the compare value sets how long the
//! line stays high within that bit: long for a 1, short for a 0.

use crate::colors::Rgb24;
use crate::types::{BITS_PER_LED, ChannelOrder, PulseCode, StripError};

/// WS2811 bit rate in fast mode.
pub const WS2811_CARRIER_HZ: u32 = 800_000;

/// Compare values for a logical 1 and a logical 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PulseCodes {
    one: PulseCode,
    zero: PulseCode,
}

impl PulseCodes {
    /// Uses explicit compare values.
    #[inline]
    pub const fn new(one: PulseCode, zero: PulseCode) -> Self {
        Self { one, zero }
    }

    /// Derives compare values for a timer counting at `timer_hz` with a
    /// period of one bit time.
    ///
    /// A 1 is high for two thirds of the period, a 0 for one third. At
    /// 48 MHz the period is 60 ticks, giving 40 and 20.
    pub const fn from_timer_clock(timer_hz: u32) -> Self {
        // u32::MAX / 800_000 fits in a u16
        let period = (timer_hz / WS2811_CARRIER_HZ) as PulseCode;
        Self {
            one: period / 3 * 2,
            zero: period / 3,
        }
    }

    /// Compare value for a logical 1 (long high).
    #[inline]
    pub const fn one(&self) -> PulseCode {
        self.one
    }

    /// Compare value for a logical 0 (short high).
    #[inline]
    pub const fn zero(&self) -> PulseCode {
        self.zero
    }
}

/// Writes pulse codes for LED colors into a transfer buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BitEncoder {
    codes: PulseCodes,
}

impl BitEncoder {
    /// Creates an encoder emitting `codes`.
    pub const fn new(codes: PulseCodes) -> Self {
        Self { codes }
    }

    /// The compare values this encoder writes.
    pub const fn codes(&self) -> PulseCodes {
        self.codes
    }

    /// Encodes LED `led_index` into its 24-slot region of `buffer`.
    ///
    /// The region starts at `led_index * 24`. Bits are written MSB first and
    /// every slot of the region is overwritten; neighbouring regions and the
    /// previous contents are never read.
    ///
    /// # Errors
    /// * `IndexOutOfRange` - the region does not fit in `buffer`; nothing is written
    pub fn encode_led(
        &self,
        order: ChannelOrder,
        rgb: Rgb24,
        led_index: usize,
        buffer: &mut [PulseCode],
    ) -> Result<(), StripError> {
        let out_of_range = StripError::IndexOutOfRange {
            index: led_index,
            len: buffer.len() / BITS_PER_LED,
        };
        let start = led_index
            .checked_mul(BITS_PER_LED)
            .ok_or(out_of_range)?;
        let region: &mut [PulseCode; BITS_PER_LED] = buffer
            .get_mut(start..)
            .and_then(|rest| rest.get_mut(..BITS_PER_LED))
            .and_then(|region| region.try_into().ok())
            .ok_or(out_of_range)?;

        self.encode_word(order.pack(rgb), region);
        Ok(())
    }

    /// Expands the low 24 bits of `word` into `slots`, bit 23 first.
    pub fn encode_word(&self, word: u32, slots: &mut [PulseCode; BITS_PER_LED]) {
        for (offset, slot) in slots.iter_mut().enumerate() {
            let bit = BITS_PER_LED - 1 - offset;
            *slot = if word & (1 << bit) != 0 {
                self.codes.one
            } else {
                self.codes.zero
            };
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CODES: PulseCodes = PulseCodes::new(40, 20);

    #[test]
    fn timer_clock_derivation() {
        let codes = PulseCodes::from_timer_clock(48_000_000);
        assert_eq!(codes.one(), 40);
        assert_eq!(codes.zero(), 20);

        let codes = PulseCodes::from_timer_clock(84_000_000);
        assert_eq!(codes.one(), 70);
        assert_eq!(codes.zero(), 35);
    }

    #[test]
    fn msb_is_written_first() {
        let encoder = BitEncoder::new(CODES);
        let mut slots = [0; BITS_PER_LED];

        encoder.encode_word(0x80_0001, &mut slots);

        assert_eq!(slots[0], 40);
        assert!(slots[1..23].iter().all(|&s| s == 20));
        assert_eq!(slots[23], 40);
    }

    #[test]
    fn bits_above_23_are_ignored() {
        let encoder = BitEncoder::new(CODES);
        let mut slots = [0; BITS_PER_LED];

        encoder.encode_word(0xFF00_0000, &mut slots);

        assert!(slots.iter().all(|&s| s == 20));
    }

    #[test]
    fn region_past_end_is_rejected_without_writing() {
        let encoder = BitEncoder::new(CODES);
        let mut buffer = [7; BITS_PER_LED * 2 - 1];

        let result = encoder.encode_led(ChannelOrder::Grb, Rgb24::new(255, 255, 255), 1, &mut buffer);

        assert_eq!(
            result,
            Err(StripError::IndexOutOfRange { index: 1, len: 1 })
        );
        assert!(buffer.iter().all(|&s| s == 7));
    }
}
