//! Core types shared by the store, encoder and driver.

use crate::colors::Rgb24;
use crate::driver::StripState;

/// Timer compare value producing one bit's pulse width on the data line.
pub type PulseCode = u16;

/// Pulse codes emitted per LED (8 bits for each of three channels).
pub const BITS_PER_LED: usize = 24;

/// Byte order expected by the LED chip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ChannelOrder {
    /// Red, green, blue. Used by WS2811 drivers.
    Rgb,

    /// Green, red, blue. Used by WS2812 parts.
    #[default]
    Grb,
}

impl ChannelOrder {
    /// Packs a color into the 24-bit word sent on the wire.
    ///
    /// The first channel lands in bits 23-16, the second in 15-8 and blue
    /// always in 7-0.
    #[inline]
    pub const fn pack(self, rgb: Rgb24) -> u32 {
        let (high, mid) = match self {
            ChannelOrder::Rgb => (rgb.r, rgb.g),
            ChannelOrder::Grb => (rgb.g, rgb.r),
        };
        ((high as u32) << 16) | ((mid as u32) << 8) | (rgb.b as u32)
    }
}

/// Raw selector as stored in configuration: `0` is RGB, anything else GRB.
impl From<u8> for ChannelOrder {
    fn from(raw: u8) -> Self {
        match raw {
            0 => ChannelOrder::Rgb,
            _ => ChannelOrder::Grb,
        }
    }
}

/// Failures reported by a [`StripBackend`](crate::StripBackend) during setup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BackendError {
    /// The output target does not name a usable pin.
    InvalidTarget,

    /// Timer or DMA configuration failed.
    PeripheralSetup,
}

impl core::fmt::Display for BackendError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            BackendError::InvalidTarget => write!(f, "invalid output target"),
            BackendError::PeripheralSetup => write!(f, "timer/DMA setup failed"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for BackendError {}

/// Errors returned by strip operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum StripError {
    /// LED index is past the end of the strip.
    IndexOutOfRange {
        /// Requested index
        index: usize,
        /// Number of LEDs available
        len: usize,
    },

    /// Requested LED count exceeds the compile-time capacity.
    CapacityExceeded {
        /// Requested LED count
        requested: usize,
        /// Maximum LED count
        capacity: usize,
    },

    /// Source slice holds fewer colors than the strip has LEDs.
    SourceTooShort {
        /// Colors needed
        expected: usize,
        /// Colors provided
        actual: usize,
    },

    /// Operation called from an invalid state.
    InvalidState {
        /// Human-readable description of the expected state(s)
        expected: &'static str,
        /// The actual current state
        actual: StripState,
    },

    /// A transfer is still streaming the frame.
    TransferInProgress,

    /// Hardware initialization failed.
    Hardware(BackendError),
}

impl core::fmt::Display for StripError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            StripError::IndexOutOfRange { index, len } => {
                write!(f, "LED index {} out of range for strip of {}", index, len)
            }
            StripError::CapacityExceeded {
                requested,
                capacity,
            } => {
                write!(
                    f,
                    "{} LEDs requested, capacity is {}",
                    requested, capacity
                )
            }
            StripError::SourceTooShort { expected, actual } => {
                write!(f, "expected {} colors, got {}", expected, actual)
            }
            StripError::InvalidState { expected, actual } => {
                write!(
                    f,
                    "invalid state: expected {}, but strip is {:?}",
                    expected, actual
                )
            }
            StripError::TransferInProgress => write!(f, "transfer in progress"),
            StripError::Hardware(err) => write!(f, "hardware error: {}", err),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for StripError {}

impl From<BackendError> for StripError {
    fn from(err: BackendError) -> Self {
        StripError::Hardware(err)
    }
}
