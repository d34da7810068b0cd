#![cfg_attr(not(feature = "std"), no_std)]
#![doc = include_str!("../README.md")]

//! # Core Concepts
//!
//! - **`Ws2811Strip`**: Owns the colors and the pulse-code frame of one strip and controls transfers
//! - **`StripBackend`**: Trait to implement for your timer/DMA hardware
//! - **`TransferFlag`**: Busy flag cleared by your transfer-complete interrupt
//! - **`ColorStore`**: One `HsvColor` per LED
//! - **`BitEncoder`**: Turns a 24-bit color word into 24 timer compare values
//! - **`PulseCodes`**: The compare values for a logical 1 and a logical 0
//! - **`ChannelOrder`**: Byte order of the LED chip (`Rgb` or `Grb`)
//!
//! Colors are converted from HSV to 8-bit RGB on every update, right before
//! encoding. The frame is only rewritten while no transfer is running.

pub mod buffer;
pub mod colors;
pub mod driver;
pub mod encoder;
pub mod store;
pub mod transfer;
pub mod types;

pub use buffer::TransferBuffer;
pub use colors::{HsvColor, Rgb24, hsv_to_rgb24};
pub use driver::{StripBackend, StripState, UpdateStatus, Ws2811Strip};
pub use encoder::{BitEncoder, PulseCodes, WS2811_CARRIER_HZ};
pub use store::ColorStore;
pub use transfer::TransferFlag;
pub use types::{BITS_PER_LED, BackendError, ChannelOrder, PulseCode, StripError};
