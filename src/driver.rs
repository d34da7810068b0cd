//! Strip driver with initialization state and transfer control.
//!
//! Provides [`Ws2811Strip`], which owns the color store and the pulse-code
//! frame for one strip and hands finished frames to the hardware. Also
//! defines the [`StripBackend`] trait for the timer/DMA side.

use crate::buffer::TransferBuffer;
use crate::colors::{HsvColor, hsv_to_rgb24};
use crate::encoder::{BitEncoder, PulseCodes};
use crate::store::ColorStore;
use crate::transfer::TransferFlag;
use crate::types::{BackendError, ChannelOrder, PulseCode, StripError};

/// Trait for abstracting the output hardware.
///
/// Implement this for the timer compare channel and DMA stream that drive
/// the data line.
pub trait StripBackend {
    /// Identifies the output pin to configure.
    type IoTarget: Copy;

    /// Configures the pin, timer and DMA stream for `target`.
    ///
    /// Called from [`Ws2811Strip::enable`] until it succeeds, and again after
    /// each [`Ws2811Strip::initialize`] of an enabled strip.
    fn init_hardware(&mut self, target: Self::IoTarget) -> Result<(), BackendError>;

    /// Starts streaming `frame` to the timer.
    ///
    /// Must return without waiting for the transfer. When the transfer has
    /// finished, the completion context calls [`TransferFlag::complete`];
    /// backends that transmit synchronously may call it on `done` before
    /// returning. The frame stays untouched until then.
    ///
    /// `frame` is borrowed only for the call, but the DMA stream keeps
    /// reading it afterwards: the owning [`Ws2811Strip`] must not be moved
    /// or dropped until the flag is cleared.
    fn start_transfer(&mut self, frame: &[PulseCode], done: &TransferFlag);
}

/// The current state of a strip driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum StripState {
    /// No output target recorded.
    Uninitialized,
    /// Target recorded, hardware not yet brought up.
    Configured,
    /// Ready to accept an update.
    Idle,
    /// A frame is being streamed out.
    Busy,
}

/// Result of an update request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum UpdateStatus {
    /// Frame encoded and transfer started.
    Submitted,
    /// Dropped: the strip has not been enabled.
    NotEnabled,
    /// Dropped: the previous frame is still being sent.
    Busy,
}

/// Drives one WS2811/WS2812 strip.
///
/// Updates never block. A request made while the previous frame is still
/// streaming is dropped; the next periodic request encodes whatever the
/// color store holds at that point.
///
/// The frame is read by DMA after [`request_update`](Self::request_update)
/// returns, so keep the driver in place (typically in a `static`) and do not
/// move or drop it while [`TransferFlag::is_busy`] is true.
///
/// # Type Parameters
/// * `'f` - Lifetime of the transfer flag reference
/// * `B` - Hardware backend type
/// * `N` - Maximum number of LEDs
pub struct Ws2811Strip<'f, B: StripBackend, const N: usize> {
    backend: B,
    transfer: &'f TransferFlag,
    encoder: BitEncoder,
    colors: ColorStore<N>,
    frame: TransferBuffer<N>,
    target: Option<B::IoTarget>,
    enabled: bool,
}

impl<'f, B: StripBackend, const N: usize> Ws2811Strip<'f, B, N> {
    /// Creates a driver for `led_count` LEDs with a zeroed frame.
    ///
    /// The pulse codes are fixed for the lifetime of the driver.
    ///
    /// # Errors
    /// * `CapacityExceeded` - `led_count` is larger than `N`
    pub fn new(
        backend: B,
        transfer: &'f TransferFlag,
        codes: PulseCodes,
        led_count: usize,
    ) -> Result<Self, StripError> {
        Ok(Self {
            backend,
            transfer,
            encoder: BitEncoder::new(codes),
            colors: ColorStore::new(led_count)?,
            frame: TransferBuffer::new(led_count)?,
            target: None,
            enabled: false,
        })
    }

    /// Zeroes the frame and records the output target.
    ///
    /// The hardware is not touched until [`enable`](Self::enable). Calling
    /// this on an enabled strip returns it to `Configured`, so the next
    /// `enable` brings up the new target.
    ///
    /// # Errors
    /// * `TransferInProgress` - the frame is still being streamed
    pub fn initialize(&mut self, target: B::IoTarget) -> Result<(), StripError> {
        if self.transfer.is_busy() {
            return Err(StripError::TransferInProgress);
        }

        self.frame.clear();
        self.target = Some(target);
        self.enabled = false;

        #[cfg(feature = "defmt")]
        defmt::debug!("ws2811: initialized, {} LEDs", self.frame.led_count());

        Ok(())
    }

    /// Brings up the hardware and blanks the strip.
    ///
    /// Does nothing once the strip is enabled. On success every LED is set
    /// to black and a black frame is sent. A hardware failure leaves the
    /// driver in `Configured`, so `enable` can be retried.
    ///
    /// # Errors
    /// * `InvalidState` - [`initialize`](Self::initialize) has not been called
    /// * `TransferInProgress` - the shared flag is busy; nothing is touched
    /// * `Hardware` - the backend failed to set up the peripheral
    pub fn enable(&mut self) -> Result<(), StripError> {
        if self.enabled {
            return Ok(());
        }

        let target = self.target.ok_or(StripError::InvalidState {
            expected: "Configured",
            actual: self.state(),
        })?;

        if self.transfer.is_busy() {
            return Err(StripError::TransferInProgress);
        }

        if let Err(err) = self.backend.init_hardware(target) {
            #[cfg(feature = "defmt")]
            defmt::warn!("ws2811: hardware init failed: {}", err);
            return Err(err.into());
        }

        // Channel order does not matter for black
        self.colors.fill(HsvColor::BLACK);
        self.encode_and_submit(ChannelOrder::Rgb);
        self.enabled = true;

        #[cfg(feature = "defmt")]
        defmt::info!("ws2811: enabled");

        Ok(())
    }

    /// Returns true if the strip is enabled and no transfer is running.
    #[inline]
    pub fn is_ready(&self) -> bool {
        self.enabled && !self.transfer.is_busy()
    }

    /// Encodes every LED and starts a transfer.
    ///
    /// Dropped without side effects if the strip is not enabled or the
    /// previous transfer is still running. Nothing is queued.
    pub fn request_update(&mut self, order: ChannelOrder) -> UpdateStatus {
        if !self.enabled {
            #[cfg(feature = "defmt")]
            defmt::trace!("ws2811: update dropped, not enabled");
            return UpdateStatus::NotEnabled;
        }

        if self.transfer.is_busy() {
            #[cfg(feature = "defmt")]
            defmt::trace!("ws2811: update dropped, transfer in progress");
            return UpdateStatus::Busy;
        }

        self.encode_and_submit(order);
        UpdateStatus::Submitted
    }

    /// Returns the current state of the driver.
    pub fn state(&self) -> StripState {
        match (self.enabled, self.target.is_some()) {
            (false, false) => StripState::Uninitialized,
            (false, true) => StripState::Configured,
            (true, _) if self.transfer.is_busy() => StripState::Busy,
            (true, _) => StripState::Idle,
        }
    }

    /// Number of LEDs on the strip.
    #[inline]
    pub fn led_count(&self) -> usize {
        self.colors.len()
    }

    /// The LED colors.
    pub fn colors(&self) -> &ColorStore<N> {
        &self.colors
    }

    /// Mutable access to the LED colors.
    ///
    /// Safe to use while a transfer is running; changes show up on the next
    /// submitted update.
    pub fn colors_mut(&mut self) -> &mut ColorStore<N> {
        &mut self.colors
    }

    /// The last encoded frame.
    pub fn frame(&self) -> &[PulseCode] {
        self.frame.as_slice()
    }

    /// Compare values used for 1 and 0 bits.
    pub fn pulse_codes(&self) -> PulseCodes {
        self.encoder.codes()
    }

    /// The hardware backend.
    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Mutable access to the hardware backend.
    pub fn backend_mut(&mut self) -> &mut B {
        &mut self.backend
    }

    fn encode_and_submit(&mut self, order: ChannelOrder) {
        // Regions are zipped with the store, which has the same length, so
        // the bounds check in `BitEncoder::encode_led` is not needed here.
        for (color, region) in self.colors.iter().zip(self.frame.regions_mut()) {
            let rgb = hsv_to_rgb24(*color);
            self.encoder.encode_word(order.pack(rgb), region);
        }

        self.transfer.begin();
        self.backend
            .start_transfer(self.frame.as_slice(), self.transfer);
    }
}
