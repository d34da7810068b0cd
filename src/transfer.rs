//! Busy flag shared between the driver and the transfer-complete context.

use core::sync::atomic::{AtomicBool, Ordering};

/// Marks whether the frame is currently being streamed out.
///
/// The driver sets the flag right before starting a transfer; the DMA
/// transfer-complete interrupt (or a synchronous backend) clears it with
/// [`complete`](Self::complete). Place it in a `static` when the interrupt
/// handler needs to reach it.
///
/// Only plain loads and stores are used, so this works on cores without
/// compare-and-swap.
#[derive(Debug, Default)]
pub struct TransferFlag {
    in_progress: AtomicBool,
}

impl TransferFlag {
    /// Creates an idle flag.
    pub const fn new() -> Self {
        Self {
            in_progress: AtomicBool::new(false),
        }
    }

    /// Returns true while a transfer is running.
    #[inline]
    pub fn is_busy(&self) -> bool {
        self.in_progress.load(Ordering::Acquire)
    }

    /// Signals that the transfer has finished and the frame may be rewritten.
    #[inline]
    pub fn complete(&self) {
        self.in_progress.store(false, Ordering::Release);
    }

    #[inline]
    pub(crate) fn begin(&self) {
        self.in_progress.store(true, Ordering::Release);
    }
}
