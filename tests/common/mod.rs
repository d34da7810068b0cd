//! Shared test infrastructure for ws2811-strip integration tests

#![allow(dead_code)] // Items used across multiple test files; Rust analyzes per-file

use ws2811_strip::{BITS_PER_LED, BackendError, PulseCode, PulseCodes, StripBackend, TransferFlag};

// ============================================================================
// Pulse codes
// ============================================================================

pub const ONE: PulseCode = 40;
pub const ZERO: PulseCode = 20;
pub const CODES: PulseCodes = PulseCodes::new(ONE, ZERO);

/// Output pin accepted by the mock backend; pin 0 is rejected.
pub const PIN: u8 = 4;

// ============================================================================
// Mock Backend
// ============================================================================

/// Mock backend that records every initialization and submitted frame
pub struct MockBackend {
    init_calls: usize,
    fail_init: bool,
    complete_immediately: bool,
    frames: Vec<Vec<PulseCode>>,
}

impl MockBackend {
    pub fn new() -> Self {
        Self {
            init_calls: 0,
            fail_init: false,
            complete_immediately: false,
            frames: Vec::new(),
        }
    }

    /// Backend whose peripheral setup always fails
    pub fn failing() -> Self {
        Self {
            fail_init: true,
            ..Self::new()
        }
    }

    /// Backend that finishes every transfer before returning
    pub fn blocking() -> Self {
        Self {
            complete_immediately: true,
            ..Self::new()
        }
    }

    pub fn set_fail_init(&mut self, fail: bool) {
        self.fail_init = fail;
    }

    pub fn init_calls(&self) -> usize {
        self.init_calls
    }

    pub fn frames(&self) -> &[Vec<PulseCode>] {
        &self.frames
    }

    pub fn last_frame(&self) -> Option<&[PulseCode]> {
        self.frames.last().map(|f| f.as_slice())
    }
}

impl StripBackend for MockBackend {
    type IoTarget = u8;

    fn init_hardware(&mut self, pin: u8) -> Result<(), BackendError> {
        self.init_calls += 1;
        if pin == 0 {
            return Err(BackendError::InvalidTarget);
        }
        if self.fail_init {
            return Err(BackendError::PeripheralSetup);
        }
        Ok(())
    }

    fn start_transfer(&mut self, frame: &[PulseCode], done: &TransferFlag) {
        self.frames.push(frame.to_vec());
        if self.complete_immediately {
            done.complete();
        }
    }
}

// ============================================================================
// Test Helper Functions
// ============================================================================

/// Expected 24-slot region for a packed word, MSB first
pub fn expected_region(word: u32) -> [PulseCode; BITS_PER_LED] {
    let mut region = [ZERO; BITS_PER_LED];
    for (offset, slot) in region.iter_mut().enumerate() {
        if word & (1 << (23 - offset)) != 0 {
            *slot = ONE;
        }
    }
    region
}

/// Decodes a 24-slot region back to its word, panicking on foreign codes
pub fn decode_region(region: &[PulseCode]) -> u32 {
    assert_eq!(region.len(), BITS_PER_LED);
    region.iter().fold(0, |word, &code| match code {
        ONE => (word << 1) | 1,
        ZERO => word << 1,
        other => panic!("unexpected pulse code {}", other),
    })
}
