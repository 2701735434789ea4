//! I/O Port: the CPU core's abstract 256-entry port space.
//!
//! The 8080 emits the port number on both halves of the 16-bit address bus
//! during IN/OUT; the interface carries the port number twice (`port`,
//! `addr_low_copy`) to preserve that contract for devices that observe it.
//! Implementation is external to the core (spec §3/§4.2).

/// A byte-addressable 256-entry port space.
pub trait Io {
    /// Read the byte presented on `port`. `addr_low_copy` always equals
    /// `port`; it mirrors the low half of the address bus the 8080 drives
    /// during IN and is typically ignored by collaborators.
    fn input(&mut self, port: u8, addr_low_copy: u8) -> u8;
    /// Write `value` to `port`. `addr_low_copy` always equals `port`.
    fn output(&mut self, port: u8, addr_low_copy: u8, value: u8);
}

/// An `Io` implementation with no attached devices: every `IN` reads 0xFF,
/// every `OUT` is discarded. Useful for tests that only exercise the CPU's
/// arithmetic/branch/stack behavior.
#[derive(Debug, Default)]
pub struct NullIo;

impl Io for NullIo {
    fn input(&mut self, _port: u8, _addr_low_copy: u8) -> u8 {
        0xFF
    }

    fn output(&mut self, _port: u8, _addr_low_copy: u8, _value: u8) {}
}

/// An `Io` implementation that records the last value written to each port
/// and returns a caller-programmed value on read, for exercising the IN/OUT
/// opcodes in tests without a real device attached.
#[derive(Debug, Default)]
pub struct LoopbackIo {
    inputs: [u8; 256],
    last_output: [Option<u8>; 256],
}

impl LoopbackIo {
    /// A fresh loopback with every input defaulting to 0x00.
    pub fn new() -> Self {
        Self {
            inputs: [0u8; 256],
            last_output: [None; 256],
        }
    }

    /// Program the byte a subsequent `IN port` will return.
    pub fn set_input(&mut self, port: u8, value: u8) {
        self.inputs[port as usize] = value;
    }

    /// The last value written via `OUT port`, if any.
    pub fn last_output(&self, port: u8) -> Option<u8> {
        self.last_output[port as usize]
    }
}

impl Io for LoopbackIo {
    fn input(&mut self, port: u8, addr_low_copy: u8) -> u8 {
        debug_assert_eq!(port, addr_low_copy);
        self.inputs[port as usize]
    }

    fn output(&mut self, port: u8, addr_low_copy: u8, value: u8) {
        debug_assert_eq!(port, addr_low_copy);
        self.last_output[port as usize] = Some(value);
    }
}
