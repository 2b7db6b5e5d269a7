//! External interfaces to the SDR front-end. The core pins down only
//! what it consumes from a radio: a sink it can hand transmit samples
//! to, and a source it can pull receive samples from. Device
//! enumeration, calibration, and hardware-specific gain control are the
//! adapter's problem, not this crate's.

use num_complex::Complex64;

use crate::errors::SdrError;

pub trait BurstSink {
    /// Queues `samples` for transmission, returning as soon as they're
    /// accepted (may still be draining on the device side).
    fn send_burst(&mut self, samples: &[Complex64]) -> Result<(), SdrError>;

    /// Queues `samples` and blocks until the device confirms the burst
    /// has fully drained.
    fn send_burst_sync(&mut self, samples: &[Complex64]) -> Result<(), SdrError>;
}

pub trait SampleSource {
    /// Reads up to `n` samples into `buf`, appending rather than
    /// overwriting. May read fewer than `n` if the source doesn't have
    /// that many ready.
    fn recv(&mut self, n: usize, buf: &mut Vec<Complex64>) -> Result<(), SdrError>;
}
