//! Error taxonomy for the PHY.
//!
//! Four tiers, matching how failures actually propagate through the
//! pipeline: configuration mistakes fail a call immediately, transient
//! signal conditions (bad parity, CRC mismatch, no preamble) are absorbed
//! inside the receive stages and never reach this type, resource issues
//! from the SDR boundary are reported as events, and logic violations
//! are bugs and panic rather than returning an error.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum PhyError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Encoding(#[from] EncodingError),

    #[error(transparent)]
    Decoding(#[from] DecodingError),

    #[error(transparent)]
    Sdr(#[from] SdrError),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("unknown rate field {0:#x}")]
    UnknownRateField(u8),

    #[error("payload of {actual} bytes exceeds the maximum frame size of {max}")]
    PayloadTooLarge { actual: usize, max: usize },

    #[error("invalid scrambler seed: must be nonzero and fit in 7 bits, got {0}")]
    InvalidScramblerSeed(u8),

    #[error("invalid SDR parameter {field}: {reason}")]
    InvalidSdrParam { field: &'static str, reason: String },
}

#[derive(Debug, Error)]
pub enum EncodingError {
    #[error("buffer capacity {capacity} exceeded by write of size {size}")]
    BufferOverflow { capacity: usize, size: usize },

    #[error("symbol mapper received {actual} coded bits, expected a multiple of {cbps}")]
    MisalignedSymbolInput { actual: usize, cbps: usize },

    #[error("IFFT input length {actual} is not a multiple of the 64-point block size")]
    MisalignedFftInput { actual: usize },
}

#[derive(Debug, Error)]
pub enum DecodingError {
    #[error("no short training sequence found in {samples} samples")]
    NoFrameDetected { samples: usize },

    #[error("long training sequence cross-correlation peak not found")]
    NoTimingLock,

    #[error("PLCP header parity check failed")]
    HeaderParityMismatch,

    #[error("blind-recovered descrambler seed was zero, the one state the LFSR can never produce")]
    InvalidDescramblerSeed,

    #[error("CRC-32 mismatch: expected {expected:#010x}, computed {computed:#010x}")]
    ChecksumMismatch { expected: u32, computed: u32 },

    #[error("stage received a batch out of sequence with its frame state machine")]
    OutOfOrderBatch,
}

#[derive(Debug, Error)]
pub enum SdrError {
    #[error("burst send underflowed: device starved for samples")]
    SendUnderflow,

    #[error("sample receive overflowed the device buffer")]
    RecvOverflow,

    #[error("I/O error communicating with sample source/sink: {0}")]
    Io(String),
}

pub type Result<T> = std::result::Result<T, PhyError>;
