//! IEEE 802.11a OFDM PHY core: framing, coding, modulation, OFDM symbol
//! construction, and the staged receive pipeline, independent of any
//! particular SDR hardware.

pub mod block;
pub mod channel_est;
pub mod config;
pub mod convcode;
pub mod errors;
pub mod fft;
pub mod fft_symbols;
pub mod frame_builder;
pub mod frame_decoder;
pub mod frame_detector;
pub mod interleave;
pub mod logging;
pub mod phase_tracker;
pub mod ppdu;
pub mod preamble;
pub mod puncture;
pub mod qam;
pub mod rates;
pub mod receiver_chain;
pub mod scrambler;
pub mod sdr;
pub mod symbol_mapper;
pub mod tagged;
pub mod timing_sync;

pub use errors::{PhyError, Result};
pub use frame_builder::FrameBuilder;
pub use logging::PipelineEvent;
pub use rates::Rate;
pub use receiver_chain::ReceiverChain;
pub use sdr::{BurstSink, SampleSource};
