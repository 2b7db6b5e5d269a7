//! Transmit pipeline: assembles a complete on-air burst from an MPDU.
//!
//! `build_frame` is the single public entry point: PPDU encode (header +
//! payload symbols) -> subcarrier map each 48-symbol group into a 64-point
//! OFDM symbol -> IFFT -> prepend a 16-sample cyclic prefix per symbol ->
//! prepend the 320-sample preamble.

use num_complex::Complex64;

use crate::errors::PhyError;
use crate::fft::Kernel;
use crate::ppdu::{self, PlcpHeader};
use crate::preamble;
use crate::rates::Rate;
use crate::symbol_mapper::{self, NUM_DATA_SUBCARRIERS};

const CP_LEN: usize = 16;
const SYMBOL_LEN: usize = 64;

pub struct FrameBuilder {
    ifft: Kernel,
}

impl FrameBuilder {
    pub fn new() -> Self {
        FrameBuilder { ifft: Kernel::new() }
    }

    /// Builds the complex baseband samples for one burst carrying `mpdu`
    /// at `rate`.
    pub fn build_frame(&self, mpdu: &[u8], rate: Rate) -> Result<Vec<Complex64>, PhyError> {
        let header = PlcpHeader::new(rate, mpdu.len())?;

        let header_symbols = ppdu::encode_header(header);
        let payload_symbols = ppdu::encode_payload(&header, mpdu)?;

        let mut all_symbols = header_symbols;
        all_symbols.extend(payload_symbols);

        let total_ofdm_symbols = 1 + header.num_symbols;
        assert_eq!(all_symbols.len(), total_ofdm_symbols * NUM_DATA_SUBCARRIERS);

        let polarities = symbol_mapper::pilot_polarity_sequence(total_ofdm_symbols);

        let mut subcarriers = Vec::with_capacity(total_ofdm_symbols * SYMBOL_LEN);
        for (sym_idx, chunk) in all_symbols.chunks(NUM_DATA_SUBCARRIERS).enumerate() {
            let data: [Complex64; NUM_DATA_SUBCARRIERS] =
                chunk.try_into().expect("exactly 48 data points per OFDM symbol");
            let mapped = symbol_mapper::map_symbol(&data, polarities[sym_idx]);
            subcarriers.extend_from_slice(&mapped);
        }

        let mut time_domain = subcarriers;
        self.ifft.inverse(&mut time_domain)?;

        let mut with_cp = Vec::with_capacity(time_domain.len() + total_ofdm_symbols * CP_LEN);
        for symbol in time_domain.chunks(SYMBOL_LEN) {
            with_cp.extend_from_slice(&symbol[SYMBOL_LEN - CP_LEN..]);
            with_cp.extend_from_slice(symbol);
        }

        let mut burst = preamble::preamble_samples();
        burst.extend(with_cp);
        Ok(burst)
    }
}

impl Default for FrameBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frame_length_matches_preamble_plus_symbols() {
        let builder = FrameBuilder::new();
        let mpdu = b"ABC".to_vec();
        let rate = Rate::Rate1_2Bpsk;
        let header = PlcpHeader::new(rate, mpdu.len()).unwrap();
        let samples = builder.build_frame(&mpdu, rate).unwrap();
        let expected = preamble::PREAMBLE_LEN + (1 + header.num_symbols) * 80;
        assert_eq!(samples.len(), expected);
    }

    #[test]
    fn rejects_oversized_payload() {
        let builder = FrameBuilder::new();
        let mpdu = vec![0u8; ppdu::MAX_FRAME_SIZE + 1];
        assert!(builder.build_frame(&mpdu, Rate::Rate1_2Bpsk).is_err());
    }
}
