//! Phase tracker: uses the 4 pilot subcarriers to estimate and correct
//! residual carrier-frequency-offset phase drift left over after
//! channel equalization (802.11a clause 17.3.5.9), then demaps each
//! corrected symbol down to its 48 data points for the frame decoder.
//!
//! Pilot polarity is per-OFDM-symbol, counted from the most recent
//! `StartOfFrame` tag — this has to track `frame_builder`'s own
//! numbering exactly (the header symbol is index 0) or the expected
//! pilot signs drift out of phase with the transmitter's.

use crate::block::{check_capacity, Stage};
use crate::errors::EncodingError;
use crate::symbol_mapper::{self, NUM_DATA_SUBCARRIERS};
use crate::tagged::{Tag, TaggedVector};
use num_complex::Complex64;

const SYMBOL_LEN: usize = 64;
const POLARITY_TABLE_LEN: usize = 4096;

pub struct PhaseTracker {
    polarities: Vec<f64>,
    symbol_index: usize,
}

impl PhaseTracker {
    pub fn new() -> Self {
        PhaseTracker {
            polarities: symbol_mapper::pilot_polarity_sequence(POLARITY_TABLE_LEN),
            symbol_index: 0,
        }
    }

    pub fn track(&mut self, input: &[TaggedVector<SYMBOL_LEN>]) -> Vec<TaggedVector<NUM_DATA_SUBCARRIERS>> {
        let mut output = Vec::with_capacity(input.len());
        let pilot_slots = symbol_mapper::pilot_slots();

        for symbol in input {
            if symbol.tag == Tag::StartOfFrame {
                self.symbol_index = 0;
            }
            let polarity = self.polarities[self.symbol_index % self.polarities.len()];

            let mut error = Complex64::new(0.0, 0.0);
            for &(slot, reference) in &pilot_slots {
                let expected = Complex64::new(reference * polarity, 0.0);
                error += symbol.samples[slot] * expected.conj();
            }
            let phase = error.arg();
            let correction = Complex64::from_polar(1.0, -phase);
            let corrected: [Complex64; SYMBOL_LEN] =
                std::array::from_fn(|i| symbol.samples[i] * correction);

            let demapped = symbol_mapper::demap_symbol(&corrected);
            output.push(TaggedVector::new(demapped, symbol.tag));
            self.symbol_index += 1;
        }

        output
    }
}

impl Default for PhaseTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl Stage for PhaseTracker {
    type Input = TaggedVector<SYMBOL_LEN>;
    type Output = TaggedVector<NUM_DATA_SUBCARRIERS>;

    fn name(&self) -> &str {
        "phase_tracker"
    }

    fn work(
        &mut self,
        input: &[TaggedVector<SYMBOL_LEN>],
        output: &mut Vec<TaggedVector<NUM_DATA_SUBCARRIERS>>,
    ) -> Result<(), EncodingError> {
        output.extend(self.track(input));
        check_capacity(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_phase_error_leaves_data_points_unchanged() {
        let mut tracker = PhaseTracker::new();
        let data: [Complex64; 48] = std::array::from_fn(|i| Complex64::new(i as f64 + 1.0, 0.0));
        let mapped = symbol_mapper::map_symbol(&data, tracker.polarities[0]);
        let symbol = TaggedVector::new(mapped, Tag::StartOfFrame);

        let out = tracker.track(&[symbol]);
        assert_eq!(out.len(), 1);
        for (a, b) in out[0].samples.iter().zip(data.iter()) {
            assert!((a - b).norm() < 1e-9);
        }
    }

    #[test]
    fn a_rotated_symbol_is_corrected_back() {
        let mut tracker = PhaseTracker::new();
        let data: [Complex64; 48] = std::array::from_fn(|i| Complex64::new(i as f64 + 1.0, 0.5));
        let mut mapped = symbol_mapper::map_symbol(&data, tracker.polarities[0]);
        let rotation = Complex64::from_polar(1.0, 0.3);
        for s in mapped.iter_mut() {
            *s *= rotation;
        }
        let symbol = TaggedVector::new(mapped, Tag::StartOfFrame);

        let out = tracker.track(&[symbol]);
        for (a, b) in out[0].samples.iter().zip(data.iter()) {
            assert!((a - b).norm() < 1e-6);
        }
    }
}
