//! 64-point FFT/IFFT wrapper around `rustfft`.
//!
//! 802.11a subcarriers are indexed by frequency sign: 0 is DC, 1..=26 are
//! the positive subcarriers and 38..=63 (i.e. -26..=-1) are the negative
//! ones, wrapped to natural FFT order. `SUBCARRIER_MAP` reorders between
//! "negative-first" (what `symbol_mapper` produces and consumes) and the
//! natural 0..64 order `rustfft` operates in.

use crate::errors::EncodingError;
use num_complex::Complex64;
use rustfft::{Fft, FftPlanner};
use std::sync::Arc;

pub const FFT_LEN: usize = 64;

/// `SUBCARRIER_MAP[k]` is the natural-order FFT bin holding negative-first
/// logical subcarrier `k`. The first half (0..32) maps to bins 32..64
/// (the negative frequencies) and the second half (32..64) maps to bins
/// 0..32 (DC and positive frequencies).
pub const SUBCARRIER_MAP: [usize; FFT_LEN] = [
    32, 33, 34, 35, 36, 37, 38, 39, 40, 41, 42, 43, 44, 45, 46, 47, 48, 49, 50, 51, 52, 53, 54,
    55, 56, 57, 58, 59, 60, 61, 62, 63, 0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 16,
    17, 18, 19, 20, 21, 22, 23, 24, 25, 26, 27, 28, 29, 30, 31,
];

/// Owns the forward and inverse 64-point FFT plans for one pipeline
/// direction. Never shared across threads; each stage that needs an FFT
/// constructs and owns its own `Kernel`.
pub struct Kernel {
    forward: Arc<dyn Fft<f64>>,
    inverse: Arc<dyn Fft<f64>>,
}

impl Kernel {
    pub fn new() -> Self {
        let mut planner = FftPlanner::new();
        Kernel {
            forward: planner.plan_fft_forward(FFT_LEN),
            inverse: planner.plan_fft_inverse(FFT_LEN),
        }
    }

    /// In-place 64-point forward FFT of one OFDM symbol's time-domain
    /// samples, reordered to negative-first subcarrier order.
    pub fn forward(&self, data: &mut [Complex64; FFT_LEN]) {
        let mut scratch = *data;
        self.forward.process(&mut scratch);
        for s in 0..FFT_LEN {
            data[s] = scratch[SUBCARRIER_MAP[s]];
        }
    }

    /// In-place 64-point inverse FFT over every consecutive 64-sample
    /// block of `data`, consuming negative-first subcarrier order and
    /// scaling by 1/64 as `rustfft`'s unnormalized inverse does not.
    pub fn inverse(&self, data: &mut [Complex64]) -> Result<(), EncodingError> {
        if data.len() % FFT_LEN != 0 {
            return Err(EncodingError::MisalignedFftInput { actual: data.len() });
        }
        for block in data.chunks_mut(FFT_LEN) {
            let mut natural = [Complex64::new(0.0, 0.0); FFT_LEN];
            for s in 0..FFT_LEN {
                natural[s] = block[SUBCARRIER_MAP[s]];
            }
            self.inverse.process(&mut natural);
            for s in 0..FFT_LEN {
                block[s] = natural[s] / FFT_LEN as f64;
            }
        }
        Ok(())
    }
}

impl Default for Kernel {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn inverse_then_forward_round_trips() {
        let kernel = Kernel::new();
        let original: [Complex64; FFT_LEN] =
            std::array::from_fn(|i| Complex64::new((i as f64).cos(), (i as f64).sin()));
        let mut data = original.to_vec();
        kernel.inverse(&mut data).unwrap();
        let mut block: [Complex64; FFT_LEN] = data.try_into().unwrap();
        kernel.forward(&mut block);
        for i in 0..FFT_LEN {
            assert_abs_diff_eq!(block[i].re, original[i].re, epsilon = 1e-9);
            assert_abs_diff_eq!(block[i].im, original[i].im, epsilon = 1e-9);
        }
    }

    #[test]
    fn inverse_rejects_misaligned_length() {
        let kernel = Kernel::new();
        let mut data = vec![Complex64::new(0.0, 0.0); 63];
        assert!(kernel.inverse(&mut data).is_err());
    }

    #[test]
    fn dc_only_input_inverse_ffts_to_constant() {
        let kernel = Kernel::new();
        let mut data = vec![Complex64::new(0.0, 0.0); FFT_LEN];
        // Logical subcarrier 0 in negative-first order is natural bin 32 (DC).
        data[32] = Complex64::new(64.0, 0.0);
        kernel.inverse(&mut data).unwrap();
        for sample in &data {
            assert_abs_diff_eq!(sample.re, 1.0, epsilon = 1e-9);
            assert_abs_diff_eq!(sample.im, 0.0, epsilon = 1e-9);
        }
    }
}
