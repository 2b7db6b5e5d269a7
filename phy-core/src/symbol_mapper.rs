//! Subcarrier mapping (802.11a clause 17.3.5.9): places 48 data symbols
//! and 4 pilot symbols into a 64-point negative-first OFDM symbol, with
//! the DC subcarrier and guard bands left null (12 null subcarriers
//! total).
//!
//! Subcarrier indices run -32..=31; the used data/pilot range is -26..=26
//! excluding 0 (52 subcarriers), of which -21, -7, 7 and 21 carry pilots.
//! Everything else in -26..=26 is data (48 subcarriers); 0 and the guard
//! bands beyond ±26 are null.

use crate::scrambler::Scrambler;
use num_complex::Complex64;

pub const NUM_DATA_SUBCARRIERS: usize = 48;
pub const NUM_PILOT_SUBCARRIERS: usize = 4;
pub const NUM_NULL_SUBCARRIERS: usize = 12;
pub const PILOT_INDICES: [i32; 4] = [-21, -7, 7, 21];
const PILOT_REFERENCE: [f64; 4] = [1.0, 1.0, 1.0, -1.0];

/// Converts a signed subcarrier index (-32..=31) to an index into the
/// negative-first 64-element array used throughout this crate (matches
/// `fft::SUBCARRIER_MAP`'s domain).
fn subcarrier_slot(index: i32) -> usize {
    ((index + 64) % 64) as usize
}

fn is_pilot(index: i32) -> bool {
    PILOT_INDICES.contains(&index)
}

fn is_used(index: i32) -> bool {
    index != 0 && (-26..=26).contains(&index)
}

/// Generates the pilot polarity sequence (802.11a clause 17.3.5.9): the
/// same LFSR used by the data scrambler, seeded all-ones, run once per
/// OFDM symbol rather than once per bit. `polarity(n)` is +1 or -1.
pub fn pilot_polarity_sequence(num_symbols: usize) -> Vec<f64> {
    let mut scrambler = Scrambler::new(0x7F).expect("all-ones seed is valid");
    let mut ones = vec![1u8; num_symbols];
    scrambler.process(&mut ones);
    ones.iter().map(|&b| if b == 0 { 1.0 } else { -1.0 }).collect()
}

/// Maps one OFDM symbol's 48 data points onto the full 64-point
/// negative-first subcarrier array, inserting pilots (scaled by the
/// polarity for this symbol index) and leaving nulls at zero.
pub fn map_symbol(data: &[Complex64; NUM_DATA_SUBCARRIERS], polarity: f64) -> [Complex64; 64] {
    let mut out = [Complex64::new(0.0, 0.0); 64];
    let mut data_iter = data.iter();
    for index in -26..=26 {
        if index == 0 {
            continue;
        }
        let slot = subcarrier_slot(index);
        if is_pilot(index) {
            let pos = PILOT_INDICES.iter().position(|&p| p == index).unwrap();
            out[slot] = Complex64::new(PILOT_REFERENCE[pos] * polarity, 0.0);
        } else {
            out[slot] = *data_iter.next().expect("48 data subcarriers to fill");
        }
    }
    out
}

/// Extracts the 48 data points from a demodulated 64-point OFDM symbol,
/// in the same order `map_symbol` consumed them, discarding pilots and
/// nulls.
pub fn demap_symbol(symbol: &[Complex64; 64]) -> [Complex64; NUM_DATA_SUBCARRIERS] {
    let mut out = [Complex64::new(0.0, 0.0); NUM_DATA_SUBCARRIERS];
    let mut i = 0;
    for index in -26..=26 {
        if index == 0 || is_pilot(index) {
            continue;
        }
        out[i] = symbol[subcarrier_slot(index)];
        i += 1;
    }
    out
}

/// Returns the pilot subcarrier slot indices (in negative-first 0..64
/// array order) and the reference constellation values the receiver's
/// phase tracker should expect, before polarity scaling.
pub fn pilot_slots() -> [(usize, f64); 4] {
    std::array::from_fn(|i| (subcarrier_slot(PILOT_INDICES[i]), PILOT_REFERENCE[i]))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn map_then_demap_recovers_data() {
        let data: [Complex64; 48] = std::array::from_fn(|i| Complex64::new(i as f64, -(i as f64)));
        let mapped = map_symbol(&data, 1.0);
        let recovered = demap_symbol(&mapped);
        assert_eq!(recovered, data);
    }

    #[test]
    fn null_subcarriers_stay_zero() {
        let data = [Complex64::new(1.0, 1.0); 48];
        let mapped = map_symbol(&data, 1.0);
        assert_eq!(mapped[subcarrier_slot(0)], Complex64::new(0.0, 0.0));
        for g in [-32, -30, 27, 30].iter() {
            assert_eq!(mapped[subcarrier_slot(*g)], Complex64::new(0.0, 0.0));
        }
    }

    #[test]
    fn pilot_polarity_sequence_has_unit_magnitude() {
        let seq = pilot_polarity_sequence(200);
        assert!(seq.iter().all(|&p| p == 1.0 || p == -1.0));
    }
}
