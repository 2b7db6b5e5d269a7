//! Constellation mapping (802.11a clause 17.3.5.8, Table 17-10): Gray-coded
//! BPSK/QPSK/16-QAM/64-QAM with the standard normalization factors so each
//! constellation has unit average power.

use num_complex::Complex64;

use crate::rates::RateParams;

const SQRT2: f64 = std::f64::consts::SQRT_2;

fn kmod(bpsc: usize) -> f64 {
    match bpsc {
        1 => 1.0,
        2 => 1.0 / SQRT2,
        4 => 1.0 / 10f64.sqrt(),
        6 => 1.0 / 42f64.sqrt(),
        _ => unreachable!("unsupported bpsc"),
    }
}

/// Gray-coded amplitude for a 2-bit group (used directly for QPSK's I/Q,
/// and per-axis for 16-QAM).
fn amp_2bit(b0: u8, b1: u8) -> f64 {
    match (b0, b1) {
        (0, 0) => -3.0,
        (0, 1) => -1.0,
        (1, 1) => 1.0,
        (1, 0) => 3.0,
        _ => unreachable!(),
    }
}

fn bits_from_amp_2bit(amp: f64) -> (u8, u8) {
    // nearest of {-3,-1,1,3}
    let levels = [-3.0, -1.0, 1.0, 3.0];
    let nearest = levels
        .iter()
        .copied()
        .min_by(|a, b| (a - amp).abs().partial_cmp(&(b - amp).abs()).unwrap())
        .unwrap();
    match nearest as i32 {
        -3 => (0, 0),
        -1 => (0, 1),
        1 => (1, 1),
        3 => (1, 0),
        _ => unreachable!(),
    }
}

fn amp_3bit(b0: u8, b1: u8, b2: u8) -> f64 {
    match (b0, b1, b2) {
        (0, 0, 0) => -7.0,
        (0, 0, 1) => -5.0,
        (0, 1, 1) => -3.0,
        (0, 1, 0) => -1.0,
        (1, 1, 0) => 1.0,
        (1, 1, 1) => 3.0,
        (1, 0, 1) => 5.0,
        (1, 0, 0) => 7.0,
        _ => unreachable!(),
    }
}

fn bits_from_amp_3bit(amp: f64) -> (u8, u8, u8) {
    let levels = [-7.0, -5.0, -3.0, -1.0, 1.0, 3.0, 5.0, 7.0];
    let nearest = levels
        .iter()
        .copied()
        .min_by(|a, b| (a - amp).abs().partial_cmp(&(b - amp).abs()).unwrap())
        .unwrap();
    match nearest as i32 {
        -7 => (0, 0, 0),
        -5 => (0, 0, 1),
        -3 => (0, 1, 1),
        -1 => (0, 1, 0),
        1 => (1, 1, 0),
        3 => (1, 1, 1),
        5 => (1, 0, 1),
        7 => (1, 0, 0),
        _ => unreachable!(),
    }
}

/// Maps `bpsc`-sized groups of coded bits to normalized constellation
/// points, one point per group.
pub fn map_bits(bits: &[u8], rate: &RateParams) -> Vec<Complex64> {
    let bpsc = rate.bpsc;
    assert_eq!(bits.len() % bpsc, 0);
    let scale = kmod(bpsc);
    bits.chunks(bpsc)
        .map(|g| {
            let (i, q) = match bpsc {
                1 => (sign_only(g[0]), 0.0),
                2 => (sign_only(g[0]), sign_only(g[1])),
                4 => (amp_2bit(g[0], g[1]), amp_2bit(g[2], g[3])),
                6 => (amp_3bit(g[0], g[1], g[2]), amp_3bit(g[3], g[4], g[5])),
                _ => unreachable!(),
            };
            Complex64::new(i * scale, q * scale)
        })
        .collect()
}

fn sign_only(b: u8) -> f64 {
    if b == 1 {
        1.0
    } else {
        -1.0
    }
}

/// Hard-decision demaps normalized constellation points back to `bpsc`
/// coded bits per point, by nearest-point (squared-distance) lookup.
pub fn demap_symbols(symbols: &[Complex64], rate: &RateParams) -> Vec<u8> {
    let bpsc = rate.bpsc;
    let scale = kmod(bpsc);
    let mut out = Vec::with_capacity(symbols.len() * bpsc);
    for sym in symbols {
        let i = sym.re / scale;
        let q = sym.im / scale;
        match bpsc {
            1 => out.push(if i >= 0.0 { 1 } else { 0 }),
            2 => {
                out.push(if i >= 0.0 { 1 } else { 0 });
                out.push(if q >= 0.0 { 1 } else { 0 });
            }
            4 => {
                let (b0, b1) = bits_from_amp_2bit(i);
                let (b2, b3) = bits_from_amp_2bit(q);
                out.extend_from_slice(&[b0, b1, b2, b3]);
            }
            6 => {
                let (b0, b1, b2) = bits_from_amp_3bit(i);
                let (b3, b4, b5) = bits_from_amp_3bit(q);
                out.extend_from_slice(&[b0, b1, b2, b3, b4, b5]);
            }
            _ => unreachable!(),
        }
    }
    out
}
