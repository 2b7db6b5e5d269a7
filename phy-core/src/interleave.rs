//! Bit interleaver (802.11a clause 17.3.5.7): a two-step permutation
//! applied once per OFDM symbol's coded bits, parameterized on `cbps`
//! (coded bits per symbol) and `bpsc` (bits per subcarrier).
//!
//! First permutation: bit `k` moves to index `(cbps/16) * (k mod 16) +
//! floor(k/16)`, spreading adjacent coded bits across nonadjacent
//! subcarriers. Second permutation: bit `i` (the output of the first
//! step) moves to index `s * floor(i/s) + (i + cbps - floor(16*i/cbps))
//! mod s`, where `s = max(bpsc/2, 1)`, further spreading bits within an
//! OFDM symbol across the constellation's more- and less-significant bit
//! positions. Deinterleaving applies the exact inverses in reverse order.

pub fn interleave(bits: &[u8], cbps: usize, bpsc: usize) -> Vec<u8> {
    assert_eq!(bits.len(), cbps);
    let s = (bpsc / 2).max(1);
    let mut first = vec![0u8; cbps];
    for k in 0..cbps {
        let i = (cbps / 16) * (k % 16) + (k / 16);
        first[i] = bits[k];
    }
    let mut second = vec![0u8; cbps];
    for i in 0..cbps {
        let j = s * (i / s) + (i + cbps - (16 * i) / cbps) % s;
        second[j] = first[i];
    }
    second
}

pub fn deinterleave(bits: &[u8], cbps: usize, bpsc: usize) -> Vec<u8> {
    assert_eq!(bits.len(), cbps);
    let s = (bpsc / 2).max(1);
    let mut first = vec![0u8; cbps];
    for j in 0..cbps {
        let i = s * (j / s) + (j + (16 * j) / cbps) % s;
        first[i] = bits[j];
    }
    let mut original = vec![0u8; cbps];
    for i in 0..cbps {
        let k = 16 * (i % (cbps / 16)) + (i / (cbps / 16));
        original[k] = first[i];
    }
    original
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn round_trips_for_every_rate_shape() {
        for (cbps, bpsc) in [(48, 1), (96, 2), (192, 4), (288, 6)] {
            let bits: Vec<u8> = (0..cbps).map(|i| (i % 2) as u8).collect();
            let interleaved = interleave(&bits, cbps, bpsc);
            let back = deinterleave(&interleaved, cbps, bpsc);
            assert_eq!(back, bits, "cbps={cbps} bpsc={bpsc}");
        }
    }

    proptest! {
        #[test]
        fn round_trips_on_random_symbols(seed in 0u64..10000) {
            let cbps = 192;
            let bpsc = 4;
            let bits: Vec<u8> = (0..cbps).map(|i| (((seed as usize) + i) % 2) as u8).collect();
            let interleaved = interleave(&bits, cbps, bpsc);
            let back = deinterleave(&interleaved, cbps, bpsc);
            prop_assert_eq!(back, bits);
        }
    }
}
