//! Rate 1/2, constraint-length-7 convolutional code (802.11a clause
//! 17.3.5.5), generator polynomials G0 = 0o133, G1 = 0o171, and a
//! hard-decision Viterbi decoder for the reverse direction.

pub const CONSTRAINT_LENGTH: usize = 7;
pub const NUM_STATES: usize = 1 << (CONSTRAINT_LENGTH - 1);
const G0: u8 = 0o133;
const G1: u8 = 0o171;

/// Marks a punctured coded bit position so the Viterbi decoder can treat
/// it as an erasure (zero branch-metric contribution) instead of a wrong
/// hard decision.
pub const ERASURE: u8 = 2;

fn parity(mut v: u8) -> u8 {
    let mut p = 0u8;
    while v != 0 {
        p ^= v & 1;
        v >>= 1;
    }
    p
}

/// Encodes a stream of bits (0/1 bytes) at rate 1/2, producing interleaved
/// [A0, B0, A1, B1, ...] coded bits. The encoder's shift register starts
/// all-zero per frame, matching how the PLCP header and data field are
/// each encoded as a fresh stream starting from an all-zero state.
pub fn encode(bits: &[u8]) -> Vec<u8> {
    let mut shift_reg: u8 = 0;
    let mut out = Vec::with_capacity(bits.len() * 2);
    for &bit in bits {
        shift_reg = ((shift_reg << 1) | (bit & 1)) & 0x7F;
        out.push(parity(shift_reg & G0));
        out.push(parity(shift_reg & G1));
    }
    out
}

#[derive(Clone, Copy)]
struct PathMetric {
    cost: u32,
    prev_state: u8,
    bit: u8,
}

/// Decodes a rate-1/2 convolutionally-coded bit stream with the Viterbi
/// algorithm, hard-decision Hamming branch metrics, full traceback (no
/// truncation window — frames are short enough that this is cheap).
pub fn decode(coded_bits: &[u8]) -> Vec<u8> {
    assert_eq!(coded_bits.len() % 2, 0, "coded stream must be rate 1/2");
    let num_steps = coded_bits.len() / 2;

    let mut trellis: Vec<[PathMetric; NUM_STATES]> = Vec::with_capacity(num_steps + 1);
    let mut init = [PathMetric { cost: u32::MAX, prev_state: 0, bit: 0 }; NUM_STATES];
    init[0] = PathMetric { cost: 0, prev_state: 0, bit: 0 };
    trellis.push(init);

    for step in 0..num_steps {
        let rx_a = coded_bits[2 * step];
        let rx_b = coded_bits[2 * step + 1];
        let mut next = [PathMetric { cost: u32::MAX, prev_state: 0, bit: 0 }; NUM_STATES];
        let prev = trellis[step];

        for state in 0..NUM_STATES {
            if prev[state].cost == u32::MAX {
                continue;
            }
            for bit in 0..2u8 {
                let shift_reg = (((state as u8) << 1) | bit) & 0x7F;
                let out_a = parity(shift_reg & G0);
                let out_b = parity(shift_reg & G1);
                let cost_a = if rx_a == ERASURE { 0 } else { (out_a ^ rx_a) as u32 };
                let cost_b = if rx_b == ERASURE { 0 } else { (out_b ^ rx_b) as u32 };
                let branch_cost = cost_a + cost_b;
                let total = prev[state].cost + branch_cost;
                let next_state = (shift_reg & 0x3F) as usize;
                if total < next[next_state].cost {
                    next[next_state] = PathMetric {
                        cost: total,
                        prev_state: state as u8,
                        bit,
                    };
                }
            }
        }
        trellis.push(next);
    }

    let mut best_state = 0usize;
    let mut best_cost = u32::MAX;
    for state in 0..NUM_STATES {
        let cost = trellis[num_steps][state].cost;
        if cost < best_cost {
            best_cost = cost;
            best_state = state;
        }
    }

    let mut decoded = vec![0u8; num_steps];
    let mut state = best_state;
    for step in (0..num_steps).rev() {
        let pm = trellis[step + 1][state];
        decoded[step] = pm.bit;
        state = pm.prev_state as usize;
    }
    decoded
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn encode_doubles_bit_count() {
        let bits = vec![1, 0, 1, 1, 0];
        assert_eq!(encode(&bits).len(), bits.len() * 2);
    }

    #[test]
    fn clean_channel_round_trips() {
        let bits = vec![1, 0, 0, 1, 1, 1, 0, 0, 1, 0, 1, 1];
        let coded = encode(&bits);
        let decoded = decode(&coded);
        assert_eq!(decoded, bits);
    }

    #[test]
    fn erasures_are_tolerated() {
        let bits = vec![1, 0, 0, 1, 1, 1, 0, 0, 1, 0, 1, 1];
        let mut coded = encode(&bits);
        coded[3] = ERASURE;
        coded[10] = ERASURE;
        assert_eq!(decode(&coded), bits);
    }

    proptest! {
        #[test]
        fn round_trips_over_random_bits(bits in proptest::collection::vec(0u8..=1, 1..200)) {
            let coded = encode(&bits);
            let decoded = decode(&coded);
            prop_assert_eq!(decoded, bits);
        }
    }
}
