//! Puncturing and depuncturing of the rate-1/2 mother code to the
//! 2/3 and 3/4 coding rates (802.11a clause 17.3.5.6, Table 17-9). Patterns
//! are the well-known IEEE 802.11a puncturing matrices, not derived or
//! guessed: rate 2/3 keeps 3 of every 4 coded bits (A1 B1 A2), rate 3/4
//! keeps 4 of every 6 (A1 B1 B2 A3).
use crate::convcode::ERASURE;
use crate::rates::RateParams;

/// `true` at a position means "transmitted", `false` means "punctured".
const PATTERN_2_3: [bool; 4] = [true, true, true, false];
const PATTERN_3_4: [bool; 6] = [true, true, false, true, true, false];

fn pattern_for(rate: &RateParams) -> Option<&'static [bool]> {
    match (rate.rel_rate_num, rate.rel_rate_den) {
        (1, 1) => None,
        (3, 4) => Some(&PATTERN_2_3),
        (2, 3) => Some(&PATTERN_3_4),
        _ => unreachable!("unknown relative coding rate"),
    }
}

/// Removes the punctured bits from a rate-1/2 coded stream, per `rate`.
pub fn puncture(coded_bits: &[u8], rate: &RateParams) -> Vec<u8> {
    match pattern_for(rate) {
        None => coded_bits.to_vec(),
        Some(pattern) => coded_bits
            .iter()
            .zip(pattern.iter().cycle())
            .filter(|(_, keep)| **keep)
            .map(|(b, _)| *b)
            .collect(),
    }
}

/// Reinserts erasures at the puncturing positions so the Viterbi decoder
/// sees a full rate-1/2 stream again. `punctured_bits` is expected to be
/// an exact multiple of the pattern's kept-bit count, which always holds
/// because puncturing only ever runs over whole interleaver blocks.
pub fn depuncture(punctured_bits: &[u8], rate: &RateParams) -> Vec<u8> {
    let pattern = match pattern_for(rate) {
        None => return punctured_bits.to_vec(),
        Some(p) => p,
    };
    let kept_per_group = pattern.iter().filter(|k| **k).count();
    assert_eq!(punctured_bits.len() % kept_per_group, 0);
    let groups = punctured_bits.len() / kept_per_group;
    let total = groups * pattern.len();

    let mut out = Vec::with_capacity(total);
    let mut src = punctured_bits.iter();
    for i in 0..total {
        if pattern[i % pattern.len()] {
            out.push(*src.next().expect("pattern/group arithmetic guarantees enough source bits"));
        } else {
            out.push(ERASURE);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rates::Rate;

    #[test]
    fn rate_1_2_is_unpunctured() {
        let rate = Rate::Rate1_2Bpsk.params();
        let bits = vec![1, 0, 1, 1, 0, 0];
        assert_eq!(puncture(&bits, &rate), bits);
        assert_eq!(depuncture(&bits, &rate), bits);
    }

    #[test]
    fn rate_2_3_keeps_three_of_four() {
        let rate = Rate::Rate2_3Bpsk.params();
        let coded = vec![1, 0, 1, 1, 0, 1, 1, 0];
        let p = puncture(&coded, &rate);
        assert_eq!(p.len(), 6);
        let d = depuncture(&p, &rate);
        assert_eq!(d.len(), coded.len());
        assert_eq!(d[3], ERASURE);
        assert_eq!(d[7], ERASURE);
    }

    #[test]
    fn rate_3_4_keeps_four_of_six() {
        let rate = Rate::Rate3_4Bpsk.params();
        let coded = vec![1, 0, 1, 1, 0, 1];
        let p = puncture(&coded, &rate);
        assert_eq!(p.len(), 4);
        let d = depuncture(&p, &rate);
        assert_eq!(d[2], ERASURE);
        assert_eq!(d[5], ERASURE);
    }
}
