//! FFT symbols: strips the cyclic prefix and runs the forward 64-point
//! FFT over each OFDM symbol once `timing_sync` has located the LTS.
//!
//! `LtsStart` marks the first sample of the 32-sample CP shared by both
//! LTS copies, not the first sample of LTS1 itself (`timing_sync` tags
//! per the same LTS_START/LTS1/LTS2 chain 802.11a defines), so this
//! stage discards that CP before collecting the real 64-sample LTS1
//! symbol; every data symbol that follows is its own 16-sample CP
//! followed by 64 samples and is stripped here before the FFT.
//!
//! A fresh `LtsStart` tag always wins over whatever symbol is
//! in flight: a new preamble in the stream means a new frame is
//! starting, and any partially accumulated data symbol belongs to a
//! frame that's no longer worth finishing.

use crate::block::{check_capacity, Stage};
use crate::errors::EncodingError;
use crate::fft::Kernel;
use crate::preamble::{LTS_CP_LEN, LTS_LEN};
use crate::tagged::{Tag, TaggedSample, TaggedVector};

const CP_LEN: usize = 16;
const SYMBOL_LEN: usize = 64;
const SYMBOL_WITH_CP_LEN: usize = CP_LEN + SYMBOL_LEN;

enum State {
    Idle,
    /// `LtsStart` marks the first sample of the 32-sample LTS cyclic
    /// prefix, not the first sample of the real LTS1 symbol; this many
    /// more CP samples are discarded before collection starts.
    SkipLtsCp(usize),
    CollectLts1(Vec<TaggedSample>),
    CollectLts2(Vec<TaggedSample>),
    CollectData(Vec<TaggedSample>, bool),
}

pub struct FftSymbols {
    fft: Kernel,
    state: State,
}

impl FftSymbols {
    pub fn new() -> Self {
        FftSymbols { fft: Kernel::new(), state: State::Idle }
    }

    fn fft_of(&self, samples: &[TaggedSample]) -> [num_complex::Complex64; SYMBOL_LEN] {
        let mut block: [num_complex::Complex64; SYMBOL_LEN] =
            std::array::from_fn(|i| samples[i].sample);
        self.fft.forward(&mut block);
        block
    }

    pub fn transform(&mut self, input: &[TaggedSample]) -> Vec<TaggedVector<SYMBOL_LEN>> {
        let mut output = Vec::new();

        for &sample in input {
            if sample.tag == Tag::LtsStart {
                self.state = State::SkipLtsCp(LTS_CP_LEN - 1);
                continue;
            }

            match &mut self.state {
                State::Idle => {}
                State::SkipLtsCp(remaining) => {
                    if *remaining > 1 {
                        *remaining -= 1;
                    } else {
                        self.state = State::CollectLts1(Vec::with_capacity(LTS_LEN));
                    }
                }
                State::CollectLts1(buf) => {
                    buf.push(sample);
                    if buf.len() == LTS_LEN {
                        let freq = self.fft_of(buf);
                        output.push(TaggedVector::new(freq, Tag::Lts1));
                        self.state = State::CollectLts2(Vec::with_capacity(LTS_LEN));
                    }
                }
                State::CollectLts2(buf) => {
                    buf.push(sample);
                    if buf.len() == LTS_LEN {
                        let freq = self.fft_of(buf);
                        output.push(TaggedVector::new(freq, Tag::Lts2));
                        self.state = State::CollectData(Vec::with_capacity(SYMBOL_WITH_CP_LEN), true);
                    }
                }
                State::CollectData(buf, is_first) => {
                    buf.push(sample);
                    if buf.len() == SYMBOL_WITH_CP_LEN {
                        let without_cp = &buf[CP_LEN..];
                        let freq = self.fft_of(without_cp);
                        let tag = if *is_first { Tag::StartOfFrame } else { Tag::None };
                        output.push(TaggedVector::new(freq, tag));
                        *is_first = false;
                        buf.clear();
                    }
                }
            }
        }

        output
    }
}

impl Default for FftSymbols {
    fn default() -> Self {
        Self::new()
    }
}

impl Stage for FftSymbols {
    type Input = TaggedSample;
    type Output = TaggedVector<SYMBOL_LEN>;

    fn name(&self) -> &str {
        "fft_symbols"
    }

    fn work(&mut self, input: &[TaggedSample], output: &mut Vec<TaggedVector<SYMBOL_LEN>>) -> Result<(), EncodingError> {
        output.extend(self.transform(input));
        check_capacity(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::preamble::LTS_FREQ_DOMAIN;
    use num_complex::Complex64;

    fn lts_time_domain() -> Vec<Complex64> {
        let kernel = Kernel::new();
        let mut data = LTS_FREQ_DOMAIN.to_vec();
        kernel.inverse(&mut data).unwrap();
        data
    }

    #[test]
    fn idle_without_lts_start_emits_nothing() {
        let mut stage = FftSymbols::new();
        let input = vec![TaggedSample::new(Complex64::new(1.0, 0.0), Tag::None); 200];
        assert!(stage.transform(&input).is_empty());
    }

    /// `LtsStart` plus a genuine 32-sample CP plus two real LTS copies,
    /// matching what `timing_sync` actually tags (the CP's first sample,
    /// not the real LTS1 symbol's first sample).
    fn lts_block_with_cp() -> Vec<TaggedSample> {
        let lts = lts_time_domain();
        let cp = &lts[LTS_LEN - LTS_CP_LEN..];
        let mut block = Vec::new();
        block.push(TaggedSample::new(cp[0], Tag::LtsStart));
        block.extend(cp[1..].iter().map(|&s| TaggedSample::new(s, Tag::None)));
        block.extend(lts.iter().map(|&s| TaggedSample::new(s, Tag::None)));
        block.extend(lts.iter().map(|&s| TaggedSample::new(s, Tag::None)));
        block
    }

    #[test]
    fn two_lts_copies_produce_two_frequency_symbols() {
        let input = lts_block_with_cp();

        let mut stage = FftSymbols::new();
        let out = stage.transform(&input);
        assert_eq!(out.len(), 2);
        assert_eq!(out[0].tag, Tag::Lts1);
        assert_eq!(out[1].tag, Tag::Lts2);
    }

    #[test]
    fn a_fresh_lts_start_abandons_partial_data_symbol() {
        let mut input = lts_block_with_cp();
        // Begin a data symbol but cut it short with a new LtsStart.
        for _ in 0..10 {
            input.push(TaggedSample::new(Complex64::new(0.0, 0.0), Tag::None));
        }
        input.extend(lts_block_with_cp());

        let mut stage = FftSymbols::new();
        let out = stage.transform(&input);
        assert_eq!(out.len(), 4);
        assert_eq!(out[2].tag, Tag::Lts1);
        assert_eq!(out[3].tag, Tag::Lts2);
    }
}
