//! Channel estimation: averages the two frequency-domain LTS copies
//! against the known [`preamble::LTS_FREQ_DOMAIN`] reference to get a
//! per-subcarrier channel response `H`, then equalizes every data
//! symbol that follows by dividing out `H` (802.11a clause 17.3.3,
//! channel estimation from the long training sequence).
//!
//! Null subcarriers have no reference amplitude to estimate against;
//! `H` is left at unity there so equalization is a no-op on samples
//! that are already zero.

use crate::block::{check_capacity, Stage};
use crate::errors::EncodingError;
use crate::preamble::LTS_FREQ_DOMAIN;
use crate::tagged::{Tag, TaggedVector};
use num_complex::Complex64;

const SYMBOL_LEN: usize = 64;

pub struct ChannelEst {
    lts1: Option<[Complex64; SYMBOL_LEN]>,
    response: [Complex64; SYMBOL_LEN],
}

impl ChannelEst {
    pub fn new() -> Self {
        ChannelEst { lts1: None, response: [Complex64::new(1.0, 0.0); SYMBOL_LEN] }
    }

    pub fn equalize(&mut self, input: &[TaggedVector<SYMBOL_LEN>]) -> Vec<TaggedVector<SYMBOL_LEN>> {
        let mut output = Vec::with_capacity(input.len());
        for symbol in input {
            match symbol.tag {
                Tag::Lts1 => {
                    self.lts1 = Some(symbol.samples);
                }
                Tag::Lts2 => {
                    if let Some(lts1) = self.lts1.take() {
                        self.response = std::array::from_fn(|i| {
                            let reference = LTS_FREQ_DOMAIN[i];
                            if reference.norm_sqr() > 0.0 {
                                (lts1[i] + symbol.samples[i]) / (2.0 * reference)
                            } else {
                                Complex64::new(1.0, 0.0)
                            }
                        });
                    }
                }
                _ => {
                    let equalized: [Complex64; SYMBOL_LEN] = std::array::from_fn(|i| {
                        if self.response[i].norm_sqr() > 1e-12 {
                            symbol.samples[i] / self.response[i]
                        } else {
                            symbol.samples[i]
                        }
                    });
                    output.push(TaggedVector::new(equalized, symbol.tag));
                }
            }
        }
        output
    }
}

impl Default for ChannelEst {
    fn default() -> Self {
        Self::new()
    }
}

impl Stage for ChannelEst {
    type Input = TaggedVector<SYMBOL_LEN>;
    type Output = TaggedVector<SYMBOL_LEN>;

    fn name(&self) -> &str {
        "channel_est"
    }

    fn work(
        &mut self,
        input: &[TaggedVector<SYMBOL_LEN>],
        output: &mut Vec<TaggedVector<SYMBOL_LEN>>,
    ) -> Result<(), EncodingError> {
        output.extend(self.equalize(input));
        check_capacity(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lts_symbols_are_consumed_not_emitted() {
        let mut est = ChannelEst::new();
        let lts1 = TaggedVector::new(LTS_FREQ_DOMAIN, Tag::Lts1);
        let lts2 = TaggedVector::new(LTS_FREQ_DOMAIN, Tag::Lts2);
        let out = est.equalize(&[lts1, lts2]);
        assert!(out.is_empty());
    }

    #[test]
    fn unity_channel_passes_data_through_unchanged() {
        let mut est = ChannelEst::new();
        let lts1 = TaggedVector::new(LTS_FREQ_DOMAIN, Tag::Lts1);
        let lts2 = TaggedVector::new(LTS_FREQ_DOMAIN, Tag::Lts2);
        est.equalize(&[lts1, lts2]);

        let data = TaggedVector::new(LTS_FREQ_DOMAIN, Tag::StartOfFrame);
        let out = est.equalize(&[data]);
        assert_eq!(out.len(), 1);
        for (a, b) in out[0].samples.iter().zip(LTS_FREQ_DOMAIN.iter()) {
            assert!((a - b).norm() < 1e-9);
        }
    }

    #[test]
    fn scaled_channel_is_divided_out() {
        let mut est = ChannelEst::new();
        let scale = Complex64::new(2.0, 0.0);
        let scaled: [Complex64; SYMBOL_LEN] = std::array::from_fn(|i| LTS_FREQ_DOMAIN[i] * scale);
        let lts1 = TaggedVector::new(scaled, Tag::Lts1);
        let lts2 = TaggedVector::new(scaled, Tag::Lts2);
        est.equalize(&[lts1, lts2]);

        let data = TaggedVector::new(scaled, Tag::None);
        let out = est.equalize(&[data]);
        for (a, b) in out[0].samples.iter().zip(LTS_FREQ_DOMAIN.iter()) {
            assert!((a - b).norm() < 1e-9);
        }
    }
}
