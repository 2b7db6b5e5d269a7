//! Timing sync: once `frame_detector` has flagged a plateau, finds the
//! sample-accurate LTS boundary by cross-correlating against the known
//! time-domain LTS and tags the Long Training Field's landmarks
//! (802.11a clause 17.3.3, fine timing/frequency acquisition).
//!
//! Runs only on samples from a `StsEnd` tag onward, which 802.11a's
//! framing guarantees lands on the first sample of the 32-sample cyclic
//! prefix shared by the two LTS copies. From there the documented offset
//! chain is fixed: `LtsStart` is that CP sample itself, `Lts1` is
//! `LtsStart + LTS_CP_LEN` (the true first LTS symbol, once the CP is
//! skipped), `Lts2` is `Lts1 + LTS_LEN`, and `StartOfFrame` — the first
//! DATA field sample — is `Lts2 + LTS_LEN`.
//!
//! The LTS1 boundary is found by cross-correlating a bounded window
//! after `StsEnd` against [`preamble::LTS_TIME_DOMAIN_CONJ`], normalized
//! the same way `frame_detector` normalizes its STS correlation. If no
//! candidate offset in that window clears the threshold, acquisition is
//! abandoned: no LTS/start-of-frame tags are emitted and the next
//! `StsEnd` starts a fresh search.

use std::sync::{Arc, Mutex};

use crate::block::{check_capacity, Stage};
use crate::errors::EncodingError;
use crate::logging::SignalLogger;
use crate::preamble::{LTS_CP_LEN, LTS_LEN, LTS_TIME_DOMAIN_CONJ};
use crate::tagged::{Tag, TaggedSample};

pub const DEFAULT_PEAK_THRESHOLD: f64 = 0.75;

/// How far past `StsEnd` the search for the true LTS1 boundary looks
/// before giving up. Four LTS lengths is generous slack for the coarse
/// timing error STS-based detection can leave behind.
const SEARCH_WINDOW: usize = 4 * LTS_LEN;

/// Samples needed from an `StsEnd` anchor to either confirm or rule out
/// a peak anywhere in the bounded window: the worst-case candidate sits
/// `SEARCH_WINDOW - 1` samples into the window, and from there a full
/// CP-plus-two-LTS-copies span must exist to tag every landmark.
const SEARCH_SPAN: usize = LTS_CP_LEN + SEARCH_WINDOW + 2 * LTS_LEN;

pub struct TimingSync {
    awaiting_lts: bool,
    carryover: Vec<TaggedSample>,
    threshold: f64,
    logger: Option<Arc<Mutex<SignalLogger>>>,
}

impl TimingSync {
    pub fn new(threshold: f64) -> Self {
        TimingSync { awaiting_lts: false, carryover: Vec::new(), threshold, logger: None }
    }

    pub fn with_logger(mut self, logger: Arc<Mutex<SignalLogger>>) -> Self {
        self.logger = Some(logger);
        self
    }

    /// Normalized cross-correlation of `window` (exactly `LTS_LEN`
    /// samples) against the reference LTS, in [0, 1] by Cauchy-Schwarz.
    fn correlate(window: &[TaggedSample]) -> f64 {
        let mut acc = num_complex::Complex64::new(0.0, 0.0);
        let mut window_power = 0.0;
        for (s, &coeff) in window.iter().zip(LTS_TIME_DOMAIN_CONJ.iter()) {
            acc += s.sample * coeff;
            window_power += s.sample.norm_sqr();
        }
        let ref_power: f64 = LTS_TIME_DOMAIN_CONJ.iter().map(|c| c.norm_sqr()).sum();
        let denom = (window_power * ref_power).sqrt();
        if denom > 0.0 {
            acc.norm() / denom
        } else {
            0.0
        }
    }

    pub fn sync(&mut self, input: &[TaggedSample]) -> Vec<TaggedSample> {
        let mut buffer: Vec<TaggedSample> = self.carryover.drain(..).chain(input.iter().copied()).collect();
        let mut output = Vec::with_capacity(buffer.len());
        let mut i = 0;

        while i < buffer.len() {
            let sample = buffer[i];
            if sample.tag == Tag::StsEnd {
                self.awaiting_lts = true;
            }

            if self.awaiting_lts {
                if buffer.len() - i < SEARCH_SPAN {
                    self.carryover = buffer.split_off(i);
                    return output;
                }

                let (best_offset, best_score) = (0..SEARCH_WINDOW)
                    .map(|o| {
                        let start = i + LTS_CP_LEN + o;
                        (o, Self::correlate(&buffer[start..start + LTS_LEN]))
                    })
                    .fold((0usize, f64::MIN), |best, cur| if cur.1 > best.1 { cur } else { best });

                self.awaiting_lts = false;

                if best_score < self.threshold {
                    if let Some(logger) = &self.logger {
                        logger.lock().unwrap().warn(
                            "TIMING_SYNC",
                            format!("LTS search abandoned: best score {best_score:.3} below threshold {}", self.threshold),
                        );
                    }
                    output.push(sample);
                    i += 1;
                    continue;
                }

                if let Some(logger) = &self.logger {
                    logger
                        .lock()
                        .unwrap()
                        .info("TIMING_SYNC", format!("LTS peak found at offset {best_offset}, score {best_score:.3}"));
                }

                let lts_start = i + best_offset;
                let lts1 = lts_start + LTS_CP_LEN;
                let lts2 = lts1 + LTS_LEN;
                let sof = lts2 + LTS_LEN;

                output.extend_from_slice(&buffer[i..lts_start]);
                let mut start = buffer[lts_start];
                start.tag = Tag::LtsStart;
                output.push(start);

                output.extend_from_slice(&buffer[lts_start + 1..lts1]);
                let mut s1 = buffer[lts1];
                s1.tag = Tag::Lts1;
                output.push(s1);

                output.extend_from_slice(&buffer[lts1 + 1..lts2]);
                let mut s2 = buffer[lts2];
                s2.tag = Tag::Lts2;
                output.push(s2);

                output.extend_from_slice(&buffer[lts2 + 1..sof]);
                let mut first = buffer[sof];
                first.tag = Tag::StartOfFrame;
                output.push(first);

                i = sof + 1;
                continue;
            }

            output.push(sample);
            i += 1;
        }

        output
    }
}

impl Default for TimingSync {
    fn default() -> Self {
        Self::new(DEFAULT_PEAK_THRESHOLD)
    }
}

impl Stage for TimingSync {
    type Input = TaggedSample;
    type Output = TaggedSample;

    fn name(&self) -> &str {
        "timing_sync"
    }

    fn work(&mut self, input: &[TaggedSample], output: &mut Vec<TaggedSample>) -> Result<(), EncodingError> {
        output.extend(self.sync(input));
        check_capacity(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fft::Kernel;
    use crate::preamble::LTS_FREQ_DOMAIN;
    use num_complex::Complex64;

    fn lts_time_domain() -> [Complex64; 64] {
        let kernel = Kernel::new();
        let mut data = LTS_FREQ_DOMAIN.to_vec();
        kernel.inverse(&mut data).unwrap();
        data.try_into().unwrap()
    }

    /// Builds a synthetic receive stream: `anchor` filler samples, then
    /// the true cyclic prefix + two LTS copies + one data sample
    /// starting exactly at `anchor`, then enough trailing padding for
    /// `TimingSync`'s bounded search to have a full window to decide
    /// from.
    fn synthesize_preamble_tail(anchor: usize) -> Vec<TaggedSample> {
        let lts = lts_time_domain();
        let cp = &lts[LTS_LEN - LTS_CP_LEN..];

        let mut samples = vec![TaggedSample::new(Complex64::new(0.0, 0.0), Tag::None); anchor];
        samples.push(TaggedSample::new(cp[0], Tag::StsEnd));
        samples.extend(cp[1..].iter().map(|&s| TaggedSample::new(s, Tag::None)));
        samples.extend(lts.iter().map(|&s| TaggedSample::new(s, Tag::None)));
        samples.extend(lts.iter().map(|&s| TaggedSample::new(s, Tag::None)));
        samples.push(TaggedSample::new(Complex64::new(1.0, 0.0), Tag::None));

        let consumed_from_anchor = 1 + (LTS_CP_LEN - 1) + LTS_LEN + LTS_LEN + 1;
        let padding = SEARCH_SPAN.saturating_sub(consumed_from_anchor);
        samples.extend(vec![TaggedSample::new(Complex64::new(0.0, 0.0), Tag::None); padding]);

        samples
    }

    #[test]
    fn tags_landmarks_at_the_documented_offsets_after_a_prefix() {
        let k = 37;
        let anchor = k + 160; // the 10*16 = 160-sample STS itself isn't modeled here.
        let samples = synthesize_preamble_tail(anchor);

        let mut sync = TimingSync::default();
        let out = sync.sync(&samples);

        let lts_start_idx = out.iter().position(|s| s.tag == Tag::LtsStart).expect("LtsStart");
        let lts1_idx = out.iter().position(|s| s.tag == Tag::Lts1).expect("Lts1");
        let lts2_idx = out.iter().position(|s| s.tag == Tag::Lts2).expect("Lts2");
        let sof_idx = out.iter().position(|s| s.tag == Tag::StartOfFrame).expect("StartOfFrame");

        assert_eq!(lts_start_idx, anchor);
        assert_eq!(lts1_idx, anchor + LTS_CP_LEN);
        assert_eq!(lts2_idx, anchor + LTS_CP_LEN + LTS_LEN);
        assert_eq!(sof_idx, k + 320);
    }

    #[test]
    fn a_plateau_with_no_real_lts_is_abandoned() {
        let mut samples = vec![TaggedSample::new(Complex64::new(0.0, 0.0), Tag::StsEnd)];
        samples.extend(vec![TaggedSample::new(Complex64::new(0.0, 0.0), Tag::None); SEARCH_SPAN + 10]);

        let mut sync = TimingSync::default();
        let out = sync.sync(&samples);

        assert!(out
            .iter()
            .all(|s| !matches!(s.tag, Tag::LtsStart | Tag::Lts1 | Tag::Lts2 | Tag::StartOfFrame)));
    }

    #[test]
    fn no_sts_end_means_no_lts_search() {
        let mut sync = TimingSync::default();
        let samples = vec![TaggedSample::new(Complex64::new(0.0, 0.0), Tag::None); 200];
        let out = sync.sync(&samples);
        assert!(out.iter().all(|s| s.tag == Tag::None));
    }
}
