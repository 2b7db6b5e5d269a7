//! Frame detector: finds the short training sequence (STS) by delayed
//! autocorrelation over a 16-sample window, normalized by received power
//! (802.11a coarse packet detection, clause 17.3.3).
//!
//! `PLATEAU_THRESHOLD` and `STS_PLATEAU_LENGTH` are tuning parameters,
//! not values mandated by the standard; this crate's defaults (0.75,
//! 100 samples) are a reasonable working point for a 5 MS/s capture but
//! are exposed via [`crate::config::PipelineConfig`] rather than baked
//! in, since a real deployment would tune them against its own SNR.

use std::sync::{Arc, Mutex};

use crate::block::{check_capacity, Stage};
use crate::errors::EncodingError;
use crate::logging::{EventSink, PipelineEvent, SignalLogger};
use crate::preamble::STS_LEN;
use crate::tagged::{Tag, TaggedSample};
use num_complex::Complex64;

pub const DEFAULT_PLATEAU_THRESHOLD: f64 = 0.75;
pub const DEFAULT_PLATEAU_LENGTH: usize = 100;

struct RollingSum<T> {
    window: Vec<T>,
    pos: usize,
    sum: T,
}

impl RollingSum<f64> {
    fn new(window_len: usize) -> Self {
        RollingSum { window: vec![0.0; window_len], pos: 0, sum: 0.0 }
    }

    fn add(&mut self, value: f64) {
        self.sum -= self.window[self.pos];
        self.window[self.pos] = value;
        self.sum += value;
        self.pos = (self.pos + 1) % self.window.len();
    }
}

impl RollingSum<Complex64> {
    fn new(window_len: usize) -> Self {
        RollingSum { window: vec![Complex64::new(0.0, 0.0); window_len], pos: 0, sum: Complex64::new(0.0, 0.0) }
    }

    fn add(&mut self, value: Complex64) {
        self.sum -= self.window[self.pos];
        self.window[self.pos] = value;
        self.sum += value;
        self.pos = (self.pos + 1) % self.window.len();
    }
}

pub struct FrameDetector {
    corr_acc: RollingSum<Complex64>,
    power_acc: RollingSum<f64>,
    carryover: Vec<Complex64>,
    plateau_length: usize,
    plateau_flag: bool,
    threshold: f64,
    plateau_target: usize,
    samples_seen: usize,
    logger: Option<Arc<Mutex<SignalLogger>>>,
    events: Option<EventSink>,
}

impl FrameDetector {
    pub fn new(threshold: f64, plateau_target: usize) -> Self {
        FrameDetector {
            corr_acc: RollingSum::<Complex64>::new(STS_LEN),
            power_acc: RollingSum::<f64>::new(STS_LEN),
            carryover: vec![Complex64::new(0.0, 0.0); STS_LEN],
            plateau_length: 0,
            plateau_flag: false,
            threshold,
            plateau_target,
            samples_seen: 0,
            logger: None,
            events: None,
        }
    }

    pub fn with_logger(mut self, logger: Arc<Mutex<SignalLogger>>) -> Self {
        self.logger = Some(logger);
        self
    }

    pub fn with_events(mut self, events: EventSink) -> Self {
        self.events = Some(events);
        self
    }

    /// Resets running correlation/power state and the plateau counter,
    /// as happens whenever a transient detection failure should not
    /// persist into the next call (a logic-level reset, not an error).
    pub fn reset(&mut self) {
        self.corr_acc = RollingSum::<Complex64>::new(STS_LEN);
        self.power_acc = RollingSum::<f64>::new(STS_LEN);
        self.carryover = vec![Complex64::new(0.0, 0.0); STS_LEN];
        self.plateau_length = 0;
        self.plateau_flag = false;
    }

    pub fn detect(&mut self, input: &[Complex64]) -> Vec<TaggedSample> {
        if input.is_empty() {
            return Vec::new();
        }
        let mut output = Vec::with_capacity(input.len());

        for (x, &sample) in input.iter().enumerate() {
            let delayed = if x < STS_LEN { self.carryover[x] } else { input[x - STS_LEN] };

            self.corr_acc.add(sample * delayed.conj());
            self.power_acc.add(sample.norm_sqr());

            let corr = self.corr_acc.sum.norm() / self.power_acc.sum;

            let mut tag = Tag::None;
            if corr > self.threshold {
                self.plateau_length += 1;
                if self.plateau_length == self.plateau_target {
                    tag = Tag::StsStart;
                    self.plateau_flag = true;
                    let offset = self.samples_seen + x;
                    if let Some(logger) = &self.logger {
                        logger.lock().unwrap().info("FRAME_DETECTOR", format!("plateau confirmed at sample {offset}"));
                    }
                    if let Some(events) = &self.events {
                        events.push(PipelineEvent::FrameDetected { sample_offset: offset });
                    }
                }
            } else {
                if self.plateau_flag {
                    tag = Tag::StsEnd;
                    self.plateau_flag = false;
                    if let Some(logger) = &self.logger {
                        logger
                            .lock()
                            .unwrap()
                            .debug("FRAME_DETECTOR", format!("plateau lost at sample {}", self.samples_seen + x));
                    }
                }
                self.plateau_length = 0;
            }

            output.push(TaggedSample::new(sample, tag));
        }
        self.samples_seen += input.len();

        let tail_start = input.len().saturating_sub(STS_LEN);
        self.carryover = input[tail_start..].to_vec();
        if self.carryover.len() < STS_LEN {
            let mut padded = vec![Complex64::new(0.0, 0.0); STS_LEN - self.carryover.len()];
            padded.extend(self.carryover.iter().copied());
            self.carryover = padded;
        }

        output
    }
}

impl Default for FrameDetector {
    fn default() -> Self {
        Self::new(DEFAULT_PLATEAU_THRESHOLD, DEFAULT_PLATEAU_LENGTH)
    }
}

impl Stage for FrameDetector {
    type Input = Complex64;
    type Output = TaggedSample;

    fn name(&self) -> &str {
        "frame_detector"
    }

    fn work(&mut self, input: &[Complex64], output: &mut Vec<TaggedSample>) -> Result<(), EncodingError> {
        output.extend(self.detect(input));
        check_capacity(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::preamble::STS_SAMPLES;

    #[test]
    fn empty_input_yields_no_tags() {
        let mut detector = FrameDetector::default();
        assert!(detector.detect(&[]).is_empty());
    }

    #[test]
    fn pure_sts_then_silence_emits_one_start_and_one_end() {
        let mut detector = FrameDetector::new(0.75, 20);
        let mut samples = Vec::new();
        for _ in 0..40 {
            samples.extend_from_slice(&STS_SAMPLES);
        }
        samples.extend(vec![Complex64::new(0.0, 0.0); 200]);

        let tagged = detector.detect(&samples);
        let starts = tagged.iter().filter(|t| t.tag == Tag::StsStart).count();
        let ends = tagged.iter().filter(|t| t.tag == Tag::StsEnd).count();
        assert_eq!(starts, 1);
        assert_eq!(ends, 1);

        let start_idx = tagged.iter().position(|t| t.tag == Tag::StsStart).unwrap();
        let end_idx = tagged.iter().position(|t| t.tag == Tag::StsEnd).unwrap();
        assert!(start_idx < end_idx);
    }

    #[test]
    fn silence_never_triggers_a_plateau() {
        let mut detector = FrameDetector::default();
        let samples = vec![Complex64::new(0.0, 0.0); 500];
        let tagged = detector.detect(&samples);
        assert!(tagged.iter().all(|t| t.tag == Tag::None));
    }
}
