//! Receiver chain: owns the six receive stages, each pinned to its own
//! OS thread, and drives them through one batch of samples at a time.
//!
//! The original design used a counting semaphore per stage to signal
//! "input ready" and "output ready"; this crate uses a pair of
//! zero-capacity `crossbeam::channel` rendezvous per stage instead (a
//! `wake` the driver sends, a `done` the worker sends back), which
//! gives the same strict handshake without a raw semaphore handle.
//! Buffers are shared via `Arc<Mutex<Vec<_>>>` and moved (not copied)
//! down the chain between stages, matching the original's buffer-swap
//! bookkeeping.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::thread::{self, JoinHandle};

use crossbeam::channel::{bounded, Receiver, Sender};
use num_complex::Complex64;

use crate::channel_est::ChannelEst;
use crate::fft_symbols::FftSymbols;
use crate::frame_decoder::FrameDecoder;
use crate::frame_detector::FrameDetector;
use crate::logging::{EventSink, LogConfig, PipelineEvent, SignalLogger};
use crate::phase_tracker::PhaseTracker;
use crate::symbol_mapper::NUM_DATA_SUBCARRIERS;
use crate::tagged::{TaggedSample, TaggedVector};
use crate::timing_sync::TimingSync;

struct StageHandle<I, O> {
    wake_tx: Option<Sender<()>>,
    done_rx: Receiver<()>,
    input: Arc<Mutex<Vec<I>>>,
    output: Arc<Mutex<Vec<O>>>,
    thread: Option<JoinHandle<()>>,
}

impl<I, O> StageHandle<I, O> {
    fn run_once(&self, load: Vec<I>) -> Vec<O> {
        *self.input.lock().unwrap() = load;
        let _ = self.wake_tx.as_ref().expect("wake channel live for the handle's lifetime").send(());
        let _ = self.done_rx.recv();
        std::mem::take(&mut *self.output.lock().unwrap())
    }
}

impl<I, O> Drop for StageHandle<I, O> {
    fn drop(&mut self) {
        // Dropping the sender closes the channel, which unparks the
        // worker's blocking `recv` with an error it treats as shutdown.
        self.wake_tx.take();
        if let Some(handle) = self.thread.take() {
            let _ = handle.join();
        }
    }
}

fn spawn_stage<I, O, F>(stop: Arc<AtomicBool>, mut step: F) -> StageHandle<I, O>
where
    I: Send + 'static,
    O: Send + 'static,
    F: FnMut(&[I], &mut Vec<O>) + Send + 'static,
{
    let (wake_tx, wake_rx) = bounded::<()>(0);
    let (done_tx, done_rx) = bounded::<()>(0);
    let input: Arc<Mutex<Vec<I>>> = Arc::new(Mutex::new(Vec::new()));
    let output: Arc<Mutex<Vec<O>>> = Arc::new(Mutex::new(Vec::new()));

    let thread_input = Arc::clone(&input);
    let thread_output = Arc::clone(&output);
    let thread = thread::spawn(move || {
        while wake_rx.recv().is_ok() {
            if stop.load(Ordering::SeqCst) {
                break;
            }
            let batch = std::mem::take(&mut *thread_input.lock().unwrap());
            let mut out = thread_output.lock().unwrap();
            step(&batch, &mut out);
            drop(out);
            if done_tx.send(()).is_err() {
                break;
            }
        }
    });

    StageHandle { wake_tx: Some(wake_tx), done_rx, input, output, thread: Some(thread) }
}

pub struct ReceiverChain {
    stop: Arc<AtomicBool>,
    logger: Arc<Mutex<SignalLogger>>,
    events: EventSink,
    detector: StageHandle<Complex64, TaggedSample>,
    sync: StageHandle<TaggedSample, TaggedSample>,
    fft: StageHandle<TaggedSample, TaggedVector<64>>,
    est: StageHandle<TaggedVector<64>, TaggedVector<64>>,
    phase: StageHandle<TaggedVector<64>, TaggedVector<NUM_DATA_SUBCARRIERS>>,
    decoder: StageHandle<TaggedVector<NUM_DATA_SUBCARRIERS>, Vec<u8>>,
}

impl ReceiverChain {
    pub fn new(detector_threshold: f64, detector_plateau: usize) -> Self {
        let logger = Arc::new(Mutex::new(SignalLogger::new(LogConfig::default())));
        let events = EventSink::new();

        let mut detector = FrameDetector::new(detector_threshold, detector_plateau)
            .with_logger(Arc::clone(&logger))
            .with_events(events.clone());
        let mut sync = TimingSync::default().with_logger(Arc::clone(&logger));
        let mut fft = FftSymbols::new();
        let mut est = ChannelEst::new();
        let mut phase = PhaseTracker::new();
        let mut decoder =
            FrameDecoder::new().with_logger(Arc::clone(&logger)).with_events(events.clone());
        let stop = Arc::new(AtomicBool::new(false));

        ReceiverChain {
            stop: Arc::clone(&stop),
            logger,
            events,
            detector: spawn_stage(Arc::clone(&stop), move |input, output| output.extend(detector.detect(input))),
            sync: spawn_stage(Arc::clone(&stop), move |input, output| output.extend(sync.sync(input))),
            fft: spawn_stage(Arc::clone(&stop), move |input, output| output.extend(fft.transform(input))),
            est: spawn_stage(Arc::clone(&stop), move |input, output| output.extend(est.equalize(input))),
            phase: spawn_stage(Arc::clone(&stop), move |input, output| output.extend(phase.track(input))),
            decoder: spawn_stage(Arc::clone(&stop), move |input, output| output.extend(decoder.decode(input))),
        }
    }

    /// The internal diagnostic log this chain's stages have been
    /// writing to since construction.
    pub fn logger(&self) -> Arc<Mutex<SignalLogger>> {
        Arc::clone(&self.logger)
    }

    /// Drains the typed pipeline events (frame detected, header decoded,
    /// checksum failed, MPDU recovered) accumulated since the last call.
    pub fn events(&self) -> Vec<PipelineEvent> {
        self.events.drain()
    }

    /// Runs one batch of raw samples through every stage in order and
    /// returns whatever complete MPDUs came out the far end. Each call
    /// is a full handshake down the chain; partial frames straddling
    /// two calls are carried internally by the stages that need it
    /// (`frame_detector`'s correlation window, `frame_decoder`'s
    /// in-flight payload accumulator).
    pub fn process_samples(&self, samples: Vec<Complex64>) -> Vec<Vec<u8>> {
        let tagged = self.detector.run_once(samples);
        let synced = self.sync.run_once(tagged);
        let freq = self.fft.run_once(synced);
        let equalized = self.est.run_once(freq);
        let demapped = self.phase.run_once(equalized);
        self.decoder.run_once(demapped)
    }

    pub fn stop(&self) {
        self.stop.store(true, Ordering::SeqCst);
    }
}

impl Default for ReceiverChain {
    fn default() -> Self {
        Self::new(
            crate::frame_detector::DEFAULT_PLATEAU_THRESHOLD,
            crate::frame_detector::DEFAULT_PLATEAU_LENGTH,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frame_builder::FrameBuilder;
    use crate::rates::Rate;

    #[test]
    fn a_clean_transmitted_frame_round_trips_through_the_chain() {
        let builder = FrameBuilder::new();
        let mpdu = b"clean channel".to_vec();
        let samples = builder.build_frame(&mpdu, Rate::Rate1_2Bpsk).unwrap();

        // Padding on both ends exercises the detector's carryover logic
        // and gives timing_sync room to find the LTS peak.
        let mut input = vec![Complex64::new(0.0, 0.0); 50];
        input.extend(samples);
        input.extend(vec![Complex64::new(0.0, 0.0); 50]);

        let chain = ReceiverChain::new(0.5, 8);
        let decoded = chain.process_samples(input);
        assert!(decoded.iter().any(|mpdu_out| mpdu_out == &mpdu));
    }

    #[test]
    fn silence_produces_no_frames() {
        let chain = ReceiverChain::default();
        let samples = vec![Complex64::new(0.0, 0.0); 1000];
        assert!(chain.process_samples(samples).is_empty());
    }
}
