//! File-backed stand-in for a real SDR: a stereo WAV file where the left
//! channel carries I and the right channel carries Q. Lets `phy-cli`
//! drive the transmit and receive pipelines without any radio hardware.

use hound::{SampleFormat, WavReader, WavSpec, WavWriter};
use num_complex::Complex64;
use phy_core::errors::SdrError;
use phy_core::{BurstSink, SampleSource};
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

fn stereo_spec(sample_rate_hz: u32) -> WavSpec {
    WavSpec { channels: 2, sample_rate: sample_rate_hz, bits_per_sample: 32, sample_format: SampleFormat::Float }
}

/// Writes one complete burst per [`BurstSink::send_burst`] call into a
/// fresh WAV file; there is no device buffer to drain, so the sync and
/// async variants behave identically.
pub struct WavSink {
    writer: WavWriter<BufWriter<File>>,
}

impl WavSink {
    pub fn create<P: AsRef<Path>>(path: P, sample_rate_hz: u32) -> Result<Self, SdrError> {
        let writer = WavWriter::create(path.as_ref(), stereo_spec(sample_rate_hz))
            .map_err(|e| SdrError::Io(e.to_string()))?;
        Ok(WavSink { writer })
    }

    pub fn finalize(self) -> Result<(), SdrError> {
        self.writer.finalize().map_err(|e| SdrError::Io(e.to_string()))
    }
}

impl BurstSink for WavSink {
    fn send_burst(&mut self, samples: &[Complex64]) -> Result<(), SdrError> {
        for sample in samples {
            self.writer.write_sample(sample.re as f32).map_err(|e| SdrError::Io(e.to_string()))?;
            self.writer.write_sample(sample.im as f32).map_err(|e| SdrError::Io(e.to_string()))?;
        }
        Ok(())
    }

    fn send_burst_sync(&mut self, samples: &[Complex64]) -> Result<(), SdrError> {
        self.send_burst(samples)
    }
}

/// Reads a stereo WAV file front to back, yielding I/Q pairs on demand.
pub struct WavSource {
    samples: std::vec::IntoIter<Complex64>,
}

impl WavSource {
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, SdrError> {
        let mut reader = WavReader::open(path.as_ref()).map_err(|e| SdrError::Io(e.to_string()))?;
        let spec = reader.spec();
        if spec.channels != 2 {
            return Err(SdrError::Io("expected a stereo WAV file carrying I on left, Q on right".to_string()));
        }

        let floats: Vec<f32> = match spec.sample_format {
            SampleFormat::Float => {
                reader.samples::<f32>().collect::<Result<Vec<f32>, _>>().map_err(|e| SdrError::Io(e.to_string()))?
            }
            SampleFormat::Int => {
                let scale = (1i64 << (spec.bits_per_sample - 1)) as f32;
                reader
                    .samples::<i32>()
                    .map(|s| s.map(|v| v as f32 / scale))
                    .collect::<Result<Vec<f32>, _>>()
                    .map_err(|e| SdrError::Io(e.to_string()))?
            }
        };

        let samples: Vec<Complex64> =
            floats.chunks(2).map(|pair| Complex64::new(pair[0] as f64, pair[1] as f64)).collect();

        Ok(WavSource { samples: samples.into_iter() })
    }
}

impl SampleSource for WavSource {
    fn recv(&mut self, n: usize, buf: &mut Vec<Complex64>) -> Result<(), SdrError> {
        buf.extend((&mut self.samples).take(n));
        Ok(())
    }
}

impl WavSource {
    /// Drains every remaining sample in the file, regardless of `n`
    /// semantics — useful for the CLI's batch (not streaming) rx path.
    pub fn read_all(&mut self) -> Vec<Complex64> {
        (&mut self.samples).collect()
    }
}
