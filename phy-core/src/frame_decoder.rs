//! Frame decoder: the final receive stage. A small state machine over
//! 48-point demapped symbols — Idle (nothing in flight), AwaitingData
//! (a header has been decoded and its payload symbols are being
//! accumulated), and a transient Decoding step taken the instant enough
//! payload symbols have arrived — producing complete MPDUs.
//!
//! A `StartOfFrame`-tagged symbol is always tried as a header, whether
//! or not a previous frame's payload was still accumulating: a fresh
//! preamble means a fresh frame, and whatever was in flight is
//! abandoned (it never reached its declared sample count, so it was
//! never going to decode cleanly anyway).

use std::sync::{Arc, Mutex};

use crate::block::{check_capacity, Stage};
use crate::errors::{DecodingError, EncodingError};
use crate::logging::{EventSink, PipelineEvent, SignalLogger};
use crate::ppdu::{self, PlcpHeader};
use crate::symbol_mapper::NUM_DATA_SUBCARRIERS;
use crate::tagged::{Tag, TaggedVector};
use num_complex::Complex64;

enum State {
    Idle,
    AwaitingData { header: PlcpHeader, collected: Vec<Complex64>, needed: usize },
}

pub struct FrameDecoder {
    state: State,
    logger: Option<Arc<Mutex<SignalLogger>>>,
    events: Option<EventSink>,
}

impl FrameDecoder {
    pub fn new() -> Self {
        FrameDecoder { state: State::Idle, logger: None, events: None }
    }

    pub fn with_logger(mut self, logger: Arc<Mutex<SignalLogger>>) -> Self {
        self.logger = Some(logger);
        self
    }

    pub fn with_events(mut self, events: EventSink) -> Self {
        self.events = Some(events);
        self
    }

    pub fn decode(&mut self, input: &[TaggedVector<NUM_DATA_SUBCARRIERS>]) -> Vec<Vec<u8>> {
        let mut output = Vec::new();

        for symbol in input {
            if let State::AwaitingData { header, collected, needed } = &mut self.state {
                if collected.len() < *needed {
                    collected.extend_from_slice(&symbol.samples);
                    if collected.len() >= *needed {
                        let samples = std::mem::take(collected);
                        match ppdu::decode_payload(header, &samples[..*needed]) {
                            Ok(payload) => {
                                if let Some(logger) = &self.logger {
                                    logger
                                        .lock()
                                        .unwrap()
                                        .info("FRAME_DECODER", format!("mpdu recovered: {} bytes", payload.len()));
                                }
                                if let Some(events) = &self.events {
                                    events.push(PipelineEvent::MpduRecovered { length_bytes: payload.len() });
                                }
                                output.push(payload);
                            }
                            Err(DecodingError::ChecksumMismatch { expected, computed }) => {
                                if let Some(logger) = &self.logger {
                                    logger.lock().unwrap().warn(
                                        "PPDU",
                                        format!("checksum mismatch: expected {expected:#010x}, computed {computed:#010x}"),
                                    );
                                }
                                if let Some(events) = &self.events {
                                    events.push(PipelineEvent::ChecksumFailed { expected, computed });
                                }
                            }
                            Err(_) => {}
                        }
                        self.state = State::Idle;
                    }
                }
            }

            if symbol.tag == Tag::StartOfFrame {
                if let Ok(header) = ppdu::decode_header(&symbol.samples) {
                    if let Some(logger) = &self.logger {
                        logger.lock().unwrap().info(
                            "PPDU",
                            format!(
                                "header decoded: {:?}, {} bytes, {} symbols",
                                header.rate, header.length, header.num_symbols
                            ),
                        );
                    }
                    if let Some(events) = &self.events {
                        events.push(PipelineEvent::HeaderDecoded {
                            rate_name: format!("{:?}", header.rate),
                            length_bytes: header.length,
                            num_symbols: header.num_symbols,
                        });
                    }
                    let needed = header.num_symbols * NUM_DATA_SUBCARRIERS;
                    self.state = State::AwaitingData { header, collected: Vec::with_capacity(needed), needed };
                }
            }
        }

        output
    }
}

impl Default for FrameDecoder {
    fn default() -> Self {
        Self::new()
    }
}

impl Stage for FrameDecoder {
    type Input = TaggedVector<NUM_DATA_SUBCARRIERS>;
    type Output = Vec<u8>;

    fn name(&self) -> &str {
        "frame_decoder"
    }

    fn work(
        &mut self,
        input: &[TaggedVector<NUM_DATA_SUBCARRIERS>],
        output: &mut Vec<Vec<u8>>,
    ) -> Result<(), EncodingError> {
        output.extend(self.decode(input));
        check_capacity(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ppdu::encode_header;
    use crate::rates::Rate;
    use crate::symbol_mapper;

    fn as_symbols(points: &[Complex64]) -> Vec<TaggedVector<NUM_DATA_SUBCARRIERS>> {
        let polarities = symbol_mapper::pilot_polarity_sequence(points.len() / NUM_DATA_SUBCARRIERS + 1);
        points
            .chunks(NUM_DATA_SUBCARRIERS)
            .enumerate()
            .map(|(i, chunk)| {
                let data: [Complex64; NUM_DATA_SUBCARRIERS] = chunk.try_into().unwrap();
                // frame_decoder consumes already-demapped 48-point data, so the
                // tagged vector here just carries the raw demapped symbol points
                // straight through (no re-mapping needed for this unit test).
                let _ = polarities[i];
                TaggedVector::new(data, Tag::None)
            })
            .collect()
    }

    #[test]
    fn idle_with_no_start_of_frame_decodes_nothing() {
        let mut decoder = FrameDecoder::new();
        let symbols = as_symbols(&vec![Complex64::new(0.0, 0.0); NUM_DATA_SUBCARRIERS * 3]);
        assert!(decoder.decode(&symbols).is_empty());
    }

    #[test]
    fn full_header_then_payload_round_trips_an_mpdu() {
        let mpdu = b"hi".to_vec();
        let rate = Rate::Rate1_2Bpsk;
        let header = PlcpHeader::new(rate, mpdu.len()).unwrap();

        let mut header_points = encode_header(header);
        let payload_points = ppdu::encode_payload(&header, &mpdu).unwrap();

        let mut symbols = Vec::new();
        let first: [Complex64; NUM_DATA_SUBCARRIERS] =
            std::mem::take(&mut header_points).try_into().unwrap();
        symbols.push(TaggedVector::new(first, Tag::StartOfFrame));
        for chunk in payload_points.chunks(NUM_DATA_SUBCARRIERS) {
            let data: [Complex64; NUM_DATA_SUBCARRIERS] = chunk.try_into().unwrap();
            symbols.push(TaggedVector::new(data, Tag::None));
        }

        let mut decoder = FrameDecoder::new();
        let decoded = decoder.decode(&symbols);
        assert_eq!(decoded.len(), 1);
        assert_eq!(decoded[0], mpdu);
    }

    #[test]
    fn a_new_start_of_frame_abandons_an_incomplete_payload() {
        let mpdu = b"longer payload than one symbol carries".to_vec();
        let rate = Rate::Rate1_2Bpsk;
        let header = PlcpHeader::new(rate, mpdu.len()).unwrap();
        let header_points: [Complex64; NUM_DATA_SUBCARRIERS] =
            encode_header(header).try_into().unwrap();

        let mut decoder = FrameDecoder::new();
        let first_pass = vec![TaggedVector::new(header_points, Tag::StartOfFrame)];
        assert!(decoder.decode(&first_pass).is_empty());

        // Interrupt with a fresh header before the payload finishes.
        let second = decoder.decode(&first_pass);
        assert!(second.is_empty());
    }
}
