//! PPDU: PLCP header (SIGNAL field) plus payload (DATA field) encode and
//! decode, tying together the scrambler, convolutional coder, puncturer,
//! interleaver and constellation mapper.
//!
//! The SIGNAL field is always BPSK, rate-1/2 coded regardless of the
//! frame's data rate (802.11a clause 17.3.4): 24 bits (4-bit rate field,
//! 1 reserved bit, 12-bit length, 1 even-parity bit, 6 tail bits),
//! convolutionally coded to 48 bits, mapped one-to-one onto the 48 data
//! subcarriers of a single OFDM symbol. The DATA field is
//! SERVICE(16) + PSDU(8*length) + TAIL(6) + PAD, scrambled, with the tail
//! bits forced back to zero after scrambling so the convolutional encoder
//! returns to the zero state, then encoded at the frame's rate.

use crate::convcode;
use crate::errors::{ConfigError, DecodingError};
use crate::interleave;
use crate::puncture;
use crate::qam;
use crate::rates::{Rate, RateParams};
use crate::scrambler::{self, Scrambler, DEFAULT_SEED};
use num_complex::Complex64;

pub const MAX_FRAME_SIZE: usize = 2000;
const HEADER_BITS: usize = 24;
const HEADER_CBPS: usize = 48;
const HEADER_BPSC: usize = 1;
const SERVICE_BITS: usize = 16;
const TAIL_BITS: usize = 6;
const CRC_BYTES: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlcpHeader {
    pub rate: Rate,
    /// Length of the DATA field's PSDU in bytes, i.e. MPDU plus the
    /// trailing CRC-32.
    pub length: usize,
    pub num_symbols: usize,
    pub service: u16,
}

impl PlcpHeader {
    pub fn new(rate: Rate, mpdu_len: usize) -> Result<Self, ConfigError> {
        let length = mpdu_len + CRC_BYTES;
        if length > MAX_FRAME_SIZE {
            return Err(ConfigError::PayloadTooLarge { actual: length, max: MAX_FRAME_SIZE });
        }
        let num_symbols = rate.params().num_data_symbols(length);
        Ok(PlcpHeader { rate, length, num_symbols, service: 0 })
    }

    fn to_signal_bits(self) -> [u8; HEADER_BITS] {
        let p = self.rate.params();
        let mut bits = [0u8; HEADER_BITS];
        for i in 0..4 {
            bits[i] = (p.rate_field >> i) & 1;
        }
        // bit 4 reserved, stays 0
        for i in 0..12 {
            bits[5 + i] = ((self.length >> i) & 1) as u8;
        }
        let parity: u8 = bits[..17].iter().fold(0, |a, b| a ^ b);
        bits[17] = parity;
        // bits 18..24 are the tail, left zero
        bits
    }

    fn from_signal_bits(bits: &[u8; HEADER_BITS]) -> Result<Self, DecodingError> {
        let parity: u8 = bits[..17].iter().fold(0, |a, b| a ^ b);
        if parity != bits[17] {
            return Err(DecodingError::HeaderParityMismatch);
        }
        let mut rate_field = 0u8;
        for i in 0..4 {
            rate_field |= bits[i] << i;
        }
        let rate = Rate::from_rate_field(rate_field).map_err(|_| DecodingError::HeaderParityMismatch)?;
        let mut length = 0usize;
        for i in 0..12 {
            length |= (bits[5 + i] as usize) << i;
        }
        let num_symbols = rate.params().num_data_symbols(length);
        Ok(PlcpHeader { rate, length, num_symbols, service: 0 })
    }
}

/// Encodes the 24-bit SIGNAL field into the 48 BPSK symbols of the
/// header's single OFDM symbol.
pub fn encode_header(header: PlcpHeader) -> Vec<Complex64> {
    let bits = header.to_signal_bits();
    let coded = convcode::encode(&bits);
    let interleaved = interleave::interleave(&coded, HEADER_CBPS, HEADER_BPSC);
    qam::map_bits(&interleaved, &Rate::Rate1_2Bpsk.params())
}

/// Decodes one OFDM symbol's worth of header samples (48 complex points)
/// back into a `PlcpHeader`, or a parity/rate error.
pub fn decode_header(samples: &[Complex64]) -> Result<PlcpHeader, DecodingError> {
    if samples.len() != HEADER_CBPS {
        return Err(DecodingError::OutOfOrderBatch);
    }
    let bpsk = Rate::Rate1_2Bpsk.params();
    let demapped = qam::demap_symbols(samples, &bpsk);
    let deinterleaved = interleave::deinterleave(&demapped, HEADER_CBPS, HEADER_BPSC);
    let decoded = convcode::decode(&deinterleaved);
    let bits: [u8; HEADER_BITS] = decoded.try_into().map_err(|_| DecodingError::HeaderParityMismatch)?;
    PlcpHeader::from_signal_bits(&bits)
}

/// Builds the DATA field's bit stream: SERVICE + PSDU(+CRC) + TAIL + PAD,
/// scrambled, with the tail bits re-zeroed after scrambling.
fn build_data_bits(mpdu: &[u8], rate: &RateParams, num_symbols: usize, seed: u8) -> Result<Vec<u8>, ConfigError> {
    let mut crc = crc32fast::Hasher::new();
    crc.update(mpdu);
    let checksum = crc.finalize();

    let mut payload_bytes = Vec::with_capacity(mpdu.len() + CRC_BYTES);
    payload_bytes.extend_from_slice(mpdu);
    payload_bytes.extend_from_slice(&checksum.to_le_bytes());

    let total_bits = num_symbols * rate.dbps;
    let mut bits = vec![0u8; total_bits];
    // SERVICE field is all-zero (first 7 bits sync the scrambler in a
    // hardware receiver; this crate's receiver derives the seed out of
    // band, so the convention doesn't matter beyond being the fixed
    // all-zero field the standard specifies).
    for (byte_idx, byte) in payload_bytes.iter().enumerate() {
        for bit in 0..8 {
            bits[SERVICE_BITS + byte_idx * 8 + bit] = (byte >> bit) & 1;
        }
    }
    // tail bits (already zero) sit right after the PSDU; pad bits
    // (already zero) fill the remainder.

    let mut scrambler = Scrambler::new(seed)?;
    scrambler.process(&mut bits);

    let tail_start = SERVICE_BITS + payload_bytes.len() * 8;
    for b in &mut bits[tail_start..tail_start + TAIL_BITS] {
        *b = 0;
    }
    Ok(bits)
}

/// Encodes an MPDU payload at `rate` into its DATA field OFDM symbols'
/// worth of constellation points (`header.num_symbols * 48` points).
pub fn encode_payload(header: &PlcpHeader, mpdu: &[u8]) -> Result<Vec<Complex64>, ConfigError> {
    let rate = header.rate.params();
    let bits = build_data_bits(mpdu, &rate, header.num_symbols, DEFAULT_SEED)?;
    let coded = convcode::encode(&bits);
    let punctured = puncture::puncture(&coded, &rate);

    let mut symbols = Vec::with_capacity(header.num_symbols * 48);
    for chunk in punctured.chunks(rate.cbps) {
        let interleaved = interleave::interleave(chunk, rate.cbps, rate.bpsc);
        symbols.extend(qam::map_bits(&interleaved, &rate));
    }
    Ok(symbols)
}

/// Decodes `header.num_symbols * 48` DATA field constellation points back
/// into the original MPDU, verifying the trailing CRC-32.
pub fn decode_payload(header: &PlcpHeader, samples: &[Complex64]) -> Result<Vec<u8>, DecodingError> {
    let rate = header.rate.params();
    let expected_points = header.num_symbols * 48;
    if samples.len() != expected_points {
        return Err(DecodingError::OutOfOrderBatch);
    }

    let per_symbol_points = rate.cbps / rate.bpsc;
    let mut punctured = Vec::with_capacity(header.num_symbols * rate.cbps);
    for chunk in samples.chunks(per_symbol_points) {
        let demapped = qam::demap_symbols(chunk, &rate);
        punctured.extend(interleave::deinterleave(&demapped, rate.cbps, rate.bpsc));
    }

    let depunctured = puncture::depuncture(&punctured, &rate);
    let mut bits = convcode::decode(&depunctured);

    // The SERVICE field's first 7 bits are always zero plaintext, so the
    // still-scrambled bits received in their place *are* the scrambler's
    // keystream: the seed is recovered from them rather than assumed.
    let service_keystream: [u8; 7] =
        bits.get(..7).and_then(|s| s.try_into().ok()).ok_or(DecodingError::OutOfOrderBatch)?;
    let seed = scrambler::recover_seed(&service_keystream);
    let mut scrambler = Scrambler::new(seed).map_err(|_| DecodingError::InvalidDescramblerSeed)?;
    scrambler.process(&mut bits);

    let psdu_start = SERVICE_BITS;
    let psdu_bits = header.length * 8;
    if bits.len() < psdu_start + psdu_bits {
        return Err(DecodingError::OutOfOrderBatch);
    }
    let mut payload = vec![0u8; header.length];
    for (byte_idx, byte) in payload.iter_mut().enumerate() {
        let mut v = 0u8;
        for bit in 0..8 {
            v |= bits[psdu_start + byte_idx * 8 + bit] << bit;
        }
        *byte = v;
    }

    let (mpdu, crc_bytes) = payload.split_at(header.length - CRC_BYTES);
    let expected = u32::from_le_bytes(crc_bytes.try_into().unwrap());
    let mut crc = crc32fast::Hasher::new();
    crc.update(mpdu);
    let computed = crc.finalize();
    if computed != expected {
        return Err(DecodingError::ChecksumMismatch { expected, computed });
    }
    Ok(mpdu.to_vec())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_round_trips() {
        let header = PlcpHeader::new(Rate::Rate3_4Qam16, 100).unwrap();
        let symbols = encode_header(header);
        assert_eq!(symbols.len(), 48);
        let decoded = decode_header(&symbols).unwrap();
        assert_eq!(decoded.rate, header.rate);
        assert_eq!(decoded.length, header.length);
    }

    #[test]
    fn bad_parity_is_rejected() {
        let header = PlcpHeader::new(Rate::Rate1_2Bpsk, 10).unwrap();
        let mut symbols = encode_header(header);
        symbols[17] = -symbols[17];
        assert!(decode_header(&symbols).is_err());
    }

    #[test]
    fn payload_round_trips_for_every_rate() {
        for rate in crate::rates::ALL_RATES {
            let mpdu = b"the quick brown fox jumps over the lazy dog".to_vec();
            let header = PlcpHeader::new(rate, mpdu.len()).unwrap();
            let symbols = encode_payload(&header, &mpdu).unwrap();
            assert_eq!(symbols.len(), header.num_symbols * 48);
            let decoded = decode_payload(&header, &symbols).unwrap();
            assert_eq!(decoded, mpdu, "{}", rate.params().name);
        }
    }

    #[test]
    fn corrupted_crc_is_rejected() {
        let mpdu = b"hello".to_vec();
        let header = PlcpHeader::new(Rate::Rate1_2Bpsk, mpdu.len()).unwrap();
        let mut symbols = encode_payload(&header, &mpdu).unwrap();
        for s in symbols.iter_mut().take(4) {
            *s = -*s;
        }
        assert!(decode_payload(&header, &symbols).is_err());
    }

    #[test]
    fn oversized_payload_is_rejected_at_header_construction() {
        assert!(PlcpHeader::new(Rate::Rate1_2Bpsk, MAX_FRAME_SIZE + 1).is_err());
    }

    #[test]
    fn decode_blind_recovers_a_seed_other_than_the_default() {
        let mpdu = b"seed test payload".to_vec();
        let rate = Rate::Rate1_2Bpsk;
        let header = PlcpHeader::new(rate, mpdu.len()).unwrap();
        let rate_params = rate.params();
        let custom_seed = 0x5A;
        assert_ne!(custom_seed, DEFAULT_SEED);

        // Build the DATA field by hand with a seed decode_payload is never
        // told about, to prove it recovers the seed from the ciphertext
        // itself rather than assuming the transmit-side default.
        let bits = build_data_bits(&mpdu, &rate_params, header.num_symbols, custom_seed).unwrap();
        let coded = convcode::encode(&bits);
        let punctured = puncture::puncture(&coded, &rate_params);
        let mut symbols = Vec::with_capacity(header.num_symbols * 48);
        for chunk in punctured.chunks(rate_params.cbps) {
            let interleaved = interleave::interleave(chunk, rate_params.cbps, rate_params.bpsc);
            symbols.extend(qam::map_bits(&interleaved, &rate_params));
        }

        let decoded = decode_payload(&header, &symbols).unwrap();
        assert_eq!(decoded, mpdu);
    }
}
