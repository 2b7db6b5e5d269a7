//! PHY rate table.
//!
//! Eleven rates, each a (coding rate, modulation) pair, identified on the
//! air by a 4-bit SIGNAL field value. `RateParams` holds everything the
//! PPDU codec and symbol mapper need; `cbps` and `dbps` are derived
//! invariants of `bpsc` and `rel_rate` and are asserted by the property
//! tests rather than recomputed on every use.

use crate::errors::ConfigError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum Rate {
    Rate1_2Bpsk,
    Rate2_3Bpsk,
    Rate3_4Bpsk,
    Rate1_2Qpsk,
    Rate2_3Qpsk,
    Rate3_4Qpsk,
    Rate1_2Qam16,
    Rate2_3Qam16,
    Rate3_4Qam16,
    Rate2_3Qam64,
    Rate3_4Qam64,
}

pub const ALL_RATES: [Rate; 11] = [
    Rate::Rate1_2Bpsk,
    Rate::Rate2_3Bpsk,
    Rate::Rate3_4Bpsk,
    Rate::Rate1_2Qpsk,
    Rate::Rate2_3Qpsk,
    Rate::Rate3_4Qpsk,
    Rate::Rate1_2Qam16,
    Rate::Rate2_3Qam16,
    Rate::Rate3_4Qam16,
    Rate::Rate2_3Qam64,
    Rate::Rate3_4Qam64,
];

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RateParams {
    pub rate_field: u8,
    pub cbps: usize,
    pub dbps: usize,
    pub bpsc: usize,
    pub rate: Rate,
    /// Fraction of mother rate-1/2 coded bits kept after puncturing
    /// (`rel_rate_num / rel_rate_den`); the true code rate is
    /// `1 / (2 * rel_rate)`, not this fraction itself.
    pub rel_rate_num: u32,
    pub rel_rate_den: u32,
    pub name: &'static str,
}

impl Rate {
    pub const fn params(self) -> RateParams {
        match self {
            Rate::Rate1_2Bpsk => RateParams {
                rate_field: 0xD, cbps: 48, dbps: 24, bpsc: 1,
                rate: self, rel_rate_num: 1, rel_rate_den: 1, name: "1/2 BPSK",
            },
            Rate::Rate2_3Bpsk => RateParams {
                rate_field: 0xE, cbps: 48, dbps: 32, bpsc: 1,
                rate: self, rel_rate_num: 3, rel_rate_den: 4, name: "2/3 BPSK",
            },
            Rate::Rate3_4Bpsk => RateParams {
                rate_field: 0xF, cbps: 48, dbps: 36, bpsc: 1,
                rate: self, rel_rate_num: 2, rel_rate_den: 3, name: "3/4 BPSK",
            },
            Rate::Rate1_2Qpsk => RateParams {
                rate_field: 0x5, cbps: 96, dbps: 48, bpsc: 2,
                rate: self, rel_rate_num: 1, rel_rate_den: 1, name: "1/2 QPSK",
            },
            Rate::Rate2_3Qpsk => RateParams {
                rate_field: 0x6, cbps: 96, dbps: 64, bpsc: 2,
                rate: self, rel_rate_num: 3, rel_rate_den: 4, name: "2/3 QPSK",
            },
            Rate::Rate3_4Qpsk => RateParams {
                rate_field: 0x7, cbps: 96, dbps: 72, bpsc: 2,
                rate: self, rel_rate_num: 2, rel_rate_den: 3, name: "3/4 QPSK",
            },
            Rate::Rate1_2Qam16 => RateParams {
                rate_field: 0x9, cbps: 192, dbps: 96, bpsc: 4,
                rate: self, rel_rate_num: 1, rel_rate_den: 1, name: "1/2 QAM16",
            },
            Rate::Rate2_3Qam16 => RateParams {
                rate_field: 0xA, cbps: 192, dbps: 128, bpsc: 4,
                rate: self, rel_rate_num: 3, rel_rate_den: 4, name: "2/3 QAM16",
            },
            Rate::Rate3_4Qam16 => RateParams {
                rate_field: 0xB, cbps: 192, dbps: 144, bpsc: 4,
                rate: self, rel_rate_num: 2, rel_rate_den: 3, name: "3/4 QAM16",
            },
            Rate::Rate2_3Qam64 => RateParams {
                rate_field: 0x1, cbps: 288, dbps: 192, bpsc: 6,
                rate: self, rel_rate_num: 3, rel_rate_den: 4, name: "2/3 QAM64",
            },
            Rate::Rate3_4Qam64 => RateParams {
                rate_field: 0x3, cbps: 288, dbps: 216, bpsc: 6,
                rate: self, rel_rate_num: 2, rel_rate_den: 3, name: "3/4 QAM64",
            },
        }
    }

    pub fn from_rate_field(rate_field: u8) -> Result<Rate, ConfigError> {
        ALL_RATES
            .iter()
            .copied()
            .find(|r| r.params().rate_field == rate_field)
            .ok_or(ConfigError::UnknownRateField(rate_field))
    }
}

impl RateParams {
    /// Number of OFDM symbols needed to carry `payload_len` bytes of MPDU
    /// payload, including the 16-bit SERVICE field and 6 tail bits.
    pub const fn num_data_symbols(&self, payload_len: usize) -> usize {
        let bits = 16 + 8 * payload_len + 6;
        (bits + self.dbps - 1) / self.dbps
    }
}
