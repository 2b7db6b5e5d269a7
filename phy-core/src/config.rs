//! Configuration types for the PHY pipeline: SDR front-end parameters
//! and the detector/decoder tuning knobs, both loadable from TOML by
//! `phy-cli` and overridable field-by-field from CLI flags.

use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;
use crate::rates::Rate;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SdrParams {
    pub center_freq_hz: f64,
    pub sample_rate_hz: f64,
    pub tx_gain_db: f64,
    pub rx_gain_db: f64,
    pub tx_amplitude: f64,
    pub device_addr: String,
}

impl Default for SdrParams {
    fn default() -> Self {
        SdrParams {
            center_freq_hz: 5.72e9,
            sample_rate_hz: 5e6,
            tx_gain_db: 20.0,
            rx_gain_db: 20.0,
            tx_amplitude: 1.0,
            device_addr: String::new(),
        }
    }
}

impl SdrParams {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.center_freq_hz <= 0.0 {
            return Err(ConfigError::InvalidSdrParam {
                field: "center_freq_hz",
                reason: "must be positive".to_string(),
            });
        }
        if self.sample_rate_hz <= 0.0 {
            return Err(ConfigError::InvalidSdrParam {
                field: "sample_rate_hz",
                reason: "must be positive".to_string(),
            });
        }
        if !(0.0..=1.0).contains(&self.tx_amplitude) {
            return Err(ConfigError::InvalidSdrParam {
                field: "tx_amplitude",
                reason: "must be in [0.0, 1.0]".to_string(),
            });
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineConfig {
    pub default_rate: Rate,
    pub detector_threshold: f64,
    pub detector_plateau: usize,
    pub scrambler_seed: u8,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        PipelineConfig {
            default_rate: Rate::Rate1_2Bpsk,
            detector_threshold: crate::frame_detector::DEFAULT_PLATEAU_THRESHOLD,
            detector_plateau: crate::frame_detector::DEFAULT_PLATEAU_LENGTH,
            scrambler_seed: crate::scrambler::DEFAULT_SEED,
        }
    }
}

impl PipelineConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(0.0..=1.0).contains(&self.detector_threshold) {
            return Err(ConfigError::InvalidSdrParam {
                field: "detector_threshold",
                reason: "must be in [0.0, 1.0]".to_string(),
            });
        }
        if self.scrambler_seed == 0 || self.scrambler_seed > 0x7F {
            return Err(ConfigError::InvalidScramblerSeed(self.scrambler_seed));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_validate() {
        assert!(SdrParams::default().validate().is_ok());
        assert!(PipelineConfig::default().validate().is_ok());
    }

    #[test]
    fn zero_sample_rate_is_rejected() {
        let params = SdrParams { sample_rate_hz: 0.0, ..SdrParams::default() };
        assert!(params.validate().is_err());
    }

    #[test]
    fn out_of_range_threshold_is_rejected() {
        let config = PipelineConfig { detector_threshold: 1.5, ..PipelineConfig::default() };
        assert!(config.validate().is_err());
    }
}
