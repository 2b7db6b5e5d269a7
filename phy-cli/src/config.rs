//! CLI-specific configuration: TOML-loadable, layered over `phy-core`'s
//! own config types, with CLI flags given final say.

use color_eyre::eyre::{Context, Result};
use phy_core::config::{PipelineConfig, SdrParams};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CliConfig {
    #[serde(default)]
    pub sdr: SdrParams,

    #[serde(default)]
    pub pipeline: PipelineConfig,

    #[serde(default)]
    pub terminal: TerminalConfig,
}

impl Default for CliConfig {
    fn default() -> Self {
        CliConfig {
            sdr: SdrParams::default(),
            pipeline: PipelineConfig::default(),
            terminal: TerminalConfig::default(),
        }
    }
}

impl CliConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .wrap_err_with(|| format!("failed to read config file: {}", path.display()))?;
        let config: CliConfig =
            toml::from_str(&content).wrap_err("failed to parse TOML configuration")?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        self.sdr.validate().wrap_err("invalid SDR parameters")?;
        self.pipeline.validate().wrap_err("invalid pipeline parameters")?;
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TerminalConfig {
    #[serde(default)]
    pub wav_output: Option<PathBuf>,

    #[serde(default)]
    pub wav_input: Option<PathBuf>,

    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Default for TerminalConfig {
    fn default() -> Self {
        TerminalConfig { wav_output: None, wav_input: None, logging: LoggingConfig::default() }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_target")]
    pub target: LogTarget,

    #[serde(default)]
    pub file_path: Option<PathBuf>,

    #[serde(default = "default_log_format")]
    pub format: LogFormat,

    #[serde(default = "default_log_level")]
    pub level: LogLevel,
}

fn default_log_target() -> LogTarget {
    LogTarget::Stdout
}

fn default_log_format() -> LogFormat {
    LogFormat::Pretty
}

fn default_log_level() -> LogLevel {
    LogLevel::Info
}

impl Default for LoggingConfig {
    fn default() -> Self {
        LoggingConfig {
            target: default_log_target(),
            file_path: None,
            format: default_log_format(),
            level: default_log_level(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogTarget {
    Stdout,
    Stderr,
    File,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Json,
    Logfmt,
    Pretty,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Debug,
    Info,
    Warn,
    Error,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_validate() {
        assert!(CliConfig::default().validate().is_ok());
    }

    #[test]
    fn parses_a_minimal_toml_document() {
        let toml_src = r#"
            [sdr]
            center_freq_hz = 5.8e9
            sample_rate_hz = 20e6
            tx_gain_db = 10.0
            rx_gain_db = 10.0
            tx_amplitude = 0.8
            device_addr = ""

            [pipeline]
            default_rate = "Rate1_2Bpsk"
            detector_threshold = 0.75
            detector_plateau = 100
            scrambler_seed = 93
        "#;
        let config: CliConfig = toml::from_str(toml_src).unwrap();
        assert_eq!(config.sdr.center_freq_hz, 5.8e9);
        assert!(config.validate().is_ok());
    }
}
