//! Structured logging for the CLI: wraps `phy-core`'s internal
//! `SignalLogger` with a telemetry-facing logger that writes timestamped
//! events to stdout/stderr/file in one of three formats.

use crate::config::{LogFormat, LogTarget, LoggingConfig};
use chrono::{DateTime, Utc};
use color_eyre::eyre::{eyre, Result};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{self, BufWriter, Write};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum LogEvent {
    FrameDetected(FrameDetectedEvent),
    HeaderDecoded(HeaderDecodedEvent),
    MpduRecovered(MpduRecoveredEvent),
    ChecksumFailed(ChecksumFailedEvent),
    Info { message: String },
    Warn { message: String },
    Error { message: String, details: Option<String> },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FrameDetectedEvent {
    pub timestamp: DateTime<Utc>,
    pub sample_offset: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HeaderDecodedEvent {
    pub timestamp: DateTime<Utc>,
    pub rate_name: String,
    pub length_bytes: usize,
    pub num_symbols: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MpduRecoveredEvent {
    pub timestamp: DateTime<Utc>,
    pub length_bytes: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChecksumFailedEvent {
    pub timestamp: DateTime<Utc>,
    pub expected: u32,
    pub computed: u32,
}

pub struct StructuredLogger {
    config: LoggingConfig,
    writer: Box<dyn Write + Send>,
}

impl StructuredLogger {
    pub fn new(config: LoggingConfig) -> Result<Self> {
        let writer: Box<dyn Write + Send> = match &config.target {
            LogTarget::Stdout => Box::new(io::stdout()),
            LogTarget::Stderr => Box::new(io::stderr()),
            LogTarget::File => {
                let path =
                    config.file_path.as_ref().ok_or_else(|| eyre!("file path required for file logging"))?;
                Box::new(BufWriter::new(File::create(path)?))
            }
        };
        Ok(StructuredLogger { config, writer })
    }

    pub fn log(&mut self, event: LogEvent) -> Result<()> {
        if self.level_of(&event) < self.config.level {
            return Ok(());
        }
        let line = match self.config.format {
            LogFormat::Json => serde_json::to_string(&event)?,
            LogFormat::Logfmt => self.format_logfmt(&event),
            LogFormat::Pretty => self.format_pretty(&event),
        };
        writeln!(self.writer, "{}", line)?;
        self.writer.flush()?;
        Ok(())
    }

    fn level_of(&self, event: &LogEvent) -> crate::config::LogLevel {
        use crate::config::LogLevel::*;
        match event {
            LogEvent::Warn { .. } => Warn,
            LogEvent::Error { .. } => Error,
            _ => Info,
        }
    }

    fn format_logfmt(&self, event: &LogEvent) -> String {
        match event {
            LogEvent::FrameDetected(e) => {
                format!("ts=\"{}\" type=frame_detected sample_offset={}", e.timestamp.to_rfc3339(), e.sample_offset)
            }
            LogEvent::HeaderDecoded(e) => format!(
                "ts=\"{}\" type=header_decoded rate=\"{}\" length={} symbols={}",
                e.timestamp.to_rfc3339(),
                e.rate_name,
                e.length_bytes,
                e.num_symbols
            ),
            LogEvent::MpduRecovered(e) => {
                format!("ts=\"{}\" type=mpdu_recovered length={}", e.timestamp.to_rfc3339(), e.length_bytes)
            }
            LogEvent::ChecksumFailed(e) => format!(
                "ts=\"{}\" type=checksum_failed expected={:#010x} computed={:#010x}",
                e.timestamp.to_rfc3339(),
                e.expected,
                e.computed
            ),
            LogEvent::Info { message } => format!("ts=\"{}\" level=info msg=\"{}\"", Utc::now().to_rfc3339(), message),
            LogEvent::Warn { message } => format!("ts=\"{}\" level=warn msg=\"{}\"", Utc::now().to_rfc3339(), message),
            LogEvent::Error { message, details } => {
                let ts = Utc::now().to_rfc3339();
                match details {
                    Some(d) => format!("ts=\"{}\" level=error msg=\"{}\" details=\"{}\"", ts, message, d),
                    None => format!("ts=\"{}\" level=error msg=\"{}\"", ts, message),
                }
            }
        }
    }

    fn format_pretty(&self, event: &LogEvent) -> String {
        match event {
            LogEvent::FrameDetected(e) => {
                format!("[{}] FRAME DETECTED at sample {}", e.timestamp.format("%H:%M:%S%.3f"), e.sample_offset)
            }
            LogEvent::HeaderDecoded(e) => format!(
                "[{}] HEADER: {} | {} bytes | {} symbols",
                e.timestamp.format("%H:%M:%S%.3f"),
                e.rate_name,
                e.length_bytes,
                e.num_symbols
            ),
            LogEvent::MpduRecovered(e) => {
                format!("[{}] MPDU RECOVERED: {} bytes", e.timestamp.format("%H:%M:%S%.3f"), e.length_bytes)
            }
            LogEvent::ChecksumFailed(e) => format!(
                "[{}] CRC MISMATCH: expected {:#010x}, computed {:#010x}",
                e.timestamp.format("%H:%M:%S%.3f"),
                e.expected,
                e.computed
            ),
            LogEvent::Info { message } => format!("[{}] INFO: {}", Utc::now().format("%H:%M:%S%.3f"), message),
            LogEvent::Warn { message } => format!("[{}] WARN: {}", Utc::now().format("%H:%M:%S%.3f"), message),
            LogEvent::Error { message, details } => {
                let ts = Utc::now().format("%H:%M:%S%.3f");
                match details {
                    Some(d) => format!("[{}] ERROR: {} | {}", ts, message, d),
                    None => format!("[{}] ERROR: {}", ts, message),
                }
            }
        }
    }
}
