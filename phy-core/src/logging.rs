//! Internal pipeline logger: a ring buffer of leveled, subsystem-tagged
//! entries recording per-stage acquisition/decode events (plateau
//! crossed, LTS peak found, header parity result, CRC result). No
//! external logging facade — `phy-cli` layers its own structured
//! telemetry logger on top of whatever this one records.
//!
//! [`PipelineEvent`]/[`EventSink`] carry the same moments in typed form,
//! since `phy-cli`'s telemetry events (frame detected, header decoded,
//! checksum failed, MPDU recovered) need real fields a log message's
//! text can't hand back without parsing.

use std::fmt;
use std::sync::{Arc, Mutex};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Trace = 0,
    Debug = 1,
    Info = 2,
    Warn = 3,
    Error = 4,
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogLevel::Trace => write!(f, "TRACE"),
            LogLevel::Debug => write!(f, "DEBUG"),
            LogLevel::Info => write!(f, "INFO"),
            LogLevel::Warn => write!(f, "WARN"),
            LogLevel::Error => write!(f, "ERROR"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct LogConfig {
    pub level: LogLevel,
    pub enable_detector: bool,
    pub enable_sync: bool,
    pub enable_decoder: bool,
    pub max_entries: usize,
}

impl Default for LogConfig {
    fn default() -> Self {
        LogConfig {
            level: LogLevel::Info,
            enable_detector: true,
            enable_sync: true,
            enable_decoder: true,
            max_entries: 1000,
        }
    }
}

#[derive(Debug, Clone)]
pub struct LogEntry {
    pub level: LogLevel,
    pub subsystem: &'static str,
    pub message: String,
}

/// Ring-buffer logger: bounded to `max_entries`, oldest entries drop
/// first.
#[derive(Debug, Clone)]
pub struct SignalLogger {
    config: LogConfig,
    entries: Vec<LogEntry>,
}

impl SignalLogger {
    pub fn new(config: LogConfig) -> Self {
        let capacity = config.max_entries.min(1000);
        SignalLogger { config, entries: Vec::with_capacity(capacity) }
    }

    pub fn log(&mut self, level: LogLevel, subsystem: &'static str, message: impl fmt::Display) {
        if level < self.config.level {
            return;
        }
        let enabled = match subsystem {
            "FRAME_DETECTOR" => self.config.enable_detector,
            "TIMING_SYNC" | "CHANNEL_EST" | "PHASE_TRACKER" => self.config.enable_sync,
            "FRAME_DECODER" | "PPDU" => self.config.enable_decoder,
            _ => true,
        };
        if !enabled {
            return;
        }

        let entry = LogEntry { level, subsystem, message: message.to_string() };
        if self.config.max_entries > 0 {
            if self.entries.len() >= self.config.max_entries {
                self.entries.remove(0);
            }
            self.entries.push(entry);
        }
    }

    pub fn trace(&mut self, subsystem: &'static str, message: impl fmt::Display) {
        self.log(LogLevel::Trace, subsystem, message);
    }

    pub fn debug(&mut self, subsystem: &'static str, message: impl fmt::Display) {
        self.log(LogLevel::Debug, subsystem, message);
    }

    pub fn info(&mut self, subsystem: &'static str, message: impl fmt::Display) {
        self.log(LogLevel::Info, subsystem, message);
    }

    pub fn warn(&mut self, subsystem: &'static str, message: impl fmt::Display) {
        self.log(LogLevel::Warn, subsystem, message);
    }

    pub fn error(&mut self, subsystem: &'static str, message: impl fmt::Display) {
        self.log(LogLevel::Error, subsystem, message);
    }

    pub fn entries(&self) -> &[LogEntry] {
        &self.entries
    }

    pub fn entries_for_subsystem(&self, subsystem: &str) -> Vec<&LogEntry> {
        self.entries.iter().filter(|e| e.subsystem == subsystem).collect()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

/// A moment in the receive pipeline worth telling a caller about, with
/// the real fields rather than a formatted message.
#[derive(Debug, Clone, PartialEq)]
pub enum PipelineEvent {
    FrameDetected { sample_offset: usize },
    HeaderDecoded { rate_name: String, length_bytes: usize, num_symbols: usize },
    ChecksumFailed { expected: u32, computed: u32 },
    MpduRecovered { length_bytes: usize },
}

/// Shared sink the receive stages push [`PipelineEvent`]s into; a caller
/// (e.g. `phy-cli`) drains it after each batch and re-emits the events
/// through its own telemetry logger.
#[derive(Clone, Default)]
pub struct EventSink(Arc<Mutex<Vec<PipelineEvent>>>);

impl EventSink {
    pub fn new() -> Self {
        EventSink(Arc::new(Mutex::new(Vec::new())))
    }

    pub fn push(&self, event: PipelineEvent) {
        self.0.lock().unwrap().push(event);
    }

    pub fn drain(&self) -> Vec<PipelineEvent> {
        std::mem::take(&mut *self.0.lock().unwrap())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn event_sink_drain_empties_it() {
        let sink = EventSink::new();
        sink.push(PipelineEvent::MpduRecovered { length_bytes: 3 });
        sink.push(PipelineEvent::ChecksumFailed { expected: 1, computed: 2 });
        assert_eq!(sink.drain().len(), 2);
        assert!(sink.drain().is_empty());
    }

    #[test]
    fn entries_below_configured_level_are_dropped() {
        let mut logger = SignalLogger::new(LogConfig { level: LogLevel::Warn, ..LogConfig::default() });
        logger.info("FRAME_DETECTOR", "plateau started");
        assert!(logger.entries().is_empty());
        logger.warn("FRAME_DETECTOR", "plateau lost");
        assert_eq!(logger.entries().len(), 1);
    }

    #[test]
    fn ring_buffer_drops_oldest_past_capacity() {
        let mut logger = SignalLogger::new(LogConfig { max_entries: 2, ..LogConfig::default() });
        logger.info("FRAME_DECODER", "one");
        logger.info("FRAME_DECODER", "two");
        logger.info("FRAME_DECODER", "three");
        assert_eq!(logger.entries().len(), 2);
        assert_eq!(logger.entries()[0].message, "two");
    }

    #[test]
    fn disabled_subsystem_is_filtered_out() {
        let mut logger = SignalLogger::new(LogConfig { enable_detector: false, ..LogConfig::default() });
        logger.info("FRAME_DETECTOR", "should be dropped");
        assert!(logger.entries().is_empty());
    }
}
