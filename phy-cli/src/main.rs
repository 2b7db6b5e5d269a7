mod config;
mod logging;
mod wav_sdr;

use clap::{Parser, Subcommand};
use color_eyre::eyre::{Context, Result};

use config::CliConfig;
use logging::{
    ChecksumFailedEvent, FrameDetectedEvent, HeaderDecodedEvent, LogEvent, MpduRecoveredEvent, StructuredLogger,
};
use phy_core::{FrameBuilder, PipelineEvent, ReceiverChain};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about = "802.11a OFDM PHY encode/decode over WAV files", long_about = None)]
struct Cli {
    /// Path to a TOML configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Encode an MPDU into a burst and write it to a WAV file.
    Tx {
        /// Message bytes to encode, taken as UTF-8.
        #[arg(short, long)]
        message: String,

        /// Destination WAV file.
        #[arg(short, long)]
        output: PathBuf,
    },
    /// Read a WAV file and run it through the receive pipeline.
    Rx {
        /// Source WAV file.
        #[arg(short, long)]
        input: PathBuf,
    },
}

fn main() -> Result<()> {
    color_eyre::install()?;
    let args = Cli::parse();

    let config = match &args.config {
        Some(path) => CliConfig::from_file(path).wrap_err_with(|| format!("loading config from {}", path.display()))?,
        None => CliConfig::default(),
    };
    config.validate()?;

    let mut logger = StructuredLogger::new(config.terminal.logging.clone())?;

    match args.command {
        Command::Tx { message, output } => run_tx(&config, &mut logger, &message, &output),
        Command::Rx { input } => run_rx(&config, &mut logger, &input),
    }
}

fn run_tx(
    config: &CliConfig,
    logger: &mut StructuredLogger,
    message: &str,
    output: &PathBuf,
) -> Result<()> {
    logger.log(LogEvent::Info { message: format!("encoding {} bytes", message.len()) })?;

    let builder = FrameBuilder::new();
    let samples = builder.build_frame(message.as_bytes(), config.pipeline.default_rate)?;

    let mut sink = wav_sdr::WavSink::create(output, config.sdr.sample_rate_hz as u32)?;
    phy_core::BurstSink::send_burst_sync(&mut sink, &samples)?;
    sink.finalize()?;

    logger.log(LogEvent::Info {
        message: format!("wrote {} samples to {}", samples.len(), output.display()),
    })?;
    Ok(())
}

fn run_rx(config: &CliConfig, logger: &mut StructuredLogger, input: &PathBuf) -> Result<()> {
    let mut source = wav_sdr::WavSource::open(input)?;
    let samples = source.read_all();

    let chain = ReceiverChain::new(config.pipeline.detector_threshold, config.pipeline.detector_plateau);
    let mpdus = chain.process_samples(samples);

    for event in chain.events() {
        logger.log(pipeline_to_log_event(event))?;
    }

    for mpdu in &mpdus {
        if let Ok(text) = std::str::from_utf8(mpdu) {
            logger.log(LogEvent::Info { message: format!("payload: {}", text) })?;
        }
    }

    if mpdus.is_empty() {
        logger.log(LogEvent::Warn { message: "no frames recovered".to_string() })?;
    }

    Ok(())
}

/// Bridges `phy-core`'s pipeline telemetry into this crate's own
/// structured log events, stamping each with the time it was drained
/// (the core pipeline runs off-thread and doesn't carry wall-clock time
/// itself).
fn pipeline_to_log_event(event: PipelineEvent) -> LogEvent {
    let timestamp = chrono::Utc::now();
    match event {
        PipelineEvent::FrameDetected { sample_offset } => {
            LogEvent::FrameDetected(FrameDetectedEvent { timestamp, sample_offset })
        }
        PipelineEvent::HeaderDecoded { rate_name, length_bytes, num_symbols } => {
            LogEvent::HeaderDecoded(HeaderDecodedEvent { timestamp, rate_name, length_bytes, num_symbols })
        }
        PipelineEvent::ChecksumFailed { expected, computed } => {
            LogEvent::ChecksumFailed(ChecksumFailedEvent { timestamp, expected, computed })
        }
        PipelineEvent::MpduRecovered { length_bytes } => {
            LogEvent::MpduRecovered(MpduRecoveredEvent { timestamp, length_bytes })
        }
    }
}
