use std::fs::OpenOptions;
use std::path::PathBuf;
use std::time::Duration;

use clap::{Args, Subcommand};
use signwire_link::{LinkConfig, SignLink};
use signwire_protocol::CommandSequence;
use signwire_render::{RenderOptions, TextColor, TextSize};
use tracing::{debug, info};

use crate::exit::{io_error, link_error, CliResult, SUCCESS};
use crate::output::{print_sequence, OutputFormat};

pub mod banner;
pub mod clear;
pub mod clock;
pub mod preview;
pub mod text;
pub mod version;
pub mod width;

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Encode a text message, with optional {marker} control tokens.
    Text(TextArgs),
    /// Render text into pixel frames and encode them as a custom image.
    Banner(BannerArgs),
    /// Set the sign's clock, defaulting to the host's current time and date.
    Clock(ClockArgs),
    /// Select the panel width in pixels.
    Width(WidthArgs),
    /// Erase the sign's stored memory.
    Clear(ClearArgs),
    /// Render text and print the frames as ASCII art.
    Preview(PreviewArgs),
    /// Show version information.
    Version(VersionArgs),
}

pub fn run(command: Command, format: OutputFormat) -> CliResult<i32> {
    match command {
        Command::Text(args) => text::run(args, format),
        Command::Banner(args) => banner::run(args, format),
        Command::Clock(args) => clock::run(args, format),
        Command::Width(args) => width::run(args, format),
        Command::Clear(args) => clear::run(args, format),
        Command::Preview(args) => preview::run(args),
        Command::Version(args) => version::run(args),
    }
}

#[derive(Args, Debug)]
pub struct DeliveryArgs {
    /// Serial device to write to (e.g. /dev/ttyUSB0). Without it, the
    /// encoded commands are printed instead of sent.
    #[arg(long, value_name = "PATH")]
    pub port: Option<PathBuf>,
    /// Pause between commands in milliseconds.
    #[arg(long, value_name = "MS", default_value = "100")]
    pub delay_ms: u64,
}

#[derive(Args, Debug)]
pub struct RenderArgs {
    /// Text size: small (two stacked lines), medium, or full.
    #[arg(long, default_value = "full")]
    pub size: TextSize,
    /// Text color: red, green, or yellow.
    #[arg(long, default_value = "red")]
    pub color: TextColor,
    /// TrueType font file to rasterize with.
    #[arg(long, value_name = "PATH")]
    pub font: Option<PathBuf>,
    /// Invert lit and unlit pixels.
    #[arg(long)]
    pub invert: bool,
    /// Panel width in pixels (128 or 256).
    #[arg(long, default_value = "128")]
    pub width: u32,
}

impl RenderArgs {
    pub fn to_options(&self) -> RenderOptions {
        RenderOptions {
            size: self.size,
            color: self.color,
            font_path: self.font.clone(),
            invert: self.invert,
        }
    }
}

#[derive(Args, Debug)]
pub struct TextArgs {
    /// Message text. `{marker}` tokens select colors, fonts, and effects.
    pub message: String,
    #[command(flatten)]
    pub delivery: DeliveryArgs,
}

#[derive(Args, Debug)]
pub struct BannerArgs {
    /// Text to render.
    pub message: String,
    #[command(flatten)]
    pub render: RenderArgs,
    #[command(flatten)]
    pub delivery: DeliveryArgs,
}

#[derive(Args, Debug)]
pub struct ClockArgs {
    /// Time as six digits, HHMMSS. Defaults to the host clock.
    #[arg(long, value_name = "HHMMSS")]
    pub time: Option<String>,
    /// Date as six digits, MMDDYY. Defaults to the host clock.
    #[arg(long, value_name = "MMDDYY")]
    pub date: Option<String>,
    #[command(flatten)]
    pub delivery: DeliveryArgs,
}

#[derive(Args, Debug)]
pub struct WidthArgs {
    /// Panel width in pixels (128 or 256).
    pub width: u32,
    #[command(flatten)]
    pub delivery: DeliveryArgs,
}

#[derive(Args, Debug)]
pub struct ClearArgs {
    #[command(flatten)]
    pub delivery: DeliveryArgs,
}

#[derive(Args, Debug)]
pub struct PreviewArgs {
    /// Text to render.
    pub message: String,
    #[command(flatten)]
    pub render: RenderArgs,
}

#[derive(Args, Debug)]
pub struct VersionArgs {
    /// Show extended build provenance.
    #[arg(long)]
    pub extended: bool,
}

/// Send the sequence over the configured port, or print it when no port
/// was given.
pub fn deliver(
    label: &str,
    sequence: &CommandSequence,
    delivery: &DeliveryArgs,
    format: OutputFormat,
) -> CliResult<i32> {
    let Some(port) = &delivery.port else {
        print_sequence(label, sequence, format);
        return Ok(SUCCESS);
    };

    let stream = OpenOptions::new()
        .read(true)
        .write(true)
        .open(port)
        .map_err(|err| io_error(&format!("failed opening {}", port.display()), err))?;

    let config = LinkConfig {
        inter_command_delay: Duration::from_millis(delivery.delay_ms),
        read_responses: true,
    };
    let mut link = SignLink::with_config(stream, config);
    let responses = link
        .send_sequence(sequence)
        .map_err(|err| link_error(&format!("send to {} failed", port.display()), err))?;

    let answered = responses.iter().filter(|r| !r.is_empty()).count();
    for (index, response) in responses.iter().enumerate() {
        if !response.is_empty() {
            debug!(index, len = response.bytes.len(), "device responded");
        }
    }
    info!(
        label,
        commands = sequence.len(),
        answered,
        port = %port.display(),
        "sequence sent"
    );
    Ok(SUCCESS)
}
