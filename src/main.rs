//! # dsp420 CLI
//!
//! Command-line interface for DSP-420 character displays.
//!
//! ## Usage
//!
//! ```bash
//! # Blank the display
//! dsp420 clear
//!
//! # Write to the top row, centered
//! dsp420 write --start 1 --end 20 --center "Scan Product Barcode"
//!
//! # Scroll a long title on the bottom row until a key is pressed
//! dsp420 scroll "This Is A Long Product Title"
//!
//! # Ask for a value
//! dsp420 prompt "Item name:"
//!
//! # Show the frames without a display attached
//! dsp420 --dry-run write "Hello"
//! ```

use std::path::PathBuf;
use std::thread;
use std::time::Duration;

use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

use dsp420::{
    Dsp420Error,
    animation::{Scroller, Spinner},
    config::Config,
    display::{DisplaySession, Region, SharedDisplay, lock},
    editor::{KeySource, PromptOutcome, TerminalKeys, run_prompt_shared},
    transport::{MemoryTransport, SerialTransport, Transport},
    widget::{Align, Widget, center},
};

/// dsp420 - DSP-420 character LCD utility
#[derive(Parser, Debug)]
#[command(name = "dsp420")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Serial device path (overrides the config file)
    #[arg(long, global = true)]
    device: Option<String>,

    /// Line speed (overrides the config file)
    #[arg(long, global = true)]
    baud: Option<u32>,

    /// Config file (default: ~/.dsp420/config.toml)
    #[arg(long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Print the bytes instead of sending them
    #[arg(long, global = true)]
    dry_run: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Blank a range of cells
    Clear {
        #[arg(long, default_value = "1")]
        start: u8,
        #[arg(long, default_value = "40")]
        end: u8,
    },

    /// Write text into a range of cells
    Write {
        text: String,
        #[arg(long, default_value = "1")]
        start: u8,
        #[arg(long, default_value = "40")]
        end: u8,
        /// Skip the clear; uses the settle delay instead
        #[arg(long)]
        no_clear: bool,
        /// Center the text in the range
        #[arg(long)]
        center: bool,
    },

    /// Scroll text in a widget until a key is pressed
    Scroll {
        text: String,
        #[arg(long, default_value = "21")]
        start: u8,
        #[arg(long, default_value = "20")]
        length: usize,
        /// left, right or center (for text that fits)
        #[arg(long, default_value = "left")]
        align: String,
        #[arg(long)]
        interval_ms: Option<u64>,
        /// Stop after this long instead of waiting for a key
        #[arg(long)]
        duration_ms: Option<u64>,
    },

    /// Edit a value on the display
    Prompt {
        title: String,
        #[arg(long, default_value = "")]
        initial: String,
    },

    /// Count down with a MM:SS widget (wider from 100 minutes up)
    Timer {
        seconds: i64,
        #[arg(long, default_value = "36")]
        start: u8,
    },

    /// Show a spinner until a key is pressed
    Spin {
        #[arg(long, default_value = "20")]
        pos: u8,
        #[arg(long)]
        interval_ms: Option<u64>,
        /// Stop after this long instead of waiting for a key
        #[arg(long)]
        duration_ms: Option<u64>,
    },

    /// Print the effective configuration as TOML
    Config,
}

fn main() {
    init_logging();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();
}

fn run() -> Result<(), Dsp420Error> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => Config::load(path)?,
        None => Config::load_default(),
    };
    if let Some(device) = cli.device {
        config.device = device;
    }
    if let Some(baud) = cli.baud {
        config.baud = baud;
    }

    if let Commands::Config = cli.command {
        print!("{}", config.to_toml()?);
        return Ok(());
    }

    if cli.dry_run {
        let display = open(MemoryTransport::new(), &config);
        execute(cli.command, &display, &config)?;
        let session = lock(&display)?;
        println!("{}", hex(session.transport().bytes()));
        return Ok(());
    }

    let transport = SerialTransport::open(&config.device, config.baud)?;
    info!(device = %config.device, "display connected");
    let display = open(transport, &config);
    execute(cli.command, &display, &config)
}

fn open<T: Transport>(transport: T, config: &Config) -> SharedDisplay<T> {
    DisplaySession::new(transport)
        .with_settle_delay(config.timing.settle_delay())
        .into_shared()
}

fn execute<T: Transport + 'static>(
    command: Commands,
    display: &SharedDisplay<T>,
    config: &Config,
) -> Result<(), Dsp420Error> {
    match command {
        Commands::Clear { start, end } => lock(display)?.clear(Region::new(start, end)),

        Commands::Write {
            text,
            start,
            end,
            no_clear,
            center: centered,
        } => {
            let region = Region::new(start, end);
            let text = if centered { center(&text, region.len()) } else { text };
            lock(display)?.write(&text, region, !no_clear)
        }

        Commands::Scroll {
            text,
            start,
            length,
            align,
            interval_ms,
            duration_ms,
        } => {
            let align: Align = align.parse()?;
            info!(%align, length, "scrolling");
            let widget = Widget::new(text, start, length)?.align(align);
            widget.region()?;

            let interval = interval_ms
                .map(Duration::from_millis)
                .unwrap_or_else(|| config.timing.scroll_interval());
            let task = Scroller::spawn(widget, display.clone(), interval);
            wait(duration_ms)?;
            task.cancel()?;
            Ok(())
        }

        Commands::Prompt { title, initial } => {
            let outcome = {
                let mut keys = TerminalKeys::new()?;
                run_prompt_shared(display, &mut keys, &title, &initial, 0)?
            };
            lock(display)?.clear_all()?;
            match outcome {
                PromptOutcome::Committed(value) => println!("{}", value),
                PromptOutcome::Cancelled => eprintln!("Cancelled."),
            }
            Ok(())
        }

        Commands::Timer { seconds, start } => {
            let mut widget = Widget::countdown(seconds, start)?;
            let region = widget.region()?;
            for remaining in (0..=seconds.max(0)).rev() {
                widget.set_seconds(remaining);
                lock(display)?.write(&widget.render(), region, false)?;
                if remaining > 0 {
                    thread::sleep(Duration::from_secs(1));
                }
            }
            Ok(())
        }

        Commands::Spin {
            pos,
            interval_ms,
            duration_ms,
        } => {
            Region::cell(pos).validate()?;
            let interval = interval_ms
                .map(Duration::from_millis)
                .unwrap_or_else(|| config.timing.spinner_interval());
            let task = Spinner::spawn(pos, display.clone(), interval);
            wait(duration_ms)?;
            task.cancel()?;
            lock(display)?.clear(Region::cell(pos))
        }

        Commands::Config => Ok(()),
    }
}

/// Block for `duration_ms`, or until a key is pressed when none is given.
fn wait(duration_ms: Option<u64>) -> Result<(), Dsp420Error> {
    match duration_ms {
        Some(ms) => thread::sleep(Duration::from_millis(ms)),
        None => {
            TerminalKeys::new()?.next_key()?;
        }
    }
    Ok(())
}

fn hex(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|b| format!("{:02X}", b))
        .collect::<Vec<_>>()
        .join(" ")
}
