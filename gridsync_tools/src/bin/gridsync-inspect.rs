//! Inspect gridsync wire buffers from the command line.
//!
//! ```text
//! gridsync-inspect decode 2fff
//! gridsync-inspect decode --json 0x40
//! gridsync-inspect encode '{"MapEvent":{"entity":2,"cell":255}}'
//! gridsync-inspect layout
//! ```
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};
use gridsync::prelude::{GridsyncConfig, LogConfig, init_logging};
use gridsync_messages::prelude::{CodecConfig, MessageCodec};
use gridsync_tools::ToolsError;
use gridsync_tools::hex::parse_hex;
use gridsync_tools::inspect::{
    Format, decode, encode_json, render_decoded, render_encoded, render_layouts,
};
use tracing::error;

#[derive(Parser, Debug)]
#[command(version, about)]
struct Cli {
    #[command(flatten)]
    codec: CodecArgs,

    /// Log level, overridden by `RUST_LOG`
    #[arg(long, default_value = "warn", global = true)]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Args, Debug)]
struct CodecArgs {
    /// JSON config file; only its `codec` section is used
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Reject cell indices greater or equal to this number of cells
    #[arg(long, global = true)]
    grid_cells: Option<u16>,

    /// Accept decoded cell indices outside of the map
    #[arg(long, global = true)]
    unchecked: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Decode a hex buffer, e.g. `2fff`
    Decode {
        hex: String,
        #[arg(long)]
        json: bool,
    },
    /// Encode a message given in JSON and print the buffer
    Encode {
        message: String,
        #[arg(long)]
        json: bool,
    },
    /// Print the bit layout of every message kind
    Layout {
        #[arg(long)]
        json: bool,
    },
}

impl CodecArgs {
    fn codec_config(&self) -> Result<CodecConfig, gridsync::GridsyncError> {
        let mut config = match &self.config {
            Some(path) => GridsyncConfig::from_path(path)?.codec,
            None => CodecConfig::default(),
        };
        if let Some(cells) = self.grid_cells {
            config = config.with_grid_cells(cells);
        }
        if self.unchecked {
            config = config.with_check_bounds(false);
        }
        config.validate()?;
        Ok(config)
    }
}

fn format(json: bool) -> Format {
    if json { Format::Json } else { Format::Text }
}

fn run(command: &Command, codec: &MessageCodec) -> Result<String, ToolsError> {
    match command {
        Command::Decode { hex, json } => {
            let bytes = parse_hex(hex)?;
            render_decoded(&decode(codec, &bytes)?, format(*json))
        }
        Command::Encode { message, json } => {
            render_encoded(&encode_json(codec, message)?, format(*json))
        }
        Command::Layout { json } => render_layouts(codec.config(), format(*json)),
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let log = LogConfig {
        level: cli.log_level.clone(),
        ..Default::default()
    };
    if let Err(e) = init_logging(&log) {
        eprintln!("{e}");
        return ExitCode::FAILURE;
    }
    let config = match cli.codec.codec_config() {
        Ok(config) => config,
        Err(e) => {
            error!("invalid codec config: {e}");
            return ExitCode::FAILURE;
        }
    };
    match run(&cli.command, &MessageCodec::new(config)) {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}
