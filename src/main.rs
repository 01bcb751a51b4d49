use std::error::Error;
use std::fs;
use std::io::{self, IsTerminal, Read, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::{debug, Level};

use qrmint::{ECLevel, MaskPattern, OutputFormat, QRBuilder, Version};

// Largest input any symbol holds: numeric mode, level L, version 40
const MAX_TEXT_LEN: usize = 7089;

#[derive(Parser)]
#[command(name = "qrmint")]
#[command(about = "Encode text as a QR Code and print it to the terminal", long_about = None)]
#[command(after_help = "If neither -t nor -f is specified, encodes the data read from STDIN.")]
struct Cli {
    /// Encode the given TEXT
    #[arg(short, value_name = "TEXT", conflicts_with = "file")]
    text: Option<String>,

    /// Encode the content of FILE
    #[arg(short, value_name = "FILE", conflicts_with = "text")]
    file: Option<PathBuf>,

    /// Force error correction level, from 0 (Low) to 3 (High)
    #[arg(short = 'l', value_name = "LEVEL")]
    level: Option<u8>,

    /// Force QR version, from 1 to 40
    #[arg(short = 'v', value_name = "VERSION")]
    version: Option<usize>,

    /// Force mask pattern, from 0 to 7
    #[arg(short = 'm', value_name = "MASK")]
    mask: Option<u8>,

    /// Output format, one of: ANSI, ASCII, UTF8, UTF8Q
    #[arg(short = 'o', value_name = "FORMAT", default_value = "UTF8")]
    output: OutputFormat,

    /// Print debugging messages to STDERR
    #[arg(short = 'd')]
    debug: bool,
}

fn read_input(cli: &Cli) -> Result<Vec<u8>, Box<dyn Error>> {
    let data = match (&cli.text, &cli.file) {
        (Some(text), _) => text.as_bytes().to_vec(),
        (None, Some(path)) => fs::read(path)
            .map_err(|e| format!("Failed to read from file '{}': {e}", path.display()))?,
        (None, None) => {
            let stdin = io::stdin();
            if stdin.is_terminal() {
                eprint!("Enter text to encode (Ctrl+D to finish): ");
                io::stderr().flush()?;
            }
            let mut buf = Vec::new();
            stdin
                .lock()
                .take(MAX_TEXT_LEN as u64 + 1)
                .read_to_end(&mut buf)
                .map_err(|e| format!("Failed to read from STDIN: {e}"))?;
            buf
        }
    };

    if data.len() > MAX_TEXT_LEN {
        return Err(format!("Input exceeds the maximum length of {MAX_TEXT_LEN} bytes").into());
    }
    Ok(data)
}

fn run(cli: &Cli) -> Result<String, Box<dyn Error>> {
    // Overrides are checked before any input is read
    let level = cli.level.map(ECLevel::try_from).transpose()?;
    let version = cli.version.map(Version::new).transpose()?;
    let mask = cli.mask.map(MaskPattern::new).transpose()?;

    let data = read_input(cli)?;
    debug!("Read {} bytes of input", data.len());

    let mut builder = QRBuilder::new(&data);
    if let Some(l) = level {
        builder.ec_level(l);
    }
    if let Some(v) = version {
        builder.version(v);
    }
    if let Some(m) = mask {
        builder.mask(m);
    }

    let qr = builder.build()?;
    Ok(qr.render(cli.output))
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_max_level(if cli.debug { Level::DEBUG } else { Level::WARN })
        .with_writer(io::stderr)
        .init();

    match run(&cli) {
        Ok(symbol) => {
            print!("{symbol}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}
