use clap::error::ErrorKind;
use clap::{ArgAction, Parser};
use jpeg_border::config::{self, RawOptions};
use jpeg_border::imaging::operations::EXIT_CONFIG_OR_DECODE;
use jpeg_border::imaging::{RustBackend, pad_image};
use jpeg_border::output;
use std::path::PathBuf;
use std::process::ExitCode;

fn version_string() -> &'static str {
    let on_tag = env!("ON_RELEASE_TAG");
    if on_tag == "true" {
        env!("CARGO_PKG_VERSION")
    } else {
        let hash = env!("GIT_HASH");
        if hash.is_empty() {
            "dev@unknown"
        } else {
            // Leaked once at startup
            Box::leak(format!("dev@{hash}").into_boxed_str())
        }
    }
}

#[derive(Parser)]
#[command(name = "jpeg-border")]
#[command(about = "Pad a JPEG with a centered white border")]
#[command(long_about = "\
Pad a JPEG with a centered white border

The output grows by the given ratios; the source pixels are copied unchanged
into the middle and everything around them is white. Ratios below 1 add no
border on that axis: the image is never cropped.

Examples:
  jpeg-border -i photo.jpg -o framed.jpg -h 2        # 100x50 → 100x100
  jpeg-border -i photo.jpg -O -w 1.2 -h 1.2          # 20% larger, in place
  jpeg-border -i photo.jpg -o sq.jpg -h 1.5 --square # width follows height

Exit status: 0 ok, 255 bad options or unreadable input, 254 padding failed,
253 output could not be written.")]
#[command(version = version_string())]
#[command(disable_help_flag = true)]
struct Cli {
    /// Source JPEG
    #[arg(short = 'i', long = "input", value_name = "PATH")]
    input: PathBuf,

    /// Destination file
    #[arg(short = 'o', long = "output", value_name = "PATH")]
    output: Option<PathBuf>,

    /// Write the result over the source file
    #[arg(short = 'O', long = "overwrite")]
    overwrite: bool,

    /// Height ratio (1 = no vertical border)
    #[arg(
        short = 'h',
        long = "height",
        value_name = "RATIO",
        default_value_t = 1.0,
        allow_negative_numbers = true
    )]
    height: f64,

    /// Width ratio (1 = no horizontal border)
    #[arg(
        short = 'w',
        long = "width",
        value_name = "RATIO",
        default_value_t = 1.0,
        allow_negative_numbers = true
    )]
    width: f64,

    /// Make the output square when only one ratio is given
    #[arg(short = 's', long = "square")]
    square: bool,

    /// Print the run report as JSON
    #[arg(long)]
    json: bool,

    /// More diagnostics on stderr (-v info, -vv debug)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count)]
    verbose: u8,

    /// Print help
    #[arg(long = "help", action = ArgAction::Help)]
    help: Option<bool>,
}

impl From<&Cli> for RawOptions {
    fn from(cli: &Cli) -> Self {
        Self {
            input: cli.input.clone(),
            output: cli.output.clone(),
            overwrite: cli.overwrite,
            width_ratio: cli.width,
            height_ratio: cli.height,
            square: cli.square,
        }
    }
}

/// Install the stderr logger. Level comes from `-v` only; no environment lookup.
fn init_logger(verbose: u8) {
    let level = match verbose {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        _ => log::LevelFilter::Debug,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .format_target(false)
        .init();
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let code = match err.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => 0,
                _ => EXIT_CONFIG_OR_DECODE,
            };
            // Nothing sensible to do if stdout/stderr are gone.
            let _ = err.print();
            return ExitCode::from(code);
        }
    };
    init_logger(cli.verbose);

    let params = match config::resolve(RawOptions::from(&cli)) {
        Ok(params) => params,
        Err(err) => {
            eprintln!("{}", output::format_error(&err));
            return ExitCode::from(EXIT_CONFIG_OR_DECODE);
        }
    };

    match pad_image(&RustBackend::new(), &params) {
        Ok(report) => {
            if cli.json {
                if let Err(err) = output::print_pad_json(&report) {
                    log::warn!("could not serialize report: {err}");
                }
            } else {
                output::print_pad_output(&report);
            }
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("{}", output::format_error(&err));
            ExitCode::from(err.exit_code())
        }
    }
}
