//! A CLI tool for inspecting the contents of a DICOM file
//! by printing its decoded tree in a human readable format.
use clap::Parser;
use dcmtree_dump::{ColorMode, DumpOptions};
use dcmtree_object::{Dialect, OpenFileOptions};
use snafu::{Report, ResultExt, Whatever};
use std::io::ErrorKind;
use std::path::PathBuf;
use tracing::Level;

/// Exit code for when an error emerged while reading the DICOM file.
const ERROR_READ: i32 = -2;
/// Exit code for when an error emerged while dumping the file.
const ERROR_PRINT: i32 = -3;

/// Dump the decoded contents of DICOM files
#[derive(Debug, Parser)]
#[command(version)]
struct App {
    /// The DICOM file(s) to read
    #[arg(required = true)]
    files: Vec<PathBuf>,
    /// Reading dialect
    /// (withExtProtocols, nocsa, keepmosaic, forcemosaic),
    /// can be repeated
    #[arg(short = 'd', long = "dialect")]
    dialects: Vec<Dialect>,
    /// Do not reconstruct the image
    #[arg(long = "no-pixels")]
    no_pixels: bool,
    /// Print all values to the end
    #[arg(long = "no-limit")]
    no_limit: bool,
    /// The width of the display
    /// (default is to check automatically)
    #[arg(short = 'w', long = "width")]
    width: Option<u32>,
    /// The color mode
    #[arg(long = "color", default_value = "auto")]
    color: ColorMode,
    /// Fail if any errors are encountered
    #[arg(long = "fail-first")]
    fail_first: bool,
    /// Print debug information while decoding
    #[arg(short = 'v', long = "verbose")]
    verbose: bool,
}

fn main() {
    let App {
        files: filenames,
        dialects,
        no_pixels,
        no_limit,
        width,
        color,
        fail_first,
        verbose,
    } = App::parse();

    tracing::subscriber::set_global_default(
        tracing_subscriber::FmtSubscriber::builder()
            .with_max_level(if verbose { Level::DEBUG } else { Level::INFO })
            .with_writer(std::io::stderr)
            .finish(),
    )
    .whatever_context("Could not set up global logging subscriber")
    .unwrap_or_else(|e: Whatever| {
        eprintln!("[ERROR] {}", Report::from_error(e));
    });

    let mut options = DumpOptions::new();
    options
        .no_limit(no_limit)
        .no_pixels(no_pixels)
        .color_mode(color);
    if let Some(width) = width {
        options.width(width);
    }
    let open_options = OpenFileOptions::new().dialects(dialects);
    let fail_first = filenames.len() == 1 || fail_first;
    let mut errors: i32 = 0;

    for filename in &filenames {
        println!("{}: ", filename.display());
        match open_options.clone().open_file(filename) {
            Err(e) => {
                eprintln!("{}", Report::from_error(e));
                if fail_first {
                    std::process::exit(ERROR_READ);
                }
                errors += 1;
            }
            Ok(mut file) => {
                if let Err(ref e) = options.dump_file(&mut file) {
                    if e.kind() == ErrorKind::BrokenPipe {
                        // handle broken pipe separately with a no-op
                    } else {
                        eprintln!("[ERROR] {}", Report::from_error(e));
                        if fail_first {
                            std::process::exit(ERROR_PRINT);
                        }
                    }
                    errors += 1;
                }
            }
        };
    }

    std::process::exit(errors);
}
