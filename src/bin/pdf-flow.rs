use clap::Parser;
use pdf_flow::{build_pdf_from_str, Info, LayoutConfig, PDFError};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

/// Lay out a content document (conf|, text|, img| and table_row| records)
/// into a PDF
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// The content document to read
    input: PathBuf,

    /// Where to write the PDF
    #[arg(short, long)]
    output: PathBuf,

    /// JSON layout configuration (page setup, default style, font calibration)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Document title written to the PDF metadata
    #[arg(short, long)]
    title: Option<String>,
}

fn render(args: &Args) -> Result<(), PDFError> {
    let config = match &args.config {
        Some(path) => LayoutConfig::from_path(path)?,
        None => LayoutConfig::default(),
    };
    let input = std::fs::read_to_string(&args.input)?;
    let base_dir = args.input.parent().unwrap_or(Path::new(""));
    let info = args.title.as_ref().map(|title| Info::new().title(title));

    build_pdf_from_str(&config, info, &input, base_dir, &args.output)
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();

    match render(&args) {
        Ok(()) => {
            log::info!("wrote {}", args.output.display());
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
