//! Sample will generator CLI.
//!
//! Writes the fixture PDF and prints where it went and how large it is.

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;

use sample_will::{GenerationReport, WillGenerator, DEFAULT_OUTPUT};

/// Sample will generator
///
/// Writes the fixed "last will and testament" PDF used as a test fixture.
#[derive(Parser)]
#[command(name = "sample-will")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Output PDF file path
    #[arg(short, long, value_name = "FILE", default_value = DEFAULT_OUTPUT)]
    output: PathBuf,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn print_summary(generator: &WillGenerator, report: &GenerationReport) {
    println!("Renderer: {}", generator.renderer_name());
    println!("Blocks:   {}", report.blocks);
    println!("Pages:    {}", report.pages);
}

fn print_status(report: &GenerationReport) {
    println!("✅ Created sample PDF will: {}", report.path.display());
    println!("📄 File size: {} bytes", report.bytes);
    println!("📍 Location: {}", report.absolute_path.display());
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let generator = WillGenerator::with_printpdf();

    let report = generator
        .generate(&cli.output)
        .with_context(|| format!("Failed to generate sample will at {}", cli.output.display()))?;

    if cli.verbose {
        print_summary(&generator, &report);
    }
    print_status(&report);

    Ok(())
}
