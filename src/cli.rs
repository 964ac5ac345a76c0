//! CLI argument parsing with clap.

use clap::Parser;

/// Generate timestamped JPEG test images into a directory.
///
/// Without `--count` images are produced until interrupted with Ctrl-C.
#[derive(Parser, Debug)]
#[command(name = "genimages", version, about)]
pub struct Cli {
    /// Output directory for images [default: ./test_images].
    #[arg(short, long)]
    pub output: Option<String>,

    /// Interval between image generation in seconds [default: 1.0].
    #[arg(short, long, allow_negative_numbers = true)]
    pub interval: Option<f64>,

    /// Number of images to generate. Runs indefinitely when omitted.
    #[arg(short = 'n', long)]
    pub count: Option<u32>,

    /// JPEG quality, 1-100 [default: 75].
    #[arg(short, long)]
    pub quality: Option<u8>,

    /// Config file path override.
    #[arg(long)]
    pub config: Option<String>,

    /// Verbose output.
    #[arg(short, long)]
    pub verbose: bool,
}
