use std::num::NonZeroU32;
use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use raycast_core::load_scene;
use raycast_renderer::{render, save_image, OutputFormat, PpmFormat};

#[derive(Parser, Debug)]
#[command(name = "raycast")]
#[command(about = "Render a JSON scene with one ray per pixel", long_about = None)]
struct Cli {
    /// Output image width in pixels
    width: NonZeroU32,

    /// Output image height in pixels
    height: NonZeroU32,

    /// Scene description (JSON)
    input: PathBuf,

    /// Output image path
    output: PathBuf,

    /// Output format (defaults to the output file extension)
    #[arg(long, value_enum)]
    format: Option<FormatArg>,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum FormatArg {
    /// ASCII PPM
    P3,
    /// Binary PPM
    P6,
    Png,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::P3 => OutputFormat::Ppm(PpmFormat::Ascii),
            FormatArg::P6 => OutputFormat::Ppm(PpmFormat::Binary),
            FormatArg::Png => OutputFormat::Png,
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    let start = Instant::now();

    let scene = load_scene(&cli.input)
        .with_context(|| format!("Failed to load scene {}", cli.input.display()))?;
    if scene.is_empty() {
        log::warn!("Scene is empty, output will be black");
    }

    let image = render(&scene, cli.width.get(), cli.height.get()).context("Render failed")?;

    let format = cli
        .format
        .map(OutputFormat::from)
        .unwrap_or_else(|| OutputFormat::from_path(&cli.output));
    save_image(&image, &cli.output, format)
        .with_context(|| format!("Failed to write {}", cli.output.display()))?;

    log::info!("Done in {:?}", start.elapsed());
    Ok(())
}

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let cli = Cli::parse();
    log::debug!("{:?}", cli);

    run(&cli)
}
