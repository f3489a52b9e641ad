use anyhow::{bail, Context};
use banner_raster::{FontConfig, ImageSpec, Renderer};
use clap::Parser;
use std::path::PathBuf;

/// banner: Render a styled text banner to PNG
#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// Path to input JSON banner definition. Defaults are used for every
    /// missing field, or for all fields when omitted
    #[clap(short, long)]
    pub input: Option<PathBuf>,

    /// Path to output PNG file to be created
    #[clap(short, long)]
    pub output: PathBuf,

    /// Additional directory to search for font files (repeatable)
    #[clap(long = "font-dir")]
    pub font_dirs: Vec<PathBuf>,

    /// Font file used when the requested font cannot be loaded
    #[clap(long)]
    pub default_font: Option<PathBuf>,

    /// Do not match font names against installed system fonts
    #[clap(long)]
    pub no_system_fonts: bool,

    /// Banner text, replacing the text of the input definition
    #[clap(short, long)]
    pub text: Option<String>,
}

fn main() {
    env_logger::init();
    let args: Args = Args::parse();
    if let Err(err) = run(args) {
        eprintln!("Error: {err:#}");
        std::process::exit(1);
    }
}

fn run(args: Args) -> anyhow::Result<()> {
    let mut spec = match &args.input {
        Some(path) => {
            let spec_str = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read input file: {}", path.display()))?;
            serde_json::from_str::<ImageSpec>(&spec_str)
                .with_context(|| format!("Failed to parse banner definition: {}", path.display()))?
        }
        None => ImageSpec::default(),
    };
    if let Some(text) = args.text {
        spec.text = text;
    }
    if args.input.is_none() && spec.text.is_empty() {
        bail!("Nothing to render: pass --input or --text");
    }

    let mut font_config = FontConfig {
        font_dirs: args.font_dirs,
        load_system_fonts: !args.no_system_fonts,
        ..FontConfig::default()
    };
    if let Some(path) = args.default_font {
        font_config.platform_default = Some(path);
    }

    let renderer = Renderer::new(font_config);
    let png_data = renderer.render_png(&spec).context("Banner rendering failed")?;

    std::fs::write(&args.output, &png_data)
        .with_context(|| format!("Failed to write output to {}", args.output.display()))?;
    log::info!(
        target: "banner",
        "wrote {}x{} banner to {}",
        spec.width,
        spec.height,
        args.output.display()
    );
    Ok(())
}
