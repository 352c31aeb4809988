use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use spotlight_mask::{DEFAULT_MASK_FILL, Tour, mask_svg_document};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "spotlight", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the composite mask path of one step.
    Mask(MaskArgs),
    /// Print one morph frame between two steps.
    Frame(FrameArgs),
    /// Print a JSON array of evenly spaced morph frames between two steps.
    Sample(SampleArgs),
}

#[derive(Parser, Debug)]
struct MaskArgs {
    /// Input tour JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Step index (0-based).
    #[arg(long)]
    step: usize,

    /// Also write an SVG preview to this path.
    #[arg(long)]
    svg: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct FrameArgs {
    /// Input tour JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Step the hole morphs from (0-based).
    #[arg(long)]
    from: usize,

    /// Step the hole morphs to (0-based).
    #[arg(long)]
    to: usize,

    /// Animation progress; values outside [0, 1] are clamped.
    #[arg(long, allow_negative_numbers = true)]
    progress: f64,

    /// Also write an SVG preview to this path.
    #[arg(long)]
    svg: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct SampleArgs {
    /// Input tour JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Step the hole morphs from (0-based).
    #[arg(long)]
    from: usize,

    /// Step the hole morphs to (0-based).
    #[arg(long)]
    to: usize,

    /// Number of intervals; N + 1 frames are printed.
    #[arg(long, default_value_t = 10)]
    frames: u32,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Mask(args) => cmd_mask(args),
        Command::Frame(args) => cmd_frame(args),
        Command::Sample(args) => cmd_sample(args),
    }
}

fn load_tour(path: &Path) -> anyhow::Result<Tour> {
    Tour::from_path(path).with_context(|| format!("load tour '{}'", path.display()))
}

fn cmd_mask(args: MaskArgs) -> anyhow::Result<()> {
    let tour = load_tour(&args.in_path)?;
    let path = tour.mask_path(args.step)?;
    if let Some(out) = &args.svg {
        write_svg(out, &mask_svg_document(tour.canvas, &path, DEFAULT_MASK_FILL))?;
    }
    println!("{path}");
    Ok(())
}

fn cmd_frame(args: FrameArgs) -> anyhow::Result<()> {
    let tour = load_tour(&args.in_path)?;
    let engine = tour.engine()?;
    let transition = tour.transition(&engine, args.from, args.to)?;
    let path = transition.frame(args.progress);
    if let Some(out) = &args.svg {
        write_svg(out, &mask_svg_document(tour.canvas, &path, DEFAULT_MASK_FILL))?;
    }
    println!("{path}");
    Ok(())
}

fn cmd_sample(args: SampleArgs) -> anyhow::Result<()> {
    anyhow::ensure!(args.frames > 0, "--frames must be > 0");
    let tour = load_tour(&args.in_path)?;
    let engine = tour.engine()?;
    let transition = tour.transition(&engine, args.from, args.to)?;

    let frames: Vec<serde_json::Value> = (0..=args.frames)
        .map(|i| {
            let progress = f64::from(i) / f64::from(args.frames);
            serde_json::json!({ "progress": progress, "path": transition.frame(progress) })
        })
        .collect();
    println!("{}", serde_json::to_string_pretty(&frames)?);
    Ok(())
}

fn write_svg(out: &Path, doc: &str) -> anyhow::Result<()> {
    if let Some(parent) = out.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    std::fs::write(out, doc).with_context(|| format!("write svg '{}'", out.display()))?;
    eprintln!("wrote {}", out.display());
    Ok(())
}
