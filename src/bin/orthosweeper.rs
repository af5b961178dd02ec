use std::{
    fs::File,
    io::BufWriter,
    path::{Path, PathBuf},
};

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::{filter::LevelFilter, EnvFilter};

use orthosweeper::{io, Intersections, Intersector, Segments, DEFAULT_EPS};

/// Finds all intersections between horizontal and vertical line segments.
#[derive(Parser)]
struct Args {
    /// The input file, with one `id x0 y0 x1 y1` segment per line.
    #[arg(short, long)]
    input: PathBuf,

    /// Where to write the intersections, one `id1 id2 x y` per line.
    /// Defaults to standard output.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Coordinates closer than this are considered equal.
    #[arg(long, default_value_t = DEFAULT_EPS)]
    epsilon: f64,

    /// Skip bad lines and unsupported segments instead of failing.
    #[arg(long)]
    skip_invalid: bool,

    /// Draw the segments and their intersections to this SVG file.
    /// Requires the `debug-svg` feature.
    #[arg(long)]
    svg: Option<PathBuf>,
}

fn load(args: &Args) -> anyhow::Result<Segments> {
    let input = std::fs::read_to_string(&args.input)
        .with_context(|| format!("failed to read {}", args.input.display()))?;

    let mut segments = Segments::new(args.epsilon);
    if args.skip_invalid {
        for record in io::records(&input) {
            let added = record
                .map_err(anyhow::Error::from)
                .and_then(|r| Ok(segments.add_record(&r)?));
            if let Err(e) = added {
                tracing::warn!("skipping segment: {e}");
            }
        }
    } else {
        let records = io::parse_segments(&input)
            .with_context(|| format!("failed to parse {}", args.input.display()))?;
        for r in &records {
            segments.add_record(r)?;
        }
    }
    Ok(segments)
}

#[cfg(feature = "debug-svg")]
fn save_svg(path: &Path, intersections: &Intersections, segments: &Segments) -> anyhow::Result<()> {
    svg::save(path, &intersections.dump_svg(segments))
        .with_context(|| format!("failed to write {}", path.display()))
}

#[cfg(not(feature = "debug-svg"))]
fn save_svg(_: &Path, _: &Intersections, _: &Segments) -> anyhow::Result<()> {
    anyhow::bail!("--svg needs the debug-svg feature")
}

pub fn main() -> anyhow::Result<()> {
    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::WARN.into())
        .from_env_lossy();
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    anyhow::ensure!(
        args.epsilon.is_finite() && args.epsilon >= 0.0,
        "epsilon must be a non-negative number"
    );

    let segments = load(&args)?;
    tracing::info!(
        segments = segments.len(),
        bbox = ?segments.bounding_box(),
        "loaded segments"
    );

    let intersections = Intersector::new().intersections(&segments);
    tracing::info!(intersections = intersections.len(), "done");

    match &args.output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("failed to create {}", path.display()))?;
            io::write_intersections(BufWriter::new(file), intersections.iter())
                .with_context(|| format!("failed to write {}", path.display()))?;
        }
        None => {
            let stdout = std::io::stdout().lock();
            io::write_intersections(BufWriter::new(stdout), intersections.iter())?;
        }
    }

    if let Some(path) = &args.svg {
        save_svg(path, &intersections, &segments)?;
    }

    Ok(())
}
