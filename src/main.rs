use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use seqview::{scan_any, GridIndexer, IndexOf, Position, SegmentedView};
use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter (e.g. `seqview=debug`).
const LOG_ENV: &str = "SEQVIEW_LOG";

#[derive(Parser, Debug)]
#[command(name = "seqview", about = "Zero-copy scanning and coordinate mapping over byte sequences")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the positions of a delimiter byte (or set of bytes) in a file.
    Scan {
        /// Input file, scanned as raw bytes.
        file: PathBuf,
        /// Delimiter byte, given as a single ASCII character.
        #[arg(long, conflicts_with = "any")]
        byte: Option<char>,
        /// Match any of these ASCII characters.
        #[arg(long)]
        any: Option<String>,
    },
    /// Resolve a logical position across text segments.
    Coord {
        /// Position: `N` from the start or `^N` from the end.
        position: Position,
        /// Segments in order; pass "" for an empty segment.
        segments: Vec<String>,
        /// Also print the first and last element coordinates.
        #[arg(long)]
        bounds: bool,
    },
    /// Compute the flat row-major index of a grid coordinate.
    Grid {
        /// Dimension sizes, outermost first.
        #[arg(long, value_delimiter = ',', required = true)]
        dims: Vec<usize>,
        /// One index per dimension.
        indices: Vec<usize>,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Scan { file, byte, any } => run_scan(file, byte, any)?,
        Commands::Coord {
            position,
            segments,
            bounds,
        } => run_coord(position, &segments, bounds)?,
        Commands::Grid { dims, indices } => run_grid(&dims, &indices)?,
    }

    Ok(())
}

fn run_scan(path: PathBuf, byte: Option<char>, any: Option<String>) -> Result<()> {
    let contents = std::fs::read(&path)
        .with_context(|| format!("failed to read {}", path.display()))?;

    match (byte, any.as_deref()) {
        (Some(ch), None) => {
            let target = ascii_byte(ch)?;
            print_positions(IndexOf::new(&contents, &target));
        }
        (None, Some(set)) => {
            if !set.is_ascii() {
                bail!("--any accepts ASCII characters only");
            }
            print_positions(scan_any(&contents, set.as_bytes()));
        }
        _ => bail!("exactly one of --byte or --any is required"),
    }
    Ok(())
}

fn print_positions(positions: impl Iterator<Item = usize>) {
    for position in positions {
        println!("{position}");
    }
}

fn run_coord(position: Position, segments: &[String], bounds: bool) -> Result<()> {
    let slices: Vec<&[u8]> = segments.iter().map(|segment| segment.as_bytes()).collect();
    let view = SegmentedView::from_slices(&slices).context("invalid segments")?;

    let coord = view
        .coord_at(position)
        .with_context(|| format!("cannot resolve position {position}"))?;
    println!("{position}\t{coord}");

    if bounds {
        println!("start\t{}", view.start());
        println!("end\t{}", view.end());
    }
    Ok(())
}

fn run_grid(dims: &[usize], indices: &[usize]) -> Result<()> {
    let volume = dims
        .iter()
        .try_fold(1usize, |acc, &dim| acc.checked_mul(dim))
        .with_context(|| format!("grid shape {dims:?} overflows"))?;
    // Zero-sized cells: a backing that matches the volume without allocating.
    let cells = vec![(); volume];
    let grid = GridIndexer::new(&cells, dims).context("invalid grid shape")?;

    let flat = grid
        .flat_index(indices)
        .with_context(|| format!("cannot index grid {dims:?} at {indices:?}"))?;
    println!("{flat}");
    Ok(())
}

fn ascii_byte(ch: char) -> Result<u8> {
    u8::try_from(ch)
        .ok()
        .filter(u8::is_ascii)
        .with_context(|| format!("delimiter {ch:?} is not an ASCII character"))
}
