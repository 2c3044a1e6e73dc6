use clap::{Args, Parser, Subcommand};
use pointclip_filters::{ClipPolicy, Strategy};
use pointclip_pipeline::{ClipOptions, DEFAULT_CHUNK_SIZE};
use std::num::NonZeroUsize;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "pointclip", version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub tool: Tool,
}

#[derive(Subcommand, Debug)]
pub enum Tool {
    /// Clips a LAS/LAZ file by the polygons of a shapefile
    Clip(ClipArgs),
}

#[derive(Args, Debug)]
pub struct ClipArgs {
    /// The input LAS/LAZ file
    #[arg(short, long)]
    pub input: PathBuf,

    /// The output LAS/LAZ file
    #[arg(short, long)]
    pub output: PathBuf,

    /// The shapefile that contains the polygons
    #[arg(short, long)]
    pub shapefile: PathBuf,

    /// Number of points read per iteration
    #[arg(long, default_value_t = NonZeroUsize::new(DEFAULT_CHUNK_SIZE).unwrap_or(NonZeroUsize::MIN))]
    pub chunk_size: NonZeroUsize,

    /// Keep the points outside the polygons instead of inside
    #[arg(long)]
    pub external: bool,

    /// A point must lie in every polygon rather than in any of them
    #[arg(long)]
    pub intersect: bool,

    /// Replace the output file if it already exists
    #[arg(long)]
    pub overwrite: bool,

    /// Log progress lines instead of drawing a progress bar
    #[arg(long)]
    pub log_progress: bool,
}

impl ClipArgs {
    pub fn options(&self) -> ClipOptions {
        let strategy = if self.intersect {
            Strategy::Intersection
        } else {
            Strategy::Union
        };
        ClipOptions {
            chunk_size: self.chunk_size,
            policy: ClipPolicy {
                keep_external: self.external,
                strategy,
            },
        }
    }
}
