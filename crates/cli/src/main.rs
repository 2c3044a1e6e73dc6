mod args;
mod bar;

use anyhow::{Context, Result};
use args::{ClipArgs, Cli, Tool};
use bar::BarProgress;
use clap::Parser;
use log::info;
use num_format::{Locale, ToFormattedString};
use pointclip_geometry::load_polygons;
use pointclip_pipeline::{check_destination, clip_las_file, CancelToken, LogProgress, ProgressSink};
use std::time::Instant;

fn clip(args: &ClipArgs) -> Result<()> {
    check_destination(&args.input, &args.output, args.overwrite)
        .with_context(|| format!("checking output \"{}\"", args.output.display()))?;

    let polygons = load_polygons(&args.shapefile).with_context(|| {
        format!("loading polygons from \"{}\"", args.shapefile.display())
    })?;
    info!(
        "[1/2] {} polygon{} loaded from \"{}\"",
        polygons.len(),
        if polygons.len() == 1 { "" } else { "s" },
        args.shapefile.display()
    );

    let options = args.options();
    let mut progress: Box<dyn ProgressSink> = if args.log_progress {
        Box::new(LogProgress)
    } else {
        Box::new(BarProgress::new()?)
    };

    // Stop at the next chunk boundary so the output header is still written.
    let cancel = CancelToken::new();
    let handler_token = cancel.clone();
    ctrlc::set_handler(move || handler_token.cancel()).context("installing Ctrl-C handler")?;

    info!("[2/2] Clipping points");
    let started = Instant::now();
    let summary = clip_las_file(
        &args.input,
        &args.output,
        &polygons,
        &options,
        progress.as_mut(),
        cancel,
    )
    .with_context(|| format!("clipping \"{}\"", args.input.display()))?;

    info!(
        "Done in {}: {} of {} points written to \"{}\"",
        indicatif::HumanDuration(started.elapsed()),
        summary.points_written.to_formatted_string(&Locale::en),
        summary.points_read.to_formatted_string(&Locale::en),
        args.output.display()
    );
    Ok(())
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();
    match &cli.tool {
        Tool::Clip(args) => clip(args),
    }
}
