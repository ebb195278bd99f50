use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use log::info;

use motiontrack_rs::integration::{
    HighguiRenderer, MaskContourExtractor, Mog2Foreground, VideoFileSource,
};
use motiontrack_rs::{RunSummary, VideoPipeline};

/// Moving-object detection and single-centroid tracking over a video file.
#[derive(Parser, Debug)]
#[command(name = "motiontrack", version, about)]
struct Args {
    /// Path to the input video file
    #[arg(long, value_name = "PATH")]
    input: PathBuf,

    /// Title of the display window
    #[arg(long, default_value = "motiontrack")]
    window_title: String,
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();

    match run(&args) {
        Ok(summary) => {
            info!("{} frames processed ({})", summary.frames, summary.stop);
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> anyhow::Result<RunSummary> {
    let source = VideoFileSource::open(&args.input)
        .with_context(|| format!("opening {}", args.input.display()))?;
    let foreground = Mog2Foreground::new()?;
    let renderer = HighguiRenderer::new(&args.window_title)?;

    let mut pipeline = VideoPipeline::new(source, foreground, MaskContourExtractor, renderer);
    Ok(pipeline.run()?)
}
