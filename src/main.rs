use std::path::PathBuf;
use std::time::Instant;

use clap::Parser;
use radar_coverage_rs::logger;
use radar_coverage_rs::radar_pipeline::{
    CoveragePipeline, OutputWriter, RadarConfig, RadarImageSource,
};
use tracing::{error, info};

/// Measure how much of a radar image's region of interest shows precipitation.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// TOML configuration file; built-in defaults otherwise
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override the radar image URL
    #[arg(long)]
    url: Option<String>,

    /// Read the radar image from a local file instead of fetching it
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Override the output directory
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Do not keep timestamped copies, only the preview
    #[arg(long)]
    no_save: bool,

    /// Print per-step timings
    #[arg(long)]
    timings: bool,

    /// Default log level when RUST_LOG is unset
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn load_config(args: &Args) -> anyhow::Result<RadarConfig> {
    let mut config = match &args.config {
        Some(path) => RadarConfig::from_file(path)?,
        None => RadarConfig::default(),
    };
    if let Some(url) = &args.url {
        config.source_url = url.clone();
    }
    if let Some(dir) = &args.output_dir {
        config.output_dir = dir.clone();
    }
    if args.no_save {
        config.save_images = false;
    }
    Ok(config)
}

fn execute<S: RadarImageSource, W: OutputWriter>(
    pipeline: CoveragePipeline<S, W>,
    show_timings: bool,
) {
    match pipeline.run() {
        Ok(report) => {
            info!(
                width = report.image_width,
                height = report.image_height,
                written = report.written.len(),
                "Radar image processed"
            );
            for (path, reason) in &report.failed_writes {
                println!("Failed to save {}: {}", path.display(), reason);
            }
            println!("Final Clouds percentage: {:.1}%", report.coverage);
            if show_timings {
                report.timings.print_summary();
            }
        }
        Err(e) => {
            error!("Coverage run failed: {}", e);
            println!("Error getting clouds percentage: {}", e);
        }
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    logger::init_with_level(&args.log_level);

    let start = Instant::now();
    info!("Starting radar coverage...");

    let config = load_config(&args)?;
    info!(
        roi = %config.roi,
        bands = config.bands.len(),
        output_dir = %config.output_dir.display(),
        "Configuration loaded"
    );

    match &args.input {
        Some(path) => execute(CoveragePipeline::from_file(config, path)?, args.timings),
        None => execute(CoveragePipeline::new(config)?, args.timings),
    }

    println!("Time taken: {:?}", start.elapsed());
    Ok(())
}
