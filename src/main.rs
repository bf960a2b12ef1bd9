use anyhow::{bail, Context};
use clap::Parser;
use hs_histogram::{
    compute_hs_histogram, load_bgr_image, logging, show_histogram, FilePresenter, HsHistogram,
    Settings, WindowPresenter,
};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "hs-histogram")]
#[command(version, about = "Hue/saturation histogram of an image", long_about = None)]
struct Cli {
    /// Input image file
    #[arg(value_name = "INPUT")]
    input: PathBuf,

    /// Write the rendered histogram as PNG
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Do not open the histogram window
    #[arg(long)]
    no_window: bool,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let loaded = Settings::load();

    let debug = cli.debug || loaded.as_ref().is_ok_and(|s| s.debug_logging);
    logging::init_tracing(debug);

    let mut settings = loaded.unwrap_or_else(|e| {
        tracing::warn!(error = %e, "ignoring unreadable settings, using defaults");
        Settings::default()
    });
    settings.debug_logging = debug;

    if cli.output.is_some() {
        settings.output_path = cli.output.clone();
    }
    if cli.no_window {
        settings.show_window = false;
    }

    if !settings.show_window && settings.output_path.is_none() {
        bail!("nothing to do: pass --output or allow the window");
    }

    let image = load_bgr_image(&cli.input)
        .map_err(|e| anyhow::anyhow!(e.user_message()))
        .with_context(|| format!("reading {}", cli.input.display()))?;
    let histogram = compute_hs_histogram(&image)?;
    log_summary(&histogram);

    if let Some(path) = &settings.output_path {
        show_histogram(&histogram, &mut FilePresenter::new(path))?;
    }
    if settings.show_window {
        show_histogram(&histogram, &mut WindowPresenter)
            .map_err(|e| anyhow::anyhow!(e.user_message()))?;
    }

    Ok(())
}

fn log_summary(histogram: &HsHistogram) {
    match histogram.peak_bin() {
        Some((h, s)) => tracing::info!(
            pixels = histogram.total(),
            peak_hue = ?HsHistogram::hue_range(h),
            peak_saturation = ?HsHistogram::saturation_range(s),
            peak_count = histogram.get(h, s),
            "histogram computed"
        ),
        None => tracing::info!("histogram is empty"),
    }
}
