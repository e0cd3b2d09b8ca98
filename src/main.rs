use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use futures::executor::block_on;
use paintboard::{Config, SurfaceController, script, share};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "paintboard")]
#[command(version, about = "Freehand paint surface with shareable canvases")]
struct Cli {
    /// JSON script of pointer, tool and history steps to replay
    #[arg(long, short = 's', value_name = "FILE")]
    script: Option<PathBuf>,

    /// Share link to preload the canvas from
    #[arg(long, value_name = "URL", conflicts_with = "source")]
    source_url: Option<String>,

    /// Data URL (or bare base64 PNG) to preload the canvas from
    #[arg(long, value_name = "DATA_URL")]
    source: Option<String>,

    /// Canvas width in pixels (overrides the config file)
    #[arg(long, value_name = "PX")]
    width: Option<i32>,

    /// Canvas height in pixels (overrides the config file)
    #[arg(long, value_name = "PX")]
    height: Option<i32>,

    /// Copy the resulting share link to the Wayland clipboard
    #[arg(long, action = ArgAction::SetTrue)]
    copy: bool,

    /// Config file to use instead of ~/.config/paintboard/config.toml
    #[arg(long, short = 'c', value_name = "PATH")]
    config: Option<PathBuf>,
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    if let Some(width) = cli.width {
        config.canvas.width = width;
    }
    if let Some(height) = cli.height {
        config.canvas.height = height;
    }
    config.validate_and_clamp();

    let mut controller =
        SurfaceController::from_config(&config).context("Failed to create canvas")?;

    let source = match (&cli.source_url, &cli.source) {
        (Some(url), _) => Some(share::source_from_share_url(url, &config.share.query_param)?),
        (None, Some(source)) => Some(source.clone()),
        (None, None) => None,
    };
    if let Some(source) = source {
        controller
            .load_from_source(&source)
            .context("Failed to load canvas source")?;
        block_on(controller.wait_for_pending());
        log::info!("Preloaded canvas from source");
    }

    if let Some(path) = &cli.script {
        let steps = script::load(path)?;
        let outcome = script::run(&mut controller, &steps)?;
        log::info!(
            "Replayed {} step(s), {} share link(s) recorded",
            outcome.steps_run,
            outcome.shares.len()
        );
        for link in &outcome.shares {
            log::debug!("Recorded share link: {link}");
        }
    }

    let link = if cli.copy {
        controller
            .share_to_clipboard()
            .context("Failed to share canvas to clipboard")?
    } else {
        controller.share().context("Failed to build share link")?
    };
    println!("{link}");

    Ok(())
}
