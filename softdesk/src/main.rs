//! Headless softdesk driver.
//!
//! Builds a desktop from configuration, opens a few windows, replays a titlebar
//! drag and a corner resize through the regular frame pipeline, logs the
//! resulting z-order and geometry, and optionally writes the last frame to a
//! PPM image.

mod ppm;
mod script;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use softdesk_compositor::{Desktop, InputTracker, Region, Texture, WindowId};
use softdesk_core::config::{ConfigLoader, CoreConfig};
use softdesk_core::logging::{init_logging, init_minimal_logging};
use softdesk_core::types::Point;
use tracing::{error, info};

use script::Sample;

#[derive(Parser, Debug)]
#[command(name = "softdesk")]
#[command(about = "Runs the softdesk compositor headless against scripted input")]
struct Args {
    /// Configuration file. Defaults to config.toml in the user config directory.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Frames spent on each scripted gesture.
    #[arg(short, long, default_value_t = 30)]
    frames: u32,

    /// Write the final framebuffer as a binary PPM.
    #[arg(short, long)]
    dump: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let config = match load_config(&args) {
        Ok(config) => config,
        Err(e) => {
            init_minimal_logging();
            error!("{:#}", e);
            return Err(e);
        }
    };
    init_logging(&config.logging, false).context("Failed to initialize logging")?;

    if let Err(e) = run(&args, &config) {
        error!("{:#}", e);
        return Err(e);
    }
    Ok(())
}

fn load_config(args: &Args) -> Result<CoreConfig> {
    let config = match &args.config {
        Some(path) => ConfigLoader::load_from_path(path)
            .with_context(|| format!("Failed to load configuration from {}", path.display()))?,
        None => ConfigLoader::load().context("Failed to load configuration")?,
    };
    Ok(config)
}

fn run(args: &Args, config: &CoreConfig) -> Result<()> {
    let mut desktop = Desktop::new(&config.desktop).context("Failed to build desktop")?;
    let mut framebuffer = desktop.new_framebuffer();
    let mut input = InputTracker::new(Point::ORIGIN);

    let (width, height) = (config.desktop.screen_width as i32, config.desktop.screen_height as i32);
    let titles = ["terminal", "editor", "viewer"];
    let mut ids = Vec::with_capacity(titles.len());
    for (i, title) in titles.into_iter().enumerate() {
        let offset = i as i32;
        let id = desktop
            .create(title, width / 10 + offset * width / 8, height / 6 + offset * height / 8)
            .with_context(|| format!("Failed to open window '{}'", title))?;
        paint_canvas(&mut desktop, id, offset);
        ids.push(id);
    }
    log_layout(&desktop);

    // Drag the back window by its titlebar, which also raises it.
    let delta = Point::new(width / 4, height / 10);
    let gesture = script::drag_region(&desktop, ids[0], Region::Titlebar, delta, args.frames)
        .context("Back window vanished before the drag")?;
    replay(&mut desktop, &mut input, &mut framebuffer, &gesture, (width, height));
    log_layout(&desktop);

    // Grow the window now at the front from its south-east corner.
    let front = desktop.windows().front().context("No window left to resize")?;
    let delta = Point::new(width / 10, height / 10);
    let gesture = script::drag_region(&desktop, front, Region::SouthEast, delta, args.frames)
        .context("Front window vanished before the resize")?;
    replay(&mut desktop, &mut input, &mut framebuffer, &gesture, (width, height));
    log_layout(&desktop);

    if let Some(path) = &args.dump {
        ppm::dump(path, &framebuffer)?;
        info!("Wrote final frame to {}", path.display());
    }
    Ok(())
}

fn replay(
    desktop: &mut Desktop,
    input: &mut InputTracker,
    framebuffer: &mut Texture,
    samples: &[Sample],
    screen: (i32, i32),
) {
    for sample in samples {
        let pointer = Point::new(
            sample.pointer.x.clamp(0, screen.0 - 1),
            sample.pointer.y.clamp(0, screen.1 - 1),
        );
        let frame = input.next(pointer, sample.buttons);
        let output = desktop.frame(&frame, framebuffer);
        tracing::trace!("Frame at {:?}: cursor {}", pointer, output.cursor);
    }
}

/// Fills a window's canvas with a diagonal gradient so the dump shows content.
fn paint_canvas(desktop: &mut Desktop, id: WindowId, seed: i32) {
    if let Some(canvas) = desktop.windows_mut().canvas_mut(id) {
        let (w, h) = (canvas.width().max(1), canvas.height().max(1));
        let tint = (seed as u32 * 80) & 0xFF;
        for (i, pixel) in canvas.pixels_mut().iter_mut().enumerate() {
            let (x, y) = (i as u32 % w, i as u32 / w);
            *pixel = 0xFF000000 | (x * 255 / w) << 16 | (y * 255 / h) << 8 | tint;
        }
    }
}

fn log_layout(desktop: &Desktop) {
    let windows = desktop.windows();
    let order: Vec<String> = windows
        .iter_front_to_back()
        .map(|(id, w)| format!("{}({})", w.title(), id))
        .collect();
    info!("Z-order front to back: {}", order.join(", "));
    for (id, window) in windows.iter_front_to_back() {
        info!(
            "{} '{}' {:?} content={:?} active={}",
            id,
            window.title(),
            window.state(),
            window.content(),
            windows.active() == Some(id)
        );
    }
}
