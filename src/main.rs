// What you SEE:
// • A white 960x540 canvas with a help bar along the top.
// • Hold Left Mouse and drag to draw; lines/rects/circles preview until release.
// • 1 line, 2 rectangle, 3 circle, 4 freehand. C clears, S saves, ESC quits.

use log::{info, warn};
use raster_canvas::config::Config;
use raster_canvas::controller::{CanvasController, KeyOutcome};
use raster_canvas::error::Error;
use raster_canvas::types::{FrameBuffer, WHITE};
use raster_canvas::window::Drawer;

fn main() -> Result<(), Error> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = Config::load().unwrap_or_else(|e| {
        warn!("{e}; using default config");
        Config::default()
    });

    let mut controller = CanvasController::new(&config);
    let mut drawer = Drawer::new(&config.title, config.width, config.height, config.target_fps)?;
    info!("Canvas {}x{} ready", config.width, config.height);

    // Scratch frame: canvas + preview + help bar, rebuilt every tick.
    let mut screen = FrameBuffer::filled(config.width, config.height, WHITE);

    'frames: while drawer.is_open() {
        for event in drawer.poll_events() {
            match controller.dispatch(event)? {
                Some(KeyOutcome::Exit) => break 'frames,
                Some(KeyOutcome::Saved(path)) => println!("Image saved to {}", path.display()),
                Some(KeyOutcome::ModeChanged(mode)) => info!("Mode: {mode}"),
                _ => {}
            }
        }

        controller.render_frame(&mut screen);
        drawer.present(&screen)?;
    }

    info!("Bye");
    Ok(())
}
