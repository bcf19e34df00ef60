//! Green Hope desktop entry point.
//!
//! Opens a window and runs the page in a frame loop. Mouse wheel, arrow
//! keys, Page Up/Down, Home and End scroll; clicking a navigation entry
//! scrolls to its section. On narrow windows, M (or F1) toggles the
//! navigation drawer and Escape closes it.
//!
//! Usage:
//!   cargo run -p greenhope-app [config.toml]

use std::time::{Duration, Instant};

use anyhow::Result;

use greenhope_backend_sdl::SdlBackend;
use greenhope_page::content::green_hope;
use greenhope_page::render::render_page;
use greenhope_page::{PageController, Theme, Viewport};
use greenhope_types::backend::{InputBackend, RenderBackend};
use greenhope_types::config::PageConfig;
use greenhope_types::input::InputEvent;

const FRAME: Duration = Duration::from_millis(16);

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = PageConfig::resolve(std::env::args().nth(1).as_deref())?;
    log::info!(
        "Starting Green Hope ({}x{})",
        config.screen_width,
        config.screen_height,
    );
    let theme = Theme::from_palette(&config.palette)?;

    let mut backend = SdlBackend::new(
        &config.window_title,
        config.screen_width,
        config.screen_height,
    )?;
    backend.init(config.screen_width, config.screen_height)?;

    let mut viewport = Viewport::new(green_hope(), &config, &backend);
    let mut page = PageController::mount(&mut viewport, &config);
    page.on_scroll(&viewport);

    let mut last = Instant::now();
    'running: loop {
        for event in backend.poll_events() {
            if event == InputEvent::Quit {
                break 'running;
            }
            page.handle_input(&event, &mut viewport, &backend);
        }

        let now = Instant::now();
        let dt = now.duration_since(last).as_millis().min(100) as u32;
        last = now;
        viewport.tick(dt);
        page.poll_scroll(&viewport);

        render_page(&mut backend, &viewport, page.nav(), &theme)?;
        backend.swap_buffers()?;

        let spent = last.elapsed();
        if spent < FRAME {
            std::thread::sleep(FRAME - spent);
        }
    }

    page.unmount();
    backend.shutdown()?;
    log::info!("Green Hope exited");
    Ok(())
}
