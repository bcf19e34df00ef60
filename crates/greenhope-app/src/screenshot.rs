//! Screenshot capture tool.
//!
//! Renders the page in several states into a hidden window and saves PNG
//! screenshots to `screenshots/`.
//!
//! Usage:
//!   cargo run -p greenhope-app --bin greenhope-screenshot [config.toml]
//!
//! Output:
//!   screenshots/01_top.png            -- Page top, nothing highlighted
//!   screenshots/02_about.png ...      -- Each section reached via its nav entry
//!   screenshots/07_mobile.png         -- Narrow window, drawer closed
//!   screenshots/08_mobile_drawer.png  -- Narrow window, drawer open

use std::fs;
use std::path::Path;

use greenhope_backend_sdl::SdlBackend;
use greenhope_page::content::green_hope;
use greenhope_page::render::render_page;
use greenhope_page::{Host, PageController, SectionId, Theme, Viewport};
use greenhope_types::backend::RenderBackend;
use greenhope_types::config::PageConfig;

/// Narrow capture size (a phone in portrait).
const MOBILE_SIZE: (u32, u32) = (375, 720);

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = PageConfig::resolve(std::env::args().nth(1).as_deref())?;
    let theme = Theme::from_palette(&config.palette)?;

    let out_dir = Path::new("screenshots");
    fs::create_dir_all(out_dir)?;

    // Desktop: top of the page, then each section via navigation.
    {
        let (w, h) = (config.screen_width, config.screen_height);
        let mut backend = SdlBackend::hidden(w, h)?;
        backend.init(w, h)?;
        let mut viewport = Viewport::new(green_hope(), &config, &backend);
        let mut page = PageController::mount(&mut viewport, &config);
        page.on_scroll(&viewport);
        render_and_save(&mut backend, &viewport, &page, &theme, &out_dir.join("01_top.png"))?;

        for (i, id) in SectionId::ALL.iter().enumerate() {
            page.scroll_to_section(&mut viewport, *id);
            settle(&mut viewport, &mut page);
            // Nudge past the landing margin so the entry is highlighted.
            viewport.wheel(1);
            page.poll_scroll(&viewport);
            log::info!(
                "#{id} at offset {} (active: {:?})",
                viewport.scroll_offset(),
                page.nav().active_section()
            );
            let path = out_dir.join(format!("{:02}_{id}.png", i + 2));
            render_and_save(&mut backend, &viewport, &page, &theme, &path)?;
        }
        page.unmount();
        backend.shutdown()?;
    }

    // Mobile: drawer closed, then open.
    {
        let (w, h) = MOBILE_SIZE;
        let mobile = PageConfig {
            screen_width: w,
            screen_height: h,
            ..config.clone()
        };
        let mut backend = SdlBackend::hidden(w, h)?;
        backend.init(w, h)?;
        let mut viewport = Viewport::new(green_hope(), &mobile, &backend);
        let mut page = PageController::mount(&mut viewport, &mobile);
        render_and_save(&mut backend, &viewport, &page, &theme, &out_dir.join("07_mobile.png"))?;
        page.toggle_menu();
        render_and_save(
            &mut backend,
            &viewport,
            &page,
            &theme,
            &out_dir.join("08_mobile_drawer.png"),
        )?;
        page.unmount();
        backend.shutdown()?;
    }

    println!("Screenshots saved to {}/", out_dir.display());
    Ok(())
}

/// Run the smooth scroll to completion, evaluating the scroll-spy each
/// frame.
fn settle(viewport: &mut Viewport, page: &mut PageController) {
    while viewport.tick(16) {
        page.poll_scroll(viewport);
    }
    page.poll_scroll(viewport);
}

/// Render the page and save a PNG screenshot.
fn render_and_save(
    backend: &mut SdlBackend,
    viewport: &Viewport,
    page: &PageController,
    theme: &Theme,
    path: &Path,
) -> anyhow::Result<()> {
    render_page(backend, viewport, page.nav(), theme)?;
    backend.swap_buffers()?;

    // Render again after swap so read_pixels gets the presented frame.
    render_page(backend, viewport, page.nav(), theme)?;

    let (w, h) = (viewport.width(), viewport.height());
    let pixels = backend.read_pixels(0, 0, w, h)?;
    save_png(path, w, h, &pixels)?;
    log::info!("Saved {}", path.display());
    Ok(())
}

/// Save RGBA pixel data as a PNG file.
fn save_png(path: &Path, width: u32, height: u32, rgba: &[u8]) -> anyhow::Result<()> {
    let file = fs::File::create(path)?;
    let writer = std::io::BufWriter::new(file);
    let mut encoder = png::Encoder::new(writer, width, height);
    encoder.set_color(png::ColorType::Rgba);
    encoder.set_depth(png::BitDepth::Eight);
    let mut writer = encoder.write_header()?;
    writer.write_image_data(rgba)?;
    Ok(())
}
