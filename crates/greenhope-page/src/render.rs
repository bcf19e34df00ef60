//! Drawing the page through a `RenderBackend`.

use greenhope_types::backend::{Color, RenderBackend};
use greenhope_types::error::Result;

use crate::content::Icon;
use crate::host::Host;
use crate::layout::{HEADER_HEIGHT, PageItem, Paint, Rect};
use crate::nav::NavigationState;
use crate::theme::{Theme, Tone};
use crate::viewport::Viewport;

/// Width of the scroll position indicator on the right edge.
const SCROLLBAR_WIDTH: u32 = 4;

/// Thickness of the active navigation underline.
const UNDERLINE: u32 = 2;

#[rustfmt::skip]
const ICONS: [(Icon, [u8; 8]); 4] = [
    (Icon::Heart, [0x66, 0xFF, 0xFF, 0xFF, 0x7E, 0x3C, 0x18, 0x00]),
    (Icon::Book,  [0x7E, 0x42, 0x5A, 0x42, 0x5A, 0x42, 0x7E, 0x00]),
    (Icon::Globe, [0x3C, 0x5A, 0x99, 0xFF, 0x99, 0x5A, 0x3C, 0x00]),
    (Icon::Users, [0x66, 0x66, 0x00, 0xFF, 0xFF, 0xFF, 0x00, 0x00]),
];

/// Draw one frame of the page: scrolled content, fixed header, and the
/// drawer when it is open.
pub fn render_page<B: RenderBackend + ?Sized>(
    backend: &mut B,
    viewport: &Viewport,
    nav: &NavigationState,
    theme: &Theme,
) -> Result<()> {
    let layout = viewport.layout();
    let width = layout.width;
    let height = viewport.height();
    let scroll_y = viewport.scroll_offset();

    backend.clear(theme.background)?;

    // Page content, clipped below the header.
    backend.set_clip_rect(
        0,
        HEADER_HEIGHT as i32,
        width,
        height.saturating_sub(HEADER_HEIGHT),
    )?;
    let bottom = scroll_y + height as i32;
    for item in layout
        .items
        .iter()
        .filter(|item| item.rect.overlaps_rows(scroll_y + HEADER_HEIGHT as i32, bottom))
    {
        draw_item(backend, item, -scroll_y, theme)?;
    }
    draw_scrollbar(backend, viewport, theme)?;
    backend.reset_clip_rect()?;

    // Header.
    let header = &layout.header;
    backend.fill_rect(
        header.bar.x,
        header.bar.y,
        header.bar.w,
        header.bar.h,
        theme.primary,
    )?;
    draw_item(backend, &header.title, 0, theme)?;
    for (id, rect) in &header.nav {
        draw_label(backend, id.label(), *rect, theme.on_primary)?;
        if nav.active_section() == Some(*id) {
            backend.fill_rect(rect.x, rect.bottom(), rect.w, UNDERLINE, theme.on_primary)?;
        }
    }
    if let Some(button) = header.menu_button {
        if nav.is_menu_open() {
            draw_close_icon(backend, button, theme)?;
        } else {
            draw_menu_icon(backend, button, theme)?;
        }
    }

    if nav.is_menu_open() {
        draw_drawer(backend, viewport, nav, theme)?;
    }
    Ok(())
}

/// Draw a page item shifted vertically by `dy`.
fn draw_item<B: RenderBackend + ?Sized>(
    backend: &mut B,
    item: &PageItem,
    dy: i32,
    theme: &Theme,
) -> Result<()> {
    let r = item.rect;
    let y = r.y + dy;
    match &item.paint {
        Paint::Fill(tone) | Paint::Disc(tone) => backend.fill_rect(r.x, y, r.w, r.h, theme.tone(*tone)),
        Paint::Border(tone) => backend.stroke_rect(r.x, y, r.w, r.h, 1, theme.tone(*tone)),
        Paint::Text { text, size, tone } => {
            let baseline = y + (r.h as i32 - *size as i32) / 2;
            backend.draw_text(text, r.x, baseline, *size, theme.tone(*tone))
        },
        Paint::Icon(icon, tone) => draw_icon(backend, *icon, Rect::new(r.x, y, r.w, r.h), theme.tone(*tone)),
    }
}

/// Draw a single-line label vertically centred in `rect`.
fn draw_label<B: RenderBackend + ?Sized>(
    backend: &mut B,
    text: &str,
    rect: Rect,
    color: Color,
) -> Result<()> {
    let size = crate::layout::NAV_SIZE;
    let y = rect.y + (rect.h as i32 - size as i32) / 2;
    backend.draw_text(text, rect.x, y, size, color)
}

fn draw_icon<B: RenderBackend + ?Sized>(
    backend: &mut B,
    icon: Icon,
    rect: Rect,
    color: Color,
) -> Result<()> {
    let Some((_, rows)) = ICONS.iter().find(|(i, _)| *i == icon) else {
        return Ok(());
    };
    let scale = (rect.w.min(rect.h) / 8).max(1);
    for (row, bits) in rows.iter().enumerate() {
        for col in 0..8u32 {
            if bits & (0x80 >> col) != 0 {
                backend.fill_rect(
                    rect.x + (col * scale) as i32,
                    rect.y + (row as u32 * scale) as i32,
                    scale,
                    scale,
                    color,
                )?;
            }
        }
    }
    Ok(())
}

fn draw_menu_icon<B: RenderBackend + ?Sized>(backend: &mut B, button: Rect, theme: &Theme) -> Result<()> {
    let bar_h = 2;
    for i in 0..3 {
        let y = button.y + 5 + i * 6;
        backend.fill_rect(button.x + 2, y, button.w.saturating_sub(4), bar_h, theme.on_primary)?;
    }
    Ok(())
}

fn draw_close_icon<B: RenderBackend + ?Sized>(backend: &mut B, button: Rect, theme: &Theme) -> Result<()> {
    let (x1, y1) = (button.x + 5, button.y + 5);
    let (x2, y2) = (button.right() - 6, button.bottom() - 6);
    backend.draw_line(x1, y1, x2, y2, 2, theme.on_primary)?;
    backend.draw_line(x1, y2, x2, y1, 2, theme.on_primary)
}

fn draw_drawer<B: RenderBackend + ?Sized>(
    backend: &mut B,
    viewport: &Viewport,
    nav: &NavigationState,
    theme: &Theme,
) -> Result<()> {
    let drawer = &viewport.layout().drawer;
    let panel = drawer.panel;
    backend.fill_rect(panel.x, panel.y, panel.w, panel.h, theme.primary)?;
    for (id, rect) in &drawer.entries {
        if nav.active_section() == Some(*id) {
            backend.fill_rect(rect.x, rect.y, rect.w, rect.h, theme.tone(Tone::PrimaryDark))?;
        }
        draw_label(backend, id.label(), *rect, theme.on_primary)?;
    }
    Ok(())
}

fn draw_scrollbar<B: RenderBackend + ?Sized>(
    backend: &mut B,
    viewport: &Viewport,
    theme: &Theme,
) -> Result<()> {
    let scroll = viewport.scroll();
    if scroll.max_scroll() == 0 {
        return Ok(());
    }
    let track_top = HEADER_HEIGHT as i32;
    let track_h = viewport.height().saturating_sub(HEADER_HEIGHT);
    let thumb_h = ((track_h as u64 * scroll.viewport_height.max(1) as u64)
        / scroll.content_height.max(1) as u64)
        .clamp(16, track_h.max(16) as u64) as u32;
    let travel = track_h.saturating_sub(thumb_h) as f32;
    let y = track_top + (travel * scroll.scroll_fraction()) as i32;
    let x = viewport.width() as i32 - SCROLLBAR_WIDTH as i32;
    backend.fill_rect(x, y, SCROLLBAR_WIDTH, thumb_h, theme.tone(Tone::Border))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::green_hope;
    use crate::test_utils::{DrawCall, MockBackend};
    use crate::section::SectionId;
    use greenhope_types::backend::BitmapMeasure;
    use greenhope_types::config::PageConfig;

    fn viewport(width: u32) -> Viewport {
        let config = PageConfig {
            screen_width: width,
            screen_height: 600,
            smooth_scroll: false,
            ..PageConfig::default()
        };
        Viewport::new(green_hope(), &config, &BitmapMeasure)
    }

    #[test]
    fn renders_title_nav_and_first_heading() {
        let vp = viewport(1024);
        let mut backend = MockBackend::new();
        render_page(&mut backend, &vp, &NavigationState::new(), &Theme::default()).unwrap();
        assert!(backend.has_text("Green Hope NGO"));
        assert!(backend.has_text("Opportunities"));
        assert!(backend.has_text("About Green Hope NGO"));
        assert!(!backend.has_text("Contact Us"));
    }

    #[test]
    fn active_entry_is_underlined() {
        let vp = viewport(1024);
        let (_, vision) = vp.layout().header.nav[2];
        let mut nav = NavigationState::new();
        let mut backend = MockBackend::new();
        render_page(&mut backend, &vp, &nav, &Theme::default()).unwrap();
        let underline = DrawCall::FillRect {
            x: vision.x,
            y: vision.bottom(),
            w: vision.w,
            h: UNDERLINE,
            color: Color::WHITE,
        };
        assert!(!backend.calls.contains(&underline));

        nav.set_active_section(Some(SectionId::Vision));
        let mut backend = MockBackend::new();
        render_page(&mut backend, &vp, &nav, &Theme::default()).unwrap();
        assert!(backend.calls.contains(&underline));
    }

    #[test]
    fn drawer_drawn_only_when_open() {
        let vp = viewport(375);
        let mut nav = NavigationState::new();
        let mut backend = MockBackend::new();
        render_page(&mut backend, &vp, &nav, &Theme::default()).unwrap();
        // Narrow header shows no inline nav labels.
        assert!(!backend.text_positions().iter().any(|(t, ..)| *t == "Mission"));

        nav.toggle_menu();
        let mut backend = MockBackend::new();
        render_page(&mut backend, &vp, &nav, &Theme::default()).unwrap();
        assert!(backend.text_positions().iter().any(|(t, ..)| *t == "Mission"));
        assert_eq!(backend.line_count(), 2);
    }

    #[test]
    fn scrolled_content_is_shifted() {
        let mut vp = viewport(1024);
        let about = vp.layout().section_bounds(SectionId::About).unwrap();
        // Put the heading just below the fixed header.
        vp.smooth_scroll_to(about.top - HEADER_HEIGHT as i32);
        let mut backend = MockBackend::new();
        render_page(&mut backend, &vp, &NavigationState::new(), &Theme::default()).unwrap();
        let heading = backend
            .text_positions()
            .into_iter()
            .find(|(text, ..)| *text == "About Green Hope NGO")
            .unwrap();
        // 32px text on a 48px line.
        assert_eq!(heading.2, HEADER_HEIGHT as i32 + 8);
    }

    #[test]
    fn footer_visible_at_bottom() {
        let mut vp = viewport(1024);
        vp.smooth_scroll_to(i32::MAX);
        let mut backend = MockBackend::new();
        render_page(&mut backend, &vp, &NavigationState::new(), &Theme::default()).unwrap();
        assert!(backend.has_text("Serving communities for over a century."));
    }

    #[test]
    fn icons_render_as_pixels() {
        let mut backend = MockBackend::new();
        draw_icon(&mut backend, Icon::Heart, Rect::new(0, 0, 16, 16), Color::BLACK).unwrap();
        let set_bits: u32 = ICONS[0].1.iter().map(|b| b.count_ones()).sum();
        assert_eq!(backend.fill_rect_count(), set_bits as usize);
    }
}
