//! SDL2 backend for the Green Hope site.
//!
//! Implements `RenderBackend` and `InputBackend` using SDL2. Text is drawn
//! from the shared 5x7 bitmap font, scaled per font size, so layout
//! measurements made headless match what appears on screen.

use sdl2::EventPump;
use sdl2::event::{Event, WindowEvent};
use sdl2::keyboard::Keycode;
use sdl2::mouse::{MouseButton, MouseWheelDirection};
use sdl2::pixels::PixelFormatEnum;
use sdl2::rect::Rect;
use sdl2::render::Canvas;
use sdl2::video::Window;

use greenhope_types::backend::{
    BITMAP_GLYPH_WIDTH, BitmapMeasure, Color, InputBackend, RenderBackend, TextMeasure,
    glyph_scale,
};
use greenhope_types::bitmap_font::{self, GLYPH_COLUMNS, GLYPH_ROWS};
use greenhope_types::error::{GreenHopeError, Result};
use greenhope_types::input::{InputEvent, Key};

fn backend_err(e: impl ToString) -> GreenHopeError {
    GreenHopeError::Backend(e.to_string())
}

/// SDL2 rendering and input backend.
pub struct SdlBackend {
    canvas: Canvas<Window>,
    event_pump: EventPump,
    width: u32,
    height: u32,
}

impl SdlBackend {
    /// Create a new SDL2 backend with a resizable window.
    pub fn new(title: &str, width: u32, height: u32) -> Result<Self> {
        Self::create(title, width, height, false)
    }

    /// Create a backend drawing into a hidden window with the software
    /// renderer, for capturing frames without a display.
    pub fn hidden(width: u32, height: u32) -> Result<Self> {
        Self::create("greenhope-offscreen", width, height, true)
    }

    fn create(title: &str, width: u32, height: u32, hidden: bool) -> Result<Self> {
        let sdl = sdl2::init().map_err(backend_err)?;
        let video = sdl.video().map_err(backend_err)?;
        let mut builder = video.window(title, width, height);
        builder.position_centered();
        if hidden {
            builder.hidden();
        } else {
            builder.resizable();
        }
        let window = builder.build().map_err(backend_err)?;
        let canvas = if hidden {
            window.into_canvas().software().build()
        } else {
            window.into_canvas().accelerated().present_vsync().build()
        }
        .map_err(backend_err)?;
        let event_pump = sdl.event_pump().map_err(backend_err)?;

        log::info!(
            "SDL2 backend initialized: {width}x{height}{}",
            if hidden { " (hidden)" } else { "" }
        );

        Ok(Self {
            canvas,
            event_pump,
            width,
            height,
        })
    }

    /// Set the SDL draw color, blending only when translucent.
    fn set_color(&mut self, color: Color) {
        if color.a < 255 {
            self.canvas.set_blend_mode(sdl2::render::BlendMode::Blend);
        } else {
            self.canvas.set_blend_mode(sdl2::render::BlendMode::None);
        }
        self.canvas
            .set_draw_color(sdl2::pixels::Color::RGBA(color.r, color.g, color.b, color.a));
    }
}

impl TextMeasure for SdlBackend {
    fn measure_text(&self, text: &str, font_size: u16) -> u32 {
        BitmapMeasure.measure_text(text, font_size)
    }
}

impl RenderBackend for SdlBackend {
    fn init(&mut self, width: u32, height: u32) -> Result<()> {
        self.width = width;
        self.height = height;
        Ok(())
    }

    fn clear(&mut self, color: Color) -> Result<()> {
        self.canvas
            .set_draw_color(sdl2::pixels::Color::RGBA(color.r, color.g, color.b, color.a));
        self.canvas.clear();
        Ok(())
    }

    fn fill_rect(&mut self, x: i32, y: i32, w: u32, h: u32, color: Color) -> Result<()> {
        if w == 0 || h == 0 {
            return Ok(());
        }
        self.set_color(color);
        self.canvas
            .fill_rect(Rect::new(x, y, w, h))
            .map_err(backend_err)
    }

    fn draw_text(
        &mut self,
        text: &str,
        x: i32,
        y: i32,
        font_size: u16,
        color: Color,
    ) -> Result<()> {
        let scale = glyph_scale(font_size);
        self.set_color(color);

        let mut cx = x;
        for ch in text.chars() {
            for col in 0..GLYPH_COLUMNS {
                for row in 0..GLYPH_ROWS {
                    if bitmap_font::pixel(ch, col, row) {
                        let px = cx + (col * scale) as i32;
                        let py = y + (row * scale) as i32;
                        self.canvas
                            .fill_rect(Rect::new(px, py, scale, scale))
                            .map_err(backend_err)?;
                    }
                }
            }
            cx += (BITMAP_GLYPH_WIDTH * scale) as i32;
        }
        Ok(())
    }

    fn set_clip_rect(&mut self, x: i32, y: i32, w: u32, h: u32) -> Result<()> {
        self.canvas.set_clip_rect(Rect::new(x, y, w.max(1), h.max(1)));
        Ok(())
    }

    fn reset_clip_rect(&mut self) -> Result<()> {
        self.canvas.set_clip_rect(None);
        Ok(())
    }

    fn swap_buffers(&mut self) -> Result<()> {
        self.canvas.present();
        Ok(())
    }

    fn read_pixels(&self, x: i32, y: i32, w: u32, h: u32) -> Result<Vec<u8>> {
        let rect = Rect::new(x, y, w, h);
        self.canvas
            .read_pixels(rect, PixelFormatEnum::ABGR8888)
            .map_err(backend_err)
    }

    fn shutdown(&mut self) -> Result<()> {
        log::info!("SDL2 backend shut down ({}x{})", self.width, self.height);
        Ok(())
    }
}

impl InputBackend for SdlBackend {
    fn poll_events(&mut self) -> Vec<InputEvent> {
        let mut events = Vec::new();
        for event in self.event_pump.poll_iter() {
            if let Some(e) = map_sdl_event(event) {
                if let InputEvent::Resize { width, height } = e {
                    self.width = width;
                    self.height = height;
                }
                events.push(e);
            }
        }
        events
    }
}

/// Map an SDL2 event to a page input event.
fn map_sdl_event(event: Event) -> Option<InputEvent> {
    match event {
        Event::Quit { .. } => Some(InputEvent::Quit),
        Event::KeyDown {
            keycode: Some(key), ..
        } => map_key_down(key).map(InputEvent::KeyPress),
        Event::MouseMotion { x, y, .. } => Some(InputEvent::CursorMove { x, y }),
        Event::MouseButtonDown {
            mouse_btn: MouseButton::Left,
            x,
            y,
            ..
        } => Some(InputEvent::PointerClick { x, y }),
        Event::MouseButtonUp {
            mouse_btn: MouseButton::Left,
            x,
            y,
            ..
        } => Some(InputEvent::PointerRelease { x, y }),
        Event::MouseWheel { y, direction, .. } => {
            let y = if direction == MouseWheelDirection::Flipped { -y } else { y };
            // SDL reports positive y for scrolling away from the user.
            (y != 0).then_some(InputEvent::Wheel { delta: -y })
        },
        Event::Window {
            win_event: WindowEvent::SizeChanged(w, h),
            ..
        } => Some(InputEvent::Resize {
            width: w.max(1) as u32,
            height: h.max(1) as u32,
        }),
        _ => None,
    }
}

fn map_key_down(key: Keycode) -> Option<Key> {
    match key {
        Keycode::Up => Some(Key::Up),
        Keycode::Down => Some(Key::Down),
        Keycode::PageUp => Some(Key::PageUp),
        Keycode::PageDown | Keycode::Space => Some(Key::PageDown),
        Keycode::Home => Some(Key::Home),
        Keycode::End => Some(Key::End),
        Keycode::M | Keycode::F1 => Some(Key::Menu),
        Keycode::Escape => Some(Key::Escape),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn navigation_keys_map() {
        assert_eq!(map_key_down(Keycode::Up), Some(Key::Up));
        assert_eq!(map_key_down(Keycode::Space), Some(Key::PageDown));
        assert_eq!(map_key_down(Keycode::M), Some(Key::Menu));
        assert_eq!(map_key_down(Keycode::Escape), Some(Key::Escape));
        assert_eq!(map_key_down(Keycode::Q), None);
    }

    #[test]
    fn quit_maps() {
        assert_eq!(
            map_sdl_event(Event::Quit { timestamp: 0 }),
            Some(InputEvent::Quit)
        );
    }

    fn button_down(mouse_btn: MouseButton) -> Event {
        Event::MouseButtonDown {
            timestamp: 0,
            window_id: 1,
            which: 0,
            mouse_btn,
            clicks: 1,
            x: 40,
            y: 20,
        }
    }

    #[test]
    fn only_primary_button_clicks() {
        assert_eq!(
            map_sdl_event(button_down(MouseButton::Left)),
            Some(InputEvent::PointerClick { x: 40, y: 20 })
        );
        assert_eq!(map_sdl_event(button_down(MouseButton::Right)), None);
        assert_eq!(map_sdl_event(button_down(MouseButton::Middle)), None);
    }

    #[test]
    fn resize_maps() {
        let event = Event::Window {
            timestamp: 0,
            window_id: 1,
            win_event: WindowEvent::SizeChanged(640, 480),
        };
        assert_eq!(
            map_sdl_event(event),
            Some(InputEvent::Resize {
                width: 640,
                height: 480
            })
        );
    }
}
