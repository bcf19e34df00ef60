//! Shared test utilities for page tests.
//!
//! Provides a [`MockHost`] with scripted section bounds and a
//! [`MockBackend`] that records draw calls for assertion.

use std::collections::HashMap;

use greenhope_types::backend::{BitmapMeasure, Color, RenderBackend, TextMeasure};
use greenhope_types::error::Result;

use crate::host::{Host, ScrollListeners, ScrollSubscription};
use crate::section::{SectionBounds, SectionId};

/// A host whose offset and section bounds are set directly by the test.
#[derive(Debug, Default)]
pub struct MockHost {
    offset: i32,
    bounds: HashMap<SectionId, SectionBounds>,
    listeners: ScrollListeners,
    /// Offsets passed to `smooth_scroll_to`, in call order.
    pub scroll_requests: Vec<i32>,
}

impl MockHost {
    /// Five sections, 100px tall, starting at 200 and spaced 120px apart.
    pub fn stacked() -> Self {
        let mut host = Self::default();
        for (i, id) in SectionId::ALL.iter().enumerate() {
            host.insert(*id, SectionBounds::new(200 + i as i32 * 120, 100));
        }
        host
    }

    pub fn insert(&mut self, id: SectionId, bounds: SectionBounds) {
        self.bounds.insert(id, bounds);
    }

    pub fn remove(&mut self, id: SectionId) {
        self.bounds.remove(&id);
    }

    /// Move the scroll offset, notifying subscribers if it changed.
    pub fn set_offset(&mut self, offset: i32) {
        if offset != self.offset {
            self.offset = offset;
            self.listeners.notify();
        }
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.live_count()
    }
}

impl Host for MockHost {
    fn scroll_offset(&self) -> i32 {
        self.offset
    }

    fn element_bounds(&self, id: SectionId) -> Option<SectionBounds> {
        self.bounds.get(&id).copied()
    }

    fn subscribe_scroll(&mut self) -> ScrollSubscription {
        self.listeners.subscribe()
    }

    fn smooth_scroll_to(&mut self, offset: i32) {
        self.scroll_requests.push(offset);
    }
}

/// A recorded draw call from the mock backend.
#[derive(Debug, Clone, PartialEq, Eq)]
#[allow(dead_code)]
pub enum DrawCall {
    Clear(Color),
    FillRect {
        x: i32,
        y: i32,
        w: u32,
        h: u32,
        color: Color,
    },
    DrawText {
        text: String,
        x: i32,
        y: i32,
        font_size: u16,
        color: Color,
    },
    DrawLine {
        from: (i32, i32),
        to: (i32, i32),
        color: Color,
    },
}

/// A mock backend that records all draw calls for test assertions.
pub struct MockBackend {
    pub calls: Vec<DrawCall>,
}

impl MockBackend {
    pub fn new() -> Self {
        Self { calls: Vec::new() }
    }

    /// Count of `FillRect` calls.
    pub fn fill_rect_count(&self) -> usize {
        self.calls
            .iter()
            .filter(|c| matches!(c, DrawCall::FillRect { .. }))
            .count()
    }

    /// Count of `DrawLine` calls.
    pub fn line_count(&self) -> usize {
        self.calls
            .iter()
            .filter(|c| matches!(c, DrawCall::DrawLine { .. }))
            .count()
    }

    /// Return text draw calls as `(text, x, y, font_size)` tuples,
    /// sorted by Y then X position.
    pub fn text_positions(&self) -> Vec<(&str, i32, i32, u16)> {
        let mut positions: Vec<_> = self
            .calls
            .iter()
            .filter_map(|c| {
                if let DrawCall::DrawText {
                    text,
                    x,
                    y,
                    font_size,
                    ..
                } = c
                {
                    Some((text.as_str(), *x, *y, *font_size))
                } else {
                    None
                }
            })
            .collect();
        positions.sort_by(|a, b| a.2.cmp(&b.2).then(a.1.cmp(&b.1)));
        positions
    }

    /// Check if any `DrawText` call contains the given substring.
    pub fn has_text(&self, needle: &str) -> bool {
        self.calls.iter().any(|c| {
            if let DrawCall::DrawText { text, .. } = c {
                text.contains(needle)
            } else {
                false
            }
        })
    }
}

impl TextMeasure for MockBackend {
    fn measure_text(&self, text: &str, font_size: u16) -> u32 {
        BitmapMeasure.measure_text(text, font_size)
    }
}

impl RenderBackend for MockBackend {
    fn init(&mut self, _width: u32, _height: u32) -> Result<()> {
        Ok(())
    }

    fn clear(&mut self, color: Color) -> Result<()> {
        self.calls.push(DrawCall::Clear(color));
        Ok(())
    }

    fn fill_rect(&mut self, x: i32, y: i32, w: u32, h: u32, color: Color) -> Result<()> {
        self.calls.push(DrawCall::FillRect { x, y, w, h, color });
        Ok(())
    }

    fn draw_text(
        &mut self,
        text: &str,
        x: i32,
        y: i32,
        font_size: u16,
        color: Color,
    ) -> Result<()> {
        self.calls.push(DrawCall::DrawText {
            text: text.to_string(),
            x,
            y,
            font_size,
            color,
        });
        Ok(())
    }

    fn draw_line(
        &mut self,
        x1: i32,
        y1: i32,
        x2: i32,
        y2: i32,
        _width: u16,
        color: Color,
    ) -> Result<()> {
        self.calls.push(DrawCall::DrawLine {
            from: (x1, y1),
            to: (x2, y2),
            color,
        });
        Ok(())
    }

    fn set_clip_rect(&mut self, _x: i32, _y: i32, _w: u32, _h: u32) -> Result<()> {
        Ok(())
    }

    fn reset_clip_rect(&mut self) -> Result<()> {
        Ok(())
    }

    fn swap_buffers(&mut self) -> Result<()> {
        Ok(())
    }

    fn read_pixels(&self, _x: i32, _y: i32, _w: u32, _h: u32) -> Result<Vec<u8>> {
        Ok(Vec::new())
    }

    fn shutdown(&mut self) -> Result<()> {
        Ok(())
    }
}
