//! In-process host: scroll position, layout and scroll listeners.

use greenhope_types::backend::TextMeasure;
use greenhope_types::config::PageConfig;
use greenhope_types::input::Key;

use crate::content::Page;
use crate::host::{Host, ScrollListeners, ScrollSubscription};
use crate::layout::PageLayout;
use crate::scroll::ScrollState;
use crate::section::{SectionBounds, SectionId};

/// The rendering surface the page lives in.
///
/// Owns the laid-out page and the scroll offset. Every change of the
/// offset, whether from input, an animation frame or a relayout that
/// clamps it, notifies the live scroll subscriptions.
#[derive(Debug)]
pub struct Viewport {
    page: Page,
    layout: PageLayout,
    scroll: ScrollState,
    listeners: ScrollListeners,
    height: u32,
    config: PageConfig,
}

impl Viewport {
    /// Lay out `page` at the configured screen size.
    pub fn new(page: Page, config: &PageConfig, measure: &dyn TextMeasure) -> Self {
        let width = config.screen_width;
        let height = config.screen_height;
        let layout = PageLayout::build(&page, width, config.is_narrow(width), measure);
        let mut scroll =
            ScrollState::new(height as i32, config.smooth_scroll, config.smooth_scroll_ms);
        scroll.set_content_height(layout.content_height);
        Self {
            page,
            layout,
            scroll,
            listeners: ScrollListeners::new(),
            height,
            config: config.clone(),
        }
    }

    pub fn page(&self) -> &Page {
        &self.page
    }

    pub fn layout(&self) -> &PageLayout {
        &self.layout
    }

    pub fn scroll(&self) -> &ScrollState {
        &self.scroll
    }

    pub fn width(&self) -> u32 {
        self.layout.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Whether the drawer navigation is in use.
    pub fn is_narrow(&self) -> bool {
        self.layout.narrow
    }

    /// Number of scroll subscriptions still alive.
    pub fn listener_count(&self) -> usize {
        self.listeners.live_count()
    }

    /// Re-lay out the page for a new drawable size.
    pub fn resize(&mut self, width: u32, height: u32, measure: &dyn TextMeasure) {
        if width == self.layout.width && height == self.height {
            return;
        }
        let narrow = self.config.is_narrow(width);
        if width != self.layout.width {
            self.layout = PageLayout::build(&self.page, width, narrow, measure);
        }
        self.height = height;
        let content_height = self.layout.content_height;
        self.track(|s| {
            s.set_viewport_height(height as i32);
            s.set_content_height(content_height);
        });
        log::info!("Viewport resized to {width}x{height}");
    }

    /// Scroll by mouse wheel notches (positive = down).
    pub fn wheel(&mut self, notches: i32) {
        let step = self.config.wheel_step;
        self.track(|s| s.scroll_by(notches.saturating_mul(step)));
    }

    /// Apply a scrolling key. Returns false for keys that do not scroll.
    pub fn key_scroll(&mut self, key: Key) -> bool {
        match key {
            Key::Up => self.track(ScrollState::scroll_up),
            Key::Down => self.track(ScrollState::scroll_down),
            Key::PageUp => self.track(ScrollState::page_up),
            Key::PageDown => self.track(ScrollState::page_down),
            Key::Home => self.track(ScrollState::scroll_to_top),
            Key::End => self.track(ScrollState::scroll_to_bottom),
            Key::Menu | Key::Escape => return false,
        }
        true
    }

    /// Advance a running programmatic scroll. Returns true while animating.
    pub fn tick(&mut self, dt_ms: u32) -> bool {
        let mut animating = false;
        self.track(|s| animating = s.tick(dt_ms));
        animating
    }

    /// Run a scroll mutation and notify listeners if the offset moved.
    fn track(&mut self, f: impl FnOnce(&mut ScrollState)) {
        let before = self.scroll.scroll_y;
        f(&mut self.scroll);
        if self.scroll.scroll_y != before {
            log::trace!("Scroll offset {before} -> {}", self.scroll.scroll_y);
            self.listeners.notify();
        }
    }
}

impl Host for Viewport {
    fn scroll_offset(&self) -> i32 {
        self.scroll.scroll_y
    }

    fn element_bounds(&self, id: SectionId) -> Option<SectionBounds> {
        self.layout.section_bounds(id)
    }

    fn subscribe_scroll(&mut self) -> ScrollSubscription {
        self.listeners.subscribe()
    }

    fn smooth_scroll_to(&mut self, offset: i32) {
        self.track(|s| s.animate_to(offset));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::green_hope;
    use greenhope_types::backend::BitmapMeasure;

    fn viewport(width: u32, smooth: bool) -> Viewport {
        let config = PageConfig {
            screen_width: width,
            screen_height: 600,
            smooth_scroll: smooth,
            ..PageConfig::default()
        };
        Viewport::new(green_hope(), &config, &BitmapMeasure)
    }

    #[test]
    fn starts_at_top() {
        let vp = viewport(1024, true);
        assert_eq!(vp.scroll_offset(), 0);
        assert!(!vp.is_narrow());
        assert!(vp.scroll().max_scroll() > 0);
    }

    #[test]
    fn breakpoint_selects_narrow_layout() {
        assert!(viewport(375, true).is_narrow());
        assert!(!viewport(768, true).is_narrow());
    }

    #[test]
    fn element_bounds_come_from_layout() {
        let vp = viewport(1024, true);
        for id in SectionId::ALL {
            assert_eq!(vp.element_bounds(id), vp.layout().section_bounds(id));
            assert!(vp.element_bounds(id).is_some());
        }
    }

    #[test]
    fn wheel_notifies_subscribers() {
        let mut vp = viewport(1024, true);
        let sub = vp.subscribe_scroll();
        vp.wheel(2);
        assert_eq!(vp.scroll_offset(), 96);
        assert!(sub.take_pending());
    }

    #[test]
    fn no_notification_without_movement() {
        let mut vp = viewport(1024, true);
        let sub = vp.subscribe_scroll();
        vp.wheel(-3);
        assert_eq!(vp.scroll_offset(), 0);
        assert!(!sub.take_pending());
    }

    #[test]
    fn keys_scroll() {
        let mut vp = viewport(1024, true);
        assert!(vp.key_scroll(Key::End));
        assert_eq!(vp.scroll_offset(), vp.scroll().max_scroll());
        assert!(vp.key_scroll(Key::Home));
        assert_eq!(vp.scroll_offset(), 0);
        assert!(!vp.key_scroll(Key::Menu));
    }

    #[test]
    fn smooth_scroll_animates_over_ticks() {
        let mut vp = viewport(1024, true);
        let sub = vp.subscribe_scroll();
        vp.smooth_scroll_to(500);
        assert_eq!(vp.scroll_offset(), 0);
        assert!(!sub.take_pending());
        while vp.tick(16) {}
        assert_eq!(vp.scroll_offset(), 500);
        assert!(sub.take_pending());
    }

    #[test]
    fn instant_scroll_when_smooth_disabled() {
        let mut vp = viewport(1024, false);
        vp.smooth_scroll_to(500);
        assert_eq!(vp.scroll_offset(), 500);
        assert!(!vp.tick(16));
    }

    #[test]
    fn dropped_subscription_stops_counting() {
        let mut vp = viewport(1024, true);
        let sub = vp.subscribe_scroll();
        assert_eq!(vp.listener_count(), 1);
        drop(sub);
        assert_eq!(vp.listener_count(), 0);
    }

    #[test]
    fn resize_relayouts_and_clamps() {
        let mut vp = viewport(1024, true);
        vp.key_scroll(Key::End);
        let sub = vp.subscribe_scroll();
        vp.resize(1024, 5000, &BitmapMeasure);
        assert!(vp.scroll_offset() < vp.layout().content_height);
        assert!(sub.take_pending());
        vp.resize(375, 600, &BitmapMeasure);
        assert!(vp.is_narrow());
        assert_eq!(vp.width(), 375);
        assert_eq!(vp.height(), 600);
    }

    #[test]
    fn resize_uses_configured_breakpoint() {
        let config = PageConfig {
            screen_width: 1024,
            screen_height: 600,
            mobile_breakpoint: 1100,
            ..PageConfig::default()
        };
        let mut vp = Viewport::new(green_hope(), &config, &BitmapMeasure);
        assert!(vp.is_narrow());
        for width in [375, 767, 768, 1099, 1100, 1280] {
            vp.resize(width, 600, &BitmapMeasure);
            assert_eq!(vp.is_narrow(), config.is_narrow(width), "width {width}");
        }
    }
}
