//! Viewport scroll offset management.

use crate::animation::{Tween, easing};

/// Scroll amount for an arrow key.
pub const SCROLL_LINE: i32 = 40;

/// Fraction of the viewport height scrolled by a page key.
pub const SCROLL_PAGE_FRACTION: f32 = 0.9;

/// Scroll state for the page viewport.
#[derive(Debug, Clone)]
pub struct ScrollState {
    /// Current vertical scroll offset in pixels.
    pub scroll_y: i32,
    /// Total content height (from layout).
    pub content_height: i32,
    /// Visible viewport height.
    pub viewport_height: i32,
    /// Running programmatic scroll, if any.
    animation: Option<Tween>,
    /// Whether programmatic scrolls animate.
    smooth: bool,
    /// Duration of a programmatic scroll.
    duration_ms: u32,
}

impl ScrollState {
    pub fn new(viewport_height: i32, smooth: bool, duration_ms: u32) -> Self {
        Self {
            scroll_y: 0,
            content_height: 0,
            viewport_height,
            animation: None,
            smooth,
            duration_ms,
        }
    }

    /// Scroll by a relative amount. Cancels a running animation.
    pub fn scroll_by(&mut self, delta: i32) {
        self.animation = None;
        self.scroll_y = self.scroll_y.saturating_add(delta);
        self.clamp();
    }

    /// Scroll up by one line.
    pub fn scroll_up(&mut self) {
        self.scroll_by(-SCROLL_LINE);
    }

    /// Scroll down by one line.
    pub fn scroll_down(&mut self) {
        self.scroll_by(SCROLL_LINE);
    }

    /// Scroll up by one page.
    pub fn page_up(&mut self) {
        self.scroll_by(-self.page_amount());
    }

    /// Scroll down by one page.
    pub fn page_down(&mut self) {
        self.scroll_by(self.page_amount());
    }

    fn page_amount(&self) -> i32 {
        (self.viewport_height as f32 * SCROLL_PAGE_FRACTION) as i32
    }

    /// Jump to an absolute position.
    pub fn scroll_to(&mut self, y: i32) {
        self.animation = None;
        self.scroll_y = y;
        self.clamp();
    }

    /// Move towards an absolute position, animated when smooth scrolling
    /// is enabled. The target is clamped to the scrollable range.
    pub fn animate_to(&mut self, y: i32) {
        let target = y.clamp(0, self.max_scroll());
        if !self.smooth || self.duration_ms == 0 || target == self.scroll_y {
            self.scroll_to(target);
            return;
        }
        self.animation = Some(Tween::new(
            self.scroll_y as f32,
            target as f32,
            self.duration_ms,
            easing::ease_in_out_cubic,
        ));
    }

    /// Target of the running animation.
    pub fn animation_target(&self) -> Option<i32> {
        self.animation.as_ref().map(|tw| tw.end as i32)
    }

    /// Whether a programmatic scroll is in flight.
    pub fn is_animating(&self) -> bool {
        self.animation.is_some()
    }

    /// Scroll to top of document.
    pub fn scroll_to_top(&mut self) {
        self.scroll_to(0);
    }

    /// Scroll to bottom of document.
    pub fn scroll_to_bottom(&mut self) {
        self.scroll_to(self.max_scroll());
    }

    /// Update content height (after layout).
    pub fn set_content_height(&mut self, height: i32) {
        self.content_height = height;
        self.clamp();
    }

    /// Update viewport height (after window resize).
    pub fn set_viewport_height(&mut self, height: i32) {
        self.viewport_height = height;
        self.clamp();
    }

    /// Advance the programmatic scroll by `dt_ms`. Returns true if still
    /// animating.
    pub fn tick(&mut self, dt_ms: u32) -> bool {
        let Some(tween) = self.animation.as_mut() else {
            return false;
        };
        self.scroll_y = tween.tick(dt_ms).round() as i32;
        let finished = tween.is_finished();
        if finished {
            self.animation = None;
        }
        self.clamp();
        !finished
    }

    /// Get the maximum scroll offset.
    pub fn max_scroll(&self) -> i32 {
        (self.content_height - self.viewport_height).max(0)
    }

    /// Clamp scroll_y to valid range [0, max_scroll].
    fn clamp(&mut self) {
        self.scroll_y = self.scroll_y.clamp(0, self.max_scroll());
    }

    /// Get scroll percentage (0.0 to 1.0) for scrollbar rendering.
    pub fn scroll_fraction(&self) -> f32 {
        let max = self.max_scroll();
        if max == 0 {
            0.0
        } else {
            self.scroll_y as f32 / max as f32
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state() -> ScrollState {
        let mut s = ScrollState::new(200, true, 100);
        s.set_content_height(1000);
        s
    }

    #[test]
    fn scroll_down_increments() {
        let mut s = state();
        s.scroll_down();
        assert_eq!(s.scroll_y, SCROLL_LINE);
    }

    #[test]
    fn scroll_up_clamped_at_zero() {
        let mut s = state();
        s.scroll_up();
        assert_eq!(s.scroll_y, 0);
    }

    #[test]
    fn page_down_scrolls_by_viewport_fraction() {
        let mut s = state();
        s.page_down();
        assert_eq!(s.scroll_y, (200.0 * SCROLL_PAGE_FRACTION) as i32);
    }

    #[test]
    fn scroll_clamped_to_max() {
        let mut s = ScrollState::new(200, false, 0);
        s.set_content_height(300);
        s.scroll_to(500);
        assert_eq!(s.scroll_y, 100);
        s.scroll_to_top();
        assert_eq!(s.scroll_y, 0);
        s.scroll_to_bottom();
        assert_eq!(s.scroll_y, 100);
    }

    #[test]
    fn max_scroll_never_negative() {
        let s = ScrollState::new(200, false, 0);
        assert_eq!(s.max_scroll(), 0);
    }

    #[test]
    fn shrinking_content_clamps_offset() {
        let mut s = state();
        s.scroll_to(700);
        s.set_content_height(500);
        assert_eq!(s.scroll_y, 300);
    }

    #[test]
    fn animate_reaches_target() {
        let mut s = state();
        s.animate_to(400);
        assert!(s.is_animating());
        assert_eq!(s.animation_target(), Some(400));
        assert!(s.tick(50));
        assert!(s.scroll_y > 0 && s.scroll_y < 400);
        assert!(!s.tick(50));
        assert_eq!(s.scroll_y, 400);
        assert!(!s.is_animating());
    }

    #[test]
    fn animate_target_is_clamped() {
        let mut s = state();
        s.animate_to(5000);
        assert_eq!(s.animation_target(), Some(800));
        s.animate_to(-20);
        assert!(!s.is_animating());
        assert_eq!(s.scroll_y, 0);
    }

    #[test]
    fn animate_without_smooth_jumps() {
        let mut s = ScrollState::new(200, false, 100);
        s.set_content_height(1000);
        s.animate_to(300);
        assert!(!s.is_animating());
        assert_eq!(s.scroll_y, 300);
    }

    #[test]
    fn manual_scroll_cancels_animation() {
        let mut s = state();
        s.animate_to(600);
        s.tick(10);
        s.scroll_down();
        assert!(!s.is_animating());
        assert!(!s.tick(10));
    }

    #[test]
    fn scroll_fraction_calculation() {
        let mut s = ScrollState::new(200, false, 0);
        s.set_content_height(400);
        assert_eq!(s.scroll_fraction(), 0.0);
        s.scroll_to(100);
        assert!((s.scroll_fraction() - 0.5).abs() < 0.001);
    }
}
