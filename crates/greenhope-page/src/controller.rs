//! The page controller: scroll-spy, drawer toggle and section navigation.

use greenhope_types::backend::TextMeasure;
use greenhope_types::config::PageConfig;
use greenhope_types::input::{InputEvent, Key};

use crate::host::{Host, ScrollSubscription};
use crate::layout::HEADER_HEIGHT;
use crate::nav::NavigationState;
use crate::scroll_spy;
use crate::section::SectionId;
use crate::viewport::Viewport;

/// The page's single stateful view.
///
/// Mounting subscribes to the host's scroll signal; the subscription is
/// released when the controller is unmounted or dropped.
#[derive(Debug)]
pub struct PageController {
    nav: NavigationState,
    subscription: ScrollSubscription,
    spy_offset: i32,
    scroll_margin_top: i32,
}

impl PageController {
    /// Mount on `host`: closed drawer, no active section.
    pub fn mount<H: Host + ?Sized>(host: &mut H, config: &PageConfig) -> Self {
        let subscription = host.subscribe_scroll();
        log::info!("Page mounted");
        Self {
            nav: NavigationState::new(),
            subscription,
            spy_offset: config.spy_offset,
            scroll_margin_top: config.scroll_margin_top,
        }
    }

    /// Detach from the host.
    pub fn unmount(self) {
        log::info!("Page unmounted");
    }

    /// Current navigation state.
    pub fn nav(&self) -> &NavigationState {
        &self.nav
    }

    /// Re-evaluate the active section if the host scrolled since the last
    /// call. Returns true if a scroll was handled.
    pub fn poll_scroll<H: Host + ?Sized>(&mut self, host: &H) -> bool {
        if !self.subscription.take_pending() {
            return false;
        }
        self.on_scroll(host);
        true
    }

    /// Scroll-spy: set the active section from the host's offset and
    /// section bounds.
    pub fn on_scroll<H: Host + ?Sized>(&mut self, host: &H) {
        let offset = host.scroll_offset();
        let active = scroll_spy::active_section(
            offset,
            self.spy_offset,
            SectionId::ALL.map(|id| (id, host.element_bounds(id))),
        );
        if self.nav.set_active_section(active) {
            log::debug!(
                "Active section at offset {offset}: {}",
                active.map_or("none", SectionId::as_str)
            );
        }
    }

    /// Flip the mobile drawer.
    pub fn toggle_menu(&mut self) {
        let open = self.nav.toggle_menu();
        log::debug!("Menu {}", if open { "opened" } else { "closed" });
    }

    /// Scroll to a section and close the drawer.
    ///
    /// A section with no rendered element is skipped without scrolling;
    /// the drawer is closed either way.
    pub fn scroll_to_section<H: Host + ?Sized>(&mut self, host: &mut H, id: SectionId) {
        match host.element_bounds(id) {
            Some(bounds) => {
                log::debug!("Navigating to #{id}");
                host.smooth_scroll_to(bounds.top - self.scroll_margin_top);
            },
            None => log::debug!("Navigation target #{id} is not rendered"),
        }
        self.nav.close_menu();
    }

    /// Route one input event. Returns true if the page consumed it.
    pub fn handle_input(
        &mut self,
        event: &InputEvent,
        viewport: &mut Viewport,
        measure: &dyn TextMeasure,
    ) -> bool {
        match *event {
            InputEvent::PointerClick { x, y } => self.click(x, y, viewport),
            InputEvent::Wheel { delta } => {
                viewport.wheel(delta);
                true
            },
            InputEvent::KeyPress(Key::Menu) => {
                if viewport.is_narrow() {
                    self.toggle_menu();
                }
                viewport.is_narrow()
            },
            InputEvent::KeyPress(Key::Escape) => {
                let was_open = self.nav.is_menu_open();
                self.nav.close_menu();
                was_open
            },
            InputEvent::KeyPress(key) => viewport.key_scroll(key),
            InputEvent::Resize { width, height } => {
                viewport.resize(width, height, measure);
                if !viewport.is_narrow() && self.nav.is_menu_open() {
                    log::debug!("Viewport is wide -- closing menu");
                    self.nav.close_menu();
                }
                true
            },
            InputEvent::CursorMove { .. } | InputEvent::PointerRelease { .. } | InputEvent::Quit => {
                false
            },
        }
    }

    /// Hit-test a click from the top-most layer down: drawer, header, page.
    fn click(&mut self, x: i32, y: i32, viewport: &mut Viewport) -> bool {
        let layout = viewport.layout();
        if self.nav.is_menu_open() {
            if let Some(id) = layout.drawer_entry_at(x, y) {
                self.scroll_to_section(viewport, id);
                return true;
            }
        }
        if y < HEADER_HEIGHT as i32 {
            if layout.menu_button_at(x, y) {
                self.toggle_menu();
            } else if let Some(id) = layout.nav_at(x, y) {
                self.scroll_to_section(viewport, id);
            }
            return true;
        }
        if self.nav.is_menu_open() && layout.drawer.panel.contains(x, y) {
            return true;
        }
        let page_y = y + viewport.scroll_offset();
        if let Some(label) = layout.link_at(x, page_y) {
            log::info!("'{label}' is a placeholder link with no destination");
            return true;
        }
        false
    }
}
