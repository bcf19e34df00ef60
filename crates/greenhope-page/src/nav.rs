//! Navigation state: drawer visibility and the highlighted section.

use crate::section::SectionId;

/// The page's navigation state.
///
/// Created closed with no active section. `active_section` is `None` when
/// no section contains the scroll-spy reference point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NavigationState {
    is_menu_open: bool,
    active_section: Option<SectionId>,
}

impl NavigationState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the mobile drawer is visible.
    pub fn is_menu_open(&self) -> bool {
        self.is_menu_open
    }

    /// The highlighted navigation entry, if any.
    pub fn active_section(&self) -> Option<SectionId> {
        self.active_section
    }

    /// Flip the drawer. Returns the new visibility.
    pub fn toggle_menu(&mut self) -> bool {
        self.is_menu_open = !self.is_menu_open;
        self.is_menu_open
    }

    /// Hide the drawer.
    pub fn close_menu(&mut self) {
        self.is_menu_open = false;
    }

    /// Replace the active section. Returns true when it changed.
    pub fn set_active_section(&mut self, section: Option<SectionId>) -> bool {
        let changed = self.active_section != section;
        self.active_section = section;
        changed
    }
}
