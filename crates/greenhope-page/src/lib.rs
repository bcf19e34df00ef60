//! greenhope-page: the Green Hope single-page site.
//!
//! The page is one stateful view, [`PageController`], sitting on a
//! [`Host`] that owns the scroll position and the rendered layout. The
//! controller tracks which section is in view (scroll-spy), the state of
//! the mobile navigation drawer, and smooth navigation to a section.
//! All drawing goes through `RenderBackend` trait methods -- no
//! platform-specific code.

pub mod animation;
pub mod content;
pub mod controller;
pub mod host;
pub mod layout;
pub mod nav;
pub mod render;
pub mod scroll;
pub mod scroll_spy;
pub mod section;
pub mod theme;
pub mod viewport;

#[cfg(test)]
pub(crate) mod test_utils;

pub use controller::PageController;
pub use host::{Host, ScrollSubscription};
pub use nav::NavigationState;
pub use section::{SectionBounds, SectionId};
pub use theme::Theme;
pub use viewport::Viewport;
