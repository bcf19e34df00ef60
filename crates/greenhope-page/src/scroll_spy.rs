//! Scroll-spy: derive the active section from the scroll offset.
//!
//! The reference point sits `spy_offset` pixels below the scroll offset.
//! A section is active when the reference point falls inside its vertical
//! extent:
//!
//! ```text
//! offset >= top - spy_offset && offset < top + height - spy_offset
//! ```
//!
//! Sections are checked in document order and a later match replaces an
//! earlier one, so overlapping extents resolve to the lower section.

use crate::section::{SectionBounds, SectionId};

/// Default distance of the reference point below the scroll offset.
pub const DEFAULT_SPY_OFFSET: i32 = 50;

/// Whether `offset` selects a section with the given bounds.
pub fn contains(bounds: SectionBounds, offset: i32, spy_offset: i32) -> bool {
    offset >= bounds.top - spy_offset && offset < bounds.bottom() - spy_offset
}

/// Find the active section for `offset`.
///
/// `sections` yields each section in document order with its bounds, or
/// `None` when the section has no rendered layout; such sections never
/// match. Returns `None` when no section contains the reference point.
pub fn active_section<I>(offset: i32, spy_offset: i32, sections: I) -> Option<SectionId>
where
    I: IntoIterator<Item = (SectionId, Option<SectionBounds>)>,
{
    let mut active = None;
    for (id, bounds) in sections {
        if bounds.is_some_and(|b| contains(b, offset, spy_offset)) {
            active = Some(id);
        }
    }
    active
}
