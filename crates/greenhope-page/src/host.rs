//! The host environment the page runs on.
//!
//! The host owns the scroll position and the rendered layout. The page
//! reads the offset and section bounds from it, holds a scroll
//! subscription for as long as it is mounted, and asks it to animate
//! programmatic scrolls.

use std::cell::Cell;
use std::rc::{Rc, Weak};

use crate::section::{SectionBounds, SectionId};

/// Services a host provides to the page.
pub trait Host {
    /// Current vertical scroll offset in pixels (>= 0).
    fn scroll_offset(&self) -> i32;

    /// Rendered bounds of a section, or `None` if it is not laid out.
    fn element_bounds(&self, id: SectionId) -> Option<SectionBounds>;

    /// Register for scroll notifications. Dropping the returned
    /// subscription unregisters it.
    fn subscribe_scroll(&mut self) -> ScrollSubscription;

    /// Start an animated scroll towards `offset` (clamped by the host).
    fn smooth_scroll_to(&mut self, offset: i32);
}

/// A live scroll registration.
///
/// The host marks the subscription pending whenever its scroll offset
/// changes; the owner consumes the mark with [`take_pending`]. Dropping the
/// subscription releases it: the host stops notifying it and prunes the
/// slot on its next notification.
///
/// [`take_pending`]: ScrollSubscription::take_pending
#[derive(Debug)]
pub struct ScrollSubscription {
    pending: Rc<Cell<bool>>,
}

impl ScrollSubscription {
    /// Consume the pending scroll mark. Returns true if the offset changed
    /// since the last call.
    pub fn take_pending(&self) -> bool {
        self.pending.replace(false)
    }
}

/// Host-side registry of scroll subscriptions.
#[derive(Debug, Default)]
pub struct ScrollListeners {
    slots: Vec<Weak<Cell<bool>>>,
}

impl ScrollListeners {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new subscription.
    pub fn subscribe(&mut self) -> ScrollSubscription {
        let pending = Rc::new(Cell::new(false));
        self.slots.push(Rc::downgrade(&pending));
        log::debug!("Scroll listener registered ({} live)", self.live_count());
        ScrollSubscription { pending }
    }

    /// Mark every live subscription pending and drop released ones.
    pub fn notify(&mut self) {
        self.slots.retain(|slot| match slot.upgrade() {
            Some(pending) => {
                pending.set(true);
                true
            },
            None => false,
        });
    }

    /// Number of subscriptions that have not been dropped.
    pub fn live_count(&self) -> usize {
        self.slots.iter().filter(|s| s.strong_count() > 0).count()
    }
}
