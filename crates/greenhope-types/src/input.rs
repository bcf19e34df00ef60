//! Platform-agnostic input event types.
//!
//! Every backend maps its native input to these enums. The page never sees
//! raw platform input.

use serde::{Deserialize, Serialize};

/// A platform-agnostic input event.
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// Pointer moved to absolute position.
    CursorMove { x: i32, y: i32 },
    /// Pointer click at absolute position (mouse or touch).
    PointerClick { x: i32, y: i32 },
    /// Pointer released.
    PointerRelease { x: i32, y: i32 },
    /// Mouse wheel notches. Positive scrolls the page down.
    Wheel { delta: i32 },
    /// A navigation key pressed.
    KeyPress(Key),
    /// The window was resized to a new drawable size.
    Resize { width: u32, height: u32 },
    /// User requested quit (window close, etc.).
    Quit,
}

/// Keys the page reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Key {
    Up,
    Down,
    PageUp,
    PageDown,
    Home,
    End,
    /// Toggles the navigation drawer on narrow viewports.
    Menu,
    Escape,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wheel_event_equality() {
        assert_eq!(InputEvent::Wheel { delta: 2 }, InputEvent::Wheel { delta: 2 });
        assert_ne!(InputEvent::Wheel { delta: 2 }, InputEvent::Wheel { delta: -2 });
    }

    #[test]
    fn click_differs_from_release() {
        let press = InputEvent::PointerClick { x: 4, y: 8 };
        let release = InputEvent::PointerRelease { x: 4, y: 8 };
        assert_ne!(press, release);
    }

    #[test]
    fn resize_carries_dimensions() {
        let e = InputEvent::Resize {
            width: 375,
            height: 667,
        };
        if let InputEvent::Resize { width, height } = e {
            assert_eq!(width, 375);
            assert_eq!(height, 667);
        } else {
            panic!("wrong variant");
        }
    }

    #[test]
    fn key_hash_distinct() {
        use std::collections::HashSet;
        let mut set = HashSet::new();
        set.insert(Key::PageUp);
        set.insert(Key::PageDown);
        set.insert(Key::PageUp);
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn key_serde_roundtrip() {
        let json = serde_json::to_string(&Key::Menu).unwrap();
        assert_eq!(json, "\"Menu\"");
        let k: Key = serde_json::from_str(&json).unwrap();
        assert_eq!(k, Key::Menu);
    }
}
