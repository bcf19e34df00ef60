//! Foundation types and traits for the Green Hope site.
//!
//! This crate contains the platform-agnostic types shared by every
//! Green Hope crate: colors, input events, backend trait definitions,
//! configuration, the bitmap font, and error types.

pub mod backend;
pub mod bitmap_font;
pub mod color;
pub mod config;
pub mod error;
pub mod input;
