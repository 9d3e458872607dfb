//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate routing decisions and display formatting from page
//! and component logic so they can be tested without a browser.

pub mod browser;
pub mod format;
pub mod guard;
pub mod navigation;
