//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components read the session from Leptos context; the guard decides what a
//! protected route may render and the navbar carries the logout affordance.

pub mod navbar;
pub mod protected_route;
