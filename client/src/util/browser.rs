//! Browser-only side effects used from event handlers.
//!
//! Client-side (hydrate): real browser calls.
//! Server-side (SSR): no-ops, since handlers and mount-time loads only run
//! after hydration.

use std::future::Future;

/// Run `future` on the browser event loop.
pub fn spawn<F>(future: F)
where
    F: Future<Output = ()> + 'static,
{
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(future);
    #[cfg(not(feature = "hydrate"))]
    drop(future);
}

/// Blocking `window.confirm`. Returns `false` when no window is available.
pub fn confirm(message: &str) -> bool {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window()
            .and_then(|w| w.confirm_with_message(message).ok())
            .unwrap_or(false)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        _ = message;
        false
    }
}
