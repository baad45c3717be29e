use leptos::ev;
use leptos::prelude::*;

use crate::models::normalize_fragment;

fn current_fragment() -> String {
    window().location().hash().unwrap_or_default()
}

/// Normalized path from `location.hash`, updated on every `hashchange`.
/// The listener is removed when the calling component's owner is cleaned up.
pub fn use_hash_route() -> ReadSignal<String> {
    use_fragment_route(current_fragment, |changed| {
        let listener = window_event_listener(ev::hashchange, move |_| changed());
        move || listener.remove()
    })
}

/// Tracks the fragment returned by `read`, re-reading it whenever the callback
/// handed to `subscribe` fires. The unsubscribe action `subscribe` returns runs
/// on owner cleanup.
pub fn use_fragment_route<R, S, U>(read: R, subscribe: S) -> ReadSignal<String>
where
    R: Fn() -> String + 'static,
    S: FnOnce(Box<dyn Fn()>) -> U,
    U: FnOnce() + Send + Sync + 'static,
{
    let (path, set_path) = signal(normalize_fragment(&read()));

    let unsubscribe = subscribe(Box::new(move || {
        let next = normalize_fragment(&read());
        tracing::debug!(path = %next, "fragment changed");
        set_path.set(next);
    }));
    on_cleanup(unsubscribe);

    path
}
