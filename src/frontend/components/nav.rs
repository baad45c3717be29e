use leptos::prelude::*;

use super::{Button, ButtonSize, Container};
use crate::models::Route;

const NAV_LINKS: [(Route, &str); 5] = [
    (Route::Home, "Home"),
    (Route::About, "About"),
    (Route::Services, "Services"),
    (Route::Gallery, "Gallery"),
    (Route::Contact, "Contact"),
];

/// Mobile menu state: starts collapsed and collapses again after every
/// change of `route`.
pub fn use_menu_toggle(route: Memo<Route>) -> RwSignal<bool> {
    let open = RwSignal::new(false);

    let collapse = ImmediateEffect::new_isomorphic(move || {
        route.track();
        open.set(false);
    });
    on_cleanup(move || drop(collapse));

    open
}

#[component]
pub fn Nav(route: Memo<Route>) -> impl IntoView {
    let open = use_menu_toggle(route);

    let link_class = move |target: Route| {
        if route.get() == target {
            "text-white font-medium"
        } else {
            "text-white/80 hover:text-white"
        }
    };

    view! {
        <div class="fixed top-0 inset-x-0 z-50">
            <Container class="py-4">
                <div class="rounded-2xl px-4 py-3 backdrop-blur-xl border border-white/20 bg-white/10 shadow-xl">
                    <div class="flex items-center justify-between">
                        <a href=Route::Home.href() class="flex items-center gap-3">
                            <div class="h-9 w-9 rounded-xl bg-white/80 grid place-items-center ring-1 ring-white/30">
                                <span class="text-slate-900" aria-hidden="true">"◇"</span>
                            </div>
                            <span class="text-white font-semibold tracking-wide">"TruView Glass"</span>
                        </a>
                        <div class="hidden md:flex items-center gap-6">
                            {NAV_LINKS
                                .into_iter()
                                .map(move |(target, label)| {
                                    view! {
                                        <a href=target.href() class=move || link_class(target)>
                                            {label}
                                        </a>
                                    }
                                })
                                .collect_view()}
                            <Button href=Route::Contact.href() size=ButtonSize::Small>
                                "Get a quote"
                            </Button>
                        </div>
                        <button
                            class="md:hidden p-2 rounded-lg bg-white/10 ring-1 ring-white/20 text-white"
                            aria-label="Toggle menu"
                            aria-expanded=move || open.get().to_string()
                            on:click=move |_| open.update(|v| *v = !*v)
                        >
                            {move || if open.get() { "✕" } else { "☰" }}
                        </button>
                    </div>
                    <Show when=move || open.get()>
                        <div class="md:hidden mt-3 border-t border-white/20 pt-3 grid gap-2">
                            {NAV_LINKS
                                .into_iter()
                                .map(move |(target, label)| {
                                    view! {
                                        <a
                                            href=target.href()
                                            class="text-white/90 hover:text-white px-1 py-2"
                                            on:click=move |_| open.set(false)
                                        >
                                            {label}
                                        </a>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </Show>
                </div>
            </Container>
        </div>
    }
}
