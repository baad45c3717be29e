use leptos::prelude::*;

use super::{Footer, Nav};
use crate::models::Route;

/// Shared shell: background glow, fixed nav, page body, footer.
#[component]
pub fn PageFrame(route: Memo<Route>, children: Children) -> impl IntoView {
    view! {
        <div class="relative min-h-screen bg-[linear-gradient(120deg,#0f172a,#0b1220)]">
            <div class="absolute inset-0 -z-10 opacity-50" aria-hidden="true">
                <div class="absolute -top-40 left-1/2 h-80 w-80 -translate-x-1/2 rounded-full blur-3xl bg-cyan-500/20"></div>
                <div class="absolute bottom-0 right-0 h-72 w-72 rounded-full blur-3xl bg-indigo-500/20"></div>
            </div>
            <Nav route=route/>
            <main class="pt-24">{children()}</main>
            <Footer/>
        </div>
    }
}
