use chrono::Datelike;
use leptos::prelude::*;

use super::Container;
use crate::models::Route;

#[component]
pub fn Footer() -> impl IntoView {
    let year = chrono::Utc::now().year();

    view! {
        <footer class="mt-20">
            <Container class="pb-14">
                <div class="rounded-2xl px-6 py-8 backdrop-blur-xl border border-white/20 bg-white/10 shadow-xl">
                    <div class="flex flex-col md:flex-row md:items-center justify-between gap-6">
                        <div>
                            <div class="text-white font-semibold">"TruView Glass"</div>
                            <div class="text-white/70 text-sm">"© "{year}" All rights reserved."</div>
                        </div>
                        <div class="flex gap-4 text-white/80">
                            <a href=Route::Privacy.href() class="hover:text-white">"Privacy"</a>
                            <a href=Route::Terms.href() class="hover:text-white">"Terms"</a>
                        </div>
                    </div>
                </div>
            </Container>
        </footer>
    }
}
