use leptos::prelude::*;

use crate::frontend::components::Container;
use crate::frontend::use_site;

#[component]
pub fn GalleryPage() -> impl IntoView {
    let site = use_site();

    view! {
        <Container class="py-16">
            <h2 class="text-3xl font-semibold text-white">"Gallery"</h2>
            <p class="text-white/80 mt-2">
                "A snapshot of recent work. High-clarity, clean lines, precise installs."
            </p>
            <div class="grid sm:grid-cols-2 lg:grid-cols-3 gap-4 mt-8">
                {site
                    .imagery
                    .gallery
                    .into_iter()
                    .map(|src| {
                        view! {
                            <div class="relative group overflow-hidden rounded-xl ring-1 ring-white/20">
                                <img
                                    src=src
                                    alt="TruView project"
                                    loading="lazy"
                                    class="h-56 w-full object-cover transition-transform duration-500 group-hover:scale-105"
                                />
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </Container>
    }
}
