use leptos::prelude::*;

use crate::frontend::components::{Container, GlassCard};
use crate::frontend::use_site;

#[component]
pub fn AboutPage() -> impl IntoView {
    let site = use_site();

    view! {
        <Container class="py-16">
            <div class="grid lg:grid-cols-2 gap-10 items-start">
                <GlassCard>
                    <h2 class="text-3xl font-semibold text-white flex items-center gap-3">
                        <span aria-hidden="true">"ℹ"</span>
                        "Our story"
                    </h2>
                    <p class="mt-4 text-white/80">
                        "TruView Glass delivers precise, reliable glass solutions for homes and businesses. "
                        "Our team blends craftsmanship with compliance, ensuring your project looks stunning "
                        "and meets Australian standards."
                    </p>
                    <ul class="mt-6 space-y-3 text-white/90">
                        <li class="flex items-center gap-3">
                            <span aria-hidden="true">"🛡"</span>
                            "Licensed & insured installers"
                        </li>
                        <li class="flex items-center gap-3">
                            <span aria-hidden="true">"🔨"</span>
                            "Clean site, on-time delivery"
                        </li>
                        <li class="flex items-center gap-3">
                            <span aria-hidden="true">"✨"</span>
                            "Attention to detail, end-to-end"
                        </li>
                    </ul>
                </GlassCard>
                <GlassCard>
                    <div class="aspect-video rounded-xl overflow-hidden ring-1 ring-white/20">
                        <img
                            alt="Team installing frameless glass balustrade"
                            class="h-full w-full object-cover"
                            src=site.imagery.about
                        />
                    </div>
                </GlassCard>
            </div>
        </Container>
    }
}
