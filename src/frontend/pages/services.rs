use leptos::prelude::*;

use crate::frontend::components::{Container, GlassCard};

const SERVICES: [(&str, &str); 6] = [
    ("Frameless shower screens", "Minimal hardware. Maximum clarity."),
    ("Mirrors", "Polished edges, custom sizing & mounting."),
    ("Balustrades", "Stainless hardware with compliant spans."),
    ("Pool fencing", "Safe, elegant, corrosion-resistant."),
    ("Splashbacks", "Painted & printed glass options."),
    ("Commercial shopfronts", "Toughened glass, aluminium framing."),
];

#[component]
pub fn ServicesPage() -> impl IntoView {
    view! {
        <Container class="py-16">
            <h2 class="text-3xl font-semibold text-white">"Services"</h2>
            <p class="text-white/80 mt-2">
                "We measure, fabricate and install to spec. Here’s what we specialise in:"
            </p>
            <div class="grid md:grid-cols-2 xl:grid-cols-3 gap-6 mt-8">
                {SERVICES
                    .into_iter()
                    .map(|(title, copy)| {
                        view! {
                            <GlassCard>
                                <h3 class="text-xl font-semibold text-white">{title}</h3>
                                <p class="text-white/80 mt-1">{copy}</p>
                            </GlassCard>
                        }
                    })
                    .collect_view()}
            </div>
        </Container>
    }
}
