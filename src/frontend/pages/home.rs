use leptos::prelude::*;

use crate::frontend::components::{Button, ButtonVariant, Container, FeatureCard, GlassCard};
use crate::frontend::use_site;
use crate::models::Route;

const TRUST_BADGES: [(&str, &str); 3] = [
    ("🛡", "Qualified & Insured"),
    ("✨", "Premium Finishes"),
    ("🔧", "Clean Install"),
];

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <Hero/>
        <Bento/>
        <CallToAction/>
    }
}

#[component]
fn Hero() -> impl IntoView {
    let site = use_site();

    view! {
        <div class="relative overflow-hidden">
            <div class="pointer-events-none absolute inset-0 bg-[radial-gradient(60%_40%_at_50%_0%,rgba(59,130,246,0.20),transparent_60%)]"></div>
            <Container class="pt-24 pb-20">
                <div class="grid lg:grid-cols-2 gap-10 items-center">
                    <div class="animate-fade-up">
                        <h1 class="text-4xl sm:text-5xl font-semibold tracking-tight text-white drop-shadow-lg">
                            "Crystal-clear craftsmanship for modern spaces"
                        </h1>
                        <p class="mt-4 text-lg text-white/80">
                            "Shower screens, balustrades, mirrors & bespoke glasswork — precision installed "
                            "with a lifetime focus on safety and style."
                        </p>
                        <div class="mt-8 flex flex-wrap gap-3">
                            <Button href=Route::Contact.href()>"Get a quote →"</Button>
                            <Button href=Route::Services.href() variant=ButtonVariant::Outline>
                                "Our services"
                            </Button>
                        </div>
                    </div>
                    <div class="animate-fade-up [animation-delay:100ms]">
                        <GlassCard class="relative">
                            <div class="aspect-[4/3] rounded-xl overflow-hidden ring-1 ring-white/20">
                                <img
                                    alt="Showcase of premium glass installation"
                                    class="h-full w-full object-cover"
                                    src=site.imagery.hero
                                />
                            </div>
                            <div class="mt-4 grid grid-cols-3 gap-3 text-white/90">
                                {TRUST_BADGES
                                    .into_iter()
                                    .map(|(icon, label)| {
                                        view! {
                                            <div class="flex items-center gap-2 text-sm">
                                                <span aria-hidden="true">{icon}</span>
                                                <span>{label}</span>
                                            </div>
                                        }
                                    })
                                    .collect_view()}
                            </div>
                        </GlassCard>
                    </div>
                </div>
            </Container>
        </div>
    }
}

#[component]
fn Bento() -> impl IntoView {
    view! {
        <Container class="py-16">
            <div class="grid md:grid-cols-3 gap-6">
                <FeatureCard
                    class="md:col-span-2"
                    icon="🖼"
                    title="Custom shower screens"
                    desc="Frameless, semi-frameless & framed options tailored to your space."
                />
                <FeatureCard
                    icon="🏢"
                    title="Commercial fit-outs"
                    desc="Shopfronts, partitions & safety glass compliance."
                />
                <FeatureCard
                    icon="✨"
                    title="Mirrors & splashbacks"
                    desc="Perfectly measured, perfectly installed, every time."
                />
                <FeatureCard
                    class="md:col-span-2"
                    icon="🛡"
                    title="Balustrades & pool fencing"
                    desc="Engineered safety with an uninterrupted view."
                />
            </div>
        </Container>
    }
}

#[component]
fn CallToAction() -> impl IntoView {
    view! {
        <Container class="py-10">
            <GlassCard class="flex flex-col md:flex-row items-center justify-between gap-6">
                <div>
                    <h3 class="text-2xl font-semibold text-white">"Ready to upgrade with glass?"</h3>
                    <p class="text-white/80 mt-1">"Fast quoting. Quality workmanship. Local support."</p>
                </div>
                <Button href=Route::Contact.href()>"Contact us →"</Button>
            </GlassCard>
        </Container>
    }
}
