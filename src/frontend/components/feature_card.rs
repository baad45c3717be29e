use leptos::prelude::*;

use super::GlassCard;

#[component]
pub fn FeatureCard(
    icon: &'static str,
    title: &'static str,
    desc: &'static str,
    #[prop(optional, into)] class: String,
) -> impl IntoView {
    view! {
        <GlassCard class=class>
            <div class="flex items-start gap-4">
                <span class="text-3xl leading-none" aria-hidden="true">{icon}</span>
                <div>
                    <h3 class="text-xl font-semibold text-white">{title}</h3>
                    <p class="text-white/80 mt-2">{desc}</p>
                </div>
            </div>
        </GlassCard>
    }
}
