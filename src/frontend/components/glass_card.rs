use leptos::prelude::*;

/// Frosted translucent panel used for almost every content block.
#[component]
pub fn GlassCard(children: Children, #[prop(optional, into)] class: String) -> impl IntoView {
    let base_classes = "rounded-2xl p-6 shadow-xl backdrop-blur-xl border border-white/20 bg-white/10 \
                        [--glass:linear-gradient(135deg,rgba(255,255,255,.18),rgba(255,255,255,.06))] \
                        bg-[image:var(--glass)]";

    view! {
        <div class=format!("{} {}", base_classes, class)>
            {children()}
        </div>
    }
}
