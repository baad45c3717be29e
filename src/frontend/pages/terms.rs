use leptos::prelude::*;

use crate::frontend::components::{Container, GlassCard};

#[component]
pub fn TermsPage() -> impl IntoView {
    view! {
        <Container class="py-16">
            <GlassCard>
                <h2 class="text-3xl font-semibold text-white">"Terms & Conditions"</h2>
                <p class="text-white/80 mt-4">
                    "By engaging TruView Glass you agree to our standard terms: quotes valid for 30 days; "
                    "site access and measurements must be accurate; custom glass orders are non-refundable "
                    "except under Australian consumer law."
                </p>
                <ul class="list-disc pl-6 mt-6 text-white/80 space-y-2">
                    <li>"Payment terms: as quoted; deposits may be required for custom fabrication."</li>
                    <li>"Warranty: workmanship guaranteed; materials covered by manufacturer warranties."</li>
                    <li>"Risk & safety: we comply with relevant Australian Standards for glazing."</li>
                    <li>"Liability: limited to the fullest extent permitted by law."</li>
                </ul>
            </GlassCard>
        </Container>
    }
}
