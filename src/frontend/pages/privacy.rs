use leptos::prelude::*;

use crate::frontend::components::{Container, GlassCard};
use crate::frontend::use_site;

#[component]
pub fn PrivacyPage() -> impl IntoView {
    let email = use_site().contact.email;

    view! {
        <Container class="py-16">
            <GlassCard>
                <h2 class="text-3xl font-semibold text-white">"Privacy Policy"</h2>
                <p class="text-white/80 mt-4">
                    "We respect your privacy. We only collect information necessary to respond to enquiries "
                    "and deliver services. We do not sell your data. You may request access or deletion at "
                    "any time by contacting "
                    <span class="underline">{email}</span>
                    "."
                </p>
                <ul class="list-disc pl-6 mt-6 text-white/80 space-y-2">
                    <li>"Data we collect: contact details, project info, correspondence."</li>
                    <li>"Use: quotes, scheduling, service delivery, invoicing."</li>
                    <li>"Storage: secure cloud services located in Australia or trusted regions."</li>
                    <li>"Retention: only as long as needed for legal and operational purposes."</li>
                </ul>
            </GlassCard>
        </Container>
    }
}
