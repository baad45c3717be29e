use leptos::prelude::*;

use crate::frontend::components::{
    Alert, Button, Container, ErrorAlert, GlassCard, TextArea, TextInput,
};
use crate::frontend::use_site;
use crate::models::ContactEnquiry;

#[derive(Clone, PartialEq)]
enum SubmitOutcome {
    Invalid(String),
    Noted,
}

#[component]
pub fn ContactPage() -> impl IntoView {
    let site = use_site();

    let (name, set_name) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let (phone, set_phone) = signal(String::new());
    let (message, set_message) = signal(String::new());
    let (outcome, set_outcome) = signal(None::<SubmitOutcome>);

    // Nothing leaves the browser: the enquiry is checked, then dropped.
    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let enquiry = ContactEnquiry::from_fields(
            &name.get_untracked(),
            &email.get_untracked(),
            &phone.get_untracked(),
            &message.get_untracked(),
        );

        match enquiry.validate() {
            Ok(()) => {
                tracing::debug!("contact form submitted locally, not sent");
                set_outcome.set(Some(SubmitOutcome::Noted));
            }
            Err(e) => set_outcome.set(Some(SubmitOutcome::Invalid(e.to_string()))),
        }
    };

    let offline_notice = format!(
        "Online enquiries aren't connected yet. Please call {} or email {} and we'll get back to you.",
        site.contact.phone, site.contact.email
    );

    view! {
        <Container class="py-16">
            <div class="grid lg:grid-cols-2 gap-10 items-start">
                <GlassCard>
                    <h2 class="text-3xl font-semibold text-white">"Get a quote"</h2>
                    <p class="text-white/80 mt-2">
                        "Tell us about your project and we’ll come back with options and timelines."
                    </p>
                    <form class="mt-6 space-y-4" on:submit=on_submit>
                        {move || match outcome.get() {
                            Some(SubmitOutcome::Invalid(reason)) => {
                                view! { <ErrorAlert message=reason/> }.into_any()
                            }
                            Some(SubmitOutcome::Noted) => {
                                view! { <Alert message=offline_notice.clone()/> }.into_any()
                            }
                            None => ().into_any(),
                        }}
                        <TextInput
                            label="Name"
                            name="name"
                            placeholder="Jane Doe"
                            required=true
                            value=name
                            set_value=set_name
                        />
                        <div class="grid sm:grid-cols-2 gap-4">
                            <TextInput
                                label="Email"
                                name="email"
                                input_type="email"
                                placeholder="jane@email.com"
                                required=true
                                value=email
                                set_value=set_email
                            />
                            <TextInput
                                label="Phone"
                                name="phone"
                                input_type="tel"
                                placeholder="0400 000 000"
                                value=phone
                                set_value=set_phone
                            />
                        </div>
                        <TextArea
                            label="Message"
                            name="message"
                            placeholder="Project details, dimensions, timelines..."
                            value=message
                            set_value=set_message
                        />
                        <Button button_type="submit">"Send enquiry"</Button>
                    </form>
                </GlassCard>
                <GlassCard>
                    <h3 class="text-xl font-semibold text-white">"Contact details"</h3>
                    <ul class="mt-4 space-y-3 text-white/90">
                        <li class="flex items-center gap-3">
                            <span aria-hidden="true">"📞"</span>
                            {site.contact.phone.clone()}
                        </li>
                        <li class="flex items-center gap-3">
                            <span aria-hidden="true">"✉"</span>
                            {site.contact.email.clone()}
                        </li>
                        <li class="flex items-center gap-3">
                            <span aria-hidden="true">"📍"</span>
                            {site.contact.location.clone()}
                        </li>
                    </ul>
                    <div class="mt-6 flex gap-3">
                        {site
                            .social
                            .iter()
                            .map(|link| {
                                view! {
                                    <a
                                        href=link.url.clone()
                                        aria-label=link.label.clone()
                                        target="_blank"
                                        rel="noopener noreferrer"
                                        class="px-3 py-2 rounded-lg bg-white/10 hover:bg-white/20 ring-1 ring-white/20 text-sm text-white"
                                    >
                                        {link.label.clone()}
                                    </a>
                                }
                            })
                            .collect_view()}
                    </div>
                </GlassCard>
            </div>
        </Container>
    }
}
