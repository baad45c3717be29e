use leptos::prelude::*;

#[derive(Clone, Copy, Default, PartialEq)]
pub enum AlertVariant {
    #[default]
    Info,
    Error,
}

#[component]
pub fn Alert(#[prop(into)] message: String, #[prop(optional)] variant: AlertVariant) -> impl IntoView {
    let (icon, classes) = match variant {
        AlertVariant::Info => ("ℹ", "bg-sky-500/10 border-sky-300/30 text-sky-100"),
        AlertVariant::Error => ("✕", "bg-red-500/10 border-red-300/30 text-red-100"),
    };

    view! {
        <div class=format!("p-4 rounded-xl border text-sm {}", classes) role="alert">
            <p class="flex items-center gap-2">
                <span>{icon}</span>
                <span>{message}</span>
            </p>
        </div>
    }
}

#[component]
pub fn ErrorAlert(#[prop(into)] message: String) -> impl IntoView {
    view! {
        <Alert message=message variant=AlertVariant::Error />
    }
}
