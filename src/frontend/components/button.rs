use leptos::prelude::*;

#[derive(Clone, Copy, Default, PartialEq)]
pub enum ButtonVariant {
    #[default]
    Solid,
    Outline,
}

#[derive(Clone, Copy, Default, PartialEq)]
pub enum ButtonSize {
    Small,
    #[default]
    Regular,
}

/// Renders a link when `href` is set, otherwise a `<button>`.
#[component]
pub fn Button(
    children: Children,
    #[prop(optional)] variant: ButtonVariant,
    #[prop(optional)] size: ButtonSize,
    #[prop(optional, into)] button_type: String,
    #[prop(optional, into)] href: String,
) -> impl IntoView {
    let base_classes = "inline-flex items-center rounded-xl transition-colors";

    let variant_classes = match variant {
        ButtonVariant::Solid => "bg-white/90 hover:bg-white text-slate-900 font-medium shadow",
        ButtonVariant::Outline => "border border-white/30 bg-white/10 hover:bg-white/20 text-white",
    };

    let size_classes = match size {
        ButtonSize::Small => "px-4 py-2",
        ButtonSize::Regular => "px-5 py-3",
    };

    let classes = format!("{} {} {}", base_classes, variant_classes, size_classes);

    let button_type_val = if button_type.is_empty() {
        "submit".to_string()
    } else {
        button_type
    };

    if !href.is_empty() {
        view! {
            <a href=href class=classes>
                {children()}
            </a>
        }
        .into_any()
    } else {
        view! {
            <button type=button_type_val class=classes>
                {children()}
            </button>
        }
        .into_any()
    }
}
