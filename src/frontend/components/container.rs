use leptos::prelude::*;

#[component]
pub fn Container(children: Children, #[prop(optional, into)] class: String) -> impl IntoView {
    view! {
        <div class=format!("max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 {}", class)>
            {children()}
        </div>
    }
}
