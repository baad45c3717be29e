pub mod components;
pub mod head;
pub mod pages;
pub mod registry;
pub mod router;

use leptos::prelude::*;

use crate::config::SiteConfig;
use crate::head::DomHead;
use crate::models::Route;
use components::PageFrame;
use head::use_head_metadata;
use router::use_hash_route;

/// Root component: site config in context, then the routed view.
#[component]
pub fn App() -> impl IntoView {
    provide_context(SiteConfig::bundled());

    view! { <RouterView/> }
}

/// Resolves the fragment to a page, keeps the head in sync, and frames the page.
#[component]
pub fn RouterView() -> impl IntoView {
    let site = use_site();
    let path = use_hash_route();
    let route = Memo::new(move |_| Route::resolve(&path.get()));

    if let Some(document) = DomHead::from_window() {
        use_head_metadata(route, document, site);
    }

    view! {
        <PageFrame route=route>
            {move || registry::lookup(route.get()).render()}
        </PageFrame>
    }
}

/// Site config from context, or the built-in defaults when rendered standalone.
pub fn use_site() -> SiteConfig {
    use_context::<SiteConfig>().unwrap_or_default()
}
