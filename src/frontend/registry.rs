//! Route → page table. Every page's title and description live here, next
//! to the function that renders it.

use leptos::prelude::*;

use crate::config::SiteConfig;
use crate::frontend::pages::{
    AboutPage, ContactPage, GalleryPage, HomePage, PrivacyPage, ServicesPage, TermsPage,
};
use crate::models::{PageMeta, Route};

pub struct PageEntry {
    pub route: Route,
    pub title: &'static str,
    /// `None` uses the site's default description.
    pub description: Option<&'static str>,
    view: fn() -> AnyView,
}

impl PageEntry {
    pub fn meta(&self, site: &SiteConfig) -> PageMeta {
        let description = self
            .description
            .map_or_else(|| site.site.default_description.clone(), str::to_string);
        PageMeta::new(self.title, description, self.route)
    }

    pub fn render(&self) -> AnyView {
        (self.view)()
    }
}

fn home() -> AnyView {
    view! { <HomePage/> }.into_any()
}

fn about() -> AnyView {
    view! { <AboutPage/> }.into_any()
}

fn services() -> AnyView {
    view! { <ServicesPage/> }.into_any()
}

fn gallery() -> AnyView {
    view! { <GalleryPage/> }.into_any()
}

fn contact() -> AnyView {
    view! { <ContactPage/> }.into_any()
}

fn privacy() -> AnyView {
    view! { <PrivacyPage/> }.into_any()
}

fn terms() -> AnyView {
    view! { <TermsPage/> }.into_any()
}

/// Home first; it doubles as the fallback.
pub static PAGES: [PageEntry; 7] = [
    PageEntry {
        route: Route::Home,
        title: "TruView Glass — Premium Glass Installations",
        description: None,
        view: home,
    },
    PageEntry {
        route: Route::About,
        title: "About | TruView Glass",
        description: Some(
            "Learn about TruView Glass — values, qualifications and safety-first workmanship.",
        ),
        view: about,
    },
    PageEntry {
        route: Route::Services,
        title: "Services | TruView Glass",
        description: Some("Shower screens, mirrors, balustrades, pool fencing, shopfronts & more."),
        view: services,
    },
    PageEntry {
        route: Route::Gallery,
        title: "Gallery | TruView Glass",
        description: Some("Browse recent installations and glasswork projects by TruView Glass."),
        view: gallery,
    },
    PageEntry {
        route: Route::Contact,
        title: "Contact | TruView Glass",
        description: Some("Request a quote or ask a question — TruView Glass."),
        view: contact,
    },
    PageEntry {
        route: Route::Privacy,
        title: "Privacy Policy | TruView Glass",
        description: Some("How TruView Glass handles your data and privacy."),
        view: privacy,
    },
    PageEntry {
        route: Route::Terms,
        title: "Terms & Conditions | TruView Glass",
        description: Some("Terms of using the TruView Glass website and services."),
        view: terms,
    },
];

pub fn lookup(route: Route) -> &'static PageEntry {
    PAGES
        .iter()
        .find(|page| page.route == route)
        .unwrap_or(&PAGES[0])
}

/// Exact match on a normalized path; anything unknown gets Home.
pub fn resolve(path: &str) -> &'static PageEntry {
    lookup(Route::resolve(path))
}
