use leptos::prelude::*;

use crate::config::SiteConfig;
use crate::frontend::registry;
use crate::head::{HeadDocument, HeadManager};
use crate::models::Route;

/// Re-applies head metadata to `document` whenever `route` changes and
/// releases it when the calling component's owner is cleaned up.
pub fn use_head_metadata<D>(route: Memo<Route>, document: D, site: SiteConfig)
where
    D: HeadDocument + 'static,
    D::Node: 'static,
{
    let manager = StoredValue::new_local(HeadManager::new(document, site.clone()));

    // Synchronous, so the head is already updated when the new page renders.
    let sync = ImmediateEffect::new_isomorphic(move || {
        let meta = registry::lookup(route.get()).meta(&site);
        manager.try_update_value(|head| head.activate(meta));
    });

    on_cleanup(move || {
        drop(sync);
        manager.try_update_value(HeadManager::release);
    });
}
