mod common;

#[cfg(test)]
pub mod route_tests {
    use std::cell::RefCell;
    use std::rc::Rc;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicBool, Ordering};

    use leptos::prelude::*;

    use truview::common::RouteError;
    use truview::frontend::components::use_menu_toggle;
    use truview::frontend::registry;
    use truview::frontend::router::use_fragment_route;
    use truview::models::*;

    #[test]
    fn test_normalize_fragment_empty_is_root() {
        assert_eq!(normalize_fragment(""), "/");
        assert_eq!(normalize_fragment("#"), "/");
    }

    #[test]
    fn test_normalize_fragment_keeps_leading_slash() {
        assert_eq!(normalize_fragment("#/contact"), "/contact");
        assert_eq!(normalize_fragment("/about"), "/about");
    }

    #[test]
    fn test_normalize_fragment_adds_missing_slash() {
        assert_eq!(normalize_fragment("#services"), "/services");
        assert_eq!(normalize_fragment("gallery"), "/gallery");
    }

    #[test]
    fn test_normalize_fragment_does_not_validate() {
        assert_eq!(normalize_fragment("#/unknown-page"), "/unknown-page");
        assert_eq!(normalize_fragment("#/about/team"), "/about/team");
    }

    #[test]
    fn test_route_paths_round_trip_through_from_str() {
        for route in Route::ALL {
            assert_eq!(route.as_path().parse::<Route>(), Ok(route));
        }
    }

    #[test]
    fn test_route_from_str_rejects_unknown() {
        assert_eq!(
            "/unknown-page".parse::<Route>(),
            Err(RouteError::Unknown("/unknown-page".into()))
        );
    }

    #[test]
    fn test_route_from_str_is_exact() {
        assert!("/About".parse::<Route>().is_err());
        assert!("/about/".parse::<Route>().is_err());
        assert!("/contact?x=1".parse::<Route>().is_err());
        assert!("about".parse::<Route>().is_err());
    }

    #[test]
    fn test_route_resolve_falls_back_to_home() {
        for path in ["/unknown-page", "", "/services/extra", "/HOME", "/#"] {
            assert_eq!(Route::resolve(path), Route::Home, "path {path:?}");
        }
    }

    #[test]
    fn test_route_from_fragment_scenarios() {
        assert_eq!(Route::from_fragment(""), Route::Home);
        assert_eq!(Route::from_fragment("#/contact"), Route::Contact);
        assert_eq!(Route::from_fragment("#/unknown-page"), Route::Home);
        assert_eq!(Route::from_fragment("#terms"), Route::Terms);
    }

    #[test]
    fn test_route_default_is_home() {
        assert_eq!(Route::default(), Route::Home);
    }

    #[test]
    fn test_route_href_and_display() {
        assert_eq!(Route::Home.href(), "#/");
        assert_eq!(Route::Privacy.href(), "#/privacy");
        assert_eq!(Route::Gallery.to_string(), "/gallery");
        assert!(Route::About == "/about");
    }

    #[test]
    fn test_registry_has_one_entry_per_route() {
        assert_eq!(registry::PAGES.len(), Route::ALL.len());
        for route in Route::ALL {
            assert_eq!(registry::lookup(route).route, route);
        }
    }

    #[test]
    fn test_registry_resolve_unknown_is_home() {
        for path in ["/", "/unknown-page", "", "/admin"] {
            assert_eq!(registry::resolve(path).route, Route::Home);
        }
        assert_eq!(registry::resolve("/contact").route, Route::Contact);
    }

    #[test]
    fn test_registry_titles() {
        let expected = [
            (Route::Home, "TruView Glass — Premium Glass Installations"),
            (Route::About, "About | TruView Glass"),
            (Route::Services, "Services | TruView Glass"),
            (Route::Gallery, "Gallery | TruView Glass"),
            (Route::Contact, "Contact | TruView Glass"),
            (Route::Privacy, "Privacy Policy | TruView Glass"),
            (Route::Terms, "Terms & Conditions | TruView Glass"),
        ];

        for (route, title) in expected {
            assert_eq!(registry::lookup(route).title, title);
        }
    }

    #[test]
    fn test_fragment_route_follows_changes_and_unsubscribes_on_cleanup() {
        let fragment = Rc::new(RefCell::new(String::from("#about")));
        let on_change: Rc<RefCell<Option<Box<dyn Fn()>>>> = Rc::default();
        let unsubscribed = Arc::new(AtomicBool::new(false));

        let owner = Owner::new();
        let path = owner.with(|| {
            let read = {
                let fragment = Rc::clone(&fragment);
                move || fragment.borrow().clone()
            };
            let subscribe = {
                let on_change = Rc::clone(&on_change);
                let unsubscribed = Arc::clone(&unsubscribed);
                move |changed: Box<dyn Fn()>| {
                    *on_change.borrow_mut() = Some(changed);
                    move || unsubscribed.store(true, Ordering::SeqCst)
                }
            };
            use_fragment_route(read, subscribe)
        });
        let fire = || (on_change.borrow().as_ref().unwrap())();

        assert_eq!(path.get_untracked(), "/about");

        *fragment.borrow_mut() = String::from("#/gallery");
        fire();
        assert_eq!(path.get_untracked(), "/gallery");

        *fragment.borrow_mut() = String::new();
        fire();
        assert_eq!(path.get_untracked(), "/");
        assert!(!unsubscribed.load(Ordering::SeqCst));

        owner.cleanup();
        assert!(unsubscribed.load(Ordering::SeqCst));
    }

    #[test]
    fn test_menu_collapses_on_route_change() {
        let owner = Owner::new();
        let (route, open) = owner.with(|| {
            let route = RwSignal::new(Route::Home);
            let open = use_menu_toggle(Memo::new(move |_| route.get()));
            (route, open)
        });

        assert!(!open.get_untracked());

        open.set(true);
        assert!(open.get_untracked());

        route.set(Route::Gallery);
        assert!(!open.get_untracked());

        open.set(true);
        route.set(Route::Contact);
        assert!(!open.get_untracked());

        owner.cleanup();
    }
}
