mod common;

#[cfg(test)]
pub mod config_tests {
    use truview::common::ConfigError;
    use truview::config::SiteConfig;
    use truview::models::*;

    use super::common::*;

    #[test]
    fn test_bundled_config_matches_defaults() {
        assert_eq!(SiteConfig::bundled(), SiteConfig::default());
    }

    #[test]
    fn test_config_partial_file_uses_defaults() {
        let config = SiteConfig::from_toml_str(
            r#"
            [site]
            origin = "https://example.test/"
            "#,
        )
        .unwrap();

        assert_eq!(config.site.origin, "https://example.test");
        assert_eq!(config.site.name, "TruView Glass");
        assert_eq!(config.social.len(), 3);
        assert_eq!(config.imagery.gallery.len(), 6);
    }

    #[test]
    fn test_config_social_links_override_placeholders() {
        let config = SiteConfig::from_toml_str(
            r#"
            [[social]]
            label = "Instagram"
            url = "https://www.instagram.com/truviewglass"
            "#,
        )
        .unwrap();

        let graph = site_graph(&config);
        assert_eq!(
            graph["@graph"][1]["sameAs"],
            serde_json::json!(["https://www.instagram.com/truviewglass"])
        );
    }

    #[test]
    fn test_config_rejects_malformed_toml() {
        let result = SiteConfig::from_toml_str("[site\norigin = ");
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_config_rejects_empty_origin() {
        let result = SiteConfig::from_toml_str("[site]\norigin = \"/\"\n");
        assert!(matches!(result, Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_url_for_joins_origin_and_path() {
        let config = site();
        assert_eq!(config.url_for("/"), "https://truview.glass/");
        assert_eq!(config.url_for("/terms"), "https://truview.glass/terms");
    }

    #[test]
    fn test_page_meta_home_uses_default_description() {
        let meta = meta_for(Route::Home);

        assert_eq!(meta.path, Route::Home);
        assert_eq!(meta.description, site().site.default_description);
        assert_eq!(meta.canonical_url(&site()), "https://truview.glass/");
    }

    #[test]
    fn test_page_meta_tag_values_follow_head_tags() {
        let meta = PageMeta::new("T", "D", Route::Services);
        let values = meta.tag_values(&site());

        assert_eq!(values.len(), HEAD_TAGS.len());
        let by_value: Vec<(&str, &str)> = values
            .iter()
            .map(|(tag, content)| (tag.value, content.as_str()))
            .collect();
        assert_eq!(
            by_value,
            vec![
                ("description", "D"),
                ("og:title", "T"),
                ("og:description", "D"),
                ("og:type", "website"),
                ("og:url", "https://truview.glass/services"),
                ("twitter:card", "summary_large_image"),
                ("twitter:title", "T"),
                ("twitter:description", "D"),
            ]
        );
    }
}
