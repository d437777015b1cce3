#[cfg(test)]
mod rendering_tests {
    use crate::{
        BracketMenu, Menu, MenuConfig, MenuItem, NormalizedItem, RouteContext, RouteUrl,
    };

    fn create_blog_menu() -> Vec<MenuItem> {
        vec![
            MenuItem::new("Dashboard").with_route(RouteUrl::new("site/index")),
            MenuItem::new("Posts").with_items(vec![
                MenuItem::new("All posts").with_route(RouteUrl::new("post/index")),
                MenuItem::new("View").with_route(RouteUrl::new("post/view").with_param("id", 5)),
            ]),
        ]
    }

    fn create_renderer() -> BracketMenu {
        BracketMenu::default()
    }

    #[test]
    fn test_render_empty_items() {
        let renderer = create_renderer();
        let context = RouteContext::new("site/index");

        assert_eq!(renderer.render(&[], &context), "");
        assert_eq!(renderer.render_menu(&[], &context), "");

        let hidden = vec![MenuItem::new("Gone").with_visible(false)];
        assert_eq!(renderer.render_menu(&hidden, &context), "");
    }

    #[test]
    fn test_render_single_leaf() {
        let renderer = create_renderer();
        let items = vec![MenuItem::new("Home").with_url("/")];
        let output = renderer.render_menu(&items, &RouteContext::default());

        assert_eq!(
            output,
            concat!(
                r#"<ul class="br-sideleft-menu">"#,
                r#"<li class=""><a href="/" class="br-menu-link">"#,
                r#"<span class="menu-item-label">Home</span></a></li>"#,
                "</ul>"
            )
        );
    }

    #[test]
    fn test_render_nested_active_path() {
        let renderer = create_renderer();
        let context = RouteContext::new("post/view").with_param("id", "5");
        let output = renderer.render(&create_blog_menu(), &context);

        let expected = concat!(
            r#"<li class=""><a href="/site/index" class="br-menu-link">"#,
            r#"<span class="menu-item-label">Dashboard</span></a></li>"#,
            "\n",
            r##"<li class="br-menu-item active"><a href="#" class="tree-toggle"> Posts</a>"##,
            "\n<ul class=\"br-menu-sub\" style='display: block'>\n",
            r#"<li class=""><a href="/post/index" class="br-menu-link">"#,
            r#"<span class="menu-item-label">All posts</span></a></li>"#,
            "\n",
            r#"<li class="br-menu-item active"><a href="/post/view?id=5" class="br-menu-link">"#,
            r#"<span class="menu-item-label">View</span></a></li>"#,
            "\n</ul>\n</li>"
        );
        assert_eq!(output, expected);
    }

    #[test]
    fn test_inactive_submenu_is_collapsed() {
        let renderer = create_renderer();
        let context = RouteContext::new("post/view").with_param("id", "6");
        let output = renderer.render(&create_blog_menu(), &context);

        assert!(output.contains("<ul class=\"br-menu-sub\" style='display: none'>"));
        assert!(!output.contains("active"));
    }

    #[test]
    fn test_hidden_items_never_rendered() {
        let renderer = create_renderer();
        let items = vec![
            MenuItem::new("Visible").with_items(vec![
                MenuItem::new("Secret child").with_visible(false),
                MenuItem::new("Shown child").with_url("/shown").with_items(vec![
                    MenuItem::new("Secret grandchild").with_visible(false),
                ]),
            ]),
            MenuItem::new("Secret sibling").with_visible(false),
        ];
        let output = renderer.render_menu(&items, &RouteContext::default());

        assert!(!output.contains("Secret"));
        assert!(output.contains("Shown child"));
        // the grandchild list vanished, so no second submenu
        assert_eq!(output.matches("br-menu-sub").count(), 1);
    }

    #[test]
    fn test_first_and_last_classes() {
        let config = MenuConfig::default()
            .with_first_item_css_class("first")
            .with_last_item_css_class("last");
        let renderer = BracketMenu::new(config);
        let items = vec![
            MenuItem::new("A").with_url("/a"),
            MenuItem::new("B").with_url("/b"),
            MenuItem::new("C").with_url("/c"),
        ];
        let output = renderer.render(&items, &RouteContext::default());
        let lines: Vec<&str> = output.lines().collect();

        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with(r#"<li class="br-menu-item first">"#));
        assert!(lines[1].starts_with(r#"<li class="">"#));
        assert!(lines[2].starts_with(r#"<li class="br-menu-item last">"#));

        let single = renderer.render(&items[..1], &RouteContext::default());
        assert!(single.starts_with(r#"<li class="br-menu-item first last">"#));
    }

    #[test]
    fn test_item_options_override_defaults() {
        let renderer = create_renderer();
        let items = vec![MenuItem::new("Custom")
            .with_url("/custom")
            .with_option("tag", "div")
            .with_option("class", "custom")
            .with_option("id", "custom-item")
            .with_active(true)];
        let output = renderer.render(&items, &RouteContext::default());

        assert!(output.starts_with(r#"<div class="custom active" id="custom-item">"#));
        assert!(output.ends_with("</div>"));
        assert!(!output.contains("br-menu-item"));
    }

    #[test]
    fn test_default_item_class_cleared_when_nothing_applies() {
        let renderer = create_renderer();
        let items = vec![
            MenuItem::new("Plain").with_url("/plain"),
            MenuItem::new("Custom").with_url("/custom").with_option("class", "custom"),
            MenuItem::new("Current").with_url("/current").with_active(true),
        ];
        let output = renderer.render(&items, &RouteContext::default());
        let lines: Vec<&str> = output.lines().collect();

        assert!(lines[0].starts_with(r#"<li class=""><a href="/plain""#));
        assert!(lines[1].starts_with(r#"<li class=""><a href="/custom""#));
        assert!(lines[2].starts_with(r#"<li class="br-menu-item active">"#));
    }

    #[test]
    fn test_parent_link_with_icon() {
        let renderer = create_renderer();
        let items = vec![MenuItem::new("Users")
            .with_url("/users")
            .with_icon("ion-person")
            .with_items(vec![MenuItem::new("Add").with_url("/users/add")])];
        let output = renderer.render(&items, &RouteContext::default());

        assert!(output.starts_with(concat!(
            r#"<li class=""><a href="/users" class="tree-toggle">"#,
            r#"<i class="menu-item-icon icon tx-24">ion-person</i>  Users</a>"#
        )));
    }

    #[test]
    fn test_leaf_badge_and_missing_url() {
        let renderer = create_renderer();
        let items = vec![MenuItem::new("Inbox").with_badge(r#"<span class="badge">3</span>"#)];
        let output = renderer.render(&items, &RouteContext::default());

        assert_eq!(
            output,
            concat!(
                r##"<li class=""><a href="#" class="br-menu-link">"##,
                r#"<span class="menu-item-label">Inbox</span><span class="badge">3</span></a></li>"#
            )
        );
    }

    #[test]
    fn test_item_template_override() {
        let renderer = create_renderer();
        let items = vec![MenuItem::new("Docs")
            .with_url("https://docs.example.com")
            .with_template(r#"<a href="{url}" target="_blank">{label}</a>"#)];
        let output = renderer.render(&items, &RouteContext::default());

        assert_eq!(
            output,
            r#"<li class=""><a href="https://docs.example.com" target="_blank">Docs</a></li>"#
        );
    }

    #[test]
    fn test_label_encoding_in_output() {
        let renderer = create_renderer();
        let items = vec![
            MenuItem::new("<b>X</b>").with_url("/a"),
            MenuItem::new("<b>X</b>").with_url("/b").with_encode(false),
        ];
        let output = renderer.render(&items, &RouteContext::default());
        let lines: Vec<&str> = output.lines().collect();

        assert!(lines[0].contains("&lt;b&gt;X&lt;/b&gt;"));
        assert!(lines[1].contains(r#"<span class="menu-item-label"><b>X</b></span>"#));
    }

    #[test]
    fn test_empty_parent_kept_when_not_hiding() {
        let renderer = BracketMenu::new(MenuConfig::default().with_hide_empty_items(false));
        let items = vec![MenuItem::new("Empty").with_items(vec![])];
        let output = renderer.render(&items, &RouteContext::default());

        assert_eq!(
            output,
            r##"<li class=""><a href="#" class=""> Empty</a></li>"##
        );
    }

    #[test]
    fn test_every_ancestor_activated() {
        let renderer = create_renderer();
        let items = vec![MenuItem::new("Admin").with_items(vec![MenuItem::new("Users")
            .with_items(vec![
                MenuItem::new("Edit").with_route(RouteUrl::new("admin/user/update")),
            ])])];
        let context = RouteContext::new("admin/user/update").with_param("id", "3");
        let (normalized, any_active) = renderer.normalize_items(&items, &context);

        fn all_active(items: &[NormalizedItem]) -> bool {
            items
                .iter()
                .all(|item| item.active && item.items.as_deref().map_or(true, all_active))
        }
        assert!(any_active);
        assert!(all_active(&normalized));
    }

    struct HighlightEverything {
        inner: BracketMenu,
    }

    impl Menu for HighlightEverything {
        fn config(&self) -> &MenuConfig {
            self.inner.config()
        }

        fn is_item_active(&self, _item: &MenuItem, _context: &RouteContext) -> bool {
            true
        }

        fn render_item(&self, item: &NormalizedItem, context: &RouteContext) -> String {
            self.inner.render_item(item, context)
        }

        fn render_items(&self, items: &[NormalizedItem], context: &RouteContext) -> String {
            self.inner.render_items(items, context)
        }
    }

    #[test]
    fn test_custom_active_check_drives_rendering() {
        let menu = HighlightEverything {
            inner: create_renderer(),
        };
        let items = vec![MenuItem::new("A").with_url("/a"), MenuItem::new("B").with_url("/b")];
        let output = menu.render(&items, &RouteContext::new("anything"));

        assert_eq!(output.matches("br-menu-item active").count(), 2);
    }
}
