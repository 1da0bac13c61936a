//! Page-load cosmetics.
//!
//! Small touches run once the page is built: highlight the navigation link
//! for the current path, make in-page anchors scroll smoothly, and log a
//! startup banner.
//!
//! # Example
//!
//! ```ignore
//! use spark_forms::page;
//!
//! let cleanup = page::on_page_ready("/users");
//! ```

use crate::config::get_config;
use crate::engine::arrays::{attrs, core};
use crate::engine::{get_index, query};
use crate::primitives::Cleanup;
use crate::state::{events, scroll};
use crate::types::{ElementKind, ScrollBehavior, ScrollBlock};

// =============================================================================
// Active Link
// =============================================================================

/// Style the navigation links pointing at `current_path`.
///
/// Only links inside an element carrying the configured nav class count.
/// Returns the indices that were styled.
pub fn highlight_active_link(current_path: &str) -> Vec<usize> {
    let config = get_config();

    let matched: Vec<usize> = nav_links(&config.nav_links_class)
        .into_iter()
        .filter(|&index| {
            let href = attrs::get_attribute(index, "href").unwrap_or_default();
            href_path(&href, current_path) == current_path
        })
        .collect();

    for &index in &matched {
        attrs::set_style(index, "color", config.active_link_color.as_str());
        attrs::set_style(index, "background-color", config.active_link_background.as_str());
    }

    tracing::debug!(current_path, matched = matched.len(), "active link highlighted");
    matched
}

/// Links with an ancestor carrying `nav_class`.
fn nav_links(nav_class: &str) -> Vec<usize> {
    query(|i| core::get_element_kind(i) == ElementKind::Link && has_ancestor_class(i, nav_class))
}

fn has_ancestor_class(index: usize, class: &str) -> bool {
    let mut current = core::get_parent_index(index);
    while let Some(parent) = current {
        if attrs::has_class(parent, class) {
            return true;
        }
        current = core::get_parent_index(parent);
    }
    false
}

/// Path part of `href`, resolved against `base_path`.
///
/// Scheme, host, query and fragment are dropped. A relative reference
/// resolves against the directory of `base_path`; an empty one (e.g. a bare
/// `#fragment`) is `base_path` itself.
pub fn href_path(href: &str, base_path: &str) -> String {
    let end = href.find(['?', '#']).unwrap_or(href.len());
    let reference = &href[..end];

    let after_authority = match reference.find("://") {
        Some(pos) => Some(&reference[pos + 3..]),
        None => reference.strip_prefix("//"),
    };
    if let Some(rest) = after_authority {
        return match rest.find('/') {
            Some(slash) => normalize(&rest[slash..]),
            None => "/".to_string(),
        };
    }

    if reference.is_empty() {
        return base_path.to_string();
    }
    if reference.starts_with('/') {
        return normalize(reference);
    }

    let dir = base_path.rfind('/').map_or("/", |slash| &base_path[..=slash]);
    normalize(&format!("{dir}{reference}"))
}

/// Collapse `.` and `..` segments of an absolute path.
fn normalize(path: &str) -> String {
    let mut segments: Vec<&str> = Vec::new();
    let trailing = path.ends_with('/') || path.ends_with("/.") || path.ends_with("/..");
    for segment in path.split('/') {
        match segment {
            "" | "." => {}
            ".." => {
                segments.pop();
            }
            other => segments.push(other),
        }
    }

    let mut out = format!("/{}", segments.join("/"));
    if trailing && !segments.is_empty() {
        out.push('/');
    }
    out
}

// =============================================================================
// Smooth Scroll
// =============================================================================

/// Make every `#fragment` link scroll its target into view.
///
/// The link's default navigation is always prevented; the scroll happens
/// only when an element with the fragment's id exists at click time.
pub fn enable_smooth_scroll() -> Cleanup {
    let anchors = query(|i| {
        core::get_element_kind(i) == ElementKind::Link
            && attrs::get_attribute(i, "href").is_some_and(|href| href.starts_with('#'))
    });

    let cleanups: Vec<Cleanup> = anchors
        .into_iter()
        .map(|index| {
            let off = events::on_click(index, move |event| {
                event.prevent_default();
                let href = attrs::get_attribute(index, "href").unwrap_or_default();
                let target_id = href.trim_start_matches('#');
                if target_id.is_empty() {
                    return;
                }
                if let Some(target) = get_index(target_id) {
                    scroll::scroll_into_view(target, ScrollBehavior::Smooth, ScrollBlock::Start);
                }
            });
            Box::new(off) as Cleanup
        })
        .collect();

    Box::new(move || {
        for cleanup in cleanups {
            cleanup();
        }
    })
}

// =============================================================================
// Startup
// =============================================================================

/// Log the startup banner.
pub fn log_app_info() {
    tracing::info!(
        name = env!("CARGO_PKG_NAME"),
        version = env!("CARGO_PKG_VERSION"),
        "application loaded"
    );
    tracing::info!("field masks: phone, cpf, cep");
    tracing::info!("helpers: password toggle, validation, confirm, autosave");
}

/// Run every page-load touch for a page served at `current_path`.
///
/// Returns the smooth-scroll cleanup.
pub fn on_page_ready(current_path: &str) -> Cleanup {
    highlight_active_link(current_path);
    let scroll_cleanup = enable_smooth_scroll();
    log_app_info();
    scroll_cleanup
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::reset_config;
    use crate::engine::reset_registry;
    use crate::primitives::{container, link, ContainerProps, LinkProps};
    use pretty_assertions::assert_eq;

    fn setup() {
        reset_registry();
        reset_config();
        scroll::take_scroll_request();
    }

    fn nav(links: &'static [(&'static str, &'static str)]) {
        let _ = container(ContainerProps {
            classes: vec!["nav-links".into()],
            children: Some(Box::new(move || {
                for (id, href) in links {
                    let _ = link(LinkProps { id: Some((*id).into()), href: (*href).into(), ..Default::default() });
                }
            })),
            ..Default::default()
        });
    }

    #[test]
    fn test_href_path() {
        assert_eq!(href_path("https://example.com/users?page=2#top", "/"), "/users");
        assert_eq!(href_path("http://example.com", "/x"), "/");
        assert_eq!(href_path("//cdn.example.com/a/b", "/"), "/a/b");
        assert_eq!(href_path("/users/", "/"), "/users/");
        assert_eq!(href_path("#top", "/profile"), "/profile");
        assert_eq!(href_path("edit", "/users/1"), "/users/edit");
        assert_eq!(href_path("../dashboard", "/users/1"), "/dashboard");
    }

    #[test]
    fn test_highlight_matching_nav_link() {
        setup();
        nav(&[("home", "/"), ("users", "http://localhost:8080/users"), ("profile", "/profile")]);
        let _ = link(LinkProps { id: Some("footer-users".into()), href: "/users".into(), ..Default::default() });

        let matched = highlight_active_link("/users");
        let users = get_index("users").unwrap();
        assert_eq!(matched, vec![users]);
        assert_eq!(attrs::get_style(users, "color").as_deref(), Some("var(--primary-color)"));
        assert_eq!(attrs::get_style(users, "background-color").as_deref(), Some("var(--background)"));

        // Outside the nav, untouched
        assert_eq!(attrs::get_style(get_index("footer-users").unwrap(), "color"), None);
        assert_eq!(attrs::get_style(get_index("home").unwrap(), "color"), None);
    }

    #[test]
    fn test_smooth_scroll_to_existing_target() {
        setup();
        let _ = link(LinkProps { id: Some("to-features".into()), href: "#features".into(), ..Default::default() });
        let _ = link(LinkProps { id: Some("to-nowhere".into()), href: "#nowhere".into(), ..Default::default() });
        let _ = container(ContainerProps { id: Some("features".into()), ..Default::default() });
        let _off = enable_smooth_scroll();

        assert!(!events::click(get_index("to-nowhere").unwrap()));
        assert_eq!(scroll::pending_scroll_request(), None);

        assert!(!events::click(get_index("to-features").unwrap()));
        let request = scroll::take_scroll_request().unwrap();
        assert_eq!(request.index, get_index("features").unwrap());
        assert_eq!(request.behavior, ScrollBehavior::Smooth);
        assert_eq!(request.block, ScrollBlock::Start);
    }

    #[test]
    fn test_regular_links_are_not_hooked() {
        setup();
        let _ = link(LinkProps { id: Some("out".into()), href: "/logout".into(), ..Default::default() });
        let _off = enable_smooth_scroll();
        assert!(events::click(get_index("out").unwrap()));
    }

    #[test]
    fn test_on_page_ready() {
        setup();
        nav(&[("home", "/")]);
        let off = on_page_ready("/");
        assert!(attrs::get_style(get_index("home").unwrap(), "color").is_some());
        off();
    }
}
