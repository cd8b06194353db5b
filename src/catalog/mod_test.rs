use super::*;

fn category_ids(matches: &[CategoryMatch]) -> Vec<&'static str> {
    matches.iter().map(|m| m.category.id).collect()
}

// =============================================================
// Catalog data contract
// =============================================================

#[test]
fn category_ids_are_unique() {
    let mut ids: Vec<_> = data::CATALOG.iter().map(|c| c.id).collect();
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), data::CATALOG.len());
}

#[test]
fn catalog_has_sixteen_categories() {
    assert_eq!(data::CATALOG.len(), 16);
}

#[test]
fn live_tools_have_urls_and_coming_soon_tools_do_not() {
    for category in data::CATALOG {
        for tool in category.tools {
            if tool.coming_soon {
                assert!(tool.url.is_none(), "{} is coming soon but has a url", tool.name);
            } else {
                assert!(tool.url.is_some(), "{} has no url", tool.name);
            }
        }
    }
}

#[test]
fn coming_soon_tools_never_expose_a_link() {
    for category in data::CATALOG {
        for tool in category.tools {
            if tool.coming_soon {
                assert_eq!(tool.link(), None);
            } else {
                assert_eq!(tool.link(), tool.url);
            }
        }
    }
}

#[test]
fn filter_buttons_are_all_plus_every_category() {
    assert_eq!(data::FILTER_BUTTONS[0].id, FILTER_ALL);
    assert_eq!(data::FILTER_BUTTONS.len(), data::CATALOG.len() + 1);
    for button in &data::FILTER_BUTTONS[1..] {
        assert!(
            data::CATALOG.iter().any(|c| c.id == button.id),
            "filter button {} has no category",
            button.id
        );
    }
}

#[test]
fn menu_and_nav_links_point_at_real_categories() {
    for link in data::MENU_LINKS.iter().chain(data::NAV_LINKS) {
        assert!(
            data::CATALOG.iter().any(|c| c.id == link.id),
            "link {} has no category",
            link.id
        );
    }
    assert_eq!(data::MENU_LINKS.len(), data::CATALOG.len());
}

// =============================================================
// filter_catalog: query matching
// =============================================================

#[test]
fn empty_query_and_all_filter_return_whole_catalog() {
    let matches = filter_catalog("", FILTER_ALL);
    assert_eq!(matches.len(), data::CATALOG.len());
    for (m, category) in matches.iter().zip(data::CATALOG) {
        assert_eq!(m.category.id, category.id);
        assert_eq!(m.tools.len(), category.tools.len());
    }
}

#[test]
fn query_matches_name_case_insensitively() {
    let matches = filter_catalog("chatgpt", FILTER_ALL);
    let chatbots = matches
        .iter()
        .find(|m| m.category.id == "chatbots")
        .expect("chatbots category");
    assert!(chatbots.tools.iter().any(|t| t.name == "ChatGPT"));
}

#[test]
fn query_matches_description() {
    // "conversational" only appears in ChatGPT's description.
    let matches = filter_catalog("CONVERSATIONAL", FILTER_ALL);
    assert_eq!(category_ids(&matches), vec!["chatbots"]);
    assert_eq!(matches[0].tools.len(), 1);
    assert_eq!(matches[0].tools[0].name, "ChatGPT");
}

#[test]
fn query_with_no_matches_returns_nothing() {
    assert!(filter_catalog("xyzzy-no-such-tool", FILTER_ALL).is_empty());
}

#[test]
fn results_preserve_catalog_order() {
    let matches = filter_catalog("ai", FILTER_ALL);
    let order: Vec<usize> = matches
        .iter()
        .map(|m| {
            data::CATALOG
                .iter()
                .position(|c| c.id == m.category.id)
                .unwrap()
        })
        .collect();
    assert!(order.windows(2).all(|w| w[0] < w[1]));
}

// =============================================================
// filter_catalog: category filter
// =============================================================

#[test]
fn category_filter_drops_sibling_categories() {
    let matches = filter_catalog("", "chatbots");
    assert_eq!(category_ids(&matches), vec!["chatbots"]);
}

#[test]
fn unknown_filter_returns_nothing() {
    assert!(filter_catalog("", "no-such-category").is_empty());
}

#[test]
fn chat_query_with_all_filter_finds_chatbots() {
    let matches = filter_catalog("chat", FILTER_ALL);
    let chatbots = matches
        .iter()
        .find(|m| m.category.id == "chatbots")
        .expect("chatbots category");
    assert!(chatbots.tools.iter().any(|t| t.name == "ChatGPT"));
}

#[test]
fn chat_query_scoped_to_image_generators_is_empty() {
    assert!(filter_catalog("chat", "image-generators").is_empty());
}

// =============================================================
// Badge
// =============================================================

#[test]
fn badge_labels() {
    assert_eq!(Badge::None.label(), None);
    assert_eq!(Badge::New.label(), Some("New"));
    assert_eq!(Badge::Recommended.label(), Some("Recommended"));
    assert_eq!(Badge::Other("Beta").label(), Some("Beta"));
}

// =============================================================
// category_icon / category_color
// =============================================================

#[test]
fn every_category_has_icon_and_color() {
    for category in data::CATALOG {
        assert_ne!(category_icon(category.id), "fa-box", "{}", category.id);
        assert_ne!(category_color(category.id), "gray-500", "{}", category.id);
    }
}

#[test]
fn unknown_category_gets_defaults() {
    assert_eq!(category_icon("mystery"), "fa-box");
    assert_eq!(category_color("mystery"), "gray-500");
}
