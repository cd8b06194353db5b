//! Static tool catalog and the search/filter pass over it.
//!
//! DESIGN
//! ======
//! The directory content is compiled in as `&'static` data (`data`), split
//! into categories. Filtering is a single pass in catalog definition order:
//! no ranking, no fuzzy matching, no pagination. Search and category filter
//! are mutually exclusive by construction; the state transitions that pair
//! them live in `state::tools`.

#[cfg(test)]
#[path = "mod_test.rs"]
mod mod_test;

pub mod data;

/// Badge shown next to a tool name. Closed set; `Other` carries the label
/// verbatim for one-off badges.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Badge {
    None,
    New,
    Recommended,
    Other(&'static str),
}

impl Badge {
    /// Display label, or `None` when there is no badge to render.
    pub fn label(self) -> Option<&'static str> {
        match self {
            Badge::None => None,
            Badge::New => Some("New"),
            Badge::Recommended => Some("Recommended"),
            Badge::Other(label) => Some(label),
        }
    }
}

/// A single directory entry. Defined at build time; immutable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Tool {
    pub name: &'static str,
    pub description: &'static str,
    /// Font Awesome icon classes, e.g. `"fas fa-robot"`.
    pub icon: &'static str,
    pub url: Option<&'static str>,
    pub badge: Badge,
    pub coming_soon: bool,
}

impl Tool {
    /// Outbound link for this tool. Tools still marked coming-soon never
    /// expose a live link, regardless of what `url` holds.
    pub fn link(&self) -> Option<&'static str> {
        if self.coming_soon { None } else { self.url }
    }
}

/// An ordered group of tools under one heading.
#[derive(Clone, Copy, Debug)]
pub struct Category {
    /// Stable key used for filter buttons and in-page anchors.
    pub id: &'static str,
    pub name: &'static str,
    pub tools: &'static [Tool],
}

/// One category surviving a filter pass, with the subset of its tools that
/// matched.
#[derive(Clone, Debug)]
pub struct CategoryMatch {
    pub category: &'static Category,
    pub tools: Vec<&'static Tool>,
}

/// Category filter id that passes every category.
pub const FILTER_ALL: &str = "all";

/// Filter the catalog by free-text query and active category filter.
///
/// A tool matches when the query is empty or is a case-insensitive substring
/// of its name or description. A category survives when the filter is
/// [`FILTER_ALL`] or equals its id, and at least one of its tools matched.
/// Output order is catalog definition order.
pub fn filter_catalog(query: &str, filter: &str) -> Vec<CategoryMatch> {
    let needle = query.to_lowercase();

    data::CATALOG
        .iter()
        .filter(|category| filter == FILTER_ALL || category.id == filter)
        .filter_map(|category| {
            let tools: Vec<&'static Tool> = category
                .tools
                .iter()
                .filter(|tool| {
                    needle.is_empty()
                        || tool.name.to_lowercase().contains(&needle)
                        || tool.description.to_lowercase().contains(&needle)
                })
                .collect();

            if tools.is_empty() {
                None
            } else {
                Some(CategoryMatch { category, tools })
            }
        })
        .collect()
}

/// Font Awesome icon for a category heading.
pub fn category_icon(category_id: &str) -> &'static str {
    match category_id {
        "chatbots" => "fa-robot",
        "image-generators" => "fa-image",
        "music-generators" => "fa-music",
        "data-analysis" => "fa-chart-bar",
        "ai-diagrams" => "fa-project-diagram",
        "writing-tools" => "fa-pen",
        "video-generators" => "fa-video",
        "utility-tools" => "fa-tools",
        "marketing-tools" => "fa-bullhorn",
        "voice-tools" => "fa-microphone",
        "presentation-tools" => "fa-chalkboard",
        "website-builders" => "fa-globe",
        "gaming-tools" => "fa-gamepad",
        "short-clippers" => "fa-cut",
        "faceless-video" => "fa-user-secret",
        "other-tools" => "fa-flask",
        _ => "fa-box",
    }
}

/// Tailwind accent color token for a category heading.
pub fn category_color(category_id: &str) -> &'static str {
    match category_id {
        "chatbots" => "purple-600",
        "image-generators" => "pink-600",
        "music-generators" => "green-600",
        "data-analysis" => "teal-600",
        "ai-diagrams" => "indigo-600",
        "writing-tools" => "blue-600",
        "video-generators" => "red-600",
        "utility-tools" => "gray-700",
        "marketing-tools" => "orange-500",
        "voice-tools" => "yellow-500",
        "presentation-tools" => "cyan-600",
        "website-builders" => "emerald-600",
        "gaming-tools" => "fuchsia-600",
        "short-clippers" => "rose-500",
        "faceless-video" => "zinc-600",
        "other-tools" => "amber-600",
        _ => "gray-500",
    }
}
