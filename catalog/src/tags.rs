//! Badge styling for free-form asset tags.

use serde::Serialize;

#[cfg(test)]
#[path = "tags_test.rs"]
mod tags_test;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct TagStyle {
    pub background: &'static str,
    pub foreground: &'static str,
}

impl TagStyle {
    /// Inline CSS for a badge element.
    #[must_use]
    pub fn css(self) -> String {
        format!("background:{};color:{};", self.background, self.foreground)
    }
}

/// Style for tags without an entry in the lookup table.
pub const DEFAULT_TAG_STYLE: TagStyle = TagStyle {
    background: "#eceff3",
    foreground: "#4a5160",
};

/// Tags with a dedicated style.
pub const KNOWN_TAGS: [&str; 8] = [
    "pii",
    "certified",
    "deprecated",
    "finance",
    "marketing",
    "sales",
    "draft",
    "sensitive",
];

/// Look up the badge style for `tag`, ignoring ASCII case.
#[must_use]
pub fn tag_style(tag: &str) -> TagStyle {
    match tag.trim().to_ascii_lowercase().as_str() {
        "pii" => TagStyle {
            background: "#fde2e1",
            foreground: "#b42318",
        },
        "certified" => TagStyle {
            background: "#dcfae6",
            foreground: "#067647",
        },
        "deprecated" => TagStyle {
            background: "#f2f4f7",
            foreground: "#667085",
        },
        "finance" => TagStyle {
            background: "#e0eaff",
            foreground: "#3538cd",
        },
        "marketing" => TagStyle {
            background: "#fce7f6",
            foreground: "#c11574",
        },
        "sales" => TagStyle {
            background: "#fef0c7",
            foreground: "#b54708",
        },
        "draft" => TagStyle {
            background: "#f4f3ff",
            foreground: "#5925dc",
        },
        "sensitive" => TagStyle {
            background: "#fee4e2",
            foreground: "#d92d20",
        },
        _ => DEFAULT_TAG_STYLE,
    }
}
