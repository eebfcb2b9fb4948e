//! Table of contents: scroll targets and the active-link highlight.

pub const TOC_LINKS: &str = ".toc a";
pub const SECTIONS: &str = ".content section";
/// Gap left above a section after scrolling to it, in CSS pixels.
pub const SCROLL_OFFSET: f64 = 20.0;
/// Only sections crossing the band from 20% to 30% of the viewport height count.
pub const ACTIVE_ROOT_MARGIN: &str = "-20% 0px -70% 0px";

/// Inline style of a TOC link.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LinkStyle {
    pub font_weight: &'static str,
    pub color: &'static str,
}

pub const NORMAL_LINK: LinkStyle = LinkStyle {
    font_weight: "normal",
    color: "var(--text-primary)",
};

pub const ACTIVE_LINK: LinkStyle = LinkStyle {
    font_weight: "600",
    color: "var(--link-color)",
};

pub fn scroll_top_for(section_offset_top: f64) -> f64 {
    section_offset_top - SCROLL_OFFSET
}

/// Selector for the TOC link pointing at section `id`.
pub fn link_selector(id: &str) -> String {
    format!(".toc a[href=\"#{id}\"]")
}

/// The section to highlight after one observer callback: entries are applied
/// in order, so the last intersecting one wins. None leaves the highlight alone.
pub fn highlighted_section<'a>(entries: impl IntoIterator<Item = (bool, &'a str)>) -> Option<&'a str> {
    entries
        .into_iter()
        .filter(|(intersecting, _)| *intersecting)
        .last()
        .map(|(_, id)| id)
}
