pub const PROGRESS_CLASS: &str = "reading-progress";

pub const PROGRESS_STYLE: &str = "position: fixed; top: 0; left: 0; width: 0%; height: 3px; \
    background: linear-gradient(90deg, #667eea 0%, #764ba2 100%); z-index: 9999; \
    transition: width 0.1s ease;";

/// Percentage of the page scrolled past, in [0, 100].
/// A page that does not scroll reports 0.
pub fn reading_progress(scroll_y: f64, scroll_height: f64, viewport_height: f64) -> f64 {
    let scrollable = scroll_height - viewport_height;
    if scrollable <= 0.0 {
        return 0.0;
    }
    (scroll_y / scrollable * 100.0).clamp(0.0, 100.0)
}

pub fn width_css(progress: f64) -> String {
    format!("{progress}%")
}
