pub const CODE_BLOCKS: &str = ".code-block";
pub const CODE_SELECTOR: &str = "code";
pub const BUTTON_CLASS: &str = "copy-button";
pub const BUTTON_TITLE: &str = "Copy code";
/// How long the check mark stays up.
pub const CONFIRM_MS: i32 = 2000;
pub const SUCCESS_COLOR: &str = "#28a745";

pub const COPY_GLYPH: &str = r#"<svg width="16" height="16" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2"><rect x="9" y="9" width="13" height="13" rx="2" ry="2"></rect><path d="M5 15H4a2 2 0 0 1-2-2V4a2 2 0 0 1 2-2h9a2 2 0 0 1 2 2v1"></path></svg>"#;
pub const CHECK_GLYPH: &str = r#"<svg width="16" height="16" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2"><polyline points="20 6 9 17 4 12"></polyline></svg>"#;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyButtonState {
    Idle,
    Copied,
}

impl CopyButtonState {
    pub fn glyph(self) -> &'static str {
        match self {
            CopyButtonState::Idle => COPY_GLYPH,
            CopyButtonState::Copied => CHECK_GLYPH,
        }
    }

    /// Inline `color`; empty restores the stylesheet's.
    pub fn color(self) -> &'static str {
        match self {
            CopyButtonState::Idle => "",
            CopyButtonState::Copied => SUCCESS_COLOR,
        }
    }
}

/// What a block puts on the clipboard. A block without a `code` element has
/// nothing to copy, so no confirmation is shown.
pub fn clipboard_text<E>(code: Option<E>, text: impl FnOnce(&E) -> Option<String>) -> Option<String> {
    code.map(|code| text(&code).unwrap_or_default())
}
