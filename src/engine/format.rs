/// Formatting applied to newly revealed text.
///
/// Toggles need not be balanced: ending something that never started is a
/// no-op, and anything left open stays open until the play ends.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormatState {
    pub bold: bool,
    pub italic: bool,
    /// Active color value, as written in the tag.
    pub color: Option<String>,
}

impl FormatState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_plain(&self) -> bool {
        !self.bold && !self.italic && self.color.is_none()
    }

    /// Opening tags, outermost first: color, bold, italic.
    pub fn open_markup(&self) -> String {
        let mut markup = String::new();
        if let Some(color) = &self.color {
            markup.push_str("<color=");
            markup.push_str(color);
            markup.push('>');
        }
        if self.bold {
            markup.push_str("<b>");
        }
        if self.italic {
            markup.push_str("<i>");
        }
        markup
    }

    /// Closing tags in reverse order of [`open_markup`](Self::open_markup).
    pub fn close_markup(&self) -> String {
        let mut markup = String::new();
        if self.italic {
            markup.push_str("</i>");
        }
        if self.bold {
            markup.push_str("</b>");
        }
        if self.color.is_some() {
            markup.push_str("</color>");
        }
        markup
    }
}
