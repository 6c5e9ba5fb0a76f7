//! Turns the writer's rendered rich text back into styled terminal lines.
//!
//! The writer emits `<b>`, `<i>` and `<color=…>` markup; a color whose alpha
//! is zero marks text that is laid out but not yet revealed, so it is drawn
//! as blank cells of the same display width.

use crate::markup::tags::lookup;
use crate::markup::{Token, TokenKind};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use unicode_width::UnicodeWidthStr;

/// Foreground of a text run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Ink {
    Visible(Color),
    Hidden,
}

/// Parses a color parameter: a named color or `#RRGGBB` / `#RRGGBBAA`.
pub fn parse_color(value: &str) -> Option<Ink> {
    let value = value.trim();
    if let Some(hex) = value.strip_prefix('#') {
        return parse_hex(hex);
    }
    let color = match value.to_ascii_lowercase().as_str() {
        "black" => Color::Black,
        "red" => Color::Red,
        "green" => Color::Green,
        "blue" => Color::Blue,
        "yellow" => Color::Yellow,
        "cyan" | "aqua" => Color::Cyan,
        "magenta" | "fuchsia" => Color::Magenta,
        "white" => Color::White,
        "grey" | "gray" => Color::Gray,
        "orange" => Color::Rgb(255, 165, 0),
        "purple" => Color::Rgb(128, 0, 128),
        "brown" => Color::Rgb(165, 42, 42),
        "navy" => Color::Rgb(0, 0, 128),
        "teal" => Color::Rgb(0, 128, 128),
        "maroon" => Color::Rgb(128, 0, 0),
        "olive" => Color::Rgb(128, 128, 0),
        "lime" => Color::LightGreen,
        "silver" => Color::Rgb(192, 192, 192),
        _ => return None,
    };
    Some(Ink::Visible(color))
}

fn parse_hex(hex: &str) -> Option<Ink> {
    if !matches!(hex.len(), 6 | 8) || !hex.is_ascii() {
        return None;
    }
    let byte = |at: usize| u8::from_str_radix(&hex[at..at + 2], 16).ok();
    let (r, g, b) = (byte(0)?, byte(2)?, byte(4)?);
    let alpha = if hex.len() == 8 { byte(6)? } else { 255 };
    if alpha == 0 {
        Some(Ink::Hidden)
    } else {
        Some(Ink::Visible(Color::Rgb(r, g, b)))
    }
}

/// Styling the renderer applies on top of parsed markup.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    pub base: Style,
    /// Whole text hidden, e.g. after the host set alpha to zero.
    pub hidden: bool,
}

impl Palette {
    pub fn new(base: Style) -> Self {
        Self {
            base,
            hidden: false,
        }
    }
}

#[derive(Debug, Default)]
struct StyleStack {
    bold: usize,
    italic: usize,
    inks: Vec<Option<Ink>>,
}

impl StyleStack {
    fn apply(&mut self, token: &Token) {
        match token.kind {
            TokenKind::BoldStart => self.bold += 1,
            TokenKind::BoldEnd => self.bold = self.bold.saturating_sub(1),
            TokenKind::ItalicStart => self.italic += 1,
            TokenKind::ItalicEnd => self.italic = self.italic.saturating_sub(1),
            TokenKind::ColorStart => self.inks.push(parse_color(&token.parameter)),
            TokenKind::ColorEnd => {
                self.inks.pop();
            }
            _ => {}
        }
    }

    fn ink(&self) -> Option<Ink> {
        self.inks.iter().rev().find_map(|ink| *ink)
    }

    fn style(&self, base: Style) -> Style {
        let mut style = base;
        if self.bold > 0 {
            style = style.add_modifier(Modifier::BOLD);
        }
        if self.italic > 0 {
            style = style.add_modifier(Modifier::ITALIC);
        }
        if let Some(Ink::Visible(color)) = self.ink() {
            style = style.fg(color);
        }
        style
    }
}

fn push_text(lines: &mut Vec<Line<'static>>, text: &str, style: Style, hidden: bool) {
    for (i, segment) in text.split('\n').enumerate() {
        if i > 0 {
            lines.push(Line::default());
        }
        if segment.is_empty() {
            continue;
        }
        let content = if hidden {
            " ".repeat(segment.width())
        } else {
            segment.to_string()
        };
        if let Some(line) = lines.last_mut() {
            line.push_span(Span::styled(content, style));
        }
    }
}

/// Splits rendered text into text runs and tags.
///
/// Script text may hold a literal `<`, as in `I <3 you`. A `<` that does not
/// open a recognized tag is taken as a single character and scanning resumes
/// right after it, so a tag the writer appended later still starts a tag.
fn scan(text: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut words = String::new();
    let mut rest = text;
    while let Some(open) = rest.find('<') {
        words.push_str(&rest[..open]);
        let body_start = &rest[open + 1..];
        let tag = body_start
            .find('>')
            .and_then(|close| lookup(&body_start[..close]).map(|tag| (tag, close)));
        match tag {
            Some(((kind, parameter), close)) => {
                if !words.is_empty() {
                    tokens.push(Token::words(std::mem::take(&mut words)));
                }
                tokens.push(Token::new(kind, parameter));
                rest = &body_start[close + 1..];
            }
            None => {
                words.push('<');
                rest = body_start;
            }
        }
    }
    words.push_str(rest);
    if !words.is_empty() {
        tokens.push(Token::words(words));
    }
    tokens
}

/// Styled lines for `text`. When `rich` is false the text is shown verbatim.
pub fn to_lines(text: &str, rich: bool, palette: Palette) -> Vec<Line<'static>> {
    let mut lines = vec![Line::default()];
    if !rich {
        push_text(&mut lines, text, palette.base, palette.hidden);
        return lines;
    }

    let mut stack = StyleStack::default();
    for token in scan(text) {
        match token.kind {
            TokenKind::Words => {
                let hidden = palette.hidden || stack.ink() == Some(Ink::Hidden);
                push_text(&mut lines, &token.parameter, stack.style(palette.base), hidden);
            }
            _ => stack.apply(&token),
        }
    }
    lines
}

/// Concatenated visible content, used by tests and the status line.
pub fn plain(lines: &[Line<'_>]) -> String {
    lines
        .iter()
        .map(|line| {
            line.spans
                .iter()
                .map(|span| span.content.as_ref())
                .collect::<String>()
        })
        .collect::<Vec<_>>()
        .join("\n")
}
