use crate::app::{AppMode, RenderState};
use crate::engine::Color as TextColor;
use crate::ui::rich_text::{to_lines, Palette};
use crate::ui::theme::Theme;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Padding, Paragraph, Wrap},
};

fn to_terminal_color(color: TextColor) -> Color {
    let byte = |channel: f32| (channel.clamp(0.0, 1.0) * 255.0).round() as u8;
    Color::Rgb(byte(color.r), byte(color.g), byte(color.b))
}

/// Base style of the story text. A white target color keeps the theme's
/// text color.
pub fn text_style(state: &RenderState, theme: &Theme) -> Style {
    let fg = if state.text_color.with_alpha(1.0) == TextColor::WHITE {
        theme.text
    } else {
        to_terminal_color(state.text_color)
    };
    Style::default()
        .fg(fg)
        .bg(theme.flashed_background(state.flash))
}

pub fn render_story(state: &RenderState, theme: &Theme) -> Paragraph<'static> {
    let palette = Palette {
        base: text_style(state, theme),
        hidden: state.is_hidden(),
    };
    Paragraph::new(to_lines(&state.text, state.rich_text, palette))
        .wrap(Wrap { trim: false })
        .block(Block::default().padding(Padding::new(2, 2, 1, 0)))
        .style(Style::default().bg(theme.flashed_background(state.flash)))
}

pub fn render_status_line(state: &RenderState, theme: &Theme) -> Line<'static> {
    let mut spans = Vec::new();
    if let Some(message) = &state.message {
        spans.push(Span::styled(
            format!("» {message}  "),
            Style::default().fg(theme.accent),
        ));
    }
    let hint = match state.mode {
        AppMode::Playing if state.waiting_for_input => "▼ press any key",
        AppMode::Playing => "",
        AppMode::Finished => "end · any key to close",
        AppMode::Quit => "",
    };
    spans.push(Span::styled(
        hint,
        Style::default()
            .fg(theme.dimmed)
            .add_modifier(Modifier::ITALIC),
    ));
    Line::from(spans)
        .alignment(Alignment::Right)
        .style(Style::default().bg(theme.background))
}

/// `area` moved by `offset` cells, clipped to `bounds`.
pub fn shifted(area: Rect, offset: (i16, i16), bounds: Rect) -> Rect {
    let move_by = |start: u16, delta: i16| -> u16 {
        if delta >= 0 {
            start.saturating_add(delta as u16)
        } else {
            start.saturating_sub(delta.unsigned_abs())
        }
    };
    let x = move_by(area.x, offset.0).max(bounds.x);
    let y = move_by(area.y, offset.1).max(bounds.y);
    let right = bounds.x.saturating_add(bounds.width);
    let bottom = bounds.y.saturating_add(bounds.height);
    Rect {
        x: x.min(right),
        y: y.min(bottom),
        width: area.width.min(right.saturating_sub(x)),
        height: area.height.min(bottom.saturating_sub(y)),
    }
}
