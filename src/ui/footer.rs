//! Bottom bar listing the form's key bindings.

use crate::ui::input::KEY_HINTS;
use crate::ui::theme::{GLOBAL_BORDER, LABEL_TEXT};
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use unicode_width::UnicodeWidthStr;

const SEPARATOR: &str = " │ ";

/// Key hints on the left, crate version on the right.
pub fn widget(area: Rect) -> Paragraph<'static> {
    let inner_width = usize::from(area.width.saturating_sub(2));
    Paragraph::new(hint_line(inner_width)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(GLOBAL_BORDER)),
    )
}

fn hint_line(width: usize) -> Line<'static> {
    let key_style = Style::default().fg(LABEL_TEXT).add_modifier(Modifier::BOLD);
    let dim = Style::default().fg(LABEL_TEXT).add_modifier(Modifier::DIM);

    let mut spans = vec![Span::raw(" ")];
    for (i, (keys, action)) in KEY_HINTS.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(SEPARATOR, dim));
        }
        spans.push(Span::styled(*keys, key_style));
        spans.push(Span::styled(format!(" {action}"), dim));
    }

    let version = format!("v{} ", env!("CARGO_PKG_VERSION"));
    let used: usize = spans.iter().map(|span| span.content.width()).sum();
    let padding = width.saturating_sub(used + version.width());
    spans.push(Span::raw(" ".repeat(padding)));
    spans.push(Span::styled(version, dim));
    Line::from(spans)
}
