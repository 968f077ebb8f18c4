use crate::form::{FieldName, SubmissionState};
use crate::ui::app::App;
use crate::ui::footer;
use crate::ui::header::Header;
use crate::ui::layout::{body_columns, layout_regions};
use crate::ui::logo::Logo;
use crate::ui::theme::{
    ACTIVE_HIGHLIGHT, ERROR_TEXT, GLOBAL_BORDER, LABEL_TEXT, PLACEHOLDER_TEXT, THANK_YOU_TEXT,
};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;
use unicode_width::UnicodeWidthStr;

/// Rows above the first field: message line and a spacer.
const FORM_TOP_ROWS: u16 = 2;
/// Rows per field: label, value, spacer.
const FIELD_ROWS: u16 = 3;
/// Columns before a field value (the focus marker).
const VALUE_INDENT: u16 = 2;

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let (header, body, footer_area) = layout_regions(area);

    frame.render_widget(Header::new().widget(), header);
    frame.render_widget(Clear, body);

    let (logo_area, form_area) = body_columns(body, app.show_logo());
    if let Some(logo_area) = logo_area {
        frame.render_widget(Logo::for_focus(app.focus()).widget(), logo_area);
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(GLOBAL_BORDER));
    let inner = block.inner(form_area);
    frame.render_widget(form_widget(app).block(block), form_area);
    frame.render_widget(footer::widget(footer_area), footer_area);

    // No cursor while the form is dimmed behind the thank-you message.
    if app.message().is_thank_you() {
        return;
    }
    if let Some((x, y)) = cursor_position(app, inner) {
        frame.set_cursor_position((x, y));
    }
}

fn form_widget(app: &App) -> Paragraph<'static> {
    let snapshot = app.snapshot();
    let mut lines = Vec::new();

    lines.push(message_line(&snapshot.message));
    lines.push(Line::from(""));

    for field in FieldName::ALL {
        let focused = field == app.focus();
        let label_style = if focused {
            Style::default().fg(LABEL_TEXT).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(LABEL_TEXT)
        };
        lines.push(Line::from(Span::styled(field.label(), label_style)));

        let marker = if focused { "▸ " } else { "  " };
        let value = snapshot.fields.get(field);
        let value_span = match field.placeholder() {
            Some(placeholder) if value.is_empty() => {
                Span::styled(placeholder, Style::default().fg(PLACEHOLDER_TEXT))
            }
            _ => Span::raw(value.to_string()),
        };
        let mut value_line = Line::from(vec![Span::raw(marker), value_span]);
        if focused {
            value_line = value_line.style(Style::default().bg(ACTIVE_HIGHLIGHT));
        }
        lines.push(value_line);
        lines.push(Line::from(""));
    }

    lines.push(Line::from(Span::styled(
        "[ Submit ]",
        Style::default().fg(LABEL_TEXT).add_modifier(Modifier::BOLD),
    )));

    let mut widget = Paragraph::new(lines);
    if snapshot.message.is_thank_you() {
        widget = widget.style(Style::default().add_modifier(Modifier::DIM));
    }
    widget
}

fn message_line(message: &SubmissionState) -> Line<'static> {
    let color = match message {
        SubmissionState::Idle => return Line::from(""),
        SubmissionState::ShowingError { .. } => ERROR_TEXT,
        SubmissionState::ShowingThankYou { .. } => THANK_YOU_TEXT,
    };
    let text = message.text().unwrap_or_default().to_string();
    Line::from(Span::styled(text, Style::default().fg(color))).alignment(Alignment::Center)
}

/// Terminal cell just after the focused value, if it fits in `inner`.
fn cursor_position(app: &App, inner: Rect) -> Option<(u16, u16)> {
    let field = app.focus();
    let value = app.session().fields().get(field);
    let value_width = u16::try_from(value.width()).unwrap_or(u16::MAX);
    let row = u16::try_from(field.index())
        .unwrap_or(u16::MAX)
        .saturating_mul(FIELD_ROWS);

    let x = inner
        .x
        .saturating_add(VALUE_INDENT)
        .saturating_add(value_width);
    let y = inner
        .y
        .saturating_add(FORM_TOP_ROWS)
        .saturating_add(row)
        .saturating_add(1);
    (x < inner.right() && y < inner.bottom()).then_some((x, y))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::{FormSession, MemorySink, MessageTimings};

    fn app_with(field: FieldName, value: &str) -> App {
        let session = FormSession::new(MessageTimings::default(), MemorySink::new());
        let mut app = App::new(session, false);
        app.set_focus(field);
        app.insert_str(value);
        app
    }

    #[test]
    fn cursor_follows_value_width() {
        let app = app_with(FieldName::LastName, "Weaver");
        let inner = Rect::new(1, 4, 60, 22);
        // label row of field 1 is 4 + 2 + 3, value row one below
        assert_eq!(cursor_position(&app, inner), Some((1 + 2 + 6, 10)));
    }

    #[test]
    fn cursor_counts_wide_characters_as_two_cells() {
        let app = app_with(FieldName::FirstName, "蜘蛛");
        let inner = Rect::new(0, 0, 60, 22);
        assert_eq!(cursor_position(&app, inner), Some((2 + 4, 3)));
    }

    #[test]
    fn cursor_hidden_when_value_overflows() {
        let app = app_with(FieldName::Email, &"a".repeat(70_000));
        let inner = Rect::new(10, 0, 60, 22);
        assert_eq!(cursor_position(&app, inner), None);
    }
}
