//! The Spidr logo column.
//!
//! The logo hangs from its thread and drops as focus moves down the form:
//! one terminal row for every 20 pixels of offset.

use crate::form::FieldName;
use crate::ui::theme::{LABEL_TEXT, SPIDR_SLATE};
use ratatui::style::{Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::Paragraph;

const PIXELS_PER_ROW: u16 = 20;

const SPIDER: [&str; 7] = [
    r"    /\  .-.  /\    ",
    r"   //\\/   \//\\   ",
    r"   |/\| o o |/\|   ",
    r"   \\//\ ^ /\\//   ",
    r"    \/  `-'  \/    ",
    r"                   ",
    r"     S P I D R     ",
];

pub struct Logo {
    offset: u16,
}

impl Logo {
    /// Logo positioned for the field that currently has focus.
    pub fn for_focus(focus: FieldName) -> Self {
        Self {
            offset: focus.logo_offset(),
        }
    }

    /// Rows of thread above the spider.
    pub fn drop_rows(&self) -> u16 {
        self.offset / PIXELS_PER_ROW
    }

    pub fn widget(&self) -> Paragraph<'static> {
        let thread_style = Style::default().fg(SPIDR_SLATE);
        let mut lines: Vec<Line<'static>> = (0..=self.drop_rows())
            .map(|_| Line::styled("         |         ", thread_style))
            .collect();

        let (body, title) = SPIDER.split_at(SPIDER.len() - 1);
        lines.extend(
            body.iter()
                .map(|row| Line::styled(*row, Style::default().fg(SPIDR_SLATE))),
        );
        lines.extend(title.iter().map(|row| {
            Line::styled(
                *row,
                Style::default().fg(LABEL_TEXT).add_modifier(Modifier::BOLD),
            )
        }));

        Paragraph::new(lines)
    }
}
