use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Width of the logo column when the logo is shown.
pub const LOGO_WIDTH: u16 = 26;

pub fn layout_regions(area: Rect) -> (Rect, Rect, Rect) {
    let header_height = area.height.min(3);
    let footer_height = 3.min(area.height.saturating_sub(header_height));
    let header = Rect {
        x: area.x,
        y: area.y,
        width: area.width,
        height: header_height,
    };
    let footer = Rect {
        x: area.x,
        y: area.y + area.height.saturating_sub(footer_height),
        width: area.width,
        height: footer_height,
    };
    let body = Rect {
        x: area.x,
        y: area.y + header_height,
        width: area.width,
        height: area.height.saturating_sub(header_height + footer_height),
    };
    (header, body, footer)
}

/// Split the body into an optional logo column and the form column.
///
/// The logo is dropped when the body is too narrow to hold both.
pub fn body_columns(body: Rect, show_logo: bool) -> (Option<Rect>, Rect) {
    if !show_logo || body.width < LOGO_WIDTH * 2 {
        return (None, body);
    }
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(LOGO_WIDTH), Constraint::Min(0)])
        .split(body);
    (Some(columns[0]), columns[1])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn regions_cover_the_whole_area() {
        let area = Rect::new(0, 0, 80, 24);
        let (header, body, footer) = layout_regions(area);
        assert_eq!(header.height, 3);
        assert_eq!(footer.height, 3);
        assert_eq!(body.height, 18);
        assert_eq!(footer.y, 21);
    }

    #[test]
    fn narrow_body_hides_logo() {
        let (logo, form) = body_columns(Rect::new(0, 3, 40, 18), true);
        assert!(logo.is_none());
        assert_eq!(form.width, 40);
    }

    #[test]
    fn wide_body_reserves_logo_column() {
        let (logo, form) = body_columns(Rect::new(0, 3, 80, 18), true);
        assert_eq!(logo.map(|r| r.width), Some(LOGO_WIDTH));
        assert_eq!(form.width, 80 - LOGO_WIDTH);
    }
}
