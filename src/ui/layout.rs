use ratatui::layout::{Constraint, Layout, Rect};

/// Rows used by the header and by the footer when the area allows.
const BAR_HEIGHT: u16 = 3;

/// Splits `area` into header, body and footer. The header is served first.
pub fn layout_regions(area: Rect) -> (Rect, Rect, Rect) {
    let header_height = area.height.min(BAR_HEIGHT);
    let footer_height = (area.height - header_height).min(BAR_HEIGHT);
    let body_height = area.height - header_height - footer_height;
    let band = |y: u16, height: u16| Rect {
        x: area.x,
        y,
        width: area.width,
        height,
    };
    (
        band(area.y, header_height),
        band(area.y + header_height, body_height),
        band(area.y + header_height + body_height, footer_height),
    )
}

/// Horizontally centred column of at most `max_width`, full height.
pub fn centered_column(area: Rect, max_width: u16) -> Rect {
    let width = area.width.min(max_width);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y,
        width,
        height: area.height,
    }
}

/// Rect of `percent_x` by `percent_y` of `area`, centred in it.
pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let [_, middle, _] = Layout::vertical([
        Constraint::Percentage((100 - percent_y) / 2),
        Constraint::Percentage(percent_y),
        Constraint::Percentage((100 - percent_y) / 2),
    ])
    .areas(area);
    let [_, center, _] = Layout::horizontal([
        Constraint::Percentage((100 - percent_x) / 2),
        Constraint::Percentage(percent_x),
        Constraint::Percentage((100 - percent_x) / 2),
    ])
    .areas(middle);
    center
}
