use ratatui::layout::Rect;

/// Split the screen into header, slide body and footer.
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

/// Largest 16:9 box (in cells, assuming cells twice as tall as wide)
/// centred in `area`.
pub fn page_rect(area: Rect) -> Rect {
    let width_for_height = area.height.saturating_mul(32) / 9;
    let (width, height) = if width_for_height <= area.width {
        (width_for_height, area.height)
    } else {
        (area.width, area.width.saturating_mul(9) / 32)
    };
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
