use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::Line;
use ratatui::text::Text;
use unicode_width::UnicodeWidthChar;
use unicode_width::UnicodeWidthStr;

/// Writes `input` starting at `(x, y)`, stopping before `max_cols` display columns.
///
/// Wide characters that would straddle the limit are dropped rather than split.
pub fn render_str_clipped(
    x: u16,
    y: u16,
    max_cols: u16,
    buf: &mut Buffer,
    input: &str,
    style: Style,
) {
    if max_cols == 0 {
        return;
    }

    let max_cols = max_cols as usize;
    let mut out_cols = 0usize;
    let mut dx = 0u16;
    let mut tmp = [0u8; 4];

    for ch in input.chars() {
        let w = UnicodeWidthChar::width(ch).unwrap_or(0);
        if w == 0 {
            continue;
        }
        if out_cols + w > max_cols {
            return;
        }

        let s = ch.encode_utf8(&mut tmp);
        if let Some(cell) = buf.cell_mut((x + dx, y)) {
            cell.set_style(style);
            cell.set_symbol(s);
        }
        dx += 1;
        out_cols += 1;

        if w == 2 {
            if let Some(cell) = buf.cell_mut((x + dx, y)) {
                cell.set_style(style);
                cell.set_symbol("");
            }
            dx += 1;
            out_cols += 1;
        }
    }
}

pub fn line_width(line: &Line<'_>) -> usize {
    line.spans
        .iter()
        .map(|s| UnicodeWidthStr::width(s.content.as_ref()))
        .sum()
}

/// Renders `text` centred on both axes of `area`, clipping whatever does not fit.
pub fn render_text_centered(
    area: Rect,
    buf: &mut Buffer,
    text: &Text<'_>,
    fallback_style: Style,
) {
    if area.width == 0 || area.height == 0 {
        return;
    }

    let rows = text.lines.len().min(area.height as usize) as u16;
    let top = area.y + (area.height - rows) / 2;

    for (row, line) in text.lines.iter().take(rows as usize).enumerate() {
        let width = line_width(line).min(area.width as usize) as u16;
        let mut x = area.x + (area.width - width) / 2;
        let y = top + row as u16;
        let right = area.x + area.width;
        for span in &line.spans {
            if x >= right {
                break;
            }
            let style = if span.style == Style::default() {
                fallback_style.patch(line.style)
            } else {
                fallback_style.patch(line.style).patch(span.style)
            };
            render_str_clipped(x, y, right - x, buf, span.content.as_ref(), style);
            x = x.saturating_add(UnicodeWidthStr::width(span.content.as_ref()) as u16);
        }
    }
}

/// Copies the part of `src` that overlaps `dst_area`, with `src` positioned so that its origin
/// lands at `(origin_x, origin_y)` in destination coordinates (which may be negative).
pub fn blit_clipped(
    src: &Buffer,
    origin_x: i32,
    origin_y: i32,
    dst_area: Rect,
    dst: &mut Buffer,
) {
    let src_area = src.area;
    for sy in 0..src_area.height {
        let dy = origin_y + sy as i32;
        if dy < dst_area.y as i32 || dy >= dst_area.bottom() as i32 {
            continue;
        }
        for sx in 0..src_area.width {
            let dx = origin_x + sx as i32;
            if dx < dst_area.x as i32 || dx >= dst_area.right() as i32 {
                continue;
            }
            let Some(cell) = src.cell((src_area.x + sx, src_area.y + sy)) else {
                continue;
            };
            if let Some(target) = dst.cell_mut((dx as u16, dy as u16)) {
                *target = cell.clone();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(buf: &Buffer, y: u16) -> String {
        (0..buf.area.width)
            .map(|x| buf[(x, y)].symbol().to_string())
            .collect()
    }

    #[test]
    fn clipped_string_stops_at_limit() {
        let mut buf = Buffer::empty(Rect::new(0, 0, 6, 1));
        render_str_clipped(0, 0, 3, &mut buf, "abcdef", Style::default());
        assert_eq!(row(&buf, 0), "abc   ");
    }

    #[test]
    fn clipped_string_drops_straddling_wide_char() {
        let mut buf = Buffer::empty(Rect::new(0, 0, 4, 1));
        render_str_clipped(0, 0, 3, &mut buf, "你好", Style::default());
        assert_eq!(buf[(0, 0)].symbol(), "你");
        assert_eq!(buf[(2, 0)].symbol(), " ");
    }

    #[test]
    fn centered_text_lands_in_the_middle() {
        let mut buf = Buffer::empty(Rect::new(0, 0, 7, 3));
        render_text_centered(buf.area, &mut buf, &Text::from("ab"), Style::default());
        assert_eq!(row(&buf, 1), "  ab   ");
    }

    #[test]
    fn blit_clips_negative_origin() {
        let mut src = Buffer::empty(Rect::new(0, 0, 3, 1));
        render_str_clipped(0, 0, 3, &mut src, "xyz", Style::default());
        let mut dst = Buffer::empty(Rect::new(0, 0, 4, 1));
        blit_clipped(&src, -1, 0, dst.area, &mut dst);
        assert_eq!(row(&dst, 0), "yz  ");
    }
}
