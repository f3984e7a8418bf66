//! Text rendering of a chip layout: one text line per flow row.

use chipflow_ui::ChipLayout;

/// Pixels per text column at density 1 with the default chip text size.
const COLUMN_PX: f32 = 7.0;

pub fn render(layout: &ChipLayout, density: f32) -> String {
    let column_px = COLUMN_PX * density;
    let columns = (layout.size().width as f32 / column_px).ceil() as usize;
    let mut out = String::new();

    for row in 0..layout.layout.row_count() {
        let mut line: Vec<char> = vec![' '; columns];
        for placed in layout.layout.row_items(row) {
            let Some(chip) = layout.chip(placed.index) else {
                continue;
            };
            let start = (chip.rect.x as f32 / column_px).round() as usize;
            let end = ((chip.rect.right() as f32 / column_px).round() as usize).max(start + 2);
            if end > line.len() {
                line.resize(end, ' ');
            }
            let (open, close) = if chip.selected { ('[', ']') } else { ('(', ')') };
            line[start] = open;
            line[end - 1] = close;

            let inner = end - start - 2;
            let text: Vec<char> = chip.text.chars().take(inner).collect();
            let offset = start + 1 + (inner - text.len()) / 2;
            for (i, ch) in text.into_iter().enumerate() {
                line[offset + i] = ch;
            }
        }
        out.extend(line);
        out.push('\n');
    }
    out
}
