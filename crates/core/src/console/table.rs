// ABOUTME: Plain-text table rendering with thin box-drawing borders.
// ABOUTME: Column widths use terminal display width, so wide characters line up.

use unicode_width::UnicodeWidthStr;

/// Horizontal placement of cell text within its column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Alignment {
    #[default]
    Left,
    Right,
    Center,
}

impl Alignment {
    /// Parses an alignment string with one character per column: `l`, `r` or `c`.
    /// Unrecognized characters mean left.
    pub fn parse_columns(spec: &str) -> Vec<Alignment> {
        spec.chars()
            .map(|c| match c.to_ascii_lowercase() {
                'r' => Alignment::Right,
                'c' => Alignment::Center,
                _ => Alignment::Left,
            })
            .collect()
    }
}

/// Layout settings for [`render_table`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableStyle {
    /// Blank lines above and below the text of every row.
    pub vertical_padding: usize,
    /// Spaces on both sides of the text of every cell.
    pub horizontal_padding: usize,
    /// Per-column alignment; columns past the end are left-aligned.
    pub alignment: Vec<Alignment>,
}

impl Default for TableStyle {
    fn default() -> Self {
        Self {
            vertical_padding: 0,
            horizontal_padding: 1,
            alignment: vec![Alignment::Right, Alignment::Left],
        }
    }
}

impl TableStyle {
    pub fn new(padding: (usize, usize), alignment: &str) -> Self {
        Self {
            vertical_padding: padding.0,
            horizontal_padding: padding.1,
            alignment: Alignment::parse_columns(alignment),
        }
    }

    fn alignment_of(&self, column: usize) -> Alignment {
        self.alignment.get(column).copied().unwrap_or_default()
    }
}

/// Renders rows as a bordered table, one line per output row, each ending in `\n`.
///
/// Short rows are padded with empty cells. An empty `rows` renders as an empty string.
pub fn render_table<S: AsRef<str>>(rows: &[Vec<S>], style: &TableStyle) -> String {
    let columns = rows.iter().map(Vec::len).max().unwrap_or(0);
    if columns == 0 {
        return String::new();
    }

    let mut widths = vec![0usize; columns];
    for row in rows {
        for (i, cell) in row.iter().enumerate() {
            widths[i] = widths[i].max(cell.as_ref().width());
        }
    }

    let pad = style.horizontal_padding;
    let mut out = String::new();
    out.push_str(&border_line(&widths, pad, ('┌', '┬', '┐')));

    for (index, row) in rows.iter().enumerate() {
        if index > 0 {
            out.push_str(&border_line(&widths, pad, ('├', '┼', '┤')));
        }

        for _ in 0..style.vertical_padding {
            out.push_str(&blank_line(&widths, pad));
        }

        out.push('│');
        for (column, width) in widths.iter().enumerate() {
            let text = row.get(column).map(|cell| cell.as_ref()).unwrap_or("");
            out.push_str(&" ".repeat(pad));
            out.push_str(&align(text, *width, style.alignment_of(column)));
            out.push_str(&" ".repeat(pad));
            out.push('│');
        }
        out.push('\n');

        for _ in 0..style.vertical_padding {
            out.push_str(&blank_line(&widths, pad));
        }
    }

    out.push_str(&border_line(&widths, pad, ('└', '┴', '┘')));
    out
}

fn border_line(widths: &[usize], pad: usize, (left, middle, right): (char, char, char)) -> String {
    let segments: Vec<String> = widths.iter().map(|w| "─".repeat(w + 2 * pad)).collect();
    format!("{left}{}{right}\n", segments.join(&middle.to_string()))
}

fn blank_line(widths: &[usize], pad: usize) -> String {
    let segments: Vec<String> = widths.iter().map(|w| " ".repeat(w + 2 * pad)).collect();
    format!("│{}│\n", segments.join("│"))
}

fn align(text: &str, width: usize, alignment: Alignment) -> String {
    let gap = width.saturating_sub(text.width());
    match alignment {
        Alignment::Left => format!("{text}{}", " ".repeat(gap)),
        Alignment::Right => format!("{}{text}", " ".repeat(gap)),
        Alignment::Center => {
            let before = gap / 2;
            format!("{}{text}{}", " ".repeat(before), " ".repeat(gap - before))
        }
    }
}
