//! Table rendering utilities for terminal output.
//! Widths are measured in display columns so Hangul names line up.

use unicode_width::UnicodeWidthStr;

pub struct Column {
    pub header: String,
    pub width: usize,
}

impl Column {
    pub fn new(header: &str, width: usize) -> Self {
        Self {
            header: header.to_string(),
            width,
        }
    }
}

pub struct Table {
    pub columns: Vec<Column>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(columns: Vec<Column>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    pub fn add_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    pub fn render(&self) -> String {
        let mut out = String::new();

        // Header
        let header: Vec<String> = self
            .columns
            .iter()
            .map(|c| pad_display(&c.header, c.width))
            .collect();
        out.push_str(header.join(" ").trim_end());
        out.push('\n');

        // Rows
        for row in &self.rows {
            let cells: Vec<String> = self
                .columns
                .iter()
                .enumerate()
                .map(|(i, col)| pad_display(row.get(i).map(String::as_str).unwrap_or(""), col.width))
                .collect();
            out.push_str(cells.join(" ").trim_end());
            out.push('\n');
        }

        out
    }
}

fn pad_display(s: &str, width: usize) -> String {
    let w = UnicodeWidthStr::width(s);
    if w >= width {
        s.to_string()
    } else {
        format!("{}{}", s, " ".repeat(width - w))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pads_by_display_width() {
        let mut t = Table::new(vec![Column::new("NAME", 6), Column::new("IN", 5)]);
        t.add_row(vec!["홍길동".into(), "09:00".into()]);
        t.add_row(vec!["Bob".into()]);

        let out = t.render();
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[0], "NAME   IN");
        assert_eq!(lines[1], "홍길동 09:00");
        assert_eq!(lines[2], "Bob");
    }
}
