use crate::ui::width_util::WidthUtil;
use std::io::Write;

/// Plain-text grid writer. Cells may hold several lines separated by `\n`;
/// a row is as tall as its tallest cell.
#[derive(Debug, Clone, Default)]
pub struct TablePrinter {
    util: WidthUtil,
    left_pad: usize,
}

impl TablePrinter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return a clone that indents every printed line by `pad` spaces.
    pub fn with_left_pad(&self, pad: usize) -> Self {
        let mut c = self.clone();
        c.left_pad = pad;
        c
    }

    fn write_indented<W: Write + ?Sized>(&self, out: &mut W, s: &str) -> std::io::Result<()> {
        if self.left_pad > 0 {
            write!(out, "{}", " ".repeat(self.left_pad))?;
        }
        writeln!(out, "{}", s.trim_end())
    }

    fn write_separator<W: Write + ?Sized>(&self, out: &mut W, width: usize) -> std::io::Result<()> {
        self.write_indented(out, &"-".repeat(width.max(1)))
    }

    pub fn render_banner<W: Write + ?Sized>(
        &self,
        title: &str,
        width: usize,
        out: &mut W,
    ) -> std::io::Result<()> {
        let w = width.max(self.util.visible_width(title));
        self.write_separator(out, w)?;
        self.write_indented(out, title)?;
        self.write_separator(out, w)
    }

    pub fn compute_table_width<T: AsRef<str>>(&self, headers: &[&str], rows: &[Vec<T>]) -> usize {
        let col_widths = self.compute_col_widths(headers, rows);
        self.table_natural_width(&col_widths)
    }

    /// Render into any writer.
    ///
    /// `title_lines` go inside the top banner; `separate_rows` draws a rule
    /// under every body row instead of only under the last one.
    pub fn render_table<T: AsRef<str>, W: Write + ?Sized>(
        &self,
        title_lines: &[&str],
        headers: &[&str],
        rows: &[Vec<T>],
        empty_message: Option<&str>,
        separate_rows: bool,
        out: &mut W,
    ) -> std::io::Result<()> {
        let col_widths = self.compute_col_widths(headers, rows);
        let total_width = title_lines
            .iter()
            .map(|t| self.util.visible_width(t))
            .chain(empty_message.map(|m| self.util.visible_width(m)))
            .fold(self.table_natural_width(&col_widths), usize::max);

        self.write_separator(out, total_width)?;
        for line in title_lines {
            self.write_indented(out, line)?;
        }
        self.write_separator(out, total_width)?;

        if !headers.is_empty() {
            self.write_indented(out, &self.build_line(headers, &col_widths))?;
            self.write_separator(out, total_width)?;
        }

        if rows.is_empty() {
            if let Some(msg) = empty_message {
                self.write_indented(out, msg)?;
                self.write_separator(out, total_width)?;
            }
            return Ok(());
        }

        for (i, row) in rows.iter().enumerate() {
            for line in self.row_lines(row, &col_widths) {
                self.write_indented(out, &line)?;
            }
            if separate_rows || i + 1 == rows.len() {
                self.write_separator(out, total_width)?;
            }
        }
        Ok(())
    }

    fn compute_col_widths<T: AsRef<str>>(&self, headers: &[&str], rows: &[Vec<T>]) -> Vec<usize> {
        let col_count = headers
            .len()
            .max(rows.iter().map(Vec::len).max().unwrap_or(0));
        let mut col_widths = vec![0usize; col_count];
        for (i, h) in headers.iter().enumerate() {
            col_widths[i] = col_widths[i].max(self.util.visible_width(h));
        }
        for r in rows {
            for (i, cell) in r.iter().enumerate() {
                let widest = cell
                    .as_ref()
                    .lines()
                    .map(|l| self.util.visible_width(l))
                    .max()
                    .unwrap_or(0);
                col_widths[i] = col_widths[i].max(widest);
            }
        }
        col_widths
    }

    fn table_natural_width(&self, col_widths: &[usize]) -> usize {
        if col_widths.is_empty() {
            0
        } else {
            col_widths.iter().copied().sum::<usize>() + (col_widths.len() - 1) * 3
        }
    }

    fn build_line<T: AsRef<str>>(&self, cells: &[T], col_widths: &[usize]) -> String {
        cells
            .iter()
            .zip(col_widths)
            .map(|(cell, w)| self.util.pad_visible(cell.as_ref(), *w))
            .collect::<Vec<_>>()
            .join(" | ")
    }

    fn row_lines<T: AsRef<str>>(&self, row: &[T], col_widths: &[usize]) -> Vec<String> {
        let split: Vec<Vec<&str>> = row.iter().map(|c| c.as_ref().lines().collect()).collect();
        let height = split.iter().map(Vec::len).max().unwrap_or(0).max(1);
        (0..height)
            .map(|line_no| {
                let cells: Vec<&str> = split
                    .iter()
                    .map(|lines| lines.get(line_no).copied().unwrap_or(""))
                    .collect();
                self.build_line(&cells, col_widths)
            })
            .collect()
    }
}
