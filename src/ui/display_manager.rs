use crate::calendar::WeekLabel;
use crate::config::Config;
use crate::controller::TimetableView;
use crate::ui::table_printer::TablePrinter;
use crate::ui::view::{CellView, TableView};
use crate::ui::width_util::WidthUtil;
use std::io;
use std::io::Write;

/// Terminal side of the timetable: draws tables to stdout.
#[derive(Debug, Default, Clone)]
pub struct DisplayManager {
    pub printer: TablePrinter,
    pub util: WidthUtil,
    colored: bool,
}

impl DisplayManager {
    pub fn new() -> Self {
        Self {
            printer: TablePrinter::new(),
            util: WidthUtil::default(),
            colored: true,
        }
    }

    /// Plain output, no ANSI color codes.
    pub fn plain() -> Self {
        Self {
            colored: false,
            ..Self::new()
        }
    }

    pub fn display_config_centered(&self, config: &Config) -> usize {
        let headers = ["ID", "KEY", "DESCRIPTION", "VALUE"];
        let rows = config_rows(config);

        let table_w = self
            .printer
            .compute_table_width(&headers, &rows)
            .max(self.util.visible_width("Config"));

        let pad = self.util.center_pad(table_w);
        let printer = self.printer.with_left_pad(pad);
        let _ = printer.render_table(
            &["Config"],
            &headers,
            &rows,
            Some("No config items found."),
            false,
            &mut io::stdout(),
        );
        table_w
    }

    pub fn render_config<W: Write>(&self, config: &Config, out: &mut W) -> io::Result<()> {
        let headers = ["ID", "KEY", "DESCRIPTION", "VALUE"];
        let rows = config_rows(config);
        self.printer.render_table(
            &["Config"],
            &headers,
            &rows,
            Some("No config items found."),
            false,
            out,
        )
    }

    /// One text row per period; a filled cell is the time range line followed
    /// by its tags.
    pub fn timetable_rows(&self, table: &TableView) -> Vec<Vec<String>> {
        table
            .rows
            .iter()
            .map(|row| {
                std::iter::once(row.label.clone())
                    .chain(row.cells.iter().map(|cell| self.cell_text(cell)))
                    .collect()
            })
            .collect()
    }

    fn cell_text(&self, cell: &CellView) -> String {
        match cell {
            CellView::Empty { glyph, .. } => glyph.clone(),
            CellView::Filled {
                time_range, tags, ..
            } => {
                let names = tags
                    .iter()
                    .map(|tag| {
                        if self.colored {
                            tag.color.paint(&tag.name)
                        } else {
                            tag.name.clone()
                        }
                    })
                    .collect::<Vec<_>>()
                    .join(" ");
                format!("{time_range}\n{names}")
            }
        }
    }

    pub fn render_timetable<W: Write>(
        &self,
        label: &WeekLabel,
        table: &TableView,
        out: &mut W,
    ) -> io::Result<()> {
        let rows = self.timetable_rows(table);
        self.printer.render_table(
            &[label.title.as_str(), label.range.as_str()],
            &table.headers(),
            &rows,
            None,
            true,
            out,
        )
    }

    pub fn display_timetable(&self, label: &WeekLabel, table: &TableView) {
        let rows = self.timetable_rows(table);
        let width = self.printer.compute_table_width(&table.headers(), &rows);
        let printer = self.printer.with_left_pad(self.util.center_pad(width));
        let mut stdout = io::stdout();
        let _ = printer.render_table(
            &[label.title.as_str(), label.range.as_str()],
            &table.headers(),
            &rows,
            None,
            true,
            &mut stdout,
        );
        let _ = stdout.flush();
    }
}

impl TimetableView for DisplayManager {
    fn show_label(&self, label: &WeekLabel) {
        println!("{} ({})", label.title, label.range);
        let _ = io::stdout().flush();
    }

    fn render(&self, label: &WeekLabel, table: &TableView) {
        self.display_timetable(label, table);
    }
}

fn config_rows(config: &Config) -> Vec<Vec<String>> {
    config
        .rows()
        .iter()
        .enumerate()
        .map(|(i, (k, d, v))| vec![i.to_string(), k.clone(), d.clone(), v.clone()])
        .collect()
}
