//! Boxed table rendering.

use super::types::{Align, Column, TableSpec};
use super::util::pad;
use crate::markup::Styler;

/// Box-drawing characters: heavy lines around the header, light below.
struct BoxChars {
    head_top: [char; 4],
    head_row: [char; 3],
    head_rule: [char; 4],
    row: [char; 3],
    row_rule: [char; 4],
    bottom: [char; 4],
}

const HEAVY_HEAD: BoxChars = BoxChars {
    head_top: ['┏', '━', '┳', '┓'],
    head_row: ['┃', '┃', '┃'],
    head_rule: ['┡', '━', '╇', '┩'],
    row: ['│', '│', '│'],
    row_rule: ['├', '─', '┼', '┤'],
    bottom: ['└', '─', '┴', '┘'],
};

/// A table of markup cells.
///
/// Cells, headers and the title are markup: they are wrapped to their
/// column width with tags carried across lines, then styled and padded.
///
/// ```rust
/// use richwx_render::table::{Column, Table};
/// use richwx_render::{OutputMode, Styler};
///
/// let table = Table::new()
///     .column(Column::named("Alert Type"))
///     .column(Column::named("Location"))
///     .row(["[red]Tornado Warning[/]", "Alachua"]);
///
/// let out = table.render(&Styler::new(OutputMode::Text), 80);
/// assert_eq!(
///     out,
///     "┏━━━━━━━━━━━━━━━━━┳━━━━━━━━━━┓\n\
///      ┃ Alert Type      ┃ Location ┃\n\
///      ┡━━━━━━━━━━━━━━━━━╇━━━━━━━━━━┩\n\
///      │ Tornado Warning │ Alachua  │\n\
///      └─────────────────┴──────────┘"
/// );
/// ```
#[derive(Clone, Debug)]
pub struct Table {
    title: Option<String>,
    columns: Vec<Column>,
    rows: Vec<Vec<String>>,
    show_lines: bool,
    show_edge: bool,
    style: Option<String>,
    border_style: Option<String>,
    width: Option<usize>,
}

impl Default for Table {
    fn default() -> Self {
        Self::new()
    }
}

impl Table {
    /// An empty table: edges on, no row lines, no title.
    pub fn new() -> Self {
        Self {
            title: None,
            columns: Vec::new(),
            rows: Vec::new(),
            show_lines: false,
            show_edge: true,
            style: None,
            border_style: None,
            width: None,
        }
    }

    /// Centered above the table, in italics.
    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Appends a column.
    #[must_use]
    pub fn column(mut self, column: Column) -> Self {
        self.columns.push(column);
        self
    }

    /// Adds a row. Missing trailing cells render empty; extra cells are dropped.
    #[must_use]
    pub fn row<I, S>(mut self, cells: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.push_row(cells);
        self
    }

    /// Adds a row to a table already bound to a variable.
    pub fn push_row<I, S>(&mut self, cells: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.rows.push(cells.into_iter().map(Into::into).collect());
    }

    /// Draws a rule between body rows.
    #[must_use]
    pub fn show_lines(mut self, show: bool) -> Self {
        self.show_lines = show;
        self
    }

    /// Draws the outer border. When off, only inner separators remain.
    #[must_use]
    pub fn show_edge(mut self, show: bool) -> Self {
        self.show_edge = show;
        self
    }

    /// Style tag applied to every cell and the border, e.g. `"red"`.
    #[must_use]
    pub fn style(mut self, style: impl Into<String>) -> Self {
        self.style = Some(style.into());
        self
    }

    /// Style tag applied to the border only, layered over [`Table::style`].
    #[must_use]
    pub fn border_style(mut self, style: impl Into<String>) -> Self {
        self.border_style = Some(style.into());
        self
    }

    /// Total width budget. Fill columns grow to use it.
    #[must_use]
    pub fn width(mut self, width: usize) -> Self {
        self.width = Some(width);
        self
    }

    /// Number of body rows.
    pub fn num_rows(&self) -> usize {
        self.rows.len()
    }

    /// True when there are no body rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Renders the table to at most `max_width` columns.
    pub fn render(&self, styler: &Styler, max_width: usize) -> String {
        if self.columns.is_empty() {
            return String::new();
        }

        let spec = self.spec();
        let budget = self.width.map_or(max_width, |w| w.min(max_width));

        let headers: Vec<String> = self
            .columns
            .iter()
            .map(|col| self.styled(&format!("[bold]{}[/]", col.header)))
            .collect();
        let body: Vec<Vec<String>> = self
            .rows
            .iter()
            .map(|row| {
                (0..self.columns.len())
                    .map(|i| self.styled(row.get(i).map_or("", String::as_str)))
                    .collect()
            })
            .collect();

        let mut content = vec![0; self.columns.len()];
        for row in std::iter::once(&headers).chain(&body) {
            for (i, cell) in row.iter().enumerate() {
                content[i] = content[i].max(styler.width(cell));
            }
        }
        let widths = spec.resolve_widths_measured(budget, &content).widths;
        let table_width = widths.iter().sum::<usize>() + spec.decorations.overhead(widths.len());

        let mut lines = Vec::new();
        if let Some(title) = &self.title {
            for line in styler.wrap(&format!("[italic]{}[/]", title), table_width.max(1)) {
                let visible = styler.width(&line);
                lines.push(pad(&styler.apply(&line), visible, table_width, Align::Center).trim_end().to_string());
            }
        }

        let chars = &HEAVY_HEAD;
        if self.show_edge {
            lines.push(self.rule(styler, &widths, chars.head_top));
        }
        self.push_cells(&mut lines, styler, &widths, &headers, chars.head_row);
        lines.push(self.rule(styler, &widths, chars.head_rule));

        for (i, row) in body.iter().enumerate() {
            if i > 0 && self.show_lines {
                lines.push(self.rule(styler, &widths, chars.row_rule));
            }
            self.push_cells(&mut lines, styler, &widths, row, chars.row);
        }
        if self.show_edge {
            lines.push(self.rule(styler, &widths, chars.bottom));
        }

        lines.join("\n")
    }

    fn spec(&self) -> TableSpec {
        let builder = TableSpec::builder().separator(" │ ");
        let builder = if self.show_edge {
            builder.prefix("│ ").suffix(" │")
        } else {
            builder.prefix(" ").suffix(" ")
        };
        self.columns
            .iter()
            .fold(builder, |builder, col| builder.column(col.clone()))
            .build()
    }

    fn styled(&self, markup: &str) -> String {
        match &self.style {
            Some(style) => format!("[{}]{}[/]", style, markup),
            None => markup.to_string(),
        }
    }

    fn border(&self, styler: &Styler, chars: &str) -> String {
        let style: Vec<&str> = [self.style.as_deref(), self.border_style.as_deref()]
            .into_iter()
            .flatten()
            .collect();
        if style.is_empty() {
            chars.to_string()
        } else {
            styler.apply(&format!("[{}]{}[/]", style.join(" "), chars))
        }
    }

    /// A horizontal line: `[left, fill, cross, right]`.
    fn rule(&self, styler: &Styler, widths: &[usize], [left, fill, cross, right]: [char; 4]) -> String {
        let segments: Vec<String> = widths
            .iter()
            .map(|w| std::iter::repeat(fill).take(w + 2).collect())
            .collect();
        let mut line = segments.join(&cross.to_string());
        if self.show_edge {
            line = format!("{}{}{}", left, line, right);
        }
        self.border(styler, &line)
    }

    fn push_cells(
        &self,
        lines: &mut Vec<String>,
        styler: &Styler,
        widths: &[usize],
        cells: &[String],
        [left, sep, right]: [char; 3],
    ) {
        let wrapped: Vec<Vec<String>> = cells
            .iter()
            .zip(widths)
            .map(|(cell, w)| styler.wrap(cell, *w))
            .collect();
        let height = wrapped.iter().map(Vec::len).max().unwrap_or(1);

        let left = self.border(styler, &left.to_string());
        let sep = self.border(styler, &sep.to_string());
        let right = self.border(styler, &right.to_string());

        for n in 0..height {
            let mut line = String::new();
            if self.show_edge {
                line.push_str(&left);
            }
            for (i, (column, width)) in self.columns.iter().zip(widths).enumerate() {
                if i > 0 {
                    line.push_str(&sep);
                }
                let text = wrapped[i].get(n).map_or("", String::as_str);
                let cell = pad(&styler.apply(text), styler.width(text), *width, column.align);
                line.push(' ');
                line.push_str(&cell);
                line.push(' ');
            }
            if self.show_edge {
                line.push_str(&right);
            }
            lines.push(line);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::OutputMode;
    use crate::table::Width;
    use unicode_width::UnicodeWidthStr;

    fn text() -> Styler {
        Styler::new(OutputMode::Text)
    }

    fn sample() -> Table {
        Table::new()
            .column(Column::named("Alert Type").center())
            .column(Column::named("Location").max_width(12))
            .row(["[red]Tornado Warning[/]\n:exclamation_mark: :tornado: ", "Alachua"])
            .row(["[tan]Wind Advisory[/]", "Coastal Plymouth, Barnstable"])
    }

    #[test]
    fn test_all_lines_same_width() {
        let out = sample().show_lines(true).render(&text(), 80);
        let widths: Vec<usize> = out.lines().map(UnicodeWidthStr::width).collect();
        assert!(widths.windows(2).all(|w| w[0] == w[1]), "{:?}\n{}", widths, out);
    }

    #[test]
    fn test_cell_newline_and_wrap() {
        let out = sample().render(&text(), 80);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[3], "│ Tornado Warning │ Alachua      │");
        assert!(lines[4].contains('❗'), "{}", lines[4]);
        assert_eq!(lines[5], "│  Wind Advisory  │ Coastal      │");
        assert_eq!(lines[6], "│                 │ Plymouth,    │");
        assert_eq!(lines[7], "│                 │ Barnstable   │");
    }

    #[test]
    fn test_show_lines() {
        let out = sample().show_lines(true).render(&text(), 80);
        assert_eq!(out.lines().filter(|l| l.starts_with('├')).count(), 1);
        let out = sample().render(&text(), 80);
        assert_eq!(out.lines().filter(|l| l.starts_with('├')).count(), 0);
    }

    #[test]
    fn test_without_edge() {
        let out = sample().show_edge(false).render(&text(), 80);
        let first = out.lines().next().unwrap_or_default();
        assert_eq!(first, "   Alert Type    │ Location     ");
        assert!(!out.contains('┏'));
        assert!(!out.contains('└'));
    }

    #[test]
    fn test_title_centered() {
        let out = Table::new()
            .title("Alerts for MA")
            .column(Column::named("Alert Type").min_width(20))
            .render(&text(), 80);
        let first = out.lines().next().unwrap_or_default();
        assert_eq!(first, "     Alerts for MA");
    }

    #[test]
    fn test_fits_narrow_terminal() {
        let out = sample().render(&text(), 24);
        assert!(out.lines().all(|l| l.width() <= 24), "{}", out);
    }

    #[test]
    fn test_fill_uses_width_budget() {
        let out = Table::new()
            .column(Column::named("Information"))
            .column(Column::named("Details").width(Width::Fill))
            .row(["Headline", "Flood Warning issued"])
            .width(60)
            .render(&text(), 200);
        assert!(out.lines().all(|l| l.width() == 60), "{}", out);
    }

    #[test]
    fn test_border_style_applied_to_border_only() {
        let styler = Styler::new(OutputMode::Term);
        let out = Table::new()
            .column(Column::named("A"))
            .row(["x"])
            .border_style("bold")
            .render(&styler, 80);
        let body = out.lines().nth(3).unwrap_or_default();
        assert!(body.starts_with("\x1b[1m│"), "{:?}", body);
        assert!(body.contains(" x "), "{:?}", body);
    }

    #[test]
    fn test_style_colors_cells() {
        let styler = Styler::new(OutputMode::Term);
        let out = Table::new()
            .column(Column::named("A"))
            .row(["x"])
            .style("red")
            .render(&styler, 80);
        let body = out.lines().nth(3).unwrap_or_default();
        assert!(body.contains("\x1b[31mx"), "{:?}", body);
    }

    #[test]
    fn test_short_row_is_padded() {
        let out = Table::new()
            .column(Column::named("A"))
            .column(Column::named("B"))
            .row(["only"])
            .render(&text(), 80);
        assert_eq!(out.lines().nth(3), Some("│ only │   │"));
    }

    #[test]
    fn test_no_columns() {
        assert_eq!(Table::new().render(&text(), 80), "");
    }
}
