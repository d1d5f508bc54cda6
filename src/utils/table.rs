//! Table rendering utilities for CLI outputs.

pub struct Column {
    pub header: String,
    pub width: usize,
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

    /// Header, a dashed rule, then one line per row. Missing cells render empty.
    pub fn render(&self) -> String {
        let mut out = String::new();

        let widths: Vec<usize> = self.columns.iter().map(|c| c.width).collect();

        let header: Vec<String> = self.columns.iter().map(|c| c.header.clone()).collect();
        out.push_str(&render_line(&header, &widths));

        let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
        out.push_str(&render_line(&rule, &widths));

        for row in &self.rows {
            out.push_str(&render_line(row, &widths));
        }

        out
    }
}

fn render_line(cells: &[String], widths: &[usize]) -> String {
    let line = widths
        .iter()
        .enumerate()
        .map(|(i, w)| {
            let cell = cells.get(i).map(String::as_str).unwrap_or("");
            format!("{:<width$}", cell, width = *w)
        })
        .collect::<Vec<_>>()
        .join(" | ");
    format!("{}\n", line.trim_end())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_header_rule_and_rows() {
        let mut t = Table::new(vec![
            Column {
                header: "A".into(),
                width: 3,
            },
            Column {
                header: "B".into(),
                width: 2,
            },
        ]);
        t.add_row(vec!["x".into(), "yy".into()]);
        t.add_row(vec!["zzz".into()]);

        assert_eq!(t.render(), "A   | B\n--- | --\nx   | yy\nzzz |\n");
    }
}
