/// Rows plus optional trailing lines (summaries, suggested commands).
#[derive(Clone, Debug, Default)]
pub struct Table {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
    pub footer: Vec<String>,
}

impl Table {
    #[must_use]
    pub fn new(headers: &[&str]) -> Self {
        Self {
            headers: headers.iter().map(ToString::to_string).collect(),
            ..Self::default()
        }
    }

    /// Two-column `field | value` table.
    #[must_use]
    pub fn key_value<K: ToString, V: ToString>(pairs: impl IntoIterator<Item = (K, V)>) -> Self {
        let mut table = Self::new(&["field", "value"]);
        for (key, value) in pairs {
            table.push_row(vec![key.to_string(), value.to_string()]);
        }
        table
    }

    pub fn push_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    pub fn push_footer(&mut self, line: impl Into<String>) {
        self.footer.push(line.into());
    }
}

#[derive(Clone, Copy, Debug)]
pub struct TableOptions {
    pub max_width: Option<usize>,
    pub color: bool,
}

const MIN_WIDTH: usize = 4;
const SEPARATOR: &str = "  ";

/// Render an aligned table. Numeric cells are right-aligned, long cells are
/// cut with `…` when `max_width` is set.
#[must_use]
pub fn render_table(table: &Table, options: TableOptions) -> String {
    if table.rows.is_empty() {
        let mut lines = vec![String::from("(no rows)")];
        lines.extend(table.footer.iter().cloned());
        return lines.join("\n");
    }

    let mut widths: Vec<usize> = table
        .headers
        .iter()
        .enumerate()
        .map(|(index, header)| {
            table
                .rows
                .iter()
                .filter_map(|row| row.get(index))
                .map(|cell| cell.chars().count())
                .chain([header.chars().count(), MIN_WIDTH])
                .max()
                .unwrap_or(MIN_WIDTH)
        })
        .collect();
    shrink_to_fit(&mut widths, &table.headers, options.max_width);

    let header_line = table
        .headers
        .iter()
        .zip(&widths)
        .map(|(header, &width)| pad(&truncate(header, width), width, false))
        .collect::<Vec<_>>()
        .join(SEPARATOR);
    let divider = "-".repeat(header_line.chars().count());

    let mut lines = vec![header_line.trim_end().to_string(), divider];
    for row in &table.rows {
        let line = widths
            .iter()
            .enumerate()
            .map(|(index, &width)| {
                let cell = truncate(row.get(index).map_or("-", String::as_str), width);
                let padded = pad(&cell, width, looks_numeric(&cell));
                if options.color {
                    colorize(&cell, padded)
                } else {
                    padded
                }
            })
            .collect::<Vec<_>>()
            .join(SEPARATOR);
        lines.push(line.trim_end().to_string());
    }

    if !table.footer.is_empty() {
        lines.push(String::new());
        lines.extend(table.footer.iter().cloned());
    }
    lines.join("\n")
}

/// Narrow the widest column one step at a time until the row fits.
fn shrink_to_fit(widths: &mut [usize], headers: &[String], max_width: Option<usize>) {
    let Some(max_width) = max_width else {
        return;
    };
    let separators = widths.len().saturating_sub(1) * SEPARATOR.len();
    while widths.iter().sum::<usize>() + separators > max_width {
        let widest = widths
            .iter()
            .enumerate()
            .filter(|(index, width)| **width > headers[*index].chars().count().max(MIN_WIDTH))
            .max_by_key(|(_, width)| **width)
            .map(|(index, _)| index);
        let Some(index) = widest else {
            break;
        };
        widths[index] -= 1;
    }
}

fn truncate(value: &str, width: usize) -> String {
    if value.chars().count() <= width {
        return value.to_string();
    }
    let mut out: String = value.chars().take(width.saturating_sub(1)).collect();
    out.push('…');
    out
}

fn pad(value: &str, width: usize, right_align: bool) -> String {
    let fill = " ".repeat(width.saturating_sub(value.chars().count()));
    if right_align {
        format!("{fill}{value}")
    } else {
        format!("{value}{fill}")
    }
}

fn looks_numeric(value: &str) -> bool {
    !value.is_empty() && value.chars().all(|ch| ch.is_ascii_digit())
}

/// Colour the padded cell by its plain value.
fn colorize(value: &str, padded: String) -> String {
    let code = match value {
        "true" | "regular" | "yes" => "32",
        "false" | "irregular" | "no" => "31",
        "legacy" | "skipped" => "33",
        _ => return padded,
    };
    format!("\u{1b}[{code}m{padded}\u{1b}[0m")
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    const PLAIN: TableOptions = TableOptions {
        max_width: None,
        color: false,
    };

    #[test]
    fn aligns_columns() {
        let mut table = Table::new(&["verb", "tense", "mismatches"]);
        table.push_row(vec!["andare".into(), "presente".into(), "4".into()]);
        table.push_row(vec!["vedere".into(), "passato_remoto".into(), "3".into()]);

        let rendered = render_table(&table, PLAIN);
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines.len(), 4);
        assert!(lines[1].chars().all(|c| c == '-'));
        assert_eq!(lines[2], "andare  presente                 4");
        assert_eq!(lines[3], "vedere  passato_remoto           3");
    }

    #[test]
    fn empty_table_keeps_footer() {
        let mut table = Table::new(&["verb"]);
        table.push_footer("0 irregular verbs");
        assert_eq!(render_table(&table, PLAIN), "(no rows)\n0 irregular verbs");
    }

    #[test]
    fn footer_follows_blank_line() {
        let mut table = Table::key_value([("verb", "andare")]);
        table.push_footer("verbo mark andare presente");
        let rendered = render_table(&table, PLAIN);
        assert!(rendered.ends_with("\n\nverbo mark andare presente"));
    }

    #[test]
    fn shrinks_widest_column_with_ellipsis() {
        let mut table = Table::new(&["verb", "forms"]);
        table.push_row(vec![
            "andare".into(),
            "vado, vai, va, andiamo, andate, vanno".into(),
        ]);
        let rendered = render_table(
            &table,
            TableOptions {
                max_width: Some(24),
                color: false,
            },
        );
        let row = rendered.lines().nth(2).unwrap();
        assert!(row.ends_with('…'));
        assert!(row.chars().count() <= 24);
    }

    #[test]
    fn colors_known_values() {
        let mut table = Table::new(&["correct"]);
        table.push_row(vec!["false".into()]);
        let rendered = render_table(
            &table,
            TableOptions {
                max_width: None,
                color: true,
            },
        );
        assert!(rendered.contains("\u{1b}[31mfalse"));
    }
}
