use serde::Serialize;

use crate::cli::OutputFormat;
use crate::ui;

pub mod table;

pub use table::Table;

/// Render a response: pretty JSON, single-line JSON, or the table built by
/// `table` (only called for the table format).
pub fn render<T: Serialize>(
    value: &T,
    format: OutputFormat,
    table: impl FnOnce(&T) -> Table,
) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(value)?),
        OutputFormat::Raw => Ok(serde_json::to_string(value)?),
        OutputFormat::Table => {
            let prefs = ui::prefs();
            let options = table::TableOptions {
                max_width: prefs.term_width,
                color: prefs.table_color,
            };
            Ok(table::render_table(&table(value), options))
        }
    }
}

/// Print a response in the requested format.
pub fn output<T: Serialize>(
    value: &T,
    format: OutputFormat,
    table: impl FnOnce(&T) -> Table,
) -> anyhow::Result<()> {
    let rendered = render(value, format, table)?;
    println!("{rendered}");
    Ok(())
}

/// Join forms for a table cell, keeping at most `limit` of them.
#[must_use]
pub fn preview(forms: &[String], limit: usize) -> String {
    let shown = forms.iter().take(limit).cloned().collect::<Vec<_>>().join(", ");
    if forms.len() > limit {
        format!("{shown}, …")
    } else {
        shown
    }
}

#[cfg(test)]
mod tests {
    use serde::Serialize;

    use super::{Table, preview, render};
    use crate::cli::OutputFormat;

    #[derive(Serialize)]
    struct Example {
        verb: &'static str,
        count: u32,
    }

    fn example_table(value: &Example) -> Table {
        Table::key_value([("verb", value.verb.to_string()), ("count", value.count.to_string())])
    }

    #[test]
    fn json_render_is_valid_json() {
        let value = Example { verb: "andare", count: 4 };
        let out = render(&value, OutputFormat::Json, example_table).expect("json render");
        let parsed: serde_json::Value = serde_json::from_str(&out).expect("json should parse");
        assert_eq!(parsed["verb"], "andare");
        assert_eq!(parsed["count"], 4);
    }

    #[test]
    fn raw_render_is_single_line_json() {
        let value = Example { verb: "andare", count: 4 };
        let out = render(&value, OutputFormat::Raw, example_table).expect("raw render");
        assert!(!out.contains('\n'));
        assert!(serde_json::from_str::<serde_json::Value>(&out).is_ok());
    }

    #[test]
    fn table_render_uses_table_builder() {
        let value = Example { verb: "andare", count: 4 };
        let out = render(&value, OutputFormat::Table, example_table).expect("table render");
        assert!(out.lines().next().is_some_and(|line| line.contains("field")));
        assert!(out.contains("andare"));
    }

    #[test]
    fn preview_truncates_forms() {
        let forms: Vec<String> = ["vado", "vai", "va", "andiamo"]
            .iter()
            .map(ToString::to_string)
            .collect();
        assert_eq!(preview(&forms, 3), "vado, vai, va, …");
        assert_eq!(preview(&forms, 6), "vado, vai, va, andiamo");
    }
}
