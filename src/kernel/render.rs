//! Result rendering
//!
//! Every output carries an HTML form for notebook hosts and a plain-text
//! form for terminals.

use std::fmt::Write;

use crate::core::Status;

/// Statement reference shown by `help`: (description, example)
pub const HELP_ENTRIES: &[(&str, &str)] = &[
    ("Connect to a server", "milvus://127.0.0.1:19530"),
    (
        "Create a collection",
        "create collection test01 where dimension=128 and index_file_size=1024 and metric_type=L2",
    ),
    ("Drop a collection", "drop collection test01"),
    ("Show all collections", "list collections"),
    (
        "Create a partition",
        "create partition test01 where partition_tag=tag01",
    ),
    (
        "Drop a partition",
        "drop partition test01 where partition_tag=tag01",
    ),
    ("Show all partitions in a collection", "list partitions test01"),
    (
        "Create an index",
        "create index test01 where index_type=FLAT and nlist=4096",
    ),
    ("Removes an index", "drop index test01"),
    ("Compact a collection", "compact test01"),
    ("Flush collections", "flush test01, test02"),
];

/// A rendered result
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Output {
    pub html: String,
    pub plain: String,
}

impl Output {
    /// Output for a scalar message
    pub fn text(message: impl Into<String>) -> Self {
        let plain = message.into();
        Self {
            html: escape_html(&plain),
            plain,
        }
    }
}

/// Render an operation status as its message
pub fn status(status: &Status) -> Output {
    Output::text(status.message.clone())
}

/// Render a list of names
pub fn names(names: &[String]) -> Output {
    Output::text(format!("{:?}", names))
}

/// Render the `help` reference table
pub fn help() -> Output {
    let rows: Vec<Vec<&str>> = HELP_ENTRIES
        .iter()
        .map(|(description, example)| vec![*description, *example])
        .collect();
    table(&["description", "milvus sql"], &rows)
}

/// Render rows as a table with a leading row-index column
pub fn table(headers: &[&str], rows: &[Vec<&str>]) -> Output {
    Output {
        html: html_table(headers, rows),
        plain: plain_table(headers, rows),
    }
}

fn html_table(headers: &[&str], rows: &[Vec<&str>]) -> String {
    let mut html = String::from("<table border=\"1\" class=\"dataframe\">\n");
    html.push_str("  <thead>\n    <tr style=\"text-align: right;\">\n      <th></th>\n");
    for header in headers {
        let _ = writeln!(html, "      <th>{}</th>", escape_html(header));
    }
    html.push_str("    </tr>\n  </thead>\n  <tbody>\n");
    for (i, row) in rows.iter().enumerate() {
        html.push_str("    <tr>\n");
        let _ = writeln!(html, "      <th>{}</th>", i);
        for cell in row {
            let _ = writeln!(html, "      <td>{}</td>", escape_html(cell));
        }
        html.push_str("    </tr>\n");
    }
    html.push_str("  </tbody>\n</table>");
    html
}

fn plain_table(headers: &[&str], rows: &[Vec<&str>]) -> String {
    let index_width = rows.len().saturating_sub(1).to_string().len();
    let widths: Vec<usize> = headers
        .iter()
        .enumerate()
        .map(|(col, header)| {
            rows.iter()
                .filter_map(|row| row.get(col))
                .map(|cell| cell.chars().count())
                .chain(std::iter::once(header.chars().count()))
                .max()
                .unwrap_or(0)
        })
        .collect();

    let mut lines = Vec::with_capacity(rows.len() + 1);
    let mut line = " ".repeat(index_width);
    for (header, width) in headers.iter().zip(&widths) {
        let _ = write!(line, "  {:<width$}", header, width = width);
    }
    lines.push(line.trim_end().to_string());

    for (i, row) in rows.iter().enumerate() {
        let mut line = format!("{:>width$}", i, width = index_width);
        for (cell, width) in row.iter().zip(&widths) {
            let _ = write!(line, "  {:<width$}", cell, width = width);
        }
        lines.push(line.trim_end().to_string());
    }

    lines.join("\n")
}

/// Escape text for inclusion in HTML
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_render_as_list() {
        let output = names(&["test01".to_string(), "test02".to_string()]);
        assert_eq!(output.plain, r#"["test01", "test02"]"#);
        assert_eq!(output.html, "[&quot;test01&quot;, &quot;test02&quot;]");
        assert_eq!(names(&[]).plain, "[]");
    }

    #[test]
    fn test_status_renders_message() {
        let output = status(&Status::failure(3, "collection <c1> not found"));
        assert_eq!(output.plain, "collection <c1> not found");
        assert_eq!(output.html, "collection &lt;c1&gt; not found");
    }

    #[test]
    fn test_html_table() {
        let output = table(&["a", "b"], &[vec!["1", "x & y"]]);
        assert!(output.html.starts_with("<table border=\"1\" class=\"dataframe\">"));
        assert!(output.html.contains("<th>a</th>"));
        assert!(output.html.contains("<th>0</th>"));
        assert!(output.html.contains("<td>x &amp; y</td>"));
        assert!(output.html.ends_with("</table>"));
    }

    #[test]
    fn test_plain_table_alignment() {
        let output = table(&["name", "kind"], &[vec!["c1", "collection"], vec!["longer", "p"]]);
        assert_eq!(
            output.plain,
            "   name    kind\n0  c1      collection\n1  longer  p"
        );
    }

    #[test]
    fn test_help_lists_every_example() {
        let output = help();
        assert_eq!(output.html.matches("<tr>").count(), HELP_ENTRIES.len());
        for (_, example) in HELP_ENTRIES {
            assert!(output.plain.contains(example));
        }
    }
}
