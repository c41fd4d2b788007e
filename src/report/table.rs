use std::fmt::Write;

use crate::analyzer::analyzer::Row;

const LINE_HEADER: &str = "Línea";
const TOKEN_HEADER: &str = "Token";
const CATEGORY_HEADER: &str = "Tipo";
const VALID_HEADER: &str = "¿Válida?";

const ELLIPSIS: &str = "...";

struct Widths {
    line: usize,
    token: usize,
    category: usize,
    valid: usize,
}

impl Widths {
    fn new() -> Self {
        Widths {
            line: width(LINE_HEADER, 5),
            token: width(TOKEN_HEADER, 30),
            category: width(CATEGORY_HEADER, 18),
            valid: width(VALID_HEADER, 7),
        }
    }
}

fn width(header: &str, minimum: usize) -> usize {
    header.chars().count().max(minimum)
}

/// Shortens `token` to `max` characters, ending it with `...` when cut.
pub fn truncate(token: &str, max: usize) -> String {
    if token.chars().count() <= max {
        return token.to_string();
    }

    let kept = max.saturating_sub(ELLIPSIS.len());
    let mut shown = token.chars().take(kept).collect::<String>();
    shown.push_str(ELLIPSIS);
    shown
}

pub fn validity_label(valid: bool) -> &'static str {
    if valid {
        "Sí"
    } else {
        "No"
    }
}

/// Renders the rows as a table with one line per token.
pub fn render_table(rows: &[Row]) -> String {
    let w = Widths::new();
    let mut out = String::new();

    let header = format!(
        "{:<w1$} | {:<w2$} | {:<w3$} | {:<w4$}",
        LINE_HEADER,
        TOKEN_HEADER,
        CATEGORY_HEADER,
        VALID_HEADER,
        w1 = w.line,
        w2 = w.token,
        w3 = w.category,
        w4 = w.valid,
    );
    let separator = "-".repeat(header.chars().count());

    // Writing into a String cannot fail.
    let _ = writeln!(out, "{}", header);
    let _ = writeln!(out, "{}", separator);

    for row in rows {
        let _ = writeln!(
            out,
            "{:<w1$} | {:<w2$} | {:<w3$} | {:<w4$}",
            row.line,
            truncate(&row.token, w.token),
            row.category,
            validity_label(row.valid),
            w1 = w.line,
            w2 = w.token,
            w3 = w.category,
            w4 = w.valid,
        );
    }

    out
}
