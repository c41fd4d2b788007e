use std::{collections::HashMap, fmt::Write};

use crate::analyzer::analyzer::Row;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Summary {
    pub total: usize,
    pub valid: usize,
    pub invalid: usize,
    /// Sorted by descending count, then by name.
    pub by_category: Vec<(&'static str, usize)>,
}

impl Summary {
    pub fn from_rows(rows: &[Row]) -> Self {
        let total = rows.len();
        let valid = rows.iter().filter(|row| row.valid).count();

        let mut counts: HashMap<&'static str, usize> = HashMap::new();
        for row in rows {
            *counts.entry(row.category).or_insert(0) += 1;
        }

        let mut by_category = counts.into_iter().collect::<Vec<_>>();
        by_category.sort_by(|(a_name, a_count), (b_name, b_count)| {
            b_count.cmp(a_count).then_with(|| a_name.cmp(b_name))
        });

        Summary {
            total,
            valid,
            invalid: total - valid,
            by_category,
        }
    }

    pub fn count_of(&self, category: &str) -> usize {
        self.by_category
            .iter()
            .find(|(name, _)| *name == category)
            .map(|(_, count)| *count)
            .unwrap_or(0)
    }
}

pub fn render_summary(summary: &Summary) -> String {
    let mut out = String::new();

    let _ = writeln!(out);
    let _ = writeln!(out, "Resumen:");
    let _ = writeln!(out, "  Total tokens: {}", summary.total);
    let _ = writeln!(out, "  Válidos: {}  |  Inválidos: {}", summary.valid, summary.invalid);

    for (name, count) in &summary.by_category {
        let _ = writeln!(out, "  {}: {}", name, count);
    }

    out
}
