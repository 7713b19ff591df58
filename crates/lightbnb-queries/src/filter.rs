//! Parameterized filter composition.
//!
//! [`FilterBuilder`] collects `(predicate, parameter)` pairs in insertion
//! order. Predicates are written with a single `?` placeholder, which the
//! builder rewrites to a numbered placeholder (`?1`, `?2`, ...) matching the
//! parameter's position. Row predicates render as a `WHERE` clause and
//! aggregate predicates as a `HAVING` clause; within each, predicates are
//! joined with `AND`. Nothing is interpolated into the SQL text.

use rusqlite::types::ToSql;

/// Ordered collection of SQL predicates and their bound parameters.
#[derive(Default)]
pub struct FilterBuilder {
    row_predicates: Vec<String>,
    aggregate_predicates: Vec<String>,
    params: Vec<Box<dyn ToSql>>,
}

impl FilterBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Binds `value` and returns its numbered placeholder.
    pub fn bind(&mut self, value: impl ToSql + 'static) -> String {
        self.params.push(Box::new(value));
        format!("?{}", self.params.len())
    }

    /// Adds a row-level predicate (rendered under `WHERE`).
    pub fn filter(&mut self, predicate: &str, value: impl ToSql + 'static) -> &mut Self {
        let placeholder = self.bind(value);
        self.row_predicates
            .push(predicate.replacen('?', &placeholder, 1));
        self
    }

    /// Adds an aggregate predicate (rendered under `HAVING`).
    pub fn having(&mut self, predicate: &str, value: impl ToSql + 'static) -> &mut Self {
        let placeholder = self.bind(value);
        self.aggregate_predicates
            .push(predicate.replacen('?', &placeholder, 1));
        self
    }

    /// `WHERE a AND b ...`, or an empty string when there are no row predicates.
    pub fn where_clause(&self) -> String {
        render("WHERE", &self.row_predicates)
    }

    /// `HAVING a AND b ...`, or an empty string when there are no aggregate predicates.
    pub fn having_clause(&self) -> String {
        render("HAVING", &self.aggregate_predicates)
    }

    /// Number of bound parameters so far.
    pub fn len(&self) -> usize {
        self.params.len()
    }

    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    /// Bound parameters in placeholder order.
    pub fn params(&self) -> Vec<&dyn ToSql> {
        self.params.iter().map(|p| &**p).collect()
    }
}

fn render(keyword: &str, predicates: &[String]) -> String {
    if predicates.is_empty() {
        String::new()
    } else {
        format!("{keyword} {}", predicates.join(" AND "))
    }
}

/// Escapes `%`, `_` and `\` so `needle` matches literally inside a
/// `LIKE ... ESCAPE '\'` pattern, then wraps it for substring matching.
pub(crate) fn contains_pattern(needle: &str) -> String {
    let mut pattern = String::with_capacity(needle.len() + 2);
    pattern.push('%');
    for ch in needle.chars() {
        if matches!(ch, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(ch);
    }
    pattern.push('%');
    pattern
}
