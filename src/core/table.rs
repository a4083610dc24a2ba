use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Column-major tabular dataset consumed by the figure builder.
///
/// Columns keep first-seen order and always have equal length. Hosts usually
/// build a `Table` from whatever loader they own (CSV reader, database rows)
/// and hand it to [`build_figure`](crate::figure::build_figure).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Table {
    columns: IndexMap<String, Vec<Value>>,
}

impl Table {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a table from row maps.
    ///
    /// The column set is the union of all row keys; cells missing from a row
    /// become `Value::Null` so every column ends up `row_count` long.
    #[must_use]
    pub fn from_rows<I>(rows: I) -> Self
    where
        I: IntoIterator<Item = Map<String, Value>>,
    {
        let rows: Vec<Map<String, Value>> = rows.into_iter().collect();

        let mut columns: IndexMap<String, Vec<Value>> = IndexMap::new();
        for row in &rows {
            for key in row.keys() {
                columns
                    .entry(key.clone())
                    .or_insert_with(|| Vec::with_capacity(rows.len()));
            }
        }

        for row in &rows {
            for (name, values) in &mut columns {
                values.push(row.get(name).cloned().unwrap_or(Value::Null));
            }
        }

        Self { columns }
    }

    /// Adds a column, replacing any existing column of the same name.
    ///
    /// The caller keeps column lengths equal; `from_rows` does this
    /// automatically.
    #[must_use]
    pub fn with_column(mut self, name: impl Into<String>, values: Vec<Value>) -> Self {
        self.columns.insert(name.into(), values);
        self
    }

    #[must_use]
    pub fn column(&self, name: &str) -> Option<&[Value]> {
        self.columns.get(name).map(Vec::as_slice)
    }

    #[must_use]
    pub fn has_column(&self, name: &str) -> bool {
        self.columns.contains_key(name)
    }

    pub fn column_names(&self) -> impl Iterator<Item = &str> {
        self.columns.keys().map(String::as_str)
    }

    #[must_use]
    pub fn row_count(&self) -> usize {
        self.columns.values().next().map_or(0, Vec::len)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.row_count() == 0
    }
}
