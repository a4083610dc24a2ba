//! Figure building: tabular data in, chart-description document out.

use serde_json::{Map, Value, json};
use tracing::debug;

use crate::core::{ChartDescription, ChartKind, Table, deep_merge_maps};
use crate::error::{PlotError, PlotResult};

/// What to build: x column, y columns (one trace each) and the trace kind,
/// plus optional layout/name/style overrides.
#[derive(Debug, Clone, PartialEq)]
pub struct FigureRequest {
    x_key: String,
    y_keys: Vec<String>,
    kind: ChartKind,
    layout: Option<Map<String, Value>>,
    trace_names: Option<Vec<String>>,
    trace_style: Option<Map<String, Value>>,
}

impl FigureRequest {
    #[must_use]
    pub fn new<S: Into<String>>(
        x_key: impl Into<String>,
        y_keys: impl IntoIterator<Item = S>,
        kind: ChartKind,
    ) -> Self {
        Self {
            x_key: x_key.into(),
            y_keys: y_keys.into_iter().map(Into::into).collect(),
            kind,
            layout: None,
            trace_names: None,
            trace_style: None,
        }
    }

    /// Layout properties deep-merged over the defaults, request winning.
    #[must_use]
    pub fn with_layout(mut self, layout: Map<String, Value>) -> Self {
        self.layout = Some(layout);
        self
    }

    /// Display names for the traces; must match the y-column count.
    /// Defaults to the y-column names.
    #[must_use]
    pub fn with_trace_names<S: Into<String>>(
        mut self,
        names: impl IntoIterator<Item = S>,
    ) -> Self {
        self.trace_names = Some(names.into_iter().map(Into::into).collect());
        self
    }

    /// Style overrides applied identically to every trace.
    #[must_use]
    pub fn with_trace_style(mut self, style: Map<String, Value>) -> Self {
        self.trace_style = Some(style);
        self
    }

    #[must_use]
    pub fn kind(&self) -> ChartKind {
        self.kind
    }
}

/// Converts a [`Table`] into a chart-description document.
///
/// One trace per y column, in request order, all sharing the x column.
/// Pure: neither input is mutated and repeated calls yield identical output.
pub fn build_figure(table: &Table, request: &FigureRequest) -> PlotResult<ChartDescription> {
    let missing: Vec<String> = std::iter::once(&request.x_key)
        .chain(request.y_keys.iter())
        .filter(|key| !table.has_column(key))
        .cloned()
        .collect();
    if !missing.is_empty() {
        return Err(PlotError::MissingColumn { columns: missing });
    }

    let trace_names: Vec<String> = match &request.trace_names {
        Some(names) => {
            if names.len() != request.y_keys.len() {
                return Err(PlotError::LengthMismatch {
                    expected: request.y_keys.len(),
                    actual: names.len(),
                });
            }
            names.clone()
        }
        None => request.y_keys.clone(),
    };

    // Column presence was validated above.
    let x_values: Vec<Value> = table.column(&request.x_key).unwrap_or_default().to_vec();

    let mut traces = Vec::with_capacity(request.y_keys.len());
    for (y_key, name) in request.y_keys.iter().zip(&trace_names) {
        let y_values = table.column(y_key).unwrap_or_default().to_vec();
        let mut trace = request.kind.base_trace(x_values.clone(), y_values, name);
        if let Some(style) = &request.trace_style {
            trace.apply_overrides(style);
        }
        traces.push(trace);
    }

    let mut layout = default_layout();
    if request.kind == ChartKind::Bar && traces.len() > 1 {
        layout.insert("barmode".to_string(), json!("group"));
    }
    if let Some(overrides) = &request.layout {
        layout = deep_merge_maps(&layout, overrides);
    }

    debug!(
        kind = request.kind.as_str(),
        traces = traces.len(),
        rows = table.row_count(),
        "built figure"
    );

    Ok(ChartDescription::new(traces, layout))
}

fn default_layout() -> Map<String, Value> {
    let mut layout = Map::new();
    layout.insert(
        "margin".to_string(),
        json!({"l": 40, "r": 20, "t": 40, "b": 40}),
    );
    layout
}
