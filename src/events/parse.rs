//! Total parsing of raw interaction payloads.
//!
//! Raw payloads come from an external rendering surface whose shape is not
//! fully controlled, so parsing never fails: absent or wrongly-typed fields
//! degrade to defaults/absent instead of erroring.

use serde_json::Value;

use super::{EventKind, LegendEvent, PlotEvent, Point, PointsEvent, SelectEvent};

impl Point {
    /// Parses a single point from a raw payload entry.
    ///
    /// Defaults: `curve_index` and `point_index` 0, every optional field
    /// absent. Non-object input yields an all-default point.
    #[must_use]
    pub fn from_raw(raw: &Value) -> Self {
        Self {
            x: opt_value(raw, "x"),
            y: opt_value(raw, "y"),
            curve_index: opt_index(raw, "curveNumber").unwrap_or(0),
            point_index: opt_index(raw, "pointNumber").unwrap_or(0),
            z: opt_value(raw, "z"),
            lat: raw.get("lat").and_then(Value::as_f64),
            lon: raw.get("lon").and_then(Value::as_f64),
            text: raw
                .get("text")
                .and_then(Value::as_str)
                .map(str::to_string),
            custom_data: opt_value(raw, "customdata"),
            point_indices: raw.get("pointNumbers").and_then(opt_index_list),
        }
    }
}

impl PointsEvent {
    #[must_use]
    pub fn from_raw(raw: &Value) -> Self {
        Self {
            points: parse_points(raw),
        }
    }
}

impl SelectEvent {
    #[must_use]
    pub fn from_raw(raw: &Value) -> Self {
        Self {
            points: parse_points(raw),
            range: opt_value(raw, "range"),
            lasso_points: opt_value(raw, "lassoPoints"),
        }
    }
}

impl LegendEvent {
    #[must_use]
    pub fn from_raw(raw: &Value) -> Self {
        Self {
            curve_index: opt_index(raw, "curveNumber").unwrap_or(0),
            expanded_index: opt_index(raw, "expandedIndex"),
        }
    }
}

impl PlotEvent {
    /// Parses a raw payload into the typed event for `kind`. Total per kind.
    #[must_use]
    pub fn parse(kind: EventKind, raw: &Value) -> Self {
        match kind {
            EventKind::Click => Self::Click(PointsEvent::from_raw(raw)),
            EventKind::Hover => Self::Hover(PointsEvent::from_raw(raw)),
            EventKind::Unhover => Self::Unhover(PointsEvent::from_raw(raw)),
            EventKind::Select => Self::Select(SelectEvent::from_raw(raw)),
            EventKind::Deselect => Self::Deselect,
            EventKind::LegendClick => Self::LegendClick(LegendEvent::from_raw(raw)),
            EventKind::LegendDoubleClick => Self::LegendDoubleClick(LegendEvent::from_raw(raw)),
        }
    }
}

fn parse_points(raw: &Value) -> Vec<Point> {
    match raw.get("points").and_then(Value::as_array) {
        Some(entries) => entries.iter().map(Point::from_raw).collect(),
        None => Vec::new(),
    }
}

fn opt_value(raw: &Value, key: &str) -> Option<Value> {
    raw.get(key).filter(|v| !v.is_null()).cloned()
}

fn opt_index(raw: &Value, key: &str) -> Option<usize> {
    raw.get(key).and_then(Value::as_u64).map(|v| v as usize)
}

fn opt_index_list(raw: &Value) -> Option<Vec<usize>> {
    raw.as_array().map(|entries| {
        entries
            .iter()
            .filter_map(|v| v.as_u64().map(|n| n as usize))
            .collect()
    })
}
