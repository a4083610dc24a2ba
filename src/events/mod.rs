//! Interaction-event normalization: raw surface payloads in, typed events
//! out, dispatched synchronously to registered listeners.

pub mod parse;
pub mod registry;

use serde::{Deserialize, Serialize};
use serde_json::Value;

pub use registry::EventRegistry;

/// Tag distinguishing the interaction kinds a surface can emit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventKind {
    Click,
    Hover,
    Unhover,
    Select,
    Deselect,
    LegendClick,
    LegendDoubleClick,
}

impl EventKind {
    /// Maps a surface event name to its kind.
    ///
    /// Accepts names with or without the `plotly_` prefix; `selected` and
    /// `selecting` both map to `Select`. Unknown names yield `None`.
    #[must_use]
    pub fn from_event_name(name: &str) -> Option<Self> {
        let name = name.strip_prefix("plotly_").unwrap_or(name);
        match name {
            "click" => Some(Self::Click),
            "hover" => Some(Self::Hover),
            "unhover" => Some(Self::Unhover),
            "select" | "selected" | "selecting" => Some(Self::Select),
            "deselect" => Some(Self::Deselect),
            "legendclick" => Some(Self::LegendClick),
            "legenddoubleclick" => Some(Self::LegendDoubleClick),
            _ => None,
        }
    }

    /// Canonical surface event name for this kind.
    #[must_use]
    pub fn event_name(self) -> &'static str {
        match self {
            Self::Click => "plotly_click",
            Self::Hover => "plotly_hover",
            Self::Unhover => "plotly_unhover",
            Self::Select => "plotly_selected",
            Self::Deselect => "plotly_deselect",
            Self::LegendClick => "plotly_legendclick",
            Self::LegendDoubleClick => "plotly_legenddoubleclick",
        }
    }
}

/// A single interaction datum: which trace, which point, and where.
///
/// Owned by the event that produced it and immutable once constructed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: Option<Value>,
    pub y: Option<Value>,
    /// Index of the trace in the figure's `data` array.
    pub curve_index: usize,
    /// Index of the point within that trace.
    pub point_index: usize,
    /// Z value for 3D charts.
    pub z: Option<Value>,
    /// Latitude for map charts.
    pub lat: Option<f64>,
    /// Longitude for map charts.
    pub lon: Option<f64>,
    pub text: Option<String>,
    pub custom_data: Option<Value>,
    /// Point indices for aggregate bins (histograms).
    pub point_indices: Option<Vec<usize>>,
}

/// Payload of the point-bearing click/hover/unhover kinds.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PointsEvent {
    pub points: Vec<Point>,
}

impl PointsEvent {
    #[must_use]
    pub fn x_values(&self) -> Vec<Value> {
        x_values(&self.points)
    }

    #[must_use]
    pub fn y_values(&self) -> Vec<Value> {
        y_values(&self.points)
    }

    #[must_use]
    pub fn first_point(&self) -> Option<&Point> {
        self.points.first()
    }

    #[must_use]
    pub fn point_count(&self) -> usize {
        self.points.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// Payload of selection events, complete or in progress.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SelectEvent {
    pub points: Vec<Point>,
    /// Box-selection range, passed through as delivered by the surface.
    pub range: Option<Value>,
    /// Lasso-selection coordinates, passed through as delivered.
    pub lasso_points: Option<Value>,
}

impl SelectEvent {
    #[must_use]
    pub fn x_values(&self) -> Vec<Value> {
        x_values(&self.points)
    }

    #[must_use]
    pub fn y_values(&self) -> Vec<Value> {
        y_values(&self.points)
    }

    #[must_use]
    pub fn first_point(&self) -> Option<&Point> {
        self.points.first()
    }

    #[must_use]
    pub fn point_count(&self) -> usize {
        self.points.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// Payload of legend click and double-click events.
///
/// Surfaces cannot serialize the full trace objects for legend interactions
/// (circular references), so only the simple index fields are carried.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LegendEvent {
    /// Index of the trace whose legend item was clicked.
    pub curve_index: usize,
    /// Index within a grouped legend, when the surface reports one.
    pub expanded_index: Option<usize>,
}

/// Typed interaction event, one variant per kind.
///
/// Constructed fresh from each raw payload, never mutated, dropped after
/// listener dispatch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum PlotEvent {
    Click(PointsEvent),
    Hover(PointsEvent),
    Unhover(PointsEvent),
    Select(SelectEvent),
    Deselect,
    LegendClick(LegendEvent),
    LegendDoubleClick(LegendEvent),
}

impl PlotEvent {
    #[must_use]
    pub fn kind(&self) -> EventKind {
        match self {
            Self::Click(_) => EventKind::Click,
            Self::Hover(_) => EventKind::Hover,
            Self::Unhover(_) => EventKind::Unhover,
            Self::Select(_) => EventKind::Select,
            Self::Deselect => EventKind::Deselect,
            Self::LegendClick(_) => EventKind::LegendClick,
            Self::LegendDoubleClick(_) => EventKind::LegendDoubleClick,
        }
    }

    /// Points carried by this event, when the variant has any.
    #[must_use]
    pub fn points(&self) -> Option<&[Point]> {
        match self {
            Self::Click(event) | Self::Hover(event) | Self::Unhover(event) => {
                Some(event.points.as_slice())
            }
            Self::Select(event) => Some(event.points.as_slice()),
            Self::Deselect | Self::LegendClick(_) | Self::LegendDoubleClick(_) => None,
        }
    }
}

fn x_values(points: &[Point]) -> Vec<Value> {
    points
        .iter()
        .map(|p| p.x.clone().unwrap_or(Value::Null))
        .collect()
}

fn y_values(points: &[Point]) -> Vec<Value> {
    points
        .iter()
        .map(|p| p.y.clone().unwrap_or(Value::Null))
        .collect()
}
