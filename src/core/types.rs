use serde::{Deserialize, Serialize};
use serde_json::{Map, Value, json};

use crate::core::merge::deep_merge;
use crate::error::{PlotError, PlotResult};

/// Supported trace kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    Bar,
    Line,
    Scatter,
}

impl ChartKind {
    /// Parses a kind name, failing with `UnsupportedKind` on anything else.
    pub fn parse(name: &str) -> PlotResult<Self> {
        match name {
            "bar" => Ok(Self::Bar),
            "line" => Ok(Self::Line),
            "scatter" => Ok(Self::Scatter),
            other => Err(PlotError::UnsupportedKind(other.to_string())),
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Bar => "bar",
            Self::Line => "line",
            Self::Scatter => "scatter",
        }
    }

    /// Builds a trace of this kind with its default styling.
    ///
    /// Bars render categorical; lines connect without markers; scatter shows
    /// markers only at a fixed default size.
    #[must_use]
    pub fn base_trace(self, x: Vec<Value>, y: Vec<Value>, name: impl Into<String>) -> Trace {
        let mut style = Map::new();
        match self {
            Self::Bar => {
                style.insert("type".to_string(), json!("bar"));
            }
            Self::Line => {
                style.insert("type".to_string(), json!("scatter"));
                style.insert("mode".to_string(), json!("lines"));
                style.insert("line".to_string(), json!({"width": 2}));
            }
            Self::Scatter => {
                style.insert("type".to_string(), json!("scatter"));
                style.insert("mode".to_string(), json!("markers"));
                style.insert("marker".to_string(), json!({"size": 10}));
            }
        }

        Trace {
            x,
            y,
            name: name.into(),
            style,
        }
    }
}

/// One visual series within a [`ChartDescription`].
///
/// `style` holds the kind-specific fields (`type`, `mode`, `line`, `marker`,
/// ...) and is flattened during serialization so the trace lands on the wire
/// as one flat object, the shape rendering surfaces expect.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Trace {
    pub x: Vec<Value>,
    pub y: Vec<Value>,
    pub name: String,
    #[serde(flatten)]
    pub style: Map<String, Value>,
}

impl Trace {
    /// Merges an override map into this trace, override winning.
    ///
    /// `x`, `y` and `name` are replaced only when the override value has the
    /// matching shape (array, array, string); every other key deep-merges
    /// into `style`. Total: malformed overrides for the typed fields are
    /// ignored rather than erroring.
    pub fn apply_overrides(&mut self, overrides: &Map<String, Value>) {
        for (key, value) in overrides {
            match (key.as_str(), value) {
                ("x", Value::Array(items)) => self.x = items.clone(),
                ("y", Value::Array(items)) => self.y = items.clone(),
                ("name", Value::String(name)) => self.name = name.clone(),
                ("x" | "y" | "name", _) => {}
                (_, value) => {
                    let merged = match self.style.get(key) {
                        Some(existing) => deep_merge(existing, value),
                        None => value.clone(),
                    };
                    self.style.insert(key.clone(), merged);
                }
            }
        }
    }
}

/// The `{data, layout}` document handed to a rendering surface.
///
/// Trace order in `data` is stacking and legend order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChartDescription {
    pub data: Vec<Trace>,
    pub layout: Map<String, Value>,
}

impl ChartDescription {
    #[must_use]
    pub fn new(data: Vec<Trace>, layout: Map<String, Value>) -> Self {
        Self { data, layout }
    }
}
