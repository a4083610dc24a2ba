//! Dark/light theming for chart-description documents.
//!
//! The dark-mode flag lives with the host (session storage, a toggle widget,
//! ...), so the engine reads it through [`DarkModeSource`] on every query
//! instead of caching it. One engine instance stays correct across mode
//! toggles without any invalidation hook.

use serde_json::{Map, Value, json};

use crate::core::{ChartDescription, ChartKind, Trace, deep_merge_maps};

/// Immutable color configuration for a theme.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    pub dark_background: String,
    pub light_background: String,
    pub primary_color: String,
    pub secondary_color: String,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            dark_background: "#121212".to_string(),
            light_background: "white".to_string(),
            primary_color: "#22c55e".to_string(),
            secondary_color: "#3b82f6".to_string(),
        }
    }
}

/// Host-owned dark-mode flag, read at query time.
pub trait DarkModeSource {
    fn is_dark_active(&self) -> bool;
}

impl<F: Fn() -> bool> DarkModeSource for F {
    fn is_dark_active(&self) -> bool {
        self()
    }
}

/// Colors derived from a [`Theme`] and the current dark-mode flag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeColors {
    pub background: String,
    pub text: String,
    pub grid: String,
}

/// Optional titles forced onto a decorated document.
///
/// A title set here wins over anything the figure's own layout carries.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TitleOptions {
    pub title: Option<String>,
    pub x_title: Option<String>,
    pub y_title: Option<String>,
}

impl TitleOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    #[must_use]
    pub fn with_x_title(mut self, title: impl Into<String>) -> Self {
        self.x_title = Some(title.into());
        self
    }

    #[must_use]
    pub fn with_y_title(mut self, title: impl Into<String>) -> Self {
        self.y_title = Some(title.into());
        self
    }
}

/// Theme-aware styling over chart-description documents.
pub struct ThemeEngine<S: DarkModeSource> {
    theme: Theme,
    dark_mode: S,
}

impl<S: DarkModeSource> ThemeEngine<S> {
    #[must_use]
    pub fn new(theme: Theme, dark_mode: S) -> Self {
        Self { theme, dark_mode }
    }

    #[must_use]
    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    #[must_use]
    pub fn is_dark_active(&self) -> bool {
        self.dark_mode.is_dark_active()
    }

    /// Current theme colors. Pure function of the theme config and the flag.
    #[must_use]
    pub fn colors(&self) -> ThemeColors {
        let is_dark = self.is_dark_active();
        let background = if is_dark {
            self.theme.dark_background.clone()
        } else {
            self.theme.light_background.clone()
        };
        let text = if is_dark { "white" } else { "black" };
        let grid = if is_dark {
            "rgba(255, 255, 255, 0.1)"
        } else {
            "rgba(0, 0, 0, 0.1)"
        };
        ThemeColors {
            background,
            text: text.to_string(),
            grid: grid.to_string(),
        }
    }

    /// Layout fragment carrying the theme styling for plot area, paper, font
    /// and both axes. Exposed so hosts can theme documents built elsewhere.
    #[must_use]
    pub fn layout_fragment(&self) -> Map<String, Value> {
        let colors = self.colors();
        let axis = json!({
            "gridcolor": colors.grid,
            "linecolor": colors.text,
            "zerolinecolor": colors.grid,
        });

        let mut fragment = Map::new();
        fragment.insert("plot_bgcolor".to_string(), json!(colors.background));
        fragment.insert("paper_bgcolor".to_string(), json!(colors.background));
        fragment.insert("font".to_string(), json!({"color": colors.text}));
        fragment.insert("xaxis".to_string(), axis.clone());
        fragment.insert("yaxis".to_string(), axis);
        fragment
    }

    /// Applies theme styling to a document, returning a new one.
    ///
    /// The theme fragment is the merge base and the figure's own layout the
    /// overlay, so figure-provided values win on conflicts. Titles passed in
    /// `titles` are re-applied afterwards and always win. Trace data passes
    /// through unchanged.
    #[must_use]
    pub fn decorate(&self, figure: &ChartDescription, titles: &TitleOptions) -> ChartDescription {
        let mut layout = deep_merge_maps(&self.layout_fragment(), &figure.layout);

        if let Some(title) = &titles.title {
            layout.insert("title".to_string(), json!(title));
        }
        if let Some(x_title) = &titles.x_title {
            set_axis_title(&mut layout, "xaxis", x_title);
        }
        if let Some(y_title) = &titles.y_title {
            set_axis_title(&mut layout, "yaxis", y_title);
        }

        ChartDescription::new(figure.data.clone(), layout)
    }

    /// Builds a trace of the requested kind in theme colors.
    ///
    /// Line and scatter traces use the primary color, bar traces the
    /// secondary color, unless `overrides` supplies its own.
    #[must_use]
    pub fn styled_trace(
        &self,
        kind: ChartKind,
        x: Vec<Value>,
        y: Vec<Value>,
        name: impl Into<String>,
        overrides: Option<&Map<String, Value>>,
    ) -> Trace {
        let mut trace = kind.base_trace(x, y, name);

        let mut color = Map::new();
        match kind {
            ChartKind::Bar => {
                color.insert(
                    "marker".to_string(),
                    json!({"color": self.theme.secondary_color}),
                );
            }
            ChartKind::Line => {
                color.insert(
                    "line".to_string(),
                    json!({"color": self.theme.primary_color}),
                );
            }
            ChartKind::Scatter => {
                color.insert(
                    "marker".to_string(),
                    json!({"color": self.theme.primary_color}),
                );
            }
        }
        trace.apply_overrides(&color);

        if let Some(overrides) = overrides {
            trace.apply_overrides(overrides);
        }
        trace
    }
}

fn set_axis_title(layout: &mut Map<String, Value>, axis: &str, title: &str) {
    match layout.get_mut(axis) {
        Some(Value::Object(axis_map)) => {
            axis_map.insert("title".to_string(), json!(title));
        }
        _ => {
            layout.insert(axis.to_string(), json!({"title": title}));
        }
    }
}
