//! plotdoc: framework-agnostic chart-description documents.
//!
//! This crate builds Plotly-JS-shaped `{data, layout}` documents from tabular
//! data, themes them for dark/light mode, and normalizes raw chart-interaction
//! payloads into typed events dispatched to registered listeners. Rendering,
//! transport and storage stay with the host surface.

pub mod core;
pub mod error;
pub mod events;
pub mod figure;
pub mod telemetry;
pub mod theme;

pub use crate::core::{ChartDescription, ChartKind, Table, Trace, deep_merge, deep_merge_maps};
pub use error::{PlotError, PlotResult};
pub use events::{EventKind, EventRegistry, PlotEvent, Point};
pub use figure::{FigureRequest, build_figure};
pub use theme::{DarkModeSource, Theme, ThemeColors, ThemeEngine, TitleOptions};
