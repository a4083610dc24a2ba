use std::collections::HashMap;

use serde_json::Value;
use tracing::debug;

use super::{EventKind, PlotEvent};

type Listener = Box<dyn FnMut(&PlotEvent)>;

/// Ordered listener lists per event kind.
///
/// Registration is append-only; listeners run synchronously in registration
/// order. A panicking listener unwinds through `dispatch` and later listeners
/// of that dispatch do not run — hosts wanting isolation wrap their own
/// callbacks.
#[derive(Default)]
pub struct EventRegistry {
    listeners: HashMap<EventKind, Vec<Listener>>,
}

impl EventRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a listener for `kind`. Chainable during setup.
    pub fn on<F>(&mut self, kind: EventKind, listener: F) -> &mut Self
    where
        F: FnMut(&PlotEvent) + 'static,
    {
        self.listeners
            .entry(kind)
            .or_default()
            .push(Box::new(listener));
        self
    }

    #[must_use]
    pub fn listener_count(&self, kind: EventKind) -> usize {
        self.listeners.get(&kind).map_or(0, Vec::len)
    }

    /// Invokes every listener registered for `kind`, in registration order.
    pub fn dispatch(&mut self, kind: EventKind, event: &PlotEvent) {
        let Some(listeners) = self.listeners.get_mut(&kind) else {
            return;
        };
        debug!(
            event = kind.event_name(),
            listeners = listeners.len(),
            "dispatching event"
        );
        for listener in listeners {
            listener(event);
        }
    }

    /// Parses a raw payload for `kind` and dispatches the typed event.
    pub fn dispatch_raw(&mut self, kind: EventKind, raw: &Value) {
        let event = PlotEvent::parse(kind, raw);
        self.dispatch(kind, &event);
    }
}

impl std::fmt::Debug for EventRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut counts: Vec<(&'static str, usize)> = self
            .listeners
            .iter()
            .map(|(kind, listeners)| (kind.event_name(), listeners.len()))
            .collect();
        counts.sort_unstable();
        f.debug_struct("EventRegistry")
            .field("listeners", &counts)
            .finish()
    }
}
