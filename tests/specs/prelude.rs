//! Shared helpers for specs

pub use serde_json::{json, Value};
pub use std::sync::{Arc, Mutex};
pub use village_events::{event, Event, EventName, EventPattern, Signal, VillageEvent};
pub use village_runtime::{
    FakeRuntime, PendingCall, RuntimeCall, RuntimeMethod, RuntimeSlot, TracedRuntime,
    VillageExt, WidgetRuntime,
};

/// Collects whatever a listener hands it
#[derive(Clone)]
pub struct Recorder<T> {
    seen: Arc<Mutex<Vec<T>>>,
}

impl<T: Clone + Send + 'static> Recorder<T> {
    pub fn new() -> Self {
        Self {
            seen: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// A handler that records each value it receives
    pub fn handler(&self) -> impl Fn(T) + Send + Sync + 'static {
        let seen = Arc::clone(&self.seen);
        move |value| seen.lock().unwrap().push(value)
    }

    pub fn seen(&self) -> Vec<T> {
        self.seen.lock().unwrap().clone()
    }
}
