//! Observer seam between the model and a view layer.
//!
//! Callbacks fire synchronously on emit, FIFO in subscription order.
//! Every event is also queued so a retained-mode view can drain batches
//! via `poll()` once per redraw instead of reacting mid-mutation.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::fmt;

use super::{BandSpec, SelectionMode};

/// Maximum queued events before the oldest are evicted.
const MAX_QUEUE_SIZE: usize = 256;

#[derive(Debug, Clone, PartialEq)]
pub enum ModelEvent {
    FrameChanged { frame: usize },
    StyleChanged { bands: Vec<BandSpec> },
    ModeChanged { mode: SelectionMode },
}

type Callback = Box<dyn Fn(&ModelEvent)>;

#[derive(Default)]
pub struct EventHub {
    subscribers: RefCell<Vec<Callback>>,
    queue: RefCell<VecDeque<ModelEvent>>,
}

impl EventHub {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a callback invoked on every subsequent emit.
    ///
    /// Callbacks must not subscribe or emit reentrantly; the hub is
    /// single-threaded and holds its borrow while dispatching.
    pub fn subscribe<F>(&self, callback: F)
    where
        F: Fn(&ModelEvent) + 'static,
    {
        self.subscribers.borrow_mut().push(Box::new(callback));
    }

    pub(crate) fn emit(&self, event: ModelEvent) {
        for callback in self.subscribers.borrow().iter() {
            callback(&event);
        }
        let mut queue = self.queue.borrow_mut();
        if queue.len() == MAX_QUEUE_SIZE {
            queue.pop_front();
        }
        queue.push_back(event);
    }

    /// Drain queued events for batch processing in a view loop.
    pub fn poll(&self) -> Vec<ModelEvent> {
        self.queue.borrow_mut().drain(..).collect()
    }
}

impl fmt::Debug for EventHub {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("EventHub")
            .field("subscribers", &self.subscribers.borrow().len())
            .field("queued", &self.queue.borrow().len())
            .finish()
    }
}
