//! Pointer input surface with per-listener event queues.
//!
//! [`InputSurface`] is the attachment point for look controllers. The host
//! feeds pointer events into [`InputSurface::dispatch`]; every registered
//! listener receives its own copy in delivery order and drains it with
//! [`InputSurface::next_event`]. Queues are independent, so several
//! controllers can share one surface without stealing each other's events.
//!
//! Dispatch and drain are expected to run on the same thread, interleaved
//! by the host's event loop.

use std::collections::VecDeque;

use bevy_ecs::prelude::*;

use crate::input::PointerEvent;

/// Opaque identifier for a registered pointer listener.
///
/// Ids are never reused; a removed listener's id stays stale forever.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

struct Listener {
    id: ListenerId,
    queue: VecDeque<PointerEvent>,
}

/// Fan-out point between a host's pointer input and any number of listeners.
#[derive(Default, Resource)]
pub struct InputSurface {
    listeners: Vec<Listener>,
    next_id: u64,
}

impl InputSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a listener for all pointer events. Returns an ID to
    /// remove it later.
    pub fn add_listener(&mut self) -> ListenerId {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        self.listeners.push(Listener {
            id,
            queue: VecDeque::new(),
        });
        log::debug!("Pointer listener {:?} registered", id);
        id
    }

    /// Removes a listener and drops its pending events.
    ///
    /// Returns `false` if the id is unknown or already removed.
    pub fn remove_listener(&mut self, id: ListenerId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|listener| listener.id != id);
        let removed = self.listeners.len() != before;
        if removed {
            log::debug!("Pointer listener {:?} removed", id);
        }
        removed
    }

    /// Appends `event` to every registered listener's queue, in
    /// registration order.
    pub fn dispatch(&mut self, event: PointerEvent) {
        for listener in &mut self.listeners {
            listener.queue.push_back(event);
        }
    }

    /// Pops the oldest pending event for `id`, or `None` when the queue is
    /// empty or the id is unknown.
    pub fn next_event(&mut self, id: ListenerId) -> Option<PointerEvent> {
        self.listeners
            .iter_mut()
            .find(|listener| listener.id == id)?
            .queue
            .pop_front()
    }

    /// Number of currently registered listeners.
    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    /// Number of undrained events for `id` (zero for unknown ids).
    pub fn pending(&self, id: ListenerId) -> usize {
        self.listeners
            .iter()
            .find(|listener| listener.id == id)
            .map_or(0, |listener| listener.queue.len())
    }
}
