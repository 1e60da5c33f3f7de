//! Deferred computer turns.
//!
//! The controller never sleeps or spawns anything itself. When a computer
//! side is to move it hands a [`ThinkTicket`] to the host's [`Scheduler`],
//! giving a UI time to paint a "thinking" indicator. When the host's timer
//! fires it passes the ticket back through `Game::on_think`.

use std::collections::VecDeque;
use std::time::Duration;

/// Identifies one scheduled computer turn. Tickets from an older generation
/// (before a new game or mode switch) are ignored when they come back.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ThinkTicket {
    pub generation: u64,
}

/// Opaque handle for cancelling a scheduled ticket.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct CancelHandle(pub u64);

/// Timer service supplied by the host event loop.
pub trait Scheduler {
    /// Deliver `ticket` back to the controller after `delay`.
    fn schedule(&mut self, delay: Duration, ticket: ThinkTicket) -> CancelHandle;

    /// Drop a pending ticket. Cancelling something that already fired is a no-op.
    fn cancel(&mut self, handle: CancelHandle);
}

/// A pending entry in a [`QueueScheduler`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Scheduled {
    pub handle: CancelHandle,
    pub delay: Duration,
    pub ticket: ThinkTicket,
}

/// In-memory FIFO scheduler. The owner decides when tickets are due, which
/// lets tests run computer turns synchronously and lets headless hosts sleep
/// for the requested delay before firing.
#[derive(Debug, Default)]
pub struct QueueScheduler {
    queue: VecDeque<Scheduled>,
    next_handle: u64,
}

impl QueueScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Remove and return the oldest pending entry.
    pub fn next_due(&mut self) -> Option<Scheduled> {
        self.queue.pop_front()
    }

    pub fn pending(&self) -> usize {
        self.queue.len()
    }

    pub fn peek(&self) -> Option<&Scheduled> {
        self.queue.front()
    }
}

impl Scheduler for QueueScheduler {
    fn schedule(&mut self, delay: Duration, ticket: ThinkTicket) -> CancelHandle {
        let handle = CancelHandle(self.next_handle);
        self.next_handle += 1;
        self.queue.push_back(Scheduled {
            handle,
            delay,
            ticket,
        });
        handle
    }

    fn cancel(&mut self, handle: CancelHandle) {
        self.queue.retain(|s| s.handle != handle);
    }
}

#[cfg(test)]
#[path = "scheduler_tests.rs"]
mod scheduler_tests;
