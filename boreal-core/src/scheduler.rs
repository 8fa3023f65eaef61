//! Cooperative task scheduler
//!
//! A minimal deadline table over a single logical millisecond clock.
//! Exactly one task body runs at a time; tasks never block. A task
//! that finds its resource busy reschedules itself with a short delay
//! and returns — that replanning is the only retry/loop construct in
//! the node, and because a task replanned during a pass only runs on
//! the *next* pass, retry storms stay iterative and flat.
//!
//! Tasks are identified by value. Planning an already-pending task
//! replaces its deadline, so at most one instance of any task is
//! pending at a time.

use heapless::Vec;

/// Logical clock tick in milliseconds
pub type Tick = u64;

/// Deadline that never fires
pub const TICK_INFINITY: Tick = Tick::MAX;

#[derive(Debug, Clone, Copy)]
struct Entry<T> {
    task: T,
    deadline: Tick,
    /// Plan order, breaks ties between equal deadlines (FIFO)
    seq: u32,
}

/// Deadline table for a closed set of tasks
///
/// `N` bounds the number of simultaneously pending tasks; the node
/// sizes it to its task count, so planning never overflows.
#[derive(Debug, Clone)]
pub struct Scheduler<T, const N: usize> {
    entries: Vec<Entry<T>, N>,
    next_seq: u32,
}

impl<T: Copy + PartialEq, const N: usize> Scheduler<T, N> {
    /// Create an empty scheduler
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
            next_seq: 0,
        }
    }

    /// Schedule `task` for the next scheduler pass
    pub fn run_now(&mut self, task: T, now: Tick) {
        self.plan_at(task, now);
    }

    /// Schedule `task` at `now + delay` milliseconds
    ///
    /// Called from within the running task body, this is the
    /// busy-retry primitive: replan self, return, try again later.
    pub fn run_after(&mut self, task: T, now: Tick, delay: Tick) {
        self.plan_at(task, now.saturating_add(delay));
    }

    /// Remove a pending instance of `task`
    ///
    /// No-op when the task already fired or was never planned;
    /// cancelling never disturbs other pending tasks.
    pub fn cancel(&mut self, task: T) {
        self.entries.retain(|e| e.task != task);
    }

    /// Park `task`: it will not run until explicitly replanned
    ///
    /// Representationally the same as [`cancel`](Self::cancel); the
    /// table only holds pending deadlines.
    pub fn park(&mut self, task: T) {
        self.cancel(task);
    }

    /// Deadline of a pending task, if any
    pub fn deadline(&self, task: T) -> Option<Tick> {
        self.entries
            .iter()
            .find(|e| e.task == task)
            .map(|e| e.deadline)
    }

    /// True if `task` has a pending deadline
    pub fn is_pending(&self, task: T) -> bool {
        self.deadline(task).is_some()
    }

    /// Number of pending tasks
    pub fn pending_count(&self) -> usize {
        self.entries.len()
    }

    /// Pop the next task due at `now`, earliest deadline first
    ///
    /// Equal deadlines pop in plan order. The popped task is no
    /// longer pending; it runs once and stays parked unless its body
    /// (or an event) plans it again.
    pub fn pop_due(&mut self, now: Tick) -> Option<T> {
        let idx = self
            .entries
            .iter()
            .enumerate()
            .filter(|(_, e)| e.deadline <= now)
            .min_by_key(|(_, e)| (e.deadline, e.seq))
            .map(|(i, _)| i)?;
        let entry = self.entries.swap_remove(idx);
        Some(entry.task)
    }

    fn plan_at(&mut self, task: T, deadline: Tick) {
        let seq = self.next_seq;
        self.next_seq = self.next_seq.wrapping_add(1);

        if let Some(entry) = self.entries.iter_mut().find(|e| e.task == task) {
            entry.deadline = deadline;
            entry.seq = seq;
            return;
        }
        // Table full means a task set larger than N; drop rather
        // than displace an existing deadline.
        let _ = self.entries.push(Entry {
            task,
            deadline,
            seq,
        });
    }
}

impl<T: Copy + PartialEq, const N: usize> Default for Scheduler<T, N> {
    fn default() -> Self {
        Self::new()
    }
}
