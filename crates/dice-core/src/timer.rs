//! One-shot deferred callbacks.
//!
//! The controller never blocks: it hands a callback to a [`Timer`] and
//! returns. Browsers use `setTimeout`; tests and headless hosts use
//! [`ManualTimer`], whose clock only moves when told to.

use crate::error::TimerError;
use std::cell::RefCell;
use std::time::Duration;

pub type TimerCallback = Box<dyn FnOnce()>;

pub trait Timer {
    /// Run `callback` once after `delay`. Must not invoke it synchronously.
    fn schedule_once(&self, delay: Duration, callback: TimerCallback) -> Result<(), TimerError>;
}

struct Entry {
    due: Duration,
    seq: u64,
    callback: TimerCallback,
}

#[derive(Default)]
struct ManualClock {
    now: Duration,
    next_seq: u64,
    entries: Vec<Entry>,
}

/// Virtual-time scheduler driven by [`ManualTimer::advance`].
#[derive(Default)]
pub struct ManualTimer {
    clock: RefCell<ManualClock>,
}

impl ManualTimer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Virtual time elapsed since construction.
    pub fn now(&self) -> Duration {
        self.clock.borrow().now
    }

    /// Number of callbacks not yet fired.
    pub fn pending(&self) -> usize {
        self.clock.borrow().entries.len()
    }

    /// Move the clock forward by `by`, firing every callback that comes due
    /// in due-time order (ties in scheduling order). Callbacks may schedule
    /// further callbacks; those fire too if they fall inside the window.
    /// Returns how many callbacks ran.
    pub fn advance(&self, by: Duration) -> usize {
        let target = self.clock.borrow().now + by;
        let mut fired = 0;
        loop {
            // Release the borrow before running the callback so it can reschedule.
            let next = {
                let mut clock = self.clock.borrow_mut();
                let earliest = clock
                    .entries
                    .iter()
                    .enumerate()
                    .filter(|(_, e)| e.due <= target)
                    .min_by_key(|(_, e)| (e.due, e.seq))
                    .map(|(i, _)| i);
                earliest.map(|i| {
                    let entry = clock.entries.swap_remove(i);
                    clock.now = entry.due;
                    entry.callback
                })
            };
            match next {
                Some(callback) => {
                    callback();
                    fired += 1;
                }
                None => break,
            }
        }
        self.clock.borrow_mut().now = target;
        fired
    }
}

impl Timer for ManualTimer {
    fn schedule_once(&self, delay: Duration, callback: TimerCallback) -> Result<(), TimerError> {
        let mut clock = self.clock.borrow_mut();
        let seq = clock.next_seq;
        clock.next_seq += 1;
        let due = clock.now + delay;
        clock.entries.push(Entry { due, seq, callback });
        Ok(())
    }
}

/// Timer whose host cannot schedule anything. Used when no event loop exists.
pub struct UnavailableTimer;

impl Timer for UnavailableTimer {
    fn schedule_once(&self, _delay: Duration, _callback: TimerCallback) -> Result<(), TimerError> {
        Err(TimerError::NoScheduler)
    }
}
