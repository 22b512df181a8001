//! Process-wide frame scheduler.
//!
//! The browser's animation-frame callback calls [`Ticker::tick`] once per
//! frame; components subscribe for the lifetime of a [`Subscription`] and
//! are unregistered when it is cancelled or dropped.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

/// Timing of one frame, in seconds.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FrameTime {
    pub now: f64,
    pub delta: f64,
    pub frame: u64,
}

impl FrameTime {
    #[inline]
    pub fn delta_f32(&self) -> f32 {
        self.delta as f32
    }
}

type Callback = Rc<RefCell<dyn FnMut(&FrameTime)>>;

#[derive(Default)]
struct TickerInner {
    next_id: u64,
    entries: Vec<(u64, Callback)>,
    last_now: Option<f64>,
    frame: u64,
    shut_down: bool,
}

impl TickerInner {
    /// Detach the entry; the caller drops it once the borrow has ended.
    fn remove(&mut self, id: u64) -> Option<Callback> {
        let pos = self.entries.iter().position(|(eid, _)| *eid == id)?;
        Some(self.entries.remove(pos).1)
    }

    fn contains(&self, id: u64) -> bool {
        self.entries.iter().any(|(eid, _)| *eid == id)
    }
}

/// Cheap to clone; clones share the same subscriber list.
#[derive(Clone, Default)]
pub struct Ticker {
    inner: Rc<RefCell<TickerInner>>,
}

impl Ticker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `callback` to run on every subsequent tick.
    ///
    /// Subscribing after [`Ticker::shutdown`] returns an already-cancelled
    /// subscription.
    pub fn subscribe(&self, callback: impl FnMut(&FrameTime) + 'static) -> Subscription {
        let mut inner = self.inner.borrow_mut();
        if inner.shut_down {
            return Subscription {
                ticker: Weak::new(),
                id: 0,
            };
        }
        inner.next_id += 1;
        let id = inner.next_id;
        let cb: Callback = Rc::new(RefCell::new(callback));
        inner.entries.push((id, cb));
        Subscription {
            ticker: Rc::downgrade(&self.inner),
            id,
        }
    }

    /// Run every live subscriber once, in subscription order.
    ///
    /// `now` is a monotonic timestamp in seconds. The subscriber list is not
    /// borrowed while callbacks run, so callbacks may subscribe or cancel;
    /// anything cancelled before its turn in this frame is skipped.
    pub fn tick(&self, now: f64) -> FrameTime {
        let (time, snapshot) = {
            let mut inner = self.inner.borrow_mut();
            let delta = match inner.last_now {
                Some(prev) if now.is_finite() && now >= prev => now - prev,
                _ => 0.0,
            };
            if now.is_finite() {
                inner.last_now = Some(now);
            }
            inner.frame += 1;
            let time = FrameTime {
                now,
                delta,
                frame: inner.frame,
            };
            if inner.shut_down {
                return time;
            }
            (time, inner.entries.clone())
        };
        for (id, cb) in snapshot {
            if !self.inner.borrow().contains(id) {
                continue;
            }
            // A callback re-entering itself through a nested tick is skipped.
            if let Ok(mut f) = cb.try_borrow_mut() {
                f(&time);
            }
        }
        time
    }

    pub fn subscriber_count(&self) -> usize {
        self.inner.borrow().entries.len()
    }

    /// Drop every subscriber and refuse new ones.
    ///
    /// Callbacks are dropped after the list is released, so a callback that
    /// owns another [`Subscription`] can cancel it from its destructor.
    pub fn shutdown(&self) {
        let dropped = {
            let mut inner = self.inner.borrow_mut();
            if !inner.shut_down {
                log::debug!("[ticker] shutdown with {} subscribers", inner.entries.len());
            }
            inner.shut_down = true;
            std::mem::take(&mut inner.entries)
        };
        drop(dropped);
    }

    pub fn is_shut_down(&self) -> bool {
        self.inner.borrow().shut_down
    }
}

/// Registration handle; unregisters on [`Subscription::cancel`] or drop.
#[must_use = "dropping a Subscription unsubscribes immediately"]
pub struct Subscription {
    ticker: Weak<RefCell<TickerInner>>,
    id: u64,
}

impl Subscription {
    /// Returns true only for the call that actually removed the callback.
    pub fn cancel(&mut self) -> bool {
        let removed = match self.ticker.upgrade() {
            Some(inner) => inner.borrow_mut().remove(self.id),
            None => None,
        };
        self.ticker = Weak::new();
        // Dropped here, outside the borrow: the callback may own subscriptions.
        removed.is_some()
    }

    pub fn is_active(&self) -> bool {
        self.ticker
            .upgrade()
            .map(|inner| inner.borrow().contains(self.id))
            .unwrap_or(false)
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.cancel();
    }
}
