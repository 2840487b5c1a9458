//! Carousel
//!
//! Slide index with wrap-around navigation and an optional timer that
//! advances it. One repeating interval per carousel; dropping the returned
//! handle stops it. The timer can be paused, e.g. while the pointer hovers.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::sync::watch;
use tokio::task::JoinHandle;

/// Current slide of a fixed-length carousel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Carousel {
    len: usize,
    current: usize,
}

impl Carousel {
    pub fn new(len: usize) -> Self {
        Self { len, current: 0 }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn next(&mut self) -> usize {
        if self.len > 0 {
            self.current = (self.current + 1) % self.len;
        }
        self.current
    }

    pub fn prev(&mut self) -> usize {
        if self.len > 0 {
            self.current = (self.current + self.len - 1) % self.len;
        }
        self.current
    }

    /// Jump to a slide; out-of-range indexes are ignored
    pub fn go_to(&mut self, index: usize) -> usize {
        if index < self.len {
            self.current = index;
        }
        self.current
    }
}

/// Handle to a running auto-advance timer
pub struct AutoAdvance {
    carousel: Arc<Mutex<Carousel>>,
    index_tx: Arc<watch::Sender<usize>>,
    paused: Arc<AtomicBool>,
    handle: JoinHandle<()>,
}

impl AutoAdvance {
    /// Receiver that observes every index the carousel moves to
    pub fn subscribe(&self) -> watch::Receiver<usize> {
        self.index_tx.subscribe()
    }

    pub fn current(&self) -> usize {
        *self.index_tx.borrow()
    }

    /// Manual navigation while the timer keeps running
    pub fn go_to(&self, index: usize) -> usize {
        self.update(|c| c.go_to(index))
    }

    pub fn next(&self) -> usize {
        self.update(Carousel::next)
    }

    pub fn prev(&self) -> usize {
        self.update(Carousel::prev)
    }

    /// Hold the timer; ticks while paused leave the slide alone
    pub fn pause(&self) {
        self.paused.store(true, Ordering::Relaxed);
    }

    pub fn resume(&self) {
        self.paused.store(false, Ordering::Relaxed);
    }

    pub fn is_paused(&self) -> bool {
        self.paused.load(Ordering::Relaxed)
    }

    /// Stop the timer and return the final carousel state
    pub fn stop(self) -> Carousel {
        self.handle.abort();
        match self.carousel.lock() {
            Ok(c) => *c,
            Err(poisoned) => *poisoned.into_inner(),
        }
    }

    fn update(&self, f: impl FnOnce(&mut Carousel) -> usize) -> usize {
        advance(&self.carousel, &self.index_tx, f)
    }
}

impl Drop for AutoAdvance {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

// The lock is held across the send so manual and timer moves publish in order
fn advance(
    carousel: &Mutex<Carousel>,
    tx: &watch::Sender<usize>,
    f: impl FnOnce(&mut Carousel) -> usize,
) -> usize {
    let mut guard = match carousel.lock() {
        Ok(c) => c,
        Err(poisoned) => poisoned.into_inner(),
    };
    let index = f(&mut *guard);
    tx.send_replace(index);
    index
}

/// Start advancing `carousel` every `interval`. Must be called inside a
/// tokio runtime.
pub fn spawn_auto_advance(carousel: Carousel, interval: Duration) -> AutoAdvance {
    let shared = Arc::new(Mutex::new(carousel));
    let (tx, _rx) = watch::channel(carousel.current());
    let tx = Arc::new(tx);
    let paused = Arc::new(AtomicBool::new(false));

    let task_carousel = Arc::clone(&shared);
    let task_tx = Arc::clone(&tx);
    let task_paused = Arc::clone(&paused);
    let handle = tokio::spawn(async move {
        let mut ticker = tokio::time::interval(interval);
        // First tick completes immediately
        ticker.tick().await;

        loop {
            ticker.tick().await;

            if task_paused.load(Ordering::Relaxed) {
                continue;
            }

            advance(&task_carousel, &task_tx, Carousel::next);
        }
    });

    AutoAdvance {
        carousel: shared,
        index_tx: tx,
        paused,
        handle,
    }
}
