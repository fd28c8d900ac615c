//! Search input debounce.
//!
//! Typing produces a burst of input changes; only the last value of a burst
//! is applied, once input has been quiet for the full delay. Clearing the
//! filter bypasses the delay.
//!
//! [`SearchDebouncer`] is the clock-agnostic core: callers pass the current
//! time in. [`run_debounced`] drives it from a tokio channel.

use std::future;
use std::time::{Duration, Instant};

use tokio::sync::mpsc;

/// Delay between the last keystroke and applying the search
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(300);

#[derive(Debug, Clone, PartialEq, Eq)]
struct PendingSearch {
    value: String,
    deadline: Instant,
}

/// Coalesces rapid search input into a single commit.
#[derive(Debug, Clone)]
pub struct SearchDebouncer {
    delay: Duration,
    pending: Option<PendingSearch>,
}

impl Default for SearchDebouncer {
    fn default() -> Self {
        Self::new(DEFAULT_DEBOUNCE)
    }
}

impl SearchDebouncer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Record an input change, replacing any pending value and restarting the window
    pub fn input(&mut self, value: impl Into<String>, now: Instant) {
        self.pending = Some(PendingSearch {
            value: value.into(),
            deadline: now + self.delay,
        });
    }

    /// Take the pending value if its window has elapsed at `now`
    pub fn poll(&mut self, now: Instant) -> Option<String> {
        match &self.pending {
            Some(pending) if now >= pending.deadline => {
                self.pending.take().map(|pending| pending.value)
            }
            _ => None,
        }
    }

    /// When the pending value becomes due, if there is one
    pub fn deadline(&self) -> Option<Instant> {
        self.pending.as_ref().map(|pending| pending.deadline)
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Drop the pending value without committing it
    pub fn cancel(&mut self) -> Option<String> {
        self.pending.take().map(|pending| pending.value)
    }
}

/// An event from the search box
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchEvent {
    /// The raw text changed
    Input(String),
    /// The filter was cleared: commit an empty query now
    Clear,
}

/// Debounce search events from `events`, calling `on_commit` with each
/// committed value.
///
/// Returns once the channel is closed and any pending value has committed.
pub async fn run_debounced<F>(
    mut events: mpsc::UnboundedReceiver<SearchEvent>,
    delay: Duration,
    mut on_commit: F,
) where
    F: FnMut(String),
{
    let mut debouncer = SearchDebouncer::new(delay);

    loop {
        let deadline = debouncer.deadline();
        tokio::select! {
            event = events.recv() => match event {
                Some(SearchEvent::Input(value)) => {
                    debouncer.input(value, now());
                }
                Some(SearchEvent::Clear) => {
                    if debouncer.cancel().is_some() {
                        tracing::trace!("dropped pending search on clear");
                    }
                    on_commit(String::new());
                }
                None => break,
            },
            _ = sleep_until(deadline) => {
                if let Some(value) = debouncer.poll(now()) {
                    tracing::debug!(query = %value, "search committed");
                    on_commit(value);
                }
            }
        }
    }

    // Input has stopped for good; the last value still waits out its window
    if let Some(deadline) = debouncer.deadline() {
        sleep_until(Some(deadline)).await;
        if let Some(value) = debouncer.poll(now()) {
            on_commit(value);
        }
    }
}

fn now() -> Instant {
    tokio::time::Instant::now().into_std()
}

async fn sleep_until(deadline: Option<Instant>) {
    match deadline {
        Some(deadline) => tokio::time::sleep_until(tokio::time::Instant::from_std(deadline)).await,
        None => future::pending().await,
    }
}
