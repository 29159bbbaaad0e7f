use std::time::{Duration, Instant};

/// A periodic timer driven by whoever owns the event loop.
///
/// Rather than calling back on its own, the ticker stores the deadline of
/// its next tick; the loop asks it how long it may wait for input and then
/// polls it to find out whether a tick is due.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(super) struct Ticker {
    period: Duration,
    next: Option<Instant>,
}

impl Ticker {
    pub(super) fn new(period: Duration) -> Ticker {
        Ticker { period, next: None }
    }

    /// Start ticking, with the first tick one period after `now`.  Does
    /// nothing if already started.
    pub(super) fn start(&mut self, now: Instant) {
        if self.next.is_none() {
            self.next = Some(now + self.period);
        }
    }

    pub(super) fn stop(&mut self) {
        self.next = None;
    }

    pub(super) fn is_running(&self) -> bool {
        self.next.is_some()
    }

    /// How long until the next tick is due.  Returns `None` if stopped.
    pub(super) fn remaining(&self, now: Instant) -> Option<Duration> {
        self.next.map(|when| when.saturating_duration_since(now))
    }

    /// Returns `true` if a tick is due at `now`, in which case the following
    /// tick is scheduled one period after `now`.
    pub(super) fn poll(&mut self, now: Instant) -> bool {
        match self.next {
            Some(when) if when <= now => {
                self.next = Some(now + self.period);
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PERIOD: Duration = Duration::from_millis(150);

    #[test]
    fn stopped_ticker_never_fires() {
        let now = Instant::now();
        let mut ticker = Ticker::new(PERIOD);
        assert!(!ticker.is_running());
        assert_eq!(ticker.remaining(now), None);
        assert!(!ticker.poll(now + PERIOD * 10));
    }

    #[test]
    fn fires_once_per_period() {
        let now = Instant::now();
        let mut ticker = Ticker::new(PERIOD);
        ticker.start(now);
        assert!(ticker.is_running());
        assert_eq!(ticker.remaining(now), Some(PERIOD));
        assert!(!ticker.poll(now + Duration::from_millis(100)));
        let t1 = now + PERIOD;
        assert!(ticker.poll(t1));
        assert!(!ticker.poll(t1));
        assert_eq!(ticker.remaining(t1), Some(PERIOD));
        assert_eq!(ticker.remaining(t1 + PERIOD * 2), Some(Duration::ZERO));
    }

    #[test]
    fn start_is_idempotent() {
        let now = Instant::now();
        let mut ticker = Ticker::new(PERIOD);
        ticker.start(now);
        ticker.start(now + Duration::from_millis(100));
        assert_eq!(ticker.remaining(now), Some(PERIOD));
    }

    #[test]
    fn stop_cancels_pending_tick() {
        let now = Instant::now();
        let mut ticker = Ticker::new(PERIOD);
        ticker.start(now);
        ticker.stop();
        assert!(!ticker.poll(now + PERIOD));
        assert!(!ticker.is_running());
    }
}
