/// Cancellable repeating timers.
///
/// The host owns the actual clock (e.g. `window.setInterval`) and the
/// callback; the engine only keeps the handle so a timer can be cancelled
/// before a new one is scheduled.

/// A source of repeating timers.
pub trait IntervalHost {
    type Handle;

    /// Schedule the host's callback every `period_ms`.
    /// Returns None if the host could not schedule it.
    fn start(&mut self, period_ms: u32) -> Option<Self::Handle>;

    /// Cancel a previously started timer.
    fn cancel(&mut self, handle: Self::Handle);
}

/// A single repeating timer slot: at most one live handle at a time.
pub struct Repeating<H: IntervalHost> {
    host: H,
    period_ms: u32,
    handle: Option<H::Handle>,
}

impl<H: IntervalHost> Repeating<H> {
    /// Create a stopped timer.
    pub fn new(host: H, period_ms: u32) -> Self {
        Self {
            host,
            period_ms,
            handle: None,
        }
    }

    /// Cancel any live timer, then schedule a fresh full period.
    pub fn restart(&mut self) {
        self.stop();
        self.handle = self.host.start(self.period_ms);
    }

    /// Cancel the live timer, if any.
    pub fn stop(&mut self) {
        if let Some(handle) = self.handle.take() {
            self.host.cancel(handle);
        }
    }

    pub fn is_running(&self) -> bool {
        self.handle.is_some()
    }

    pub fn period_ms(&self) -> u32 {
        self.period_ms
    }

    pub fn host(&self) -> &H {
        &self.host
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Records live timers so tests can check for leaks.
    #[derive(Default)]
    struct FakeHost {
        next: u32,
        live: Vec<u32>,
        started: u32,
        fail: bool,
    }

    impl IntervalHost for FakeHost {
        type Handle = u32;

        fn start(&mut self, _period_ms: u32) -> Option<u32> {
            if self.fail {
                return None;
            }
            self.next += 1;
            self.started += 1;
            self.live.push(self.next);
            Some(self.next)
        }

        fn cancel(&mut self, handle: u32) {
            self.live.retain(|h| *h != handle);
        }
    }

    #[test]
    fn restart_never_leaks() {
        let mut timer = Repeating::new(FakeHost::default(), 10_000);
        timer.restart();
        timer.restart();
        timer.restart();
        assert_eq!(timer.host().started, 3);
        assert_eq!(timer.host().live.len(), 1);
        assert!(timer.is_running());
    }

    #[test]
    fn stop_cancels() {
        let mut timer = Repeating::new(FakeHost::default(), 10_000);
        timer.restart();
        timer.stop();
        assert!(!timer.is_running());
        assert!(timer.host().live.is_empty());
        // Stopping twice is harmless
        timer.stop();
    }

    #[test]
    fn failed_start_is_not_running() {
        let host = FakeHost { fail: true, ..Default::default() };
        let mut timer = Repeating::new(host, 500);
        timer.restart();
        assert!(!timer.is_running());
        assert_eq!(timer.period_ms(), 500);
    }
}
