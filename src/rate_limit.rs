use governor::{clock::DefaultClock, state::{InMemoryState, NotKeyed}, Quota, RateLimiter};
use std::cell::Cell;
use std::num::NonZeroU32;
use std::thread;
use std::time::Duration;

/// Riot development keys allow 20 requests per second.
pub const MAX_REQUESTS_PER_SECOND: u32 = 20;

const CEILING_POLL: Duration = Duration::from_millis(10);

/// Spaces out upstream calls: a fixed sleep before every request, then a
/// per-second ceiling as a backstop.
pub struct RequestPacer {
    min_interval: Duration,
    ceiling: RateLimiter<NotKeyed, InMemoryState, DefaultClock>,
    requests: Cell<u32>,
}

impl RequestPacer {
    pub fn new(min_interval: Duration) -> Self {
        let per_second = NonZeroU32::new(MAX_REQUESTS_PER_SECOND).unwrap_or(NonZeroU32::MIN);
        RequestPacer {
            min_interval,
            ceiling: RateLimiter::direct(Quota::per_second(per_second)),
            requests: Cell::new(0),
        }
    }

    /// Blocks until the next request may go out. The sleep is unconditional.
    pub fn wait(&self) {
        thread::sleep(self.min_interval);

        while self.ceiling.check().is_err() {
            thread::sleep(CEILING_POLL);
        }

        self.requests.set(self.requests.get() + 1);
    }

    pub fn requests_made(&self) -> u32 {
        self.requests.get()
    }
}
