/*! External fallback lookup.

Consulted only when the store and the inflection rules both fail. Remote
sources absorb their own failures: a timeout or transport error comes back
as `None`, never as an error, and the resolver caches that negative result
to suppress immediate retries.
*/

use std::time::{Duration, Instant};

use parking_lot::{Condvar, Mutex};

use crate::transcription::Transcription;

pub mod free_dict;

/// Last-resort pronunciation source.
pub trait RemoteLookup {
    /// Queries the external source. `None` covers not-found, timeout and
    /// transport failure alike.
    fn query(&self, word: &str) -> Option<Transcription>;
}

/// FIFO admission control for outbound requests.
///
/// Enforces a bounded number of requests in flight and a minimum spacing
/// between admissions. Callers block in [`RateLimiter::acquire`] until they
/// are at the head of the queue, a slot is free, and the spacing timer has
/// elapsed; admission order is strictly the order of `acquire` calls.
pub struct RateLimiter {
    max_in_flight: usize,
    min_spacing: Duration,
    state: Mutex<LimiterState>,
    wakeup: Condvar,
}

#[derive(Default)]
struct LimiterState {
    next_ticket: u64,
    now_serving: u64,
    in_flight: usize,
    last_admitted: Option<Instant>,
}

impl RateLimiter {
    /// Creates a limiter. A zero ceiling is treated as one.
    pub fn new(max_in_flight: usize, min_spacing: Duration) -> RateLimiter {
        RateLimiter {
            max_in_flight: max_in_flight.max(1),
            min_spacing,
            state: Mutex::new(LimiterState::default()),
            wakeup: Condvar::new(),
        }
    }

    /// Blocks until admitted. The returned permit frees its slot on drop.
    pub fn acquire(&self) -> Permit<'_> {
        let mut state = self.state.lock();
        let ticket = state.next_ticket;
        state.next_ticket += 1;

        loop {
            if state.now_serving == ticket && state.in_flight < self.max_in_flight {
                match self.spacing_remaining(&state) {
                    None => break,
                    Some(remaining) => {
                        self.wakeup.wait_for(&mut state, remaining);
                    }
                }
            } else {
                self.wakeup.wait(&mut state);
            }
        }

        state.now_serving += 1;
        state.in_flight += 1;
        state.last_admitted = Some(Instant::now());
        drop(state);

        // The next queued ticket may already be eligible.
        self.wakeup.notify_all();

        Permit { limiter: self }
    }

    fn spacing_remaining(&self, state: &LimiterState) -> Option<Duration> {
        let elapsed = state.last_admitted?.elapsed();
        if elapsed >= self.min_spacing {
            None
        } else {
            Some(self.min_spacing - elapsed)
        }
    }
}

/// An in-flight slot held by an admitted caller.
pub struct Permit<'a> {
    limiter: &'a RateLimiter,
}

impl Drop for Permit<'_> {
    fn drop(&mut self) {
        let mut state = self.limiter.state.lock();
        state.in_flight -= 1;
        drop(state);
        self.limiter.wakeup.notify_all();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::Arc;

    #[test]
    fn spacing_between_admissions() {
        let limiter = RateLimiter::new(4, Duration::from_millis(60));

        let start = Instant::now();
        drop(limiter.acquire());
        drop(limiter.acquire());
        drop(limiter.acquire());

        assert!(start.elapsed() >= Duration::from_millis(120));
    }

    #[test]
    fn in_flight_ceiling() {
        let limiter = Arc::new(RateLimiter::new(1, Duration::from_millis(0)));
        let admitted = Arc::new(AtomicBool::new(false));

        let held = limiter.acquire();

        let handle = {
            let limiter = limiter.clone();
            let admitted = admitted.clone();
            std::thread::spawn(move || {
                let _permit = limiter.acquire();
                admitted.store(true, Ordering::SeqCst);
            })
        };

        std::thread::sleep(Duration::from_millis(80));
        assert!(!admitted.load(Ordering::SeqCst));

        drop(held);
        handle.join().unwrap();
        assert!(admitted.load(Ordering::SeqCst));
    }

    #[test]
    fn fifo_admission_order() {
        let limiter = Arc::new(RateLimiter::new(1, Duration::from_millis(0)));
        let order = Arc::new(Mutex::new(Vec::new()));

        let held = limiter.acquire();

        let mut handles = Vec::new();
        for id in 0..3 {
            let limiter = limiter.clone();
            let order = order.clone();
            handles.push(std::thread::spawn(move || {
                let _permit = limiter.acquire();
                order.lock().push(id);
            }));
            // let each thread take its ticket before the next starts
            std::thread::sleep(Duration::from_millis(40));
        }

        drop(held);
        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(*order.lock(), vec![0, 1, 2]);
    }
}
