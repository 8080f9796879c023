use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use tokio::time::Instant;

use super::deferred::Deferred;

/// Boot splash flag: false right after creation, true once `delay` has
/// elapsed, never false again.
#[derive(Debug)]
pub struct ReadyFlag {
    ready: Arc<AtomicBool>,
    started: Instant,
    delay: Duration,
    pending: Option<Deferred>,
}

impl ReadyFlag {
    /// Start the countdown. A zero delay is ready immediately.
    pub fn arm(delay: Duration) -> Self {
        let ready = Arc::new(AtomicBool::new(delay.is_zero()));
        let pending = (!delay.is_zero()).then(|| {
            let ready = Arc::clone(&ready);
            Deferred::spawn(delay, move || {
                ready.store(true, Ordering::SeqCst);
                tracing::info!("boot delay elapsed");
            })
        });

        Self {
            ready,
            started: Instant::now(),
            delay,
            pending,
        }
    }

    pub fn is_ready(&self) -> bool {
        self.ready.load(Ordering::SeqCst)
    }

    /// Fraction of the delay that has elapsed, in `0.0..=1.0`.
    pub fn progress(&self) -> f64 {
        if self.is_ready() || self.delay.is_zero() {
            return 1.0;
        }
        let ratio = self.started.elapsed().as_secs_f64() / self.delay.as_secs_f64();
        ratio.clamp(0.0, 1.0)
    }

    /// Abort a pending flip. Has no effect once the flag is ready.
    pub fn cancel(&mut self) {
        if let Some(pending) = self.pending.take() {
            pending.cancel();
        }
    }
}

/// The transient "Copied!" indicator of the API playground.
///
/// [`CopyFeedback::mark`] raises the flag and schedules it to drop after the
/// hold period. Marking again restarts the hold period.
#[derive(Debug)]
pub struct CopyFeedback {
    copied: Arc<AtomicBool>,
    hold: Duration,
    reset: Option<Deferred>,
}

impl CopyFeedback {
    pub fn new(hold: Duration) -> Self {
        Self {
            copied: Arc::new(AtomicBool::new(false)),
            hold,
            reset: None,
        }
    }

    pub fn is_copied(&self) -> bool {
        self.copied.load(Ordering::SeqCst)
    }

    pub fn mark(&mut self) {
        self.copied.store(true, Ordering::SeqCst);
        let copied = Arc::clone(&self.copied);
        // Replacing the handle aborts the previous reset
        self.reset = Some(Deferred::spawn(self.hold, move || {
            copied.store(false, Ordering::SeqCst);
        }));
    }

    pub fn clear(&mut self) {
        self.reset = None;
        self.copied.store(false, Ordering::SeqCst);
    }
}
