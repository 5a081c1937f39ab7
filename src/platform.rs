//! Platform glue shared by the two binaries
//!
//! Frame pacing (sleep-until-deadline at the display rate) and wall-clock
//! seed derivation for the session RNG.

use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

/// Target display rate for both games
pub const TARGET_FPS: u32 = 60;

/// Fixed-rate frame governor.
///
/// The event loop asks `frame_due` once per wakeup; when a frame is due the
/// deadline advances from "now" (overshoot is dropped, not accumulated) and
/// the loop parks on [`FramePacer::deadline`] via `ControlFlow::WaitUntil`.
pub struct FramePacer {
    interval: Duration,
    next: Instant,
}

impl FramePacer {
    pub fn new(target_fps: u32) -> Self {
        Self {
            interval: Duration::from_secs(1) / target_fps,
            next: Instant::now(),
        }
    }

    /// True when the next frame is due; advances the deadline.
    pub fn frame_due(&mut self, now: Instant) -> bool {
        if now >= self.next {
            self.next = now + self.interval;
            true
        } else {
            false
        }
    }

    /// Instant the loop should sleep until before checking again.
    pub fn deadline(&self) -> Instant {
        self.next
    }
}

/// Wall-clock seed for the session RNG.
pub fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pacer_fires_once_per_interval() {
        let mut pacer = FramePacer::new(60);
        let t0 = Instant::now();

        assert!(pacer.frame_due(t0));
        assert!(!pacer.frame_due(t0));

        // Deadline is exactly one interval past the last due frame
        let interval = Duration::from_secs(1) / 60;
        assert_eq!(pacer.deadline(), t0 + interval);
        assert!(pacer.frame_due(t0 + interval));
    }

    #[test]
    fn test_pacer_resets_from_now_on_late_frame() {
        let mut pacer = FramePacer::new(60);
        let t0 = Instant::now();
        assert!(pacer.frame_due(t0));

        // Arrive three intervals late: the next deadline is measured from
        // the late arrival, not from the missed schedule.
        let late = t0 + Duration::from_millis(50);
        assert!(pacer.frame_due(late));
        assert_eq!(pacer.deadline(), late + Duration::from_secs(1) / 60);
    }
}
