//! Count-up animation for numeric widgets
//!
//! Time is passed in by the caller (seconds, any monotonic origin), so the
//! animation is a plain function of `now`.

/// `1 - (1 - t)^4`, with `t` clamped to `[0, 1]`.
pub fn ease_out_quart(t: f64) -> f64 {
    let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
    1.0 - (1.0 - t).powi(4)
}

/// Counts from 0 up to `target` over `duration` seconds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CountUp {
    target: usize,
    duration: f64,
    started_at: f64,
    enabled: bool,
}

impl CountUp {
    pub fn new(target: usize, duration: f64, now: f64, enabled: bool) -> Self {
        Self {
            target,
            duration,
            started_at: now,
            enabled,
        }
    }

    pub fn target(&self) -> usize {
        self.target
    }

    /// Restart from zero when the target changes.
    pub fn retarget(&mut self, target: usize, now: f64) {
        if target != self.target {
            self.target = target;
            self.started_at = now;
        }
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    /// Value to display at `now`.
    pub fn value(&self, now: f64) -> usize {
        if !self.enabled || self.duration <= 0.0 {
            return self.target;
        }
        let progress = (now - self.started_at) / self.duration;
        (self.target as f64 * ease_out_quart(progress)).floor() as usize
    }

    pub fn is_finished(&self, now: f64) -> bool {
        !self.enabled || now - self.started_at >= self.duration
    }
}
