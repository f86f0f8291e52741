//! Scalar tweens with easing curves.

use serde::{Deserialize, Serialize};

/// Easing curve mapping normalized time to normalized progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Ease {
    Linear,
    /// Quartic ease-in: slow start, accelerating.
    InQuart,
    /// Circular ease-out: fast start, decelerating.
    OutCirc,
}

impl Ease {
    /// Progress in `[0, 1]` at normalized time `t`, clamped to `[0, 1]`.
    pub fn apply(self, t: f64) -> f64 {
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
        match self {
            Ease::Linear => t,
            Ease::InQuart => t * t * t * t,
            Ease::OutCirc => (1.0 - (t - 1.0) * (t - 1.0)).sqrt().min(1.0),
        }
    }
}

/// Eases a value from `from` to `to` over `duration` seconds.
///
/// The value lands exactly on `to` once the duration has elapsed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tween {
    from: f64,
    to: f64,
    duration: f64,
    elapsed: f64,
    ease: Ease,
}

impl Tween {
    pub fn new(from: f64, to: f64, duration: f64, ease: Ease) -> Self {
        Self {
            from,
            to,
            duration: if duration.is_finite() { duration.max(0.0) } else { 0.0 },
            elapsed: 0.0,
            ease,
        }
    }

    pub fn value(&self) -> f64 {
        if self.is_finished() {
            return self.to;
        }
        self.from + (self.to - self.from) * self.ease.apply(self.elapsed / self.duration)
    }

    pub fn is_finished(&self) -> bool {
        self.elapsed >= self.duration
    }

    /// Advance by `dt` seconds and return the time left over past the end.
    pub fn advance(&mut self, dt: f64) -> f64 {
        let dt = dt.max(0.0);
        let remaining = self.duration - self.elapsed;
        if dt >= remaining {
            self.elapsed = self.duration;
            dt - remaining.max(0.0)
        } else {
            self.elapsed += dt;
            0.0
        }
    }
}
