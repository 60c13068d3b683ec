/// A scalar that approaches its latest target linearly over a fixed window.
///
/// Sampling is a pure function of (start, target, elapsed, duration), so
/// any number of render ticks see a consistent, monotonic trajectory.
/// Retargeting mid-flight restarts the window from the value currently on
/// screen rather than the original start, so the displayed value never
/// jumps and always converges on the newest target.
#[derive(Clone, Copy, Debug)]
pub struct TimedValue {
    start: f64,
    target: f64,
    started_at_ms: f64,
    duration_ms: f64,
}

impl TimedValue {
    /// A value at rest at `initial`. A `duration_ms` of zero makes every
    /// later `set` take effect instantly.
    pub fn new(initial: f64, duration_ms: f64) -> Self {
        Self {
            start: initial,
            target: initial,
            // At rest: the window is treated as long since elapsed.
            started_at_ms: f64::NEG_INFINITY,
            duration_ms: duration_ms.max(0.0),
        }
    }

    /// Begins a transition toward `target`, starting from whatever value
    /// is displayed at `now_ms`. Supersedes any transition in flight.
    pub fn set(&mut self, target: f64, now_ms: f64) {
        self.start = self.sample(now_ms);
        self.target = target;
        self.started_at_ms = now_ms;
    }

    /// Interpolated value at `now_ms`: the start value at or before the
    /// transition began, the target once the window has elapsed, linear in
    /// between.
    pub fn sample(&self, now_ms: f64) -> f64 {
        let elapsed = now_ms - self.started_at_ms;
        if elapsed >= self.duration_ms {
            self.target
        } else if elapsed <= 0.0 {
            self.start
        } else {
            self.start + (self.target - self.start) * (elapsed / self.duration_ms)
        }
    }

    /// Whether the transition begun by the last `set` has fully played out.
    pub fn is_settled(&self, now_ms: f64) -> bool {
        now_ms - self.started_at_ms >= self.duration_ms
    }
}
