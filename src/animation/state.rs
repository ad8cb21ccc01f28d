use std::time::Duration;

/// Which way the in-flight step is moving
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    #[default]
    Idle,
    Forward,
    Backward,
}

/// Outcome of a single [`TransitionState::tick`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickResult {
    /// Step still running; the host should schedule another frame
    Animating,
    /// This tick finished the step
    Settled,
    /// Nothing was running
    Idle,
}

impl TickResult {
    /// Whether the host needs to schedule another tick
    pub fn needs_frame(&self) -> bool {
        matches!(self, TickResult::Animating)
    }

    /// Whether this tick produced a visible change
    pub fn is_changed(&self) -> bool {
        !matches!(self, TickResult::Idle)
    }
}

/// Progress of the single step transition a bar can run at a time.
///
/// Indices run from -1 ("before the first stop") to `dot_count - 1`. While a
/// step is in flight `settled_index` and `target_index` differ by exactly one;
/// when idle they are equal and `elapsed` is zero.
#[derive(Debug, Clone, PartialEq)]
pub struct TransitionState {
    settled_index: i32,
    target_index: i32,
    elapsed: Duration,
    direction: Direction,
}

impl TransitionState {
    pub fn new() -> Self {
        Self {
            settled_index: -1,
            target_index: -1,
            elapsed: Duration::ZERO,
            direction: Direction::Idle,
        }
    }

    /// Start a step toward the next stop. Returns false (and changes
    /// nothing) when already resting on, or heading from, the last stop.
    ///
    /// Calling this mid-step retargets the running step and restarts its clock.
    pub fn advance(&mut self, dot_count: usize) -> bool {
        let last = i32::try_from(dot_count).unwrap_or(i32::MAX) - 1;
        if self.settled_index >= last {
            log::debug!("advance ignored: already at stop {}", self.settled_index);
            return false;
        }
        self.start(self.settled_index + 1, Direction::Forward);
        true
    }

    /// Start a step toward the previous stop. Returns false when already
    /// before the first stop.
    pub fn retreat(&mut self) -> bool {
        if self.settled_index < 0 {
            log::debug!("retreat ignored: already before the first stop");
            return false;
        }
        self.start(self.settled_index - 1, Direction::Backward);
        true
    }

    fn start(&mut self, target: i32, direction: Direction) {
        if self.direction != Direction::Idle {
            log::debug!(
                "retargeting step {} -> {} to {} -> {}",
                self.settled_index,
                self.target_index,
                self.settled_index,
                target
            );
        } else {
            log::debug!("step {} -> {} started", self.settled_index, target);
        }
        self.target_index = target;
        self.direction = direction;
        self.elapsed = Duration::ZERO;
    }

    /// Advance the running step by `delta`. Settles once `step_duration`
    /// has elapsed.
    pub fn tick(&mut self, delta: Duration, step_duration: Duration) -> TickResult {
        if self.direction == Direction::Idle {
            return TickResult::Idle;
        }

        self.elapsed = self.elapsed.saturating_add(delta);
        log::trace!(
            "tick {:?}: {:?}/{:?} toward {}",
            self.direction,
            self.elapsed,
            step_duration,
            self.target_index
        );

        if self.elapsed >= step_duration {
            log::debug!(
                "step {} -> {} settled",
                self.settled_index,
                self.target_index
            );
            self.settled_index = self.target_index;
            self.elapsed = Duration::ZERO;
            self.direction = Direction::Idle;
            TickResult::Settled
        } else {
            TickResult::Animating
        }
    }

    /// Normalized step time in `[0, 1]`
    pub fn progress(&self, step_duration: Duration) -> f32 {
        normalized_time(self.elapsed, step_duration)
    }

    pub fn settled_index(&self) -> i32 {
        self.settled_index
    }

    pub fn target_index(&self) -> i32 {
        self.target_index
    }

    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn is_animating(&self) -> bool {
        self.direction != Direction::Idle
    }

    /// Highest stop that stays fully painted for the whole step
    pub fn static_index(&self) -> i32 {
        self.settled_index.min(self.target_index)
    }
}

impl Default for TransitionState {
    fn default() -> Self {
        Self::new()
    }
}

/// `elapsed / step_duration` clamped to `[0, 1]`.
///
/// Divides whole nanoseconds in f64 so that ratios like 36/40 land on the
/// nearest f32 instead of picking up error from two lossy conversions.
pub fn normalized_time(elapsed: Duration, step_duration: Duration) -> f32 {
    let total = step_duration.as_nanos();
    if total == 0 || elapsed >= step_duration {
        return 1.0;
    }
    (elapsed.as_nanos() as f64 / total as f64) as f32
}
