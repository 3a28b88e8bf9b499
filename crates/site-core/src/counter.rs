use crate::constants::COUNTER_TICK_MS;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CounterFrame {
    pub text: String,
    pub finished: bool,
}

/// Count-up animation advanced by a fixed-rate timer.
///
/// Every tick adds `target / (duration / tick)`; intermediate frames show the
/// floored value and the last frame shows `target` exactly.
#[derive(Clone, Debug)]
pub struct CounterAnimation {
    target: f64,
    increment: f64,
    current: f64,
    finished: bool,
}

impl CounterAnimation {
    pub fn new(target: f64, duration_ms: f64) -> Self {
        let increment = target / (duration_ms / COUNTER_TICK_MS as f64);
        Self {
            target,
            increment,
            current: 0.0,
            finished: false,
        }
    }

    #[inline]
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    pub fn tick(&mut self) -> CounterFrame {
        self.current += self.increment;
        // Non-finite steps would never reach the target.
        if self.finished || self.current >= self.target || !self.increment.is_finite() {
            self.finished = true;
            return CounterFrame {
                text: self.target.to_string(),
                finished: true,
            };
        }
        CounterFrame {
            text: self.current.floor().to_string(),
            finished: false,
        }
    }
}
